//! Commit hash and build date, generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        let is_hash = BUILD_COMMIT.len() == 7 && BUILD_COMMIT.chars().all(|c| c.is_ascii_hexdigit());
        assert!(is_hash || BUILD_COMMIT == "unknown", "commit {:?}", BUILD_COMMIT);
    }

    #[test]
    fn test_date_has_dashes_where_expected() {
        if BUILD_DATE != "unknown" {
            let dashes: Vec<usize> = BUILD_DATE.match_indices('-').map(|(i, _)| i).collect();
            assert_eq!(dashes, vec![4, 7], "date {:?}", BUILD_DATE);
        }
    }
}
