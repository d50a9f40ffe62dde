//! Built-in level layouts, in unlock order.

use super::types::LevelDef;

pub static LEVELS: &[LevelDef] = &[
    // Classic 33-hole English board with the centre hole open
    LevelDef {
        name: "English Cross",
        layout: &[
            "..ooo..",
            "..ooo..",
            "ooooooo",
            "ooooooo",
            "ooooooo",
            "..ooo..",
            "..ooo..",
        ],
        start: (3, 3),
    },
    LevelDef {
        name: "Off-Centre Cross",
        layout: &[
            "..ooo..",
            "..ooo..",
            "ooooooo",
            "ooooooo",
            "ooooooo",
            "..ooo..",
            "..ooo..",
        ],
        start: (2, 3),
    },
    LevelDef {
        name: "Diamond",
        layout: &[
            "...o...",
            "..ooo..",
            ".ooooo.",
            "ooooooo",
            ".ooooo.",
            "..ooo..",
            "...o...",
        ],
        start: (3, 3),
    },
    // 37-hole French board
    LevelDef {
        name: "French Octagon",
        layout: &[
            "..ooo..",
            ".ooooo.",
            "ooooooo",
            "ooooooo",
            "ooooooo",
            ".ooooo.",
            "..ooo..",
        ],
        start: (2, 3),
    },
    LevelDef {
        name: "Full Square",
        layout: &[
            "ooooooo",
            "ooooooo",
            "ooooooo",
            "ooooooo",
            "ooooooo",
            "ooooooo",
            "ooooooo",
        ],
        start: (3, 3),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{Level, LevelCatalog};

    #[test]
    fn test_every_builtin_level_is_valid() {
        for (i, def) in LEVELS.iter().enumerate() {
            let level = Level::parse(i + 1, def);
            assert!(level.is_ok(), "{} failed: {:?}", def.name, level.err());
        }
    }

    #[test]
    fn test_builtin_hole_counts() {
        let catalog = LevelCatalog::builtin().unwrap();
        let counts: Vec<usize> = catalog.iter().map(|l| l.hole_count()).collect();
        assert_eq!(counts, vec![33, 33, 25, 37, 49]);
    }

    #[test]
    fn test_level_names_unique() {
        let mut names: Vec<&str> = LEVELS.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LEVELS.len());
    }
}
