//! Level catalog: static layouts and their validation.

mod data;
mod types;

pub use data::LEVELS;
pub use types::{Level, LevelCatalog, LevelDef};
