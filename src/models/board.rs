use serde::{Deserialize, Serialize};

/// One entry of the board catalog: a name plus a display glyph.
/// The catalog is small, user-extensible, and persisted as its own snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub icon: String,
}

impl Board {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// The four preset boards a fresh catalog starts with.
pub fn default_boards() -> Vec<Board> {
    vec![
        Board::new("Shortboard", "🏄‍♂️"),
        Board::new("Longboard", "🏄‍♀️"),
        Board::new("Fish", "🐟"),
        Board::new("Funboard", "🦈"),
    ]
}

/// Look a board up by exact name.
pub fn find_board<'a>(catalog: &'a [Board], name: &str) -> Option<&'a Board> {
    catalog.iter().find(|b| b.name == name)
}
