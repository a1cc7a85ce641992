//! Types of cone an ice cream can be served in

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConeType {
    Cake,
    Sugar,
    Waffle,
}

impl ConeType {
    /// Returns all the possible values of ConeType, in menu order
    pub fn values() -> Vec<ConeType> {
        vec![ConeType::Cake, ConeType::Sugar, ConeType::Waffle]
    }

    /// Maps a menu choice (1, 2 or 3) to its cone
    pub fn from_choice(choice: u32) -> Option<ConeType> {
        match choice {
            1 => Some(ConeType::Cake),
            2 => Some(ConeType::Sugar),
            3 => Some(ConeType::Waffle),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConeType::Cake => "cake",
            ConeType::Sugar => "sugar",
            ConeType::Waffle => "waffle",
        }
    }
}

impl fmt::Display for ConeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConeType::Cake => write!(f, "Cake"),
            ConeType::Sugar => write!(f, "Sugar"),
            ConeType::Waffle => write!(f, "Waffle"),
        }
    }
}
