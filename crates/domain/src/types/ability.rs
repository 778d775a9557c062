//! The six ability scores.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Self::Str,
        Self::Dex,
        Self::Con,
        Self::Int,
        Self::Wis,
        Self::Cha,
    ];

    /// SRD index of the ability score resource (`/api/ability-scores/{index}`).
    pub fn index(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Dex => "dex",
            Self::Con => "con",
            Self::Int => "int",
            Self::Wis => "wis",
            Self::Cha => "cha",
        }
    }

    /// Ability modifier for a score: `floor((score - 10) / 2)`.
    pub fn modifier(score: i32) -> i32 {
        (score - 10).div_euclid(2)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.index())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "str" | "strength" => Ok(Self::Str),
            "dex" | "dexterity" => Ok(Self::Dex),
            "con" | "constitution" => Ok(Self::Con),
            "int" | "intelligence" => Ok(Self::Int),
            "wis" | "wisdom" => Ok(Self::Wis),
            "cha" | "charisma" => Ok(Self::Cha),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}
