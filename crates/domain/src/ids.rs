use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Bank entry IDs
define_id!(CharacterEntryId);

// Homebrew resource IDs (never collide with SRD slugs)
define_id!(HomebrewId);

/// Returns true when `id` has the shape of a locally generated homebrew id.
///
/// SRD indices are lowercase slugs (`half-elf`, `barbarian-1`) and never parse
/// as a UUID, so this is a cheap provenance check for raw string ids.
pub fn is_homebrew_id(id: &str) -> bool {
    Uuid::parse_str(id).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_homebrew_shaped() {
        let id = HomebrewId::new();
        assert!(is_homebrew_id(&id.to_string()));
    }

    #[test]
    fn srd_slugs_are_not_homebrew() {
        assert!(!is_homebrew_id("half-elf"));
        assert!(!is_homebrew_id("barbarian-1"));
    }

    #[test]
    fn id_round_trips_through_string() {
        let id = CharacterEntryId::new();
        let parsed: CharacterEntryId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
