//! Resource categories of the ruleset and their API path segments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Category tag carried by every resource.
///
/// Persisted as its ordinal (`u8`) in storage records. Older records stored the
/// API path string instead; see `StoredResourceType` in the shared crate for
/// how both shapes are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ResourceType {
    AbilityScores = 0,
    Alignments = 1,
    Backgrounds = 2,
    Classes = 3,
    Conditions = 4,
    DamageTypes = 5,
    Equipment = 6,
    EquipmentCategories = 7,
    Feats = 8,
    Features = 9,
    Languages = 10,
    ClassLevels = 11,
    MagicItems = 12,
    MagicSchools = 13,
    Monsters = 14,
    Proficiencies = 15,
    Races = 16,
    RuleSections = 17,
    Rules = 18,
    Skills = 19,
    Spells = 20,
    Subclasses = 21,
    Subraces = 22,
    Traits = 23,
    WeaponProperties = 24,
}

impl ResourceType {
    pub const ALL: [ResourceType; 25] = [
        Self::AbilityScores,
        Self::Alignments,
        Self::Backgrounds,
        Self::Classes,
        Self::Conditions,
        Self::DamageTypes,
        Self::Equipment,
        Self::EquipmentCategories,
        Self::Feats,
        Self::Features,
        Self::Languages,
        Self::ClassLevels,
        Self::MagicItems,
        Self::MagicSchools,
        Self::Monsters,
        Self::Proficiencies,
        Self::Races,
        Self::RuleSections,
        Self::Rules,
        Self::Skills,
        Self::Spells,
        Self::Subclasses,
        Self::Subraces,
        Self::Traits,
        Self::WeaponProperties,
    ];

    /// URL path segment used by the reference API (`/api/{path}`).
    ///
    /// This is also the free-text form older storage records used.
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::AbilityScores => "ability-scores",
            Self::Alignments => "alignments",
            Self::Backgrounds => "backgrounds",
            Self::Classes => "classes",
            Self::Conditions => "conditions",
            Self::DamageTypes => "damage-types",
            Self::Equipment => "equipment",
            Self::EquipmentCategories => "equipment-categories",
            Self::Feats => "feats",
            Self::Features => "features",
            Self::Languages => "languages",
            Self::ClassLevels => "levels",
            Self::MagicItems => "magic-items",
            Self::MagicSchools => "magic-schools",
            Self::Monsters => "monsters",
            Self::Proficiencies => "proficiencies",
            Self::Races => "races",
            Self::RuleSections => "rule-sections",
            Self::Rules => "rules",
            Self::Skills => "skills",
            Self::Spells => "spells",
            Self::Subclasses => "subclasses",
            Self::Subraces => "subraces",
            Self::Traits => "traits",
            Self::WeaponProperties => "weapon-properties",
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_path())
    }
}

impl FromStr for ResourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|rt| rt.api_path() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown resource type: {}", s)))
    }
}

impl TryFrom<u8> for ResourceType {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown resource type ordinal: {}", value)))
    }
}

impl From<ResourceType> for u8 {
    fn from(value: ResourceType) -> Self {
        value.ordinal()
    }
}
