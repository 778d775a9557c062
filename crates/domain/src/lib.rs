//! Charsmith domain model.
//!
//! Every ruleset object, whether fetched from the SRD reference API or
//! authored locally as homebrew, is represented here in one shape built
//! around [`BaseResource`]. The engine crate maps wire DTOs and storage
//! records into these types.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod types;

pub use entities::{
    AbilityBonus, AbilityPrerequisite, ActionCount, Armor, ArmorClass, BaseResource, Choice,
    ChoiceOption, Class, ClassLevel, Cost, Damage, DifficultyClass, Feature, FeaturePrerequisite,
    FeatureSpecific, HasBaseResource, LevelSpellcasting, Multiclassing, OptionPrerequisite,
    OptionSet, OptionType, Race, ResourceList, ResourceReference, Skill, Spellcasting,
    SpellcastingInfo, StartingEquipment, Subclass, SubclassSpell, Subrace, Trait, TraitSpecific,
    Weapon, WeaponRange,
};

pub use aggregates::{AbilityScores, CharacterClass, PlayerCharacter};
pub use error::DomainError;
pub use ids::{is_homebrew_id, CharacterEntryId, HomebrewId};
pub use types::{Ability, ResourceType};
