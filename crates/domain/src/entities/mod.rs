//! Domain entities - the unified shape of every ruleset resource

mod ability_bonus;
mod base_resource;
mod choice;
mod class;
mod class_level;
mod equipment;
mod feature;
mod race;
mod racial_trait;
mod resource_reference;
mod skill;
mod subclass;
mod subrace;

pub use ability_bonus::AbilityBonus;
pub use base_resource::{BaseResource, HasBaseResource, ResourceList};
pub use choice::{
    ActionCount, Choice, ChoiceOption, DifficultyClass, OptionPrerequisite, OptionSet, OptionType,
};
pub use class::{
    AbilityPrerequisite, Class, Multiclassing, Spellcasting, SpellcastingInfo, StartingEquipment,
};
pub use class_level::{ClassLevel, LevelSpellcasting};
pub use equipment::{Armor, ArmorClass, Cost, Damage, Weapon, WeaponRange};
pub use feature::{Feature, FeaturePrerequisite, FeatureSpecific};
pub use race::Race;
pub use racial_trait::{Trait, TraitSpecific};
pub use resource_reference::ResourceReference;
pub use skill::Skill;
pub use subclass::{Subclass, SubclassSpell};
pub use subrace::Subrace;
