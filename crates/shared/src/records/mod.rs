//! Homebrew records as persisted under `homebrew_{id}`.
//!
//! Every record flattens a [`BaseResourceRecord`] and refers to other
//! resources through [`ResourceReferenceRecord`]. Nested value shapes
//! (choices, costs, damage) reuse the domain types directly.

mod base;
mod class;
mod equipment;
mod race;
mod skill;
mod traits;

pub use base::{
    AbilityBonusRecord, BaseResourceRecord, HomebrewRecord, ResourceReferenceRecord,
    StoredResourceType, CURRENT_RECORD_VERSION,
};
pub use class::{
    ClassLevelRecord, ClassRecord, FeatureRecord, StartingEquipmentRecord, SubclassRecord,
    SubclassSpellRecord,
};
pub use equipment::{ArmorRecord, WeaponRecord};
pub use race::{RaceRecord, SubraceRecord};
pub use skill::SkillRecord;
pub use traits::TraitRecord;

macro_rules! impl_homebrew_record {
    ($($record:ty),* $(,)?) => {
        $(
            impl HomebrewRecord for $record {
                fn base(&self) -> &BaseResourceRecord {
                    &self.base
                }
            }
        )*
    };
}

impl_homebrew_record!(
    RaceRecord,
    SubraceRecord,
    ClassRecord,
    SubclassRecord,
    ClassLevelRecord,
    FeatureRecord,
    TraitRecord,
    SkillRecord,
    WeaponRecord,
    ArmorRecord,
);
