//! Homebrew storage record -> domain.

mod class;
mod common;
mod equipment;
mod race;

pub use class::{ClassLevelRecordMapper, ClassRecordMapper, FeatureRecordMapper, SubclassRecordMapper};
pub use common::{
    AbilityBonusRecordMapper, BaseResourceRecordMapper, GenericRecordMapper,
    ResourceReferenceRecordMapper,
};
pub use equipment::{armor_category, weapon_category, ArmorRecordMapper, SkillRecordMapper, WeaponRecordMapper};
pub use race::{RaceRecordMapper, SubraceRecordMapper, TraitRecordMapper};
