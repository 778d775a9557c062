//! Reference API DTO -> domain.

mod choice;
mod class;
mod common;
mod equipment;
mod race;
mod skill;

pub use choice::ChoiceApiMapper;
pub use class::{ClassApiMapper, ClassLevelApiMapper, FeatureApiMapper, SubclassApiMapper};
pub use common::{AbilityBonusApiMapper, BaseResourceApiMapper, ResourceReferenceApiMapper};
pub use equipment::{ArmorApiMapper, WeaponApiMapper};
pub use race::{RaceApiMapper, SubraceApiMapper, TraitApiMapper};
pub use skill::SkillApiMapper;
