//! Reference API payloads (`{base}/api/...`).

mod choice;
mod class;
mod common;
mod equipment;
mod race;
mod skill;
mod traits;

pub use choice::{
    ActionCountDto, ChoiceDto, DifficultyClassDto, OptionDto, OptionPrerequisiteDto, OptionSetDto,
};
pub use class::{
    AbilityPrerequisiteDto, ClassDto, ClassLevelDto, FeatureDto, FeaturePrerequisiteDto,
    FeatureSpecificDto, LevelSpellcastingDto, MulticlassingDto, SpellcastingDto,
    SpellcastingInfoDto, StartingEquipmentDto, SubclassDto, SubclassSpellDto,
};
pub use common::{AbilityBonusDto, ApiBaseDto, ApiReferenceDto, CostDto, DamageDto, ResourceListDto};
pub use equipment::{ArmorClassDto, ArmorDto, EquipmentCategoryDto, RangeDto, WeaponDto};
pub use race::{RaceDto, SubraceDto};
pub use skill::SkillDto;
pub use traits::{TraitDto, TraitSpecificDto};
