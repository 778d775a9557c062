//! Repositories - the merge point of SRD and homebrew resources.
//!
//! Each repository resolves ids against homebrew storage first and the SRD
//! API second, mapping either source into the domain model.

pub mod armor;
pub mod class_level;
pub mod feature;
pub mod homebrew;
pub mod resource;
pub mod schema;
pub mod weapon;

pub use armor::ArmorRepository;
pub use class_level::ClassLevelRepository;
pub use feature::FeatureRepository;
pub use homebrew::HomebrewRepository;
pub use resource::{
    BaseResourceRepository, ClassRepository, GenericRepository, RaceRepository, SkillRepository,
    SubclassRepository, SubraceRepository, TraitRepository,
};
pub use schema::{
    ArmorSchema, ClassLevelSchema, ClassSchema, FeatureSchema, GenericSchema, RaceSchema,
    ResourceSchema, SkillSchema, SubclassSchema, SubraceSchema, TraitSchema, WeaponSchema,
    ARMOR_CATEGORY, WEAPON_CATEGORY,
};
pub use weapon::WeaponRepository;
