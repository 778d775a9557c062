//! Binding of a resource kind to its DTO, record and domain shapes.

use serde::de::DeserializeOwned;
use serde_json::Value;

use charsmith_domain::{
    Armor, BaseResource, Class, ClassLevel, Feature, HasBaseResource, Race, ResourceType, Skill,
    Subclass, Subrace, Trait, Weapon,
};
use charsmith_shared::api::{
    ApiBaseDto, ArmorDto, ClassDto, ClassLevelDto, FeatureDto, RaceDto, SkillDto, SubclassDto,
    SubraceDto, TraitDto, WeaponDto,
};
use charsmith_shared::records::{
    ArmorRecord, BaseResourceRecord, ClassLevelRecord, ClassRecord, FeatureRecord, RaceRecord,
    SkillRecord, SubclassRecord, SubraceRecord, TraitRecord, WeaponRecord,
};

use crate::mappers::api::{
    ArmorApiMapper, BaseResourceApiMapper, ClassApiMapper, ClassLevelApiMapper, FeatureApiMapper,
    RaceApiMapper, SkillApiMapper, SubclassApiMapper, SubraceApiMapper, TraitApiMapper,
    WeaponApiMapper,
};
use crate::mappers::record::{
    ArmorRecordMapper, ClassLevelRecordMapper, ClassRecordMapper, FeatureRecordMapper,
    GenericRecordMapper, RaceRecordMapper, SkillRecordMapper, SubclassRecordMapper,
    SubraceRecordMapper, TraitRecordMapper, WeaponRecordMapper,
};
use crate::mappers::Mapper;

/// Equipment category listing every SRD weapon.
pub const WEAPON_CATEGORY: &str = "weapon";

/// Equipment category listing every SRD armor piece.
pub const ARMOR_CATEGORY: &str = "armor";

/// Everything a repository needs to know about one resource kind.
pub trait ResourceSchema: Send + Sync {
    type Dto: DeserializeOwned + Send;
    type Record: DeserializeOwned + Send;
    type Domain: HasBaseResource + Send;

    fn resource_type(&self) -> ResourceType;
    fn map_dto(&self, dto: &Self::Dto) -> Self::Domain;
    fn map_record(&self, record: &Self::Record) -> Self::Domain;

    /// Equipment category that lists this kind, for kinds sharing a resource type.
    fn srd_category(&self) -> Option<&'static str> {
        None
    }

    /// Whether an SRD detail body describes this kind.
    fn accepts_dto(&self, _raw: &Value) -> bool {
        true
    }

    /// Whether a stored homebrew body describes this kind.
    fn accepts_record(&self, _raw: &Value) -> bool {
        true
    }
}

macro_rules! define_schema {
    ($(#[$meta:meta])* $name:ident, $rt:ident, $dto:ty, $record:ty, $domain:ty, $api:ty, $rec:ty) => {
        define_schema!(@impl $(#[$meta])* $name, $rt, $dto, $record, $domain, $api, $rec, {});
    };
    (
        $(#[$meta:meta])* $name:ident, $rt:ident, $dto:ty, $record:ty, $domain:ty, $api:ty, $rec:ty;
        category = $category:expr, dto_key = $dto_key:literal, record_key = $record_key:literal
    ) => {
        define_schema!(@impl $(#[$meta])* $name, $rt, $dto, $record, $domain, $api, $rec, {
            fn srd_category(&self) -> Option<&'static str> {
                Some($category)
            }

            fn accepts_dto(&self, raw: &Value) -> bool {
                raw.get($dto_key).is_some()
            }

            fn accepts_record(&self, raw: &Value) -> bool {
                raw.get($record_key).is_some()
            }
        });
    };
    (@impl $(#[$meta:meta])* $name:ident, $rt:ident, $dto:ty, $record:ty, $domain:ty, $api:ty, $rec:ty, { $($kind:tt)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name {
            api: $api,
            record: $rec,
        }

        impl $name {
            pub fn new(api: $api, record: $rec) -> Self {
                Self { api, record }
            }
        }

        impl ResourceSchema for $name {
            type Dto = $dto;
            type Record = $record;
            type Domain = $domain;

            fn resource_type(&self) -> ResourceType {
                ResourceType::$rt
            }

            fn map_dto(&self, dto: &Self::Dto) -> Self::Domain {
                self.api.map(dto)
            }

            fn map_record(&self, record: &Self::Record) -> Self::Domain {
                self.record.map(record)
            }

            $($kind)*
        }
    };
}

define_schema!(RaceSchema, Races, RaceDto, RaceRecord, Race, RaceApiMapper, RaceRecordMapper);
define_schema!(
    SubraceSchema,
    Subraces,
    SubraceDto,
    SubraceRecord,
    Subrace,
    SubraceApiMapper,
    SubraceRecordMapper
);
define_schema!(ClassSchema, Classes, ClassDto, ClassRecord, Class, ClassApiMapper, ClassRecordMapper);
define_schema!(
    SubclassSchema,
    Subclasses,
    SubclassDto,
    SubclassRecord,
    Subclass,
    SubclassApiMapper,
    SubclassRecordMapper
);
define_schema!(TraitSchema, Traits, TraitDto, TraitRecord, Trait, TraitApiMapper, TraitRecordMapper);
define_schema!(
    FeatureSchema,
    Features,
    FeatureDto,
    FeatureRecord,
    Feature,
    FeatureApiMapper,
    FeatureRecordMapper
);
define_schema!(
    /// Levels are listed per class (`/api/classes/{class}/levels`).
    ClassLevelSchema,
    ClassLevels,
    ClassLevelDto,
    ClassLevelRecord,
    ClassLevel,
    ClassLevelApiMapper,
    ClassLevelRecordMapper
);
define_schema!(SkillSchema, Skills, SkillDto, SkillRecord, Skill, SkillApiMapper, SkillRecordMapper);
define_schema!(
    /// Weapons share `equipment` with armor and are told apart by their category field.
    WeaponSchema,
    Equipment,
    WeaponDto,
    WeaponRecord,
    Weapon,
    WeaponApiMapper,
    WeaponRecordMapper;
    category = WEAPON_CATEGORY, dto_key = "weapon_category", record_key = "weaponCategory"
);
define_schema!(
    ArmorSchema,
    Equipment,
    ArmorDto,
    ArmorRecord,
    Armor,
    ArmorApiMapper,
    ArmorRecordMapper;
    category = ARMOR_CATEGORY, dto_key = "armor_category", record_key = "armorCategory"
);

/// Any resource kind without a dedicated shape, chosen at runtime.
#[derive(Debug, Clone, Copy)]
pub struct GenericSchema {
    resource_type: ResourceType,
    api: BaseResourceApiMapper,
    record: GenericRecordMapper,
}

impl GenericSchema {
    pub fn new(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            api: BaseResourceApiMapper,
            record: GenericRecordMapper::default(),
        }
    }
}

impl ResourceSchema for GenericSchema {
    type Dto = ApiBaseDto;
    type Record = BaseResourceRecord;
    type Domain = BaseResource;

    fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    fn map_dto(&self, dto: &Self::Dto) -> Self::Domain {
        self.api.map(dto).with_resource_type(self.resource_type)
    }

    fn map_record(&self, record: &Self::Record) -> Self::Domain {
        self.record.map(record)
    }
}
