use charsmith_domain::{AbilityBonus, BaseResource, Cost, Damage, ResourceReference, WeaponRange};
use charsmith_shared::api::{
    AbilityBonusDto, ApiBaseDto, ApiReferenceDto, CostDto, DamageDto, RangeDto,
};

use crate::mappers::Mapper;

/// Identity fields of an API payload. The result is untyped and never homebrew.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseResourceApiMapper;

impl Mapper<ApiBaseDto, BaseResource> for BaseResourceApiMapper {
    fn map(&self, source: &ApiBaseDto) -> BaseResource {
        BaseResource {
            id: source.index.clone(),
            name: source.name.clone(),
            url: source.url.clone(),
            resource_type: None,
            is_homebrew: false,
            notes: None,
        }
    }
}

impl Mapper<ApiReferenceDto, BaseResource> for BaseResourceApiMapper {
    fn map(&self, source: &ApiReferenceDto) -> BaseResource {
        self.map(&ApiBaseDto::from(source.clone()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceReferenceApiMapper;

impl Mapper<ApiReferenceDto, ResourceReference> for ResourceReferenceApiMapper {
    fn map(&self, source: &ApiReferenceDto) -> ResourceReference {
        ResourceReference::new(source.index.clone(), source.name.clone())
    }
}

impl Mapper<DamageDto, Damage> for ResourceReferenceApiMapper {
    fn map(&self, source: &DamageDto) -> Damage {
        Damage {
            damage_dice: source.damage_dice.clone(),
            damage_type: self.map(&source.damage_type),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AbilityBonusApiMapper {
    reference: ResourceReferenceApiMapper,
}

impl AbilityBonusApiMapper {
    pub fn new(reference: ResourceReferenceApiMapper) -> Self {
        Self { reference }
    }
}

impl Mapper<AbilityBonusDto, AbilityBonus> for AbilityBonusApiMapper {
    fn map(&self, source: &AbilityBonusDto) -> AbilityBonus {
        AbilityBonus {
            ability_score: self.reference.map(&source.ability_score),
            bonus: source.bonus,
        }
    }
}

pub(crate) fn map_cost(source: &CostDto) -> Cost {
    Cost {
        quantity: source.quantity,
        unit: source.unit.clone(),
    }
}

pub(crate) fn map_range(source: &RangeDto) -> WeaponRange {
    WeaponRange {
        normal: source.normal,
        long: source.long,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_mapper_copies_identity() {
        let dto = ApiBaseDto {
            index: "elf".into(),
            name: "Elf".into(),
            url: Some("/api/races/elf".into()),
        };
        let base = BaseResourceApiMapper.map(&dto);
        assert_eq!(base.id, "elf");
        assert_eq!(base.url.as_deref(), Some("/api/races/elf"));
        assert!(!base.is_homebrew);
        assert!(base.resource_type.is_none());
        assert!(base.notes.is_none());
    }

    #[test]
    fn ability_bonus_maps_reference() {
        let dto = AbilityBonusDto {
            ability_score: ApiReferenceDto {
                index: "dex".into(),
                name: "DEX".into(),
                url: Some("/api/ability-scores/dex".into()),
            },
            bonus: 2,
        };
        let bonus = AbilityBonusApiMapper::default().map(&dto);
        assert_eq!(bonus.ability_score, ResourceReference::new("dex", "DEX"));
        assert_eq!(bonus.bonus, 2);
    }
}
