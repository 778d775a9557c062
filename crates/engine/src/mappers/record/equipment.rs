use charsmith_domain::{Armor, ResourceReference, Skill, Weapon};
use charsmith_shared::records::{ArmorRecord, SkillRecord, WeaponRecord};

use super::common::{BaseResourceRecordMapper, ResourceReferenceRecordMapper};
use crate::mappers::Mapper;

/// Category reference homebrew weapons are filed under.
pub fn weapon_category() -> ResourceReference {
    ResourceReference::new("weapon", "Weapon")
}

pub fn armor_category() -> ResourceReference {
    ResourceReference::new("armor", "Armor")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeaponRecordMapper {
    base: BaseResourceRecordMapper,
    reference: ResourceReferenceRecordMapper,
}

impl Mapper<WeaponRecord, Weapon> for WeaponRecordMapper {
    fn map(&self, source: &WeaponRecord) -> Weapon {
        Weapon {
            base: self.base.map(&source.base),
            equipment_category: weapon_category(),
            weapon_category: source.weapon_category.clone(),
            weapon_range: source.weapon_range.clone(),
            category_range: format!("{} {}", source.weapon_category, source.weapon_range),
            cost: source.cost.clone(),
            damage: source.damage.clone(),
            two_handed_damage: source.two_handed_damage.clone(),
            range: source.range,
            throw_range: source.throw_range,
            weight: source.weight,
            properties: self.reference.map_all(&source.properties),
            desc: source.desc.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArmorRecordMapper {
    base: BaseResourceRecordMapper,
}

impl Mapper<ArmorRecord, Armor> for ArmorRecordMapper {
    fn map(&self, source: &ArmorRecord) -> Armor {
        Armor {
            base: self.base.map(&source.base),
            equipment_category: armor_category(),
            armor_category: source.armor_category.clone(),
            armor_class: source.armor_class,
            str_minimum: source.str_minimum,
            stealth_disadvantage: source.stealth_disadvantage,
            weight: source.weight,
            cost: source.cost.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SkillRecordMapper {
    base: BaseResourceRecordMapper,
    reference: ResourceReferenceRecordMapper,
}

impl Mapper<SkillRecord, Skill> for SkillRecordMapper {
    fn map(&self, source: &SkillRecord) -> Skill {
        Skill {
            base: self.base.map(&source.base),
            desc: source.desc.clone(),
            ability_score: self.reference.map(&source.ability_score),
        }
    }
}
