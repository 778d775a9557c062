use charsmith_domain::{Armor, ArmorClass, ResourceType, Weapon};
use charsmith_shared::api::{ArmorDto, WeaponDto};

use super::common::{map_cost, map_range, BaseResourceApiMapper, ResourceReferenceApiMapper};
use crate::mappers::Mapper;

/// Weapons and armor are both `equipment` in the API.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeaponApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
}

impl Mapper<WeaponDto, Weapon> for WeaponApiMapper {
    fn map(&self, source: &WeaponDto) -> Weapon {
        Weapon {
            base: self
                .base
                .map(&source.base)
                .with_resource_type(ResourceType::Equipment),
            equipment_category: self.reference.map(&source.equipment_category),
            weapon_category: source.weapon_category.clone(),
            weapon_range: source.weapon_range.clone(),
            category_range: source.category_range.clone(),
            cost: map_cost(&source.cost),
            damage: self.reference.map_option(source.damage.as_ref()),
            two_handed_damage: self.reference.map_option(source.two_handed_damage.as_ref()),
            range: map_range(&source.range),
            throw_range: source.throw_range.as_ref().map(map_range),
            weight: source.weight,
            properties: self.reference.map_all(&source.properties),
            desc: source.desc.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArmorApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
}

impl Mapper<ArmorDto, Armor> for ArmorApiMapper {
    fn map(&self, source: &ArmorDto) -> Armor {
        Armor {
            base: self
                .base
                .map(&source.base)
                .with_resource_type(ResourceType::Equipment),
            equipment_category: self.reference.map(&source.equipment_category),
            armor_category: source.armor_category.clone(),
            armor_class: ArmorClass {
                base: source.armor_class.base,
                dex_bonus: source.armor_class.dex_bonus,
                max_bonus: source.armor_class.max_bonus,
            },
            str_minimum: source.str_minimum,
            stealth_disadvantage: source.stealth_disadvantage,
            weight: source.weight,
            cost: map_cost(&source.cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapier_is_finesse() {
        let dto: WeaponDto = serde_json::from_str(
            r#"{
                "index": "rapier",
                "name": "Rapier",
                "equipment_category": {"index": "weapon", "name": "Weapon"},
                "weapon_category": "Martial",
                "weapon_range": "Melee",
                "category_range": "Martial Melee",
                "cost": {"quantity": 25, "unit": "gp"},
                "damage": {"damage_dice": "1d8", "damage_type": {"index": "piercing", "name": "Piercing"}},
                "range": {"normal": 5},
                "weight": 2,
                "properties": [{"index": "finesse", "name": "Finesse"}],
                "url": "/api/equipment/rapier"
            }"#,
        )
        .unwrap();

        let weapon = WeaponApiMapper::default().map(&dto);
        assert!(weapon.is_finesse());
        assert_eq!(weapon.cost.quantity, 25);
        assert_eq!(weapon.damage.unwrap().damage_dice, "1d8");
        assert!(weapon.two_handed_damage.is_none());
        assert_eq!(weapon.range.long, None);
        assert!(weapon.throw_range.is_none());
    }

    #[test]
    fn armor_class_is_copied() {
        let dto: ArmorDto = serde_json::from_str(
            r#"{
                "index": "scale-mail",
                "name": "Scale Mail",
                "equipment_category": {"index": "armor", "name": "Armor"},
                "armor_category": "Medium",
                "armor_class": {"base": 14, "dex_bonus": true, "max_bonus": 2},
                "str_minimum": 0,
                "stealth_disadvantage": true,
                "weight": 45,
                "cost": {"quantity": 50, "unit": "gp"}
            }"#,
        )
        .unwrap();

        let armor = ArmorApiMapper::default().map(&dto);
        assert_eq!(armor.armor_class.value_for(3), 16);
        assert!(armor.stealth_disadvantage);
    }
}
