use charsmith_domain::ResourceList;

use crate::infrastructure::ports::RepoError;
use crate::repositories::resource::BaseResourceRepository;
use crate::repositories::schema::ArmorSchema;

pub type ArmorRepository = BaseResourceRepository<ArmorSchema>;

impl BaseResourceRepository<ArmorSchema> {
    /// SRD armor (via the `armor` equipment category) followed by homebrew armor.
    pub async fn get_all_armor(&self) -> Result<ResourceList, RepoError> {
        self.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{HttpResponse, MockHttpPort};
    use crate::repositories::resource::test_support::services;
    use charsmith_domain::{ArmorClass, Cost, ResourceType, WeaponRange};
    use charsmith_shared::records::{ArmorRecord, BaseResourceRecord, WeaponRecord};
    use uuid::Uuid;

    fn gp(quantity: u32) -> Cost {
        Cost {
            quantity,
            unit: "gp".into(),
        }
    }

    fn hide_cloak() -> ArmorRecord {
        ArmorRecord {
            base: BaseResourceRecord::new(Uuid::new_v4(), "Hide Cloak", ResourceType::Equipment),
            armor_category: "Light".into(),
            armor_class: ArmorClass {
                base: 12,
                dex_bonus: true,
                max_bonus: None,
            },
            str_minimum: 0,
            stealth_disadvantage: false,
            weight: Some(6.0),
            cost: gp(15),
        }
    }

    fn bone_spear() -> WeaponRecord {
        WeaponRecord {
            base: BaseResourceRecord::new(Uuid::new_v4(), "Bone Spear", ResourceType::Equipment),
            weapon_category: "Simple".into(),
            weapon_range: "Melee".into(),
            cost: gp(1),
            damage: None,
            two_handed_damage: None,
            range: WeaponRange {
                normal: 5,
                long: None,
            },
            throw_range: None,
            weight: Some(3.0),
            properties: vec![],
            desc: vec![],
        }
    }

    #[tokio::test]
    async fn lists_srd_and_homebrew_armor_only() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .withf(|url| url.ends_with("/api/equipment-categories/armor"))
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::ok(
                    r#"{"index": "armor", "name": "Armor", "equipment": [
                        {"index": "padded-armor", "name": "Padded Armor", "url": "/api/equipment/padded-armor"},
                        {"index": "leather-armor", "name": "Leather Armor", "url": "/api/equipment/leather-armor"}
                    ]}"#,
                ))
            });
        let (srd, homebrew) = services(http);
        let cloak = hide_cloak();
        let spear = bone_spear();
        homebrew.save(&cloak.base.id.to_string(), &cloak).unwrap();
        homebrew.save(&spear.base.id.to_string(), &spear).unwrap();

        let repo = ArmorRepository::new(ArmorSchema::default(), srd, homebrew);
        let armor = repo.get_all_armor().await.unwrap();

        let names: Vec<&str> = armor.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Padded Armor", "Leather Armor", "Hide Cloak"]);
    }

    #[tokio::test]
    async fn weapons_are_not_armor() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .withf(|url| url.ends_with("/api/equipment/club"))
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::ok(
                    r#"{"index": "club", "name": "Club",
                        "equipment_category": {"index": "weapon", "name": "Weapon"},
                        "weapon_category": "Simple", "weapon_range": "Melee",
                        "cost": {"quantity": 1, "unit": "sp"},
                        "range": {"normal": 5}, "weight": 2}"#,
                ))
            });
        let (srd, homebrew) = services(http);
        let spear = bone_spear();
        let spear_id = spear.base.id.to_string();
        homebrew.save(&spear_id, &spear).unwrap();

        let repo = ArmorRepository::new(ArmorSchema::default(), srd, homebrew);
        assert!(repo.get("club").await.unwrap().is_none());
        assert!(repo.get(&spear_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn homebrew_armor_resolves() {
        let mut http = MockHttpPort::new();
        http.expect_get().times(0);
        let (srd, homebrew) = services(http);
        let cloak = hide_cloak();
        let id = cloak.base.id.to_string();
        homebrew.save(&id, &cloak).unwrap();

        let repo = ArmorRepository::new(ArmorSchema::default(), srd, homebrew);
        let armor = repo.get(&id).await.unwrap().unwrap();
        assert_eq!(armor.base.name, "Hide Cloak");
        assert!(armor.base.is_homebrew);
    }
}
