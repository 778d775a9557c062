use charsmith_domain::Choice;
use serde::{Deserialize, Serialize};

use super::base::{AbilityBonusRecord, BaseResourceRecord, ResourceReferenceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    pub speed: u32,
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonusRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_bonus_options: Option<Choice>,
    #[serde(default)]
    pub alignment: String,
    #[serde(default)]
    pub age: String,
    pub size: String,
    #[serde(default)]
    pub size_description: String,
    #[serde(default)]
    pub starting_proficiencies: Vec<ResourceReferenceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_proficiency_options: Option<Choice>,
    #[serde(default)]
    pub languages: Vec<ResourceReferenceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Choice>,
    #[serde(default)]
    pub language_desc: String,
    #[serde(default)]
    pub traits: Vec<ResourceReferenceRecord>,
    #[serde(default)]
    pub subraces: Vec<ResourceReferenceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubraceRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    pub race: ResourceReferenceRecord,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonusRecord>,
    #[serde(default)]
    pub starting_proficiencies: Vec<ResourceReferenceRecord>,
    #[serde(default)]
    pub languages: Vec<ResourceReferenceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Choice>,
    #[serde(default)]
    pub racial_traits: Vec<ResourceReferenceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::StoredResourceType;
    use charsmith_domain::ResourceType;

    #[test]
    fn race_record_reads_flattened_base() {
        let json = r#"{
            "version": 2,
            "id": "0b8e7f1c-6f0a-4c43-8d3b-9a9c2c3e1f00",
            "name": "Kobold",
            "resourceType": 16,
            "notes": "From the swamp campaign",
            "speed": 30,
            "abilityBonuses": [{"abilityScore": {"id": "dex", "name": "DEX"}, "bonus": 2}],
            "size": "Small",
            "languages": [{"id": "common", "name": "Common"}, {"id": "draconic", "name": "Draconic"}],
            "traits": [{"id": "darkvision", "name": "Darkvision"}]
        }"#;
        let record: RaceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.base.name, "Kobold");
        assert_eq!(
            record.base.resource_type,
            StoredResourceType::Current(ResourceType::Races)
        );
        assert_eq!(record.ability_bonuses[0].bonus, 2);
        assert_eq!(record.languages.len(), 2);
        assert_eq!(record.traits[0].id, "darkvision");
        assert!(record.language_options.is_none());
    }
}
