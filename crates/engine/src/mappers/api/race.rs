use charsmith_domain::{Race, ResourceType, Subrace, Trait, TraitSpecific};
use charsmith_shared::api::{RaceDto, SubraceDto, TraitDto};

use super::choice::ChoiceApiMapper;
use super::common::{AbilityBonusApiMapper, BaseResourceApiMapper, ResourceReferenceApiMapper};
use crate::mappers::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct RaceApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
    ability_bonus: AbilityBonusApiMapper,
    choice: ChoiceApiMapper,
}

impl RaceApiMapper {
    pub fn new(
        base: BaseResourceApiMapper,
        reference: ResourceReferenceApiMapper,
        ability_bonus: AbilityBonusApiMapper,
        choice: ChoiceApiMapper,
    ) -> Self {
        Self {
            base,
            reference,
            ability_bonus,
            choice,
        }
    }
}

impl Mapper<RaceDto, Race> for RaceApiMapper {
    fn map(&self, source: &RaceDto) -> Race {
        Race {
            base: self
                .base
                .map(&source.base)
                .with_resource_type(ResourceType::Races),
            speed: source.speed,
            ability_bonuses: self.ability_bonus.map_all(&source.ability_bonuses),
            ability_bonus_options: self.choice.map_option(source.ability_bonus_options.as_ref()),
            alignment: source.alignment.clone(),
            age: source.age.clone(),
            size: source.size.clone(),
            size_description: source.size_description.clone(),
            starting_proficiencies: self.reference.map_all(&source.starting_proficiencies),
            starting_proficiency_options: self
                .choice
                .map_option(source.starting_proficiency_options.as_ref()),
            languages: self.reference.map_all(&source.languages),
            language_options: self.choice.map_option(source.language_options.as_ref()),
            language_desc: source.language_desc.clone(),
            traits: self.reference.map_all(&source.traits),
            subraces: self.reference.map_all(&source.subraces),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubraceApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
    ability_bonus: AbilityBonusApiMapper,
    choice: ChoiceApiMapper,
}

impl Mapper<SubraceDto, Subrace> for SubraceApiMapper {
    fn map(&self, source: &SubraceDto) -> Subrace {
        Subrace {
            base: self
                .base
                .map(&source.base)
                .with_resource_type(ResourceType::Subraces),
            race: self.reference.map(&source.race),
            desc: source.desc.clone(),
            ability_bonuses: self.ability_bonus.map_all(&source.ability_bonuses),
            starting_proficiencies: self.reference.map_all(&source.starting_proficiencies),
            languages: self.reference.map_all(&source.languages),
            language_options: self.choice.map_option(source.language_options.as_ref()),
            racial_traits: self.reference.map_all(&source.racial_traits),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TraitApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
    choice: ChoiceApiMapper,
}

impl Mapper<TraitDto, Trait> for TraitApiMapper {
    fn map(&self, source: &TraitDto) -> Trait {
        Trait {
            base: self
                .base
                .map(&source.base)
                .with_resource_type(ResourceType::Traits),
            races: self.reference.map_all(&source.races),
            subraces: self.reference.map_all(&source.subraces),
            desc: source.desc.clone(),
            proficiencies: self.reference.map_all(&source.proficiencies),
            proficiency_choices: self.choice.map_option(source.proficiency_choices.as_ref()),
            language_options: self.choice.map_option(source.language_options.as_ref()),
            parent: self.reference.map_option(source.parent.as_ref()),
            trait_specific: source.trait_specific.as_ref().map(|specific| TraitSpecific {
                subtrait_options: self.choice.map_option(specific.subtrait_options.as_ref()),
                spell_options: self.choice.map_option(specific.spell_options.as_ref()),
                damage_type: self.reference.map_option(specific.damage_type.as_ref()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsmith_domain::{HasBaseResource, ResourceReference};

    const ELF: &str = r#"{
        "index": "elf",
        "name": "Elf",
        "speed": 30,
        "ability_bonuses": [{"ability_score": {"index": "dex", "name": "DEX", "url": "/api/ability-scores/dex"}, "bonus": 2}],
        "alignment": "Elves love freedom.",
        "age": "Elves reach adulthood around 100.",
        "size": "Medium",
        "size_description": "Elves range from under 5 to over 6 feet tall.",
        "starting_proficiencies": [{"index": "skill-perception", "name": "Skill: Perception", "url": "/api/proficiencies/skill-perception"}],
        "languages": [
            {"index": "common", "name": "Common", "url": "/api/languages/common"},
            {"index": "elvish", "name": "Elvish", "url": "/api/languages/elvish"}
        ],
        "language_desc": "You can speak, read, and write Common and Elvish.",
        "traits": [
            {"index": "darkvision", "name": "Darkvision", "url": "/api/traits/darkvision"},
            {"index": "fey-ancestry", "name": "Fey Ancestry", "url": "/api/traits/fey-ancestry"}
        ],
        "subraces": [{"index": "high-elf", "name": "High Elf", "url": "/api/subraces/high-elf"}],
        "url": "/api/races/elf"
    }"#;

    #[test]
    fn race_projection_is_lossless() {
        let dto: RaceDto = serde_json::from_str(ELF).unwrap();
        let race = RaceApiMapper::default().map(&dto);

        assert_eq!(race.id(), "elf");
        assert_eq!(race.base.url.as_deref(), Some("/api/races/elf"));
        assert_eq!(race.base.resource_type, Some(ResourceType::Races));
        assert!(!race.is_homebrew());
        assert_eq!(race.speed, 30);
        assert_eq!(race.fixed_bonus_for("dex"), 2);
        assert_eq!(race.size, "Medium");
        assert_eq!(race.age, dto.age);
        assert_eq!(race.alignment, dto.alignment);
        assert_eq!(race.size_description, dto.size_description);
        assert_eq!(race.language_desc, dto.language_desc);
        assert_eq!(race.starting_proficiencies.len(), 1);
        assert_eq!(race.languages[1], ResourceReference::new("elvish", "Elvish"));
        assert_eq!(race.traits.len(), 2);
        assert_eq!(race.traits[1].id, "fey-ancestry");
        assert_eq!(race.subraces[0].id, "high-elf");
        assert!(race.language_options.is_none());
        assert!(race.ability_bonus_options.is_none());
    }

    #[test]
    fn trait_specific_is_mapped_when_present() {
        let dto: TraitDto = serde_json::from_str(
            r#"{
                "index": "breath-weapon",
                "name": "Breath Weapon",
                "races": [{"index": "dragonborn", "name": "Dragonborn"}],
                "desc": ["You can use your action to exhale destructive energy."],
                "trait_specific": {"damage_type": {"index": "fire", "name": "Fire"}}
            }"#,
        )
        .unwrap();

        let mapped = TraitApiMapper::default().map(&dto);
        let specific = mapped.trait_specific.unwrap();
        assert_eq!(specific.damage_type, Some(ResourceReference::new("fire", "Fire")));
        assert!(specific.subtrait_options.is_none());
        assert!(mapped.parent.is_none());
    }
}
