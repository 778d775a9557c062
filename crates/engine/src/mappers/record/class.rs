use charsmith_domain::{
    Class, ClassLevel, Feature, FeatureSpecific, LevelSpellcasting, StartingEquipment, Subclass,
    SubclassSpell,
};
use charsmith_shared::records::{ClassLevelRecord, ClassRecord, FeatureRecord, SubclassRecord};

use super::common::{BaseResourceRecordMapper, ResourceReferenceRecordMapper};
use crate::mappers::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassRecordMapper {
    base: BaseResourceRecordMapper,
    reference: ResourceReferenceRecordMapper,
}

impl Mapper<ClassRecord, Class> for ClassRecordMapper {
    fn map(&self, source: &ClassRecord) -> Class {
        Class {
            base: self.base.map(&source.base),
            hit_die: source.hit_die,
            proficiency_choices: source.proficiency_choices.clone(),
            proficiencies: self.reference.map_all(&source.proficiencies),
            saving_throws: self.reference.map_all(&source.saving_throws),
            starting_equipment: source
                .starting_equipment
                .iter()
                .map(|e| StartingEquipment {
                    equipment: self.reference.map(&e.equipment),
                    quantity: e.quantity,
                })
                .collect(),
            starting_equipment_options: source.starting_equipment_options.clone(),
            subclasses: self.reference.map_all(&source.subclasses),
            spellcasting: None,
            multi_classing: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubclassRecordMapper {
    base: BaseResourceRecordMapper,
    reference: ResourceReferenceRecordMapper,
}

impl SubclassRecordMapper {
    pub fn new(base: BaseResourceRecordMapper, reference: ResourceReferenceRecordMapper) -> Self {
        Self { base, reference }
    }
}

impl Mapper<SubclassRecord, Subclass> for SubclassRecordMapper {
    fn map(&self, source: &SubclassRecord) -> Subclass {
        Subclass {
            base: self.base.map(&source.base),
            class: self.reference.map(&source.class),
            subclass_flavor: source.subclass_flavor.clone(),
            desc: source.desc.clone(),
            spells: source
                .spells
                .iter()
                .map(|s| SubclassSpell {
                    prerequisites: self.reference.map_all(&s.prerequisites),
                    spell: self.reference.map(&s.spell),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureRecordMapper {
    base: BaseResourceRecordMapper,
    reference: ResourceReferenceRecordMapper,
}

impl Mapper<FeatureRecord, Feature> for FeatureRecordMapper {
    fn map(&self, source: &FeatureRecord) -> Feature {
        Feature {
            base: self.base.map(&source.base),
            level: source.level,
            class: self.reference.map(&source.class),
            subclass: self.reference.map_option(source.subclass.as_ref()),
            parent: self.reference.map_option(source.parent.as_ref()),
            desc: source.desc.clone(),
            prerequisites: source.prerequisites.clone(),
            feature_specific: source.subfeature_options.as_ref().map(|options| FeatureSpecific {
                subfeature_options: Some(options.clone()),
                expertise_options: None,
                invocations: Vec::new(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassLevelRecordMapper {
    base: BaseResourceRecordMapper,
    reference: ResourceReferenceRecordMapper,
}

impl Mapper<ClassLevelRecord, ClassLevel> for ClassLevelRecordMapper {
    fn map(&self, source: &ClassLevelRecord) -> ClassLevel {
        let casts = !source.spell_slots.is_empty()
            || source.cantrips_known.is_some()
            || source.spells_known.is_some();

        ClassLevel {
            base: self.base.map(&source.base),
            level: source.level,
            ability_score_bonuses: source.ability_score_bonuses,
            prof_bonus: source.prof_bonus,
            features: self.reference.map_all(&source.features),
            class: self.reference.map(&source.class),
            subclass: self.reference.map_option(source.subclass.as_ref()),
            spellcasting: casts.then(|| LevelSpellcasting {
                cantrips_known: source.cantrips_known,
                spells_known: source.spells_known,
                spell_slots: source.spell_slots.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsmith_domain::ResourceType;
    use charsmith_shared::records::{BaseResourceRecord, ResourceReferenceRecord};
    use uuid::Uuid;

    fn reference(id: &str, name: &str) -> ResourceReferenceRecord {
        ResourceReferenceRecord {
            id: id.into(),
            name: name.into(),
        }
    }

    #[test]
    fn non_caster_level_has_no_spellcasting() {
        let record = ClassLevelRecord {
            base: BaseResourceRecord::new(Uuid::new_v4(), "Brawler 2", ResourceType::ClassLevels),
            level: 2,
            ability_score_bonuses: None,
            prof_bonus: Some(2),
            features: vec![reference("extra-punch", "Extra Punch")],
            class: reference("brawler", "Brawler"),
            subclass: None,
            spell_slots: Vec::new(),
            cantrips_known: None,
            spells_known: None,
        };

        let level = ClassLevelRecordMapper::default().map(&record);
        assert!(level.base.is_homebrew);
        assert!(level.spellcasting.is_none());
        assert_eq!(level.features[0].id, "extra-punch");
    }

    #[test]
    fn subclass_spells_keep_prerequisites() {
        let record = SubclassRecord {
            base: BaseResourceRecord::new(Uuid::new_v4(), "Oath of Rust", ResourceType::Subclasses),
            class: reference("paladin", "Paladin"),
            subclass_flavor: "Sacred Oath".into(),
            desc: vec!["Corrodes all it touches.".into()],
            spells: vec![charsmith_shared::records::SubclassSpellRecord {
                prerequisites: vec![reference("paladin-3", "Paladin 3")],
                spell: reference("acid-splash", "Acid Splash"),
            }],
        };

        let subclass = SubclassRecordMapper::default().map(&record);
        assert_eq!(subclass.spells[0].prerequisites[0].id, "paladin-3");
        assert_eq!(subclass.class.name, "Paladin");
    }
}
