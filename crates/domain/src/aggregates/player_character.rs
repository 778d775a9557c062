//! PlayerCharacter aggregate - all editable state for one character
//!
//! Mutators here are pure in-memory edits. Persistence is the job of the
//! owning bank, which wraps every mutation in a load-mutate-save step so no
//! caller ever has to remember an explicit save.

use serde::{Deserialize, Serialize};

use crate::entities::{ResourceReference, Skill};
use crate::error::DomainError;
use crate::types::Ability;

/// Lowest and highest legal ability score.
pub const MIN_ABILITY_SCORE: i32 = 1;
pub const MAX_ABILITY_SCORE: i32 = 30;

/// Baseline score for every ability on a fresh character.
pub const DEFAULT_ABILITY_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub str: i32,
    pub dex: i32,
    pub con: i32,
    pub int: i32,
    pub wis: i32,
    pub cha: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            str: DEFAULT_ABILITY_SCORE,
            dex: DEFAULT_ABILITY_SCORE,
            con: DEFAULT_ABILITY_SCORE,
            int: DEFAULT_ABILITY_SCORE,
            wis: DEFAULT_ABILITY_SCORE,
            cha: DEFAULT_ABILITY_SCORE,
        }
    }
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.str,
            Ability::Dex => self.dex,
            Ability::Con => self.con,
            Ability::Int => self.int,
            Ability::Wis => self.wis,
            Ability::Cha => self.cha,
        }
    }

    fn slot_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Str => &mut self.str,
            Ability::Dex => &mut self.dex,
            Ability::Con => &mut self.con,
            Ability::Int => &mut self.int,
            Ability::Wis => &mut self.wis,
            Ability::Cha => &mut self.cha,
        }
    }
}

/// Levels taken in one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub class: ResourceReference,
    #[serde(default)]
    pub subclass: Option<ResourceReference>,
    pub level: u8,
}

/// A player character.
///
/// # Invariants
///
/// - every ability score stays within `MIN_ABILITY_SCORE..=MAX_ABILITY_SCORE`
/// - a skill expertise implies a proficiency in the same skill
/// - a class appears at most once in `classes` and always with `level >= 1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCharacter {
    version: u32,
    name: String,
    ability_scores: AbilityScores,
    race: Option<ResourceReference>,
    subrace: Option<ResourceReference>,
    background: Option<ResourceReference>,
    alignment: Option<ResourceReference>,
    classes: Vec<CharacterClass>,
    proficiencies: Vec<ResourceReference>,
    expertises: Vec<ResourceReference>,
    saving_throw_proficiencies: Vec<Ability>,
    weapon_proficiencies: Vec<ResourceReference>,
    armor_proficiencies: Vec<ResourceReference>,
    weapons: Vec<ResourceReference>,
    armor: Vec<ResourceReference>,
    notes: String,
}

impl Default for PlayerCharacter {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            name: String::new(),
            ability_scores: AbilityScores::default(),
            race: None,
            subrace: None,
            background: None,
            alignment: None,
            classes: Vec::new(),
            proficiencies: Vec::new(),
            expertises: Vec::new(),
            saving_throw_proficiencies: Vec::new(),
            weapon_proficiencies: Vec::new(),
            armor_proficiencies: Vec::new(),
            weapons: Vec::new(),
            armor: Vec::new(),
            notes: String::new(),
        }
    }
}

impl PlayerCharacter {
    /// Schema version written by this build.
    pub const CURRENT_VERSION: u32 = 1;

    /// A fresh character: all abilities 10, no race, no class, empty lists.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ability_scores(&self) -> &AbilityScores {
        &self.ability_scores
    }

    pub fn race(&self) -> Option<&ResourceReference> {
        self.race.as_ref()
    }

    pub fn subrace(&self) -> Option<&ResourceReference> {
        self.subrace.as_ref()
    }

    pub fn background(&self) -> Option<&ResourceReference> {
        self.background.as_ref()
    }

    pub fn alignment(&self) -> Option<&ResourceReference> {
        self.alignment.as_ref()
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    pub fn proficiencies(&self) -> &[ResourceReference] {
        &self.proficiencies
    }

    pub fn expertises(&self) -> &[ResourceReference] {
        &self.expertises
    }

    pub fn saving_throw_proficiencies(&self) -> &[Ability] {
        &self.saving_throw_proficiencies
    }

    pub fn weapon_proficiencies(&self) -> &[ResourceReference] {
        &self.weapon_proficiencies
    }

    pub fn armor_proficiencies(&self) -> &[ResourceReference] {
        &self.armor_proficiencies
    }

    pub fn weapons(&self) -> &[ResourceReference] {
        &self.weapons
    }

    pub fn armor(&self) -> &[ResourceReference] {
        &self.armor
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    // =========================================================================
    // Rule calculations
    // =========================================================================

    pub fn ability_score(&self, ability: Ability) -> i32 {
        self.ability_scores.get(ability)
    }

    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        Ability::modifier(self.ability_score(ability))
    }

    /// Character level: the sum of all class levels.
    pub fn total_level(&self) -> u8 {
        self.classes
            .iter()
            .fold(0u8, |acc, c| acc.saturating_add(c.level))
    }

    /// `2 + (level - 1) / 4`, treating a classless character as level 1.
    pub fn proficiency_bonus(&self) -> i32 {
        let level = i32::from(self.total_level().max(1));
        (level - 1) / 4 + 2
    }

    pub fn is_proficient_in_skill(&self, skill_id: &str) -> bool {
        self.proficiencies.iter().any(|p| p.id == skill_id)
    }

    pub fn has_expertise_in_skill(&self, skill_id: &str) -> bool {
        self.expertises.iter().any(|p| p.id == skill_id)
    }

    pub fn is_proficient_with_weapon(&self, weapon_id: &str) -> bool {
        self.weapon_proficiencies.iter().any(|p| p.id == weapon_id)
    }

    pub fn is_proficient_with_armor(&self, armor_id: &str) -> bool {
        self.armor_proficiencies.iter().any(|p| p.id == armor_id)
    }

    /// Ability modifier of the skill's governing ability, plus the
    /// proficiency bonus once if proficient and twice with expertise.
    pub fn skill_modifier(&self, skill: &Skill) -> Result<i32, DomainError> {
        let ability: Ability = skill.ability_score.id.parse()?;
        let skill_id = skill.base.id.as_str();
        let proficiency = if self.has_expertise_in_skill(skill_id) {
            self.proficiency_bonus() * 2
        } else if self.is_proficient_in_skill(skill_id) {
            self.proficiency_bonus()
        } else {
            0
        };
        Ok(self.ability_modifier(ability) + proficiency)
    }

    /// Attack roll bonus with a weapon using the given ability.
    pub fn weapon_attack_bonus(&self, weapon_id: &str, ability: Ability) -> i32 {
        let modifier = self.ability_modifier(ability);
        if self.is_proficient_with_weapon(weapon_id) {
            modifier + self.proficiency_bonus()
        } else {
            modifier
        }
    }

    pub fn saving_throw_modifier(&self, ability: Ability) -> i32 {
        let modifier = self.ability_modifier(ability);
        if self.saving_throw_proficiencies.contains(&ability) {
            modifier + self.proficiency_bonus()
        } else {
            modifier
        }
    }

    pub fn initiative(&self) -> i32 {
        self.ability_modifier(Ability::Dex)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn set_ability_score(&mut self, ability: Ability, score: i32) -> Result<(), DomainError> {
        if !(MIN_ABILITY_SCORE..=MAX_ABILITY_SCORE).contains(&score) {
            return Err(DomainError::validation(format!(
                "{} score {} outside {}..={}",
                ability, score, MIN_ABILITY_SCORE, MAX_ABILITY_SCORE
            )));
        }
        *self.ability_scores.slot_mut(ability) = score;
        Ok(())
    }

    /// Changing race drops a subrace that belonged to the previous race.
    pub fn set_race(&mut self, race: Option<ResourceReference>) {
        if self.race != race {
            self.subrace = None;
        }
        self.race = race;
    }

    pub fn set_subrace(&mut self, subrace: Option<ResourceReference>) {
        self.subrace = subrace;
    }

    pub fn set_background(&mut self, background: Option<ResourceReference>) {
        self.background = background;
    }

    pub fn set_alignment(&mut self, alignment: Option<ResourceReference>) {
        self.alignment = alignment;
    }

    /// Sets the level taken in `class`, adding the class if new.
    pub fn set_class_level(&mut self, class: ResourceReference, level: u8) -> Result<(), DomainError> {
        if level == 0 {
            return Err(DomainError::validation("class level must be at least 1"));
        }
        match self.classes.iter_mut().find(|c| c.class.id == class.id) {
            Some(existing) => existing.level = level,
            None => self.classes.push(CharacterClass {
                class,
                subclass: None,
                level,
            }),
        }
        Ok(())
    }

    pub fn set_subclass(
        &mut self,
        class_id: &str,
        subclass: Option<ResourceReference>,
    ) -> Result<(), DomainError> {
        let entry = self
            .classes
            .iter_mut()
            .find(|c| c.class.id == class_id)
            .ok_or_else(|| DomainError::not_found("CharacterClass", class_id))?;
        entry.subclass = subclass;
        Ok(())
    }

    pub fn remove_class(&mut self, class_id: &str) -> bool {
        remove_by_id(&mut self.classes, class_id, |c| &c.class.id)
    }

    pub fn add_proficiency_in_skill(&mut self, skill: ResourceReference) -> bool {
        add_unique(&mut self.proficiencies, skill)
    }

    /// Removing a proficiency also removes the expertise built on it.
    pub fn remove_proficiency_in_skill(&mut self, skill_id: &str) -> bool {
        remove_by_id(&mut self.expertises, skill_id, |r| &r.id);
        remove_by_id(&mut self.proficiencies, skill_id, |r| &r.id)
    }

    pub fn add_expertise_in_skill(&mut self, skill: ResourceReference) -> Result<bool, DomainError> {
        if !self.is_proficient_in_skill(&skill.id) {
            return Err(DomainError::validation(format!(
                "expertise in {} requires proficiency",
                skill.name
            )));
        }
        Ok(add_unique(&mut self.expertises, skill))
    }

    pub fn remove_expertise_in_skill(&mut self, skill_id: &str) -> bool {
        remove_by_id(&mut self.expertises, skill_id, |r| &r.id)
    }

    pub fn add_saving_throw_proficiency(&mut self, ability: Ability) -> bool {
        if self.saving_throw_proficiencies.contains(&ability) {
            return false;
        }
        self.saving_throw_proficiencies.push(ability);
        true
    }

    pub fn remove_saving_throw_proficiency(&mut self, ability: Ability) -> bool {
        let before = self.saving_throw_proficiencies.len();
        self.saving_throw_proficiencies.retain(|a| *a != ability);
        before != self.saving_throw_proficiencies.len()
    }

    pub fn add_weapon_proficiency(&mut self, weapon: ResourceReference) -> bool {
        add_unique(&mut self.weapon_proficiencies, weapon)
    }

    pub fn remove_weapon_proficiency(&mut self, weapon_id: &str) -> bool {
        remove_by_id(&mut self.weapon_proficiencies, weapon_id, |r| &r.id)
    }

    pub fn add_armor_proficiency(&mut self, armor: ResourceReference) -> bool {
        add_unique(&mut self.armor_proficiencies, armor)
    }

    pub fn remove_armor_proficiency(&mut self, armor_id: &str) -> bool {
        remove_by_id(&mut self.armor_proficiencies, armor_id, |r| &r.id)
    }

    /// Inventory allows duplicates (two daggers are two entries).
    pub fn add_weapon_to_inventory(&mut self, weapon: ResourceReference) {
        self.weapons.push(weapon);
    }

    /// Removes the first matching weapon.
    pub fn remove_weapon_from_inventory(&mut self, weapon_id: &str) -> bool {
        remove_first(&mut self.weapons, weapon_id)
    }

    pub fn add_armor_to_inventory(&mut self, armor: ResourceReference) {
        self.armor.push(armor);
    }

    pub fn remove_armor_from_inventory(&mut self, armor_id: &str) -> bool {
        remove_first(&mut self.armor, armor_id)
    }
}

fn add_unique(list: &mut Vec<ResourceReference>, item: ResourceReference) -> bool {
    if list.iter().any(|r| r.id == item.id) {
        return false;
    }
    list.push(item);
    true
}

fn remove_by_id<T>(list: &mut Vec<T>, id: &str, key: impl Fn(&T) -> &String) -> bool {
    let before = list.len();
    list.retain(|item| key(item) != id);
    before != list.len()
}

fn remove_first(list: &mut Vec<ResourceReference>, id: &str) -> bool {
    match list.iter().position(|r| r.id == id) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
