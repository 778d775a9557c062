//! Aggregate roots - domain objects that own their related data
//!
//! Aggregates are edited through methods and persisted whole by their bank.

pub mod player_character;

pub use player_character::{
    AbilityScores, CharacterClass, PlayerCharacter, DEFAULT_ABILITY_SCORE, MAX_ABILITY_SCORE,
    MIN_ABILITY_SCORE,
};
