//! Banks - aggregate roots persisted whole under a single storage key.

pub mod homebrew;
pub mod player_character;

pub use homebrew::{HomebrewBank, HomebrewBankEntry, HOMEBREW_BANK_KEY};
pub use player_character::{
    PlayerCharacterBank, PlayerCharacterBankEntry, PLAYER_CHARACTER_BANK_KEY,
};
