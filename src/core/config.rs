//! Variant configuration consumed when a deal is created.
//!
//! - `DeckSize`: 24, 36 or 52 cards (distinct ranks × 4 suits)
//! - `GameOptions`: deck size plus the rule variants
//!
//! Options are copied into the `GameState` at deal time and never change
//! afterwards.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// Standard hand size; players are dealt and refilled up to this many cards.
pub const HAND_SIZE: usize = 6;

/// Hard cap on attacks before the first defense when
/// `limit_five_before_beat` is set.
pub const FIRST_BEAT_LIMIT: usize = 5;

/// Supported deck sizes.
///
/// Serialized as the plain card count (`24`, `36`, `52`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DeckSize {
    /// Nine through Ace.
    Short24,
    /// Six through Ace.
    #[default]
    Standard36,
    /// Two through Ace.
    Full52,
}

impl DeckSize {
    /// Number of cards in the deck.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            DeckSize::Short24 => 24,
            DeckSize::Standard36 => 36,
            DeckSize::Full52 => 52,
        }
    }

    /// Ranks in play, lowest first.
    #[must_use]
    pub fn ranks(self) -> &'static [Rank] {
        let skip = Rank::ALL.len() - self.card_count() / 4;
        &Rank::ALL[skip..]
    }
}

impl TryFrom<u8> for DeckSize {
    type Error = String;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            24 => Ok(DeckSize::Short24),
            36 => Ok(DeckSize::Standard36),
            52 => Ok(DeckSize::Full52),
            other => Err(format!("unsupported deck size {other}, expected 24, 36 or 52")),
        }
    }
}

impl From<DeckSize> for u8 {
    fn from(size: DeckSize) -> u8 {
        size.card_count() as u8
    }
}

/// Rule variants for one match.
///
/// ## Example
///
/// ```
/// use rust_durak::core::{DeckSize, GameOptions};
///
/// let options = GameOptions::default()
///     .with_deck_size(DeckSize::Full52)
///     .with_translation()
///     .with_seed(7);
///
/// assert!(options.allow_translation);
/// assert!(!options.with_trick);
/// assert_eq!(options.max_on_table, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub deck_size: DeckSize,

    /// Defender may redirect a same-rank, still unbeaten attack to the next seat.
    pub allow_translation: bool,

    /// At most five attacks until the defender has beaten one card.
    pub limit_five_before_beat: bool,

    /// Cheating variant: rank-violating attacks and accusations.
    pub with_trick: bool,

    /// Ceiling on table pairs per exchange. Must be at least 1.
    pub max_on_table: usize,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            deck_size: DeckSize::default(),
            allow_translation: false,
            limit_five_before_beat: false,
            with_trick: false,
            max_on_table: HAND_SIZE,
            seed: None,
        }
    }
}

impl GameOptions {
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: DeckSize) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Enable the translation (perevodnoy) variant.
    #[must_use]
    pub fn with_translation(mut self) -> Self {
        self.allow_translation = true;
        self
    }

    #[must_use]
    pub fn with_limit_five_before_beat(mut self) -> Self {
        self.limit_five_before_beat = true;
        self
    }

    /// Enable the cheat/accuse variant.
    #[must_use]
    pub fn with_trick(mut self) -> Self {
        self.with_trick = true;
        self
    }

    #[must_use]
    pub fn with_max_on_table(mut self, max: usize) -> Self {
        self.max_on_table = max;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_size_ranks() {
        assert_eq!(DeckSize::Short24.ranks().first(), Some(&Rank::Nine));
        assert_eq!(DeckSize::Standard36.ranks().first(), Some(&Rank::Six));
        assert_eq!(DeckSize::Full52.ranks().first(), Some(&Rank::Two));

        for size in [DeckSize::Short24, DeckSize::Standard36, DeckSize::Full52] {
            assert_eq!(size.ranks().len() * 4, size.card_count());
            assert_eq!(size.ranks().last(), Some(&Rank::Ace));
        }
    }

    #[test]
    fn test_deck_size_try_from() {
        assert_eq!(DeckSize::try_from(24), Ok(DeckSize::Short24));
        assert_eq!(DeckSize::try_from(52), Ok(DeckSize::Full52));
        assert!(DeckSize::try_from(32).is_err());
    }

    #[test]
    fn test_default_options() {
        let options = GameOptions::default();
        assert_eq!(options.deck_size, DeckSize::Standard36);
        assert_eq!(options.max_on_table, 6);
        assert!(!options.allow_translation);
        assert!(!options.limit_five_before_beat);
        assert!(!options.with_trick);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn test_options_builder() {
        let options = GameOptions::default()
            .with_deck_size(DeckSize::Short24)
            .with_limit_five_before_beat()
            .with_trick()
            .with_max_on_table(4);

        assert_eq!(options.deck_size, DeckSize::Short24);
        assert!(options.limit_five_before_beat);
        assert!(options.with_trick);
        assert_eq!(options.max_on_table, 4);
    }

    #[test]
    fn test_options_json_uses_card_count() {
        let options = GameOptions::default().with_deck_size(DeckSize::Full52);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["deck_size"], 52);

        let partial: GameOptions = serde_json::from_str(r#"{"deck_size":24,"with_trick":true}"#).unwrap();
        assert_eq!(partial.deck_size, DeckSize::Short24);
        assert!(partial.with_trick);
        assert_eq!(partial.max_on_table, 6);

        assert!(serde_json::from_str::<GameOptions>(r#"{"deck_size":40}"#).is_err());
    }
}
