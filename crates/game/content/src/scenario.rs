//! Scripted runs.

use deckrun_core::CardType;

use crate::settings::RunSettings;

/// A named run with a fixed move list, used for demos and regression runs.
///
/// ```ron
/// (
///     name: "retreat-only",
///     settings: (avatar_hp: 20, avatar_mp: 5, rounds: 1, seed: Some(7)),
///     moves: [Retreat],
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub settings: RunSettings,
    /// Cards played in order, one per turn.
    pub moves: Vec<CardType>,
    /// Card played once `moves` runs out. `None` means retreat.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fallback: Option<CardType>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, settings: RunSettings, moves: Vec<CardType>) -> Self {
        Self {
            name: name.into(),
            settings,
            moves,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, card: CardType) -> Self {
        self.fallback = Some(card);
        self
    }

    /// The card played after the scripted moves are exhausted.
    pub fn fallback_card(&self) -> CardType {
        self.fallback.unwrap_or(CardType::Retreat)
    }
}
