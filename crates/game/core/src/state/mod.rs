//! Run state representation.
//!
//! This module owns the data structures that describe the avatar, the creep
//! being fought, and the deck. Choosers and runtime layers only ever see a
//! shared borrow of [`GameState`]; mutation happens exclusively inside
//! [`crate::engine::GameEngine`].
pub mod types;

pub use types::{
    Avatar, AvatarStats, Card, CardCount, CardType, Creep, CreepTrait, CreepTraits, CreepType,
    Deck, IntRange, calculate_healed,
};

/// Snapshot of a run as perceived at the start of a turn.
///
/// All counters start at one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Global turn number.
    pub turn: u32,

    /// Number of the current encounter.
    pub round: u32,

    /// Turns completed in the current round; reset when a new round starts
    /// partway through a turn.
    pub round_turn: u32,

    pub score: i32,

    pub avatar: Avatar,

    /// Opponent of the current round.
    pub creep: Creep,

    /// Creep met after the current one, `None` on the final round.
    pub next_creep: Option<CreepType>,

    pub deck: Deck,
}

impl GameState {
    /// Creates the run-start state for the given avatar and opening creeps.
    pub fn new(avatar: AvatarStats, creep: CreepType, next_creep: Option<CreepType>) -> Self {
        Self {
            turn: 1,
            round: 1,
            round_turn: 0,
            score: 0,
            avatar: Avatar::new(avatar),
            creep: Creep::spawn(creep),
            next_creep,
            deck: Deck::new(),
        }
    }

    /// Reports whether playing `card` is legal right now.
    ///
    /// A card is playable when at least one copy is left and the avatar has
    /// enough mana to pay for it.
    pub fn can(&self, card: CardType) -> bool {
        let entry = self.deck.get(card);
        entry.count.is_available() && self.avatar.mp >= entry.mp()
    }

    /// Iterates the cards that [`GameState::can`] would accept.
    pub fn playable(&self) -> impl Iterator<Item = CardType> + '_ {
        self.deck
            .iter()
            .map(|card| card.kind)
            .filter(|kind| self.can(*kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(
            AvatarStats::new(20, 5),
            CreepType::Cheepy,
            Some(CreepType::Imp),
        )
    }

    #[test]
    fn exhausted_card_is_never_playable() {
        let mut state = state();
        state.avatar.mp = 100;
        assert!(!state.can(CardType::Heal));
        assert!(!state.can(CardType::PowerAttack));
    }

    #[test]
    fn unlimited_card_depends_only_on_mana() {
        let mut state = state();
        assert!(state.can(CardType::MagicArrow));
        state.avatar.mp = 0;
        assert!(!state.can(CardType::MagicArrow));
        assert!(state.can(CardType::Attack));
        assert!(state.can(CardType::Retreat));
    }

    #[test]
    fn granted_card_needs_mana_too() {
        let mut state = state();
        state.deck.grant(CardType::Heal, 1);
        assert!(state.can(CardType::Heal));
        state.avatar.mp = 3;
        assert!(!state.can(CardType::Heal));
        state.deck.grant(CardType::Parry, 1);
        assert!(state.can(CardType::Parry));
    }

    #[test]
    fn playable_lists_starters_at_run_start() {
        let state = state();
        let playable: Vec<_> = state.playable().collect();
        assert_eq!(
            playable,
            vec![
                CardType::Attack,
                CardType::MagicArrow,
                CardType::Retreat,
                CardType::Rest
            ]
        );
    }
}
