//! The decision-maker contract.
//!
//! A [`Chooser`] picks one card per turn. It only ever receives a shared
//! borrow of the state, so it cannot tamper with the run; it may still
//! return a card that is not playable, which the engine treats as an
//! illegal move rather than a hard error.

use crate::state::{CardType, GameState};

/// Supplies the avatar's move for each turn.
pub trait Chooser {
    /// Picks the card to play given the turn-start state.
    fn choose_card(&mut self, state: &GameState) -> CardType;
}

impl<F> Chooser for F
where
    F: FnMut(&GameState) -> CardType,
{
    fn choose_card(&mut self, state: &GameState) -> CardType {
        self(state)
    }
}
