//! Built-in card choosers.
//!
//! Runtime users plug in [`Chooser`] implementations so a run can be driven by
//! scripted fixtures, simple baselines, or heuristic policies. Every chooser
//! here is deterministic: given the same state it picks the same card.

use deckrun_content::Scenario;
use deckrun_core::{CardType, Chooser, Creep, CreepTrait, CreepType, GameState};

/// Always retreats.
///
/// It can't win on score, but it is the minimal chooser that clears every
/// run without ever making an illegal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct RetreatChooser;

impl Chooser for RetreatChooser {
    fn choose_card(&mut self, _state: &GameState) -> CardType {
        CardType::Retreat
    }
}

/// Fights only the weakest creep and retreats once wounded.
#[derive(Clone, Copy, Debug)]
pub struct CautiousChooser {
    /// Below this HP the avatar never fights.
    pub min_hp: i32,
}

impl CautiousChooser {
    pub const DEFAULT_MIN_HP: i32 = 10;

    pub fn new(min_hp: i32) -> Self {
        Self { min_hp }
    }
}

impl Default for CautiousChooser {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_HP)
    }
}

impl Chooser for CautiousChooser {
    fn choose_card(&mut self, state: &GameState) -> CardType {
        if state.avatar.hp < self.min_hp {
            return CardType::Retreat;
        }
        if state.creep.kind == CreepType::Cheepy {
            return CardType::Attack;
        }
        CardType::Retreat
    }
}

/// Replays a fixed list of moves, then keeps playing a fallback card.
#[derive(Clone, Debug)]
pub struct ScriptedChooser {
    moves: Vec<CardType>,
    cursor: usize,
    fallback: CardType,
}

impl ScriptedChooser {
    pub fn new(moves: impl Into<Vec<CardType>>, fallback: CardType) -> Self {
        Self {
            moves: moves.into(),
            cursor: 0,
            fallback,
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(scenario.moves.clone(), scenario.fallback_card())
    }

    /// Scripted moves not played yet.
    pub fn remaining(&self) -> &[CardType] {
        &self.moves[self.cursor.min(self.moves.len())..]
    }
}

impl Chooser for ScriptedChooser {
    fn choose_card(&mut self, _state: &GameState) -> CardType {
        match self.moves.get(self.cursor) {
            Some(card) => {
                self.cursor += 1;
                *card
            }
            None => self.fallback,
        }
    }
}

/// Greedy fighter: heals when low, parries what can be parried, and
/// otherwise plays the hardest-hitting card that works on the current creep.
#[derive(Clone, Copy, Debug)]
pub struct AggressiveChooser {
    /// At or below this HP the avatar tries to heal first.
    pub heal_below: i32,
}

impl AggressiveChooser {
    pub const DEFAULT_HEAL_BELOW: i32 = 15;

    pub fn new(heal_below: i32) -> Self {
        Self { heal_below }
    }

    /// Average damage `card` would deal to `creep`, zero if it has no effect.
    fn expected_damage(card: CardType, creep: &Creep) -> i32 {
        let stats = card.stats();
        if !stats.is_offensive || card == CardType::Stun {
            return 0;
        }
        if stats.is_magic && creep.has(CreepTrait::MagicImmunity) {
            return 0;
        }
        let average = (stats.power.low() + stats.power.high()) / 2;
        if card == CardType::Firebolt && creep.has(CreepTrait::WeakToFire) {
            average * 2
        } else {
            average
        }
    }

    /// Whether the creep is going to strike back this turn.
    fn creep_attacks(creep: &Creep) -> bool {
        !creep.is_stunned() && !(creep.is_full() && creep.has(CreepTrait::Coward))
    }
}

impl Default for AggressiveChooser {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEAL_BELOW)
    }
}

impl Chooser for AggressiveChooser {
    fn choose_card(&mut self, state: &GameState) -> CardType {
        let creep = &state.creep;

        if state.avatar.hp <= self.heal_below {
            if state.can(CardType::Heal) {
                return CardType::Heal;
            }
            if state.can(CardType::Rest) && state.avatar.hp < state.avatar.stats.max_hp {
                return CardType::Rest;
            }
        }

        if Self::creep_attacks(creep) {
            if state.can(CardType::Parry) && !creep.has(CreepTrait::Ranged) {
                return CardType::Parry;
            }
            if state.can(CardType::Stun) && creep.stats().damage.high() >= state.avatar.hp {
                return CardType::Stun;
            }
        }

        state
            .playable()
            .filter(|card| Self::expected_damage(*card, creep) > 0)
            .max_by_key(|card| Self::expected_damage(*card, creep))
            .unwrap_or(CardType::Attack)
    }
}
