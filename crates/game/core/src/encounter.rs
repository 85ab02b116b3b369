//! Encounter generation: which creep shows up in which round.
//!
//! The first two rounds and the last one are fixed. Every other round draws
//! from a weighted tier table: rounds 3 to 5 only produce low-tier creeps,
//! later rounds can produce mummies.

use crate::env::{Dice, RngOracle};
use crate::state::CreepType;

/// Upper bound (exclusive) of the uniform tier draw.
const TIER_ROLL: u32 = 99;

/// Last round that draws from the early tier.
const EARLY_TIER_LAST_ROUND: u32 = 5;

/// `(threshold, creep)` bands, highest threshold first. A roll picks the
/// first band whose threshold it reaches.
type TierBands = [(u32, CreepType)];

/// Fairy 10%, Lion 40%, Imp 20%, Cheepy 30%.
const EARLY_TIER: &TierBands = &[
    (90, CreepType::Fairy),
    (50, CreepType::Lion),
    (30, CreepType::Imp),
    (0, CreepType::Cheepy),
];

/// Mummy 30%, Fairy 20%, Lion 20%, Imp 20%, Cheepy 10%.
const LATE_TIER: &TierBands = &[
    (70, CreepType::Mummy),
    (50, CreepType::Fairy),
    (30, CreepType::Lion),
    (10, CreepType::Imp),
    (0, CreepType::Cheepy),
];

/// Decides the creep of `round` in a run of `round_count` rounds.
///
/// Returns `None` past the final round. Fixed rounds never touch the dice;
/// tiered rounds draw exactly once.
pub fn pick_creep<R: RngOracle>(
    round: u32,
    round_count: u32,
    dice: &mut Dice<R>,
) -> Option<CreepType> {
    if round > round_count {
        return None;
    }
    // The final boss takes precedence over the fixed opening rounds.
    if round == round_count {
        return Some(CreepType::Dragon);
    }
    match round {
        1 => return Some(CreepType::Cheepy),
        2 => return Some(CreepType::Imp),
        _ => {}
    }

    let bands = if round <= EARLY_TIER_LAST_ROUND {
        EARLY_TIER
    } else {
        LATE_TIER
    };
    Some(band_for(bands, dice.below(TIER_ROLL)))
}

fn band_for(bands: &TierBands, roll: u32) -> CreepType {
    bands
        .iter()
        .find(|(threshold, _)| roll >= *threshold)
        .map(|(_, creep)| *creep)
        .unwrap_or(CreepType::Cheepy)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl RngOracle for Fixed {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0
        }
    }

    #[test]
    fn fixed_rounds_ignore_seed() {
        for seed in 0..32 {
            let mut dice = Dice::new(seed);
            assert_eq!(pick_creep(1, 10, &mut dice), Some(CreepType::Cheepy));
            assert_eq!(pick_creep(2, 10, &mut dice), Some(CreepType::Imp));
            assert_eq!(pick_creep(10, 10, &mut dice), Some(CreepType::Dragon));
            assert_eq!(pick_creep(11, 10, &mut dice), None);
            assert_eq!(dice.draws(), 0);
        }
    }

    #[test]
    fn last_round_is_dragon_even_when_short() {
        let mut dice = Dice::new(0);
        assert_eq!(pick_creep(1, 1, &mut dice), Some(CreepType::Dragon));
        assert_eq!(pick_creep(2, 2, &mut dice), Some(CreepType::Dragon));
        assert_eq!(pick_creep(2, 1, &mut dice), None);
    }

    #[test]
    fn early_tier_bands() {
        let cases = [
            (0, CreepType::Cheepy),
            (29, CreepType::Cheepy),
            (30, CreepType::Imp),
            (49, CreepType::Imp),
            (50, CreepType::Lion),
            (89, CreepType::Lion),
            (90, CreepType::Fairy),
            (98, CreepType::Fairy),
        ];
        for (roll, want) in cases {
            let mut dice = Dice::with_oracle(0, Fixed(roll));
            assert_eq!(pick_creep(4, 10, &mut dice), Some(want), "roll={roll}");
        }
    }

    #[test]
    fn late_tier_bands() {
        let cases = [
            (0, CreepType::Cheepy),
            (10, CreepType::Imp),
            (30, CreepType::Lion),
            (50, CreepType::Fairy),
            (70, CreepType::Mummy),
            (98, CreepType::Mummy),
        ];
        for (roll, want) in cases {
            let mut dice = Dice::with_oracle(0, Fixed(roll));
            assert_eq!(pick_creep(6, 10, &mut dice), Some(want), "roll={roll}");
        }
    }

    #[test]
    fn mummies_never_appear_early() {
        let mut dice = Dice::new(99);
        for _ in 0..300 {
            for round in 3..=5 {
                let creep = pick_creep(round, 10, &mut dice);
                assert_ne!(creep, Some(CreepType::Mummy));
                assert_ne!(creep, Some(CreepType::Dragon));
            }
        }
    }

    #[test]
    fn tiered_draws_are_reproducible() {
        let draw = |seed| {
            let mut dice = Dice::new(seed);
            (3..10)
                .map(|round| pick_creep(round, 10, &mut dice))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(5), draw(5));
    }
}
