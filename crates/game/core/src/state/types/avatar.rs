/// Fixed avatar limits for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvatarStats {
    pub max_hp: i32,
    pub max_mp: i32,
}

impl AvatarStats {
    pub const fn new(max_hp: i32, max_mp: i32) -> Self {
        Self { max_hp, max_mp }
    }
}

/// The hero's current status.
///
/// `hp` may dip below zero inside a turn; any `hp <= 0` counts as defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Avatar {
    pub hp: i32,
    pub mp: i32,
    pub stats: AvatarStats,
}

impl Avatar {
    /// Creates an avatar at full health and mana.
    pub const fn new(stats: AvatarStats) -> Self {
        Self {
            hp: stats.max_hp,
            mp: stats.max_mp,
            stats,
        }
    }

    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// HP that a heal of `roll` would actually restore, never overhealing.
    pub fn healed_amount(&self, roll: i32) -> i32 {
        calculate_healed(roll, self.hp, self.stats.max_hp)
    }
}

/// Clamps a heal roll so `current + healed` never exceeds `max`.
///
/// The result is never negative, even when `current` already exceeds `max`.
pub fn calculate_healed(roll: i32, current: i32, max: i32) -> i32 {
    roll.min(max - current).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healing_never_overheals() {
        const MAX_HP: i32 = 15;
        let cases = [
            (0, 10, 0),
            (1, 10, 1),
            (5, 10, 5),
            (6, 10, 5),
            (100, 10, 5),
            (5, 11, 4),
            (100, 1, 14),
            (1, MAX_HP, 0),
        ];
        for (roll, current, want) in cases {
            assert_eq!(
                calculate_healed(roll, current, MAX_HP),
                want,
                "roll={roll} current={current} max={MAX_HP}"
            );
        }
    }

    #[test]
    fn new_avatar_starts_full() {
        let avatar = Avatar::new(AvatarStats::new(40, 20));
        assert_eq!((avatar.hp, avatar.mp), (40, 20));
        assert!(avatar.is_alive());
        assert_eq!(avatar.healed_amount(3), 0);
    }
}
