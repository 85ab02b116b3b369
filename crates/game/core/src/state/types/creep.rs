//! Creeps: the enemies met one per round.

use bitflags::bitflags;

use crate::env::CreepStats;

/// Creep kind identifier.
///
/// "No creep" is not a kind; it is expressed as `Option<CreepType>::None`
/// wherever a creep may be absent (e.g. the next-creep preview on the last
/// round).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CreepType {
    Cheepy,
    Imp,
    Lion,
    Fairy,
    Mummy,
    Dragon,
}

impl CreepType {
    /// Name used on the wire for an optional creep; an absent creep is `"None"`.
    pub fn label(creep: Option<CreepType>) -> &'static str {
        creep.map_or("None", |kind| kind.into())
    }
}

/// A single behavioural modifier of a creep kind.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreepTrait {
    /// Skips its attack while at full health.
    Coward,
    /// Magical damage has no effect.
    MagicImmunity,
    /// Fire damage is doubled.
    WeakToFire,
    /// Cannot punish a retreat.
    Slow,
    /// Attacks cannot be parried.
    Ranged,
}

bitflags! {
    /// Set of [`CreepTrait`]s attached to a creep kind.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CreepTraits: u8 {
        const COWARD         = 1 << 0;
        const MAGIC_IMMUNITY = 1 << 1;
        const WEAK_TO_FIRE   = 1 << 2;
        const SLOW           = 1 << 3;
        const RANGED         = 1 << 4;
    }
}

impl From<CreepTrait> for CreepTraits {
    fn from(value: CreepTrait) -> Self {
        match value {
            CreepTrait::Coward => CreepTraits::COWARD,
            CreepTrait::MagicImmunity => CreepTraits::MAGIC_IMMUNITY,
            CreepTrait::WeakToFire => CreepTraits::WEAK_TO_FIRE,
            CreepTrait::Slow => CreepTraits::SLOW,
            CreepTrait::Ranged => CreepTraits::RANGED,
        }
    }
}

impl CreepTraits {
    /// Reports whether the set contains `t`.
    pub fn has(self, t: CreepTrait) -> bool {
        self.contains(CreepTraits::from(t))
    }

    /// Iterates the contained traits in declaration order.
    pub fn traits(self) -> impl Iterator<Item = CreepTrait> {
        use strum::IntoEnumIterator;
        CreepTrait::iter().filter(move |t| self.has(*t))
    }
}

/// The creep currently being fought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creep {
    pub kind: CreepType,
    pub hp: i32,
    /// Turns this creep is going to skip.
    pub stun: u32,
}

impl Creep {
    /// Instantiates a fresh creep at full health.
    pub const fn spawn(kind: CreepType) -> Self {
        Self {
            kind,
            hp: kind.stats().max_hp,
            stun: 0,
        }
    }

    pub const fn stats(&self) -> &'static CreepStats {
        self.kind.stats()
    }

    /// Reports whether the creep health is full.
    pub const fn is_full(&self) -> bool {
        self.hp == self.stats().max_hp
    }

    pub const fn is_stunned(&self) -> bool {
        self.stun > 0
    }

    pub fn has(&self, t: CreepTrait) -> bool {
        self.stats().traits.has(t)
    }
}
