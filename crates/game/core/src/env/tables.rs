//! Static card and creep catalogs.
//!
//! These tables are the single source of truth for balance numbers. They are
//! consulted by the engine and by presentation layers (tooltips) but never
//! mutated.

use crate::state::{CardType, CreepTraits, CreepType, IntRange};

/// Static stats of a card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardStats {
    /// Mana cost per use.
    pub mp: i32,

    /// Magical effects are negated by magic immunity.
    pub is_magic: bool,

    /// Offensive cards target the creep; the rest target the avatar or have
    /// a special effect such as fleeing.
    pub is_offensive: bool,

    /// Explains what [`CardStats::power`] means for this card.
    pub effect: &'static str,

    pub power: IntRange,
}

/// Static stats of a creep kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreepStats {
    #[cfg_attr(feature = "serde", serde(rename = "maxHP"))]
    pub max_hp: i32,
    pub damage: IntRange,
    pub score_reward: i32,
    /// Collectible cards granted when the creep is defeated.
    pub cards_reward: u32,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_traits"))]
    pub traits: CreepTraits,
}

#[cfg(feature = "serde")]
fn serialize_traits<S>(traits: &CreepTraits, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(traits.traits().map(<&'static str>::from))
}

const fn card(
    mp: i32,
    is_magic: bool,
    is_offensive: bool,
    effect: &'static str,
    power: IntRange,
) -> CardStats {
    CardStats {
        mp,
        is_magic,
        is_offensive,
        effect,
        power,
    }
}

const ATTACK: CardStats = card(0, false, true, "damage", IntRange::new(2, 4));
const POWER_ATTACK: CardStats = card(0, false, true, "damage", IntRange::new(4, 5));
const STUN: CardStats = card(0, false, true, "turns skipped", IntRange::new(2, 2));
const MAGIC_ARROW: CardStats = card(1, true, true, "magical damage", IntRange::new(3, 3));
const FIREBOLT: CardStats = card(3, true, true, "magical damage", IntRange::new(4, 6));
const RETREAT: CardStats = card(0, false, false, "flee", IntRange::ZERO);
const REST: CardStats = card(2, false, false, "HP recovered", IntRange::new(3, 3));
const HEAL: CardStats = card(4, true, false, "HP recovered", IntRange::new(10, 15));
const PARRY: CardStats = card(0, false, false, "reflect", IntRange::ZERO);

const fn creep(
    max_hp: i32,
    damage: IntRange,
    score_reward: i32,
    cards_reward: u32,
    traits: CreepTraits,
) -> CreepStats {
    CreepStats {
        max_hp,
        damage,
        score_reward,
        cards_reward,
        traits,
    }
}

const CHEEPY: CreepStats = creep(4, IntRange::new(1, 4), 3, 1, CreepTraits::COWARD);
const IMP: CreepStats = creep(5, IntRange::new(3, 4), 5, 1, CreepTraits::empty());
const LION: CreepStats = creep(10, IntRange::new(2, 3), 6, 2, CreepTraits::empty());
const FAIRY: CreepStats = creep(9, IntRange::new(4, 5), 11, 2, CreepTraits::RANGED);
const MUMMY: CreepStats = creep(
    18,
    IntRange::new(3, 4),
    15,
    3,
    CreepTraits::WEAK_TO_FIRE.union(CreepTraits::SLOW),
);
const DRAGON: CreepStats = creep(
    30,
    IntRange::new(5, 6),
    35,
    0,
    CreepTraits::MAGIC_IMMUNITY,
);

impl CardType {
    /// Looks up the static stats of this card kind.
    pub const fn stats(self) -> &'static CardStats {
        match self {
            CardType::Attack => &ATTACK,
            CardType::PowerAttack => &POWER_ATTACK,
            CardType::Stun => &STUN,
            CardType::MagicArrow => &MAGIC_ARROW,
            CardType::Firebolt => &FIREBOLT,
            CardType::Retreat => &RETREAT,
            CardType::Rest => &REST,
            CardType::Heal => &HEAL,
            CardType::Parry => &PARRY,
        }
    }
}

impl CreepType {
    /// Looks up the static stats of this creep kind.
    pub const fn stats(self) -> &'static CreepStats {
        match self {
            CreepType::Cheepy => &CHEEPY,
            CreepType::Imp => &IMP,
            CreepType::Lion => &LION,
            CreepType::Fairy => &FAIRY,
            CreepType::Mummy => &MUMMY,
            CreepType::Dragon => &DRAGON,
        }
    }
}
