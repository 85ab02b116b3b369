//! Cards and the avatar's deck.
//!
//! Card kinds form a closed enumeration; their static stats live in
//! [`crate::env::tables`]. The deck keeps exactly one [`Card`] entry per kind
//! for the whole run, only the copy counts change.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};

use crate::env::CardStats;

/// Card kind identifier.
///
/// The first four kinds are starter cards available in unlimited quantity.
/// The remaining five are collected as creep rewards.
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
pub enum CardType {
    // Starter cards.
    Attack,
    MagicArrow,
    Retreat,
    Rest,

    // Collectible cards.
    PowerAttack,
    Firebolt,
    Stun,
    Heal,
    Parry,
}

impl CardType {
    /// Cards every run starts with, in unlimited supply.
    pub const STARTER: [CardType; 4] = [
        CardType::Attack,
        CardType::MagicArrow,
        CardType::Retreat,
        CardType::Rest,
    ];

    /// Cards handed out as creep rewards.
    pub const COLLECTIBLE: [CardType; 5] = [
        CardType::PowerAttack,
        CardType::Firebolt,
        CardType::Stun,
        CardType::Heal,
        CardType::Parry,
    ];

    pub const fn is_starter(self) -> bool {
        matches!(
            self,
            CardType::Attack | CardType::MagicArrow | CardType::Retreat | CardType::Rest
        )
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Copies of a card left in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardCount {
    /// Never runs out (wire value `-1`).
    Unlimited,
    Limited(u32),
}

impl CardCount {
    /// Returns true when at least one copy can be played.
    pub const fn is_available(self) -> bool {
        match self {
            CardCount::Unlimited => true,
            CardCount::Limited(n) => n > 0,
        }
    }

    /// Wire representation: `-1` for unlimited, the copy count otherwise.
    pub const fn as_i32(self) -> i32 {
        match self {
            CardCount::Unlimited => -1,
            CardCount::Limited(n) => n as i32,
        }
    }
}

impl Default for CardCount {
    fn default() -> Self {
        CardCount::Limited(0)
    }
}

impl fmt::Display for CardCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardCount::Unlimited => f.write_str("unlimited"),
            CardCount::Limited(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.as_i32())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CardCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match i32::deserialize(deserializer)? {
            -1 => Ok(CardCount::Unlimited),
            n if n >= 0 => Ok(CardCount::Limited(n as u32)),
            n => Err(serde::de::Error::custom(format!("invalid card count {n}"))),
        }
    }
}

/// One deck entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub kind: CardType,
    pub count: CardCount,
}

impl Card {
    pub const fn new(kind: CardType, count: CardCount) -> Self {
        Self { kind, count }
    }

    pub const fn stats(&self) -> &'static CardStats {
        self.kind.stats()
    }

    /// Mana cost per use.
    pub const fn mp(&self) -> i32 {
        self.kind.stats().mp
    }
}

/// The avatar's card collection, keyed by card kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    cards: [Card; CardType::COUNT],
}

impl Deck {
    /// Run-start deck: starters unlimited, collectibles at zero.
    pub fn new() -> Self {
        let cards = core::array::from_fn(|i| {
            let kind = CardType::iter()
                .nth(i)
                .unwrap_or_else(|| unreachable!("card index {i} outside CardType"));
            let count = if kind.is_starter() {
                CardCount::Unlimited
            } else {
                CardCount::Limited(0)
            };
            Card::new(kind, count)
        });
        Self { cards }
    }

    pub fn get(&self, kind: CardType) -> &Card {
        &self.cards[kind.index()]
    }

    pub fn count(&self, kind: CardType) -> CardCount {
        self.get(kind).count
    }

    /// Iterates entries in [`CardType`] declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Consumes one copy of a limited card. Unlimited cards are untouched.
    ///
    /// Returns true when the count actually changed.
    pub fn spend(&mut self, kind: CardType) -> bool {
        let card = &mut self.cards[kind.index()];
        match card.count {
            CardCount::Limited(n) if n > 0 => {
                card.count = CardCount::Limited(n - 1);
                true
            }
            _ => false,
        }
    }

    /// Adds copies of a limited card.
    pub fn grant(&mut self, kind: CardType, copies: u32) {
        let card = &mut self.cards[kind.index()];
        if let CardCount::Limited(n) = card.count {
            card.count = CardCount::Limited(n + copies);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
