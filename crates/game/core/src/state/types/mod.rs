pub mod avatar;
pub mod card;
pub mod common;
pub mod creep;

pub use avatar::{Avatar, AvatarStats, calculate_healed};
pub use card::{Card, CardCount, CardType, Deck};
pub use common::IntRange;
pub use creep::{Creep, CreepTrait, CreepTraits, CreepType};
