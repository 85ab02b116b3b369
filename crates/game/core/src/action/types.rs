//! Action record kinds.

use std::fmt;

use crate::state::{CardType, CreepType};

/// Severity of a narration line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Neutral,
    /// Good news for the avatar (rewards, healing, victory bonus).
    Positive,
    /// Bad news for the avatar (damage taken, illegal moves, game over).
    Negative,
}

/// One discrete effect emitted by the engine.
///
/// The ordered sequence of actions is the engine's only output. A renderer
/// replays it front to back; nothing in the sequence is ever reordered,
/// merged, or dropped.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// A new round begins.
    NextRound,
    /// End-of-turn marker.
    Wait,
    Victory,
    Defeat,
    UpdateScore { delta: i32 },
    UpdateHp { delta: i32 },
    UpdateMp { delta: i32 },
    UpdateCreepHp { delta: i32 },
    ChangeCardCount { card: CardType, delta: i32 },
    /// Replaces the current creep; `None` once the final creep is gone.
    SetCreep { creep: Option<CreepType>, hp: i32 },
    /// Replaces the next-creep preview; `None` on the final round.
    SetNextCreep { creep: Option<CreepType>, hp: i32 },
    Narrate { tone: Tone, message: String },
}

impl Action {
    /// Discriminator used by the wire encoding.
    pub const fn tag(&self) -> &'static str {
        match self {
            Action::NextRound => "nextRound",
            Action::Wait => "wait",
            Action::Victory => "victory",
            Action::Defeat => "defeat",
            Action::UpdateScore { .. } => "updateScore",
            Action::UpdateHp { .. } => "updateHP",
            Action::UpdateMp { .. } => "updateMP",
            Action::UpdateCreepHp { .. } => "updateCreepHP",
            Action::ChangeCardCount { .. } => "changeCardCount",
            Action::SetCreep { .. } => "setCreep",
            Action::SetNextCreep { .. } => "setNextCreep",
            Action::Narrate { tone, .. } => match tone {
                Tone::Neutral => "log",
                Tone::Positive => "greenLog",
                Tone::Negative => "redLog",
            },
        }
    }

    pub fn log(message: impl Into<String>) -> Self {
        Action::Narrate {
            tone: Tone::Neutral,
            message: message.into(),
        }
    }

    pub fn green_log(message: impl Into<String>) -> Self {
        Action::Narrate {
            tone: Tone::Positive,
            message: message.into(),
        }
    }

    pub fn red_log(message: impl Into<String>) -> Self {
        Action::Narrate {
            tone: Tone::Negative,
            message: message.into(),
        }
    }

    /// Narration text, if this is a narration line.
    pub fn message(&self) -> Option<&str> {
        match self {
            Action::Narrate { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        match self {
            Action::NextRound | Action::Wait | Action::Victory | Action::Defeat => f.write_str(tag),
            Action::UpdateScore { delta }
            | Action::UpdateHp { delta }
            | Action::UpdateMp { delta }
            | Action::UpdateCreepHp { delta } => write!(f, "{tag} {delta:+}"),
            Action::ChangeCardCount { card, delta } => write!(f, "{tag} {card} {delta:+}"),
            Action::SetCreep { creep, hp } | Action::SetNextCreep { creep, hp } => {
                write!(f, "{tag} {} {hp}", CreepType::label(*creep))
            }
            Action::Narrate { message, .. } => write!(f, "{tag} {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_tags_follow_tone() {
        assert_eq!(Action::log("x").tag(), "log");
        assert_eq!(Action::green_log("x").tag(), "greenLog");
        assert_eq!(Action::red_log("x").tag(), "redLog");
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Action::UpdateHp { delta: -3 }.to_string(), "updateHP -3");
        assert_eq!(
            Action::ChangeCardCount {
                card: CardType::Heal,
                delta: 1
            }
            .to_string(),
            "changeCardCount Heal +1"
        );
        assert_eq!(
            Action::SetNextCreep { creep: None, hp: 0 }.to_string(),
            "setNextCreep None 0"
        );
    }
}
