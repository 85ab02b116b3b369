//! Wire encoding of actions for external renderers.
//!
//! Every action is a flat array whose first element is the tag and whose
//! remaining elements are the action's fields in declaration order:
//!
//! ```text
//! ["nextRound"]
//! ["updateHP", -4]
//! ["changeCardCount", "Heal", 1]
//! ["setNextCreep", "None", 0]
//! ["redLog", "Not enough mana to use Heal"]
//! ```

use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::{Action, ActionLog};
use crate::state::CreepType;

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let arity = match self {
            Action::NextRound | Action::Wait | Action::Victory | Action::Defeat => 0,
            Action::UpdateScore { .. }
            | Action::UpdateHp { .. }
            | Action::UpdateMp { .. }
            | Action::UpdateCreepHp { .. }
            | Action::Narrate { .. } => 1,
            Action::ChangeCardCount { .. }
            | Action::SetCreep { .. }
            | Action::SetNextCreep { .. } => 2,
        };

        let mut seq = serializer.serialize_seq(Some(arity + 1))?;
        seq.serialize_element(self.tag())?;
        match self {
            Action::NextRound | Action::Wait | Action::Victory | Action::Defeat => {}
            Action::UpdateScore { delta }
            | Action::UpdateHp { delta }
            | Action::UpdateMp { delta }
            | Action::UpdateCreepHp { delta } => seq.serialize_element(delta)?,
            Action::ChangeCardCount { card, delta } => {
                seq.serialize_element(card.as_ref())?;
                seq.serialize_element(delta)?;
            }
            Action::SetCreep { creep, hp } | Action::SetNextCreep { creep, hp } => {
                seq.serialize_element(CreepType::label(*creep))?;
                seq.serialize_element(hp)?;
            }
            Action::Narrate { message, .. } => seq.serialize_element(message)?,
        }
        seq.end()
    }
}

impl Serialize for ActionLog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
