//! Append-only action log and the sink abstraction the engine writes to.

use super::Action;

/// Destination for actions as the engine produces them.
///
/// Implementations must keep actions in the order they are recorded. The
/// in-memory [`ActionLog`] is the default; streaming sinks can forward each
/// action elsewhere as soon as it is produced.
pub trait ActionSink {
    fn record(&mut self, action: Action);
}

impl ActionSink for Vec<Action> {
    fn record(&mut self, action: Action) {
        self.push(action);
    }
}

impl<S: ActionSink + ?Sized> ActionSink for &mut S {
    fn record(&mut self, action: Action) {
        (**self).record(action);
    }
}

/// Ordered, append-only sequence of actions describing a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    /// Narration lines in order, regardless of tone.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().filter_map(Action::message)
    }

    pub fn into_vec(self) -> Vec<Action> {
        self.actions
    }
}

impl ActionSink for ActionLog {
    fn record(&mut self, action: Action) {
        self.actions.push(action);
    }
}

impl From<Vec<Action>> for ActionLog {
    fn from(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl IntoIterator for ActionLog {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

/// Sink that fans every action out to two sinks, in order.
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: ActionSink, B: ActionSink> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: ActionSink, B: ActionSink> ActionSink for Tee<A, B> {
    fn record(&mut self, action: Action) {
        self.first.record(action.clone());
        self.second.record(action);
    }
}
