//! Vote values and the local vote transition table.
//!
//! The server owns vote totals. These types describe the client copy which
//! is mutated optimistically when the user taps a vote button.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("Unknown vote intent: {0}")]
pub struct ParseVoteIntentError(String);

/// Requested vote action. Wire format is `"upvote"` or `"downvote"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteIntent {
    Upvote,
    Downvote,
}

impl VoteIntent {
    pub fn opposite(self) -> Self {
        match self {
            Self::Upvote => Self::Downvote,
            Self::Downvote => Self::Upvote,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upvote => "upvote",
            Self::Downvote => "downvote",
        }
    }
}

impl fmt::Display for VoteIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteIntent {
    type Err = ParseVoteIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" | "upvote" => Ok(Self::Upvote),
            "down" | "downvote" => Ok(Self::Downvote),
            other => Err(ParseVoteIntentError(other.to_string())),
        }
    }
}

/// Current vote of the requesting user.
///
/// Serialized as an optional [VoteIntent], so `null` means [VoteValue::None].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(from = "Option<VoteIntent>", into = "Option<VoteIntent>")]
pub enum VoteValue {
    #[default]
    None,
    Upvote,
    Downvote,
}

impl VoteValue {
    pub fn as_intent(self) -> Option<VoteIntent> {
        match self {
            Self::None => None,
            Self::Upvote => Some(VoteIntent::Upvote),
            Self::Downvote => Some(VoteIntent::Downvote),
        }
    }

    /// Contribution of this vote to the report score.
    pub fn weight(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Upvote => 1,
            Self::Downvote => -1,
        }
    }
}

impl From<VoteIntent> for VoteValue {
    fn from(value: VoteIntent) -> Self {
        match value {
            VoteIntent::Upvote => Self::Upvote,
            VoteIntent::Downvote => Self::Downvote,
        }
    }
}

impl From<Option<VoteIntent>> for VoteValue {
    fn from(value: Option<VoteIntent>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<VoteValue> for Option<VoteIntent> {
    fn from(value: VoteValue) -> Self {
        value.as_intent()
    }
}

impl fmt::Display for VoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_intent() {
            Some(intent) => intent.fmt(f),
            None => f.write_str("none"),
        }
    }
}

/// What a tap does to the current vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// No previous vote
    Add,
    /// Previous vote was the opposite of the intent
    Switch,
    /// Previous vote equals the intent
    Retract,
}

impl VoteTransition {
    pub fn new(current: VoteValue, intent: VoteIntent) -> Self {
        match current.as_intent() {
            None => Self::Add,
            Some(previous) if previous == intent => Self::Retract,
            Some(_) => Self::Switch,
        }
    }
}

/// Vote counters of one report and the vote of the viewing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteState {
    pub upvotes: i64,
    pub downvotes: i64,
    pub current: VoteValue,
}

impl VoteState {
    pub fn new(upvotes: i64, downvotes: i64, current: VoteValue) -> Self {
        Self {
            upvotes,
            downvotes,
            current,
        }
    }

    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }

    pub fn count(&self, intent: VoteIntent) -> i64 {
        match intent {
            VoteIntent::Upvote => self.upvotes,
            VoteIntent::Downvote => self.downvotes,
        }
    }

    fn count_mut(&mut self, intent: VoteIntent) -> &mut i64 {
        match intent {
            VoteIntent::Upvote => &mut self.upvotes,
            VoteIntent::Downvote => &mut self.downvotes,
        }
    }

    fn increment(&mut self, intent: VoteIntent) {
        *self.count_mut(intent) += 1;
    }

    /// Decrements by exactly one. An inconsistent server snapshot can
    /// make the counter negative until the next reload.
    fn decrement(&mut self, intent: VoteIntent) {
        *self.count_mut(intent) -= 1;
    }

    /// Pure transition for one vote tap.
    pub fn next_state(&self, intent: VoteIntent) -> VoteState {
        let mut next = *self;
        match VoteTransition::new(self.current, intent) {
            VoteTransition::Retract => {
                next.decrement(intent);
                next.current = VoteValue::None;
            }
            VoteTransition::Switch => {
                next.increment(intent);
                next.decrement(intent.opposite());
                next.current = intent.into();
            }
            VoteTransition::Add => {
                next.increment(intent);
                next.current = intent.into();
            }
        }
        next
    }
}

impl fmt::Display for VoteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "up: {}, down: {}, your vote: {}",
            self.upvotes, self.downvotes, self.current
        )
    }
}
