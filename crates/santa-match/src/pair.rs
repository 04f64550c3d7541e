use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a person taking part in an exchange.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Creates a participant from its display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Participant {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered `giver -> receiver` pair.
///
/// The same type is used for blacklist entries, forced matches and the output
/// assignment. Couples reuse it as well and are compared with
/// [`Pair::same_members`], ignoring direction. On the wire a pair is a two
/// element array `[giver, receiver]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(
    from = "(Participant, Participant)",
    into = "(Participant, Participant)"
)]
pub struct Pair {
    /// Participant buying the gift.
    pub giver: Participant,
    /// Participant receiving the gift.
    pub receiver: Participant,
}

impl Pair {
    /// Creates a pair from anything convertible into participants.
    pub fn new(giver: impl Into<Participant>, receiver: impl Into<Participant>) -> Self {
        Self {
            giver: giver.into(),
            receiver: receiver.into(),
        }
    }

    /// Returns the pair with giver and receiver swapped.
    pub fn reversed(&self) -> Self {
        Self {
            giver: self.receiver.clone(),
            receiver: self.giver.clone(),
        }
    }

    /// Returns true when both pairs name the same two people in either order.
    pub fn same_members(&self, other: &Pair) -> bool {
        (self.giver == other.giver && self.receiver == other.receiver)
            || (self.giver == other.receiver && self.receiver == other.giver)
    }

    /// Returns true when giver and receiver are the same person.
    pub fn is_self_pair(&self) -> bool {
        self.giver == self.receiver
    }
}

impl From<(Participant, Participant)> for Pair {
    fn from((giver, receiver): (Participant, Participant)) -> Self {
        Self { giver, receiver }
    }
}

impl From<Pair> for (Participant, Participant) {
    fn from(pair: Pair) -> Self {
        (pair.giver, pair.receiver)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.giver, self.receiver)
    }
}
