//! Input signals and the catch-all failure sentinel.

use serde::Serialize;
use std::fmt;

/// Signal that activates a transition.
///
/// Real inputs are plain integers. The catch-all "else" edge of a state is
/// keyed on [`Signal::Failure`], a separate variant, so every `i32`
/// (negative values included) stays available as a real signal.
///
/// # Example
///
/// ```rust
/// use signalgraph::core::Signal;
///
/// assert_eq!(Signal::from(7), Signal::Value(7));
/// assert_eq!(Signal::from('M'), Signal::Value(77));
/// assert!(Signal::Failure.is_failure());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Matches exactly this input value.
    Value(i32),

    /// Matches any input no normal transition of the state accepts.
    Failure,
}

impl Signal {
    /// Check if this is the catch-all failure signal.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    /// The input value, or `None` for the failure signal.
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Failure => None,
        }
    }

    /// Check if an incoming input is matched by this signal as a normal
    /// transition. The failure signal never matches here; it is consulted
    /// separately after all normal transitions.
    pub fn matches(&self, input: i32) -> bool {
        self.value() == Some(input)
    }
}

impl From<i32> for Signal {
    fn from(value: i32) -> Self {
        Self::Value(value)
    }
}

impl From<char> for Signal {
    fn from(c: char) -> Self {
        Self::Value(c as i32)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Failure => f.write_str("failure"),
        }
    }
}
