//! Machine configuration.

use serde::Deserialize;

/// Options applied when a machine is created.
///
/// Deserializable so a host application can embed it in its own config.
/// Missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use signalgraph::FsmConfig;
///
/// let config: FsmConfig = serde_json::from_str(r#"{ "record_history": true }"#).unwrap();
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FsmConfig {
    /// Record every successful step in the machine's history
    pub record_history: bool,

    /// Keep at most this many steps; `None` keeps all of them
    pub history_limit: Option<usize>,
}

impl FsmConfig {
    /// Config with history recording switched on and no limit.
    pub fn with_history() -> Self {
        Self {
            record_history: true,
            history_limit: None,
        }
    }

    /// Bound the recorded history to the `limit` most recent steps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
