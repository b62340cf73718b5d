use std::fmt;

/// Result of a user action that may be skipped locally without a network call
#[derive(Debug, PartialEq)]
pub enum Outcome<T> {
    Done(T),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Post text was empty or whitespace
    EmptyText,
    /// Bootstrap has not resolved the demo user
    NoIdentity,
    /// Payment requested before any order exists
    NoTrackedOrder,
    /// Another order action is still waiting on the backend
    InFlight,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::EmptyText => "empty_text",
            SkipReason::NoIdentity => "no_identity",
            SkipReason::NoTrackedOrder => "no_tracked_order",
            SkipReason::InFlight => "in_flight",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
