use serde::{Deserialize, Serialize};

/// Navigation requests handled by the Navigator.
///
/// `GoTo` carries a signed 0-based index so that requests below the first
/// slide are representable; the navigator ignores anything out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    Next,
    Previous,
    GoTo(i64),
    First,
    Last,
}
