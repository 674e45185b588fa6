use serde::{Deserialize, Serialize};

use crate::domain::notice::NoticeContent;

/// Messages specific to NoticeState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeMsg {
    Show(NoticeContent),
    /// Auto-dismiss timer fired for the notice with this id.
    Expired(u64),
    /// Manual dismissal of whatever notice is live.
    Close,
}
