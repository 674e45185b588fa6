use serde::{Deserialize, Serialize};

use crate::domain::cta::CtaAction;

/// Call-to-action messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CtaMsg {
    /// Deferred rebind of the final slide's controls.
    Rebind,
    Trigger(CtaAction),
}
