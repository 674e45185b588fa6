use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::state::usage::UsageSummary;

/// Host (terminal) specific sub-commands executed by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    Fullscreen(bool),
}

/// Elm-like command definitions
/// Represents side effects (timers, host requests, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    /// Fire `RawMsg::NoticeExpired(id)` after `after`.
    ScheduleNoticeDismiss { id: u64, after: Duration },
    /// Fire `RawMsg::CtaRebindDue` after `after`.
    ScheduleCtaRebind { after: Duration },

    // Host requests
    Tui(TuiCommand),

    /// Session-end usage report.
    EmitUsageSummary(UsageSummary),

    // Logging related
    LogInfo { message: String },
}
