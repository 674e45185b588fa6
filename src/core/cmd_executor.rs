use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    raw_msg::RawMsg,
};

/// Command executor that turns Elm commands into timers, host requests and logs
///
/// Timers are fire-and-forget: they post a [`RawMsg`] back into the runtime
/// and are never cancelled. A zero delay posts immediately without spawning.
#[derive(Clone)]
pub struct CmdExecutor {
    raw_sender: mpsc::UnboundedSender<RawMsg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new(raw_sender: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_sender,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand in the runner.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::ScheduleNoticeDismiss { id, after } => {
                self.post_after(*after, RawMsg::NoticeExpired(*id))?;
            }

            Cmd::ScheduleCtaRebind { after } => {
                self.post_after(*after, RawMsg::CtaRebindDue)?;
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(sender) = &self.tui_sender {
                    sender.send(tui_cmd.clone())?;
                } else {
                    log::warn!("TuiCommand ignored: no TUI attached: {tui_cmd:?}");
                }
            }

            Cmd::EmitUsageSummary(summary) => match serde_json::to_string(summary) {
                Ok(json) => tracing::info!(summary = %json, "presentation session summary"),
                Err(e) => tracing::warn!("failed to serialize usage summary: {e}"),
            },

            Cmd::LogInfo { message } => {
                tracing::info!("{message}");
            }
        }
        Ok(())
    }

    /// Execute multiple commands; a failing command is logged and does not stop the rest
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|cmd| match self.execute_command(cmd) {
                Ok(()) => None,
                Err(e) => {
                    let message = format!("Failed to execute {cmd:?}: {e}");
                    tracing::error!("{message}");
                    Some(message)
                }
            })
            .collect()
    }

    fn post_after(&self, after: Duration, msg: RawMsg) -> Result<()> {
        if after.is_zero() {
            self.raw_sender.send(msg)?;
            return Ok(());
        }

        let sender = self.raw_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // The runtime may already be gone at shutdown.
            let _ = sender.send(msg);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_zero_delay_posts_immediately() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new(tx);

        executor.execute_command(&Cmd::ScheduleCtaRebind {
            after: Duration::ZERO,
        })?;

        assert_eq!(rx.try_recv().ok(), Some(RawMsg::CtaRebindDue));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_dismiss_fires_after_delay() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new(tx);

        executor.execute_command(&Cmd::ScheduleNoticeDismiss {
            id: 7,
            after: Duration::from_secs(10),
        })?;

        tokio::time::sleep(Duration::from_secs(9)).await;
        assert!(rx.try_recv().is_err());

        let msg = rx.recv().await;
        assert_eq!(msg, Some(RawMsg::NoticeExpired(7)));
        Ok(())
    }

    #[tokio::test]
    async fn test_tui_command_routed() -> Result<()> {
        let (raw_tx, _raw_rx) = mpsc::unbounded_channel();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new(raw_tx);
        executor.set_tui_sender(tui_tx);

        let failures = executor.execute_commands(&[
            Cmd::Tui(TuiCommand::Fullscreen(true)),
            Cmd::LogInfo {
                message: "hello".into(),
            },
        ]);

        assert!(failures.is_empty());
        assert_eq!(tui_rx.try_recv().ok(), Some(TuiCommand::Fullscreen(true)));
        Ok(())
    }

    #[tokio::test]
    async fn test_closed_channel_is_reported() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let executor = CmdExecutor::new(tx);

        let failures = executor.execute_commands(&[Cmd::ScheduleCtaRebind {
            after: Duration::ZERO,
        }]);
        assert_eq!(failures.len(), 1);
    }
}
