use std::collections::VecDeque;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    observer::Observers,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};

/// Upper bound on update/execute rounds per cycle. Zero-delay timers feed
/// messages back immediately; a bug there must not spin forever.
const MAX_ROUNDS: usize = 32;

/// Integration point between the Elm core and its host
///
/// Owns the application state for the whole session. Every accepted
/// navigation is followed by the observer chain, in registration order.
pub struct Runtime {
    state: AppState,
    observers: Observers,
    msg_queue: VecDeque<Msg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime; commands queue up until taken
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            observers: Observers::with_defaults(),
            msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime whose commands run through a [`CmdExecutor`]
    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(runtime.raw_msg_tx.clone()));
        runtime
    }

    /// Replace the observer chain
    pub fn set_observers(&mut self, observers: Observers) {
        self.observers = observers;
    }

    pub fn observers(&self) -> &Observers {
        &self.observers
    }

    /// Add TUI command sender support to existing executor
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) -> Result<()> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_tui_sender(tui_sender);
                Ok(())
            }
            None => Err(eyre!(
                "No executor available. Use Runtime::new_with_executor() first."
            )),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Moves to a slide before the session starts, without counting a view
    /// or notifying observers.
    pub fn seek(&mut self, index: i64) -> bool {
        let moved = self.state.navigator.go_to(index).is_some();
        self.state.navigator.take_transition();
        moved
    }

    /// Send message directly
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    ///
    /// Host input shares the channel with timer callbacks, so both are seen
    /// in arrival order.
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        if let Err(e) = self.raw_msg_tx.send(raw_msg) {
            tracing::warn!("raw message dropped: {e}");
        }
    }

    /// Sender for timers and other tasks outside the loop
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Take pending commands
    pub fn take_pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message, then the observers if it moved the navigator
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            tracing::debug!(?msg, "processing message");
        }
        let state = std::mem::take(&mut self.state);
        let (mut new_state, mut commands) = update(msg, state);

        if let Some(transition) = new_state.navigator.take_transition() {
            tracing::debug!(from = transition.from, to = transition.to, "slide changed");
            commands.extend(self.observers.notify(&transition, &mut new_state));
        }
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate and process everything queued so far
    ///
    /// Raw messages are taken one at a time and translated against the state
    /// left by everything before them.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        loop {
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }

            let Ok(raw_msg) = self.raw_msg_rx.try_recv() else {
                break;
            };
            if !raw_msg.is_frequent() {
                tracing::trace!(?raw_msg, "translating raw message");
            }
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        all_commands
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        let Some(executor) = &self.cmd_executor else {
            return Err(eyre!(
                "No command executor available. Use Runtime::new_with_executor() to configure."
            ));
        };
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        Ok(executor.execute_commands(&commands))
    }

    /// Process messages and execute commands until nothing is left to do
    ///
    /// Returns the failures reported by the executor.
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        let mut failures = vec![];
        for _ in 0..MAX_ROUNDS {
            self.process_all_messages();
            failures.extend(self.execute_pending_commands()?);
            if self.is_idle() {
                return Ok(failures);
            }
        }
        tracing::warn!("update cycle did not settle after {MAX_ROUNDS} rounds");
        Ok(failures)
    }

    fn is_idle(&self) -> bool {
        self.msg_queue.is_empty() && self.raw_msg_rx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{cta::CtaMsg, nav::NavMsg},
            raw_msg::Target,
        },
        domain::{
            cta::CtaAction,
            deck::{CtaButton, Deck, Slide},
        },
        infrastructure::config::Config,
    };

    fn state_with(delay_ms: u64) -> AppState {
        let mut config = Config::default();
        let mut deck = Deck::new(
            "Test",
            (1..=4)
                .map(|i| Slide::new(format!("Slide {i}"), vec![]))
                .collect(),
        );
        deck.cta_buttons = vec![CtaButton {
            label: "Login".into(),
            action: "login".into(),
        }];
        config.deck = deck;
        config.notice.cta_rebind_delay_ms = delay_ms;
        AppState::new_with_config(config)
    }

    #[test]
    fn test_navigation_runs_observers() {
        let mut runtime = Runtime::new(state_with(50));
        runtime.send_msg(Msg::Nav(NavMsg::Next));
        let commands = runtime.process_all_messages();

        assert!(commands.is_empty());
        assert_eq!(runtime.state().navigator.index(), 1);
        assert_eq!(runtime.state().usage.views(2), 1);
    }

    #[test]
    fn test_rejected_navigation_skips_observers() {
        let mut runtime = Runtime::new(state_with(50));
        runtime.send_msg(Msg::Nav(NavMsg::Previous));
        runtime.send_msg(Msg::Nav(NavMsg::GoTo(9)));
        runtime.process_all_messages();

        assert_eq!(runtime.state().usage.total_interactions(), 0);
    }

    #[test]
    fn test_arriving_on_last_slide_schedules_rebind() {
        let mut runtime = Runtime::new(state_with(50));
        runtime.send_msg(Msg::Nav(NavMsg::Last));
        runtime.process_all_messages();

        assert_eq!(
            runtime.take_pending_commands(),
            vec![Cmd::ScheduleCtaRebind {
                after: Duration::from_millis(50)
            }]
        );
        assert!(runtime.take_pending_commands().is_empty());
    }

    #[test]
    fn test_custom_observer_order() {
        let seen = Arc::new(Mutex::new(vec![]));
        let mut observers = Observers::new();
        for name in ["first", "second"] {
            let seen = Arc::clone(&seen);
            observers.register(name, move |_, _| {
                if let Ok(mut seen) = seen.lock() {
                    seen.push(name);
                }
                vec![]
            });
        }
        let mut runtime = Runtime::new(state_with(50));
        runtime.set_observers(observers);
        runtime.send_msg(Msg::Nav(NavMsg::Next));
        runtime.process_all_messages();

        let seen = seen.lock().map(|s| s.clone()).unwrap_or_default();
        assert_eq!(seen, vec!["first", "second"]);
        assert_eq!(runtime.observers().names(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_zero_delay_rebind_settles_in_one_cycle() -> Result<()> {
        let mut runtime = Runtime::new_with_executor(state_with(0));
        runtime.send_msg(Msg::Nav(NavMsg::Last));
        let failures = runtime.run_update_cycle()?;

        assert!(failures.is_empty());
        assert!(runtime.state().cta.is_bound());
        assert_eq!(runtime.state().cta.binds(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_repeated_rebind_is_idempotent() -> Result<()> {
        let mut runtime = Runtime::new_with_executor(state_with(0));
        for _ in 0..3 {
            runtime.send_msg(Msg::Nav(NavMsg::Last));
            runtime.run_update_cycle()?;
        }
        runtime.send_raw_msg(RawMsg::Click(Target::CtaButton(0)));
        runtime.run_update_cycle()?;

        assert_eq!(runtime.state().cta.handler_count(), 1);
        assert_eq!(runtime.state().usage.cta_clicks("login"), 1);
        let title = runtime
            .state()
            .notice
            .current()
            .map(|n| n.content.title.clone());
        assert_eq!(title.as_deref(), Some("Login to Asana"));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_auto_dismiss() -> Result<()> {
        let mut runtime = Runtime::new_with_executor(state_with(0));
        runtime.send_msg(Msg::Cta(CtaMsg::Trigger(CtaAction::Contact)));
        runtime.run_update_cycle()?;
        assert!(runtime.state().notice.is_visible());

        tokio::time::sleep(Duration::from_secs(9)).await;
        runtime.run_update_cycle()?;
        assert!(runtime.state().notice.is_visible());

        tokio::time::sleep(Duration::from_secs(2)).await;
        runtime.run_update_cycle()?;
        assert!(!runtime.state().notice.is_visible());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_keeps_newer_notice() -> Result<()> {
        let mut runtime = Runtime::new_with_executor(state_with(0));
        runtime.send_msg(Msg::Cta(CtaMsg::Trigger(CtaAction::Login)));
        runtime.run_update_cycle()?;

        tokio::time::sleep(Duration::from_secs(6)).await;
        runtime.send_msg(Msg::Cta(CtaMsg::Trigger(CtaAction::Schedule)));
        runtime.run_update_cycle()?;

        // First timer fires at 10s and must not remove the second notice.
        tokio::time::sleep(Duration::from_secs(5)).await;
        runtime.run_update_cycle()?;
        let title = runtime
            .state()
            .notice
            .current()
            .map(|n| n.content.title.clone());
        assert_eq!(title.as_deref(), Some("Schedule Training"));

        tokio::time::sleep(Duration::from_secs(6)).await;
        runtime.run_update_cycle()?;
        assert!(runtime.state().notice.current().is_none());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_cta_key_after_rebind_timer_fired() -> Result<()> {
        let mut runtime = Runtime::new_with_executor(state_with(50));
        runtime.send_msg(Msg::Nav(NavMsg::Last));
        runtime.run_update_cycle()?;
        assert!(!runtime.state().cta.is_bound());

        // The timer has posted its message but no cycle has run since.
        tokio::time::sleep(Duration::from_millis(100)).await;
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('1'),
            KeyModifiers::NONE,
        )));
        runtime.run_update_cycle()?;

        assert!(runtime.state().cta.is_bound());
        let title = runtime
            .state()
            .notice
            .current()
            .map(|n| n.content.title.clone());
        assert_eq!(title.as_deref(), Some("Login to Asana"));
        Ok(())
    }

    #[test]
    fn test_raw_messages_see_earlier_effects() {
        let mut runtime = Runtime::new(state_with(50));
        // Previous is disabled on the first slide, but not after Next ran.
        runtime.send_raw_msg(RawMsg::Click(Target::NextButton));
        runtime.send_raw_msg(RawMsg::Click(Target::PreviousButton));
        runtime.process_all_messages();

        assert_eq!(runtime.state().navigator.index(), 0);
        assert_eq!(runtime.state().usage.total_interactions(), 2);
    }

    #[test]
    fn test_seek_does_not_count() {
        let mut runtime = Runtime::new(state_with(50));
        assert!(runtime.seek(3));
        assert!(!runtime.seek(10));
        assert_eq!(runtime.state().navigator.index(), 3);
        assert_eq!(runtime.state().usage.total_interactions(), 0);
        assert!(runtime.take_pending_commands().is_empty());
    }

    #[test]
    fn test_key_translation_through_queue() {
        let mut runtime = Runtime::new(state_with(50));
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        runtime.process_all_messages();
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_execute_without_executor_fails() {
        let mut runtime = Runtime::new(state_with(50));
        assert!(runtime.execute_pending_commands().is_err());
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(runtime.add_tui_sender(tx).is_err());
    }
}
