use std::time::Duration;

use crate::{
    core::{cmd::Cmd, msg::notice::NoticeMsg},
    domain::notice::NoticeContent,
};

pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_secs(10);

/// A live notice. `id` is unique for the lifetime of the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub content: NoticeContent,
}

/// Holds at most one live notice.
///
/// Showing a notice evicts the previous one. Auto-dismiss timers carry the id
/// they were scheduled for, so a timer that outlives its notice is a no-op.
#[derive(Debug, Clone)]
pub struct NoticeState {
    current: Option<Notice>,
    next_id: u64,
    auto_dismiss: Duration,
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_DISMISS)
    }
}

impl NoticeState {
    pub fn new(auto_dismiss: Duration) -> Self {
        Self {
            current: None,
            next_id: 1,
            auto_dismiss,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn auto_dismiss(&self) -> Duration {
        self.auto_dismiss
    }

    pub fn notify(&mut self, content: NoticeContent) -> Vec<Cmd> {
        let id = self.next_id;
        self.next_id += 1;
        if let Some(evicted) = self.current.replace(Notice { id, content }) {
            tracing::debug!(evicted = evicted.id, id, "replacing notice");
        }
        vec![Cmd::ScheduleNoticeDismiss {
            id,
            after: self.auto_dismiss,
        }]
    }

    /// Removes the notice only if `id` is still the live one.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) -> Option<Notice> {
        self.current.take()
    }

    /// NoticeState-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: NoticeMsg) -> Vec<Cmd> {
        match msg {
            NoticeMsg::Show(content) => self.notify(content),
            NoticeMsg::Expired(id) => {
                self.dismiss(id);
                vec![]
            }
            NoticeMsg::Close => {
                self.close();
                vec![]
            }
        }
    }
}
