use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::cta::CtaAction;

/// In-memory usage counters for one session.
#[derive(Debug, Clone)]
pub struct UsageStats {
    started_at: DateTime<Local>,
    slide_views: BTreeMap<usize, u32>,
    total_interactions: u64,
    cta_clicks: BTreeMap<String, u32>,
}

/// Session-end report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub duration_secs: i64,
    pub slide_views: BTreeMap<usize, u32>,
    pub total_interactions: u64,
    pub cta_clicks: BTreeMap<String, u32>,
    /// Furthest slide viewed over deck length.
    pub completion_rate: f64,
}

impl Default for UsageStats {
    fn default() -> Self {
        Self::new(Local::now())
    }
}

impl UsageStats {
    pub fn new(started_at: DateTime<Local>) -> Self {
        Self {
            started_at,
            slide_views: BTreeMap::new(),
            total_interactions: 0,
            cta_clicks: BTreeMap::new(),
        }
    }

    /// Counts a view of the 1-based `slide`.
    pub fn record_view(&mut self, slide: usize) {
        *self.slide_views.entry(slide).or_default() += 1;
        self.total_interactions += 1;
    }

    pub fn record_cta(&mut self, action: &CtaAction) {
        *self.cta_clicks.entry(action.token().to_string()).or_default() += 1;
    }

    pub fn views(&self, slide: usize) -> u32 {
        self.slide_views.get(&slide).copied().unwrap_or_default()
    }

    pub fn cta_clicks(&self, token: &str) -> u32 {
        self.cta_clicks.get(token).copied().unwrap_or_default()
    }

    pub fn total_interactions(&self) -> u64 {
        self.total_interactions
    }

    pub fn summary(&self, now: DateTime<Local>, deck_len: usize) -> UsageSummary {
        let furthest = self.slide_views.keys().next_back().copied().unwrap_or(0);
        let completion_rate = if deck_len == 0 {
            0.0
        } else {
            furthest as f64 / deck_len as f64
        };
        UsageSummary {
            duration_secs: (now - self.started_at).num_seconds(),
            slide_views: self.slide_views.clone(),
            total_interactions: self.total_interactions,
            cta_clicks: self.cta_clicks.clone(),
            completion_rate,
        }
    }
}
