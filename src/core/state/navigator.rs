use serde::{Deserialize, Serialize};

use crate::{core::msg::nav::NavMsg, domain::text::percent};

pub const NEXT_LABEL: &str = "Next →";
pub const COMPLETE_LABEL: &str = "Complete";
pub const PREVIOUS_LABEL: &str = "← Previous";

/// An accepted navigation request. `from == to` when re-entering the same slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

/// Navigation control state derived from the current index.
#[derive(Debug, Clone, PartialEq)]
pub struct NavControls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub next_label: &'static str,
    pub toc_visible: bool,
    /// Fill fraction in `(0, 1]`.
    pub progress: f64,
    /// 1-based position.
    pub current: usize,
    pub total: usize,
}

impl NavControls {
    /// Rounded percentage, e.g. `"4 of 8 (50%)"` reads 50.
    pub fn percent(&self) -> u16 {
        percent(self.current, self.total)
    }

    pub fn counter(&self) -> String {
        format!("{} of {} ({}%)", self.current, self.total, self.percent())
    }
}

/// Per-slide visibility. `exposed` is what assistive technology may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideView {
    pub number: usize,
    pub active: bool,
    pub exposed: bool,
}

/// Owns the current slide index of a deck with a fixed length.
///
/// The index is always in `[0, len - 1]`. Every accepted request records a
/// [`Transition`] which the runtime takes to drive re-rendering and the
/// observer chain. Rejected requests change nothing and record nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    len: usize,
    pending: Option<Transition>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Navigator {
    /// A deck always has at least one slide; `len` of 0 is treated as 1.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            pending: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.last_index()
    }

    pub fn next(&mut self) -> Option<Transition> {
        if self.index < self.last_index() {
            self.transition(self.index + 1)
        } else {
            None
        }
    }

    pub fn previous(&mut self) -> Option<Transition> {
        if self.index > 0 {
            self.transition(self.index - 1)
        } else {
            None
        }
    }

    /// Moves to `index` if it addresses a slide; anything else is ignored.
    pub fn go_to(&mut self, index: i64) -> Option<Transition> {
        match usize::try_from(index) {
            Ok(i) if i < self.len => self.transition(i),
            _ => {
                tracing::debug!(index, len = self.len, "ignoring out-of-range navigation");
                None
            }
        }
    }

    pub fn update(&mut self, msg: NavMsg) -> Option<Transition> {
        match msg {
            NavMsg::Next => self.next(),
            NavMsg::Previous => self.previous(),
            NavMsg::GoTo(index) => self.go_to(index),
            NavMsg::First => self.go_to(0),
            NavMsg::Last => self.go_to(self.last_index() as i64),
        }
    }

    /// Takes the transition recorded by the last accepted request.
    pub fn take_transition(&mut self) -> Option<Transition> {
        self.pending.take()
    }

    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.len as f64
    }

    pub fn controls(&self) -> NavControls {
        NavControls {
            prev_disabled: self.is_first(),
            next_disabled: self.is_last(),
            next_label: if self.is_last() {
                COMPLETE_LABEL
            } else {
                NEXT_LABEL
            },
            toc_visible: self.is_first(),
            progress: self.progress(),
            current: self.index + 1,
            total: self.len,
        }
    }

    pub fn slide_views(&self) -> Vec<SlideView> {
        (0..self.len)
            .map(|i| SlideView {
                number: i + 1,
                active: i == self.index,
                exposed: i == self.index,
            })
            .collect()
    }

    fn transition(&mut self, to: usize) -> Option<Transition> {
        let transition = Transition {
            from: self.index,
            to,
        };
        self.index = to;
        self.pending = Some(transition);
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    const N: usize = 8;

    fn at(index: i64) -> Navigator {
        let mut nav = Navigator::new(N);
        nav.go_to(index);
        nav.take_transition();
        nav
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new(N);
        assert_eq!(nav.index(), 0);
        assert_eq!(nav.len(), N);
        assert!(nav.is_first());
        assert_eq!(nav.clone().take_transition(), None);
    }

    #[test]
    fn test_zero_length_is_treated_as_single_slide() {
        let mut nav = Navigator::new(0);
        assert_eq!(nav.len(), 1);
        assert!(nav.is_first() && nav.is_last());
        assert_eq!(nav.next(), None);
        assert_eq!(nav.previous(), None);
    }

    #[test]
    fn test_go_to_every_valid_index() {
        for i in 0..N {
            let mut nav = Navigator::new(N);
            let transition = nav.go_to(i as i64);
            assert_eq!(transition, Some(Transition { from: 0, to: i }));
            assert_eq!(nav.index(), i);
            let views = nav.slide_views();
            assert_eq!(views.iter().filter(|v| v.active).count(), 1);
            assert_eq!(views.iter().filter(|v| v.exposed).count(), 1);
            assert!(views[i].active && views[i].exposed);
        }
    }

    #[rstest]
    #[case(-1)]
    #[case(-100)]
    #[case(8)]
    #[case(9)]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    fn test_go_to_out_of_range_is_ignored(#[case] index: i64) {
        let mut nav = at(3);
        assert_eq!(nav.go_to(index), None);
        assert_eq!(nav.index(), 3);
        assert_eq!(nav.take_transition(), None);
    }

    #[test]
    fn test_go_to_current_is_a_transition() {
        let mut nav = at(2);
        assert_eq!(nav.go_to(2), Some(Transition { from: 2, to: 2 }));
    }

    #[test]
    fn test_next_at_last_is_noop() {
        let mut nav = at(7);
        assert_eq!(nav.next(), None);
        assert_eq!(nav.index(), 7);
    }

    #[test]
    fn test_previous_at_first_is_noop() {
        let mut nav = Navigator::new(N);
        assert_eq!(nav.previous(), None);
        assert_eq!(nav.index(), 0);
        assert!(nav.controls().prev_disabled);
    }

    #[test]
    fn test_next_then_previous() {
        let mut nav = Navigator::new(N);
        assert_eq!(nav.next(), Some(Transition { from: 0, to: 1 }));
        assert_eq!(nav.previous(), Some(Transition { from: 1, to: 0 }));
        assert_eq!(nav.take_transition(), Some(Transition { from: 1, to: 0 }));
        assert_eq!(nav.take_transition(), None);
    }

    #[test]
    fn test_update_first_and_last() {
        let mut nav = at(4);
        assert_eq!(nav.update(NavMsg::Last), Some(Transition { from: 4, to: 7 }));
        assert_eq!(nav.update(NavMsg::First), Some(Transition { from: 7, to: 0 }));
    }

    #[rstest]
    #[case(0, true, false, NEXT_LABEL, true)]
    #[case(1, false, false, NEXT_LABEL, false)]
    #[case(6, false, false, NEXT_LABEL, false)]
    #[case(7, false, true, COMPLETE_LABEL, false)]
    fn test_controls(
        #[case] index: i64,
        #[case] prev_disabled: bool,
        #[case] next_disabled: bool,
        #[case] next_label: &str,
        #[case] toc_visible: bool,
    ) {
        let controls = at(index).controls();
        assert_eq!(controls.prev_disabled, prev_disabled);
        assert_eq!(controls.next_disabled, next_disabled);
        assert_eq!(controls.next_label, next_label);
        assert_eq!(controls.toc_visible, toc_visible);
    }

    #[rstest]
    #[case(0, 0.125, 13)]
    #[case(3, 0.5, 50)]
    #[case(7, 1.0, 100)]
    fn test_progress(#[case] index: i64, #[case] fraction: f64, #[case] percent: u16) {
        let controls = at(index).controls();
        assert!((controls.progress - fraction).abs() < f64::EPSILON);
        assert_eq!(controls.percent(), percent);
    }

    #[test]
    fn test_counter_text() {
        assert_eq!(at(3).controls().counter(), "4 of 8 (50%)");
    }

    #[test]
    fn test_seven_nexts_reach_complete() {
        let mut nav = Navigator::new(N);
        for _ in 0..7 {
            assert!(nav.next().is_some());
        }
        assert_eq!(nav.index(), 7);
        let controls = nav.controls();
        assert_eq!(controls.next_label, COMPLETE_LABEL);
        assert!(!controls.toc_visible);
        assert_eq!(nav.next(), None);
    }
}
