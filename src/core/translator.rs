use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            cta::CtaMsg, enhancer::EnhancerMsg, nav::NavMsg, notice::NoticeMsg, system::SystemMsg,
            Msg,
        },
        raw_msg::{RawMsg, Target},
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Click(target) => translate_click(target, state),

        // Timers
        RawMsg::NoticeExpired(id) => vec![Msg::Notice(NoticeMsg::Expired(id))],
        RawMsg::CtaRebindDue => vec![Msg::Cta(CtaMsg::Rebind)],

        RawMsg::FullscreenChanged(active) => {
            vec![Msg::Enhancer(EnhancerMsg::FullscreenChanged(active))]
        }

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // Digits address the TOC on the first slide and the CTA row on the last one.
    if let Some(digit) = digit(&key) {
        let controls = state.navigator.controls();
        if controls.toc_visible && digit <= state.deck().toc.len() {
            return translate_click(Target::TocEntry(digit - 1), state);
        }
        if controls.next_disabled && digit <= state.deck().cta_buttons.len() {
            return translate_click(Target::CtaButton(digit - 1), state);
        }
    }

    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn digit(key: &KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.is_empty() => c
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .filter(|d| *d > 0),
        _ => None,
    }
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::NextSlide => vec![Msg::Nav(NavMsg::Next)],
        Action::PreviousSlide => vec![Msg::Nav(NavMsg::Previous)],
        Action::FirstSlide => vec![Msg::Nav(NavMsg::First)],
        Action::LastSlide => vec![Msg::Nav(NavMsg::GoTo(
            state.navigator.last_index() as i64,
        ))],
        Action::ShowOverview => vec![Msg::Enhancer(EnhancerMsg::ShowOverview)],
        Action::ShowHelp => vec![Msg::Enhancer(EnhancerMsg::ShowHelp)],
        Action::ToggleFullscreen => vec![Msg::Enhancer(EnhancerMsg::ToggleFullscreen)],
        Action::TogglePrint => vec![Msg::Enhancer(EnhancerMsg::TogglePrint)],
        Action::DismissNotice => {
            if state.notice.is_visible() {
                vec![Msg::Notice(NoticeMsg::Close)]
            } else {
                vec![]
            }
        }
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
    }
}

/// Translates a click on a rendered control. Disabled or unbound controls do nothing.
fn translate_click(target: Target, state: &AppState) -> Vec<Msg> {
    let controls = state.navigator.controls();
    match target {
        Target::PreviousButton if !controls.prev_disabled => vec![Msg::Nav(NavMsg::Previous)],
        Target::NextButton if !controls.next_disabled => vec![Msg::Nav(NavMsg::Next)],
        Target::PreviousButton | Target::NextButton => vec![],
        Target::Home => vec![Msg::Nav(NavMsg::GoTo(0))],
        Target::TocEntry(entry) => match state.deck().toc_target(entry) {
            Some(index) => vec![Msg::Nav(NavMsg::GoTo(index))],
            None => vec![],
        },
        Target::CtaButton(index) => match state.cta.handler(index) {
            Some(action) => vec![Msg::Cta(CtaMsg::Trigger(action.clone()))],
            None => {
                tracing::debug!(index, "CTA control has no bound handler");
                vec![]
            }
        },
        Target::NoticeClose => vec![Msg::Notice(NoticeMsg::Close)],
        Target::FullscreenButton => vec![Msg::Enhancer(EnhancerMsg::ToggleFullscreen)],
        Target::HelpButton => vec![Msg::Enhancer(EnhancerMsg::ShowHelp)],
    }
}
