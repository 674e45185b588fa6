use chrono::Local;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{cta::CtaMsg, enhancer::EnhancerMsg, system::SystemMsg, Msg},
        state::AppState,
    },
    domain::notice::{NoticeContent, NoticeKind},
};

pub const HELP_TITLE: &str = "Keyboard Shortcuts";
pub const HELP_BODY: &str = "→ or Space: Next slide • ←: Previous slide • Home: First slide • \
                             End: Last slide • Esc: Show current slide info • f: Fullscreen • \
                             p: Print layout (shows all slides) • x: Close notice • q: Quit";
pub const OVERVIEW_TITLE: &str = "Navigation Guide";

/// Elm-like update function
/// Returns new state and list of commands from current state and message
///
/// Navigation only moves the navigator here; the transition it records is
/// picked up by the runtime, which runs the observer chain.
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::Nav(nav_msg) => {
            state.navigator.update(nav_msg);
            (state, vec![])
        }

        Msg::Notice(notice_msg) => {
            let commands = state.notice.update(notice_msg);
            (state, commands)
        }

        Msg::Cta(CtaMsg::Rebind) => {
            let buttons = state.deck().cta_buttons.clone();
            let bound = state.cta.bind(&buttons);
            let message = format!(
                "Initialized {bound} CTA buttons (pass {})",
                state.cta.binds()
            );
            (state, vec![Cmd::LogInfo { message }])
        }

        Msg::Cta(CtaMsg::Trigger(action)) => {
            tracing::info!(action = action.token(), "handling CTA action");
            state.usage.record_cta(&action);
            let commands = state.notice.notify(action.notice());
            (state, commands)
        }

        Msg::Enhancer(enhancer_msg) => {
            let commands = update_enhancer(enhancer_msg, &mut state);
            (state, commands)
        }

        Msg::System(SystemMsg::Init) => {
            state.system.update(SystemMsg::Init);
            // A deck that opens on its final slide still needs its CTA controls bound.
            let commands = if state.navigator.is_last() {
                vec![Cmd::ScheduleCtaRebind {
                    after: state.config.config.notice.cta_rebind_delay(),
                }]
            } else {
                vec![]
            };
            (state, commands)
        }

        Msg::System(SystemMsg::Quit) => {
            state.system.update(SystemMsg::Quit);
            let summary = state.usage.summary(Local::now(), state.navigator.len());
            (state, vec![Cmd::EmitUsageSummary(summary)])
        }

        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }
    }
}

fn update_enhancer(msg: EnhancerMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        EnhancerMsg::TogglePrint => {
            let active = state.print.toggle();
            tracing::debug!(active, "print layout toggled");
            vec![]
        }
        EnhancerMsg::BeginPrint => {
            state.print.begin();
            vec![]
        }
        EnhancerMsg::EndPrint => {
            state.print.end();
            vec![]
        }
        EnhancerMsg::ToggleFullscreen => {
            let active = state.fullscreen.toggle();
            vec![Cmd::Tui(TuiCommand::Fullscreen(active))]
        }
        EnhancerMsg::FullscreenChanged(active) => {
            state.fullscreen.set(active);
            vec![]
        }
        EnhancerMsg::ShowHelp => state.notice.notify(NoticeContent::new(
            HELP_TITLE,
            HELP_BODY,
            NoticeKind::Secondary,
        )),
        EnhancerMsg::ShowOverview => {
            let content = overview(state);
            state.notice.notify(content)
        }
    }
}

/// Current-position summary shown by the overview key.
pub fn overview(state: &AppState) -> NoticeContent {
    let controls = state.navigator.controls();
    NoticeContent::new(
        OVERVIEW_TITLE,
        format!(
            "Currently on slide {}: \"{}\" ({}% complete). Use arrow keys, spacebar, or \
             navigation buttons to move between slides. Press Home/End for first/last slide.",
            controls.current,
            state.current_slide_name(),
            controls.percent()
        ),
        NoticeKind::Info,
    )
}
