use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub initialized: bool,
}

impl SystemState {
    /// Handles the messages that only touch system state.
    /// `Init` and `Quit` side effects that need the rest of the app state live in `update`.
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Init => {
                self.initialized = true;
                vec![]
            }
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }
            SystemMsg::Resize(width, height) => vec![Cmd::Tui(TuiCommand::Resize { width, height })],
        }
    }
}
