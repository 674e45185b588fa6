use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        tui::{self, TuiLike},
    },
    integration::runtime::Runtime,
    presentation::view::{self, HitMap},
};

/// Drives the Elm runtime from a terminal surface: events in, frames out.
///
/// The surface is injected so the same loop runs against a real terminal or
/// a `TestBackend`.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike>>,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    hit_map: HitMap,
}

impl AppRunner {
    pub fn new(config: Config, tui: Arc<Mutex<dyn TuiLike>>) -> Result<Self> {
        let mut runtime = Runtime::new_with_executor(AppState::new_with_config(config));
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx)?;
        Ok(Self {
            runtime,
            tui,
            tui_rx,
            hit_map: HitMap::default(),
        })
    }

    /// Opens the deck on the 1-based `slide` instead of the first one.
    /// Out-of-range values are ignored.
    pub fn start_at(mut self, slide: i64) -> Self {
        if !self.runtime.seek(slide - 1) {
            tracing::warn!(slide, "start slide out of range, opening the first slide");
        }
        self
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Run the main loop until the state asks to quit or the event source ends.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.runtime.send_msg(Msg::System(SystemMsg::Init));
        self.cycle().await?;
        self.render().await?;

        while !self.runtime.state().system.should_quit {
            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            let needs_render = match event {
                Some(event) => self.handle_event(event),
                None => {
                    self.runtime.send_raw_msg(RawMsg::Quit);
                    false
                }
            };

            self.cycle().await?;

            if needs_render && !self.runtime.state().system.should_quit {
                self.render().await?;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Queues the raw message for `event`; returns whether a redraw is due.
    fn handle_event(&mut self, event: tui::Event) -> bool {
        match event {
            tui::Event::Quit | tui::Event::Closed => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
            tui::Event::Tick => {
                self.runtime.send_raw_msg(RawMsg::Tick);
                false
            }
            tui::Event::Render => {
                self.runtime.send_raw_msg(RawMsg::Render);
                true
            }
            tui::Event::Resize(w, h) => {
                self.runtime.send_raw_msg(RawMsg::Resize(w, h));
                true
            }
            tui::Event::Key(key) => {
                self.runtime.send_raw_msg(RawMsg::Key(key));
                true
            }
            tui::Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(target) = self.hit_map.target_at(mouse.column, mouse.row) {
                        self.runtime.send_raw_msg(RawMsg::Click(target));
                    }
                    true
                }
                _ => false,
            },
            tui::Event::Init | tui::Event::FocusGained => true,
            tui::Event::Error => {
                tracing::warn!("terminal reported an input error");
                false
            }
            tui::Event::FocusLost | tui::Event::Paste(_) => false,
        }
    }

    /// Runs the update cycle, then host commands it produced. Host feedback
    /// (a rejected fullscreen request) goes through one more cycle.
    async fn cycle(&mut self) -> Result<()> {
        self.runtime.run_update_cycle()?;
        if self.apply_tui_commands().await? {
            self.runtime.run_update_cycle()?;
        }
        Ok(())
    }

    async fn apply_tui_commands(&mut self) -> Result<bool> {
        let mut feedback = false;
        while let Ok(command) = self.tui_rx.try_recv() {
            let mut tui = self.tui.lock().await;
            match command {
                TuiCommand::Resize { width, height } => {
                    tui.resize(Rect::new(0, 0, width, height))?;
                }
                TuiCommand::Fullscreen(on) => {
                    if let Err(e) = tui.request_fullscreen(on) {
                        tracing::warn!("fullscreen request failed: {e}");
                        self.runtime
                            .send_raw_msg(RawMsg::FullscreenChanged(false));
                        feedback = true;
                    }
                }
            }
        }
        Ok(feedback)
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let mut hit_map = HitMap::default();
        self.tui.lock().await.draw(&mut |frame| {
            hit_map = view::render(frame, state);
        })?;
        self.hit_map = hit_map;
        Ok(())
    }
}
