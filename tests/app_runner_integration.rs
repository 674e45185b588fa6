use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use deckui::infrastructure::config::Config;
use deckui::infrastructure::tui::{test::TestTui, Event};
use deckui::integration::app_runner::AppRunner;

/// Rebinds inline so scripted input never races the deferred rebind.
fn config() -> Config {
    let mut config = Config::embedded().expect("embedded config");
    config.notice.cta_rebind_delay_ms = 0;
    config
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn runner(tui: &Arc<Mutex<TestTui>>) -> AppRunner {
    AppRunner::new(config(), Arc::<Mutex<TestTui>>::clone(tui)).expect("runner")
}

#[tokio::test]
async fn test_initial_frame() {
    let tui = Arc::new(Mutex::new(TestTui::new(80, 24).expect("tui")));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");

    let tui = tui.lock().await;
    assert_eq!(tui.draw_count(), 1);
    assert!(tui.contains("1 of 8 (13%)"));
    assert!(tui.contains("Managing Your Strategic Plan Projects in Asana"));
    assert!(tui.contains("1. Your Role as Project Lead"));
    assert!(tui.contains("[← Previous]"));
    assert!(tui.lines()[21].ends_with("Tennessee Department of Health"));
    // Event source ran dry: the runner quits on its own.
    assert!(runner.runtime().state().system.should_quit);
}

#[tokio::test]
async fn test_keys_walk_to_the_last_slide() {
    let events = std::iter::repeat_with(|| key(KeyCode::Right)).take(7);
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, events).expect("tui"),
    ));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");

    let state = runner.runtime().state();
    assert_eq!(state.navigator.index(), 7);
    assert!(state.cta.is_bound());

    let tui = tui.lock().await;
    assert!(tui.contains("8 of 8 (100%)"));
    assert!(tui.contains("[Complete]"));
    assert!(tui.contains("[1 Login to Asana]"));
}

#[tokio::test]
async fn test_cta_digit_shows_notice() {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [key(KeyCode::End), key(KeyCode::Char('1'))]).expect("tui"),
    ));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");

    assert_eq!(runner.runtime().state().usage.cta_clicks("login"), 1);
    let tui = tui.lock().await;
    assert!(tui.contains(" Login to Asana "));
    assert!(tui.contains("[×]"));
}

#[tokio::test]
async fn test_mouse_clicks_follow_hit_map() {
    // Nav bar sits above the footer on the last two rows.
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [click(79, 22), click(79, 22), click(0, 22)]).expect("tui"),
    ));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");

    let state = runner.runtime().state();
    assert_eq!(state.navigator.index(), 1);
    assert_eq!(state.usage.views(2), 2);
    assert_eq!(state.usage.views(3), 1);
}

#[tokio::test]
async fn test_click_on_title_goes_home() {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [key(KeyCode::End), click(0, 0)]).expect("tui"),
    ));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");
    assert_eq!(runner.runtime().state().navigator.index(), 0);
}

#[tokio::test]
async fn test_rejected_fullscreen_resets_label() {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [key(KeyCode::Char('f'))])
            .expect("tui")
            .reject_fullscreen(),
    ));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");

    assert!(!runner.runtime().state().fullscreen.is_active());
    let tui = tui.lock().await;
    assert_eq!(tui.fullscreen_requests(), &[true]);
    assert!(tui.contains("Fullscreen]"));
    assert!(!tui.contains("Exit Fullscreen"));
}

#[tokio::test]
async fn test_fullscreen_hides_navigation() {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [key(KeyCode::Char('f'))]).expect("tui"),
    ));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");

    assert!(runner.runtime().state().fullscreen.is_active());
    let tui = tui.lock().await;
    assert!(!tui.contains("[← Previous]"));
    assert!(runner.hit_map().target_at(0, 22).is_none());
}

#[tokio::test]
async fn test_print_toggle_shows_every_slide() {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 60, [key(KeyCode::Char('p'))]).expect("tui"),
    ));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");

    let tui = tui.lock().await;
    assert!(tui.contains("Slide 1 of 8: Managing Your Strategic Plan Projects in Asana"));
    assert!(tui.contains("Slide 2 of 8: Your Role as Project Lead"));
    assert!(tui.contains("page break"));
}

#[tokio::test]
async fn test_resize_reaches_backend() {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [Event::Resize(100, 30)]).expect("tui"),
    ));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");

    let tui = tui.lock().await;
    assert_eq!(tui.buffer().area.width, 100);
    assert_eq!(tui.buffer().area.height, 30);
}

#[tokio::test]
async fn test_quit_key_stops_processing() {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [key(KeyCode::Char('q')), key(KeyCode::Right)])
            .expect("tui"),
    ));
    let mut runner = runner(&tui);
    runner.run().await.expect("run");

    assert_eq!(runner.runtime().state().navigator.index(), 0);
}

#[tokio::test]
async fn test_start_at_opens_requested_slide() {
    let tui = Arc::new(Mutex::new(TestTui::new(80, 24).expect("tui")));
    let mut runner = runner(&tui).start_at(8);
    runner.run().await.expect("run");

    let state = runner.runtime().state();
    assert_eq!(state.navigator.index(), 7);
    // Opening on the final slide still binds its CTA controls.
    assert!(state.cta.is_bound());
    assert_eq!(state.usage.total_interactions(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_cta_key_before_deferred_rebind_is_ignored() {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [key(KeyCode::End), key(KeyCode::Char('1'))]).expect("tui"),
    ));
    let config = Config::embedded().expect("embedded config");
    assert_eq!(config.notice.cta_rebind_delay(), Duration::from_millis(50));
    let mut runner = AppRunner::new(config, Arc::<Mutex<TestTui>>::clone(&tui)).expect("runner");
    runner.run().await.expect("run");

    let state = runner.runtime().state();
    assert!(!state.cta.is_bound());
    assert_eq!(state.usage.cta_clicks("login"), 0);
    assert!(state.notice.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_cta_key_after_deferred_rebind_shows_notice() {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(80, 24, [key(KeyCode::End), key(KeyCode::Char('1'))])
            .expect("tui")
            .paced(Duration::from_millis(100)),
    ));
    let config = Config::embedded().expect("embedded config");
    let mut runner = AppRunner::new(config, Arc::<Mutex<TestTui>>::clone(&tui)).expect("runner");
    runner.run().await.expect("run");

    let state = runner.runtime().state();
    assert!(state.cta.is_bound());
    assert_eq!(state.cta.binds(), 1);
    assert_eq!(state.usage.cta_clicks("login"), 1);
    let tui = tui.lock().await;
    assert!(tui.contains(" Login to Asana "));
}
