//! End-to-end runs of the application loop against a test terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use futures::stream;
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use stats_marquee::app::App;
use stats_marquee::config::AppConfig;
use stats_marquee::event::Event;
use stats_marquee::marquee::{Gap, Playback};

fn config() -> AppConfig {
    AppConfig {
        log_file: None,
        ..AppConfig::default()
    }
}

fn moved(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[tokio::test]
async fn quit_key_stops_loop_and_unmounts() {
    let mut app = App::new(config(), 100);
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("test terminal");
    let mut events = stream::iter(vec![
        Event::Frame(0.0),
        Event::Frame(16.0),
        key(KeyCode::Char('q')),
        Event::Frame(32.0),
    ]);

    app.run(&mut terminal, &mut events).await.expect("run");

    assert!(!app.state().marquee.is_mounted());
}

#[tokio::test]
async fn hovering_the_strip_pauses_until_pointer_leaves() {
    let mut app = App::new(config(), 100);
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("test terminal");

    // Render once so the strip area is known
    let mut warmup = stream::iter(vec![Event::Frame(0.0)]);
    app.run(&mut terminal, &mut warmup).await.expect("warmup");
    let strip = app.ui().strip_area();
    assert_eq!(strip.height, 4);

    let mut events = stream::iter(vec![
        Event::Frame(0.0),
        Event::Frame(100.0),
        moved(strip.x + 10, strip.y + 1),
        Event::Frame(5_000.0),
    ]);
    app.run(&mut terminal, &mut events).await.expect("run");

    // Offset advanced for 100ms only, and the final frame was skipped
    assert_eq!(app.state().marquee.playback(), Playback::Paused);
    assert_eq!(app.state().marquee.total_recycled(), 1);

    let mut events = stream::iter(vec![
        Event::Frame(0.0),
        Event::Frame(100.0),
        moved(strip.x + 10, strip.y + 1),
        Event::Frame(5_000.0),
        moved(strip.x + 10, strip.bottom() + 2),
        Event::Frame(5_100.0),
        Event::Frame(20_000.0),
    ]);
    app.run(&mut terminal, &mut events).await.expect("run");

    // Resumed after leaving, and the paused interval was not integrated
    assert_eq!(app.state().marquee.playback(), Playback::Running);
    assert!(app.state().marquee.total_recycled() > 1);
    assert!(!app.state().pointer.is_inside());
}

#[tokio::test]
async fn remount_pauses_on_first_hover() {
    let mut app = App::new(config(), 100);
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("test terminal");

    let mut warmup = stream::iter(vec![Event::Frame(0.0)]);
    app.run(&mut terminal, &mut warmup).await.expect("warmup");
    let strip = app.ui().strip_area();

    // Leave the pointer inside when the first run ends
    let mut events = stream::iter(vec![Event::Frame(0.0), moved(strip.x + 10, strip.y + 1)]);
    app.run(&mut terminal, &mut events).await.expect("first run");
    assert_eq!(app.state().marquee.playback(), Playback::Paused);

    let mut events = stream::iter(vec![
        Event::Frame(0.0),
        moved(strip.x + 12, strip.y + 2),
        Event::Frame(16.0),
    ]);
    app.run(&mut terminal, &mut events).await.expect("second run");

    assert_eq!(app.state().marquee.playback(), Playback::Paused);
}

#[tokio::test]
async fn resize_event_switches_to_wide_gap() {
    let mut app = App::new(config(), 80);
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("test terminal");

    let mut events = stream::iter(vec![Event::Frame(0.0), Event::Resize(160, 20)]);
    app.run(&mut terminal, &mut events).await.expect("run");

    assert_eq!(app.state().layout.viewport_width(), 160);
    assert_eq!(Gap::measure(&app.state().layout), Gap::new(3.0));

    // The redraw after the resize already used the wide gap
    let buffer = terminal.backend().buffer();
    let status: String = (0..buffer.area.width)
        .map(|x| buffer.get(x, buffer.area.height - 1).symbol().to_string())
        .collect();
    assert!(status.contains("| Gap: 3 |"), "status line: {status}");
}

#[tokio::test]
async fn help_toggle_renders_overlay() {
    let mut app = App::new(config(), 100);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");

    let mut events = stream::iter(vec![Event::Frame(0.0), key(KeyCode::Char('?'))]);
    app.run(&mut terminal, &mut events).await.expect("run");

    assert!(app.ui().is_help_visible());
    let buffer = terminal.backend().buffer();
    let screen: String = (0..buffer.area.height)
        .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
        .map(|(x, y)| buffer.get(x, y).symbol().to_string())
        .collect();
    assert!(screen.contains("Stats Marquee Help"));
}
