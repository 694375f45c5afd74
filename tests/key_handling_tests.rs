//! Keyboard event handling tests
//!
//! Tests for the palette key flow: opening, cyclic navigation, confirm,
//! and the escape-closes-palette-then-escape-quits baseline.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use forge::command::{runner, CommandSpec, Registry};
use forge::ui::app::Action;
use forge::ui::App;

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Registry with the default command names, backed by echo so tests can
/// execute them for real.
fn create_test_registry() -> Registry {
    Registry::new(vec![
        CommandSpec::new(
            "status",
            "echo",
            vec!["status output".to_string()],
            std::env::temp_dir(),
        ),
        CommandSpec::new(
            "fetch",
            "echo",
            vec!["fetch output".to_string()],
            std::env::temp_dir(),
        ),
    ])
}

#[test]
fn test_ctrl_p_opens_palette_and_esc_closes_it() {
    let registry = create_test_registry();
    let mut app = App::new();

    assert_eq!(app.handle_key(ctrl('p'), &registry), Action::Redraw);
    assert!(app.palette_open);

    assert_eq!(app.handle_key(key(KeyCode::Esc), &registry), Action::Redraw);
    assert!(!app.palette_open);
    assert!(!app.should_quit);
}

#[test]
fn test_second_escape_quits() {
    let registry = create_test_registry();
    let mut app = App::new();

    app.handle_key(ctrl('p'), &registry);
    app.handle_key(key(KeyCode::Esc), &registry);
    assert!(!app.should_quit);

    assert_eq!(app.handle_key(key(KeyCode::Esc), &registry), Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_down_moves_selection_and_enter_executes_fetch() {
    // End-to-end palette flow: open, select the second entry, confirm,
    // and run the chosen command for real
    let registry = create_test_registry();
    let mut app = App::new();

    app.handle_key(ctrl('p'), &registry);
    assert_eq!(app.selected_index, 0);

    app.handle_key(key(KeyCode::Down), &registry);
    assert_eq!(app.selected_index, 1);

    let action = app.handle_key(key(KeyCode::Enter), &registry);
    let Action::Execute(index) = action else {
        panic!("expected Execute, got {action:?}");
    };
    assert_eq!(registry.get(index).name, "fetch");

    let node = runner::run_command(registry.get(index));
    app.set_content(node);
    let content = app.content.as_ref().expect("content stored");
    assert!(content.lines().iter().any(|l| l.text == "fetch output"));
}

#[test]
fn test_selection_wraps_in_both_directions() {
    let registry = create_test_registry();
    let mut app = App::new();
    app.handle_key(ctrl('p'), &registry);

    // Down past the end wraps to the first entry
    app.handle_key(key(KeyCode::Down), &registry);
    app.handle_key(key(KeyCode::Down), &registry);
    assert_eq!(app.selected_index, 0);

    // Up from the first entry wraps to the last
    app.handle_key(key(KeyCode::Up), &registry);
    assert_eq!(app.selected_index, 1);
}

#[test]
fn test_navigation_keys_ignored_outside_palette() {
    let registry = create_test_registry();
    let mut app = App::new();

    assert_eq!(app.handle_key(key(KeyCode::Down), &registry), Action::None);
    assert_eq!(app.handle_key(key(KeyCode::Up), &registry), Action::None);
    assert_eq!(app.handle_key(key(KeyCode::Enter), &registry), Action::None);
    assert_eq!(app.selected_index, 0);
}

#[test]
fn test_unmapped_key_is_noop_in_palette() {
    let registry = create_test_registry();
    let mut app = App::new();
    app.handle_key(ctrl('p'), &registry);

    assert_eq!(
        app.handle_key(key(KeyCode::Char('z')), &registry),
        Action::None
    );
    assert!(app.palette_open);
    assert_eq!(app.selected_index, 0);
}

#[test]
fn test_palette_remembers_selection_between_opens() {
    let registry = create_test_registry();
    let mut app = App::new();

    app.handle_key(ctrl('p'), &registry);
    app.handle_key(key(KeyCode::Down), &registry);
    app.handle_key(key(KeyCode::Esc), &registry);

    app.handle_key(ctrl('p'), &registry);
    assert_eq!(app.selected_index, 1);
}
