//! # Application State
//!
//! The mutable session state of the dashboard and the key-handling
//! transitions over it. All state lives in an explicit [`App`] value
//! owned by the run loop; [`App::handle_key`] returns an [`Action`] so
//! transitions can be unit tested without a live terminal and so the
//! loop decides when a command actually executes.
//!
//! The session moves between two modes: normal (content visible) and
//! palette open (command list overlaid). Escape closes the palette
//! first; a second escape from normal mode quits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Registry;
use crate::ui::content::ContentNode;

/// What the run loop should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed; skip the repaint.
    None,
    /// State changed; repaint on the next tick.
    Redraw,
    /// Execute the registry command at this index, then repaint.
    Execute(usize),
    /// Leave the loop.
    Quit,
}

/// Session state. Mutated only by the run loop thread.
#[derive(Debug, Default)]
pub struct App {
    /// Whether the command palette overlay is visible.
    pub palette_open: bool,
    /// Selected palette entry. Valid (`< registry.len()`) whenever the
    /// palette is open and the registry is non-empty.
    pub selected_index: usize,
    /// Most recent command result, replaced wholesale on each run.
    pub content: Option<ContentNode>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one key event, returning the follow-up action.
    /// Unmapped keys are no-ops.
    pub fn handle_key(&mut self, key: KeyEvent, registry: &Registry) -> Action {
        if self.palette_open {
            self.handle_palette_key(key, registry)
        } else {
            self.handle_normal_key(key, registry)
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, registry: &Registry) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                Action::Quit
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.open_palette(registry);
                Action::Redraw
            }
            _ => Action::None,
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent, registry: &Registry) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.palette_open = false;
                Action::Redraw
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_index = registry.next(self.selected_index);
                Action::Redraw
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = registry.previous(self.selected_index);
                Action::Redraw
            }
            KeyCode::Enter => {
                self.palette_open = false;
                if registry.is_empty() {
                    Action::Redraw
                } else {
                    Action::Execute(self.selected_index)
                }
            }
            _ => Action::None,
        }
    }

    /// Open the palette, clamping a remembered selection into range.
    pub fn open_palette(&mut self, registry: &Registry) {
        self.selected_index = registry.clamp(self.selected_index);
        self.palette_open = true;
    }

    /// Replace the content region with a fresh command result.
    pub fn set_content(&mut self, node: ContentNode) {
        self.content = Some(node);
    }
}
