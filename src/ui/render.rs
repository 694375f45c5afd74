//! # Rendering
//!
//! Pure composition of the full-screen layout from the current state:
//! a fixed five-row header (version line, gradient banner, status line),
//! a flexible content region, and a fixed two-row footer with the hotkey
//! legend. When the palette is open it is drawn as a centered overlay on
//! top of the content.
//!
//! Content nodes that already carry their own border ([`ContentNode::Panel`])
//! are passed through unwrapped; plain text nodes get a single rounded
//! border here. Degenerate terminal sizes fall back to a one-line notice.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::command::Registry;
use crate::ui::app::App;
use crate::ui::banner::{gradient_line, BANNER};
use crate::ui::content::{ContentLine, ContentNode, LineKind};
use crate::ui::theme::Theme;

/// Header rows: version line, three banner rows, status line.
pub const HEADER_HEIGHT: u16 = 5;
/// Footer rows: hotkey legend and brand line.
pub const FOOTER_HEIGHT: u16 = 2;
/// Smallest terminal the full chrome is drawn for.
pub const MIN_WIDTH: u16 = 10;
pub const MIN_HEIGHT: u16 = 5;

/// Split the screen into header, content, and footer regions.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

pub fn render(frame: &mut Frame, app: &App, registry: &Registry, theme: &Theme) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let notice = Paragraph::new("Terminal too small")
            .style(Style::default().fg(theme.warning));
        frame.render_widget(notice, area);
        return;
    }

    let (header, content, footer) = layout_regions(area);
    render_header(frame, header, area, theme);
    render_content(frame, app, content, theme);
    render_footer(frame, footer, theme);

    if app.palette_open {
        render_palette(frame, app, registry, content, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, full: Rect, theme: &Theme) {
    let version = format!("FORGE v{}", env!("CARGO_PKG_VERSION"));
    let status = format!("Terminal {}x{}", full.width, full.height);

    let mut lines = vec![Line::from(Span::styled(
        version,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))];
    for row in BANNER {
        lines.push(gradient_line(
            row,
            theme.gradient_start,
            theme.gradient_end,
            true,
        ));
    }
    lines.push(Line::from(Span::styled(
        status,
        Style::default().fg(theme.fg_dim),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let placeholder;
    let node = match &app.content {
        Some(node) => node,
        None => {
            placeholder = ContentNode::Text(vec![ContentLine::new(
                "Press Ctrl+P to open the command palette",
                LineKind::Info,
            )]);
            &placeholder
        }
    };

    match node {
        // Already bordered: draw it as-is, no second frame around it
        ContentNode::Panel { title, lines } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title.clone())
                .border_style(Style::default().fg(theme.accent));
            let paragraph = Paragraph::new(content_text(lines, theme))
                .block(block)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
        ContentNode::Text(lines) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.fg_dim));
            let paragraph = Paragraph::new(content_text(lines, theme))
                .block(block)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
    }
}

fn content_text<'a>(lines: &'a [ContentLine], theme: &Theme) -> Vec<Line<'a>> {
    lines
        .iter()
        .map(|l| Line::from(Span::styled(l.text.as_str(), line_style(l.kind, theme))))
        .collect()
}

fn line_style(kind: LineKind, theme: &Theme) -> Style {
    match kind {
        LineKind::Stdout => Style::default().fg(theme.fg),
        LineKind::Stderr => Style::default().fg(theme.warning),
        LineKind::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LineKind::Info => Style::default().fg(theme.fg_dim),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let legend = Line::from(vec![
        Span::styled("[Esc]", Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
        Span::styled(" Quit  ", Style::default().fg(theme.fg_dim)),
        Span::styled("[Ctrl+P]", Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
        Span::styled(" Commands  ", Style::default().fg(theme.fg_dim)),
        Span::styled("[Up/Down]", Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
        Span::styled(" Select  ", Style::default().fg(theme.fg_dim)),
        Span::styled("[Enter]", Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
        Span::styled(" Run", Style::default().fg(theme.fg_dim)),
    ]);
    let brand = Line::from(Span::styled(
        "Forge workspace dashboard",
        Style::default().fg(theme.fg_dim),
    ));

    frame.render_widget(Paragraph::new(vec![legend, brand]), area);
}

fn render_palette(frame: &mut Frame, app: &App, registry: &Registry, area: Rect, theme: &Theme) {
    let overlay = centered_rect(area, 60, palette_height(registry.len()));
    if overlay.width < 10 || overlay.height < 3 {
        return;
    }

    let items: Vec<ListItem> = if registry.is_empty() {
        vec![ListItem::new("No commands configured")
            .style(Style::default().fg(theme.fg_dim))]
    } else {
        registry
            .iter()
            .enumerate()
            .map(|(i, cmd)| {
                let style = if i == app.selected_index {
                    Style::default()
                        .fg(Color::Black)
                        .bg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg)
                };
                ListItem::new(format!("{}  ({})", cmd.name, cmd.invocation())).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Commands")
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(Clear, overlay);
    frame.render_widget(list, overlay);
}

/// Overlay height for a palette of `len` entries (one row per entry
/// plus the border, one placeholder row when empty). Saturates instead
/// of truncating for oversized command lists.
fn palette_height(len: usize) -> u16 {
    u16::try_from(len.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Center a fixed-height overlay of the given width inside `area`,
/// shrinking to fit when the area is smaller.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
