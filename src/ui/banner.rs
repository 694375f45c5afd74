//! # Header Banner
//!
//! The FORGE block-glyph banner and the two-color gradient applied to
//! it. The gradient interpolates each RGB channel linearly across the
//! non-space glyph positions of a line, left to right: the first glyph
//! gets exactly the start color, the last glyph exactly the end color.
//! Spaces are skipped so indentation does not distort the ramp.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::Rgb;

/// The three banner rows. Glyph art, keep aligned when editing.
pub const BANNER: [&str; 3] = [
    "█▀▀▀▀▀▀▀ ▄▀▀▀▀▀▄ █▀▀▀▀▀█ ▄▀▀▀▀▀▀ █▀▀▀▀▀▀▀",
    "█▀▀▀▀▀▀  █     █ █▀▀▀▀█▀ █   ▀▀█ █▀▀▀▀▀▀ ",
    "▀         ▀▀▀▀▀  ▀     ▀  ▀▀▀▀▀▀ ▀▀▀▀▀▀▀▀",
];

/// Linear interpolation between two colors. `t` is clamped to `[0, 1]`;
/// `t == 0.0` returns exactly `start` and `t == 1.0` exactly `end`.
pub fn blend(start: Rgb, end: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| -> u8 {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        v.round() as u8
    };
    Rgb::new(
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
    )
}

/// Apply the gradient to one line of text, producing a styled ratatui
/// line. Every non-space character becomes its own span with the color
/// interpolated over its position among the non-space characters.
pub fn gradient_line(text: &str, start: Rgb, end: Rgb, bold: bool) -> Line<'static> {
    let glyph_count = text.chars().filter(|c| !c.is_whitespace()).count();
    if glyph_count == 0 {
        return Line::from(text.to_string());
    }

    let mut spans = Vec::with_capacity(text.chars().count());
    let mut glyph_index = 0usize;
    for c in text.chars() {
        if c.is_whitespace() {
            spans.push(Span::raw(c.to_string()));
            continue;
        }
        let t = if glyph_count == 1 {
            0.0
        } else {
            glyph_index as f64 / (glyph_count - 1) as f64
        };
        let mut style = Style::default().fg(blend(start, end, t).into());
        if bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(c.to_string(), style));
        glyph_index += 1;
    }

    Line::from(spans)
}
