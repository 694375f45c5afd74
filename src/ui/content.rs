//! # Content Nodes
//!
//! The renderable value produced by command execution and consumed by the
//! layout. A node is either plain text (the layout wraps it in a single
//! bordered panel) or a panel that already carries its own title and
//! border, which the layout passes through unwrapped to avoid drawing a
//! double border.
//!
//! Captured subprocess bytes never reach the renderer raw: [`sanitize`]
//! strips ANSI escape sequences and control characters so process output
//! always renders as literal text and cannot move the cursor or restyle
//! the screen.

/// Semantic role of a content line. The renderer maps kinds to theme
/// colors; captured bytes never carry styling of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Regular captured stdout.
    Stdout,
    /// Captured stderr, styled as a warning.
    Stderr,
    /// A failure description (e.g. the process could not be spawned).
    Error,
    /// Dimmed informational text (hints, "no output" placeholders).
    Info,
}

/// One line of displayable text with its semantic role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub text: String,
    pub kind: LineKind,
}

impl ContentLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A renderable unit for the content region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// Plain lines; the layout wraps these in a single bordered panel.
    Text(Vec<ContentLine>),
    /// Self-bordered panel with a title. The layout must not wrap this
    /// in a second border.
    Panel {
        title: String,
        lines: Vec<ContentLine>,
    },
}

impl ContentNode {
    pub fn lines(&self) -> &[ContentLine] {
        match self {
            Self::Text(lines) => lines,
            Self::Panel { lines, .. } => lines,
        }
    }
}

/// Decode captured bytes and split them into display-safe lines.
///
/// A trailing newline does not produce an empty final line.
pub fn sanitize(raw: &[u8]) -> Vec<String> {
    let decoded = String::from_utf8_lossy(raw);
    let trimmed = decoded.strip_suffix('\n').unwrap_or(&decoded);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.lines().map(strip_control).collect()
}

/// Remove ANSI escape sequences and control characters from a line.
///
/// Handles CSI (`ESC [ ... final-byte`) and OSC (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`) sequences; any other escape swallows the single
/// following character. Tabs are kept, every other control character is
/// dropped.
pub fn strip_control(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // CSI: parameters and intermediates end at a byte in @..=~
                    for seq in chars.by_ref() {
                        if ('\u{40}'..='\u{7e}').contains(&seq) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    // OSC: terminated by BEL or ESC \
                    while let Some(seq) = chars.next() {
                        if seq == '\u{07}' {
                            break;
                        }
                        if seq == '\u{1b}' {
                            if chars.peek() == Some(&'\\') {
                                chars.next();
                            }
                            break;
                        }
                    }
                }
                Some(_) => {
                    chars.next();
                }
                None => {}
            }
            continue;
        }

        if c == '\t' || !c.is_control() {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_control_plain_text_unchanged() {
        assert_eq!(strip_control("hello world"), "hello world");
        assert_eq!(strip_control(""), "");
    }

    #[test]
    fn test_strip_control_removes_csi_color_codes() {
        assert_eq!(strip_control("\u{1b}[31mred\u{1b}[0m"), "red");
        assert_eq!(strip_control("\u{1b}[1;32mbold green\u{1b}[m"), "bold green");
    }

    #[test]
    fn test_strip_control_removes_cursor_movement() {
        assert_eq!(strip_control("a\u{1b}[2Ab"), "ab");
        assert_eq!(strip_control("\u{1b}[2J\u{1b}[Hcleared"), "cleared");
    }

    #[test]
    fn test_strip_control_removes_osc_title_sequence() {
        assert_eq!(strip_control("\u{1b}]0;title\u{07}after"), "after");
        assert_eq!(strip_control("\u{1b}]8;;http://x\u{1b}\\link"), "link");
    }

    #[test]
    fn test_strip_control_keeps_tabs_drops_other_controls() {
        assert_eq!(strip_control("a\tb"), "a\tb");
        assert_eq!(strip_control("a\u{08}b\u{07}c"), "abc");
    }

    #[test]
    fn test_strip_control_bare_escape_at_end() {
        assert_eq!(strip_control("text\u{1b}"), "text");
    }

    #[test]
    fn test_sanitize_splits_lines_and_drops_trailing_newline() {
        let lines = sanitize(b"one\ntwo\n");
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_sanitize_empty_output() {
        assert!(sanitize(b"").is_empty());
        assert!(sanitize(b"\n").is_empty());
    }

    #[test]
    fn test_sanitize_strips_carriage_returns() {
        // Windows line endings: the CR is a control character and is dropped
        let lines = sanitize(b"one\r\ntwo\r\n");
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_sanitize_invalid_utf8_is_lossy() {
        let lines = sanitize(b"ok\xff\n");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ok"));
    }

    #[test]
    fn test_node_lines_accessor() {
        let text = ContentNode::Text(vec![ContentLine::new("hint", LineKind::Info)]);
        assert_eq!(text.lines().len(), 1);

        let panel = ContentNode::Panel {
            title: "git status".to_string(),
            lines: vec![ContentLine::new("clean", LineKind::Stdout)],
        };
        assert_eq!(panel.lines()[0].text, "clean");
    }
}
