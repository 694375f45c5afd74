//! # Command Runner
//!
//! Blocking execution of a [`CommandSpec`] with captured output.
//!
//! The runner spawns the program directly with its explicit argument
//! vector in the command's working directory, waits for it to exit, and
//! converts the captured streams into a [`ContentNode`]. Failures never
//! cross this boundary: a process that cannot be spawned produces an
//! error panel, and a non-zero exit code is not treated as an error at
//! all (the output is shown regardless, with the exit code in the panel
//! title).
//!
//! The call blocks the render loop for the lifetime of the process.
//! That is a deliberate trade-off of the single-threaded core: the UI
//! is unresponsive while a command runs.

use std::process::{Command, Stdio};

use crate::command::CommandSpec;
use crate::ui::content::{sanitize, ContentLine, ContentNode, LineKind};

/// Run one command to completion and render its captured output.
pub fn run_command(spec: &CommandSpec) -> ContentNode {
    let output = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.cwd)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) => {
            let mut lines: Vec<ContentLine> = sanitize(&output.stdout)
                .into_iter()
                .map(|l| ContentLine::new(l, LineKind::Stdout))
                .collect();

            if lines.is_empty() {
                lines.push(ContentLine::new("(no output)", LineKind::Info));
            }

            let stderr_lines = sanitize(&output.stderr);
            if !stderr_lines.is_empty() {
                lines.push(ContentLine::new("", LineKind::Info));
                lines.push(ContentLine::new("warn/error:", LineKind::Stderr));
                lines.extend(
                    stderr_lines
                        .into_iter()
                        .map(|l| ContentLine::new(l, LineKind::Stderr)),
                );
            }

            let title = match output.status.code() {
                Some(0) | None => spec.panel_title(),
                Some(code) => format!("{} [exit {code}]", spec.panel_title()),
            };

            ContentNode::Panel { title, lines }
        }
        Err(err) => spawn_error_node(spec, &err.to_string()),
    }
}

/// Error panel for a process that could not be started.
fn spawn_error_node(spec: &CommandSpec, reason: &str) -> ContentNode {
    ContentNode::Panel {
        title: spec.panel_title(),
        lines: vec![
            ContentLine::new(
                format!("Failed to run '{}':", spec.invocation()),
                LineKind::Error,
            ),
            ContentLine::new(reason.to_string(), LineKind::Error),
        ],
    }
}
