//! Command execution and configuration tests
//!
//! Runs real subprocesses through the public API and checks the
//! capture, sanitization, and failure-recovery contracts, plus the
//! config-to-registry wiring.

use std::path::{Path, PathBuf};

use forge::command::{runner, CommandSpec, Registry};
use forge::config::{default_commands, Config};
use forge::ui::content::{ContentNode, LineKind};

fn echo_spec(text: &str) -> CommandSpec {
    CommandSpec::new("echo", "echo", vec![text.to_string()], std::env::temp_dir())
}

#[test]
fn test_captured_stdout_is_displayed() {
    let node = runner::run_command(&echo_spec("dashboard output"));
    assert!(node
        .lines()
        .iter()
        .any(|l| l.text == "dashboard output" && l.kind == LineKind::Stdout));
}

#[test]
fn test_shell_metacharacters_are_literal() {
    // Direct spawn with an argument vector: nothing is shell-expanded
    let node = runner::run_command(&echo_spec("$(reboot) && rm -rf *"));
    assert_eq!(node.lines()[0].text, "$(reboot) && rm -rf *");
}

#[test]
fn test_ansi_sequences_render_as_plain_text() {
    let spec = CommandSpec::new(
        "colors",
        "printf",
        vec!["\u{1b}[1;31malert\u{1b}[0m\n".to_string()],
        std::env::temp_dir(),
    );
    let node = runner::run_command(&spec);
    assert_eq!(node.lines()[0].text, "alert");
}

#[test]
fn test_stderr_is_a_distinguished_warning_block() {
    let spec = CommandSpec::new(
        "mixed",
        "sh",
        vec!["-c".to_string(), "echo ok; echo complaint >&2".to_string()],
        std::env::temp_dir(),
    );
    let node = runner::run_command(&spec);
    let lines = node.lines();

    let ok_pos = lines.iter().position(|l| l.text == "ok").expect("stdout");
    let err_pos = lines
        .iter()
        .position(|l| l.text == "complaint")
        .expect("stderr");
    assert!(ok_pos < err_pos, "stderr must come after stdout");
    assert_eq!(lines[err_pos].kind, LineKind::Stderr);
}

#[test]
fn test_nonzero_exit_is_not_an_error() {
    let spec = CommandSpec::new(
        "grumpy",
        "sh",
        vec!["-c".to_string(), "echo partial; exit 7".to_string()],
        std::env::temp_dir(),
    );
    let node = runner::run_command(&spec);

    // Output is shown regardless of the exit code
    assert!(node.lines().iter().any(|l| l.text == "partial"));
    match &node {
        ContentNode::Panel { title, .. } => assert!(title.contains("[exit 7]")),
        ContentNode::Text(_) => panic!("expected a panel"),
    }
}

#[test]
fn test_spawn_failure_becomes_error_panel() {
    let spec = CommandSpec::new(
        "ghost",
        "no-such-binary-for-forge-tests",
        Vec::new(),
        std::env::temp_dir(),
    );
    let node = runner::run_command(&spec);
    assert!(node.lines().iter().any(|l| l.kind == LineKind::Error));
    assert!(node
        .lines()
        .iter()
        .any(|l| l.text.contains("no-such-binary-for-forge-tests")));
}

#[test]
fn test_default_commands_are_git_status_and_fetch() {
    let commands = default_commands(Path::new("/work/repo"));
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].name, "status");
    assert_eq!(commands[0].program, "git");
    assert!(commands[0].args.contains(&"--short".to_string()));
    assert_eq!(commands[1].name, "fetch");
    assert_eq!(commands[1].cwd, PathBuf::from("/work/repo"));
}

#[test]
fn test_config_file_drives_the_registry() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{
            "theme": "Nord",
            "commands": [
                {"name": "greet", "program": "echo", "args": ["hello"]}
            ]
        }"#,
    )
    .expect("write config");

    let config = Config::load_from(&config_path).expect("load config");
    let registry = config.build_registry(dir.path());

    assert_eq!(registry.len(), 1);
    let node = runner::run_command(registry.get(0));
    assert_eq!(node.lines()[0].text, "hello");
}

#[test]
fn test_registry_cycle_property_via_public_api() {
    let registry = Registry::new(default_commands(Path::new("/tmp")));
    let mut index = 0;
    for _ in 0..registry.len() {
        index = registry.next(index);
    }
    assert_eq!(index, 0);
    assert_eq!(registry.previous(registry.next(1)), 1);
}
