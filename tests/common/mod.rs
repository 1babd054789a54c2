use assert_cmd::Command;
use std::path::Path;

pub const SETUP: &str = "Jane Doe\njane@example.com\n";

pub fn quotebook_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quotebook").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Session input: user setup, the given menu lines, then exit
#[allow(dead_code)]
pub fn script(lines: &[&str]) -> String {
    let mut input = SETUP.to_string();
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    input.push_str("6\n");
    input
}
