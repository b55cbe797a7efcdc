use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_dotnet-complete")));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

// -- input mode --

#[test]
fn input_file_plain() {
    let output = stdout_of(
        cmd()
            .args(["-i", &fixture_path("tool-list.txt"), "-f", "plain"])
            .assert()
            .success(),
    );
    assert_eq!(
        output,
        "cake\tdotnet-cake\nef\tdotnet-ef\ndotnetsay\tdotnetsay\nfoo\tdotnet-foo\nfoo\tfoo\n"
    );
}

#[test]
fn input_file_json() {
    let output = stdout_of(
        cmd()
            .args(["-i", &fixture_path("tool-list.txt")])
            .assert()
            .success(),
    );
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["name"], "dotnet");
    let subcommands = value["subcommands"].as_array().unwrap();
    assert_eq!(subcommands.len(), 5);
    assert_eq!(subcommands[0]["name"], "cake");
    assert_eq!(subcommands[0]["description"], "dotnet-cake");
    assert_eq!(subcommands[0]["args"]["isOptional"], true);
}

#[test]
fn input_from_stdin() {
    let input = "Package Id  Version  Commands\n---------  -------  --------\nMy.Tool  1.0.0  dotnet-foo,foo\n";
    cmd()
        .args(["-i", "-", "-f", "plain"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("foo\tdotnet-foo\nfoo\tfoo\n");
}

#[test]
fn header_only_gives_no_candidates() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Package Id  Version  Commands\n").unwrap();

    cmd()
        .args(["-i", file.path().to_str().unwrap(), "-f", "plain"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn dedupe_keeps_first() {
    cmd()
        .args(["-i", &fixture_path("tool-list.txt"), "-f", "plain", "--dedupe"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("foo\tdotnet-foo\n"));
}

// -- malformed rows --

#[test]
fn malformed_row_fails_by_default() {
    cmd()
        .args(["-i", &fixture_path("malformed.txt")])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("malformed listing row 4"))
        .stderr(predicate::str::contains("found 2"));
}

#[test]
fn malformed_row_skipped_on_request() {
    cmd()
        .args(["-i", &fixture_path("malformed.txt"), "-f", "plain", "--skip-malformed"])
        .assert()
        .success()
        .stdout("good\tgood\nlater\tdotnet-later\n")
        .stderr(predicate::str::contains("skipping malformed listing row"));
}

// -- argument errors --

#[test]
fn unknown_format_rejected() {
    cmd()
        .args(["-i", &fixture_path("tool-list.txt"), "-f", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: yaml"));
}

#[test]
fn missing_input_file() {
    cmd()
        .args(["-i", "/nonexistent/tool-list.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /nonexistent/tool-list.txt"));
}

// -- live mode --

#[cfg(unix)]
#[test]
fn live_command_output_is_parsed() {
    let listing = fixture_path("tool-list.txt");
    cmd()
        .args(["--command", &format!("cat '{}'", listing), "-f", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cake\tdotnet-cake\n"));
}

#[cfg(unix)]
#[test]
fn live_command_failure_propagates() {
    cmd()
        .args(["--command", "echo 'tool list unavailable' >&2; exit 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to generate completions"))
        .stderr(predicate::str::contains("tool list unavailable"));
}

#[cfg(unix)]
#[test]
fn custom_tool_and_prefix() {
    cmd()
        .args([
            "--tool",
            "cargo",
            "--command",
            "printf 'Name  Version  Commands\\n--\\ncargo-edit  0.12  cargo-add,cargo-rm\\n'",
            "-f",
            "plain",
        ])
        .assert()
        .success()
        .stdout("add\tcargo-add\nrm\tcargo-rm\n");
}
