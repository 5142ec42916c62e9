use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn langpack_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("langpack"))
}

/// Writes a two-locale fixture tree: `<root>/Locales/{en,es}.txt`.
fn write_locales(root: &Path) {
    let locales = root.join("Locales");
    std::fs::create_dir_all(&locales).expect("failed to create Locales dir");
    std::fs::write(
        locales.join("en.txt"),
        "en = English\nes = Spanish\ngreeting = Hello!\nwelcome = Hi, {0}!\n",
    )
    .expect("failed to write en.txt");
    std::fs::write(
        locales.join("es.txt"),
        "en = Inglés\nes = Español\ngreeting = ¡Hola!\n",
    )
    .expect("failed to write es.txt");
}

#[test]
fn test_list_prints_languages_with_active_marker() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let output = langpack_cmd()
        .args(["list", dir.path().to_str().unwrap(), "--locale", "en"])
        .output()
        .expect("failed to run langpack list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("* English (en)"), "stdout: {stdout}");
    assert!(stdout.contains("  Spanish (es)"), "stdout: {stdout}");
}

#[test]
fn test_list_json_reports_active_locale_and_languages() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let output = langpack_cmd()
        .args([
            "list",
            dir.path().to_str().unwrap(),
            "--locale",
            "es",
            "--json",
        ])
        .output()
        .expect("failed to run langpack list");

    assert!(output.status.success());
    let body: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json did not emit valid JSON");
    assert_eq!(body["active_locale"], "es");
    let languages = body["languages"]
        .as_array()
        .expect("languages should be an array");
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0]["code"], "en");
    assert_eq!(languages[0]["name"], "Inglés");
}

#[test]
fn test_show_prints_sorted_table() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let output = langpack_cmd()
        .args(["show", dir.path().to_str().unwrap(), "--locale", "en"])
        .output()
        .expect("failed to run langpack show");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Locale: en\n"), "stdout: {stdout}");
    let en_line = stdout.find("en = English").expect("missing en entry");
    let greeting_line = stdout.find("greeting = Hello!").expect("missing greeting");
    let welcome_line = stdout.find("welcome = Hi, {0}!").expect("missing welcome");
    assert!(en_line < greeting_line && greeting_line < welcome_line);
}

#[test]
fn test_translate_prints_template_verbatim_without_args() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let output = langpack_cmd()
        .args([
            "translate",
            dir.path().to_str().unwrap(),
            "welcome",
            "--locale",
            "en",
        ])
        .output()
        .expect("failed to run langpack translate");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hi, {0}!\n");
}

#[test]
fn test_translate_renders_positional_args() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let output = langpack_cmd()
        .args([
            "translate",
            dir.path().to_str().unwrap(),
            "welcome",
            "Ana",
            "--locale",
            "en",
        ])
        .output()
        .expect("failed to run langpack translate");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hi, Ana!\n");
}

#[test]
fn test_translate_wraps_missing_keys_by_default() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let output = langpack_cmd()
        .args([
            "translate",
            dir.path().to_str().unwrap(),
            "farewell",
            "--locale",
            "en",
        ])
        .output()
        .expect("failed to run langpack translate");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "?farewell?\n");
}

#[test]
fn test_translate_strict_fails_on_missing_key() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let output = langpack_cmd()
        .args([
            "translate",
            dir.path().to_str().unwrap(),
            "farewell",
            "--locale",
            "en",
            "--strict",
        ])
        .output()
        .expect("failed to run langpack translate");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn test_translate_custom_symbol() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let output = langpack_cmd()
        .args([
            "translate",
            dir.path().to_str().unwrap(),
            "farewell",
            "--locale",
            "en",
            "--symbol",
            "##",
        ])
        .output()
        .expect("failed to run langpack translate");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "##farewell##\n");
}

#[test]
fn test_unknown_locale_is_an_error() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let output = langpack_cmd()
        .args(["list", dir.path().to_str().unwrap(), "--locale", "de"])
        .output()
        .expect("failed to run langpack list");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not registered"), "stderr: {stderr}");
}

#[test]
fn test_empty_directory_reports_no_locales() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let output = langpack_cmd()
        .args(["list", dir.path().to_str().unwrap()])
        .output()
        .expect("failed to run langpack list");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no locale resources found"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_pick_switches_locale_from_stdin() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let mut child = langpack_cmd()
        .args(["pick", dir.path().to_str().unwrap(), "--locale", "en"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn langpack pick");
    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(b"2\nq\n")
        .expect("failed to write choice");
    let output = child
        .wait_with_output()
        .expect("failed to wait for langpack pick");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. English (en)"), "stdout: {stdout}");
    assert!(stdout.contains("Switched to es."), "stdout: {stdout}");
    // The second round of the loop lists names from the Spanish table.
    assert!(stdout.contains("2. Español (es)"), "stdout: {stdout}");
    assert!(stdout.contains("Cancelled."), "stdout: {stdout}");
}

#[test]
fn test_pick_quit_leaves_catalog_unchanged() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    write_locales(dir.path());

    let mut child = langpack_cmd()
        .args(["pick", dir.path().to_str().unwrap(), "--locale", "en"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn langpack pick");
    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(b"q\n")
        .expect("failed to write choice");
    let output = child
        .wait_with_output()
        .expect("failed to wait for langpack pick");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cancelled."), "stdout: {stdout}");
    assert!(!stdout.contains("Switched"), "stdout: {stdout}");
}
