use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn errcode() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_errcode"));
    for var in ["ERRCODE_CONFIG", "ERRCODE_FORMAT", "ERRCODE_COLOR", "ERRCODE_REMEMBER", "ERRCODE_LAST_INPUT", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

fn config_in(dir: &TempDir) -> PathBuf {
    dir.path().join("settings.toml")
}

fn run(config: &Path, args: &[&str]) -> Output {
    errcode()
        .arg("--config")
        .arg(config)
        .args(["--color", "never"])
        .args(args)
        .output()
        .expect("failed to run errcode")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn blocks(text: &str) -> Vec<String> {
    text.trim_end().split("\n\n").map(str::to_string).collect()
}

// --- Scenarios ---

#[test]
fn update_code_reports_reboot_required() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["0x00240005"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let text = stdout(&out);
    assert!(text.contains("update-subsystem: WU_S_REBOOT_REQUIRED"), "got:\n{text}");
}

#[test]
fn numeric_block_for_high_bit_code() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["3221225786"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert_eq!(blocks(&text)[0], "DWORD\t3221225786\nint\t-1073741510\nHex\t0xC000013A");
}

#[test]
fn negative_decimal_input() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["-1073741510"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout(&out).starts_with("DWORD\t3221225786\n"));
}

#[test]
fn decimal_and_hex_spellings_print_the_same_block() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let expected = "DWORD\t3221225786\nint\t-1073741510\nHex\t0xC000013A";
    for code in ["3221225786", "-1073741510", "0xC000013A"] {
        let out = run(&config, &["--no-save", code]);
        assert!(out.status.success(), "{code}: {}", String::from_utf8_lossy(&out.stderr));
        assert_eq!(blocks(&stdout(&out))[0], expected, "{code}");
    }
}

#[test]
fn negative_hex_input_is_negated() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["-0xC0000056"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(blocks(&stdout(&out))[0], "DWORD\t1073741738\nint\t1073741738\nHex\t0x3FFFFFAA");

    let out = run(&config_in(&dir), &["-0x1"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout(&out).starts_with("DWORD\t4294967295\nint\t-1\nHex\t0xFFFFFFFF\n"));
}

#[test]
fn verbose_flag_is_not_taken_as_a_code() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["-v", "9"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout(&out).starts_with("DWORD\t9\n"));
}

#[test]
fn duplicate_directory_code_prints_last_definition_once() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["9"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let ldap: Vec<_> = blocks(&text).into_iter().filter(|b| b.starts_with("directory-protocol:")).collect();
    assert_eq!(ldap, ["directory-protocol: LDAP_PARTIAL_RESULTS"]);
    assert!(!text.contains("LDAP_REFERRAL_V2"));
}

#[test]
fn kernel_panic_code() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["0xDEADDEAD"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("kernel-panic: MANUALLY_INITIATED_CRASH1"));
}

#[test]
fn zero_has_numeric_block_and_no_stop_code() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["0"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert_eq!(blocks(&text)[0], "DWORD\t0\nint\t0\nHex\t0x00000000");
    assert!(!text.contains("kernel-panic:"));
}

#[test]
fn max_value_resolves() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["0xFFFFFFFF"]);
    assert!(out.status.success());
    assert_eq!(blocks(&stdout(&out))[0], "DWORD\t4294967295\nint\t-1\nHex\t0xFFFFFFFF");
}

#[test]
fn hits_follow_namespace_priority() {
    let dir = TempDir::new().unwrap();
    // 1 is both LDAP_OPERATIONS_ERROR and APC_INDEX_MISMATCH
    let out = run(&config_in(&dir), &["1"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let ldap = text.find("directory-protocol: LDAP_OPERATIONS_ERROR").expect("ldap hit");
    let stop = text.find("kernel-panic: APC_INDEX_MISMATCH").expect("stop code hit");
    assert!(ldap < stop, "unexpected order:\n{text}");
}

// --- Output formats ---

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["--json", "0xDEADDEAD"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(stdout(&out).trim()).expect("valid JSON");
    assert_eq!(v["hex"], "0xDEADDEAD");
    assert_eq!(v["signed"], -559_030_611);
    let hit = v["hits"].as_array().unwrap().iter()
        .find(|h| h["namespace"] == "kernel-panic")
        .expect("kernel-panic hit");
    assert_eq!(hit["name"], "MANUALLY_INITIATED_CRASH1");
}

#[test]
fn json_format_from_environment() {
    let dir = TempDir::new().unwrap();
    let out = errcode()
        .arg("--config")
        .arg(config_in(&dir))
        .env("ERRCODE_FORMAT", "json")
        .arg("9")
        .output()
        .expect("failed to run errcode");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value = serde_json::from_str(stdout(&out).trim()).expect("valid JSON");
    assert_eq!(v["unsigned"], 9);
}

#[test]
fn always_color_emits_ansi_codes() {
    let dir = TempDir::new().unwrap();
    let out = errcode()
        .arg("--config")
        .arg(config_in(&dir))
        .args(["--color", "always", "0xDEADDEAD"])
        .output()
        .expect("failed to run errcode");
    assert!(out.status.success());
    assert!(stdout(&out).contains("\x1b["));
}

// --- Last input cache ---

#[test]
fn last_input_is_reused() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let first = run(&config, &["0xDEADDEAD"]);
    assert!(first.status.success());
    let saved = std::fs::read_to_string(&config).expect("settings written");
    assert!(saved.contains("last_input = \"0xDEADDEAD\""), "got:\n{saved}");

    let again = run(&config, &[]);
    assert!(again.status.success(), "stderr: {}", String::from_utf8_lossy(&again.stderr));
    assert_eq!(stdout(&again), stdout(&first));
}

#[test]
fn no_save_leaves_cache_untouched() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let out = run(&config, &["--no-save", "9"]);
    assert!(out.status.success());
    assert!(!config.exists());

    let again = run(&config, &[]);
    assert_eq!(again.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&again.stderr).contains("Usage"));
}

#[test]
fn remember_false_in_settings_disables_cache() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    std::fs::write(&config, "remember = false\n").unwrap();
    let out = run(&config, &["9"]);
    assert!(out.status.success());
    assert!(!std::fs::read_to_string(&config).unwrap().contains("last_input"));
}

// --- Error cases ---

#[test]
fn no_args_and_no_cache_shows_usage() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn invalid_input_is_rejected_without_output() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let out = run(&config, &["12g"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty(), "unexpected stdout: {}", stdout(&out));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Invalid code"), "got: {stderr}");
    assert!(!config.exists(), "rejected input must not be cached");
}

#[test]
fn out_of_range_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let out = run(&config_in(&dir), &["4294967296"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not fit in 32 bits"));
}

#[test]
fn corrupt_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    std::fs::write(&config, "format = \"yaml\"\n").unwrap();
    let out = run(&config, &["9"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error reading"));
}

// --- Listing ---

#[test]
fn list_kernel_panic_table() {
    let out = errcode().args(["--list", "kernel-panic"]).output().expect("failed to run errcode");
    assert!(out.status.success());
    let text = stdout(&out);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 377);
    assert_eq!(lines[0], "0x00000001  APC_INDEX_MISMATCH");
    assert_eq!(lines[lines.len() - 1], "0xDEADDEAD  MANUALLY_INITIATED_CRASH1");
}

#[test]
fn list_accepts_short_names() {
    let out = errcode().args(["--list", "ldap"]).output().expect("failed to run errcode");
    assert!(out.status.success());
    assert!(stdout(&out).contains("0x00000009  LDAP_PARTIAL_RESULTS"));
}

#[test]
fn list_host_namespace_is_an_error() {
    let out = errcode().args(["--list", "general-system"]).output().expect("failed to run errcode");
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("no built-in table"));
}
