use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use guessgame::game::Round;

fn guessgame(cwd: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_guessgame"))
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn guessgame");
    // Usage errors exit before reading stdin, so a broken pipe here is expected
    let _ = child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(stdin.as_bytes());
    child.wait_with_output().expect("wait for guessgame")
}

/// Write a config under `root` that points `logs_dir` at `<root>/rounds`; returns its path.
fn config_with_logs_dir(root: &Path) -> (PathBuf, PathBuf) {
    let logs = root.join("rounds");
    let config = root.join("guessgame.toml");
    std::fs::write(
        &config,
        format!("[storage]\nlogs_dir = {:?}\n", logs.to_str().expect("utf-8 temp path")),
    )
    .expect("write config");
    (config, logs)
}

#[test]
fn missing_mode_is_a_usage_error() {
    let tmp = tempfile::tempdir().unwrap();
    let out = guessgame(tmp.path(), &[], "");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Некорректная команда"));
    assert!(out.stdout.is_empty());
}

#[test]
fn non_json_name_is_a_usage_error() {
    let tmp = tempfile::tempdir().unwrap();
    let (config, logs) = config_with_logs_dir(tmp.path());
    let out = guessgame(
        tmp.path(),
        &["--config", config.to_str().unwrap(), "--start", "log.txt"],
        "1\n",
    );
    assert!(!out.status.success());
    assert!(!logs.exists());
}

#[test]
fn conflicting_modes_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let out = guessgame(tmp.path(), &["--start", "a.json", "--total", "b.json"], "");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn play_then_total_from_another_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let (config, logs) = config_with_logs_dir(tmp.path());
    let config = config.to_str().unwrap();
    let first_cwd = tmp.path().join("one");
    let second_cwd = tmp.path().join("two");
    std::fs::create_dir_all(&first_cwd).unwrap();
    std::fs::create_dir_all(&second_cwd).unwrap();

    let play = guessgame(
        &first_cwd,
        &["--config", config, "--start", "game.json"],
        "1\n2\nfoo\n1\n",
    );
    assert!(play.status.success(), "stderr: {}", String::from_utf8_lossy(&play.stderr));
    assert!(!first_cwd.join("logs").exists());

    let raw = std::fs::read_to_string(logs.join("game.json")).unwrap();
    let rounds: Vec<Round> = serde_json::from_str(&raw).unwrap();
    let numbers: Vec<u64> = rounds.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let total = guessgame(&second_cwd, &["--config", config, "--total", "game.json"], "");
    assert!(total.status.success());
    let wins = rounds.iter().filter(|r| r.win).count();
    let stdout = String::from_utf8(total.stdout).unwrap();
    assert!(stdout.starts_with("Количество раундов: 3\n"));
    assert!(stdout.contains(&format!("Количество побед: {} (", wins)));
}

#[test]
fn default_logs_dir_sits_next_to_the_executable() {
    let exe_dir = Path::new(env!("CARGO_BIN_EXE_guessgame"))
        .parent()
        .expect("executable dir")
        .to_path_buf();
    let name = format!("cli-binary-{}.json", std::process::id());
    let log = exe_dir.join("logs").join(&name);

    let play_cwd = tempfile::tempdir().unwrap();
    let play = guessgame(play_cwd.path(), &["--start", &name], "1\n");
    assert!(play.status.success(), "stderr: {}", String::from_utf8_lossy(&play.stderr));
    assert!(log.exists(), "expected round log at {}", log.display());
    assert!(!play_cwd.path().join("logs").exists());

    let total_cwd = tempfile::tempdir().unwrap();
    let total = guessgame(total_cwd.path(), &["--total", &name], "");
    let _ = std::fs::remove_file(&log);
    assert!(total.status.success());
    assert!(String::from_utf8(total.stdout)
        .unwrap()
        .starts_with("Количество раундов: 1\n"));
}

#[test]
fn total_on_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let (config, _) = config_with_logs_dir(tmp.path());
    let out = guessgame(
        tmp.path(),
        &["--config", config.to_str().unwrap(), "--total", "ghost.json"],
        "",
    );
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Указанный файл не найден\n");
}

#[test]
fn relative_config_logs_dir_is_not_the_working_directory() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("guessgame.toml"),
        "[storage]\nlogs_dir = \"rounds\"\n",
    )
    .unwrap();
    std::fs::create_dir_all(tmp.path().join("rounds")).unwrap();
    std::fs::write(
        tmp.path().join("rounds").join("old.json"),
        r#"[{"number":1,"win":true},{"number":2,"win":false}]"#,
    )
    .unwrap();

    // "rounds" resolves next to the executable, so the copy in the working directory is unseen
    let out = guessgame(tmp.path(), &["--total", "old.json"], "");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "Указанный файл не найден\n");
}

#[test]
fn config_moves_logs_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let (config, logs) = config_with_logs_dir(tmp.path());
    std::fs::create_dir_all(&logs).unwrap();
    std::fs::write(
        logs.join("old.json"),
        r#"[{"number":1,"win":true},{"number":2,"win":false}]"#,
    )
    .unwrap();

    let out = guessgame(
        tmp.path(),
        &["--config", config.to_str().unwrap(), "--total", "old.json"],
        "",
    );
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Количество раундов: 2\nКоличество побед: 1 (50%)\n"
    );
}
