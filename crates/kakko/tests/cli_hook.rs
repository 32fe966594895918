//! Integration tests for `kakko hook`, the command the host tool runs.
//!
//! Every invocation must exit 0, whatever happens inside.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use kakko_git::test_support::{init_repo_with_commit, stage_file};

fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Run `kakko <args>` in `dir` with an isolated HOME, feeding `stdin`.
fn run_kakko(dir: &Path, home: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kakko"))
        .args(args)
        .current_dir(dir)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn kakko");

    if let Some(payload) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(payload.as_bytes())
            .unwrap();
    }

    child.wait_with_output().expect("Failed to wait for kakko")
}

fn assert_exit_zero(output: &Output) {
    assert!(
        output.status.success(),
        "kakko failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_stop_hook_rewrites_staged_file() {
    if !git_available() {
        return;
    }
    let repo = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    init_repo_with_commit(repo.path()).unwrap();
    stage_file(repo.path(), "a.txt", "settings（beta）").unwrap();

    let output = run_kakko(
        repo.path(),
        home.path(),
        &["hook", "stop"],
        Some(r#"{"session_id":"s1","hook_event_name":"Stop","stop_hook_active":false}"#),
    );

    assert_exit_zero(&output);
    assert_eq!(
        fs::read_to_string(repo.path().join("a.txt")).unwrap(),
        "settings(beta)"
    );
    assert!(output.stdout.is_empty(), "no message expected when files were staged");
    assert!(
        output.stderr.is_empty(),
        "quiet mode should keep stderr empty, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_stop_hook_only_touches_staged_files_with_fullwidth() {
    if !git_available() {
        return;
    }
    let repo = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    init_repo_with_commit(repo.path()).unwrap();
    stage_file(repo.path(), "a.txt", "hello").unwrap();
    stage_file(repo.path(), "b.txt", "（x）（y）").unwrap();
    fs::write(repo.path().join("c.txt"), "（unstaged）").unwrap();

    let output = run_kakko(repo.path(), home.path(), &["hook"], None);

    assert_exit_zero(&output);
    assert_eq!(fs::read_to_string(repo.path().join("a.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(repo.path().join("b.txt")).unwrap(), "(x)(y)");
    assert_eq!(
        fs::read_to_string(repo.path().join("c.txt")).unwrap(),
        "（unstaged）"
    );
}

#[test]
fn test_stop_hook_staged_then_deleted_file() {
    if !git_available() {
        return;
    }
    let repo = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    init_repo_with_commit(repo.path()).unwrap();
    stage_file(repo.path(), "missing.txt", "（gone）").unwrap();
    fs::remove_file(repo.path().join("missing.txt")).unwrap();

    let output = run_kakko(repo.path(), home.path(), &["hook", "Stop"], None);

    assert_exit_zero(&output);
    assert!(!repo.path().join("missing.txt").exists());
}

#[test]
fn test_stop_hook_nothing_staged_reports_message() {
    if !git_available() {
        return;
    }
    let repo = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    init_repo_with_commit(repo.path()).unwrap();

    let output = run_kakko(repo.path(), home.path(), &["hook", "stop"], None);

    assert_exit_zero(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "No staged files to check\n"
    );
}

#[test]
fn test_stop_hook_outside_repository_is_silent_success() {
    if !git_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "（keep）").unwrap();

    let output = run_kakko(dir.path(), home.path(), &["hook", "stop"], None);

    assert_exit_zero(&output);
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "（keep）");
}

#[test]
fn test_stop_hook_missing_git_program_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".kakko")).unwrap();
    fs::write(
        dir.path().join(".kakko/config.toml"),
        "[git]\nprogram = \"kakko-test-no-such-git-binary\"\n",
    )
    .unwrap();

    let output = run_kakko(dir.path(), home.path(), &["hook", "stop"], None);

    assert_exit_zero(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("kakko-test-no-such-git-binary"),
        "expected a diagnostic naming the git program, got: {}",
        stderr
    );
}

#[test]
fn test_stop_hook_malformed_stdin_still_runs() {
    if !git_available() {
        return;
    }
    let repo = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    init_repo_with_commit(repo.path()).unwrap();
    stage_file(repo.path(), "a.txt", "（a）").unwrap();

    let output = run_kakko(repo.path(), home.path(), &["hook", "stop"], Some("{not json"));

    assert_exit_zero(&output);
    assert_eq!(fs::read_to_string(repo.path().join("a.txt")).unwrap(), "(a)");
}

#[test]
fn test_unhandled_event_is_noop() {
    if !git_available() {
        return;
    }
    let repo = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    init_repo_with_commit(repo.path()).unwrap();
    stage_file(repo.path(), "a.txt", "（a）").unwrap();

    let output = run_kakko(repo.path(), home.path(), &["hook", "session-start"], None);

    assert_exit_zero(&output);
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(repo.path().join("a.txt")).unwrap(), "（a）");
}

#[test]
fn test_unknown_event_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();

    let output = run_kakko(dir.path(), home.path(), &["hook", "teardown"], None);

    assert_exit_zero(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("teardown"));
}

#[test]
fn test_disabled_hook_leaves_files_alone() {
    if !git_available() {
        return;
    }
    let repo = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    init_repo_with_commit(repo.path()).unwrap();
    stage_file(repo.path(), "a.txt", "（a）").unwrap();
    fs::create_dir_all(home.path().join(".kakko")).unwrap();
    fs::write(
        home.path().join(".kakko/config.toml"),
        "[hook]\nenabled = false\n",
    )
    .unwrap();

    let output = run_kakko(repo.path(), home.path(), &["hook", "stop"], None);

    assert_exit_zero(&output);
    assert_eq!(fs::read_to_string(repo.path().join("a.txt")).unwrap(), "（a）");
}

#[test]
fn test_stop_hook_spawn_failure_log_carries_error_code() {
    let dir = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".kakko")).unwrap();
    fs::write(
        dir.path().join(".kakko/config.toml"),
        "[git]\nprogram = \"kakko-test-no-such-git-binary\"\n",
    )
    .unwrap();

    let output = run_kakko(dir.path(), home.path(), &["-v", "hook", "stop"], None);

    assert_exit_zero(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""error_code":"HOOK_GIT_FAILED""#),
        "expected error_code in log, got: {}",
        stderr
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_stop_hook_non_utf8_staged_name_does_not_block_others() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    if !git_available() {
        return;
    }
    let repo = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();
    init_repo_with_commit(repo.path()).unwrap();
    let git = |args: &[&str]| {
        let status = Command::new("git")
            .current_dir(repo.path())
            .args(args)
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    };
    git(&["config", "core.quotePath", "false"]);
    fs::write(repo.path().join("a.txt"), "（x）").unwrap();
    fs::write(repo.path().join(OsStr::from_bytes(b"caf\xe9.txt")), "（latin-1）").unwrap();
    git(&["add", "--all"]);

    let output = run_kakko(repo.path(), home.path(), &["hook", "stop"], None);

    assert_exit_zero(&output);
    assert!(
        output.stderr.is_empty(),
        "no diagnostic expected, got: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(fs::read_to_string(repo.path().join("a.txt")).unwrap(), "(x)");
    assert_eq!(
        fs::read(repo.path().join(OsStr::from_bytes(b"caf\xe9.txt"))).unwrap(),
        "（latin-1）".as_bytes()
    );
}
