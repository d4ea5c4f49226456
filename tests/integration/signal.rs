use std::thread;
use std::time::{Duration, Instant};

use crate::common::{make_temp_dir, spawn, write_config};

#[test]
fn sigint_cleans_up_and_exits_zero() {
    let dir = make_temp_dir("signal");
    write_config(&dir, false, 0.1);
    let mut child = spawn(&dir, &["clock"]);

    thread::sleep(Duration::from_millis(500));
    let pid = child.id() as libc::pid_t;
    // SAFETY: plain kill(2) on our own child process.
    let rc = unsafe { libc::kill(pid, libc::SIGINT) };
    assert_eq!(rc, 0);

    let deadline = Instant::now() + Duration::from_secs(5);
    while child.try_wait().unwrap().is_none() {
        assert!(Instant::now() < deadline, "clock did not stop after SIGINT");
        thread::sleep(Duration::from_millis(20));
    }
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with("\u{1b}[0m\u{1b}[2J\u{1b}[H\u{1b}[?25h"));
}

#[test]
fn usage_on_closed_stdout_exits_cleanly() {
    let dir = make_temp_dir("signal");
    let mut child = spawn(&dir, &[]);
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}
