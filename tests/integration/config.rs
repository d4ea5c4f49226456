use std::fs;

use crate::common::{make_temp_dir, normalized_lines, read_log_contents, run, write_config};

#[test]
fn file_logging_records_dispatch_failures() {
    let dir = make_temp_dir("config");
    write_config(&dir, true, 1.0);
    let output = run(&dir, &["doesnotexist"]);

    assert_eq!(output.status.code(), Some(libc::EINVAL));
    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("FILE_LOGGING_ENABLED"));
    assert!(log.contains("It seems you chose an invalid screen"));
}

#[test]
fn file_logging_is_off_by_default() {
    let dir = make_temp_dir("config");
    let output = run(&dir, &["doesnotexist"]);

    assert_eq!(output.status.code(), Some(libc::EINVAL));
    assert!(read_log_contents(&dir).is_none());
}

#[test]
fn invalid_config_is_reported() {
    let dir = make_temp_dir("config");
    fs::write(dir.join("config.json"), "{ nope").unwrap();
    let output = run(&dir, &[]);

    assert_eq!(output.status.code(), Some(libc::EPERM));
    let stderr = normalized_lines(&output.stderr);
    assert!(stderr[0].starts_with("Oops! "));
    assert!(output.stdout.is_empty());
}
