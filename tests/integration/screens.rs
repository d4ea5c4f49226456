use std::fs;

use crate::common::{make_temp_dir, normalized_lines, run};

#[test]
fn screen_help_exits_zero() {
    let dir = make_temp_dir("screens");
    for screen in ["clock", "programmer", "typewriter"] {
        let output = run(&dir, &[screen, "-h"]);
        assert_eq!(output.status.code(), Some(0), "{screen}");
        let stdout = normalized_lines(&output.stdout);
        assert!(stdout.iter().any(|l| l.starts_with("-h, --help")), "{screen}");
    }
}

#[test]
fn missing_programmer_path_exits_enoent() {
    let dir = make_temp_dir("screens");
    let missing = dir.join("nonexistent");
    let output = run(&dir, &["programmer", "-p", &missing.to_string_lossy()]);

    assert_eq!(output.status.code(), Some(libc::ENOENT));
    let stderr = normalized_lines(&output.stderr);
    assert!(stderr[0].starts_with(&format!(
        "Oops! Could not find path for {}.",
        missing.display()
    )));
    assert!(
        stderr.iter().any(|l| l == "SCREEN"),
        "screen help should follow the message: {stderr:?}"
    );
}

#[test]
fn programmer_without_path_is_invalid_option() {
    let dir = make_temp_dir("screens");
    let output = run(&dir, &["programmer"]);

    assert_eq!(output.status.code(), Some(libc::EINVAL));
    let stderr = normalized_lines(&output.stderr);
    assert!(stderr[0].starts_with("Oops! Invalid use of option '--path'."));
}

#[test]
fn unknown_screen_option_is_invalid_option() {
    let dir = make_temp_dir("screens");
    let output = run(&dir, &["clock", "--bogus"]);
    assert_eq!(output.status.code(), Some(libc::EINVAL));
}

#[test]
fn empty_typewriter_file_is_a_domain_error() {
    let dir = make_temp_dir("screens");
    let file = dir.join("empty.txt");
    fs::write(&file, "").unwrap();
    let output = run(&dir, &["typewriter", "-f", &file.to_string_lossy()]);

    assert_eq!(output.status.code(), Some(libc::EPERM));
    let stderr = normalized_lines(&output.stderr);
    assert!(stderr[0].starts_with("Oops! The file"));
}
