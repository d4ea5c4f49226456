use crate::common::{make_temp_dir, normalized_lines, run};

#[test]
fn no_arguments_print_usage_with_every_screen() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &[]);

    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout[0].starts_with("termsaver v"));
    assert!(stdout.iter().any(|l| l == "Usage: termsaver [screen] [options]"));
    for screen in ["clock", "programmer", "typewriter"] {
        assert!(
            stdout.iter().any(|l| l.starts_with(screen)),
            "usage did not list {screen}: {stdout:?}"
        );
    }
    assert!(output.stderr.is_empty());
}

#[test]
fn help_flags_print_the_same_usage() {
    let dir = make_temp_dir("cli");
    let plain = run(&dir, &[]);
    for flag in ["-h", "--help"] {
        let output = run(&dir, &[flag]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(output.stdout, plain.stdout);
    }
}

#[test]
fn verbose_alone_still_prints_usage() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["--verbose", "-v"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Screens:"));
}

#[test]
fn unknown_screen_exits_einval_with_message() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["-v", "doesnotexist"]);

    assert_eq!(output.status.code(), Some(libc::EINVAL));
    assert!(output.stdout.is_empty());
    let stderr = normalized_lines(&output.stderr);
    assert_eq!(
        stderr[0],
        "Oops! Invalid use of option 'doesnotexist'. It seems you chose an invalid screen. See --help for details."
    );
    assert!(
        stderr.iter().any(|l| l.contains("InvalidOption")),
        "verbose run should include diagnostics: {stderr:?}"
    );
}

#[test]
fn unknown_leading_option_is_anonymous() {
    let dir = make_temp_dir("cli");
    let output = run(&dir, &["-x"]);

    assert_eq!(output.status.code(), Some(libc::EINVAL));
    let stderr = normalized_lines(&output.stderr);
    assert_eq!(
        stderr,
        vec![
            "Oops! Invalid use of option. It seems you chose an invalid option. See --help for details."
                .to_string()
        ]
    );
}
