use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_termsaver"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "termsaver-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_config(dir: &Path, file_logging: bool, refresh: f64) {
    let cfg = format!(
        r#"{{
      "file_logging_enabled": {{ "value": "{}", "description": "file logging" }},
      "refresh_interval": {{ "value": {refresh}, "description": "refresh" }}
    }}"#,
        if file_logging { "True" } else { "False" }
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

/// Command for the binary, isolated from the user's config and logs.
pub fn termsaver(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(binary_path());
    cmd.args(args)
        .current_dir(dir)
        .env("TERMSAVER_CONFIG", dir.join("config.json"))
        .env("TERMSAVER_LOGS", dir.join("logs"))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

pub fn run(dir: &Path, args: &[&str]) -> Output {
    termsaver(dir, args).output().expect("failed to run binary")
}

pub fn spawn(dir: &Path, args: &[&str]) -> Child {
    termsaver(dir, args).spawn().expect("failed to spawn binary")
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    let mut bytes = s.bytes().peekable();

    while let Some(b) = bytes.next() {
        if b == 0x1B {
            if matches!(bytes.peek(), Some(b'[')) {
                let _ = bytes.next();
                while let Some(nb) = bytes.next() {
                    if (nb as char).is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        if b.is_ascii_control() {
            continue;
        }

        out.push(b);
    }

    String::from_utf8_lossy(&out).to_string()
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| strip_ansi_and_control(l).trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
