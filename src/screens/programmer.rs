use std::fs;
use std::path::{Path, PathBuf};

use crate::APP_NAME;
use crate::core::context::AppContext;
use crate::core::interrupt::Interrupt;
use crate::errors::{Error, Result, require_option};
use crate::logging::LogTarget;
use crate::screens::help::HelpPageBuilder;
use crate::screens::options::{OptionSpec, ScreenOptions};
use crate::screens::{Screen, parse_screen_args};
use crate::ui::canvas::Canvas;

const PATH: OptionSpec = OptionSpec::valued(
    'p',
    "path",
    "PATH",
    "Sets the location to search for text-based source files (required)",
);
const DELAY: OptionSpec = OptionSpec::valued(
    'd',
    "delay",
    "SECONDS",
    "Sets the speed of the typing animation (default from config)",
);

/// Larger files are skipped.
const MAX_FILE_BYTES: u64 = 256 * 1024;

/// Types out source files found under a path, one character at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgrammerScreen;

impl ProgrammerScreen {
    fn options() -> ScreenOptions {
        ScreenOptions::new(vec![PATH, DELAY])
    }

    /// Readable UTF-8 files under `root` (or `root` itself), sorted, skipping
    /// hidden entries, oversized files and symlinked directories. Stops with
    /// `Error::Interrupted` between directories once Ctrl-C was pressed.
    pub fn collect_files(root: &Path, interrupt: &Interrupt) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(Error::path_not_found(
                root.display().to_string(),
                "Make sure the path exists and is readable.",
            ));
        }

        let mut files = Vec::new();
        if root.is_file() {
            if is_text_file(root) {
                files.push(root.to_path_buf());
            }
            return Ok(files);
        }

        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            interrupt.checkpoint()?;
            for entry in fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                if is_hidden(&path) {
                    continue;
                }
                let file_type = entry.file_type()?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_symlink() && path.is_dir() {
                    continue;
                } else if is_text_file(&path) {
                    files.push(path);
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn is_text_file(path: &Path) -> bool {
    let small = fs::metadata(path)
        .map(|m| m.is_file() && m.len() > 0 && m.len() <= MAX_FILE_BYTES)
        .unwrap_or(false);
    small && fs::read_to_string(path).is_ok()
}

impl Screen for ProgrammerScreen {
    fn name(&self) -> &str {
        "programmer"
    }

    fn description(&self) -> &str {
        "displays source code in typing animation"
    }

    fn help(&self) -> String {
        HelpPageBuilder::new(self.name(), self.description())
            .options(APP_NAME, &Self::options())
            .section(
                "EXAMPLES",
                vec![
                    format!("{APP_NAME} {} -p /path/to/my/code", self.name()),
                    format!("{APP_NAME} {} -p ~/src -d 0.001", self.name()),
                ],
            )
            .build()
            .render()
    }

    fn autorun(&self, args: &[String], ctx: &AppContext) -> Result<()> {
        let Some(values) = parse_screen_args(self, &Self::options(), args, ctx)? else {
            return Ok(());
        };

        let root = require_option(
            values.value(PATH.long),
            "--path",
            "You must inform the path to search for source files",
        )
        .map_err(|e| e.with_help(self.help()))?;
        let delay = values
            .seconds(DELAY.long, ctx.config.typing_delay())
            .map_err(|e| e.with_help(self.help()))?;

        let files = Self::collect_files(Path::new(root), &ctx.interrupt)
            .map_err(|e| e.with_help(self.help()))?;
        if files.is_empty() {
            return Err(Error::domain(format!(
                "No readable text files were found under {root}."
            ))
            .with_help(self.help()));
        }
        ctx.logger.info(
            format!("programmer: {} file(s) under {root}", files.len()),
            LogTarget::FileOnly,
        );

        let canvas = Canvas::new();
        let _cursor = canvas.hide_cursor();
        let pause = ctx.config.refresh_interval().as_duration();
        loop {
            for file in &files {
                ctx.interrupt.checkpoint()?;
                let Ok(text) = fs::read_to_string(file) else {
                    continue;
                };
                canvas.clear()?;
                canvas.type_text(&text, delay.as_duration(), &ctx.interrupt)?;
                ctx.interrupt.pause(pause)?;
            }
        }
    }
}
