use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::APP_NAME;
use crate::core::context::AppContext;
use crate::errors::{Error, Result};
use crate::screens::help::HelpPageBuilder;
use crate::screens::options::{OptionSpec, ScreenOptions};
use crate::screens::{Screen, parse_screen_args};
use crate::ui::canvas::Canvas;

const FILE: OptionSpec = OptionSpec::valued(
    'f',
    "file",
    "PATH",
    "Types the contents of this text file instead of the built-in phrase",
);
const DELAY: OptionSpec = OptionSpec::valued(
    'd',
    "delay",
    "SECONDS",
    "Sets the speed of the typing animation (default from config)",
);

const DEFAULT_PHRASE: &str = "termsaver\n\nA simple text-based terminal screensaver";

/// Number of refresh intervals the finished text stays on screen.
const HOLD_INTERVALS: u32 = 5;

/// Types a short text in the middle of the screen, over and over.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypewriterScreen;

impl TypewriterScreen {
    fn options() -> ScreenOptions {
        ScreenOptions::new(vec![FILE, DELAY])
    }

    /// Lines to type: the file contents, or the built-in phrase.
    pub fn load_text(file: Option<&str>) -> Result<Vec<String>> {
        let text = match file {
            None => DEFAULT_PHRASE.to_string(),
            Some(path) => {
                if !Path::new(path).is_file() {
                    return Err(Error::path_not_found(
                        path,
                        "Make sure the file exists and is readable.",
                    ));
                }
                let raw = fs::read_to_string(path).map_err(|e| {
                    Error::domain(format!("Could not read {path} as text: {e}"))
                })?;
                if raw.trim().is_empty() {
                    return Err(Error::domain(format!("The file {path} is empty.")));
                }
                raw
            }
        };
        Ok(text.trim_end().lines().map(|l| l.replace('\t', "    ")).collect())
    }
}

impl Screen for TypewriterScreen {
    fn name(&self) -> &str {
        "typewriter"
    }

    fn description(&self) -> &str {
        "types a text in the middle of the screen"
    }

    fn help(&self) -> String {
        HelpPageBuilder::new(self.name(), self.description())
            .options(APP_NAME, &Self::options())
            .build()
            .render()
    }

    fn autorun(&self, args: &[String], ctx: &AppContext) -> Result<()> {
        let Some(values) = parse_screen_args(self, &Self::options(), args, ctx)? else {
            return Ok(());
        };

        let delay = values
            .seconds(DELAY.long, ctx.config.typing_delay())
            .map_err(|e| e.with_help(self.help()))?;
        let lines = Self::load_text(values.value(FILE.long)).map_err(|e| e.with_help(self.help()))?;

        let canvas = Canvas::new();
        let _cursor = canvas.hide_cursor();
        let hold = ctx
            .config
            .refresh_interval()
            .as_duration()
            .checked_mul(HOLD_INTERVALS)
            .unwrap_or(Duration::MAX);
        loop {
            canvas.type_centered(&lines, delay.as_duration(), &ctx.interrupt)?;
            ctx.interrupt.pause(hold)?;
        }
    }
}
