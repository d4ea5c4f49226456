use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};

use crate::APP_NAME;
use crate::core::context::AppContext;
use crate::errors::Result;
use crate::screens::help::HelpPageBuilder;
use crate::screens::options::{OptionSpec, ScreenOptions};
use crate::screens::{Screen, parse_screen_args};
use crate::ui::ansi::{STYLE_BOLD, STYLE_DIM, STYLE_RESET};
use crate::ui::canvas::Canvas;

const GLYPH_HEIGHT: usize = 5;

const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"],
    ["  █", "  █", "  █", "  █", "  █"],
    ["███", "  █", "███", "█  ", "███"],
    ["███", "  █", "███", "  █", "███"],
    ["█ █", "█ █", "███", "  █", "  █"],
    ["███", "█  ", "███", "  █", "███"],
    ["███", "█  ", "███", "█ █", "███"],
    ["███", "  █", "  █", "  █", "  █"],
    ["███", "█ █", "███", "█ █", "███"],
    ["███", "█ █", "███", "  █", "███"],
];

const MIN_REFRESH: Duration = Duration::from_millis(100);

const COLON: [&str; GLYPH_HEIGHT] = [" ", "█", " ", "█", " "];

const AMPM: OptionSpec = OptionSpec::flag(
    'm',
    "ampm",
    "Shows the clock in am/pm 12-hour format, without seconds",
);

/// Large digital clock with the date underneath, redrawn every refresh interval.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockScreen;

impl ClockScreen {
    fn options() -> ScreenOptions {
        ScreenOptions::new(vec![AMPM])
    }

    /// Text lines of one frame: the big clock face, a blank line, the date.
    pub fn frame<Tz: TimeZone>(now: &DateTime<Tz>, ampm: bool) -> Vec<String>
    where
        Tz::Offset: std::fmt::Display,
    {
        let (face, footer) = if ampm {
            (
                now.format("%I:%M").to_string(),
                now.format("%A, %B %d, %Y  %p").to_string(),
            )
        } else {
            (
                now.format("%H:%M:%S").to_string(),
                now.format("%A, %B %d, %Y").to_string(),
            )
        };

        let mut lines = big_text(&face)
            .into_iter()
            .map(|row| format!("{STYLE_BOLD}{row}{STYLE_RESET}"))
            .collect::<Vec<_>>();
        lines.push(String::new());
        lines.push(format!("{STYLE_DIM}{footer}{STYLE_RESET}"));
        lines
    }
}

/// Renders digits and colons with the block font; other characters become
/// blank columns.
fn big_text(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| match c {
                    '0'..='9' => DIGITS[c as usize - '0' as usize][row],
                    ':' => COLON[row],
                    _ => " ",
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

impl Screen for ClockScreen {
    fn name(&self) -> &str {
        "clock"
    }

    fn description(&self) -> &str {
        "displays a digital clock on screen"
    }

    fn help(&self) -> String {
        HelpPageBuilder::new(self.name(), self.description())
            .options(APP_NAME, &Self::options())
            .section(
                "EXAMPLES",
                vec![
                    format!("{APP_NAME} {}       # 24-hour clock", self.name()),
                    format!("{APP_NAME} {} -m    # 12-hour clock", self.name()),
                ],
            )
            .build()
            .render()
    }

    fn autorun(&self, args: &[String], ctx: &AppContext) -> Result<()> {
        let Some(values) = parse_screen_args(self, &Self::options(), args, ctx)? else {
            return Ok(());
        };
        let ampm = values.flag(AMPM.long);
        let refresh = ctx
            .config
            .refresh_interval()
            .as_duration()
            .max(MIN_REFRESH);

        let canvas = Canvas::new();
        let _cursor = canvas.hide_cursor();
        loop {
            ctx.interrupt.checkpoint()?;
            canvas.draw_centered(&Self::frame(&Local::now(), ampm))?;
            ctx.interrupt.pause(refresh)?;
        }
    }
}
