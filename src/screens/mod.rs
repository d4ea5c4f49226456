pub mod clock;
pub mod help;
pub mod options;
pub mod programmer;
pub mod typewriter;

use crate::core::context::AppContext;
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::screens::clock::ClockScreen;
use crate::screens::options::{OptionValues, OptionsDecision, ScreenOptions};
use crate::screens::programmer::ProgrammerScreen;
use crate::screens::typewriter::TypewriterScreen;

/// A plugin implementing one visual effect.
pub trait Screen {
    /// Unique name used for exact-match dispatch.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Detailed help shown by `termsaver <name> -h`.
    fn help(&self) -> String;

    /// One-line entry for the top-level usage listing.
    fn usage(&self) -> String {
        format!("{:<12} {}", self.name(), self.description())
    }

    /// Runs the screen with its share of the command line until it finishes,
    /// fails, or is interrupted.
    fn autorun(&self, args: &[String], ctx: &AppContext) -> Result<()>;
}

pub type ScreenDyn = Box<dyn Screen>;

/// Parses `args` against `options`. Prints the screen help and returns
/// `Ok(None)` on `-h`/`--help`; parse errors carry the screen help.
pub fn parse_screen_args(
    screen: &dyn Screen,
    options: &ScreenOptions,
    args: &[String],
    ctx: &AppContext,
) -> Result<Option<OptionValues>> {
    match options
        .parse(args)
        .map_err(|e| e.with_help(screen.help()))?
    {
        OptionsDecision::ShowHelp => {
            ctx.logger.info(screen.help(), LogTarget::ConsoleOnly);
            Ok(None)
        }
        OptionsDecision::Run(values) => Ok(Some(values)),
    }
}

/// Ordered set of screens, fixed for the lifetime of the process.
pub struct ScreenRegistry {
    screens: Vec<ScreenDyn>,
}

impl ScreenRegistry {
    pub fn new(screens: Vec<ScreenDyn>) -> Self {
        debug_assert!(
            screens
                .iter()
                .enumerate()
                .all(|(i, s)| screens[..i].iter().all(|o| o.name() != s.name())),
            "screen names must be unique"
        );
        Self { screens }
    }

    /// Every screen bundled with the application, in display order.
    pub fn installed() -> Self {
        Self::new(vec![
            Box::new(ClockScreen),
            Box::new(ProgrammerScreen),
            Box::new(TypewriterScreen),
        ])
    }

    pub fn list(&self) -> &[ScreenDyn] {
        &self.screens
    }

    pub fn find(&self, name: &str) -> Option<&dyn Screen> {
        self.screens
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// Indented usage line of every screen, one per line, in registry order.
    pub fn usage_list(&self) -> String {
        self.screens
            .iter()
            .map(|s| format!("  {}", s.usage()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
