use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::core::context::AppContext;
use crate::core::interrupt::Interrupt;
use crate::core::paths::AppPaths;
use crate::dispatch::dispatcher::{Action, Dispatcher};
use crate::dispatch::invocation::Invocation;
use crate::dispatch::usage::UsagePrinter;
use crate::errors::{Error, Result};
use crate::logging::LogTarget;
use crate::messages::{EnglishCatalog, MessageCatalog};
use crate::report::classifier::ErrorClassifier;
use crate::screens::{Screen, ScreenRegistry};
use crate::{APP_NAME, VERSION};

/// Top-level runner: scans arguments, dispatches to a screen and turns the
/// outcome into a process exit code.
pub struct App {
    registry: ScreenRegistry,
    catalog: Box<dyn MessageCatalog>,
    paths: AppPaths,
    interrupt: Interrupt,
}

impl App {
    pub fn new(registry: ScreenRegistry, paths: AppPaths) -> Self {
        Self {
            registry,
            catalog: Box::new(EnglishCatalog),
            paths,
            interrupt: Interrupt::new(),
        }
    }

    pub fn with_catalog(mut self, catalog: impl MessageCatalog + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    /// Cancellation flag handed to screens.
    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }

    /// Routes Ctrl-C into the shared interrupt flag. Call once per process.
    pub fn install_interrupt_handler(&self) -> Result<()> {
        self.interrupt.install()
    }

    /// Top-level help text, rendered through the app's catalog.
    pub fn usage(&self) -> String {
        UsagePrinter::new(&self.registry, self.catalog.as_ref()).render(APP_NAME, VERSION)
    }

    /// Runs one invocation and returns the exit code.
    pub fn run<I, S>(&self, args: I) -> i32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let invocation = Invocation::scan(args);
        let verbose = invocation.verbose;

        let outcome = AppContext::from_paths(&self.paths, verbose).map(|mut ctx| {
            ctx.interrupt = self.interrupt.clone();
            let result = self.execute(&invocation, &ctx);
            (ctx, result)
        });

        let (ctx, err) = match outcome {
            Ok((_, Ok(()))) => return 0,
            Ok((ctx, Err(err))) => (ctx, err),
            Err(err) => (AppContext::new(verbose), err),
        };

        let report = ErrorClassifier::new(self.catalog.as_ref(), verbose).classify(&err);
        ctx.logger.info(
            format!("exit {} after {}", report.exit_code, err.kind()),
            LogTarget::FileOnly,
        );
        report.emit(&ctx.logger);
        report.exit_code
    }

    fn execute(&self, invocation: &Invocation, ctx: &AppContext) -> Result<()> {
        let dispatcher = Dispatcher::new(&self.registry, self.catalog.as_ref());
        match dispatcher.resolve(invocation) {
            Action::ShowUsage => {
                ctx.logger.info("showing usage", LogTarget::FileOnly);
                ctx.logger.info(self.usage(), LogTarget::ConsoleOnly);
                Ok(())
            }
            Action::Dispatch { screen, args } => {
                ctx.logger.info(
                    format!("dispatching to {} with {:?}", screen.name(), args),
                    LogTarget::FileOnly,
                );
                self.run_screen(screen, &args, ctx)
            }
            Action::Fail(err) => Err(err),
        }
    }

    /// Runs `screen`, converting panics into unclassified errors. A screen
    /// that returns normally after Ctrl-C counts as interrupted.
    fn run_screen(&self, screen: &dyn Screen, args: &[String], ctx: &AppContext) -> Result<()> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| screen.autorun(args, ctx)))
            .unwrap_or_else(|payload| Err(Error::unclassified(panic_message(payload.as_ref()))));

        match result {
            Ok(()) if ctx.interrupt.is_requested() => Err(Error::Interrupted),
            other => other,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "screen panicked".to_string()
    }
}

/// Silences the default panic printout; panics are reported through the
/// error classifier instead.
pub fn install_quiet_panic_hook() {
    panic::set_hook(Box::new(|_| {}));
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn temp_paths() -> AppPaths {
        let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir: PathBuf = std::env::temp_dir().join(format!(
            "termsaver-app-{}-{uniq}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        AppPaths {
            config_path: dir.join("config.json"),
            logs_dir: dir.join("logs"),
        }
    }

    enum Behaviour {
        Succeed,
        Fail,
        Panic,
        Interrupt,
    }

    struct Scripted(Behaviour);

    impl Screen for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }
        fn description(&self) -> &str {
            "does what the test says"
        }
        fn help(&self) -> String {
            "scripted help".to_string()
        }
        fn autorun(&self, _args: &[String], ctx: &AppContext) -> Result<()> {
            match self.0 {
                Behaviour::Succeed => Ok(()),
                Behaviour::Fail => Err(Error::path_not_found("/missing", "gone")),
                Behaviour::Panic => panic!("screen blew up"),
                Behaviour::Interrupt => {
                    ctx.interrupt.trigger();
                    Ok(())
                }
            }
        }
    }

    fn app(behaviour: Behaviour) -> App {
        App::new(
            ScreenRegistry::new(vec![Box::new(Scripted(behaviour))]),
            temp_paths(),
        )
    }

    #[test]
    fn usage_and_success_exit_zero() {
        let app = app(Behaviour::Succeed);
        assert_eq!(app.run(Vec::<String>::new()), 0);
        assert_eq!(app.run(["--help"]), 0);
        assert_eq!(app.run(["-v", "scripted"]), 0);
    }

    #[test]
    fn unknown_screen_exits_einval() {
        assert_eq!(app(Behaviour::Succeed).run(["nope"]), libc::EINVAL);
        assert_eq!(app(Behaviour::Succeed).run(["-x"]), libc::EINVAL);
    }

    #[test]
    fn screen_errors_map_to_their_exit_code() {
        assert_eq!(app(Behaviour::Fail).run(["scripted"]), libc::ENOENT);
    }

    #[test]
    fn panicking_screen_is_unclassified() {
        assert_eq!(app(Behaviour::Panic).run(["scripted"]), libc::EPERM);
    }

    #[test]
    fn cancelled_screen_exits_zero() {
        let app = app(Behaviour::Interrupt);
        assert_eq!(app.run(["scripted"]), 0);
        assert!(app.interrupt().is_requested());
    }

    #[test]
    fn broken_config_is_reported_before_dispatch() {
        let app = app(Behaviour::Succeed);
        fs::write(&app.paths.config_path, "{ not json").unwrap();
        assert_eq!(app.run(["scripted"]), libc::EPERM);
    }

    #[test]
    fn custom_catalog_drives_usage_and_failures() {
        struct Brief;
        impl MessageCatalog for Brief {
            fn template(&self, id: crate::messages::MessageId) -> &str {
                match id {
                    crate::messages::MessageId::UsageSynopsis => "run: {app_name} SCREEN",
                    _ => "",
                }
            }
        }

        let app = app(Behaviour::Succeed).with_catalog(Brief);
        let usage = app.usage();
        assert!(usage.contains("run: termsaver SCREEN"));
        assert!(!usage.contains("Usage:"));
        assert_eq!(app.run(["nope"]), libc::EINVAL);
    }

    #[test]
    fn default_usage_lists_registered_screens() {
        let usage = app(Behaviour::Succeed).usage();
        assert!(usage.contains("Usage: termsaver [screen] [options]"));
        assert!(usage.contains("  scripted"));
    }

    #[test]
    fn huge_delay_is_an_invalid_option_not_a_crash() {
        let app = App::new(ScreenRegistry::installed(), temp_paths());
        assert_eq!(app.run(["typewriter", "-d", "1e300"]), libc::EINVAL);
    }

    #[test]
    fn huge_configured_interval_is_rejected_at_load() {
        let app = App::new(ScreenRegistry::installed(), temp_paths());
        fs::write(
            &app.paths.config_path,
            r#"{ "refresh_interval": { "value": 1e300, "description": "x" } }"#,
        )
        .unwrap();
        assert_eq!(app.run(["clock"]), libc::EPERM);
    }

    #[test]
    fn panic_payloads_become_messages() {
        let boxed: Box<dyn Any + Send> = Box::new("static text");
        assert_eq!(panic_message(boxed.as_ref()), "static text");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned text"));
        assert_eq!(panic_message(boxed.as_ref()), "owned text");
        let boxed: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(boxed.as_ref()), "screen panicked");
    }
}
