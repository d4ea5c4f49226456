use termsaver::app::{App, install_quiet_panic_hook};
use termsaver::core::paths::AppPaths;
use termsaver::logging::{LogTarget, Logger};
use termsaver::screens::ScreenRegistry;

fn main() {
    install_quiet_panic_hook();

    let app = App::new(ScreenRegistry::installed(), AppPaths::from_env());
    if let Err(err) = app.install_interrupt_handler() {
        Logger::new().warn(format!("WARN: {err}"), LogTarget::ConsoleOnly);
    }

    let code = app.run(std::env::args().skip(1));
    std::process::exit(code);
}
