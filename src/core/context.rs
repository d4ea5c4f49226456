use crate::config::Config;
use crate::core::interrupt::Interrupt;
use crate::core::paths::AppPaths;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};

/// Everything a screen needs while it runs.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub interrupt: Interrupt,
    pub verbose: bool,
}

impl AppContext {
    /// Default config, console-only logging.
    pub fn new(verbose: bool) -> Self {
        Self {
            config: Config::default(),
            logger: Logger::new(),
            interrupt: Interrupt::new(),
            verbose,
        }
    }

    pub fn from_paths(paths: &AppPaths, verbose: bool) -> Result<Self> {
        let config = Config::load_from(&paths.config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&paths.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        for (key, _, value) in config.rows() {
            logger.info(format!("config {key} = {value}"), LogTarget::FileOnly);
        }

        Ok(Self {
            config,
            logger,
            interrupt: Interrupt::new(),
            verbose,
        })
    }
}
