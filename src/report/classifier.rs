use std::error::Error as StdError;

use crate::errors::{Error, ErrorKind};
use crate::logging::{LogTarget, Logger};
use crate::messages::{MessageCatalog, MessageId, SUPPORT_URL};
use crate::ui::canvas::restore_terminal;

/// Process exit status for each error kind, using the platform errno values.
pub fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Interrupted => 0,
        ErrorKind::PathNotFound => libc::ENOENT,
        ErrorKind::InvalidOption => libc::EINVAL,
        ErrorKind::Url => libc::ENETUNREACH,
        ErrorKind::Xml => libc::ENOEXEC,
        ErrorKind::Domain | ErrorKind::Unclassified => libc::EPERM,
    }
}

/// One thing to do while reporting a failure, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStep {
    /// Reset the terminal a screen may have left dirty.
    ClearTerminal,
    /// User-facing message, stderr.
    Message(String),
    /// Full error details, only in verbose mode.
    Diagnostics(String),
    /// Error-specific help, always last.
    Help(String),
}

/// Everything the runner does with one failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub exit_code: i32,
    pub steps: Vec<ReportStep>,
}

impl Report {
    /// Performs the steps in order through `logger`.
    pub fn emit(&self, logger: &Logger) {
        for step in &self.steps {
            match step {
                ReportStep::ClearTerminal => restore_terminal(),
                ReportStep::Message(text) => logger.error(text, LogTarget::ConsoleAndFile),
                ReportStep::Diagnostics(text) => logger.debug(text, LogTarget::ConsoleAndFile),
                ReportStep::Help(text) => logger.warn(text, LogTarget::ConsoleOnly),
            }
        }
    }
}

/// Turns an error into its message, exit code and follow-up output.
pub struct ErrorClassifier<'c> {
    catalog: &'c dyn MessageCatalog,
    verbose: bool,
}

impl<'c> ErrorClassifier<'c> {
    pub fn new(catalog: &'c dyn MessageCatalog, verbose: bool) -> Self {
        Self { catalog, verbose }
    }

    pub fn classify(&self, err: &Error) -> Report {
        let kind = err.kind();
        let mut steps = Vec::new();

        match kind {
            ErrorKind::Interrupted => {
                steps.push(ReportStep::ClearTerminal);
                if self.verbose {
                    let note = self.catalog.render(MessageId::InterruptDiagnostics, &[]);
                    steps.push(ReportStep::Diagnostics(format!(
                        "{note}\n{}",
                        diagnostics(err)
                    )));
                }
            }
            ErrorKind::Unclassified => {
                steps.push(ReportStep::Message(self.catalog.render(
                    MessageId::UnclassifiedFailure,
                    &[("message", unclassified_message(err).as_str())],
                )));
                if self.verbose {
                    steps.push(ReportStep::Diagnostics(diagnostics(err)));
                }
                steps.push(ReportStep::Message(
                    self.catalog
                        .render(MessageId::BugReport, &[("support_url", SUPPORT_URL)]),
                ));
                if !self.verbose {
                    steps.push(ReportStep::Message(
                        self.catalog.render(MessageId::VerboseHint, &[]),
                    ));
                }
            }
            _ => {
                steps.push(ReportStep::Message(self.taxonomy_message(err)));
                if self.verbose {
                    steps.push(ReportStep::Diagnostics(diagnostics(err)));
                }
                if let Some(help) = err.help_msg() {
                    steps.push(ReportStep::Help(help.to_string()));
                }
            }
        }

        Report {
            exit_code: exit_code(kind),
            steps,
        }
    }

    fn taxonomy_message(&self, err: &Error) -> String {
        let c = self.catalog;
        match err {
            Error::PathNotFound { path, message, .. } => c.render(
                MessageId::PathNotFound,
                &[("path", path.as_str()), ("message", message.as_str())],
            ),
            Error::InvalidOption {
                option_name: Some(name),
                message,
                ..
            } if !name.is_empty() => c.render(
                MessageId::InvalidOptionNamed,
                &[("option", name.as_str()), ("message", message.as_str())],
            ),
            Error::InvalidOption { message, .. } => {
                c.render(MessageId::InvalidOptionAnonymous, &[("message", message.as_str())])
            }
            Error::Url { url, message, .. } => c.render(
                MessageId::UrlFetchFailed,
                &[("url", url.as_str()), ("message", message.as_str())],
            ),
            Error::Xml {
                name: Some(name),
                message,
                ..
            } if !name.is_empty() => c.render(
                MessageId::XmlParsingNamed,
                &[("name", name.as_str()), ("message", message.as_str())],
            ),
            Error::Xml { message, .. } => {
                c.render(MessageId::XmlParsingAnonymous, &[("message", message.as_str())])
            }
            other => c.render(
                MessageId::DomainFailure,
                &[("message", domain_message(other).as_str())],
            ),
        }
    }
}

fn domain_message(err: &Error) -> String {
    match err {
        Error::Domain { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

fn unclassified_message(err: &Error) -> String {
    match err {
        Error::Unclassified { message } => message.clone(),
        Error::Io(io) => io.to_string(),
        other => other.to_string(),
    }
}

/// Debug rendering of `err` followed by its source chain.
fn diagnostics(err: &Error) -> String {
    let mut out = format!("{err:#?}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\nCaused by: {cause}"));
        source = cause.source();
    }
    out
}
