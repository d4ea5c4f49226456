
use strum_macros::{AsRefStr, Display as DisplayDerive, EnumIter as EnumIterDerive};

pub const SUPPORT_URL: &str = "https://github.com/brunobraga/termsaver/issues";
pub const PROJECT_URL: &str = "http://termsaver.info";

/// Identifier of every user-facing text template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DisplayDerive, AsRefStr, EnumIterDerive)]
pub enum MessageId {
    // ---- Top-level usage ----------------------------------------------------
    UsageHeader,
    UsageSynopsis,
    UsageScreens,
    UsageOptions,
    UsageScreenHelp,
    UsageFooter,

    // ---- Dispatcher ---------------------------------------------------------
    InvalidScreenChosen,
    InvalidOptionChosen,

    // ---- Error reports ------------------------------------------------------
    PathNotFound,
    InvalidOptionNamed,
    InvalidOptionAnonymous,
    UrlFetchFailed,
    XmlParsingNamed,
    XmlParsingAnonymous,
    DomainFailure,
    UnclassifiedFailure,
    BugReport,
    VerboseHint,
    InterruptDiagnostics,
}

/// Source of message templates. Templates use `{name}` placeholders.
pub trait MessageCatalog {
    fn template(&self, id: MessageId) -> &str;

    /// Renders `id`, substituting each `{key}` with its value from `params`.
    /// Placeholders with no matching parameter are kept verbatim.
    fn render(&self, id: MessageId, params: &[(&str, &str)]) -> String {
        substitute(self.template(id), params)
    }
}

fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match params.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Built-in English texts.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn template(&self, id: MessageId) -> &str {
        match id {
            MessageId::UsageHeader => {
                "{app_name} v{version} - A simple text-based terminal screensaver"
            }
            MessageId::UsageSynopsis => "Usage: {app_name} [screen] [options]",
            MessageId::UsageScreens => "Screens:\n\n{screens}",
            MessageId::UsageOptions => {
                "Options:\n\n  -h, --help      Displays this help message\n  -v, --verbose   Displays full error details (for debugging)"
            }
            MessageId::UsageScreenHelp => {
                "Refer also to each screen's help by typing: {app_name} [screen] -h"
            }
            MessageId::UsageFooter => {
                "--\nSee more information about this project at:\n{project_url}\n\nReport bugs to authors at:\n{support_url}"
            }
            MessageId::InvalidScreenChosen => "It seems you chose an invalid screen",
            MessageId::InvalidOptionChosen => "It seems you chose an invalid option",
            MessageId::PathNotFound => "Oops! Could not find path for {path}. {message}",
            MessageId::InvalidOptionNamed => {
                "Oops! Invalid use of option '{option}'. {message}. See --help for details."
            }
            MessageId::InvalidOptionAnonymous => {
                "Oops! Invalid use of option. {message}. See --help for details."
            }
            MessageId::UrlFetchFailed => "Oops! Error while trying to fetch from {url}. {message}",
            MessageId::XmlParsingNamed => "Oops! There were parsing issues with '{name}'. {message}",
            MessageId::XmlParsingAnonymous => "Oops! There were parsing issues. {message}",
            MessageId::DomainFailure => "Oops! {message}",
            MessageId::UnclassifiedFailure => {
                "Oops! Something went terribly wrong. Error details: {message}"
            }
            MessageId::BugReport => {
                "You are more than welcome to report this bug. To do so, please visit:\n{support_url}"
            }
            MessageId::VerboseHint => {
                "Run again with --verbose to get the full error details and include them in your report."
            }
            MessageId::InterruptDiagnostics => "Cancelled by user (Ctrl-C).",
        }
    }
}
