use strum_macros::{AsRefStr, Display as DisplayDerive, EnumIter as EnumIterDerive};
use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain error set raised by the dispatcher and by screens.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Screen inputs ------------------------------------------------------
    /// A filesystem path required by a screen could not be located.
    #[error("Could not find path for {path}. {message}")]
    PathNotFound {
        path: String,
        message: String,
        help_msg: Option<String>,
    },

    /// An argument or option was unrecognized or malformed.
    #[error("Invalid use of option{}. {message}", quoted(.option_name))]
    InvalidOption {
        option_name: Option<String>,
        message: String,
        help_msg: Option<String>,
    },

    // ---- Remote content -----------------------------------------------------
    /// A network resource fetch failed.
    #[error("Error while trying to fetch from {url}. {message}")]
    Url {
        url: String,
        message: String,
        help_msg: Option<String>,
    },

    /// Structured-data parsing failed.
    #[error("Parsing issues{}. {message}", quoted_with(.name))]
    Xml {
        name: Option<String>,
        message: String,
        help_msg: Option<String>,
    },

    // ---- Plumbing -----------------------------------------------------------
    /// Generic domain error when a message has no dedicated variant.
    #[error("{message}")]
    Domain {
        message: String,
        help_msg: Option<String>,
    },

    /// User-initiated cancellation (Ctrl-C).
    #[error("Interrupted by user")]
    Interrupted,

    /// Failure outside the taxonomy (runtime faults, panics).
    #[error("{message}")]
    Unclassified { message: String },

    /// IO passthrough, classified as unclassified.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse kind of an [`Error`], used to pick templates and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, AsRefStr, EnumIterDerive)]
pub enum ErrorKind {
    PathNotFound,
    InvalidOption,
    Url,
    Xml,
    Domain,
    Interrupted,
    Unclassified,
}

fn quoted(name: &Option<String>) -> String {
    match name {
        Some(n) if !n.is_empty() => format!(" '{n}'"),
        _ => String::new(),
    }
}

fn quoted_with(name: &Option<String>) -> String {
    match name {
        Some(n) if !n.is_empty() => format!(" with '{n}'"),
        _ => String::new(),
    }
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn path_not_found<P: Into<String>, S: Into<String>>(path: P, msg: S) -> Self {
        Error::PathNotFound {
            path: path.into(),
            message: msg.into(),
            help_msg: None,
        }
    }

    pub fn invalid_option<S: Into<String>>(option_name: Option<&str>, msg: S) -> Self {
        Error::InvalidOption {
            option_name: option_name.map(str::to_string),
            message: msg.into(),
            help_msg: None,
        }
    }

    pub fn url<U: Into<String>, S: Into<String>>(url: U, msg: S) -> Self {
        Error::Url {
            url: url.into(),
            message: msg.into(),
            help_msg: None,
        }
    }

    pub fn xml<S: Into<String>>(name: Option<&str>, msg: S) -> Self {
        Error::Xml {
            name: name.map(str::to_string),
            message: msg.into(),
            help_msg: None,
        }
    }

    pub fn domain<S: Into<String>>(msg: S) -> Self {
        Error::Domain {
            message: msg.into(),
            help_msg: None,
        }
    }

    pub fn unclassified<S: Into<String>>(msg: S) -> Self {
        Error::Unclassified {
            message: msg.into(),
        }
    }

    /// Attach a help message printed after the primary message.
    /// Has no effect on kinds outside the taxonomy.
    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        match &mut self {
            Error::PathNotFound { help_msg, .. }
            | Error::InvalidOption { help_msg, .. }
            | Error::Url { help_msg, .. }
            | Error::Xml { help_msg, .. }
            | Error::Domain { help_msg, .. } => *help_msg = Some(help.into()),
            Error::Interrupted | Error::Unclassified { .. } | Error::Io(_) => {}
        }
        self
    }

    /// Help message, if one was attached and it is not blank.
    pub fn help_msg(&self) -> Option<&str> {
        let help = match self {
            Error::PathNotFound { help_msg, .. }
            | Error::InvalidOption { help_msg, .. }
            | Error::Url { help_msg, .. }
            | Error::Xml { help_msg, .. }
            | Error::Domain { help_msg, .. } => help_msg.as_deref(),
            Error::Interrupted | Error::Unclassified { .. } | Error::Io(_) => None,
        };
        help.filter(|h| !h.trim().is_empty())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PathNotFound { .. } => ErrorKind::PathNotFound,
            Error::InvalidOption { .. } => ErrorKind::InvalidOption,
            Error::Url { .. } => ErrorKind::Url,
            Error::Xml { .. } => ErrorKind::Xml,
            Error::Domain { .. } => ErrorKind::Domain,
            Error::Interrupted => ErrorKind::Interrupted,
            Error::Unclassified { .. } | Error::Io(_) => ErrorKind::Unclassified,
        }
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::InvalidOption>` naming the option.
/// Useful when a screen requires a value for one of its flags.
pub fn require_option<T, S: Into<String>>(opt: Option<T>, option_name: &str, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::invalid_option(Some(option_name), msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_option_constructor_keeps_name_and_message() {
        let err = Error::invalid_option(Some("--path"), "missing value");
        match err {
            Error::InvalidOption {
                option_name,
                message,
                help_msg,
            } => {
                assert_eq!(option_name.as_deref(), Some("--path"));
                assert_eq!(message, "missing value");
                assert!(help_msg.is_none());
            }
            other => panic!("expected invalid option error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_option_formats_with_and_without_name() {
        let named = Error::invalid_option(Some("-x"), "Bad");
        assert_eq!(named.to_string(), "Invalid use of option '-x'. Bad");

        let anonymous = Error::invalid_option(None, "Bad");
        assert_eq!(anonymous.to_string(), "Invalid use of option. Bad");
    }

    #[test]
    fn xml_formats_optional_name() {
        let err = Error::xml(Some("feed"), "unexpected tag");
        assert_eq!(err.to_string(), "Parsing issues with 'feed'. unexpected tag");
        let err = Error::xml(None, "unexpected tag");
        assert_eq!(err.to_string(), "Parsing issues. unexpected tag");
    }

    #[test]
    fn with_help_attaches_message_to_taxonomy_members() {
        let err = Error::path_not_found("/nope", "gone").with_help("try -p");
        assert_eq!(err.help_msg(), Some("try -p"));

        let err = Error::domain("x").with_help("   ");
        assert_eq!(err.help_msg(), None);
    }

    #[test]
    fn with_help_is_ignored_outside_taxonomy() {
        let err = Error::unclassified("boom").with_help("ignored");
        assert_eq!(err.help_msg(), None);
        let err = Error::Interrupted.with_help("ignored");
        assert_eq!(err.help_msg(), None);
    }

    #[test]
    fn kind_maps_every_variant() {
        assert_eq!(Error::path_not_found("a", "b").kind(), ErrorKind::PathNotFound);
        assert_eq!(Error::invalid_option(None, "b").kind(), ErrorKind::InvalidOption);
        assert_eq!(Error::url("a", "b").kind(), ErrorKind::Url);
        assert_eq!(Error::xml(None, "b").kind(), ErrorKind::Xml);
        assert_eq!(Error::domain("b").kind(), ErrorKind::Domain);
        assert_eq!(Error::Interrupted.kind(), ErrorKind::Interrupted);
        assert_eq!(Error::unclassified("b").kind(), ErrorKind::Unclassified);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(Error::from(io).kind(), ErrorKind::Unclassified);
    }

    #[test]
    fn require_option_errors_with_option_name() {
        let err = require_option::<i32, _>(None, "--delay", "needs a value").unwrap_err();
        match err {
            Error::InvalidOption { option_name, .. } => {
                assert_eq!(option_name.as_deref(), Some("--delay"))
            }
            other => panic!("expected invalid option error, got {other:?}"),
        }
        assert_eq!(require_option(Some(3), "--delay", "x").unwrap(), 3);
    }

    #[test]
    fn io_error_formats_message() {
        let raw = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let err = Error::from(raw);
        assert_eq!(err.to_string(), "I/O error: disk");
    }
}
