use crate::dispatch::invocation::Invocation;
use crate::errors::Error;
use crate::messages::{MessageCatalog, MessageId};
use crate::screens::{Screen, ScreenRegistry};

const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// What the runner should do with an invocation.
pub enum Action<'r> {
    /// Print the top-level usage and exit successfully.
    ShowUsage,
    /// Hand `args` to `screen`.
    Dispatch {
        screen: &'r dyn Screen,
        args: Vec<String>,
    },
    /// Nothing matched; the error goes to the classifier.
    Fail(Error),
}

impl std::fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::ShowUsage => write!(f, "ShowUsage"),
            Action::Dispatch { screen, args } => f
                .debug_struct("Dispatch")
                .field("screen", &screen.name())
                .field("args", args)
                .finish(),
            Action::Fail(err) => f.debug_tuple("Fail").field(err).finish(),
        }
    }
}

/// Resolves the first argument against the registry. Resolution has no side
/// effects; running the chosen action is up to the caller.
pub struct Dispatcher<'r> {
    registry: &'r ScreenRegistry,
    catalog: &'r dyn MessageCatalog,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r ScreenRegistry, catalog: &'r dyn MessageCatalog) -> Self {
        Self { registry, catalog }
    }

    pub fn resolve(&self, invocation: &Invocation) -> Action<'r> {
        let Some(head) = invocation.head() else {
            return Action::ShowUsage;
        };
        if HELP_FLAGS.contains(&head) {
            return Action::ShowUsage;
        }
        if let Some(screen) = self.registry.find(head) {
            return Action::Dispatch {
                screen,
                args: invocation.rest().to_vec(),
            };
        }
        Action::Fail(self.unmatched(head))
    }

    /// Anything starting with `-` is reported as a bad option, anything else
    /// as an unknown screen named after the token.
    fn unmatched(&self, head: &str) -> Error {
        if head.starts_with('-') {
            Error::invalid_option(None, self.catalog.render(MessageId::InvalidOptionChosen, &[]))
        } else {
            Error::invalid_option(
                Some(head),
                self.catalog.render(MessageId::InvalidScreenChosen, &[]),
            )
        }
    }
}
