/// Global flags accepted anywhere on the command line.
pub const VERBOSE_FLAGS: [&str; 2] = ["-v", "--verbose"];

/// Raw process arguments after the global-flag scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Set when `-v`/`--verbose` appeared at least once.
    pub verbose: bool,
    /// Remaining arguments, in the order given.
    pub args: Vec<String>,
}

impl Invocation {
    /// Strips every verbose flag from `args`. Never fails.
    pub fn scan<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut verbose = false;
        let args = args
            .into_iter()
            .map(Into::into)
            .filter(|arg| {
                let is_verbose = VERBOSE_FLAGS.contains(&arg.as_str());
                verbose |= is_verbose;
                !is_verbose
            })
            .collect();
        Self { verbose, args }
    }

    /// First remaining argument: a screen name or `-h`/`--help`.
    pub fn head(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Everything after the head, handed to the selected screen.
    pub fn rest(&self) -> &[String] {
        self.args.get(1..).unwrap_or(&[])
    }
}
