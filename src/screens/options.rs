use std::collections::HashMap;

use crate::core::types::{MAX_SECONDS, Seconds};
use crate::errors::{Error, Result};

/// One option a screen accepts, e.g. `-p`/`--path PATH`.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub short: char,
    pub long: &'static str,
    /// Placeholder shown in help; `None` for plain flags.
    pub value_name: Option<&'static str>,
    pub help: &'static str,
}

impl OptionSpec {
    pub const fn flag(short: char, long: &'static str, help: &'static str) -> Self {
        Self {
            short,
            long,
            value_name: None,
            help,
        }
    }

    pub const fn valued(
        short: char,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            short,
            long,
            value_name: Some(value_name),
            help,
        }
    }

    fn takes_value(&self) -> bool {
        self.value_name.is_some()
    }

    fn signature(&self) -> String {
        match self.value_name {
            Some(v) => format!("-{}, --{} {}", self.short, self.long, v),
            None => format!("-{}, --{}", self.short, self.long),
        }
    }
}

pub const HELP_OPTION: OptionSpec = OptionSpec::flag('h', "help", "Displays this help message");

#[derive(Debug)]
pub enum OptionsDecision {
    /// `-h`/`--help` was given; print the screen help and stop.
    ShowHelp,
    Run(OptionValues),
}

/// Options found on the command line, keyed by long name.
#[derive(Debug, Default)]
pub struct OptionValues {
    values: HashMap<&'static str, Option<String>>,
}

impl OptionValues {
    pub fn flag(&self, long: &str) -> bool {
        self.values.contains_key(long)
    }

    /// Last value given for `long`.
    pub fn value(&self, long: &str) -> Option<&str> {
        self.values.get(long).and_then(|v| v.as_deref())
    }

    /// Value of `long` as seconds, or `default` when the option is absent.
    pub fn seconds(&self, long: &str, default: Seconds) -> Result<Seconds> {
        match self.value(long) {
            None => Ok(default),
            Some(raw) => Seconds::try_from_str(raw).map_err(|_| {
                Error::invalid_option(
                    Some(&format!("--{long}")),
                    format!("Expected a number of seconds between 0 and {MAX_SECONDS}, got '{raw}'"),
                )
            }),
        }
    }
}

/// getopt-style parser shared by all screens. `-h`/`--help` is always
/// accepted; unknown options and stray arguments are errors even when help
/// was requested.
#[derive(Debug, Clone)]
pub struct ScreenOptions {
    specs: Vec<OptionSpec>,
}

impl ScreenOptions {
    pub fn new(mut specs: Vec<OptionSpec>) -> Self {
        specs.push(HELP_OPTION);
        Self { specs }
    }

    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    pub fn parse(&self, args: &[String]) -> Result<OptionsDecision> {
        let mut found = OptionValues::default();
        let mut iter = args.iter();

        while let Some(token) = iter.next() {
            let (spec, inline) = self.lookup(token)?;
            let value = if spec.takes_value() {
                match inline {
                    Some(v) => Some(v),
                    None => Some(Self::next_value(&mut iter, token)?),
                }
            } else if inline.is_some() {
                return Err(Error::invalid_option(
                    Some(token),
                    "This option does not take a value",
                ));
            } else {
                None
            };
            found.values.insert(spec.long, value);
        }

        if found.flag(HELP_OPTION.long) {
            return Ok(OptionsDecision::ShowHelp);
        }
        Ok(OptionsDecision::Run(found))
    }

    /// Help lines with aligned descriptions, one per option.
    pub fn help_lines(&self) -> Vec<String> {
        let signatures: Vec<String> = self.specs.iter().map(OptionSpec::signature).collect();
        let width = signatures.iter().map(|s| s.len()).max().unwrap_or(0);
        self.specs
            .iter()
            .zip(signatures)
            .map(|(spec, sig)| format!("{sig:<width$}   {}", spec.help))
            .collect()
    }

    fn lookup(&self, token: &str) -> Result<(&OptionSpec, Option<String>)> {
        let spec = if let Some(long) = token.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (long, None),
            };
            self.specs
                .iter()
                .find(|s| s.long == name)
                .map(|s| (s, inline))
        } else if let Some(short) = token.strip_prefix('-') {
            let mut chars = short.chars();
            match (chars.next(), chars.as_str()) {
                (Some(c), rest) => self.specs.iter().find(|s| s.short == c).map(|s| {
                    let inline = (!rest.is_empty()).then(|| rest.to_string());
                    (s, inline)
                }),
                (None, _) => None,
            }
        } else {
            return Err(Error::invalid_option(
                Some(token),
                "This screen does not take positional arguments",
            ));
        };

        spec.ok_or_else(|| Error::invalid_option(Some(token), "Unknown option"))
    }

    fn next_value<'a, I>(args: &mut I, flag: &str) -> Result<String>
    where
        I: Iterator<Item = &'a String>,
    {
        args.next()
            .cloned()
            .ok_or_else(|| Error::invalid_option(Some(flag), "Missing value for this option"))
    }
}
