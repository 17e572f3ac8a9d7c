// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::fmt;
use std::io::{self, Write};

use crate::error::{Error, Result};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// String to show in usage if an argument is required.
const REQUIRED_STR: &str = " (required)";

/// Indent for the per-argument lines of the usage statement.
const USAGE_PREFIX_SPACES: &str = "  ";

/// Type label shown in the usage statement for a flag argument.
const FLAG_TYPE_STR: &str = "Flag";

/// Type label shown in the usage statement for a value argument.
const VALUE_TYPE_STR: &str = "Key=Value";

/// Used to specify whether an argument is a "stand-alone" flag
/// (needs no value), or whether it consumes the following token
/// as its value.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Kind {
    /// Argument is stand-alone (no value consumed).
    Flag,
    /// Argument consumes the next token as its value.
    Value,
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Flag
    }
}

impl Kind {
    /// Create a new default kind for an [Arg].
    pub fn new() -> Self {
        Kind::default()
    }
}

/// A declared argument.
///
/// 1) It specifies how a command-line token is to be recognised: by its
///    short name (`-h`), its long name (`--help`), or either.
///
/// 2) It stores the results of the parse for the argument: whether the
///    argument was seen ([Arg::set]) and, for [Kind::Value] arguments,
///    the token consumed as its value ([Arg::value]).
///
/// # Notes
///
/// - All members are public so callers can inspect the parse state
///   directly.
/// - Names are matched byte-for-byte against command-line tokens, so
///   they must be registered *with* their dashes (`-h`, not `h`).
/// - At least one of [Arg::short]/[Arg::long] should be set; this is not
///   enforced, but a nameless argument can never match a token and is
///   omitted from the usage statement.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Arg {
    /// Short name, including its dash (e.g. `-h`).
    pub short: Option<String>,
    /// Long name, including its dashes (e.g. `--help`).
    pub long: Option<String>,
    /// Type of argument (flag or value).
    pub kind: Kind,
    /// Set if the argument must be specified on the command line.
    ///
    /// Meaningful in practice only for [Kind::Value] arguments; a
    /// required flag is legal but unusual.
    pub required: bool,
    /// Description of the argument, shown in the usage statement.
    pub help: Option<String>,

    //----------------------------------------
    // The following are set by the parser.
    //----------------------------------------
    /// Set once a token matching this argument was seen.
    pub set: bool,
    /// Value consumed for this argument (only for [Kind::Value]
    /// arguments followed by a token).
    pub value: Option<String>,
}

impl Arg {
    /// Create a new argument declaration (a flag by default).
    pub fn new() -> Self {
        Arg::default()
    }

    /// Specify the short name for the argument, including its dash.
    pub fn short(self, short: &str) -> Self {
        Arg {
            short: Some(short.into()),
            ..self
        }
    }

    /// Specify the long name for the argument, including its dashes.
    pub fn long(self, long: &str) -> Self {
        Arg {
            long: Some(long.into()),
            ..self
        }
    }

    /// Specify the kind of the argument.
    pub fn kind(self, kind: Kind) -> Self {
        Arg { kind, ..self }
    }

    /// Specify that the argument must be provided on the command line.
    pub fn required(self) -> Self {
        Arg {
            required: true,
            ..self
        }
    }

    /// Specify the help text for the argument.
    pub fn help(self, help: &str) -> Self {
        Arg {
            help: Some(help.into()),
            ..self
        }
    }

    /// Check whether `token` equals one of this argument's names.
    fn matches(&self, token: &str) -> bool {
        self.short.as_deref() == Some(token) || self.long.as_deref() == Some(token)
    }

    /// Name used to identify the argument in diagnostics: the long name,
    /// falling back to the short name.
    fn display_name(&self) -> &str {
        self.long.as_deref().or(self.short.as_deref()).unwrap_or("")
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let type_str = match self.kind {
            Kind::Flag => FLAG_TYPE_STR,
            Kind::Value => VALUE_TYPE_STR,
        };

        let help = self.help.as_deref().unwrap_or("");

        let required = if self.required { REQUIRED_STR } else { "" };

        match (&self.short, &self.long) {
            (Some(short), Some(long)) => write!(
                f,
                "{}, {}: {} (Type: {}){}",
                short, long, help, type_str, required
            ),
            (Some(name), None) | (None, Some(name)) => {
                write!(f, "{}: {} (Type: {}){}", name, help, type_str, required)
            }
            (None, None) => Ok(()),
        }
    }
}

/// Represents a collection of declared arguments and, after a parse
/// pass, their parse state.
///
/// Declarations are stored in insertion order, which determines both the
/// scan order during matching (the first declaration matching a token
/// wins) and the order of the usage statement.
///
/// # Notes
///
/// - The collection is append-only: declarations cannot be removed or
///   reordered once added.
/// - Parse state accumulates: parsing a second command line with the
///   same collection adds to the state left by the first parse. Create a
///   fresh collection to start from a clean slate.
/// - Not designed for concurrent access; callers must serialise
///   `add`/`parse` calls themselves.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Args {
    /// Declared arguments, in insertion order.
    entries: Vec<Arg>,
}

impl Args {
    /// Create a new, empty argument collection.
    pub fn new() -> Self {
        Args {
            entries: Vec::new(),
        }
    }

    /// Returns the number of registered arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no arguments have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convenience method to replace the registered arguments in one go.
    ///
    /// # Note
    ///
    /// Used by the test code.
    #[allow(dead_code)]
    fn set(&mut self, args: Vec<Arg>) {
        self.entries.clear();
        self.entries.extend(args);
    }

    /// Register a single argument.
    ///
    /// No uniqueness check is performed: registering a second argument
    /// with a name already in use is accepted silently, and the earlier
    /// registration shadows the later one at parse and query time.
    pub fn add(&mut self, arg: Arg) {
        self.entries.push(arg);
    }

    /// Determine if an [Arg] with the specified name (short or long) has
    /// been registered.
    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns the first registered [Arg] with the specified name
    /// (short or long).
    pub fn get(&self, name: &str) -> Option<&Arg> {
        self.find(name)
    }

    /// First declaration matching `name`, in insertion order.
    fn find(&self, name: &str) -> Option<&Arg> {
        self.entries.iter().find(|arg| arg.matches(name))
    }

    /// Parse a command line against the registered arguments.
    ///
    /// # Arguments
    ///
    /// - `tokens`: the full argument vector; element 0 is the program's
    ///   own invocation name and is always skipped.
    ///
    /// # Behaviour
    ///
    /// The tokens are scanned once, left to right. Each token must
    /// byte-for-byte equal the short or long name of a registered
    /// argument; the first matching declaration (in insertion order) is
    /// marked as set. A [Kind::Value] argument additionally consumes the
    /// following token as its value, even if that token starts with a
    /// dash. A [Kind::Value] argument appearing as the final token is an
    /// error if required, and otherwise counts as set with no value.
    ///
    /// After a clean scan, every required argument must have been set;
    /// the first one that was not (in insertion order) is reported.
    ///
    /// # Notes
    ///
    /// - Parsing stops at the first failure. Arguments matched before
    ///   the failing token keep their state (no rollback).
    /// - State also accumulates across `parse` calls on the same
    ///   collection; there is no implicit reset.
    pub fn parse(&mut self, tokens: Vec<String>) -> Result<()> {
        let mut i = 1;

        while i < tokens.len() {
            let token = &tokens[i];

            let index = self
                .entries
                .iter()
                .position(|arg| arg.matches(token))
                .ok_or_else(|| Error::UnrecognizedArgument(token.clone()))?;

            let arg = &mut self.entries[index];

            arg.set = true;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("token {:?} matched argument {}", token, index);
            }

            if arg.kind == Kind::Value {
                if i + 1 < tokens.len() {
                    arg.value = Some(tokens[i + 1].clone());

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("consumed {:?} as value for {:?}", tokens[i + 1], token);
                    }

                    i += 2;
                    continue;
                }

                if arg.required {
                    return Err(Error::MissingValue(token.clone()));
                }

                // A non-required value argument may appear as the final
                // token: it counts as set, with no value.
            }

            i += 1;
        }

        for arg in &self.entries {
            if arg.required && !arg.set {
                return Err(Error::MissingRequiredArgument(arg.display_name().into()));
            }
        }

        Ok(())
    }

    /// Simplest interface to the parser: parse the process's own
    /// command line.
    pub fn parse_args(&mut self) -> Result<()> {
        self.parse(env::args().collect())
    }

    /// Parse a command line, writing the diagnostic line for any failure
    /// to `writer`.
    ///
    /// Returns `true` on success and `false` on failure.
    pub fn report_to<W>(&mut self, tokens: Vec<String>, writer: &mut W) -> bool
    where
        W: Write,
    {
        match self.parse(tokens) {
            Ok(()) => true,
            Err(e) => {
                let _ = writeln!(writer, "{}", e);
                false
            }
        }
    }

    /// Parse a command line, printing the diagnostic line for any
    /// failure to standard output.
    ///
    /// Returns `true` on success and `false` on failure. The caller
    /// decides whether to halt the program; this crate never terminates
    /// the process itself.
    ///
    /// For typed failure handling, call [Args::parse] instead and match
    /// on the returned [Error].
    pub fn parse_and_report(&mut self, tokens: Vec<String>) -> bool {
        self.report_to(tokens, &mut io::stdout())
    }

    /// Get the value recorded for the named argument (short or long
    /// name).
    ///
    /// Returns [None] if no argument with that name is registered, or if
    /// the first matching argument holds no value; the two cases are
    /// indistinguishable to the caller.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.find(name).and_then(|arg| arg.value.as_deref())
    }

    /// Check if the named argument (short or long name) was seen on the
    /// command line.
    ///
    /// # Note
    ///
    /// This reports the argument's "seen" state, not whether it is a
    /// flag: calling it on a [Kind::Value] argument that was supplied
    /// also returns `true`.
    pub fn is_flag_set(&self, name: &str) -> bool {
        self.find(name).map(|arg| arg.set).unwrap_or(false)
    }

    /// Check if the named argument (short or long name) is present.
    ///
    /// For a [Kind::Flag] argument this reports whether it was seen; for
    /// a [Kind::Value] argument it reports whether a value was consumed.
    /// The distinction matters for a non-required value argument that
    /// appeared as the final token: [Args::is_flag_set] reports `true`
    /// for it, while this method reports `false`.
    pub fn has(&self, name: &str) -> bool {
        match self.find(name) {
            Some(arg) => match arg.kind {
                Kind::Flag => arg.set,
                Kind::Value => arg.value.is_some(),
            },
            None => false,
        }
    }

    /// Generate a usage statement from the registered arguments.
    ///
    /// One `Usage:` header line, then one line per argument in insertion
    /// order showing its names, description and type label. Arguments
    /// with neither a short nor a long name are skipped.
    pub fn generate_help<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(writer, "Usage:")?;

        for arg in &self.entries {
            if arg.short.is_none() && arg.long.is_none() {
                continue;
            }

            writeln!(writer, "{}{}", USAGE_PREFIX_SPACES, arg)?;
        }

        Ok(())
    }

    /// Print the usage statement to standard output.
    pub fn print_help(&self) {
        let _ = self.generate_help(&mut io::stdout());
    }
}

impl Default for Args {
    /// Create a default argument collection.
    fn default() -> Self {
        Self::new()
    }
}
