// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Minimal crate for declarative parsing of command-line arguments.
//!
//! If you want lots of extra features, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! This crate is used to parse command-line arguments. You declare the
//! flags and key/value options your program accepts, hand the parser the
//! process's argument vector, and then query the results: was a flag
//! seen, what value was supplied for an option.
//!
//! There are no callbacks and no code generation; the entire API is the
//! [Args] collection and the [Arg] declarations you put into it.
//!
//! # Quickstart
//!
//! 1. Create an [Args] collection to hold all the arguments you wish to
//!    support.
//!
//!    ```rust
//!    # use miniarg::{Arg, Args, Kind};
//!    #
//!    let mut args = Args::new();
//!    ```
//!
//! 1. Add a new [Arg] for each argument.
//!
//!    Arguments are flags by default; pass [Kind::Value] for options
//!    that consume the following token as their value. Names are
//!    registered *with* their dashes and matched against tokens
//!    byte-for-byte.
//!
//!    ```rust
//!    # use miniarg::{Arg, Args, Kind};
//!    #
//!    # let mut args = Args::new();
//!    #
//!    // Support "-h" / "--help".
//!    args.add(Arg::new().short("-h").long("--help").help("show this help"));
//!
//!    // Support "-n <value>" / "--name <value>", which must be supplied.
//!    args.add(
//!        Arg::new()
//!            .short("-n")
//!            .long("--name")
//!            .kind(Kind::Value)
//!            .required()
//!            .help("name to greet"),
//!    );
//!    ```
//!
//! 1. Parse the command line.
//!
//!    The first token is the program's own invocation name and is always
//!    skipped. [Args::parse] returns a typed [Error]; alternatively,
//!    [Args::parse_and_report] prints the diagnostic line to standard
//!    output and returns a plain `bool`.
//!
//!    ```rust
//!    # use miniarg::{Arg, Args, Kind};
//!    #
//!    # let mut args = Args::new();
//!    # args.add(Arg::new().short("-h").long("--help"));
//!    # args.add(Arg::new().short("-n").long("--name").kind(Kind::Value).required());
//!    #
//!    let tokens = vec!["prog".to_string(), "-n".to_string(), "Alice".to_string()];
//!
//!    let result = args.parse(tokens);
//!    assert!(result.is_ok());
//!    ```
//!
//! 1. Query the results, using either the short or the long name
//!    interchangeably.
//!
//!    ```rust
//!    # use miniarg::{Arg, Args, Kind};
//!    #
//!    # let mut args = Args::new();
//!    # args.add(Arg::new().short("-h").long("--help"));
//!    # args.add(Arg::new().short("-n").long("--name").kind(Kind::Value).required());
//!    #
//!    # let tokens = vec!["prog".to_string(), "-n".to_string(), "Alice".to_string()];
//!    # args.parse(tokens).unwrap();
//!    #
//!    assert_eq!(args.value_of("--name"), Some("Alice"));
//!    assert!(!args.is_flag_set("-h"));
//!    ```
//!
//! # Examples
//!
//! Below is a full example showing a program that supports a few
//! command-line arguments and prints its own usage statement.
//!
//! ```rust
//! use miniarg::{Arg, Args, Kind};
//!
//! fn main() {
//!     let mut args = Args::new();
//!
//!     args.add(Arg::new().short("-h").long("--help").help("show this help"));
//!     args.add(Arg::new().short("-v").long("--verbose").help("verbose output"));
//!     args.add(
//!         Arg::new()
//!             .short("-n")
//!             .long("--name")
//!             .kind(Kind::Value)
//!             .help("name to greet"),
//!     );
//!
//!     // Use std::env::args().collect() for the real command line.
//!     let tokens = vec!["prog".to_string(), "-v".to_string()];
//!
//!     if !args.parse_and_report(tokens) {
//!         // A diagnostic line has already been printed.
//!         return;
//!     }
//!
//!     if args.is_flag_set("--help") {
//!         args.print_help();
//!         return;
//!     }
//!
//!     let name = args.value_of("--name").unwrap_or("world");
//!
//!     if args.is_flag_set("-v") {
//!         println!("about to greet {}", name);
//!     }
//!
//!     println!("hello, {}", name);
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example basic -- -v -n Alice
//! $ cargo run --example required -- --output result.txt
//! ```
//!
//! # Summary of features and behaviour
//!
//! - Simple and intuitive ("ergonomic") API.
//! - Small codebase.
//! - Comprehensive set of unit tests.
//! - Tokens are matched against declared names byte-for-byte and
//!   case-sensitively; there is no prefix or abbreviation matching.
//! - Declarations are scanned in the order they were added; if two
//!   declarations share a name, the first one added wins and the later
//!   one is silently shadowed.
//! - A value option consumes the token that follows it unconditionally,
//!   even if that token starts with a dash.
//! - A non-required value option may appear as the final token: it then
//!   counts as seen, with no value ([Args::is_flag_set] and [Args::has]
//!   deliberately disagree about such an option).
//! - Parse state accumulates: parsing a second command line with the
//!   same [Args] adds to the state left by the first. Create a fresh
//!   collection to reset.
//! - Parsing stops at the first failure and keeps the state built up so
//!   far; the failure names the offending token.
//! - The crate never terminates the process; callers decide what to do
//!   with a failed parse.
//! - Optional parse tracing via the `tracing_debug` feature.
//!
//! # Limitations
//!
//! - Option bundling is not supported.
//!
//!   **Example:** `-a -b` is valid, but `-ab` is not.
//!
//! - Inline values are not supported.
//!
//!   **Example:** `--name Alice` is valid, but `--name=Alice` is not.
//!
//! - Options cannot accept multiple values, and repeating an option
//!   simply overwrites its previous value.
//!
//! - Sub-commands are not supported.
//!
//! - Values are returned as strings; the caller converts them into
//!   numerics, _etc_ as required.

mod args;
mod error;

pub use error::{Error, Result};

pub use args::{Arg, Args, Kind};
