// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to declare flags and value options and
/// query them after the parse.
use miniarg::{Arg, Args, Kind};

fn main() {
    let mut args = Args::new();

    // Support "-h" / "--help".
    args.add(Arg::new().short("-h").long("--help").help("show this help"));

    // Support "-v" / "--verbose".
    args.add(
        Arg::new()
            .short("-v")
            .long("--verbose")
            .help("enable verbose output"),
    );

    // Support "-n <value>" / "--name <value>".
    args.add(
        Arg::new()
            .short("-n")
            .long("--name")
            .kind(Kind::Value)
            .help("name to greet"),
    );

    // Parse the command line. On failure a diagnostic line has already
    // been printed, so all that is left is to decide the exit status:
    // the library itself never terminates the process.
    if !args.parse_and_report(std::env::args().collect()) {
        std::process::exit(1);
    }

    if args.is_flag_set("--help") {
        args.print_help();
        return;
    }

    // Queries accept either name form.
    let name = args.value_of("--name").unwrap_or("world");

    if args.is_flag_set("-v") {
        println!("INFO: about to greet {:?}", name);
    }

    println!("hello, {}", name);
}
