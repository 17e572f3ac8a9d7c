// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing typed error handling for a required option.
use miniarg::{Arg, Args, Error, Kind};

fn main() {
    let mut args = Args::new();

    // Support "-o <value>" / "--output <value>", which must be supplied.
    args.add(
        Arg::new()
            .short("-o")
            .long("--output")
            .kind(Kind::Value)
            .required()
            .help("file to write the result to"),
    );

    // Support "-f" / "--force".
    args.add(
        Arg::new()
            .short("-f")
            .long("--force")
            .help("overwrite the output file if it exists"),
    );

    // Use the typed interface rather than the printed-diagnostic one so
    // specific failures can be handled specially.
    match args.parse(std::env::args().collect()) {
        Ok(()) => (),
        Err(Error::MissingRequiredArgument(name)) => {
            println!("argument {} must be supplied", name);
            args.print_help();
            std::process::exit(1);
        }
        Err(e) => {
            // The error's Display form is the standard diagnostic line.
            println!("{}", e);
            std::process::exit(1);
        }
    }

    // A successful parse guarantees the required option holds a value.
    if let Some(output) = args.value_of("--output") {
        println!("writing result to {:?}", output);

        if args.is_flag_set("-f") {
            println!("overwriting {:?} if it exists", output);
        }
    }
}
