// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Iris CLI entrypoint.
//!
//! By default this opens the interactive dual-pane TUI on an export file.
//! `--demo` opens the built-in demo export instead, and `--dump` pretty-prints
//! every record to stdout without entering the TUI.

use std::error::Error;
use std::path::PathBuf;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <export-file>\n  {program} <export-file> --dump\n  {program} --demo [--dump]\n\nOpens a JSON export (an array of {{digest, xml}} records) in a dual-pane\nviewer: raw text on the left, parsed records on the right.\n\n--demo uses a built-in demo export and cannot be combined with a file.\n--dump pretty-prints every record to stdout and exits."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    file: Option<String>,
    demo: bool,
    dump: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--dump" => {
                if options.dump {
                    return Err(());
                }
                options.dump = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.file.is_some() {
                    return Err(());
                }
                options.file = Some(arg);
            }
        }
    }

    if options.demo && options.file.is_some() {
        return Err(());
    }
    if !options.demo && options.file.is_none() {
        return Err(());
    }

    Ok(options)
}

fn render_dump(dataset: &iris::model::Dataset) -> String {
    let mut out = String::new();
    for (index, record) in dataset.records().iter().enumerate() {
        out.push_str(&format!(
            "=== {} ===\n{}\n\n",
            record.display_label(index),
            iris::render::render_record(record)
        ));
    }
    out
}

fn dump_records(raw: &str) -> Result<(), Box<dyn Error>> {
    let dataset = iris::format::load_dataset(raw)?;
    print!("{}", render_dump(&dataset));
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "iris".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let (raw, source_path) = if options.demo {
            (iris::model::fixtures::demo_export_json().to_owned(), None)
        } else {
            let path = PathBuf::from(options.file.as_deref().unwrap_or_default());
            (iris::store::read_export(&path)?, Some(path))
        };

        if options.dump {
            return dump_records(&raw);
        }

        iris::tui::run_with_export(raw, source_path)
    })();

    if let Err(err) = result {
        eprintln!("iris: {err}");
        std::process::exit(1);
    }
}
