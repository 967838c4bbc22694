//! Validation command implementation
//!
//! Resolves the CLI path to single-file or directory mode, runs the
//! validator or batch runner, renders reports, and maps the (possibly
//! strict-escalated) aggregate outcome to a process exit code. Hard
//! diagnostics (missing path, empty directory) go to stderr; reports go
//! to stdout.

use crate::batch::{BatchEntry, BatchResult, BatchRunner};
use crate::cli::args::{Cli, ColorChoice, OutputFormat};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::validator::Validator;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Exit code for an aggregate pass
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for any failure: compliance, precondition, or aggregation
pub const EXIT_FAILURE: i32 = 1;

const OVERALL_PASSED: &str = "All theme validations passed.";
const OVERALL_FAILED: &str = "Theme validation failed.";

/// Run validation for the parsed CLI invocation
///
/// Returns the process exit code: 0 iff the aggregate outcome (after
/// strict escalation, if requested) is a pass.
pub fn run(cli: &Cli) -> i32 {
    if !cli.path.exists() {
        eprintln!("Error: path does not exist: {}", cli.path.display());
        return EXIT_FAILURE;
    }

    if cli.path.is_file() {
        run_file(cli)
    } else if cli.path.is_dir() {
        run_directory(cli)
    } else {
        eprintln!(
            "Error: path must be a file or directory: {}",
            cli.path.display()
        );
        EXIT_FAILURE
    }
}

fn run_file(cli: &Cli) -> i32 {
    let result = Validator::new().validate_file(&cli.path);
    let entry = BatchEntry {
        path: cli.path.clone(),
        result,
    };

    match cli.format {
        OutputFormat::Jsonl => {
            print!(
                "{}",
                JsonlFormatter::new().format(std::slice::from_ref(&entry), cli.strict)
            );
        }
        OutputFormat::Human => {
            let formatter = HumanFormatter::new();
            let mut stdout = StandardStream::stdout(color_choice(cli.color));
            if !cli.quiet {
                let _ = formatter.write(&mut stdout, &entry.result);
                let _ = writeln!(&mut stdout);
            }
            write_overall_line(&mut stdout, effective_pass(&entry, cli.strict));
        }
    }

    exit_code(effective_pass(&entry, cli.strict))
}

fn run_directory(cli: &Cli) -> i32 {
    let batch = match BatchRunner::new().run(&cli.path) {
        Ok(batch) => batch,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_FAILURE;
        }
    };

    let passed = if cli.strict {
        batch.all_passed_strict()
    } else {
        batch.all_passed()
    };

    match cli.format {
        OutputFormat::Jsonl => {
            print!("{}", JsonlFormatter::new().format(batch.entries(), cli.strict));
        }
        OutputFormat::Human => print_human_batch(cli, &batch, passed),
    }

    exit_code(passed)
}

fn print_human_batch(cli: &Cli, batch: &BatchResult, passed: bool) {
    let formatter = HumanFormatter::new();
    let mut stdout = StandardStream::stdout(color_choice(cli.color));

    if !cli.quiet {
        for entry in batch.entries() {
            let _ = writeln!(&mut stdout, "Validating {}...", entry.display_name());
            let _ = formatter.write(&mut stdout, &entry.result);
            let _ = writeln!(&mut stdout);
        }

        if cli.strict {
            for entry in batch.entries() {
                if entry.result.passed() && !entry.result.passed_strict() {
                    let _ = writeln!(
                        &mut stdout,
                        "Strict mode: Warnings in {} treated as errors",
                        entry.display_name()
                    );
                }
            }
        }
    }

    write_overall_line(&mut stdout, passed);
}

fn effective_pass(entry: &BatchEntry, strict: bool) -> bool {
    if strict {
        entry.result.passed_strict()
    } else {
        entry.result.passed()
    }
}

fn exit_code(passed: bool) -> i32 {
    if passed { EXIT_SUCCESS } else { EXIT_FAILURE }
}

fn write_overall_line(stdout: &mut StandardStream, passed: bool) {
    let (color, line) = if passed {
        (Color::Green, OVERALL_PASSED)
    } else {
        (Color::Red, OVERALL_FAILED)
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(stdout, "{line}");
    let _ = stdout.reset();
}

fn color_choice(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if std::io::stdout().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}
