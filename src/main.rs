#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradebook
//!
//! Command line driver for the `gradebook` library. Builds a grade record
//! from the grades given on the command line and reports on it.

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use gradebook::{GradeRecord, config::Config};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone, PartialEq)]
enum Cmd {
    /// Print the best grade
    Best(Vec<f64>),
    /// Replace the first grade and print the result
    ChangeFirst(f64, Vec<f64>),
    /// Print a JSON summary of the record
    Info(Vec<f64>),
    /// Walk through the encapsulation demonstration
    Demo,
}

/// Builds the command line parser
fn options() -> OptionParser<Cmd> {
    /// parses grades
    fn g() -> impl Parser<Vec<f64>> {
        positional::<f64>("GRADE")
            .help("Grades to put in the record; pass negative grades after `--`")
            .many()
    }

    /// parses the replacement grade
    fn to() -> impl Parser<f64> {
        long("to")
            .help("New value for the first grade")
            .argument::<f64>("NEW")
    }

    let best = construct!(Cmd::Best(g()))
        .to_options()
        .command("best")
        .help("Print the best grade");

    let change_first = construct!(Cmd::ChangeFirst(to(), g()))
        .to_options()
        .command("change-first")
        .help("Replace the first grade and print the record");

    let info = construct!(Cmd::Info(g()))
        .to_options()
        .command("info")
        .help("Prints a JSON description of the record");

    let demo = pure(Cmd::Demo)
        .to_options()
        .command("demo")
        .help("Show that the record is unaffected by changes to the caller's grades");

    let cmd = construct!([best, change_first, info, demo]);

    cmd.to_options().descr("Encapsulated grade records")
}

/// Builds a record from command line grades
fn record(grades: &[f64]) -> Result<GradeRecord> {
    GradeRecord::new(grades).context("Could not build a grade record")
}

/// Runs the demonstration scenario
fn demo() -> Result<()> {
    let mut public_grades = vec![0.0, 1.0, 2.0, 3.0];
    let mut student = record(&public_grades)?;
    println!("Best grade={}", student.find_best_grade());
    println!(
        "Stringified JSON = {}",
        serde_json::to_string(&student).context("Could not serialize record")?
    );

    student.change_first_grade(101.0);
    println!("1. {student}");

    // The record copied the grades in, so this must not show through.
    public_grades[0] = 5.0;
    println!("2. {student}");
    println!("Caller's grades = {public_grades:?}");
    println!("Record's grades = {:?}", student.fetch_all_grades());

    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();
    let config = Config::from_env();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    tracing_subscriber::registry()
        .with(fmt)
        .with(config.log_level())
        .init();

    match options().run() {
        Cmd::Best(g) => {
            let student = record(&g)?;
            println!("{}", student.find_best_grade());
        }
        Cmd::ChangeFirst(to, g) => {
            let mut student = record(&g)?;
            student.change_first_grade(to);
            println!("{}", student.summary().table());
            println!("{student}");
        }
        Cmd::Info(g) => {
            let student = record(&g)?;
            let json = serde_json::to_string_pretty(&student.summary())
                .context("Could not serialize record summary")?;
            println!("{json}");
        }
        Cmd::Demo => demo()?,
    };

    Ok(())
}
