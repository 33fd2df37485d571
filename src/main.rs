#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # thinkora
//!
//! A GPA/CGPA calculator for the Nigerian 5.00 scale.
//!
//! ```text
//! thinkora gpa A:3 B:4 C:2
//! thinkora cgpa 4.0:20 3.0:10
//! thinkora transcript courses.json
//! thinkora serve --addr 0.0.0.0:8000
//! ```

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use thinkora::{
    CourseEntry, GpaEngine, SemesterEntry, Transcript, config, report, server,
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// GPA from course entries
    Gpa(Vec<CourseEntry>),
    /// CGPA from semester entries
    Cgpa(Vec<SemesterEntry>),
    /// Per-semester GPAs and CGPA from a JSON file of course records
    Transcript(String),
    /// Print the grade scale and classification guide
    Scale,
    /// Run the HTTP service
    Serve(Option<String>),
}

/// Parsed command line.
#[derive(Debug, Clone)]
struct Opts {
    /// Print JSON instead of tables
    json: bool,
    /// Command to run
    cmd:  Cmd,
}

/// Parse the command line arguments and return the options
fn options() -> Opts {
    /// parses course entries
    fn courses() -> impl Parser<Vec<CourseEntry>> {
        positional::<CourseEntry>("GRADE:UNITS")
            .help("A course as its letter grade and credit units, eg. B:4")
            .many()
    }

    /// parses semester entries
    fn semesters() -> impl Parser<Vec<SemesterEntry>> {
        positional::<SemesterEntry>("GPA:UNITS")
            .help("A semester as its GPA and total credit units, eg. 3.75:18")
            .many()
    }

    let json = long("json")
        .help("Print results as JSON instead of tables")
        .switch();

    let gpa = construct!(Cmd::Gpa(courses()))
        .to_options()
        .command("gpa")
        .help("Calculate a GPA from course grades");

    let cgpa = construct!(Cmd::Cgpa(semesters()))
        .to_options()
        .command("cgpa")
        .help("Calculate a CGPA from semester GPAs");

    let path = positional::<String>("PATH").help("JSON file with an array of course records");
    let transcript = construct!(Cmd::Transcript(path))
        .to_options()
        .command("transcript")
        .help("Summarize a transcript semester by semester");

    let scale = pure(Cmd::Scale)
        .to_options()
        .command("scale")
        .help("Print the grade points and classification bands");

    let addr = long("addr")
        .help("Address to listen on, overrides THINKORA_ADDR")
        .argument::<String>("ADDR")
        .optional();
    let serve = construct!(Cmd::Serve(addr))
        .to_options()
        .command("serve")
        .help("Serve the calculator over HTTP");

    let cmd = construct!([gpa, cgpa, transcript, scale, serve]);

    construct!(Opts { json, cmd })
        .to_options()
        .descr("GPA/CGPA calculator for the Nigerian 5.00 scale")
        .run()
}

/// Prints `value` as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Could not serialize result")?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cfg = config::get();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(cfg.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let opts = options();
    let engine = GpaEngine::new(*cfg.engine());

    match opts.cmd {
        Cmd::Gpa(courses) => {
            let result = engine.gpa(&courses).context("Could not calculate GPA")?;
            if opts.json {
                print_json(&result)?;
            } else {
                println!("{}", report::course_breakdown(&courses, &result));
                println!("{}", report::headline("GPA", &result));
            }
        }
        Cmd::Cgpa(semesters) => {
            let result = engine.cgpa(&semesters).context("Could not calculate CGPA")?;
            if opts.json {
                print_json(&result)?;
            } else {
                println!("{}", report::cgpa_breakdown(&semesters, &result));
                println!("{}", report::headline("CGPA", &result));
            }
        }
        Cmd::Transcript(path) => {
            let transcript = Transcript::from_json_file(&path)?;
            let summary = transcript
                .summarize(engine.config())
                .with_context(|| format!("Could not summarize {path}"))?;
            if opts.json {
                print_json(&summary)?;
            } else {
                println!("{}", report::semester_breakdown(&summary));
                println!("{}", report::headline("CGPA", &summary.cumulative));
            }
        }
        Cmd::Scale => println!("{}", report::scale_guide()),
        Cmd::Serve(addr) => {
            let cfg = match addr {
                Some(addr) => cfg.as_ref().clone().with_addr(&addr)?,
                None => cfg.as_ref().clone(),
            };
            server::serve(cfg.addr(), *cfg.engine()).await?;
        }
    };

    Ok(())
}
