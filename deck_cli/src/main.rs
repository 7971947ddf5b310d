//! # Deckline CLI
//!
//! Screens every framing line in a `.deck` project file and prints the
//! calculation trail and summary tables, or the full results as JSON.
//!
//! ```text
//! deck_cli backyard.deck
//! deck_cli backyard.deck --line "Line A" --json
//! deck_cli backyard.deck --out backyard-report.json
//! RUST_LOG=debug deck_cli backyard.deck
//! ```
//!
//! Exits non-zero when any line fails to evaluate (invalid input or a named
//! connector missing from the catalog). Every line is still processed.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use deck_core::calculations::Evaluation;
use deck_core::file_io::{load_project, save_report, FileLock};
use deck_core::report::{beam_summary, connector_summary, equation_references, footing_summary, SummaryRow};
use deck_core::{CalcError, CalcResult, FramingInput};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "deck_cli", version, about = "Screen deck framing lines: beam, post, connectors, footing.")]
struct Cli {
    /// Project file (.deck JSON)
    #[arg(value_name = "PROJECT")]
    project: PathBuf,

    /// Only evaluate the line with this label
    #[arg(long, value_name = "LABEL")]
    line: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to this file
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// User recorded in the project lock file
    #[arg(long, value_name = "ID", env = "USER", default_value = "deck_cli")]
    user: String,
}

/// Outcome for one framing line.
#[derive(Debug, Serialize)]
struct LineReport {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<Evaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<CalcError>,
}

/// Report written by `--json` / `--out`.
#[derive(Debug, Serialize)]
struct EvaluationReport {
    job_id: String,
    engineer: String,
    client: String,
    lines: Vec<LineReport>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when at least one line failed to evaluate.
fn run(cli: &Cli) -> CalcResult<bool> {
    let _lock = FileLock::acquire(&cli.project, cli.user.as_str())?;
    let project = load_project(&cli.project)?;
    log::info!(
        "loaded {} ({} lines, {} top / {} base connectors)",
        project.meta.job_id,
        project.line_count(),
        project.catalog.top.len(),
        project.catalog.base.len()
    );

    let lines = project.select_lines(cli.line.as_deref())?;
    let mut reports = Vec::with_capacity(lines.len());
    for line in &lines {
        let result = deck_core::evaluate_line(line, &project.catalog, &project.settings.site_defaults);
        if let Err(e) = &result {
            log::error!("{}: {}", line.label, e);
        }
        reports.push(LineReport {
            label: line.label.clone(),
            evaluation: result.as_ref().ok().cloned(),
            error: result.err(),
        });
    }

    let all_ok = reports.iter().all(|r| r.error.is_none());
    let report = EvaluationReport {
        job_id: project.meta.job_id.clone(),
        engineer: project.meta.engineer.clone(),
        client: project.meta.client.clone(),
        lines: reports,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&lines, &report);
    }

    if let Some(out) = &cli.out {
        save_report(&report, out)?;
        log::info!("wrote report to {}", out.display());
    }

    Ok(all_ok)
}

fn print_text(inputs: &[&FramingInput], report: &EvaluationReport) {
    println!("Job {} - {} (engineer: {})", report.job_id, report.client, report.engineer);

    for (input, line) in inputs.iter().zip(&report.lines) {
        println!();
        println!("═══════════════════════════════════════");
        println!("  {}", line.label);
        println!("═══════════════════════════════════════");

        if let Some(e) = &line.error {
            println!("  ERROR [{}]: {}", e.error_code(), e);
            if let Ok(json) = serde_json::to_string(e) {
                println!("  {}", json);
            }
            continue;
        }
        let Some(evaluation) = &line.evaluation else {
            continue;
        };

        print_section("Beam / Post", &evaluation.beam.calc_log.lines());
        print_table(&beam_summary(input, &evaluation.beam));

        print_section("Connectors", &evaluation.connections.calc_log.lines());
        print_table(&connector_summary(&evaluation.connections));

        print_section("Footing", &evaluation.footing.calc_log.lines());
        print_table(&footing_summary(&evaluation.footing));

        println!();
        println!("References:");
        print_table(&equation_references(&evaluation.beam.calc_log));

        println!();
        println!("  RESULT: {}", if evaluation.passes() { "PASS" } else { "CHECK" });
    }
}

fn print_section(title: &str, lines: &[String]) {
    println!();
    println!("{}:", title);
    for line in lines {
        println!("  {}", line);
    }
}

fn print_table(rows: &[SummaryRow]) {
    let item_width = rows.iter().map(|r| r.item.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|r| r.value.chars().count()).max().unwrap_or(0);
    println!();
    for row in rows {
        println!(
            "  {:<iw$}  {:<vw$}  {}",
            row.item,
            row.value,
            row.status,
            iw = item_width,
            vw = value_width
        );
    }
}
