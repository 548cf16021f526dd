//! CLI entry point for apaudit.
//!
//! This module is intentionally thin: it handles argument parsing, file IO,
//! recognizer construction, and exit codes. All business logic lives in the
//! `apaudit-app` crate.

use anyhow::Context;
use apaudit_app::{
    export_evidence, run_check, run_scan, serialize_report, verdict_exit_code, write_text_file,
    CheckInput, ScanInput,
};
use apaudit_domain::EntityRecognizer;
use apaudit_ner::{OfflineRecognizer, RemoteRecognizer, DEFAULT_MODEL};
use apaudit_settings::Overrides;
use apaudit_types::AuditReport;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Environment variable holding the inference API token, if any.
const API_TOKEN_ENV: &str = "HF_API_TOKEN";

#[derive(Parser, Debug)]
#[command(
    name = "apaudit",
    version,
    about = "Vendor invoice audit and notes PII scanner"
)]
struct Cli {
    /// Path to the apaudit config TOML.
    #[arg(long, default_value = "apaudit.toml")]
    config: Utf8PathBuf,

    /// Override the PO variance limit (fraction, e.g. 0.10).
    #[arg(long)]
    max_po_variance: Option<f64>,

    /// Override the high-value threshold.
    #[arg(long)]
    high_value_threshold: Option<f64>,

    /// Override ghost-vendor detection (true|false).
    #[arg(long)]
    detect_ghost_vendors: Option<bool>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the rule checks (and optionally the notes scan) and write artifacts.
    Check {
        /// Invoice dump CSV.
        #[arg(long)]
        invoices: Utf8PathBuf,

        /// Vendor master CSV.
        #[arg(long)]
        vendors: Utf8PathBuf,

        /// Also scan the Notes column for PII.
        #[arg(long)]
        scan_notes: bool,

        /// Use the offline recognizer (no network; email heuristic only).
        #[arg(long)]
        offline: bool,

        /// NER model for the hosted recognizer.
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/apaudit/report.json")]
        report_out: Utf8PathBuf,

        /// Directory for the timestamped evidence CSVs.
        #[arg(long, default_value = "audit_reports")]
        export_dir: Utf8PathBuf,

        /// Skip the evidence CSV export.
        #[arg(long)]
        no_export: bool,

        /// Write a Markdown summary alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/apaudit/summary.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Scan the Notes column for PII without running the rule checks.
    Scan {
        /// Invoice dump CSV.
        #[arg(long)]
        invoices: Utf8PathBuf,

        /// Use the offline recognizer (no network; email heuristic only).
        #[arg(long)]
        offline: bool,

        /// NER model for the hosted recognizer.
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Directory for the timestamped PII findings CSV.
        #[arg(long, default_value = "audit_reports")]
        export_dir: Utf8PathBuf,

        /// Skip the findings CSV export.
        #[arg(long)]
        no_export: bool,
    },

    /// Render a Markdown summary from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/apaudit/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (prints to stdout if absent).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

struct CheckArgs {
    invoices: Utf8PathBuf,
    vendors: Utf8PathBuf,
    scan_notes: bool,
    offline: bool,
    model: String,
    report_out: Utf8PathBuf,
    export_dir: Utf8PathBuf,
    no_export: bool,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref invoices,
            ref vendors,
            scan_notes,
            offline,
            ref model,
            ref report_out,
            ref export_dir,
            no_export,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            CheckArgs {
                invoices: invoices.clone(),
                vendors: vendors.clone(),
                scan_notes,
                offline,
                model: model.clone(),
                report_out: report_out.clone(),
                export_dir: export_dir.clone(),
                no_export,
                write_markdown,
                markdown_out: markdown_out.clone(),
            },
        ),
        Commands::Scan {
            ref invoices,
            offline,
            ref model,
            ref export_dir,
            no_export,
        } => cmd_scan(invoices, offline, model, export_dir, no_export),
        Commands::Md { report, output } => cmd_md(report, output),
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        max_po_variance: cli.max_po_variance,
        high_value_threshold: cli.high_value_threshold,
        detect_ghost_vendors: cli.detect_ghost_vendors,
    }
}

/// A missing config file is fatal and names the resolved path; the audit
/// policy must be explicit, not silently defaulted from a typo'd path.
fn read_config(path: &Utf8PathBuf) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("config file not found at {path}"))
}

fn build_recognizer(offline: bool, model: &str) -> anyhow::Result<Box<dyn EntityRecognizer>> {
    if offline {
        return Ok(Box::new(OfflineRecognizer));
    }
    let token = std::env::var(API_TOKEN_ENV).ok();
    let recognizer = RemoteRecognizer::new(model, token).context("build recognizer")?;
    Ok(Box::new(recognizer))
}

fn cmd_check(cli: &Cli, args: CheckArgs) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let config_text = read_config(&cli.config)?;

        // Construct the recognizer once; it serves every row of this run.
        let recognizer = if args.scan_notes {
            Some(build_recognizer(args.offline, &args.model)?)
        } else {
            None
        };

        let output = run_check(CheckInput {
            invoices_path: &args.invoices,
            vendors_path: &args.vendors,
            config_text: &config_text,
            overrides: overrides(cli),
            recognizer: recognizer.as_deref(),
        })?;

        let json = serialize_report(&output.report)?;
        write_text_file(&args.report_out, &json).context("write report json")?;

        let summary = apaudit_render::render_markdown(&output.report);
        if args.write_markdown {
            write_text_file(&args.markdown_out, &summary).context("write markdown summary")?;
        }
        print!("{summary}");

        if !args.no_export {
            let paths =
                export_evidence(&output.report, &args.export_dir).context("export evidence")?;
            eprintln!("evidence exports:");
            eprintln!("  - {}", paths.ghost_vendors);
            eprintln!("  - {}", paths.po_variance);
            eprintln!("  - {}", paths.high_value);
            if let Some(pii) = &paths.pii_findings {
                eprintln!("  - {pii}");
            }
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("apaudit error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_scan(
    invoices: &Utf8PathBuf,
    offline: bool,
    model: &str,
    export_dir: &Utf8PathBuf,
    no_export: bool,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<()> {
        let recognizer = build_recognizer(offline, model)?;

        let output = run_scan(ScanInput {
            invoices_path: invoices,
            recognizer: recognizer.as_ref(),
        })?;

        eprintln!(
            "scanned {} invoice(s), {} with notes",
            output.invoices_scanned, output.notes_scanned
        );

        if output.findings.is_empty() {
            println!("No privacy risks found.");
        } else {
            println!("Found {} privacy finding(s):", output.findings.len());
            for finding in &output.findings {
                println!("- {}: {}", finding.invoice_id, finding.flags_joined());
            }
        }

        if !no_export {
            let path = apaudit_app::export_pii_findings(
                &output.findings,
                export_dir,
                time::OffsetDateTime::now_utc(),
            )
            .context("export pii findings")?;
            eprintln!("findings export: {path}");
        }

        Ok(())
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("apaudit error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report: AuditReport = serde_json::from_str(&text).context("parse report json")?;
    let md = apaudit_render::render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}
