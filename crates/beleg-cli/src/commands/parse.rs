//! Parse command - extract normalized activities from a document.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;

use beleg_core::{Activity, Broker, HandlerRegistry, ParseOutcome, ParseStatus, ResolveError};

#[derive(Args)]
pub struct ParseArgs {
    /// Input document as page-segmented JSON
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Parse result as written to the output: the owning broker (absent for
/// unrecognized documents) plus the engine's outcome fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseReport {
    broker: Option<Broker>,
    status: ParseStatus,
    activities: Vec<Activity>,
    defects: Vec<String>,
}

impl ParseReport {
    fn new(broker: Option<Broker>, outcome: ParseOutcome) -> Self {
        Self {
            broker,
            status: outcome.status,
            activities: outcome.activities,
            defects: outcome.defects,
        }
    }
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let document = super::load_document(&args.input)?;
    info!(
        "loaded {} page(s) from {}",
        document.pages.len(),
        args.input.display()
    );

    let registry = HandlerRegistry::standard();
    let (broker, outcome) = match registry.resolve(&document) {
        Ok(broker) => (Some(broker), broker.parse_pages(&document)),
        Err(ResolveError::Unrecognized) => (None, ParseOutcome::unrecognized()),
        Err(ambiguous) => anyhow::bail!(ambiguous),
    };
    let report = ParseReport::new(broker, outcome);

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => render_text(&report),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered + "\n")?;
            info!("wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_text(report: &ParseReport) -> String {
    let mut out = String::new();
    match report.broker {
        Some(broker) => {
            let _ = writeln!(out, "broker: {broker}");
        }
        None => {
            let _ = writeln!(out, "broker: unrecognized");
        }
    }
    let _ = writeln!(out, "status: {:?}", report.status);
    for activity in &report.activities {
        let _ = writeln!(
            out,
            "{:?} {} {} | {} x {} = {} EUR (fee {}, tax {})",
            activity.activity_type,
            activity.date,
            activity.company,
            activity.shares,
            activity.price,
            activity.amount,
            activity.fee,
            activity.tax,
        );
    }
    for defect in &report.defects {
        let _ = writeln!(out, "defect: {defect}");
    }
    out.trim_end().to_string()
}
