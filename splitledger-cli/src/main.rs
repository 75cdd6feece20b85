#![warn(clippy::uninlined_format_args)]

mod report;

use clap::{Parser, ValueEnum};
use report::GroupReport;
use splitledger_application::{GroupId, LedgerConfig, LedgerProcessor, ValidationMode};
use splitledger_domain::SettlementPlanner;
use splitledger_infrastructure::{GroupSnapshot, JsonExpenseSource};
use std::{borrow::Cow, path::PathBuf, process};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "splitledger")]
#[command(about = "Net balances and suggested reimbursements for shared-expense groups")]
struct Cli {
    /// Group snapshot files (JSON export).
    #[arg(required = true, env = "SPLITLEDGER_SNAPSHOTS", value_delimiter = ',')]
    snapshots: Vec<PathBuf>,

    /// Only report this group id.
    #[arg(long, env = "SPLITLEDGER_GROUP")]
    group: Option<String>,

    #[arg(long, value_enum, env = "SPLITLEDGER_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject expenses whose shares do not add up to their amount or that
    /// name someone outside the snapshot's participant list.
    #[arg(long, env = "SPLITLEDGER_STRICT")]
    strict: bool,

    /// Also print spending statistics.
    #[arg(long, env = "SPLITLEDGER_STATS")]
    stats: bool,
}

fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut source = JsonExpenseSource::new();
    for path in &cli.snapshots {
        source
            .load_path(path)
            .map_err(|err| format!("Failed to load '{}': {err}", path.display()))?;
    }

    tracing::debug!(snapshots = cli.snapshots.len(), "loaded snapshots");

    let selected = select_groups(&source, cli.group.as_deref())?;

    let config = LedgerConfig {
        validation: if cli.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        },
    };
    let processor = LedgerProcessor::with_config(&source, &SettlementPlanner, config);

    let mut reports = Vec::with_capacity(selected.len());
    for snapshot in selected {
        let report = GroupReport::build(&processor, snapshot, cli.stats)
            .map_err(|err| format!("Group '{}': {err}", snapshot.group_id))?;
        if let Some(warning) = report.residual_warning() {
            eprintln!("Warning: {warning}");
        }
        reports.push(report);
    }

    match cli.format {
        OutputFormat::Text => {
            let sections: Vec<String> = reports.iter().map(GroupReport::render_text).collect();
            print!("{}", sections.join("\n"));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports)
                .map_err(|err| format!("Failed to encode report: {err}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn select_groups<'a>(
    source: &'a JsonExpenseSource,
    group: Option<&str>,
) -> CliResult<Vec<&'a GroupSnapshot>> {
    let Some(group) = group else {
        return Ok(source.groups().collect());
    };

    let id = GroupId::from(group);
    source
        .group(&id)
        .map(|snapshot| vec![snapshot])
        .ok_or_else(|| splitledger_i18n::unknown_group(&id).to_string().into())
}
