//! `weldify trace` command implementations.

use clap::{Args, Subcommand};
use weldify_storage::{NewTraceabilityEntry, TraceabilityLog};

use super::Context;
use crate::error::CliError;
use crate::output::Output;

/// Traceability log subcommands.
#[derive(Subcommand)]
pub(crate) enum TraceCommand {
    /// List logged welds, newest first.
    List,
    /// Record a completed weld.
    Add(TraceAddArgs),
    /// Delete a log entry.
    Remove {
        /// Entry id.
        id: String,
    },
}

/// Fields of a new traceability entry.
#[derive(Args)]
pub(crate) struct TraceAddArgs {
    /// Component or part identifier.
    #[arg(long)]
    component: String,

    /// Component serial number.
    #[arg(long)]
    serial: Option<String>,

    /// Weld identifier on the drawing.
    #[arg(long)]
    weld: String,

    /// Welder identifier or stamp.
    #[arg(long)]
    welder: String,

    /// Welding procedure specification reference.
    #[arg(long)]
    wps: Option<String>,

    /// Parameters used, as free text.
    #[arg(long)]
    summary: Option<String>,

    /// Free-form notes.
    #[arg(long)]
    notes: Option<String>,

    /// When the weld was made (RFC 3339, default now).
    #[arg(long)]
    timestamp: Option<String>,
}

impl TraceCommand {
    /// Execute the trace command.
    pub(crate) fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let output = Output::new();
        let store = ctx.open_store()?;
        let log = TraceabilityLog::new(&store);

        match self {
            Self::List => {
                let entries = log.list()?;
                if entries.is_empty() {
                    output.info("Traceability log is empty.");
                    return Ok(());
                }
                for entry in &entries {
                    output.highlight(&format!(
                        "{}  component {}  weld {}",
                        entry.timestamp, entry.component_id, entry.weld_id
                    ));
                    output.result(&format!("  id:         {}", entry.id));
                    output.result(&format!("  welder:     {}", entry.welder_id));
                    if let Some(serial) = &entry.serial_number {
                        output.result(&format!("  serial:     {serial}"));
                    }
                    if let Some(wps) = &entry.wps {
                        output.result(&format!("  WPS:        {wps}"));
                    }
                    output.result(&format!("  parameters: {}", entry.parameters_summary));
                    if let Some(notes) = &entry.notes {
                        output.result(&format!("  notes:      {notes}"));
                    }
                }
            }
            Self::Add(args) => {
                let entry = log.add(NewTraceabilityEntry {
                    timestamp: args.timestamp,
                    component_id: args.component,
                    serial_number: args.serial,
                    weld_id: args.weld,
                    welder_id: args.welder,
                    wps: args.wps,
                    parameters_summary: args.summary,
                    notes: args.notes,
                })?;
                output.success(&format!(
                    "Logged weld {} on {}",
                    entry.weld_id, entry.component_id
                ));
                output.detail(&format!("id: {}", entry.id));
            }
            Self::Remove { id } => {
                if log.remove(&id)? {
                    output.success(&format!("Removed entry {id}"));
                } else {
                    output.warning(&format!("No log entry with id '{id}'"));
                }
            }
        }
        Ok(())
    }
}
