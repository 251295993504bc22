//! `weldify jobs` command implementations.

use clap::Subcommand;
use weldify_storage::{JobBook, NewJob, WeldingJob};

use super::{Context, ParamsArgs};
use crate::error::CliError;
use crate::output::Output;

/// Saved job subcommands.
#[derive(Subcommand)]
pub(crate) enum JobsCommand {
    /// List saved jobs.
    List,
    /// Show one job in full.
    Show {
        /// Job id.
        id: String,
    },
    /// Save a new job.
    Add {
        /// Job name.
        #[arg(long)]
        name: String,
        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
        #[command(flatten)]
        params: ParamsArgs,
    },
    /// Delete a job.
    Remove {
        /// Job id.
        id: String,
    },
}

impl JobsCommand {
    /// Execute the jobs command.
    pub(crate) fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let output = Output::new();
        let store = ctx.open_store()?;
        let book = JobBook::new(&store);

        match self {
            Self::List => {
                let jobs = book.list()?;
                if jobs.is_empty() {
                    output.info("No saved jobs.");
                    return Ok(());
                }
                output.highlight(&format!("{} saved job(s)", jobs.len()));
                for job in &jobs {
                    output.result(&format!(
                        "{}  {}  {}  {}",
                        job.id,
                        job.created_at.format("%Y-%m-%d"),
                        job.name,
                        job.parameters.summary()
                    ));
                }
            }
            Self::Show { id } => {
                let job = book.get(&id)?.ok_or_else(|| {
                    CliError::Validation(format!("no saved job with id '{id}'"))
                })?;
                print_job(&output, &job);
            }
            Self::Add {
                name,
                notes,
                params,
            } => {
                let job = book.add(NewJob {
                    name,
                    parameters: params.into(),
                    notes,
                })?;
                output.success(&format!("Saved job '{}'", job.name));
                output.detail(&format!("id: {}", job.id));
            }
            Self::Remove { id } => {
                if book.remove(&id)? {
                    output.success(&format!("Removed job {id}"));
                } else {
                    output.warning(&format!("No saved job with id '{id}'"));
                }
            }
        }
        Ok(())
    }
}

fn print_job(output: &Output, job: &WeldingJob) {
    output.highlight(&job.name);
    output.result(&format!("id:         {}", job.id));
    output.result(&format!("created:    {}", job.created_at.format("%Y-%m-%d %H:%M UTC")));
    output.result(&format!("parameters: {}", job.parameters.summary()));
    if let Some(notes) = &job.notes {
        output.result(&format!("notes:      {notes}"));
    }
}
