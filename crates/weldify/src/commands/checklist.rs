//! `weldify checklist` command implementations.

use clap::Subcommand;
use weldify_storage::{CHECKLIST_ITEMS, ChecklistItem, ChecklistState, SafetyChecklist, is_complete};

use super::Context;
use crate::error::CliError;
use crate::output::Output;

/// Safety checklist subcommands.
#[derive(Subcommand)]
pub(crate) enum ChecklistCommand {
    /// Show the checklist grouped by category.
    Show,
    /// Check or uncheck one item.
    Toggle {
        /// Item id (e.g. epi1).
        id: String,
    },
    /// Uncheck every item.
    Reset,
}

impl ChecklistCommand {
    /// Execute the checklist command.
    pub(crate) fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let output = Output::new();
        let store = ctx.open_store()?;
        let checklist = SafetyChecklist::new(&store);

        match self {
            Self::Show => {
                let state = checklist.load()?;
                for (category, items) in group_by_category(&CHECKLIST_ITEMS) {
                    output.highlight(category);
                    for item in items {
                        output.result(&format_item(item, &state));
                        if let Some(details) = item.details {
                            output.detail(&format!("      {details}"));
                        }
                    }
                }
                if is_complete(&state) {
                    output.success("All checks done. Safe to start work.");
                } else {
                    let done = CHECKLIST_ITEMS
                        .iter()
                        .filter(|item| state.get(item.id).copied().unwrap_or(false))
                        .count();
                    output.warning(&format!(
                        "{done}/{} checks done. Complete the checklist before welding.",
                        CHECKLIST_ITEMS.len()
                    ));
                }
            }
            Self::Toggle { id } => {
                if checklist.toggle(&id)? {
                    output.success(&format!("Checked {id}"));
                } else {
                    output.info(&format!("Unchecked {id}"));
                }
            }
            Self::Reset => {
                checklist.reset()?;
                output.success("Checklist reset.");
            }
        }
        Ok(())
    }
}

/// Group items by category, keeping categories in first-appearance order.
fn group_by_category(items: &[ChecklistItem]) -> Vec<(&'static str, Vec<&ChecklistItem>)> {
    let mut groups: Vec<(&'static str, Vec<&ChecklistItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, group)) => group.push(item),
            None => groups.push((item.category, vec![item])),
        }
    }
    groups
}

fn format_item(item: &ChecklistItem, state: &ChecklistState) -> String {
    let mark = if state.get(item.id).copied().unwrap_or(false) {
        "x"
    } else {
        " "
    };
    format!("  [{mark}] {:<5} {}", item.id, item.text)
}
