//! `weldify ask` command implementations.

use clap::{Args, Subcommand};
use weldify_assist::{Assistant, GeminiClient, Reply, TextGenerator, UnconfiguredGenerator};
use weldify_calc::WeldingParameters;
use weldify_config::CliSettings;

use super::{Context, ParamsArgs};
use crate::error::CliError;
use crate::output::Output;

/// Assistant subcommands.
#[derive(Subcommand)]
pub(crate) enum AskCommand {
    /// Suggest starting machine settings for a setup.
    Params {
        #[command(flatten)]
        params: ParamsArgs,
        #[command(flatten)]
        opts: AskOptions,
    },
    /// Diagnose a weld defect.
    Defect {
        /// What the defect looks like.
        description: String,
        /// Base material.
        #[arg(long, default_value = "")]
        material: String,
        /// Welding process.
        #[arg(long, default_value = "")]
        process: String,
        #[command(flatten)]
        opts: AskOptions,
    },
    /// Ask a general welding question.
    Question {
        /// The question.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        #[command(flatten)]
        opts: AskOptions,
    },
}

/// Options shared by every assistant request.
#[derive(Args)]
pub(crate) struct AskOptions {
    /// Print the reply as text instead of HTML.
    #[arg(long)]
    raw: bool,

    /// Model name (overrides config).
    #[arg(long)]
    model: Option<String>,
}

/// Assistant request after argument parsing.
enum Request {
    Params(WeldingParameters),
    Defect {
        description: String,
        material: String,
        process: String,
    },
    Question(String),
}

impl Request {
    fn send<G: TextGenerator>(&self, assistant: &Assistant<G>) -> Reply {
        match self {
            Self::Params(params) => assistant.suggest_parameters(params),
            Self::Defect {
                description,
                material,
                process,
            } => assistant.analyze_defect(description, material, process),
            Self::Question(question) => assistant.ask(question),
        }
    }
}

impl AskCommand {
    /// Execute the ask command.
    pub(crate) fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let (request, opts) = match self {
            Self::Params { params, opts } => (Request::Params(params.into()), opts),
            Self::Defect {
                description,
                material,
                process,
                opts,
            } => (
                Request::Defect {
                    description,
                    material,
                    process,
                },
                opts,
            ),
            Self::Question { words, opts } => (Request::Question(words.join(" ")), opts),
        };

        let output = Output::new();
        let config = ctx.load_config(CliSettings {
            model: opts.model,
            ..Default::default()
        })?;
        let assistant = &config.assistant;

        let reply = match assistant.api_key() {
            Some(api_key) => {
                let client = GeminiClient::new(
                    &assistant.base_url,
                    &assistant.model,
                    api_key,
                    assistant.timeout(),
                );
                output.detail(&format!("Asking {}...", assistant.model));
                request.send(&Assistant::new(client))
            }
            None => {
                output.warning(
                    "No API key configured. Set GEMINI_API_KEY or assistant.api_key in weldify.toml.",
                );
                request.send(&Assistant::new(UnconfiguredGenerator))
            }
        };

        let text = match reply {
            Reply::Text(text) => text,
            Reply::Failed(message) => {
                // main prefixes every error with "Error: " already
                let message = message.strip_prefix("Error: ").unwrap_or(&message);
                return Err(CliError::Assistant(message.to_owned()));
            }
        };

        if opts.raw {
            output.result(&text);
        } else {
            output.result(&weldify_markup::render(&text));
        }
        Ok(())
    }
}
