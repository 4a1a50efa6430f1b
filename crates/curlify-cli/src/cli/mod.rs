//! CLI for curlify.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use curlify_core::{config, Cookie, FormatOptions, HttpClient};
use std::path::PathBuf;

use commands::{run_completions, run_har, run_request, RequestArgs};

/// Top-level CLI for curlify.
#[derive(Debug, Parser)]
#[command(name = "curlify")]
#[command(about = "Print HTTP requests as copy-pasteable curl commands", long_about = None)]
pub struct Cli {
    /// Leave out the `Cookie` header when a request has no cookies.
    #[arg(long, global = true)]
    pub no_empty_cookie: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Format a request described on the command line.
    Request {
        /// Full request URL.
        url: String,

        /// HTTP method.
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// Header as `Name: value` (repeatable).
        #[arg(short = 'H', long = "header", value_name = "HEADER", value_parser = args::parse_header)]
        headers: Vec<(String, String)>,

        /// Request body.
        #[arg(short = 'd', long)]
        data: Option<String>,

        /// Cookie as `name=value` (repeatable).
        #[arg(short = 'b', long = "cookie", value_name = "COOKIE", value_parser = args::parse_cookie)]
        cookies: Vec<Cookie>,
    },

    /// Format the requests recorded in a HAR file, one command per line.
    Har {
        /// Path to the HAR file.
        path: PathBuf,

        /// Only format entry N (0-based).
        #[arg(long, value_name = "N")]
        entry: Option<usize>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let opts = format_options(cfg.format_options(), cli.no_empty_cookie);
        let client = cfg.cookie_jar().map(HttpClient::with_jar);

        match cli.command {
            CliCommand::Request {
                url,
                method,
                headers,
                data,
                cookies,
            } => {
                let args = RequestArgs {
                    url,
                    method,
                    headers,
                    data,
                    cookies,
                };
                run_request(args, client.as_ref(), &opts)?;
            }
            CliCommand::Har { path, entry } => run_har(&path, entry, client.as_ref(), &opts)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

/// Apply command-line overrides on top of the configured options.
fn format_options(mut opts: FormatOptions, no_empty_cookie: bool) -> FormatOptions {
    if no_empty_cookie {
        opts.empty_cookie_header = false;
    }
    opts
}

#[cfg(test)]
mod tests;
