use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use chatsplit::{BpeTokenCounter, Planner, DEFAULT_TOKEN_BUDGET};

#[derive(Parser)]
#[command(
    name = "chatsplit",
    about = "Token-budgeted splitting of long chat messages",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count the tokens of the normalized input
    Count {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,

        /// Token budget the count is measured against
        #[arg(long, default_value_t = DEFAULT_TOKEN_BUDGET)]
        budget: usize,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Split the input into budget-sized parts
    Split {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,

        /// Maximum tokens per part
        #[arg(long, default_value_t = DEFAULT_TOKEN_BUDGET)]
        budget: usize,

        /// Emit the parts as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Count { file, budget, json } => {
            let text = read_input(file.as_deref())?;
            let planner = Planner::new(BpeTokenCounter::new()?, budget);
            let report = planner.report(&text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} tokens", report.tokens);
                if report.over_budget {
                    println!("over budget ({} max)", report.budget);
                }
            }
        }
        Command::Split { file, budget, json } => {
            let text = read_input(file.as_deref())?;
            let planner = Planner::new(BpeTokenCounter::new()?, budget);
            let parts = planner.plan(&text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else {
                let total = parts.len();
                for (index, part) in parts.iter().enumerate() {
                    println!("--- {}/{} ---", index + 1, total);
                    println!("{}", part);
                }
            }
        }
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
