//! quizbank CLI — prints the demo quiz registry to stdout.

use std::process;

use clap::{Parser, Subcommand};

use quizbank_core::model::Category;

mod commands;
mod demo;

#[derive(Parser)]
#[command(name = "quizbank", version, about = "In-memory quiz registry demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List quizzes in the demo registry
    List {
        /// Only show quizzes in this category (sport, music, movies)
        #[arg(long)]
        category: Option<Category>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Print the answer-count summary
    Summary {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show a single quiz by id
    Show {
        /// Quiz id to look up
        id: String,
    },

    /// Print the bundled sample questions as JSON
    Samples,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizbank=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { category, format } => commands::list::execute(category, format),
        Commands::Summary { format } => commands::summary::execute(format),
        Commands::Show { id } => commands::show::execute(id),
        Commands::Samples => commands::samples::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
