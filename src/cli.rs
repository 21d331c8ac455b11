use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "respec")]
#[command(version)]
#[command(about = "Schema-driven API response validation tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate response data against a JSON Schema or API spec document
    Validate {
        /// Path to the response data file (JSON)
        #[arg(short, long)]
        response: PathBuf,

        /// Path to the schema or spec document (JSON or YAML)
        #[arg(short, long)]
        schema: PathBuf,

        /// Endpoint path in the spec document (e.g. "/users/{id}")
        #[arg(short, long)]
        endpoint: Option<String>,

        /// HTTP method (defaults to GET)
        #[arg(short, long, requires = "endpoint")]
        method: Option<String>,

        /// Response status code (defaults to 200)
        #[arg(long, requires = "endpoint")]
        status: Option<u16>,

        /// Treat the response file as a response envelope (status/headers/body)
        #[arg(long)]
        envelope: bool,

        /// Print the annotated mismatch view on failure
        #[arg(long)]
        show_mismatches: bool,

        /// Bypass schema validation entirely
        #[arg(long)]
        skip_validation: bool,
    },

    /// Inspect a document: dialect, endpoints, methods, response statuses
    Inspect {
        /// Path to the schema or spec document (JSON or YAML)
        #[arg(short, long)]
        schema: PathBuf,
    },
}
