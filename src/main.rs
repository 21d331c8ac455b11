use anyhow::Context;
use clap::Parser;
use respec::{
    cli::{Cli, Commands},
    commands, telemetry,
};

fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            response,
            schema,
            endpoint,
            method,
            status,
            envelope,
            show_mismatches,
            skip_validation,
        } => {
            commands::execute_validate(
                &response,
                &schema,
                &endpoint,
                &method,
                status,
                envelope,
                show_mismatches,
                skip_validation,
            )
            .context("validate command failed")?;
        }
        Commands::Inspect { schema } => {
            commands::execute_inspect(&schema).context("inspect command failed")?;
        }
    }

    Ok(())
}
