use clap::Parser;
use roi_review::cli::commands::{cmd_check, cmd_render, cmd_slots};
use roi_review::cli::config::{Cli, Commands, load_config};
use roi_review::trace::logger::TraceLogger;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise -v raises the level step by step.
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());
    let tracer = match cli.trace.as_deref() {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Render {
            input,
            format,
            output,
            title,
        } => {
            cmd_render(
                &config,
                &input,
                format.as_deref(),
                output.as_deref(),
                title.as_deref(),
                &tracer,
            )?;
        }
        Commands::Check { input, base_dir } => {
            let all_ok = cmd_check(&config, &input, base_dir.as_deref())?;
            if !all_ok {
                std::process::exit(1);
            }
        }
        Commands::Slots => {
            print!("{}", cmd_slots(&config)?);
        }
    }

    Ok(())
}
