use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tasksmith_core::TaskContext;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "tasksmith")]
#[command(about = "Run individual build tasks from scripts and pipelines", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory that relative paths are resolved against
    #[arg(long, global = true, value_name = "DIR")]
    working_dir: Option<PathBuf>,

    /// Log debug output (overridden by TASKSMITH_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    tasksmith_utils::init(cli.verbose).map_err(|e| eyre::eyre!(e))?;

    let mut ctx = match cli.working_dir {
        Some(dir) => TaskContext::with_working_dir(dir),
        None => TaskContext::new(),
    };

    let code = cli.command.execute(&mut ctx);
    tracing::debug!(code, "task finished");

    // Exit statuses are a single byte; anything outside that range is a plain failure
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
