use std::path::PathBuf;

use clap::Parser;
use roster_reconcile::io::output::{DEFAULT_DATA_DIR, OutputTarget};
use roster_reconcile::pipeline::{self, RosterInputs};
use roster_reconcile::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;

    let inputs = RosterInputs {
        all_employees: cli.all_employees,
        new_hires: cli.new_hires,
        terminated: cli.terminated,
    };
    inputs.ensure_exist()?;

    let target = OutputTarget::resolve(&cli.data_dir, cli.outfile.as_deref())?;
    let output = target.open()?;
    if let OutputTarget::File(path) = &target {
        println!("{}", path.display());
    }

    pipeline::reconcile_files(&inputs, output)?;
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Merge active, new-hire, and terminated employee exports into one roster."
)]
struct Cli {
    /// CSV export of all active employees.
    #[arg(short, long)]
    all_employees: PathBuf,

    /// CSV export of new hires.
    #[arg(short, long)]
    new_hires: PathBuf,

    /// CSV export of terminated employees.
    #[arg(short, long)]
    terminated: PathBuf,

    /// Output file, confined to the data directory. Defaults to stdout.
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Base directory that output files are written under.
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
}
