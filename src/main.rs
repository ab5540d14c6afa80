use anyhow::Result;
use clap::Parser;
use distinfo::commands;
use distinfo::config::DistConfig;
use std::path::PathBuf;

/// distinfo - Package descriptor for the d2l source tree
///
/// Builds the metadata record a packaging front end consumes: the declared
/// identity of the distribution, its exactly-pinned requirements and the
/// packages discovered in the source tree. The version is read from the
/// library's own __version__ attribute, never declared here.
///
/// Examples:
///   distinfo describe              # Describe the tree in the current directory
///   distinfo -C ~/src/d2l packages # List packages of another tree
#[derive(Parser, Debug)]
#[command(author, version = env!("DISTINFO_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Source tree root (defaults to the current directory)
    #[arg(long = "directory", short = 'C', value_name = "PATH", global = true)]
    pub directory: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the full metadata record for the source tree
    Describe(DescribeArgs),

    /// List the importable packages discovered in the source tree
    Packages(PackagesArgs),

    /// Verify that the metadata record is well formed
    Check(CheckArgs),
}

#[derive(clap::Args, Debug)]
pub struct DescribeArgs {
    /// Render the record as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct PackagesArgs {
    /// Withhold packages matching this glob pattern (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = distinfo::runtime::RealRuntime;

    match cli.command {
        Commands::Describe(args) => {
            commands::describe(runtime, cli.directory, DistConfig::declared(), args.json)?
        }
        Commands::Packages(args) => commands::packages(runtime, cli.directory, args.exclude)?,
        Commands::Check(_args) => commands::check(runtime, cli.directory, DistConfig::declared())?,
    }
    Ok(())
}
