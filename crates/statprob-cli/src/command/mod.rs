use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use statprob_survey::counter::ZeroCategoryPolicy;
use tracing::Level;

use self::{export::ExportArg, roster::RosterArg, table::TableArg, view::ViewArg};

mod export;
mod roster;
mod table;
mod view;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the distribution table of one segment
    Table(#[clap(flatten)] TableArg),
    /// Print the survey answers with resolved show names
    Roster(#[clap(flatten)] RosterArg),
    /// Export the distribution tables of every segment
    Export(#[clap(flatten)] ExportArg),
    /// Browse the distribution tables and charts interactively
    View(#[clap(flatten)] ViewArg),
}

/// How offered shows without votes are listed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ZeroCategories {
    /// List only shows with at least one vote
    #[default]
    Omit,
    /// List every offered show, with zero rows for unvoted ones
    Include,
}

impl From<ZeroCategories> for ZeroCategoryPolicy {
    fn from(value: ZeroCategories) -> Self {
        match value {
            ZeroCategories::Omit => ZeroCategoryPolicy::Omit,
            ZeroCategories::Include => ZeroCategoryPolicy::Include,
        }
    }
}

fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose, args.quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match args.mode {
        Mode::Table(arg) => table::run(&arg)?,
        Mode::Roster(arg) => roster::run(&arg)?,
        Mode::Export(arg) => export::run(&arg)?,
        Mode::View(arg) => view::run(&arg)?,
    }
    Ok(())
}
