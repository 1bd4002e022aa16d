//! Command implementations and argument parsing for the mstgen CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mstgen_core::{
    Dataset, DatasetConfig, DatasetError, GenerationReport, GraphEntry,
    connectivity::is_connected, dataset::DEFAULT_SEED,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mstgen",
    about = "Generate and inspect seeded graph fixtures for MST benchmarks."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Regenerate every tier fixture from the configured seed.
    Generate(DatasetArgs),
    /// Regenerate the tiers, load every category, and summarise each one.
    Inspect(DatasetArgs),
}

/// Dataset options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct DatasetArgs {
    /// Directory fixtures are read from and written to [default:
    /// `$MSTGEN_FIXTURES_DIR` or `graphs`].
    #[arg(long = "fixtures-dir")]
    pub fixtures_dir: Option<PathBuf>,

    /// Directory reserved for downstream results [default:
    /// `$MSTGEN_RESULTS_DIR` or `results`].
    #[arg(long = "results-dir")]
    pub results_dir: Option<PathBuf>,

    /// Seed of the random stream shared by all tiers.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// File name of the externally authored `test` fixture [default:
    /// `input.json`].
    #[arg(long = "test-fixture")]
    pub test_fixture: Option<String>,
}

impl DatasetArgs {
    /// Builds a [`DatasetConfig`], keeping library defaults for every option
    /// left unset.
    ///
    /// # Examples
    /// ```
    /// use mstgen_cli::cli::DatasetArgs;
    ///
    /// let args = DatasetArgs {
    ///     fixtures_dir: Some("fixtures".into()),
    ///     results_dir: None,
    ///     seed: 9,
    ///     test_fixture: Some("held_out.json".into()),
    /// };
    /// let config = args.into_config();
    /// assert_eq!(config.seed(), 9);
    /// assert_eq!(config.test_fixture_path(), std::path::Path::new("fixtures/held_out.json"));
    /// ```
    #[must_use]
    pub fn into_config(self) -> DatasetConfig {
        let Self {
            fixtures_dir,
            results_dir,
            seed,
            test_fixture,
        } = self;
        let mut config = DatasetConfig::new().with_seed(seed);
        if let Some(dir) = fixtures_dir {
            config = config.with_fixtures_dir(dir);
        }
        if let Some(dir) = results_dir {
            config = config.with_results_dir(dir);
        }
        if let Some(file_name) = test_fixture {
            config = config.with_test_fixture(file_name);
        }
        config
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Preparing, generating, or loading the dataset failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Statistics for one loaded category.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CategorySummary {
    /// Category key.
    pub category: String,
    /// Number of graphs in the category.
    pub graph_count: usize,
    /// Smallest and largest vertex count, absent for an empty category.
    pub vertex_range: Option<(usize, usize)>,
    /// Total number of edges across the category.
    pub edge_count: usize,
    /// Number of graphs whose vertices form a single component.
    pub connected_count: usize,
}

impl CategorySummary {
    /// Summarises `entries` under `category`.
    #[must_use]
    pub fn from_entries(category: &str, entries: &[GraphEntry]) -> Self {
        let vertex_range = entries
            .iter()
            .map(|entry| entry.graph.vertex_count())
            .fold(None, |range: Option<(usize, usize)>, count| {
                Some(range.map_or((count, count), |(low, high)| {
                    (low.min(count), high.max(count))
                }))
            });
        Self {
            category: category.to_owned(),
            graph_count: entries.len(),
            vertex_range,
            edge_count: entries.iter().map(|entry| entry.graph.edge_count()).sum(),
            connected_count: entries
                .iter()
                .filter(|entry| is_connected(&entry.graph))
                .count(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Tier files written by `generate`.
    Generated(GenerationReport),
    /// Per-category statistics gathered by `inspect`, in category order.
    Inspected(Vec<CategorySummary>),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the dataset cannot be configured, generated, or
/// loaded.
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(args) => {
            Span::current().record("command", field::display("generate"));
            run_generate(args.into_config())
        }
        Command::Inspect(args) => {
            Span::current().record("command", field::display("inspect"));
            run_inspect(args.into_config())
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(config),
    fields(seed = config.seed(), fixtures_dir = %config.fixtures_dir().display()),
)]
pub(super) fn run_generate(config: DatasetConfig) -> Result<ExecutionSummary, CliError> {
    let report = config.build()?.generate()?;
    info!(tiers = report.tiers.len(), "generation completed");
    Ok(ExecutionSummary::Generated(report))
}

#[instrument(
    name = "cli.inspect",
    err,
    skip(config),
    fields(seed = config.seed(), fixtures_dir = %config.fixtures_dir().display()),
)]
pub(super) fn run_inspect(config: DatasetConfig) -> Result<ExecutionSummary, CliError> {
    let dataset = config.build()?.load_all()?;
    let summaries = summarise(&dataset);
    info!(
        categories = summaries.len(),
        graphs = dataset.graph_count(),
        "inspection completed"
    );
    Ok(ExecutionSummary::Inspected(summaries))
}

pub(super) fn summarise(dataset: &Dataset) -> Vec<CategorySummary> {
    dataset
        .iter()
        .map(|(category, entries)| CategorySummary::from_entries(category, entries))
        .collect()
}

/// Renders `summary` to `writer` as tab-separated text.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use mstgen_cli::cli::{CategorySummary, ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Inspected(vec![CategorySummary {
///     category: "test".into(),
///     graph_count: 2,
///     vertex_range: Some((3, 5)),
///     edge_count: 9,
///     connected_count: 2,
/// }]);
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "categories: 1\ntest\tgraphs=2\tvertices=3..=5\tedges=9\tconnected=2/2\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated(report) => {
            writeln!(writer, "tiers: {}", report.tiers.len())?;
            for tier in &report.tiers {
                writeln!(
                    writer,
                    "{}\t{}\tgraphs={}\tedges={}",
                    tier.category,
                    tier.path.display(),
                    tier.graph_count,
                    tier.edge_count
                )?;
            }
        }
        ExecutionSummary::Inspected(categories) => {
            writeln!(writer, "categories: {}", categories.len())?;
            for category in categories {
                writeln!(
                    writer,
                    "{}\tgraphs={}\tvertices={}\tedges={}\tconnected={}/{}",
                    category.category,
                    category.graph_count,
                    format_vertex_range(category.vertex_range),
                    category.edge_count,
                    category.connected_count,
                    category.graph_count
                )?;
            }
        }
    }
    Ok(())
}

fn format_vertex_range(range: Option<(usize, usize)>) -> String {
    match range {
        None => "-".to_owned(),
        Some((low, high)) if low == high => low.to_string(),
        Some((low, high)) => format!("{low}..={high}"),
    }
}
