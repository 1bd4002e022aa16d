//! Fixture dataset orchestration.
//!
//! [`DatasetLoader::load_all`] is the end-to-end entry point: it creates the
//! fixtures and results directories, regenerates every configured tier from a
//! freshly seeded stream (overwriting earlier files), and then reads the
//! externally authored `test` fixture together with every tier file back into a
//! [`Dataset`]. Nothing is cached between calls; reproducibility comes from the
//! seed, not from reusing files.

mod config;

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, field, info, instrument};

use crate::{
    error::DatasetError,
    exchange::{read_collection_file, write_collection_file},
    graph::{Graph, GraphEntry},
    tier::{TEST_CATEGORY, generate_tier},
};

pub use self::config::{
    DEFAULT_FIXTURES_DIR, DEFAULT_RESULTS_DIR, DEFAULT_SEED, DEFAULT_TEST_FIXTURE, DatasetConfig,
};

/// Graph entries keyed by category name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Dataset {
    categories: BTreeMap<String, Vec<GraphEntry>>,
}

impl Dataset {
    /// Returns the entries loaded for `category`.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[GraphEntry]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Iterates over the graphs of `category`; empty when the category is
    /// absent.
    pub fn graphs<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Graph> + use<'a> {
        self.categories
            .get(category)
            .into_iter()
            .flatten()
            .map(|entry| &entry.graph)
    }

    /// Iterates over category names in lexical order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Iterates over `(category, entries)` pairs in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GraphEntry])> {
        self.categories
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Returns the number of categories.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.categories.len() }

    /// Returns `true` when no category has been loaded.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    /// Returns the number of graphs across all categories.
    #[must_use]
    pub fn graph_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Consumes the dataset, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<GraphEntry>> {
        self.categories
    }

    fn insert(&mut self, category: &str, entries: Vec<GraphEntry>) {
        self.categories.insert(category.to_owned(), entries);
    }
}

/// Outcome of writing one tier file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierReport {
    /// Category key of the tier.
    pub category: String,
    /// File the tier was written to.
    pub path: PathBuf,
    /// Number of graphs written.
    pub graph_count: usize,
    /// Number of edges written across all graphs.
    pub edge_count: usize,
}

/// Outcome of regenerating every configured tier, in generation order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerationReport {
    /// One report per tier.
    pub tiers: Vec<TierReport>,
}

/// Generates fixture files and loads them back as a [`Dataset`].
///
/// Construct through [`DatasetConfig::build`].
#[derive(Clone, Debug)]
pub struct DatasetLoader {
    config: DatasetConfig,
}

impl DatasetLoader {
    pub(crate) const fn from_config(config: DatasetConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the loader was built with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn config(&self) -> &DatasetConfig { &self.config }

    /// Creates the fixtures and results directories if they do not exist.
    ///
    /// # Errors
    /// Returns [`DatasetError::CreateDirectory`] naming the directory that
    /// could not be created.
    #[instrument(name = "core.ensure_directories", err, skip(self))]
    pub fn ensure_directories(&self) -> Result<(), DatasetError> {
        for dir in [self.config.fixtures_dir(), self.config.results_dir()] {
            create_dir(dir)?;
        }
        Ok(())
    }

    /// Regenerates every tier file from a stream seeded with the configured
    /// seed, creating the directories first.
    ///
    /// # Errors
    /// See [`DatasetLoader::ensure_directories`] and
    /// [`DatasetLoader::generate_with_rng`].
    pub fn generate(&self) -> Result<GenerationReport, DatasetError> {
        self.ensure_directories()?;
        let mut rng = SmallRng::seed_from_u64(self.config.seed());
        self.generate_with_rng(&mut rng)
    }

    /// Regenerates every tier file in configured order from `rng`, overwriting
    /// existing files.
    ///
    /// The fixtures directory must already exist.
    ///
    /// # Errors
    /// Returns [`DatasetError::Generation`] for degenerate tier parameters and
    /// [`DatasetError::Category`] when a tier file cannot be written.
    #[instrument(
        name = "core.generate_tiers",
        err,
        skip(self, rng),
        fields(tiers = self.config.tiers().len()),
    )]
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Result<GenerationReport, DatasetError>
    where
        R: Rng,
    {
        let mut report = GenerationReport::default();
        for tier in self.config.tiers() {
            let entries = generate_tier(tier, rng)?;
            let path = self.config.tier_path(tier);
            write_collection_file(&path, &entries).map_err(|source| DatasetError::Category {
                category: tier.category.clone(),
                path: path.clone(),
                source,
            })?;
            let edge_count: usize = entries.iter().map(|entry| entry.graph.edge_count()).sum();
            info!(
                category = %tier.category,
                path = %path.display(),
                graphs = entries.len(),
                edges = edge_count,
                "wrote tier fixture"
            );
            report.tiers.push(TierReport {
                category: tier.category.clone(),
                path,
                graph_count: entries.len(),
                edge_count,
            });
        }
        Ok(report)
    }

    /// Reads `file_name` from the fixtures directory as `category`.
    ///
    /// # Errors
    /// Returns [`DatasetError::Category`] when the file is missing, malformed,
    /// or references unknown nodes.
    #[instrument(name = "core.load_category", err, skip(self), fields(path = field::Empty))]
    pub fn load_category(
        &self,
        category: &str,
        file_name: &str,
    ) -> Result<Vec<GraphEntry>, DatasetError> {
        let path = self.config.fixtures_dir().join(file_name);
        Span::current().record("path", field::display(path.display()));
        read_collection_file(&path).map_err(|source| DatasetError::Category {
            category: category.to_owned(),
            path,
            source,
        })
    }

    /// Regenerates all tiers from the configured seed and loads the `test`
    /// fixture plus every tier into a [`Dataset`].
    ///
    /// # Errors
    /// Returns the first [`DatasetError`] encountered; no partial dataset is
    /// returned.
    ///
    /// # Examples
    /// ```
    /// use mstgen_core::{DatasetConfig, tier::{FixedGraph, TierSpec}};
    ///
    /// let dir = tempfile::tempdir()?;
    /// std::fs::write(
    ///     dir.path().join("input.json"),
    ///     r#"{"graphs":[{"id":1,"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":5}]}]}"#,
    /// )?;
    /// let loader = DatasetConfig::new()
    ///     .with_fixtures_dir(dir.path())
    ///     .with_results_dir(dir.path().join("results"))
    ///     .with_tiers(vec![TierSpec::fixed("tiny", "tiny.json", vec![FixedGraph::new(4, 1.0)])])
    ///     .build()?;
    /// let dataset = loader.load_all()?;
    /// assert_eq!(dataset.categories().collect::<Vec<_>>(), ["test", "tiny"]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load_all(&self) -> Result<Dataset, DatasetError> {
        let mut rng = SmallRng::seed_from_u64(self.config.seed());
        self.load_all_with_rng(&mut rng)
    }

    /// Like [`DatasetLoader::load_all`] but draws from a caller-supplied
    /// stream.
    ///
    /// # Errors
    /// Returns the first [`DatasetError`] encountered.
    #[instrument(
        name = "core.load_all",
        err,
        skip(self, rng),
        fields(fixtures_dir = %self.config.fixtures_dir().display()),
    )]
    pub fn load_all_with_rng<R>(&self, rng: &mut R) -> Result<Dataset, DatasetError>
    where
        R: Rng,
    {
        self.ensure_directories()?;
        self.generate_with_rng(rng)?;

        let mut dataset = Dataset::default();
        let test_entries = self.load_category(TEST_CATEGORY, self.config.test_fixture())?;
        dataset.insert(TEST_CATEGORY, test_entries);
        for tier in self.config.tiers() {
            let entries = self.load_category(&tier.category, &tier.file_name)?;
            dataset.insert(&tier.category, entries);
        }

        info!(
            categories = dataset.len(),
            graphs = dataset.graph_count(),
            "loaded fixture dataset"
        );
        Ok(dataset)
    }
}

fn create_dir(dir: &Path) -> Result<(), DatasetError> {
    fs::create_dir_all(dir).map_err(|source| DatasetError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })
}
