//! Configuration for [`DatasetLoader`](super::DatasetLoader).

use std::{
    collections::BTreeSet,
    env,
    path::{Path, PathBuf},
};

use crate::{
    error::DatasetError,
    tier::{TEST_CATEGORY, TierSpec, standard_tiers},
};

use super::DatasetLoader;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;
/// Fixtures directory used when neither the builder nor the environment
/// overrides it.
pub const DEFAULT_FIXTURES_DIR: &str = "graphs";
/// Results directory used when neither the builder nor the environment
/// overrides it.
pub const DEFAULT_RESULTS_DIR: &str = "results";
/// File name of the externally authored `test` fixture.
pub const DEFAULT_TEST_FIXTURE: &str = "input.json";

const FIXTURES_DIR_ENV: &str = "MSTGEN_FIXTURES_DIR";
const RESULTS_DIR_ENV: &str = "MSTGEN_RESULTS_DIR";

/// Configures and constructs [`DatasetLoader`] instances.
///
/// Directory defaults honour `MSTGEN_FIXTURES_DIR` and `MSTGEN_RESULTS_DIR`
/// before falling back to `graphs/` and `results/` relative to the working
/// directory.
///
/// # Examples
/// ```
/// use mstgen_core::DatasetConfig;
///
/// let loader = DatasetConfig::new()
///     .with_fixtures_dir("target/fixtures")
///     .with_seed(7)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(loader.config().seed(), 7);
/// assert_eq!(loader.config().tiers().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct DatasetConfig {
    fixtures_dir: PathBuf,
    results_dir: PathBuf,
    seed: u64,
    test_fixture: String,
    tiers: Vec<TierSpec>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: dir_from_env(FIXTURES_DIR_ENV, DEFAULT_FIXTURES_DIR),
            results_dir: dir_from_env(RESULTS_DIR_ENV, DEFAULT_RESULTS_DIR),
            seed: DEFAULT_SEED,
            test_fixture: DEFAULT_TEST_FIXTURE.to_owned(),
            tiers: standard_tiers(),
        }
    }
}

impl DatasetConfig {
    /// Creates a configuration populated with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the directory fixture files are read from and written to.
    #[must_use]
    pub fn with_fixtures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fixtures_dir = dir.into();
        self
    }

    /// Overrides the directory reserved for downstream results.
    #[must_use]
    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    /// Overrides the seed of the shared random stream.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides the file name of the externally authored `test` fixture.
    #[must_use]
    pub fn with_test_fixture(mut self, file_name: impl Into<String>) -> Self {
        self.test_fixture = file_name.into();
        self
    }

    /// Replaces the generated tiers. Tiers are generated in the given order.
    #[must_use]
    pub fn with_tiers(mut self, tiers: Vec<TierSpec>) -> Self {
        self.tiers = tiers;
        self
    }

    /// Returns the fixtures directory.
    #[must_use]
    #[rustfmt::skip]
    pub fn fixtures_dir(&self) -> &Path { &self.fixtures_dir }

    /// Returns the results directory.
    #[must_use]
    #[rustfmt::skip]
    pub fn results_dir(&self) -> &Path { &self.results_dir }

    /// Returns the seed of the shared random stream.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Returns the file name of the `test` fixture.
    #[must_use]
    #[rustfmt::skip]
    pub fn test_fixture(&self) -> &str { &self.test_fixture }

    /// Returns the tiers in generation order.
    #[must_use]
    #[rustfmt::skip]
    pub fn tiers(&self) -> &[TierSpec] { &self.tiers }

    /// Returns the path of the `test` fixture.
    #[must_use]
    pub fn test_fixture_path(&self) -> PathBuf {
        self.fixtures_dir.join(&self.test_fixture)
    }

    /// Returns the path backing `tier`.
    #[must_use]
    pub fn tier_path(&self, tier: &TierSpec) -> PathBuf {
        self.fixtures_dir.join(&tier.file_name)
    }

    /// Validates the configuration and constructs a [`DatasetLoader`].
    ///
    /// # Errors
    /// Returns [`DatasetError::DuplicateCategory`] when two tiers share a
    /// category key or a tier reuses the `test` key, and
    /// [`DatasetError::DuplicateFile`] when two categories would share a file.
    pub fn build(self) -> Result<DatasetLoader, DatasetError> {
        let mut categories = BTreeSet::from([TEST_CATEGORY]);
        let mut files = BTreeSet::from([self.test_fixture.as_str()]);
        for tier in &self.tiers {
            if !categories.insert(tier.category.as_str()) {
                return Err(DatasetError::DuplicateCategory {
                    category: tier.category.clone(),
                });
            }
            if !files.insert(tier.file_name.as_str()) {
                return Err(DatasetError::DuplicateFile {
                    file_name: tier.file_name.clone(),
                });
            }
        }
        Ok(DatasetLoader::from_config(self))
    }
}

fn dir_from_env(name: &str, fallback: &str) -> PathBuf {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(fallback), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::error::DatasetErrorCode;
    use crate::tier::FixedGraph;

    #[test]
    fn builder_overrides_every_field() {
        let config = DatasetConfig::new()
            .with_fixtures_dir("/tmp/fixtures")
            .with_results_dir("/tmp/results")
            .with_seed(99)
            .with_test_fixture("held_out.json")
            .with_tiers(Vec::new());
        assert_eq!(config.fixtures_dir(), Path::new("/tmp/fixtures"));
        assert_eq!(config.results_dir(), Path::new("/tmp/results"));
        assert_eq!(config.seed(), 99);
        assert_eq!(config.test_fixture(), "held_out.json");
        assert!(config.tiers().is_empty());
        assert_eq!(
            config.test_fixture_path(),
            Path::new("/tmp/fixtures/held_out.json")
        );
    }

    #[test]
    fn defaults_use_standard_tiers_and_seed() {
        let config = DatasetConfig::new();
        assert_eq!(config.seed(), DEFAULT_SEED);
        assert_eq!(config.test_fixture(), DEFAULT_TEST_FIXTURE);
        assert_eq!(config.tiers(), standard_tiers().as_slice());
    }

    #[rstest]
    #[case::reuses_test_key("test", "other.json", DatasetErrorCode::DuplicateCategory)]
    #[case::reuses_tier_key("small", "other.json", DatasetErrorCode::DuplicateCategory)]
    #[case::reuses_test_file("extra", "input.json", DatasetErrorCode::DuplicateFile)]
    #[case::reuses_tier_file("extra", "small_graphs.json", DatasetErrorCode::DuplicateFile)]
    fn build_rejects_colliding_tiers(
        #[case] category: &str,
        #[case] file_name: &str,
        #[case] expected: DatasetErrorCode,
    ) {
        let mut tiers = standard_tiers();
        tiers.push(TierSpec::fixed(
            category,
            file_name,
            vec![FixedGraph::new(3, 1.0)],
        ));
        let err = DatasetConfig::new()
            .with_test_fixture(DEFAULT_TEST_FIXTURE)
            .with_tiers(tiers)
            .build()
            .expect_err("colliding tier must be rejected");
        assert_eq!(err.code(), expected);
    }
}
