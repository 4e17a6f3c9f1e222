use crate::series::Series;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Initial temperatures of a series.
///
/// Loaded from a TOML file holding a single `temps` array.
/// See [`SeriesInput::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesInput {
    /// Temperatures in series order.
    pub temps: Vec<f64>,
}

impl SeriesInput {
    /// Load a [`SeriesInput`] from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or deserialized.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml_str(&contents).with_context(|| format!("failed to parse {file:?}"))
    }

    /// Parse a [`SeriesInput`] from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let input: SeriesInput =
            toml::from_str(contents).context("failed to deserialize series input")?;
        Ok(input)
    }

    /// Build the [`Series`], validating every temperature.
    pub fn into_series(self) -> Result<Series> {
        let series = Series::new(self.temps).context("invalid series input")?;
        Ok(series)
    }
}
