//! Faker settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::faker::DEFAULT_LOCALE;

/// Layered settings for building a [`Faker`](crate::Faker).
///
/// Values come from defaults, a configuration file, `FAKER_*` environment
/// variables and command-line flags, later layers winning.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FAKER")]
pub struct FakerSettings {
    /// Locale to generate in.
    pub locale: Option<String>,
    /// Seed for the random source; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Extra directory searched for locale files.
    pub locale_path: Option<PathBuf>,
    /// Number of records the sample binary prints.
    #[ortho_config(default = 1)]
    pub records: usize,
}

impl FakerSettings {
    /// Returns the configured locale, falling back to the default locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}
