//! Builder for opening sessions on the default SQLite store.

use std::path::{Path, PathBuf};

use super::Session;
use crate::{
    config::{default_database_path, Locale},
    error::{ItineraryError, Result},
    params::CreateTrip,
    store::SqliteStore,
};

/// Builder for creating and configuring [`Session`] instances.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    database_path: Option<PathBuf>,
    fallback: CreateTrip,
    locale: Option<Locale>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            fallback: CreateTrip::default(),
            locale: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/itinerary/itinerary.db` or
    /// `~/.local/share/itinerary/itinerary.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the trip created when nothing usable is stored.
    pub fn with_fallback(mut self, fallback: CreateTrip) -> Self {
        self.fallback = fallback;
        self
    }

    /// Overrides the locale defaults detected from the environment.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Path the session will be stored at.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => default_database_path(),
        }
    }

    /// Opens the store and the session.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::Configuration` if the path names a directory,
    /// `ItineraryError::FileSystem` if the database directory cannot be
    /// created, `ItineraryError::XdgDirectory` if no default location
    /// exists and `ItineraryError::Database` if the store cannot be opened.
    pub fn build(self) -> Result<Session<SqliteStore>> {
        let db_path = self.database_path()?;
        if db_path.is_dir() {
            return Err(ItineraryError::Configuration {
                message: format!("database path '{}' is a directory", db_path.display()),
            });
        }

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ItineraryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = SqliteStore::new(&db_path)?;
        let locale = self.locale.unwrap_or_else(Locale::detect);
        Session::open_with_locale(store, &self.fallback, &locale)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
