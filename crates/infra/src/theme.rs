//! Light/dark theme preference.
//!
//! Lives in the same store as the favorites but is owned by the presentation
//! side; the engine only persists it.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use ecocheck_core::DomainError;

use crate::kv::{KeyValueStore, StoreError};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl core::fmt::Display for Theme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(DomainError::malformed(format!("unknown theme {other:?}"))),
        }
    }
}

/// Persisted theme choice, `"dark"` or `"light"` under [`THEME_KEY`].
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
}

impl<S> ThemePreference<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme; absent, unreadable or unknown values fall back to light.
    pub fn get(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err: DomainError| {
                tracing::warn!(error = %err, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read theme; using default");
                Theme::default()
            }
        }
    }

    pub fn set(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str().to_string())?;
        tracing::debug!(%theme, "theme saved");
        Ok(())
    }

    /// Switch between light and dark, returning the new theme.
    pub fn toggle(&self) -> Result<Theme, StoreError> {
        let next = self.get().toggled();
        self.set(next)?;
        Ok(next)
    }
}
