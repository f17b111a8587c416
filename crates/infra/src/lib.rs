//! Infrastructure layer: key-value persistence, the favorites set built on it,
//! the theme preference and configuration.

pub mod config;
pub mod favorites;
pub mod kv;
pub mod theme;

pub use config::{StoreBackend, StoreConfig};
pub use favorites::{FAVORITES_KEY, FavoritesSet};
pub use kv::{InMemoryStore, JsonFileStore, KeyValueStore, StoreError};
pub use theme::{THEME_KEY, Theme, ThemePreference};
