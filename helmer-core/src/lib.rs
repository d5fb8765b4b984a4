//! # Helmer Core
//!
//! Core library for the Helmer director catalog: the TMDB metadata client,
//! the incremental director-search controller, filmography assembly, and
//! user preference handling.
//!
//! ## Overview
//!
//! - [`providers`]: the [`MetadataProvider`] seam and its TMDB implementation
//! - [`search`]: debounced, race-safe incremental search (pure state machine
//!   plus an async driver)
//! - [`filmography`]: director/film detail assembly with best-effort
//!   concurrent enrichment
//! - [`theme`]: persisted theme preference with explicit load/save points
//! - [`config`]: injected configuration (credential, endpoints, search tuning)

pub mod config;
pub mod filmography;
pub mod providers;
pub mod search;
pub mod theme;

pub use config::{ApiKey, AuthMode, Config, SearchConfig};
pub use filmography::{FilmView, Filmography, assemble_film, assemble_filmography};
pub use providers::{MetadataProvider, ProviderError, TmdbProvider};
pub use search::{
    LookupRequest, NavigationIntent, ScheduledLookup, SearchCommand, SearchController,
    SearchHandle, SearchMachine, SearchSnapshot, SearchStatus,
};
pub use theme::{FilePreferenceStore, PreferenceStore, ThemeManager};
