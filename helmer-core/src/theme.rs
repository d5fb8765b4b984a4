//! Persisted theme preference.
//!
//! One value under one key, loaded exactly once at startup and written back
//! on every explicit change. There is no watcher and no implicit sync;
//! resolution of the `System` preference happens at read time against
//! whatever ambient hint the host supplies.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use helmer_model::theme::{ResolvedTheme, THEME_STORAGE_KEY, Theme};

/// Where the theme preference lives between sessions.
///
/// Absence and garbage both read as "no stored preference"; only real I/O
/// trouble surfaces as an error.
pub trait PreferenceStore {
    fn load_theme(&self) -> io::Result<Option<Theme>>;
    fn save_theme(&self, theme: Theme) -> io::Result<()>;
}

/// Preference store backed by a small file on disk, one token per key.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(THEME_STORAGE_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> io::Result<Option<Theme>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        match raw.trim().parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable theme preference");
                Ok(None)
            }
        }
    }

    fn save_theme(&self, theme: Theme) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, theme.as_str())
    }
}

/// Holds the active preference for the lifetime of the app.
///
/// Construction reads the store once; [`set`](Self::set) persists
/// immediately so the choice survives a restart.
#[derive(Debug)]
pub struct ThemeManager<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Load the stored preference, defaulting to [`Theme::System`] when
    /// nothing usable is stored.
    pub fn load(store: S) -> io::Result<Self> {
        let theme = store.load_theme()?.unwrap_or_default();
        Ok(Self { store, theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Apply and persist a new preference.
    pub fn set(&mut self, theme: Theme) -> io::Result<()> {
        self.store.save_theme(theme)?;
        self.theme = theme;
        Ok(())
    }

    /// Concrete appearance for the current preference.
    pub fn resolved(&self, system_prefers_dark: bool) -> ResolvedTheme {
        self.theme.resolve(system_prefers_dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_to_system_when_nothing_is_stored() {
        let dir = TempDir::new().unwrap();
        let manager = ThemeManager::load(FilePreferenceStore::new(dir.path())).unwrap();
        assert_eq!(manager.theme(), Theme::System);
    }

    #[test]
    fn set_persists_across_reload() {
        let dir = TempDir::new().unwrap();

        let mut manager = ThemeManager::load(FilePreferenceStore::new(dir.path())).unwrap();
        manager.set(Theme::Dark).unwrap();
        drop(manager);

        let reloaded = ThemeManager::load(FilePreferenceStore::new(dir.path())).unwrap();
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn garbage_on_disk_reads_as_default() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path());
        fs::write(store.path(), "solarized").unwrap();

        let manager = ThemeManager::load(store).unwrap();
        assert_eq!(manager.theme(), Theme::System);
    }

    #[test]
    fn resolution_uses_the_ambient_hint_only_for_system() {
        let dir = TempDir::new().unwrap();
        let mut manager = ThemeManager::load(FilePreferenceStore::new(dir.path())).unwrap();

        assert_eq!(manager.resolved(true), ResolvedTheme::Dark);
        assert_eq!(manager.resolved(false), ResolvedTheme::Light);

        manager.set(Theme::Light).unwrap();
        assert_eq!(manager.resolved(true), ResolvedTheme::Light);
    }
}
