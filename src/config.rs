//! Settings and per-dialog window geometry persistence.
//!
//! Both live as JSON files in the platform config directory. Geometry is
//! keyed by a fixed dialog identifier so each dialog kind remembers its
//! own placement across sessions.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_EDITOR_ADDR: &str = "127.0.0.1:8766";

/// Geometry key for the deck options dialog.
pub const DECK_OPTIONS_GEOM_KEY: &str = "deckOptions";

#[derive(Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Address of the options editor service (host:port)
    pub editor_addr: String,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor_addr: DEFAULT_EDITOR_ADDR.to_string(),
            theme: "dark".to_string(),
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "cardbox", "cardbox") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.to_path_buf());
    }
    None
}

pub fn settings_path() -> Option<PathBuf> {
    Some(config_dir()?.join("settings.json"))
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).expect("settings serialize");
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

/// Saved placement of one dialog window.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WindowGeometry {
    /// Last position, if the window was ever moved (logical points)
    pub pos: Option<(f32, f32)>,
    /// Last size (logical points)
    pub size: (f32, f32),
}

impl WindowGeometry {
    /// Default placement for option dialogs: 800x800, window manager
    /// decides the position.
    pub fn default_dialog() -> Self {
        Self {
            pos: None,
            size: (800.0, 800.0),
        }
    }
}

/// Load-or-default and save of dialog window geometry.
///
/// With no backing path (tests) the store is purely in-memory.
pub struct GeometryStore {
    path: Option<PathBuf>,
    entries: HashMap<String, WindowGeometry>,
}

impl GeometryStore {
    /// Load the store from the config directory.
    pub fn load() -> Self {
        Self::with_path(config_dir().map(|d| d.join("geometry.json")))
    }

    /// Create a store backed by the given file (None = in-memory only).
    pub fn with_path(path: Option<PathBuf>) -> Self {
        let entries = path
            .as_deref()
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    /// Saved geometry for the given dialog, or the dialog default.
    pub fn restore(&self, key: &str) -> WindowGeometry {
        self.entries
            .get(key)
            .copied()
            .unwrap_or_else(WindowGeometry::default_dialog)
    }

    /// Record the geometry for a dialog and persist the store.
    pub fn save(&mut self, key: &str, geom: WindowGeometry) {
        self.entries.insert(key.to_string(), geom);
        if let Some(path) = &self.path {
            let data = serde_json::to_string_pretty(&self.entries).expect("geometry serialize");
            if let Err(e) = fs::write(path, data) {
                eprintln!("Failed to save window geometry: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_defaults_to_800x800() {
        let store = GeometryStore::with_path(None);
        let geom = store.restore(DECK_OPTIONS_GEOM_KEY);
        assert_eq!(geom, WindowGeometry::default_dialog());
        assert_eq!(geom.size, (800.0, 800.0));
        assert!(geom.pos.is_none());
    }

    #[test]
    fn test_save_then_restore() {
        let mut store = GeometryStore::with_path(None);
        let geom = WindowGeometry {
            pos: Some((100.0, 50.0)),
            size: (640.0, 480.0),
        };
        store.save(DECK_OPTIONS_GEOM_KEY, geom);
        assert_eq!(store.restore(DECK_OPTIONS_GEOM_KEY), geom);
        // Other keys are unaffected
        assert_eq!(store.restore("other"), WindowGeometry::default_dialog());
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.editor_addr, DEFAULT_EDITOR_ADDR);
    }
}
