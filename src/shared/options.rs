//! Zentrale Konfiguration für das Route-Follow Overlay.
//!
//! `FollowOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

pub use crate::core::progress::{SQUARED_DIST_TO_REACH, SQUARED_MAX_ROUTE_LENGTH};

// ── Marker-Rendering ────────────────────────────────────────────────

/// Standard-Marker-Größe in Welteinheiten.
pub const MARKER_SIZE_WORLD: f32 = 0.5;
/// Farbe des Routen-Polyzugs im Normal-Stil (RGBA: Cyan).
pub const ROUTE_COLOR_FOLLOW: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe des Routen-Polyzugs im Heart-Stil (RGBA: Rot).
pub const ROUTE_COLOR_HEART: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe freistehender Marker (RGBA: Grau, halbtransparent).
pub const MARKER_COLOR_DETACHED: [f32; 4] = [0.6, 0.6, 0.6, 0.5];
/// Farbe des aktuell angesteuerten Markers (RGBA: Magenta).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

// ── Linien-Rendering ────────────────────────────────────────────────

/// Linienstärke des Routen-Polyzugs in Welteinheiten.
pub const ROUTE_LINE_WIDTH_WORLD: f32 = 0.2;
/// Linienstärke der Orientierungshilfe (Cursor → Ziel).
pub const HELPER_LINE_WIDTH_WORLD: f32 = 0.1;
/// Farbe der Orientierungshilfe (RGBA: Gelb).
pub const HELPER_LINE_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Overlay-Optionen.
/// Wird als `route_follow_overlay.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowOptions {
    // ── Fortschritt ─────────────────────────────────────────────
    /// Quadrierte Distanz, ab der ein Node als erreicht gilt
    pub squared_dist_to_reach: f32,
    /// Quadriertes Längenbudget des Sichtfensters
    pub squared_max_route_length: f32,

    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Größe in Welteinheiten
    pub marker_size_world: f32,
    /// Farbe des Routen-Polyzugs im Normal-Stil
    pub route_color_follow: [f32; 4],
    /// Farbe des Routen-Polyzugs im Heart-Stil
    pub route_color_heart: [f32; 4],
    /// Farbe freistehender Marker
    pub marker_color_detached: [f32; 4],
    /// Farbe des aktuell angesteuerten Markers
    #[serde(default = "default_marker_color_selected")]
    pub marker_color_selected: [f32; 4],

    // ── Linien ──────────────────────────────────────────────────
    /// Linienstärke des Routen-Polyzugs in Welteinheiten
    pub route_line_width_world: f32,
    /// Linienstärke der Orientierungshilfe
    pub helper_line_width_world: f32,
    /// Farbe der Orientierungshilfe
    #[serde(default = "default_helper_line_color")]
    pub helper_line_color: [f32; 4],
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            squared_dist_to_reach: SQUARED_DIST_TO_REACH,
            squared_max_route_length: SQUARED_MAX_ROUTE_LENGTH,

            marker_size_world: MARKER_SIZE_WORLD,
            route_color_follow: ROUTE_COLOR_FOLLOW,
            route_color_heart: ROUTE_COLOR_HEART,
            marker_color_detached: MARKER_COLOR_DETACHED,
            marker_color_selected: MARKER_COLOR_SELECTED,

            route_line_width_world: ROUTE_LINE_WIDTH_WORLD,
            helper_line_width_world: HELPER_LINE_WIDTH_WORLD,
            helper_line_color: HELPER_LINE_COLOR,
        }
    }
}

/// Serde-Default für `marker_color_selected` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_marker_color_selected() -> [f32; 4] {
    MARKER_COLOR_SELECTED
}

/// Serde-Default für `helper_line_color` (Abwärtskompatibilität).
fn default_helper_line_color() -> [f32; 4] {
    HELPER_LINE_COLOR
}

impl FollowOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("route_follow_overlay"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("route_follow_overlay.toml")
    }
}
