//! Zentrale Konfiguration für den Playbook-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Feld ────────────────────────────────────────────────────────────

/// Feldbreite in Field-Space-Einheiten.
pub const FIELD_WIDTH: f32 = 1200.0;
/// Feldhöhe in Field-Space-Einheiten.
pub const FIELD_HEIGHT: f32 = 900.0;
/// Abstand der 10-Yard-Linien.
pub const YARD_LINE_GAP: f32 = 100.0;

// ── Grid-Snap ───────────────────────────────────────────────────────

/// Rastergröße für das Einrasten nach Drag-Ende.
pub const GRID_SIZE: f32 = 25.0;
/// Maximale Distanz, innerhalb derer eingerastet wird.
pub const SNAP_THRESHOLD: f32 = 10.0;
/// Dauer der Einrast-Animation in Millisekunden (rein visuell).
pub const SNAP_ANIMATION_MS: u32 = 100;

// ── Player-Token ────────────────────────────────────────────────────

/// Radius eines Player-Tokens.
pub const PLAYER_RADIUS: f32 = 18.0;
/// Konturstärke eines Player-Tokens.
pub const PLAYER_STROKE_WIDTH: f32 = 4.0;
/// Füllfarbe Offense (RGBA, entspricht #e33232).
pub const COLOR_OFFENSE: [f32; 4] = [0.890, 0.196, 0.196, 1.0];
/// Füllfarbe Defense (RGBA, entspricht #323ae3).
pub const COLOR_DEFENSE: [f32; 4] = [0.196, 0.227, 0.890, 1.0];

// ── Routen & Zonen ──────────────────────────────────────────────────

/// Strichstärke einer Route.
pub const ROUTE_WIDTH: f32 = 20.0;
/// Strich-Deckkraft für Offense-Routen.
pub const ROUTE_OPACITY_OFFENSE: f32 = 1.0;
/// Strich-Deckkraft für Defense-Routen (und Zonen-Füllung).
pub const ROUTE_OPACITY_DEFENSE: f32 = 0.75;
/// Eckenradius der Zonen-Rechtecke.
pub const ZONE_CORNER_RADIUS: f32 = 20.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `playbook_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Feld ────────────────────────────────────────────────────
    /// Feldbreite in Field-Space-Einheiten
    pub field_width: f32,
    /// Feldhöhe in Field-Space-Einheiten
    pub field_height: f32,
    /// Abstand der 10-Yard-Linien
    pub yard_line_gap: f32,

    // ── Grid-Snap ───────────────────────────────────────────────
    /// Rastergröße für das Einrasten
    pub grid_size: f32,
    /// Maximale Einrast-Distanz
    #[serde(default = "default_snap_threshold")]
    pub snap_threshold: f32,
    /// Dauer der Einrast-Animation in Millisekunden
    #[serde(default = "default_snap_animation_ms")]
    pub snap_animation_ms: u32,

    // ── Player-Token ────────────────────────────────────────────
    /// Radius eines Player-Tokens
    pub player_radius: f32,
    /// Konturstärke eines Player-Tokens
    pub player_stroke_width: f32,
    /// Füllfarbe Offense (RGBA)
    pub color_offense: [f32; 4],
    /// Füllfarbe Defense (RGBA)
    pub color_defense: [f32; 4],

    // ── Routen & Zonen ──────────────────────────────────────────
    /// Strichstärke einer Route
    pub route_width: f32,
    /// Strich-Deckkraft für Offense-Routen
    pub route_opacity_offense: f32,
    /// Strich-Deckkraft für Defense-Routen und Zonen
    pub route_opacity_defense: f32,
    /// Eckenradius der Zonen-Rechtecke
    #[serde(default = "default_zone_corner_radius")]
    pub zone_corner_radius: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            yard_line_gap: YARD_LINE_GAP,

            grid_size: GRID_SIZE,
            snap_threshold: SNAP_THRESHOLD,
            snap_animation_ms: SNAP_ANIMATION_MS,

            player_radius: PLAYER_RADIUS,
            player_stroke_width: PLAYER_STROKE_WIDTH,
            color_offense: COLOR_OFFENSE,
            color_defense: COLOR_DEFENSE,

            route_width: ROUTE_WIDTH,
            route_opacity_offense: ROUTE_OPACITY_OFFENSE,
            route_opacity_defense: ROUTE_OPACITY_DEFENSE,
            zone_corner_radius: ZONE_CORNER_RADIUS,
        }
    }
}

/// Serde-Default für `snap_threshold` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_snap_threshold() -> f32 {
    SNAP_THRESHOLD
}

/// Serde-Default für `snap_animation_ms` (Abwärtskompatibilität).
fn default_snap_animation_ms() -> u32 {
    SNAP_ANIMATION_MS
}

/// Serde-Default für `zone_corner_radius` (Abwärtskompatibilität).
fn default_zone_corner_radius() -> f32 {
    ZONE_CORNER_RADIUS
}

impl EditorOptions {
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
            .unwrap_or_else(|_| std::path::PathBuf::from("playbook_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("playbook_editor.toml")
    }

    /// Line of Scrimmage: drei Yard-Linien über dem unteren Feldrand.
    pub fn line_of_scrimmage(&self) -> f32 {
        self.field_height - 3.0 * self.yard_line_gap
    }

    /// Füllfarbe für eine Seite.
    pub fn side_color(&self, side: crate::core::Side) -> [f32; 4] {
        match side {
            crate::core::Side::Offense => self.color_offense,
            crate::core::Side::Defense => self.color_defense,
        }
    }

    /// Routen-Deckkraft für eine Seite.
    pub fn route_opacity(&self, side: crate::core::Side) -> f32 {
        match side {
            crate::core::Side::Offense => self.route_opacity_offense,
            crate::core::Side::Defense => self.route_opacity_defense,
        }
    }
}
