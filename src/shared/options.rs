//! Zentrale Konfiguration für den Turnout-Topologie-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Start-Skalierung der Ansicht (Pixel pro Szeneneinheit).
pub const INITIAL_VIEW_SCALE: f32 = 0.5;
/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 8.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Toleranz in Screen-Pixeln.
pub const SELECTION_PICK_TOLERANCE_PX: f32 = 4.0;
/// Breite des Selektionsrahmens in Screen-Pixeln.
pub const SELECTION_FRAME_WIDTH_PX: f32 = 2.0;
/// Farbe des Selektionsrahmens (RGBA: Blau).
pub const SELECTION_COLOR: [f32; 4] = [0.1, 0.4, 1.0, 1.0];

// ── Zeichnung ───────────────────────────────────────────────────────

/// Strich- und Füllfarbe des Symbols (RGBA: Schwarz).
pub const SHAPE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hintergrund der Szenenfläche (RGBA: Weiß).
pub const SCENE_BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `turnout_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Zeichnung ───────────────────────────────────────────────
    /// Strich- und Füllfarbe des Symbols
    pub shape_color: [f32; 4],
    /// Hintergrund der Szenenfläche
    pub scene_background_color: [f32; 4],

    // ── Selektion ───────────────────────────────────────────────
    /// Farbe des Selektionsrahmens
    pub selection_color: [f32; 4],
    /// Breite des Selektionsrahmens in Screen-Pixeln
    pub selection_frame_width_px: f32,
    /// Pick-Toleranz für Klick-Selektion in Screen-Pixeln
    pub selection_pick_tolerance_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Skalierung der Ansicht beim Start und nach "Reset Camera"
    #[serde(default = "default_initial_view_scale")]
    pub initial_view_scale: f32,
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            shape_color: SHAPE_COLOR,
            scene_background_color: SCENE_BACKGROUND_COLOR,

            selection_color: SELECTION_COLOR,
            selection_frame_width_px: SELECTION_FRAME_WIDTH_PX,
            selection_pick_tolerance_px: SELECTION_PICK_TOLERANCE_PX,

            initial_view_scale: INITIAL_VIEW_SCALE,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

/// Serde-Default für `initial_view_scale` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_initial_view_scale() -> f32 {
    INITIAL_VIEW_SCALE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
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

    /// Prüft Zoom-Grenzen, Zoom-Schritte und Start-Skalierung.
    pub fn validate(&self) -> anyhow::Result<()> {
        let positive = |value: f32| value.is_finite() && value > 0.0;

        anyhow::ensure!(
            positive(self.camera_zoom_min) && positive(self.camera_zoom_max),
            "Zoom-Grenzen müssen endlich und positiv sein (min={}, max={})",
            self.camera_zoom_min,
            self.camera_zoom_max
        );
        anyhow::ensure!(
            self.camera_zoom_min <= self.camera_zoom_max,
            "camera_zoom_min ({}) größer als camera_zoom_max ({})",
            self.camera_zoom_min,
            self.camera_zoom_max
        );
        anyhow::ensure!(
            self.camera_zoom_step.is_finite() && self.camera_zoom_step > 1.0,
            "camera_zoom_step muss größer als 1 sein ({})",
            self.camera_zoom_step
        );
        anyhow::ensure!(
            self.camera_scroll_zoom_step.is_finite() && self.camera_scroll_zoom_step > 1.0,
            "camera_scroll_zoom_step muss größer als 1 sein ({})",
            self.camera_scroll_zoom_step
        );
        anyhow::ensure!(
            positive(self.initial_view_scale),
            "initial_view_scale muss endlich und positiv sein ({})",
            self.initial_view_scale
        );
        Ok(())
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
            .unwrap_or_else(|_| std::path::PathBuf::from("turnout_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("turnout_editor.toml")
    }

    /// Start-Zoom innerhalb der konfigurierten Zoom-Grenzen.
    ///
    /// Panikfrei auch bei vertauschten Grenzen: dann gewinnt `camera_zoom_max`.
    pub fn clamped_initial_view_scale(&self) -> f32 {
        self.initial_view_scale
            .max(self.camera_zoom_min)
            .min(self.camera_zoom_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "turnout_editor_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = temp_path("save_load");
        let mut options = EditorOptions::default();
        options.initial_view_scale = 0.75;
        options.selection_color = [1.0, 0.0, 0.0, 1.0];

        options.save_to_file(&path).expect("Speichern sollte klappen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let loaded = EditorOptions::load_from_file(&temp_path("does_not_exist"));
        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = temp_path("broken");
        std::fs::write(&path, "shape_color = \"schwarz\"").expect("Schreiben sollte klappen");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, EditorOptions::default());
    }

    #[test]
    fn missing_initial_scale_uses_serde_default() {
        let full = toml::to_string_pretty(&EditorOptions::default()).expect("serialisierbar");
        let content = full
            .lines()
            .filter(|line| !line.starts_with("initial_view_scale"))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: EditorOptions = toml::from_str(&content).expect("parsebar");
        assert_eq!(parsed.initial_view_scale, INITIAL_VIEW_SCALE);
    }

    #[test]
    fn initial_scale_is_clamped_to_zoom_range() {
        let options = EditorOptions {
            initial_view_scale: 100.0,
            ..EditorOptions::default()
        };
        assert_eq!(options.clamped_initial_view_scale(), CAMERA_ZOOM_MAX);
    }

    #[test]
    fn inverted_zoom_limits_fall_back_to_defaults() {
        let path = temp_path("inverted_limits");
        let options = EditorOptions {
            camera_zoom_min: 5.0,
            camera_zoom_max: 1.0,
            ..EditorOptions::default()
        };
        options.save_to_file(&path).expect("Speichern sollte klappen");

        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, EditorOptions::default());
        let state = crate::app::AppState::with_options(loaded);
        assert_eq!(state.view.camera.zoom, INITIAL_VIEW_SCALE);
    }

    #[test]
    fn validate_rejects_non_finite_and_flat_steps() {
        assert!(EditorOptions::default().validate().is_ok());

        let nan_limit = EditorOptions {
            camera_zoom_max: f32::NAN,
            ..EditorOptions::default()
        };
        assert!(nan_limit.validate().is_err());

        let flat_step = EditorOptions {
            camera_zoom_step: 1.0,
            ..EditorOptions::default()
        };
        assert!(flat_step.validate().is_err());

        let zero_scale = EditorOptions {
            initial_view_scale: 0.0,
            ..EditorOptions::default()
        };
        assert!(zero_scale.validate().is_err());
    }

    #[test]
    fn clamped_initial_scale_does_not_panic_on_inverted_limits() {
        let options = EditorOptions {
            camera_zoom_min: 5.0,
            camera_zoom_max: 1.0,
            ..EditorOptions::default()
        };
        assert_eq!(options.clamped_initial_view_scale(), 1.0);
    }
}
