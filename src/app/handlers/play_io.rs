//! Handler für Spielzug-Dateioperationen (JSON-Import/-Export).

use anyhow::Context;

use crate::app::AppState;
use crate::play_io;

/// Lädt einen Spielzug aus einer JSON-Datei in den aktuellen Zustand.
///
/// Leere Seiten-Arrays lassen die jeweilige Seite unangetastet; fehlerhafte
/// Einzeleinträge werden übersprungen, nur unlesbare Dateien schlagen fehl.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Spielzug-Datei nicht lesbar: {}", path))?;
    let data = play_io::parse_play_document(&raw)
        .with_context(|| format!("Spielzug-Datei ist kein gültiges JSON: {}", path))?;
    play_io::apply_play_data(state, &data);
    log::info!("Spielzug geladen: {}", path);
    Ok(())
}

/// Speichert den aktuellen Spielzug als JSON-Datei.
pub fn save(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let data = play_io::export_play(state);
    let raw = serde_json::to_string_pretty(&data).context("Spielzug nicht serialisierbar")?;
    std::fs::write(&path, raw)
        .with_context(|| format!("Spielzug-Datei nicht schreibbar: {}", path))?;
    log::info!("Spielzug gespeichert: {}", path);
    Ok(())
}
