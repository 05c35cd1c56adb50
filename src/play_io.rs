//! JSON-Wire-Format für Spielzüge: Export aus dem und Import in den AppState.
//!
//! Das Format trägt zwei Seiten-Arrays (`offense`, `defense`) mit je einem
//! Eintrag pro Player. Routen werden als SVG-artiger Pfad-String kodiert
//! (`"M0,0L10,0"`), Zonen als achsenparalleles Rechteck.

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize};

use crate::app::state::SceneNode;
use crate::app::AppState;
use crate::core::{parse_path_string, Route, Side, Zone};

/// Serialisierte Zone eines Defense-Players.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneEntry {
    /// X der oberen linken Ecke
    pub x: f32,
    /// Y der oberen linken Ecke
    pub y: f32,
    /// Breite
    pub width: f32,
    /// Höhe
    pub height: f32,
}

/// Serialisierter Player-Eintrag einer Seite.
///
/// `cx`/`cy`/`side` sind beim Import Pflicht — unvollständige Einträge
/// werden mit Warnung übersprungen. Für die Seiten-Zuordnung maßgeblich
/// ist das Array, in dem der Eintrag steht, nicht der `side`-String.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerEntry {
    /// Token-Mittelpunkt X
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cx: Option<f32>,
    /// Token-Mittelpunkt Y
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cy: Option<f32>,
    /// Seite als String (informativ)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Route als Pfad-String, falls vorhanden
    #[serde(
        default,
        deserialize_with = "route_or_sentinel",
        skip_serializing_if = "Option::is_none"
    )]
    pub route: Option<String>,
    /// Zone der Route, falls vorhanden
    #[serde(
        default,
        deserialize_with = "zone_or_sentinel",
        skip_serializing_if = "Option::is_none"
    )]
    pub zone: Option<ZoneEntry>,
}

/// Akzeptiert den Leerstring-Sentinel (`"route": ""`) als "keine Route".
fn route_or_sentinel<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Akzeptiert den Leerstring-Sentinel (`"zone": ""`) als "keine Zone".
fn zone_or_sentinel<'de, D>(deserializer: D) -> Result<Option<ZoneEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Zone(ZoneEntry),
        Sentinel(String),
    }
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Zone(zone)) => Some(zone),
        Some(Raw::Sentinel(_)) | None => None,
    })
}

/// Wurzel des Spielzug-Dokuments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayData {
    /// Offense-Einträge
    #[serde(default)]
    pub offense: Vec<PlayerEntry>,
    /// Defense-Einträge
    #[serde(default)]
    pub defense: Vec<PlayerEntry>,
}

/// Rohform des Dokuments: Einträge bleiben zunächst ungetypt, damit ein
/// einzelner fehlerhafter Eintrag nicht die ganze Datei scheitern lässt.
#[derive(Deserialize)]
struct RawPlayData {
    #[serde(default)]
    offense: Vec<serde_json::Value>,
    #[serde(default)]
    defense: Vec<serde_json::Value>,
}

fn lenient_entries(values: Vec<serde_json::Value>, label: &str) -> Vec<PlayerEntry> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Import: fehlerhafter {}-Eintrag übersprungen: {}", label, err);
                None
            }
        })
        .collect()
}

/// Parst ein Spielzug-Dokument fehlertolerant.
///
/// Nur ein unlesbares Dokument schlägt fehl; fehlerhafte Einzeleinträge
/// werden mit Warnung verworfen, die übrigen Einträge der Seite bleiben
/// erhalten.
pub fn parse_play_document(raw: &str) -> anyhow::Result<PlayData> {
    let raw: RawPlayData =
        serde_json::from_str(raw).context("Dokument ist kein gültiges JSON-Objekt")?;
    Ok(PlayData {
        offense: lenient_entries(raw.offense, "Offense"),
        defense: lenient_entries(raw.defense, "Defense"),
    })
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Offense => "offense",
        Side::Defense => "defense",
    }
}

fn entry_for(state: &AppState, player_id: u64) -> Option<PlayerEntry> {
    let player = state.play.player(player_id)?;
    let route = player.route.as_ref();
    Some(PlayerEntry {
        cx: Some(player.position.x),
        cy: Some(player.position.y),
        side: Some(side_label(player.side).to_string()),
        route: route.map(|r| r.to_path_string()),
        zone: route.and_then(|r| r.zone.as_ref()).map(|z| ZoneEntry {
            x: z.position.x,
            y: z.position.y,
            width: z.size.x,
            height: z.size.y,
        }),
    })
}

/// Exportiert den aktuellen Spielzug in das Wire-Format.
///
/// Die Einträge folgen der Einfüge-Reihenfolge der Player.
pub fn export_play(state: &AppState) -> PlayData {
    let mut data = PlayData::default();
    for player in state.play.players() {
        let Some(entry) = entry_for(state, player.id) else {
            continue;
        };
        match player.side {
            Side::Offense => data.offense.push(entry),
            Side::Defense => data.defense.push(entry),
        }
    }
    data
}

fn import_side(state: &mut AppState, side: Side, entries: &[PlayerEntry]) {
    // Bestehende Player dieser Seite samt Kaskade entfernen
    let ids = state.play.player_ids_on_side(side);
    for id in ids {
        crate::app::handlers::editing::remove_player(state, id);
    }

    for entry in entries {
        let (Some(cx), Some(cy)) = (entry.cx, entry.cy) else {
            log::warn!("Import: Eintrag ohne Position übersprungen ({:?})", side);
            continue;
        };
        if entry.side.as_deref().map_or(true, str::is_empty) {
            log::warn!("Import: Eintrag ohne Seiten-Angabe übersprungen ({:?})", side);
            continue;
        }
        let position = Vec2::new(cx, cy);
        let fill = state.options.side_color(side);
        let opacity = state.options.route_opacity(side);

        let route = entry.route.as_deref().and_then(|raw| {
            match parse_path_string(raw)
                .and_then(|segments| Route::from_segments(segments, side, fill, opacity))
            {
                Ok(route) => Some(route),
                Err(err) => {
                    log::warn!("Import: Route verworfen ({}): {:#}", raw, err);
                    None
                }
            }
        });
        let mut route = match (route, entry.zone) {
            (Some(mut route), Some(zone)) => {
                route.zone = Some(Zone::new(
                    Vec2::new(zone.x, zone.y),
                    Vec2::new(zone.width, zone.height),
                    state.options.color_defense,
                    state.options.route_opacity(Side::Defense),
                ));
                Some(route)
            }
            (route, zone) => {
                if route.is_none() && zone.is_some() {
                    // Zone ohne Route hat keinen Besitzer
                    log::warn!("Import: Zone ohne Route verworfen ({:?})", side);
                }
                route
            }
        };

        let id = state.play.add_player(position, side, fill);
        let has_zone = route.as_ref().is_some_and(|r| r.zone.is_some());
        let has_route = route.is_some();
        if let Some(route) = route.take() {
            state.play.replace_route(id, route);
        }

        // Zeichenreihenfolge je Eintrag: Zone, Route, Token
        if has_zone {
            state.view.push_node(SceneNode::ZoneRect(id));
        }
        if has_route {
            state.view.push_node(SceneNode::RouteStroke(id));
        }
        state.view.push_node(SceneNode::PlayerToken(id));
    }
}

/// Übernimmt ein Spielzug-Dokument in den Zustand.
///
/// Jede Seite wird nur ersetzt, wenn ihr Array mindestens einen Eintrag
/// trägt; ein leeres Array lässt die Seite unverändert. Nach dem Aufbau
/// werden die Token wieder über alle Striche gehoben.
pub fn apply_play_data(state: &mut AppState, data: &PlayData) {
    if !data.offense.is_empty() {
        import_side(state, Side::Offense, &data.offense);
    }
    if !data.defense.is_empty() {
        import_side(state, Side::Defense, &data.defense);
    }
    state.view.players_to_front();
    log::debug!(
        "Spielzug übernommen: {} Offense, {} Defense",
        data.offense.len(),
        data.defense.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::editing;

    #[test]
    fn test_export_trennt_die_seiten() {
        let mut state = AppState::new();
        editing::add_player(&mut state, Vec2::new(100.0, 700.0), Side::Offense);
        editing::add_player(&mut state, Vec2::new(200.0, 500.0), Side::Defense);

        let data = export_play(&state);
        assert_eq!(data.offense.len(), 1);
        assert_eq!(data.defense.len(), 1);
        assert_eq!(data.offense[0].cx, Some(100.0));
        assert_eq!(data.defense[0].side.as_deref(), Some("defense"));
    }

    #[test]
    fn test_import_ersetzt_nur_nicht_leere_seiten() {
        let mut state = AppState::new();
        editing::add_player(&mut state, Vec2::new(100.0, 700.0), Side::Offense);
        editing::add_player(&mut state, Vec2::new(200.0, 500.0), Side::Defense);

        let data = PlayData {
            offense: vec![PlayerEntry {
                cx: Some(300.0),
                cy: Some(650.0),
                side: Some("offense".to_string()),
                ..Default::default()
            }],
            defense: vec![],
        };
        apply_play_data(&mut state, &data);

        let offense = state.play.player_ids_on_side(Side::Offense);
        let defense = state.play.player_ids_on_side(Side::Defense);
        assert_eq!(offense.len(), 1);
        assert_eq!(defense.len(), 1);
        let imported = state.play.player(offense[0]).unwrap();
        assert_eq!(imported.position, Vec2::new(300.0, 650.0));
        // Defense blieb unangetastet
        assert_eq!(
            state.play.player(defense[0]).unwrap().position,
            Vec2::new(200.0, 500.0)
        );
    }

    #[test]
    fn test_import_ueberspringt_unvollstaendige_eintraege() {
        let mut state = AppState::new();
        let data = PlayData {
            offense: vec![
                PlayerEntry {
                    cx: Some(100.0),
                    cy: Some(700.0),
                    side: Some("offense".to_string()),
                    ..Default::default()
                },
                // ohne Position
                PlayerEntry {
                    side: Some("offense".to_string()),
                    ..Default::default()
                },
                // ohne Seiten-Angabe
                PlayerEntry {
                    cx: Some(200.0),
                    cy: Some(700.0),
                    ..Default::default()
                },
            ],
            defense: vec![],
        };
        apply_play_data(&mut state, &data);
        assert_eq!(state.play.player_count(), 1);
    }

    #[test]
    fn test_import_verwirft_unlesbare_route() {
        let mut state = AppState::new();
        let data = PlayData {
            offense: vec![PlayerEntry {
                cx: Some(100.0),
                cy: Some(700.0),
                side: Some("offense".to_string()),
                route: Some("Q1,2,3".to_string()),
                ..Default::default()
            }],
            defense: vec![],
        };
        apply_play_data(&mut state, &data);

        let ids = state.play.player_ids_on_side(Side::Offense);
        assert_eq!(ids.len(), 1);
        assert!(state.play.route(ids[0]).is_none());
    }

    #[test]
    fn test_parse_akzeptiert_leerstring_sentinels() {
        // Exportform des Altbestands: Player ohne Route tragen "" statt null
        let data = parse_play_document(
            r#"{
                "offense": [
                    { "cx": 100, "cy": 625, "side": "offense", "route": "", "zone": "" }
                ],
                "defense": []
            }"#,
        )
        .expect("Dokument muss parsbar sein");

        assert_eq!(data.offense.len(), 1);
        assert_eq!(data.offense[0].cx, Some(100.0));
        assert!(data.offense[0].route.is_none());
        assert!(data.offense[0].zone.is_none());
    }

    #[test]
    fn test_parse_ueberspringt_fehlerhaft_getypte_eintraege() {
        let data = parse_play_document(
            r#"{
                "offense": [
                    { "cx": "kaputt", "cy": 625, "side": "offense" },
                    { "cx": 200, "cy": 625, "side": "offense" }
                ]
            }"#,
        )
        .expect("Dokument muss parsbar sein");

        // Der fehlerhaft getypte Eintrag fällt weg, der Rest der Seite bleibt
        assert_eq!(data.offense.len(), 1);
        assert_eq!(data.offense[0].cx, Some(200.0));
    }

    #[test]
    fn test_parse_lehnt_unlesbares_dokument_ab() {
        assert!(parse_play_document("{ offense: [").is_err());
        assert!(parse_play_document("42").is_err());
    }

    #[test]
    fn test_roundtrip_erhaelt_route_und_zone() {
        let mut state = AppState::new();
        let id = editing::add_player(&mut state, Vec2::new(400.0, 300.0), Side::Defense);
        editing::create_route(&mut state, id);
        {
            let route = state.play.route_mut(id).unwrap();
            route.set_initial_segment(Vec2::new(400.0, 200.0));
            route.zone = Some(Zone::new(
                Vec2::new(350.0, 120.0),
                Vec2::new(100.0, 80.0),
                state.options.color_defense,
                0.75,
            ));
        }

        let data = export_play(&state);
        assert_eq!(data.defense[0].route.as_deref(), Some("M400,300L400,200"));

        let mut restored = AppState::new();
        apply_play_data(&mut restored, &data);
        let ids = restored.play.player_ids_on_side(Side::Defense);
        let route = restored.play.route(ids[0]).unwrap();
        assert_eq!(route.segment_count(), 2);
        let zone = route.zone.as_ref().unwrap();
        assert_eq!(zone.position, Vec2::new(350.0, 120.0));
        assert_eq!(zone.size, Vec2::new(100.0, 80.0));
    }
}
