//! Baut die deklarative Play-Szene aus dem AppState.
//!
//! Läuft die Zeichenreihenfolge des ViewState ab und übersetzt jeden
//! Knoten in ein Shape. Knoten, deren Entity inzwischen fehlt, werden
//! still übersprungen.

use super::state::SceneNode;
use super::AppState;
use crate::shared::{PlayScene, SceneShape};

/// Erzeugt die Shape-Liste eines Frames in Zeichenreihenfolge.
pub fn build(state: &AppState) -> PlayScene {
    let mut shapes = Vec::with_capacity(state.view.draw_order.len());

    for node in &state.view.draw_order {
        match *node {
            SceneNode::PlayerToken(id) => {
                if let Some(player) = state.play.player(id) {
                    shapes.push(SceneShape::Circle {
                        center: player.position,
                        radius: state.options.player_radius,
                        fill: player.fill,
                        stroke_width: state.options.player_stroke_width,
                    });
                }
            }
            SceneNode::RouteStroke(id) => {
                if let Some(route) = state.play.route(id) {
                    shapes.push(SceneShape::Path {
                        segments: route.segments().to_vec(),
                        stroke: route.stroke,
                        stroke_width: state.options.route_width,
                        stroke_opacity: route.stroke_opacity,
                    });
                }
            }
            SceneNode::ZoneRect(id) => {
                if let Some(zone) = state.play.route(id).and_then(|r| r.zone.as_ref()) {
                    shapes.push(SceneShape::Rect {
                        position: zone.position,
                        size: zone.size,
                        corner_radius: state.options.zone_corner_radius,
                        fill: zone.fill,
                        fill_opacity: zone.fill_opacity,
                    });
                }
            }
        }
    }

    PlayScene { shapes }
}
