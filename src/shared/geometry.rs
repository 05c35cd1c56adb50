//! Pure Geometrie-Helfer: Grid-Snap, Segment-Scoring, Zonen-Geometrie.

use crate::core::PathSegment;
use glam::Vec2;

/// Rundet `value` auf das nächste Vielfache von `grid_size`, aber nur wenn
/// die Distanz höchstens `threshold` beträgt; sonst bleibt `value` unverändert.
pub fn snap_to(grid_size: f32, value: f32, threshold: f32) -> f32 {
    let snapped = (value / grid_size).round() * grid_size;
    if (value - snapped).abs() <= threshold {
        snapped
    } else {
        value
    }
}

/// Bestimmt den Index des `LineTo`-Segments mit der kleinsten
/// Manhattan-Distanz zur Position `pos`.
///
/// Der Scan läuft ab Index 1 (der Anker an Index 0 ist nie Kandidat) und
/// überschreibt bei Gleichstand (`<=`), sodass der spätere Index gewinnt.
/// Gibt es kein `LineTo`, ist das Ergebnis `segments.len()` — der
/// Append-Index, der dem Drag-Move signalisiert, ein neues Segment anzuhängen.
pub fn nearest_segment_index(segments: &[PathSegment], pos: Vec2) -> usize {
    let mut best_index = segments.len();
    let mut best_score = f32::INFINITY;

    for (i, segment) in segments.iter().enumerate().skip(1) {
        if let PathSegment::LineTo(p) = segment {
            let score = (pos.x - p.x).abs() + (pos.y - p.y).abs();
            if score <= best_score {
                best_score = score;
                best_index = i;
            }
        }
    }

    best_index
}

/// Leitet Position und Größe einer Zone aus dem Anker (Routen-Endpunkt) und
/// dem kumulativen Drag-Delta ab.
///
/// Breite/Höhe sind die Beträge des Deltas; horizontal ist die Zone am Anker
/// zentriert, vertikal mit dem Faktor 1.1 (statt 2) nach oben versetzt —
/// bewusste Asymmetrie, unverändert übernehmen.
pub fn zone_from_drag(anchor: Vec2, dx: f32, dy: f32) -> (Vec2, Vec2) {
    let width = dx.abs();
    let height = dy.abs();
    let top_left = Vec2::new(anchor.x - width / 2.0, anchor.y - height / 1.1);
    (top_left, Vec2::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_snap_innerhalb_threshold_rastet_ein() {
        // Nächstes Vielfaches von 25 zu 98 ist 100, Distanz 2 ≤ 10
        assert_eq!(snap_to(25.0, 98.0, 10.0), 100.0);
        assert_eq!(snap_to(25.0, 0.0, 10.0), 0.0);
        assert_eq!(snap_to(25.0, -9.0, 10.0), 0.0);
    }

    #[test]
    fn test_snap_ausserhalb_threshold_bleibt_unveraendert() {
        // 112 liegt 12 vom nächsten Vielfachen (100) entfernt → unverändert
        assert_eq!(snap_to(25.0, 112.0, 10.0), 112.0);
    }

    #[test]
    fn test_nearest_segment_gleichstand_gewinnt_spaeterer_index() {
        let segments = vec![
            PathSegment::MoveTo(Vec2::new(0.0, 0.0)),
            PathSegment::LineTo(Vec2::new(10.0, 0.0)),
            PathSegment::LineTo(Vec2::new(20.0, 0.0)),
        ];
        // (15,0): Score 5 für Index 1 und Index 2 → Gleichstand, 2 gewinnt
        assert_eq!(nearest_segment_index(&segments, Vec2::new(15.0, 0.0)), 2);
        // Eindeutig näher an Index 1
        assert_eq!(nearest_segment_index(&segments, Vec2::new(11.0, 0.0)), 1);
    }

    #[test]
    fn test_nearest_segment_ohne_lineto_liefert_append_index() {
        let segments = vec![PathSegment::MoveTo(Vec2::new(5.0, 5.0))];
        assert_eq!(nearest_segment_index(&segments, Vec2::new(5.0, 5.0)), 1);
    }

    #[test]
    fn test_zone_from_drag_geometrie() {
        let (pos, size) = zone_from_drag(Vec2::new(100.0, 100.0), 40.0, -20.0);
        assert_relative_eq!(size.x, 40.0);
        assert_relative_eq!(size.y, 20.0);
        assert_relative_eq!(pos.x, 80.0);
        // 100 - 20/1.1 = 81.8181…
        assert_relative_eq!(pos.y, 81.81818, epsilon = 1e-4);
    }
}
