//! Routen: geordnete Pfad-Segmente ausgehend von einem Player.

use super::{Side, Zone};
use anyhow::{bail, Context};
use glam::Vec2;

/// Ein Element des Routen-Pfads.
///
/// Invariante: Segment 0 ist immer `MoveTo` und folgt der aktuellen
/// Player-Position; alle weiteren Segmente sind `LineTo` in Zeichenreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Pfad-Anker (genau einmal, immer an Index 0)
    MoveTo(Vec2),
    /// Linienpunkt
    LineTo(Vec2),
}

impl PathSegment {
    /// Koordinaten des Segments.
    pub fn point(&self) -> Vec2 {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
        }
    }
}

/// Eine Route: Pfad vom Player weg, optional mit Coverage-Zone (nur Defense).
#[derive(Debug, Clone)]
pub struct Route {
    /// Pfad-Segmente; `segments[0]` ist immer `MoveTo`
    segments: Vec<PathSegment>,
    /// Seite der Route (vom besitzenden Player kopiert)
    pub side: Side,
    /// Strichfarbe (RGBA, von der Player-Füllung übernommen)
    pub stroke: [f32; 4],
    /// Strich-Deckkraft (seitenabhängig)
    pub stroke_opacity: f32,
    /// Coverage-Zone der Route (0 oder 1, nur bei Defense sinnvoll)
    pub zone: Option<Zone>,
}

impl Route {
    /// Erstellt eine neue Route als einzelnes `MoveTo` am Startpunkt.
    pub fn new(start: Vec2, side: Side, stroke: [f32; 4], stroke_opacity: f32) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo(start)],
            side,
            stroke,
            stroke_opacity,
            zone: None,
        }
    }

    /// Erstellt eine Route aus bereits geparsten Segmenten.
    ///
    /// Schlägt fehl wenn die Segmentliste leer ist oder nicht mit `MoveTo`
    /// beginnt bzw. weitere `MoveTo` enthält.
    pub fn from_segments(
        segments: Vec<PathSegment>,
        side: Side,
        stroke: [f32; 4],
        stroke_opacity: f32,
    ) -> anyhow::Result<Self> {
        match segments.first() {
            Some(PathSegment::MoveTo(_)) => {}
            _ => bail!("Route muss mit MoveTo beginnen"),
        }
        if segments[1..]
            .iter()
            .any(|s| matches!(s, PathSegment::MoveTo(_)))
        {
            bail!("Route darf nur ein MoveTo enthalten");
        }
        Ok(Self {
            segments,
            side,
            stroke,
            stroke_opacity,
            zone: None,
        })
    }

    /// Read-only Sicht auf die Segmente.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Anzahl der Segmente (inklusive Anker).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Koordinaten des letzten Segments (Zonen-Anker).
    pub fn last_point(&self) -> Vec2 {
        // segments ist nie leer (Invariante: Anker an Index 0)
        self.segments[self.segments.len() - 1].point()
    }

    /// Verschiebt den Pfad-Anker (Segment 0), ohne die Form zu verändern.
    pub fn move_start(&mut self, position: Vec2) {
        self.segments[0] = PathSegment::MoveTo(position);
    }

    /// Setzt den Pfad auf Anker + genau ein `LineTo` — der initiale Strich
    /// beim Routen-Zeichnen waechst/schrumpft mit dem Pointer.
    pub fn set_initial_segment(&mut self, position: Vec2) {
        self.segments.truncate(1);
        self.segments.push(PathSegment::LineTo(position));
    }

    /// Überschreibt das Segment an `index` als `LineTo` bzw. hängt ein neues
    /// an, wenn `index` genau hinter dem letzten Segment liegt.
    ///
    /// Index 0 (der Anker) wird nie angefasst; Indizes jenseits des
    /// Append-Index sind ein No-op. Dieser Guard schützt Segment 0 auch bei
    /// einem nicht gesetzten Drag-Zustand.
    pub fn set_or_append_line_to(&mut self, index: usize, position: Vec2) {
        if index == 0 {
            return;
        }
        if index < self.segments.len() {
            self.segments[index] = PathSegment::LineTo(position);
        } else if index == self.segments.len() {
            self.segments.push(PathSegment::LineTo(position));
        }
    }

    /// Formatiert den Pfad als SVG-artigen String (`M100,625L150,500`).
    pub fn to_path_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            let (letter, p) = match segment {
                PathSegment::MoveTo(p) => ('M', p),
                PathSegment::LineTo(p) => ('L', p),
            };
            out.push(letter);
            out.push_str(&format!("{},{}", p.x, p.y));
        }
        out
    }
}

/// Parst einen SVG-artigen Pfad-String (`M`/`L`, Komma oder Whitespace als
/// Trenner) in eine Segmentliste.
pub fn parse_path_string(path: &str) -> anyhow::Result<Vec<PathSegment>> {
    let mut segments = Vec::new();
    let mut rest = path.trim();

    while !rest.is_empty() {
        let letter = rest.chars().next().context("leerer Pfad-String")?;
        rest = &rest[letter.len_utf8()..];

        let end = rest
            .find(|c: char| c == 'M' || c == 'L')
            .unwrap_or(rest.len());
        let (coords, tail) = rest.split_at(end);
        rest = tail;

        let mut numbers = coords
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());
        let x: f32 = numbers
            .next()
            .with_context(|| format!("fehlende x-Koordinate nach '{}'", letter))?
            .parse()
            .with_context(|| format!("ungültige x-Koordinate nach '{}'", letter))?;
        let y: f32 = numbers
            .next()
            .with_context(|| format!("fehlende y-Koordinate nach '{}'", letter))?
            .parse()
            .with_context(|| format!("ungültige y-Koordinate nach '{}'", letter))?;
        if numbers.next().is_some() {
            bail!("zu viele Koordinaten nach '{}'", letter);
        }

        let point = Vec2::new(x, y);
        match letter {
            'M' => segments.push(PathSegment::MoveTo(point)),
            'L' => segments.push(PathSegment::LineTo(point)),
            other => bail!("unbekanntes Pfad-Kommando '{}'", other),
        }
    }

    if segments.is_empty() {
        bail!("leerer Pfad-String");
    }
    Ok(segments)
}
