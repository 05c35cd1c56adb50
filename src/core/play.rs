//! Der Play-Container: alle Player eines Spielzugs mit ihren Routen/Zonen.

use super::{Player, Route, Side};
use glam::Vec2;
use indexmap::IndexMap;

/// Container für den gesamten Spielzug.
///
/// Die Player sind in Einfüge-Reihenfolge gehalten (deterministischer
/// Export und stabile Stacking-Reihenfolge). Routen und Zonen leben als
/// Besitz-Kanten in den Playern; Kaskaden-Entfernung folgt daraus direkt.
#[derive(Debug, Clone, Default)]
pub struct Play {
    /// Alle Player, indexiert nach ihrer ID
    players: IndexMap<u64, Player>,
    /// Nächste zu vergebende Player-ID
    next_id: u64,
}

impl Play {
    /// Erstellt einen leeren Spielzug.
    pub fn new() -> Self {
        Self {
            players: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Fügt einen Player hinzu und vergibt seine ID.
    pub fn add_player(&mut self, position: Vec2, side: Side, fill: [f32; 4]) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.players.insert(id, Player::new(id, position, side, fill));
        id
    }

    /// Entfernt einen Player mitsamt Route und Zone.
    ///
    /// Reihenfolge der Kaskade (Zone, dann Route, dann Player) ist für die
    /// Draw-Order-Pflege im View-State relevant; die Daten selbst hängen als
    /// Besitz-Kanten am Player und verschwinden mit ihm.
    pub fn remove_player(&mut self, player_id: u64) -> Option<Player> {
        self.players.shift_remove(&player_id)
    }

    /// Read-only Zugriff auf einen Player.
    pub fn player(&self, player_id: u64) -> Option<&Player> {
        self.players.get(&player_id)
    }

    /// Mutable Zugriff auf einen Player.
    pub fn player_mut(&mut self, player_id: u64) -> Option<&mut Player> {
        self.players.get_mut(&player_id)
    }

    /// Iterator über alle Player in Einfüge-Reihenfolge.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// IDs aller Player einer Seite, in Einfüge-Reihenfolge.
    pub fn player_ids_on_side(&self, side: Side) -> Vec<u64> {
        self.players
            .values()
            .filter(|p| p.side == side)
            .map(|p| p.id)
            .collect()
    }

    /// Anzahl der Player.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Setzt die Position eines Players und zieht den Routen-Anker mit.
    ///
    /// Hält die Invariante "Segment 0 entspricht der Player-Position" nach
    /// jedem Move/Snap aufrecht; die übrige Routenform bleibt unberührt.
    pub fn move_player(&mut self, player_id: u64, position: Vec2) -> bool {
        let Some(player) = self.players.get_mut(&player_id) else {
            return false;
        };
        player.position = position;
        if let Some(route) = player.route.as_mut() {
            route.move_start(position);
        }
        true
    }

    /// Ersetzt die Route eines Players (Kaskade: alte Zone und Route fallen weg).
    /// Gibt die verdrängte Route zurück, falls eine existierte.
    pub fn replace_route(&mut self, player_id: u64, route: Route) -> Option<Route> {
        let player = self.players.get_mut(&player_id)?;
        player.route.replace(route)
    }

    /// Route eines Players (read-only).
    pub fn route(&self, player_id: u64) -> Option<&Route> {
        self.players.get(&player_id)?.route.as_ref()
    }

    /// Route eines Players (mutable).
    pub fn route_mut(&mut self, player_id: u64) -> Option<&mut Route> {
        self.players.get_mut(&player_id)?.route.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PathSegment, Zone};

    const FILL: [f32; 4] = [0.89, 0.2, 0.2, 1.0];

    #[test]
    fn test_add_und_remove_player() {
        let mut play = Play::new();
        let a = play.add_player(Vec2::new(100.0, 625.0), Side::Offense, FILL);
        let b = play.add_player(Vec2::new(100.0, 575.0), Side::Defense, FILL);

        assert_eq!(play.player_count(), 2);
        assert_ne!(a, b);

        let removed = play.remove_player(a);
        assert!(removed.is_some());
        assert!(play.player(a).is_none());
        assert_eq!(play.player_count(), 1);

        // Entfernen eines bereits entfernten Players ist ein No-op
        assert!(play.remove_player(a).is_none());
    }

    #[test]
    fn test_move_player_zieht_routen_anker_mit() {
        let mut play = Play::new();
        let id = play.add_player(Vec2::new(100.0, 625.0), Side::Offense, FILL);
        play.replace_route(id, Route::new(Vec2::new(100.0, 625.0), Side::Offense, FILL, 1.0));
        play.route_mut(id)
            .unwrap()
            .set_or_append_line_to(1, Vec2::new(150.0, 500.0));

        assert!(play.move_player(id, Vec2::new(120.0, 640.0)));

        let route = play.route(id).unwrap();
        assert_eq!(
            route.segments()[0],
            PathSegment::MoveTo(Vec2::new(120.0, 640.0))
        );
        // Form hinter dem Anker bleibt unverändert
        assert_eq!(
            route.segments()[1],
            PathSegment::LineTo(Vec2::new(150.0, 500.0))
        );
    }

    #[test]
    fn test_replace_route_verdraengt_alte_route_samt_zone() {
        let mut play = Play::new();
        let id = play.add_player(Vec2::new(300.0, 575.0), Side::Defense, FILL);

        let mut first = Route::new(Vec2::new(300.0, 575.0), Side::Defense, FILL, 0.75);
        first.zone = Some(Zone::empty_at(Vec2::new(300.0, 575.0), FILL, 0.75));
        assert!(play.replace_route(id, first).is_none());

        let second = Route::new(Vec2::new(300.0, 575.0), Side::Defense, FILL, 0.75);
        let displaced = play.replace_route(id, second).expect("alte Route erwartet");
        assert!(displaced.zone.is_some());

        // Die neue Route startet ohne Zone
        assert!(play.route(id).unwrap().zone.is_none());
    }

    #[test]
    fn test_player_ids_on_side_in_einfuege_reihenfolge() {
        let mut play = Play::new();
        let o1 = play.add_player(Vec2::ZERO, Side::Offense, FILL);
        let d1 = play.add_player(Vec2::ZERO, Side::Defense, FILL);
        let o2 = play.add_player(Vec2::ZERO, Side::Offense, FILL);

        assert_eq!(play.player_ids_on_side(Side::Offense), vec![o1, o2]);
        assert_eq!(play.player_ids_on_side(Side::Defense), vec![d1]);
    }
}
