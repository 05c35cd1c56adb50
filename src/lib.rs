//! Playbook Editor Library.
//! Editor-Kern für American-Football-Spielzüge als Library exportiert
//! für Tests und Wiederverwendung durch einen Host-Renderer.

pub mod app;
pub mod core;
pub mod play_io;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, Gesture, Mode, ViewState};
pub use core::{parse_path_string, PathSegment, Play, Player, Route, Side, Zone};
pub use play_io::{PlayData, PlayerEntry, ZoneEntry};
pub use shared::{EditorOptions, PlayScene, SceneShape, SnapAnimation};
