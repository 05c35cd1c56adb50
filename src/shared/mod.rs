//! Gemeinsame Bausteine: Optionen, Geometrie-Helfer, Szenen-Vertrag.

pub mod geometry;
pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{PlayScene, SceneShape, SnapAnimation};
