//! Core-Domänentypen: Player, Routen, Zonen und der Play-Container.

pub mod play;
pub mod player;
pub mod route;
pub mod zone;

pub use play::Play;
pub use player::{Player, Side};
pub use route::{parse_path_string, PathSegment, Route};
pub use zone::Zone;
