//! Rendering surface the board controller draws on.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Style applied to tiles when a round ends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Highlight {
    /// The human completed this triple.
    Won,
    /// The computer completed this triple, or the round was drawn.
    Lost,
}

impl Highlight {
    /// CSS class name for this highlight.
    pub fn class_name(self) -> &'static str {
        self.into()
    }
}

/// Something that owns one visual handle per tile.
///
/// The controller only ever refers to tiles by [`Position`]; the surface
/// maps positions to whatever it renders (DOM elements, terminal cells).
pub trait Surface {
    /// Removes every tile.
    fn clear(&mut self);

    /// Appends an empty tile for `position`.
    ///
    /// Activating the tile should end up in
    /// [`BoardController::mark_tile`](crate::BoardController::mark_tile)
    /// for the human player.
    fn add_tile(&mut self, position: Position);

    /// Replaces the tile's content with a player marker.
    fn show_marker(&mut self, position: Position, marker: &str);

    /// Adds a terminal-state style to the tile.
    fn highlight(&mut self, position: Position, highlight: Highlight);
}
