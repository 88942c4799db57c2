//! Terminal rendering surface: remembers what each tile shows.

use naive_tictactoe::{Highlight, Position, Surface};
use std::collections::BTreeMap;

/// Content and style of one tile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tile {
    /// Marker placed on the tile, if taken.
    pub marker: Option<String>,
    /// Round-end style, if any.
    pub highlight: Option<Highlight>,
}

/// Tile state that `ui::draw` turns into widgets each frame.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    tiles: BTreeMap<Position, Tile>,
}

impl TerminalSurface {
    /// Returns the tile at `position`, if it was laid out.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    /// Number of tiles laid out.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.tiles.clear();
    }

    fn add_tile(&mut self, position: Position) {
        self.tiles.insert(position, Tile::default());
    }

    fn show_marker(&mut self, position: Position, marker: &str) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.marker = Some(marker.to_string());
        }
    }

    fn highlight(&mut self, position: Position, highlight: Highlight) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.highlight = Some(highlight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_ignore_missing_tiles() {
        let mut surface = TerminalSurface::default();
        surface.show_marker(Position::Center, "X");
        surface.highlight(Position::Center, Highlight::Won);
        assert_eq!(surface.tile_count(), 0);

        surface.add_tile(Position::Center);
        surface.show_marker(Position::Center, "X");
        surface.highlight(Position::Center, Highlight::Won);
        assert_eq!(
            surface.tile(Position::Center),
            Some(&Tile {
                marker: Some("X".to_string()),
                highlight: Some(Highlight::Won),
            })
        );

        surface.clear();
        assert!(surface.tile(Position::Center).is_none());
    }
}
