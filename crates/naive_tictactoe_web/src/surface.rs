//! DOM rendering surface.

use crate::error::WebError;
use naive_tictactoe::{Highlight, Position, Surface};
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::{instrument, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

/// Structural class every tile carries.
pub const TILE_CLASS: &str = "tile";

/// Callback invoked with the position of a clicked tile.
pub type TileHandler = Rc<dyn Fn(Position)>;

/// Renders tiles as `<div class="tile" id="tile-N">` children of a container.
pub struct DomSurface {
    document: Document,
    container: Element,
    tiles: BTreeMap<Position, Element>,
    listeners: Vec<Closure<dyn FnMut()>>,
    on_activate: TileHandler,
}

impl DomSurface {
    /// Wraps `container`; clicks on tiles are forwarded to `on_activate`.
    pub fn new(document: Document, container: Element, on_activate: TileHandler) -> Self {
        Self {
            document,
            container,
            tiles: BTreeMap::new(),
            listeners: Vec::new(),
            on_activate,
        }
    }

    #[instrument(skip(self))]
    fn try_add_tile(&mut self, position: Position) -> Result<(), WebError> {
        let tile = self.document.create_element("div")?;
        tile.class_list().add_1(TILE_CLASS)?;
        tile.set_id(&position.tile_id());

        let on_activate = Rc::clone(&self.on_activate);
        let listener = Closure::<dyn FnMut()>::new(move || on_activate(position));
        tile.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;

        self.container.append_child(&tile)?;
        self.tiles.insert(position, tile);
        self.listeners.push(listener);
        Ok(())
    }

    fn tile(&self, position: Position) -> Result<&Element, WebError> {
        self.tiles
            .get(&position)
            .ok_or_else(|| WebError::new(format!("No tile at {}", position.tile_id())))
    }

    fn try_highlight(&self, position: Position, highlight: Highlight) -> Result<(), WebError> {
        self.tile(position)?
            .class_list()
            .add_1(highlight.class_name())?;
        Ok(())
    }
}

impl Surface for DomSurface {
    fn clear(&mut self) {
        self.container.set_inner_html("");
        self.tiles.clear();
        // Elements are detached, so their listeners can go.
        self.listeners.clear();
    }

    fn add_tile(&mut self, position: Position) {
        if let Err(e) = self.try_add_tile(position) {
            warn!(error = %e, %position, "Failed to add tile");
        }
    }

    fn show_marker(&mut self, position: Position, marker: &str) {
        match self.tile(position) {
            Ok(tile) => tile.set_inner_html(marker),
            Err(e) => warn!(error = %e, "Failed to show marker"),
        }
    }

    fn highlight(&mut self, position: Position, highlight: Highlight) {
        if let Err(e) = self.try_highlight(position, highlight) {
            warn!(error = %e, %highlight, "Failed to highlight tile");
        }
    }
}

impl std::fmt::Debug for DomSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomSurface")
            .field("tiles", &self.tiles.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
