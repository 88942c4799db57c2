//! Browser host for naive tic-tac-toe.
//!
//! Page code hands a container element to [`mount`]; the returned
//! [`GameHandle`] keeps the board alive. Dropping it detaches nothing from
//! the page but turns pending restarts and further clicks into no-ops.
//!
//! ```js
//! import init, { mount } from "./naive_tictactoe_web.js";
//!
//! await init();
//! const game = mount(document.getElementById("game-board"));
//! ```

#![warn(missing_docs)]

mod error;
mod logging;
mod surface;

pub use error::WebError;
pub use logging::ConsoleWriter;
pub use surface::{DomSurface, TILE_CLASS, TileHandler};

use naive_tictactoe::{BoardController, GameConfig, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

type WebController = BoardController<DomSurface, StdRng>;

/// A running board bound to a container element.
#[wasm_bindgen]
#[derive(Debug)]
pub struct GameHandle {
    controller: Rc<RefCell<WebController>>,
}

impl GameHandle {
    /// Builds the controller on `container` and lays out the first round.
    #[instrument(skip(container, config))]
    pub fn new(container: Element, config: GameConfig) -> Result<Self, WebError> {
        let document = container
            .owner_document()
            .ok_or_else(|| WebError::new("Container is not attached to a document"))?;
        let delay = config.restart_delay();
        let rng = StdRng::from_entropy();

        let controller = Rc::new_cyclic(|game: &Weak<RefCell<WebController>>| {
            let surface = DomSurface::new(document, container, tile_handler(game.clone(), delay));
            RefCell::new(BoardController::new(surface, rng, config))
        });
        controller.borrow_mut().run();

        info!("Board mounted");
        Ok(Self { controller })
    }
}

#[wasm_bindgen]
impl GameHandle {
    /// Abandons the current round and lays out a fresh board.
    pub fn restart(&self) {
        self.controller.borrow_mut().restart();
    }

    /// Whether the current round has ended.
    pub fn finished(&self) -> bool {
        self.controller.borrow().finished()
    }
}

/// Mounts a board with the default markers and a 3 second restart delay.
#[wasm_bindgen]
pub fn mount(container: Element) -> Result<GameHandle, JsValue> {
    logging::init();
    Ok(GameHandle::new(container, GameConfig::default())?)
}

/// Mounts a board with custom markers and restart delay.
#[wasm_bindgen]
pub fn mount_with_config(
    container: Element,
    marker_user: String,
    marker_computer: String,
    restart_delay_ms: u32,
) -> Result<GameHandle, JsValue> {
    logging::init();
    let config = GameConfig::new(marker_user, marker_computer)
        .with_restart_delay(Duration::from_millis(u64::from(restart_delay_ms)));
    Ok(GameHandle::new(container, config)?)
}

/// Human clicks go through here; a finished round schedules the restart.
fn tile_handler(game: Weak<RefCell<WebController>>, delay: Duration) -> TileHandler {
    Rc::new(move |position| {
        let Some(controller) = game.upgrade() else {
            debug!("Click after the game was dropped");
            return;
        };

        let outcome = controller.borrow_mut().mark_tile(position, Player::Human);
        if outcome.is_some()
            && let Err(e) = schedule_restart(Rc::downgrade(&controller), delay)
        {
            warn!(error = %e, "Failed to schedule restart");
        }
    })
}

/// Fire-and-forget `setTimeout` that restarts the round if the game still exists.
#[instrument(skip(game))]
fn schedule_restart(game: Weak<RefCell<WebController>>, delay: Duration) -> Result<(), WebError> {
    let window = web_sys::window().ok_or_else(|| WebError::new("No global window"))?;
    let callback = Closure::once_into_js(move || match game.upgrade() {
        Some(controller) => {
            controller.borrow_mut().restart();
        }
        None => debug!("Game dropped before restart"),
    });

    let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)?;
    debug!(timeout, "Restart scheduled");
    Ok(())
}
