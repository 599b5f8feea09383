mod app;
mod app_state;
pub mod bridge;
pub mod config;
pub mod controller;
pub mod drawing;
mod event_handler;
pub mod geometry;
pub mod hit;
pub mod mesh;
mod renderer;
pub mod rough;
mod state;
pub mod store;
mod ui;
mod update_logic;
pub mod vertex;

pub use app::run;
pub use bridge::RenderBridge;
pub use config::SketchConfig;
pub use controller::{Action, CursorHint, InteractionController, InteractionState};
pub use drawing::{Element, ElementKind, Tool, create_element};
pub use mesh::Mesh;
pub use rough::{RoughBridge, RoughGenerator, RoughOptions};
pub use store::{ElementStore, StoreError};
pub use vertex::Vertex;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(e) = run() {
        log::error!("{:#}", e);
    }
}
