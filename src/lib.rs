pub mod config;
pub mod contact;
pub mod content;
pub mod grid;
pub mod motion;
pub mod selection;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
