//! standard-ui - Shared view types and components for THE STANDARD website
//!
//! Contains display types and pure, props-based view components. State and
//! wiring live in standard-web; everything here renders from props and
//! reports interactions through `EventHandler` callbacks.

pub mod components;
pub mod display_types;
pub mod wasm_utils;

pub use components::*;
pub use display_types::*;
