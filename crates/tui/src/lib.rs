//! Terminal building blocks for the `sage` advice finder.
//!
//! The crate exposes the query input widget, the colour themes and the
//! components that draw the header, prompt row and advice list. Application
//! state and the event loop live in the `sage` crate; everything here renders
//! from borrowed state and never talks to the network.

pub mod components;
mod config;
pub mod input;
pub mod style;

pub use config::UiLabels;
pub use input::QueryInput;
pub use style::{StyleConfig, Theme, ThemeDefinition, by_name, default_theme, names};
