//! Interactive terminal UI for `sage`.
//!
//! [`AdviceUi`] is the public-facing builder. The remaining submodules hold
//! the event loop, key handling, rendering and the [`App`] state that ties the
//! query input to a [`QueryController`](crate::QueryController).

mod actions;
mod builder;
mod render;
mod runtime;
mod state;

pub use builder::AdviceUi;
pub use runtime::run;
pub use state::App;
