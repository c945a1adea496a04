//! Advice lookups: the HTTP source, the background dispatcher, input
//! debouncing and the [`QueryController`] that ties them to a
//! [`SearchStatus`](sage_advice::SearchStatus).

mod client;
mod commands;
mod controller;
mod debounce;
mod runtime;
mod worker;

pub use client::{AdviceSource, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpAdviceSource};
pub use controller::{ControllerOptions, DEFAULT_DEBOUNCE, QueryController};
pub use debounce::Debouncer;
