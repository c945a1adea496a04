//! Core crate exports for building and running the `sage` advice finder.
//!
//! The root module re-exports the lookup controller, the advice types and the
//! UI builder so embedders can drive a search without digging through the
//! module hierarchy.

pub mod app_dirs;
pub mod logging;
mod systems;
pub mod ui;

pub use sage_advice::{
	Advice, AdviceId, AdviceOutcome, LookupError, LookupEvent, LookupPhase, SearchStatus,
	classify_response, transition,
};
pub use systems::lookup::{
	AdviceSource, ControllerOptions, DEFAULT_DEBOUNCE, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT,
	Debouncer, HttpAdviceSource, QueryController,
};
pub use ui::{AdviceUi, App, run};
