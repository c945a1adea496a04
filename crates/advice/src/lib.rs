//! Domain types shared by the `sage` binary and its terminal UI.
//!
//! The crate owns the advice data model, the lookup status machine that the
//! query controller drives, and the translation from raw API responses into
//! results or user-facing errors. Nothing here touches the network or the
//! terminal.

pub mod error;
pub mod response;
pub mod status;
pub mod types;

pub use error::LookupError;
pub use response::{NOT_FOUND_STATUS, classify_response};
pub use status::{LookupEvent, LookupPhase, SearchStatus, transition};
pub use types::{Advice, AdviceId, AdviceOutcome};
