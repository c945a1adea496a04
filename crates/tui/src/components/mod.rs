//! Widgets composed by the `sage` renderer.

mod header;
mod prompt;
mod results;
pub mod wrap;

pub use header::render_header;
pub use prompt::{LoadingState, PromptContext, render_prompt};
pub use results::{NO_MATCHES_MESSAGE, ResultsContext, render_results};
