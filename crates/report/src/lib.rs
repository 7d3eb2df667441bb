//! Report rendering for the traffic analyzer
//!
//! A line-oriented sink abstraction, a console implementation, and the
//! writer that renders the finalized engine views into the four report
//! sections.

pub mod error;
pub mod sink;
pub mod writer;

pub use error::ReportError;
pub use sink::{ConsoleSink, LineSink};
pub use writer::ReportWriter;
