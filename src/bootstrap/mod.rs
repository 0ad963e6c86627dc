//! Process bootstrap helpers.

mod tracing_init;

pub use tracing_init::scoped_tracing;
