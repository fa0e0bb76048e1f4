//! CLI library components for MetaQuery.

pub mod logging;
pub mod pipeline;
