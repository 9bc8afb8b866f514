//! Query Handlers 实现

mod status_query_handlers;

pub use status_query_handlers::*;
