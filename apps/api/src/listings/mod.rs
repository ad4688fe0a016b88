// Listing side of the pipeline: the JSON-backed store, the external feed,
// and the deterministic work-arrangement classifier.

pub mod classify;
pub mod feed;
pub mod handlers;
pub mod model;
pub mod store;
