//! Pager engine: async data sources and the controller that runs the list state machine.
mod controller;
mod http_source;
mod source;

pub use controller::{ControllerError, ListController};
pub use http_source::{HttpPageSource, HttpSourceSettings};
pub use source::{from_fn, FnPageSource, PageSource, VecPageSource};
