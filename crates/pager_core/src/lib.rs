//! Pager core: pure pagination state machine and view-model helpers.
mod config;
mod effect;
mod error;
mod items;
mod msg;
mod state;
mod update;
mod view_model;

pub use config::{ListConfig, DEFAULT_PAGE_SIZE};
pub use effect::{Effect, PageRequest, RequestId};
pub use error::FetchError;
pub use items::Items;
pub use msg::{Command, Msg};
pub use state::{ListState, ListStatus};
pub use update::update;
pub use view_model::{Footer, ListViewModel, Placeholder};
