use std::num::NonZeroUsize;

use crate::{FetchError, RequestId};

/// Commands a rendering surface issues in response to user gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Initial load, or pull-to-refresh reload.
    Load,
    /// Fetch the next page. `None` falls back to the configured page size and
    /// the current item count.
    LoadMore {
        limit: Option<NonZeroUsize>,
        offset: Option<usize>,
    },
}

impl Command {
    pub fn load_more() -> Self {
        Command::LoadMore {
            limit: None,
            offset: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg<T> {
    /// User asked for a (re)load from the first page.
    Load,
    /// User scrolled near the end or tapped "load more".
    LoadMore {
        limit: Option<NonZeroUsize>,
        offset: Option<usize>,
    },
    /// Data source answered the fetch tagged `request`.
    PageFetched {
        request: RequestId,
        result: Result<Vec<T>, FetchError>,
    },
}

impl<T> From<Command> for Msg<T> {
    fn from(command: Command) -> Self {
        match command {
            Command::Load => Msg::Load,
            Command::LoadMore { limit, offset } => Msg::LoadMore { limit, offset },
        }
    }
}
