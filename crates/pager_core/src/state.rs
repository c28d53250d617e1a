use std::num::NonZeroUsize;

use crate::view_model::ListViewModel;
use crate::{FetchError, Items, ListConfig, RequestId};

/// Observable status of a paginated list. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus<T> {
    /// Nothing loaded yet.
    Idle,
    /// A fetch is in flight; holds the last good collection.
    Loading(Items<T>),
    /// Last fetch succeeded. May legitimately be empty.
    Loaded(Items<T>),
    /// A `LoadMore` returned no items; no further pages exist.
    Exhausted(Items<T>),
    /// Last fetch failed; holds the last good collection.
    Failed { items: Items<T>, error: FetchError },
}

impl<T> ListStatus<T> {
    /// The collection snapshot carried by this status (empty for `Idle`).
    pub fn items(&self) -> Items<T> {
        match self {
            ListStatus::Idle => Items::empty(),
            ListStatus::Loading(items)
            | ListStatus::Loaded(items)
            | ListStatus::Exhausted(items)
            | ListStatus::Failed { items, .. } => items.clone(),
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            ListStatus::Idle => 0,
            ListStatus::Loading(items)
            | ListStatus::Loaded(items)
            | ListStatus::Exhausted(items)
            | ListStatus::Failed { items, .. } => items.len(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListStatus::Loading(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, ListStatus::Exhausted(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ListStatus::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListStatus::Idle => "idle",
            ListStatus::Loading(_) => "loading",
            ListStatus::Loaded(_) => "loaded",
            ListStatus::Exhausted(_) => "exhausted",
            ListStatus::Failed { .. } => "failed",
        }
    }
}

impl<T> Default for ListStatus<T> {
    fn default() -> Self {
        ListStatus::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchKind {
    Reload,
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InFlight {
    pub(crate) request: RequestId,
    pub(crate) kind: FetchKind,
}

/// Full state owned by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<T> {
    status: ListStatus<T>,
    page_size: NonZeroUsize,
    seed_pending: bool,
    in_flight: Option<InFlight>,
    next_request: RequestId,
    dirty: bool,
}

impl<T> ListState<T> {
    pub fn new(config: ListConfig<T>) -> Self {
        let seed_pending = !config.initial_items.is_empty();
        let status = if seed_pending {
            ListStatus::Loaded(Items::from(config.initial_items))
        } else {
            ListStatus::Idle
        };
        Self {
            status,
            page_size: config.page_size,
            seed_pending,
            in_flight: None,
            next_request: 1,
            dirty: false,
        }
    }

    pub fn status(&self) -> &ListStatus<T> {
        &self.status
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Request whose result will be accepted, if any.
    pub fn in_flight_request(&self) -> Option<RequestId> {
        self.in_flight.map(|in_flight| in_flight.request)
    }

    pub fn view(&self) -> ListViewModel {
        ListViewModel {
            dirty: self.dirty,
            ..ListViewModel::from_status(&self.status)
        }
    }

    /// Returns whether the status changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_status(&mut self, status: ListStatus<T>) {
        self.status = status;
        self.dirty = true;
    }

    /// Clears the pending seed, returning whether it was still pending.
    pub(crate) fn take_seed(&mut self) -> bool {
        std::mem::take(&mut self.seed_pending)
    }

    /// Moves to `Loading` with a fresh request id, superseding any request in flight.
    pub(crate) fn begin_fetch(&mut self, kind: FetchKind) -> RequestId {
        let request = self.next_request;
        self.next_request += 1;
        self.in_flight = Some(InFlight { request, kind });
        let items = self.status.items();
        self.set_status(ListStatus::Loading(items));
        request
    }

    /// Takes the in-flight record if `request` is the one being awaited.
    pub(crate) fn finish_fetch(&mut self, request: RequestId) -> Option<InFlight> {
        match self.in_flight {
            Some(in_flight) if in_flight.request == request => self.in_flight.take(),
            _ => None,
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}
