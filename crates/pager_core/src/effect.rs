use std::num::NonZeroUsize;

/// Tag identifying one fetch issued by the state machine.
pub type RequestId = u64;

/// One page to fetch from the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Number of items already held, or 0 for a full reload.
    pub offset: usize,
    pub limit: NonZeroUsize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the data source and report back with `Msg::PageFetched { request, .. }`.
    FetchPage {
        request: RequestId,
        page: PageRequest,
    },
}
