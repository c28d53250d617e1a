use std::num::NonZeroUsize;

/// Page size used when no override is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Construction-time settings for a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig<T> {
    /// Limit sent with every request that does not override it.
    pub page_size: NonZeroUsize,
    /// Items to start with. When non-empty the list starts `Loaded` and the
    /// first `Load` is answered from these items without a fetch.
    pub initial_items: Vec<T>,
}

impl<T> ListConfig<T> {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            initial_items: Vec::new(),
        }
    }

    pub fn with_initial_items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.initial_items = items.into_iter().collect();
        self
    }
}

impl<T> Default for ListConfig<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
