use std::future::Future;
use std::marker::PhantomData;

use pager_core::{FetchError, PageRequest};

/// Contract the list controller depends on: fetch one page of items.
///
/// Returning fewer than `page.limit` items is expected only at the end of the
/// data; an empty page is the sole exhaustion signal for `LoadMore`.
#[async_trait::async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn fetch_page(&self, page: PageRequest) -> Result<Vec<T>, FetchError>;
}

/// In-memory, append-only source that slices a fixed vector.
#[derive(Debug, Clone, Default)]
pub struct VecPageSource<T> {
    items: Vec<T>,
}

impl<T> VecPageSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait::async_trait]
impl<T> PageSource<T> for VecPageSource<T>
where
    T: Clone + Send + Sync,
{
    async fn fetch_page(&self, page: PageRequest) -> Result<Vec<T>, FetchError> {
        let start = page.offset.min(self.items.len());
        let end = start.saturating_add(page.limit.get()).min(self.items.len());
        Ok(self.items[start..end].to_vec())
    }
}

/// Source backed by an async closure.
pub struct FnPageSource<T, F> {
    fetch: F,
    _items: PhantomData<fn() -> T>,
}

/// Wraps `fetch` as a [`PageSource`].
pub fn from_fn<T, F, Fut>(fetch: F) -> FnPageSource<T, F>
where
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<T>, FetchError>> + Send + 'static,
{
    FnPageSource {
        fetch,
        _items: PhantomData,
    }
}

#[async_trait::async_trait]
impl<T, F, Fut> PageSource<T> for FnPageSource<T, F>
where
    T: Send,
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<T>, FetchError>> + Send + 'static,
{
    async fn fetch_page(&self, page: PageRequest) -> Result<Vec<T>, FetchError> {
        (self.fetch)(page).await
    }
}
