use pager_logging::pager_debug;

use crate::state::FetchKind;
use crate::{Effect, ListState, ListStatus, Msg, PageRequest};

/// Pure update function: applies a message to state and returns any effects.
pub fn update<T: Clone>(mut state: ListState<T>, msg: Msg<T>) -> (ListState<T>, Vec<Effect>) {
    let effects = match msg {
        Msg::Load => {
            if state.take_seed() {
                // First load of a seeded list is answered from the seed.
                let seed = state.status().items();
                state.set_status(ListStatus::Loaded(seed));
                pager_debug!("load answered from {} seeded items", state.status().item_count());
                return (state, Vec::new());
            }
            let page = PageRequest {
                offset: 0,
                limit: state.page_size(),
            };
            if let Some(previous) = state.in_flight_request() {
                pager_debug!("load supersedes request {}", previous);
            }
            let request = state.begin_fetch(FetchKind::Reload);
            pager_debug!("request {} load offset=0 limit={}", request, page.limit);
            vec![Effect::FetchPage { request, page }]
        }
        Msg::LoadMore { limit, offset } => {
            state.take_seed();
            if matches!(
                state.status(),
                ListStatus::Loading(_) | ListStatus::Exhausted(_)
            ) {
                pager_debug!("load more ignored while {}", state.status().label());
                return (state, Vec::new());
            }
            let page = PageRequest {
                offset: offset.unwrap_or_else(|| state.status().item_count()),
                limit: limit.unwrap_or_else(|| state.page_size()),
            };
            let request = state.begin_fetch(FetchKind::Append);
            pager_debug!(
                "request {} load more offset={} limit={}",
                request,
                page.offset,
                page.limit
            );
            vec![Effect::FetchPage { request, page }]
        }
        Msg::PageFetched { request, result } => {
            let Some(in_flight) = state.finish_fetch(request) else {
                pager_debug!("discarding result of stale request {}", request);
                return (state, Vec::new());
            };
            // Snapshot held when the fetch started.
            let items = state.status().items();
            let next = match (in_flight.kind, result) {
                (FetchKind::Reload, Ok(page)) => ListStatus::Loaded(page.into()),
                (FetchKind::Append, Ok(page)) if page.is_empty() => ListStatus::Exhausted(items),
                (FetchKind::Append, Ok(page)) => ListStatus::Loaded(items.appended(page)),
                (_, Err(error)) => ListStatus::Failed { items, error },
            };
            pager_debug!(
                "request {} settled as {} with {} items",
                request,
                next.label(),
                next.item_count()
            );
            state.set_status(next);
            Vec::new()
        }
    };

    (state, effects)
}
