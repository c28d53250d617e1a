use std::num::NonZeroUsize;
use std::sync::Arc;

use futures_util::stream::{self, Stream};
use pager_core::{update, Command, Effect, FetchError, ListConfig, ListState, ListStatus, Msg};
use pager_logging::{pager_debug, pager_info, pager_warn};
use tokio::sync::{mpsc, oneshot, watch};
use tokio_util::sync::CancellationToken;

use crate::PageSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("list controller has shut down")]
    Closed,
}

enum LoopInput<T> {
    Dispatch(Msg<T>),
    Subscribe(mpsc::UnboundedSender<ListStatus<T>>),
    Settle(oneshot::Sender<ListStatus<T>>),
}

/// Handle to a running paginated list.
///
/// Commands are queued in issue order and applied one at a time by a single
/// reducer task; each fetch runs in its own task and reports back through the
/// same queue. Dropping the handle stops the reducer and any fetch in flight.
pub struct ListController<T> {
    input_tx: mpsc::UnboundedSender<LoopInput<T>>,
    status_rx: watch::Receiver<ListStatus<T>>,
    shutdown: CancellationToken,
}

impl<T> ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Starts the reducer task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<S>(config: ListConfig<T>, source: S) -> Self
    where
        S: PageSource<T> + 'static,
    {
        let state = ListState::new(config);
        let (status_tx, status_rx) = watch::channel(state.status().clone());
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();

        let reducer = Reducer {
            state,
            source: Arc::new(source),
            input_tx: input_tx.clone(),
            status_tx,
            subscribers: Vec::new(),
            settle_waiters: Vec::new(),
            shutdown: shutdown.clone(),
        };
        tokio::spawn(reducer.run(input_rx));

        Self {
            input_tx,
            status_rx,
            shutdown,
        }
    }

    pub fn issue(&self, command: Command) -> Result<(), ControllerError> {
        self.send(LoopInput::Dispatch(command.into()))
    }

    pub fn load(&self) -> Result<(), ControllerError> {
        self.issue(Command::Load)
    }

    pub fn load_more(&self) -> Result<(), ControllerError> {
        self.issue(Command::load_more())
    }

    pub fn load_more_with(
        &self,
        limit: Option<NonZeroUsize>,
        offset: Option<usize>,
    ) -> Result<(), ControllerError> {
        self.issue(Command::LoadMore { limit, offset })
    }

    /// Current status snapshot.
    pub fn status(&self) -> ListStatus<T> {
        self.status_rx.borrow().clone()
    }

    /// Latest-value view of the status. Intermediate values may be skipped;
    /// use [`subscribe`](Self::subscribe) to see every transition.
    pub fn watch(&self) -> watch::Receiver<ListStatus<T>> {
        self.status_rx.clone()
    }

    /// Every status published from now on, in order, starting with the
    /// status current when the subscription is processed.
    pub fn subscribe(&self) -> Result<mpsc::UnboundedReceiver<ListStatus<T>>, ControllerError> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.send(LoopInput::Subscribe(tx))?;
        Ok(rx)
    }

    /// [`subscribe`](Self::subscribe) as a stream.
    pub fn updates(&self) -> Result<impl Stream<Item = ListStatus<T>>, ControllerError> {
        let rx = self.subscribe()?;
        Ok(stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|status| (status, rx))
        }))
    }

    /// Waits until every command issued so far has settled and no fetch is
    /// in flight, then returns the status at that point.
    pub async fn settled(&self) -> Result<ListStatus<T>, ControllerError> {
        let (tx, rx) = oneshot::channel();
        self.send(LoopInput::Settle(tx))?;
        rx.await.map_err(|_| ControllerError::Closed)
    }

    /// Stops the reducer and cancels fetches in flight. Later commands fail
    /// with [`ControllerError::Closed`].
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    fn send(&self, input: LoopInput<T>) -> Result<(), ControllerError> {
        if self.shutdown.is_cancelled() {
            return Err(ControllerError::Closed);
        }
        self.input_tx
            .send(input)
            .map_err(|_| ControllerError::Closed)
    }
}

impl<T> Drop for ListController<T> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

struct Reducer<T> {
    state: ListState<T>,
    source: Arc<dyn PageSource<T>>,
    input_tx: mpsc::UnboundedSender<LoopInput<T>>,
    status_tx: watch::Sender<ListStatus<T>>,
    subscribers: Vec<mpsc::UnboundedSender<ListStatus<T>>>,
    settle_waiters: Vec<oneshot::Sender<ListStatus<T>>>,
    shutdown: CancellationToken,
}

impl<T> Reducer<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn run(mut self, mut input_rx: mpsc::UnboundedReceiver<LoopInput<T>>) {
        pager_info!(
            "list controller started: page_size={} status={}",
            self.state.page_size(),
            self.state.status().label()
        );
        loop {
            let input = tokio::select! {
                _ = self.shutdown.cancelled() => break,
                input = input_rx.recv() => match input {
                    Some(input) => input,
                    None => break,
                },
            };
            match input {
                LoopInput::Dispatch(msg) => self.dispatch(msg),
                LoopInput::Subscribe(tx) => {
                    if tx.send(self.state.status().clone()).is_ok() {
                        self.subscribers.push(tx);
                    }
                }
                LoopInput::Settle(tx) => {
                    self.settle_waiters.push(tx);
                    self.release_settled();
                }
            }
        }
        pager_info!("list controller stopped");
    }

    fn dispatch(&mut self, msg: Msg<T>) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.publish(state.status());
        }
        self.state = state;

        for effect in effects {
            self.run_effect(effect);
        }
        self.release_settled();
    }

    fn publish(&mut self, status: &ListStatus<T>) {
        pager_debug!(
            "publishing {} with {} items",
            status.label(),
            status.item_count()
        );
        self.status_tx.send_replace(status.clone());
        self.subscribers
            .retain(|subscriber| subscriber.send(status.clone()).is_ok());
    }

    fn release_settled(&mut self) {
        if self.state.in_flight_request().is_some() {
            return;
        }
        for waiter in self.settle_waiters.drain(..) {
            let _ = waiter.send(self.state.status().clone());
        }
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::FetchPage { request, page } => {
                let source = Arc::clone(&self.source);
                let input_tx = self.input_tx.clone();
                let shutdown = self.shutdown.clone();
                tokio::spawn(async move {
                    // The source runs in its own task so a panic surfaces as a JoinError.
                    let mut fetch = tokio::spawn(async move { source.fetch_page(page).await });
                    let joined = tokio::select! {
                        _ = shutdown.cancelled() => {
                            fetch.abort();
                            return;
                        }
                        joined = &mut fetch => joined,
                    };
                    let result = match joined {
                        Ok(result) => result,
                        Err(err) if err.is_panic() => Err(FetchError::new("data source panicked")),
                        Err(err) => Err(FetchError::with_cause("fetch task cancelled", err)),
                    };
                    if let Err(err) = &result {
                        pager_warn!(
                            "request {} offset={} limit={} failed: {}",
                            request,
                            page.offset,
                            page.limit,
                            err
                        );
                    }
                    let _ = input_tx.send(LoopInput::Dispatch(Msg::PageFetched { request, result }));
                });
            }
        }
    }
}
