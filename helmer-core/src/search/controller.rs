//! Async driver for [`SearchMachine`].
//!
//! An actor task owns the machine, the debounce timer, and the set of
//! in-flight lookups. Commands arrive on an mpsc channel; state goes out as
//! snapshots on a watch channel; navigation intents go out on their own
//! channel. There is no transport-level cancellation: superseded lookups
//! keep running and their responses are dropped by the machine's ticket
//! check.

use std::fmt;
use std::sync::Arc;

use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, warn};

use helmer_model::{PersonId, PersonSummary};

use super::machine::{NavigationIntent, ScheduledLookup, SearchMachine, SearchStatus};
use crate::providers::{MetadataProvider, ProviderError};

/// User-visible notice when a lookup fails; raw errors stay in the logs.
const SEARCH_FAILED_NOTICE: &str = "Search is unavailable right now. Try again in a moment.";

/// Commands accepted by the controller task.
#[derive(Debug, Clone)]
pub enum SearchCommand {
    /// The query text changed.
    Input(String),
    /// The user picked a result.
    Select(PersonId),
    /// Click outside the search surface.
    Dismiss,
    /// The input regained focus.
    Refocus,
    /// Explicit clear.
    Clear,
}

/// Immutable view of the search state for the presentation surface.
#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    pub query: String,
    pub status: SearchStatus,
    pub results: Vec<PersonSummary>,
    pub dropdown_visible: bool,
    pub notice: Option<String>,
}

/// Cheap cloneable handle to a running controller.
#[derive(Debug, Clone)]
pub struct SearchHandle {
    commands: mpsc::Sender<SearchCommand>,
    snapshots: watch::Receiver<SearchSnapshot>,
}

impl SearchHandle {
    pub async fn input(&self, text: impl Into<String>) {
        self.send(SearchCommand::Input(text.into())).await;
    }

    pub async fn select(&self, person: PersonId) {
        self.send(SearchCommand::Select(person)).await;
    }

    pub async fn dismiss(&self) {
        self.send(SearchCommand::Dismiss).await;
    }

    pub async fn refocus(&self) {
        self.send(SearchCommand::Refocus).await;
    }

    pub async fn clear(&self) {
        self.send(SearchCommand::Clear).await;
    }

    /// Latest published state.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn watch(&self) -> watch::Receiver<SearchSnapshot> {
        self.snapshots.clone()
    }

    async fn send(&self, command: SearchCommand) {
        if self.commands.send(command).await.is_err() {
            debug!("search controller is gone; command dropped");
        }
    }
}

type LookupOutcome = (u64, Result<Vec<PersonSummary>, ProviderError>);

/// The actor. Constructed via [`SearchController::spawn`], which hands back
/// a [`SearchHandle`] and the navigation-intent receiver.
pub struct SearchController<P> {
    provider: Arc<P>,
    machine: SearchMachine,
    commands: mpsc::Receiver<SearchCommand>,
    snapshots: watch::Sender<SearchSnapshot>,
    navigations: mpsc::Sender<NavigationIntent>,
}

impl<P> fmt::Debug for SearchController<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchController").finish_non_exhaustive()
    }
}

impl<P: MetadataProvider + 'static> SearchController<P> {
    /// Spawn the controller task onto the current runtime.
    pub fn spawn(
        provider: Arc<P>,
        machine: SearchMachine,
    ) -> (SearchHandle, mpsc::Receiver<NavigationIntent>) {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (navigation_tx, navigation_rx) = mpsc::channel(4);
        let (snapshot_tx, snapshot_rx) = watch::channel(snapshot_of(&machine));

        let controller = SearchController {
            provider,
            machine,
            commands: command_rx,
            snapshots: snapshot_tx,
            navigations: navigation_tx,
        };
        tokio::spawn(controller.run());

        (
            SearchHandle {
                commands: command_tx,
                snapshots: snapshot_rx,
            },
            navigation_rx,
        )
    }

    async fn run(mut self) {
        // The armed debounce timer, replaced wholesale on every edit.
        let mut timer: Option<(u64, Instant)> = None;
        let mut in_flight: FuturesUnordered<BoxFuture<'static, LookupOutcome>> =
            FuturesUnordered::new();

        loop {
            let deadline = timer.map(|(_, at)| at);

            tokio::select! {
                maybe_command = self.commands.recv() => {
                    let Some(command) = maybe_command else {
                        break;
                    };
                    self.handle_command(command, &mut timer).await;
                }

                _ = debounce_elapsed(deadline), if deadline.is_some() => {
                    if let Some((seq, _)) = timer.take()
                        && let Some(request) = self.machine.fire(seq)
                    {
                        debug!(seq = request.seq, query = %request.query, "issuing director lookup");
                        let provider = Arc::clone(&self.provider);
                        in_flight.push(Box::pin(async move {
                            let outcome = provider.search_people(&request.query).await;
                            (request.seq, outcome)
                        }));
                    }
                }

                Some((seq, outcome)) = in_flight.next(), if !in_flight.is_empty() => {
                    self.apply_outcome(seq, outcome);
                }
            }

            self.publish();
        }
    }

    async fn handle_command(
        &mut self,
        command: SearchCommand,
        timer: &mut Option<(u64, Instant)>,
    ) {
        match command {
            SearchCommand::Input(text) => match self.machine.edit(text) {
                Some(ScheduledLookup { seq, delay, .. }) => {
                    *timer = Some((seq, Instant::now() + delay));
                }
                None => {
                    *timer = None;
                }
            },
            SearchCommand::Select(person) => {
                let intent = self.machine.select(person);
                *timer = None;
                if self.navigations.send(intent).await.is_err() {
                    debug!("navigation receiver is gone; intent dropped");
                }
            }
            SearchCommand::Dismiss => self.machine.dismiss(),
            SearchCommand::Refocus => self.machine.refocus(),
            SearchCommand::Clear => {
                self.machine.clear();
                *timer = None;
            }
        }
    }

    fn apply_outcome(&mut self, seq: u64, outcome: Result<Vec<PersonSummary>, ProviderError>) {
        let outcome = outcome.map_err(|err| {
            warn!(error = %err, "director search failed");
            SEARCH_FAILED_NOTICE.to_string()
        });

        if !self.machine.complete(seq, outcome) {
            debug!(seq, "dropped stale search response");
        }
    }

    fn publish(&self) {
        // Nobody watching is fine; the state is still current for late
        // subscribers.
        let _ = self.snapshots.send(snapshot_of(&self.machine));
    }
}

fn snapshot_of(machine: &SearchMachine) -> SearchSnapshot {
    SearchSnapshot {
        query: machine.query().to_string(),
        status: machine.status(),
        results: machine.results().to_vec(),
        dropdown_visible: machine.is_dropdown_visible(),
        notice: machine.notice().map(str::to_string),
    }
}

async fn debounce_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
