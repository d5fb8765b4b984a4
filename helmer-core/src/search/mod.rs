//! Incremental director search: a pure debounce/race state machine plus the
//! async driver that wires it to the metadata provider.

mod controller;
mod machine;

pub use controller::{SearchCommand, SearchController, SearchHandle, SearchSnapshot};
pub use machine::{
    LookupRequest, NavigationIntent, ScheduledLookup, SearchMachine, SearchStatus,
};
