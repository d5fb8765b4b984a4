//! The search state machine.
//!
//! Pure and synchronous: keystrokes, timer expiry, and lookup completions
//! come in as method calls; scheduling requests and navigation intents come
//! out as return values. The driver in [`super::controller`] owns the actual
//! timer and network futures, so every timing and race rule here is
//! unit-testable without a runtime.
//!
//! Race rule: every edit allocates a fresh ticket from a monotonic counter.
//! A debounce timer only fires for the ticket it was armed with, and a
//! completed lookup only applies while its ticket is still the newest one
//! allocated. Responses are applied in issue order, never completion order;
//! stale ones are dropped, not aborted.

use std::time::Duration;

use helmer_model::{PersonId, PersonSummary};

/// Where the search surface currently is, as exposed to the presentation
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No usable query.
    #[default]
    Idle,
    /// A lookup is outstanding.
    Searching,
    /// Results are on display.
    Showing,
    /// The lookup succeeded with zero directors.
    Empty,
    /// The lookup failed; a non-fatal notice is set.
    Failed,
}

/// Instruction to arm the debounce timer for a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledLookup {
    pub seq: u64,
    pub query: String,
    pub delay: Duration,
}

/// A lookup the driver should issue now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub seq: u64,
    pub query: String,
}

/// Emitted when the user picks a result; routing is a host concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationIntent {
    pub person: PersonId,
}

#[derive(Debug, Clone)]
pub struct SearchMachine {
    query: String,
    results: Vec<PersonSummary>,
    status: SearchStatus,
    dropdown_visible: bool,
    notice: Option<String>,
    debounce: Duration,
    min_query_chars: usize,
    /// Ticket waiting on the debounce timer, if any.
    pending: Option<u64>,
    /// Monotonic ticket counter; the current value is the newest ticket.
    ticket: u64,
}

impl Default for SearchMachine {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), 2)
    }
}

impl SearchMachine {
    pub fn new(debounce: Duration, min_query_chars: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            status: SearchStatus::Idle,
            dropdown_visible: false,
            notice: None,
            debounce,
            min_query_chars,
            pending: None,
            ticket: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[PersonSummary] {
        &self.results
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.dropdown_visible
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Apply a query-text change (trailing-edge debounce).
    ///
    /// Any previously scheduled lookup is superseded. A trimmed query below
    /// the minimum length clears results immediately and issues nothing.
    pub fn edit(&mut self, text: impl Into<String>) -> Option<ScheduledLookup> {
        self.query = text.into();
        self.notice = None;
        let seq = self.next_ticket();

        let trimmed = self.query.trim();
        if trimmed.chars().count() < self.min_query_chars {
            self.pending = None;
            self.results.clear();
            self.status = SearchStatus::Idle;
            self.dropdown_visible = false;
            return None;
        }

        self.pending = Some(seq);
        Some(ScheduledLookup {
            seq,
            query: trimmed.to_string(),
            delay: self.debounce,
        })
    }

    /// The debounce timer for `seq` elapsed. Yields a request only when the
    /// ticket has not been superseded in the meantime.
    pub fn fire(&mut self, seq: u64) -> Option<LookupRequest> {
        if self.pending != Some(seq) {
            return None;
        }

        self.pending = None;
        self.status = SearchStatus::Searching;
        self.dropdown_visible = true;
        Some(LookupRequest {
            seq,
            query: self.query.trim().to_string(),
        })
    }

    /// A lookup finished. Returns `false` when the response was stale and
    /// dropped (a newer ticket exists).
    ///
    /// On success, only people whose department marks them as directors are
    /// kept; the upstream endpoint cannot filter by role. On failure the
    /// notice is calm and non-fatal; there is no automatic retry.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<Vec<PersonSummary>, String>,
    ) -> bool {
        if seq != self.ticket {
            return false;
        }

        match outcome {
            Ok(people) => {
                self.results = people.into_iter().filter(|p| p.is_director()).collect();
                self.status = if self.results.is_empty() {
                    SearchStatus::Empty
                } else {
                    SearchStatus::Showing
                };
                self.notice = None;
            }
            Err(notice) => {
                self.results.clear();
                self.status = SearchStatus::Failed;
                self.notice = Some(notice);
            }
        }
        self.dropdown_visible = true;
        true
    }

    /// The user picked a result: reset the surface and hand back a
    /// navigation intent for the host to route.
    pub fn select(&mut self, person: PersonId) -> NavigationIntent {
        self.clear();
        NavigationIntent { person }
    }

    /// Explicit clear (the X button): drop query, results, and anything
    /// pending or in flight.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.status = SearchStatus::Idle;
        self.dropdown_visible = false;
        self.notice = None;
        self.pending = None;
        self.next_ticket();
    }

    /// Hide the result list (click outside) without touching the query
    /// cache, so refocusing can resume.
    pub fn dismiss(&mut self) {
        self.dropdown_visible = false;
    }

    /// The input regained focus; re-show cached results when the query is
    /// still usable.
    pub fn refocus(&mut self) {
        if self.query.trim().chars().count() >= self.min_query_chars {
            self.dropdown_visible = true;
        }
    }

    fn next_ticket(&mut self) -> u64 {
        self.ticket += 1;
        self.ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helmer_model::PersonId;

    fn person(id: u64, name: &str, department: &str) -> PersonSummary {
        PersonSummary {
            id: PersonId::new(id).unwrap(),
            name: name.to_string(),
            profile_path: None,
            known_for_department: department.to_string(),
        }
    }

    fn machine() -> SearchMachine {
        SearchMachine::default()
    }

    #[test]
    fn short_queries_never_schedule_a_lookup() {
        let mut m = machine();

        assert!(m.edit("").is_none());
        assert!(m.edit("n").is_none());
        assert!(m.edit("  n  ").is_none());
        assert_eq!(m.status(), SearchStatus::Idle);
        assert!(m.results().is_empty());
    }

    #[test]
    fn shortening_the_query_suppresses_the_pending_lookup() {
        let mut m = machine();

        let scheduled = m.edit("no").unwrap();
        assert!(m.edit("n").is_none());

        // The old timer still goes off; it must not fire a request.
        assert!(m.fire(scheduled.seq).is_none());
    }

    #[test]
    fn rapid_edits_keep_only_the_final_lookup() {
        let mut m = machine();

        let first = m.edit("no").unwrap();
        let second = m.edit("nol").unwrap();
        let last = m.edit("nolan").unwrap();

        assert!(m.fire(first.seq).is_none());
        assert!(m.fire(second.seq).is_none());

        let request = m.fire(last.seq).unwrap();
        assert_eq!(request.query, "nolan");
        assert_eq!(m.status(), SearchStatus::Searching);
    }

    #[test]
    fn scheduled_query_is_trimmed() {
        let mut m = machine();
        let scheduled = m.edit("  nolan  ").unwrap();
        assert_eq!(scheduled.query, "nolan");
    }

    #[test]
    fn issue_order_wins_over_completion_order() {
        let mut m = machine();

        let a = m.edit("in").unwrap();
        let a = m.fire(a.seq).unwrap();

        let b = m.edit("inception").unwrap();
        let b = m.fire(b.seq).unwrap();

        // B completes first and applies.
        assert!(m.complete(b.seq, Ok(vec![person(1, "Nolan", "Directing")])));
        assert_eq!(m.status(), SearchStatus::Showing);

        // A arrives late and is dropped.
        assert!(!m.complete(a.seq, Ok(vec![person(2, "Stale", "Directing")])));
        assert_eq!(m.results().len(), 1);
        assert_eq!(m.results()[0].name, "Nolan");
    }

    #[test]
    fn response_after_clearing_edit_is_dropped() {
        let mut m = machine();

        let a = m.edit("no").unwrap();
        let a = m.fire(a.seq).unwrap();

        // Query drops below the minimum while the lookup is in flight.
        assert!(m.edit("n").is_none());
        assert!(!m.complete(a.seq, Ok(vec![person(1, "Late", "Directing")])));
        assert!(m.results().is_empty());
        assert_eq!(m.status(), SearchStatus::Idle);
    }

    #[test]
    fn only_directing_entries_survive() {
        let mut m = machine();

        let s = m.edit("nolan").unwrap();
        let r = m.fire(s.seq).unwrap();
        assert!(m.complete(
            r.seq,
            Ok(vec![
                person(1, "Christopher Nolan", "Directing"),
                person(2, "Jonathan Nolan", "Writing"),
            ])
        ));

        assert_eq!(m.status(), SearchStatus::Showing);
        assert_eq!(m.results().len(), 1);
        assert_eq!(m.results()[0].name, "Christopher Nolan");
    }

    #[test]
    fn zero_directors_is_empty_not_failed() {
        let mut m = machine();

        let s = m.edit("nolan").unwrap();
        let r = m.fire(s.seq).unwrap();
        assert!(m.complete(r.seq, Ok(vec![person(2, "Jonathan Nolan", "Writing")])));

        assert_eq!(m.status(), SearchStatus::Empty);
        assert!(m.results().is_empty());
        assert!(m.notice().is_none());
    }

    #[test]
    fn failure_clears_results_and_sets_notice() {
        let mut m = machine();

        let s = m.edit("nolan").unwrap();
        let r = m.fire(s.seq).unwrap();
        assert!(m.complete(r.seq, Err("search unavailable".to_string())));

        assert_eq!(m.status(), SearchStatus::Failed);
        assert!(m.results().is_empty());
        assert_eq!(m.notice(), Some("search unavailable"));

        // The next edit drops the stale notice.
        m.edit("nolan again");
        assert!(m.notice().is_none());
    }

    #[test]
    fn selecting_clears_and_emits_navigation() {
        let mut m = machine();

        let s = m.edit("nolan").unwrap();
        let r = m.fire(s.seq).unwrap();
        m.complete(r.seq, Ok(vec![person(525, "Christopher Nolan", "Directing")]));

        let intent = m.select(PersonId::new(525).unwrap());
        assert_eq!(intent.person.get(), 525);
        assert_eq!(m.query(), "");
        assert!(m.results().is_empty());
        assert!(!m.is_dropdown_visible());
    }

    #[test]
    fn response_landing_after_select_is_dropped() {
        let mut m = machine();

        let s = m.edit("nolan").unwrap();
        let r = m.fire(s.seq).unwrap();
        m.select(PersonId::new(525).unwrap());

        assert!(!m.complete(r.seq, Ok(vec![person(1, "Late", "Directing")])));
        assert!(m.results().is_empty());
    }

    #[test]
    fn dismissal_keeps_the_query_cache_for_refocus() {
        let mut m = machine();

        let s = m.edit("nolan").unwrap();
        let r = m.fire(s.seq).unwrap();
        m.complete(r.seq, Ok(vec![person(1, "Christopher Nolan", "Directing")]));

        m.dismiss();
        assert!(!m.is_dropdown_visible());
        assert_eq!(m.query(), "nolan");
        assert_eq!(m.results().len(), 1);

        m.refocus();
        assert!(m.is_dropdown_visible());
    }

    #[test]
    fn refocus_with_short_query_stays_hidden() {
        let mut m = machine();
        m.edit("n");
        m.refocus();
        assert!(!m.is_dropdown_visible());
    }
}
