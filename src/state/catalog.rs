/// Paginated catalog loader
///
/// Owns the growing entry list and the loading flags the grid renders from.
/// The loader itself is synchronous: every operation that needs data returns
/// a `PageRequest` for the shell to resolve asynchronously, and the result
/// comes back through `resolve`. Requests carry the epoch they were issued
/// under, so a page that arrives after a `refresh` is dropped instead of
/// corrupting the reset list.
use super::data::CatalogEntry;
use super::observe::{Notifier, SubscriberId};
use thiserror::Error;

/// Number of entries requested per page.
pub const PAGE_SIZE: usize = 8;

/// How close (in logical pixels) the scroll position must come to the end
/// of the grid before the shell asks for the next page.
pub const SCROLL_THRESHOLD: f32 = 200.0;

/// Failure surfaced by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch page {cursor}: {reason}")]
pub struct FetchError {
    /// Page index the failed request was for
    pub cursor: usize,
    /// Human-readable cause, shown in the error banner
    pub reason: String,
}

/// A fetch the shell must perform on the loader's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Loader epoch at the time the request was issued
    pub epoch: u64,
    /// Page index to fetch
    pub cursor: usize,
    /// Maximum number of entries in the page
    pub size: usize,
}

/// Events delivered to observers, strictly after the mutation they describe.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// The first page is in flight; skeleton placeholders should be shown
    InitialLoading,
    /// A follow-up page is in flight; the footer spinner should be shown
    LoadingMore,
    /// A page resolved and `appended` entries joined the list
    PageLoaded { appended: usize },
    /// An empty page came back; the dataset is exhausted
    Exhausted,
    /// A refresh cleared the list; the grid should fall back to skeletons
    Cleared,
    /// A fetch failed; in-flight flags were cleared
    Failed(FetchError),
}

/// The catalog loader state machine.
pub struct CatalogLoader {
    entries: Vec<CatalogEntry>,
    page_cursor: usize,
    initial_loading: bool,
    loading_more: bool,
    has_more: bool,
    error: Option<FetchError>,
    epoch: u64,
    started: bool,
    notifier: Notifier<CatalogEvent>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        CatalogLoader {
            entries: Vec::new(),
            page_cursor: 0,
            initial_loading: false,
            loading_more: false,
            has_more: true,
            error: None,
            epoch: 0,
            started: false,
            notifier: Notifier::new(),
        }
    }

    /// Request the first page. Effective exactly once per session; repeat
    /// calls return `None` without touching state.
    pub fn initialize(&mut self) -> Option<PageRequest> {
        if self.started {
            return None;
        }
        self.started = true;
        self.initial_loading = true;
        self.notifier.notify(&CatalogEvent::InitialLoading);
        Some(self.request())
    }

    /// Request the next page.
    ///
    /// No-op returning `None` while a fetch is already in flight or the
    /// dataset is exhausted. The guard makes the scroll trigger forgiving:
    /// the shell may call this on every scroll event without producing
    /// duplicate fetches.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if !self.started || self.initial_loading || self.loading_more || !self.has_more {
            return None;
        }
        self.loading_more = true;
        self.notifier.notify(&CatalogEvent::LoadingMore);
        Some(self.request())
    }

    /// Drop everything and start over from page 0.
    ///
    /// Bumps the epoch first, so a page still in flight for the old list
    /// resolves as stale and is discarded.
    pub fn refresh(&mut self) -> PageRequest {
        self.epoch += 1;
        self.entries.clear();
        self.page_cursor = 0;
        self.has_more = true;
        self.loading_more = false;
        self.initial_loading = true;
        self.error = None;
        self.started = true;
        self.notifier.notify(&CatalogEvent::Cleared);
        self.request()
    }

    /// Feed the result of a previously issued `PageRequest` back in.
    ///
    /// A result whose epoch no longer matches belonged to a superseded
    /// session and is ignored entirely: no state change, no notification.
    pub fn resolve(&mut self, epoch: u64, result: Result<Vec<CatalogEntry>, FetchError>) {
        if epoch != self.epoch {
            return;
        }

        self.initial_loading = false;
        self.loading_more = false;

        match result {
            Ok(page) => {
                self.error = None;
                if page.is_empty() {
                    // Exhaustion is signalled by an empty page, not a short
                    // one: a short page still advances the cursor so the
                    // next request can observe the end.
                    self.has_more = false;
                    self.notifier.notify(&CatalogEvent::Exhausted);
                } else {
                    let appended = page.len();
                    self.entries.extend(page);
                    self.page_cursor += 1;
                    self.notifier.notify(&CatalogEvent::PageLoaded { appended });
                }
            }
            Err(error) => {
                self.error = Some(error.clone());
                self.notifier.notify(&CatalogEvent::Failed(error));
            }
        }
    }

    fn request(&self) -> PageRequest {
        PageRequest {
            epoch: self.epoch,
            cursor: self.page_cursor,
            size: PAGE_SIZE,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_initial_loading(&self) -> bool {
        self.initial_loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn page_cursor(&self) -> usize {
        self.page_cursor
    }

    /// Register an observer for catalog events.
    pub fn subscribe(&mut self, callback: impl Fn(&CatalogEvent) + Send + 'static) -> SubscriberId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::synthetic_page;
    use std::sync::{Arc, Mutex};

    const TOTAL: usize = 60;

    fn recording_loader() -> (CatalogLoader, Arc<Mutex<Vec<CatalogEvent>>>) {
        let mut loader = CatalogLoader::new();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        loader.subscribe(move |event: &CatalogEvent| sink.lock().unwrap().push(event.clone()));
        (loader, events)
    }

    fn event_count(events: &Arc<Mutex<Vec<CatalogEvent>>>) -> usize {
        events.lock().unwrap().len()
    }

    /// Resolve a request against the deterministic synthetic dataset.
    fn resolve_synthetic(loader: &mut CatalogLoader, request: PageRequest) {
        let page = synthetic_page(request.cursor, request.size, TOTAL);
        loader.resolve(request.epoch, Ok(page));
    }

    #[test]
    fn test_initialize_is_effective_once() {
        let (mut loader, events) = recording_loader();

        let first = loader.initialize().expect("first call issues a request");
        assert_eq!(first.cursor, 0);
        assert!(loader.is_initial_loading());

        assert!(loader.initialize().is_none());
        assert_eq!(event_count(&events), 1);
    }

    #[test]
    fn test_at_most_one_fetch_in_flight() {
        let (mut loader, events) = recording_loader();

        // While the initial page is in flight, load_more must not start a
        // second fetch.
        let initial = loader.initialize().unwrap();
        assert!(loader.load_more().is_none());
        resolve_synthetic(&mut loader, initial);

        let request = loader.load_more().expect("next page requested");
        let before = event_count(&events);
        assert!(loader.load_more().is_none());
        assert!(loader.load_more().is_none());
        assert_eq!(event_count(&events), before);

        resolve_synthetic(&mut loader, request);
        assert_eq!(loader.entries().len(), 2 * PAGE_SIZE);
    }

    #[test]
    fn test_exhaustion_silences_load_more() {
        let (mut loader, events) = recording_loader();

        let initial = loader.initialize().unwrap();
        resolve_synthetic(&mut loader, initial);

        // Drain the dataset.
        while let Some(request) = loader.load_more() {
            resolve_synthetic(&mut loader, request);
        }

        assert!(!loader.has_more());
        let before = event_count(&events);
        assert!(loader.load_more().is_none());
        assert!(loader.load_more().is_none());
        assert_eq!(event_count(&events), before);
        assert_eq!(loader.entries().len(), TOTAL);
    }

    #[test]
    fn test_sixty_entry_boundary() {
        // 60 entries in pages of 8: the initial page plus six full pages
        // makes 56, the seventh load_more returns the 4-entry tail, the
        // eighth comes back empty and flips has_more.
        let (mut loader, _events) = recording_loader();

        let initial = loader.initialize().unwrap();
        resolve_synthetic(&mut loader, initial);
        assert_eq!(loader.entries().len(), 8);

        for expected in [16, 24, 32, 40, 48, 56, 60] {
            let request = loader.load_more().unwrap();
            resolve_synthetic(&mut loader, request);
            assert_eq!(loader.entries().len(), expected);
            assert!(loader.has_more());
        }

        let request = loader.load_more().expect("exhaustion not yet observed");
        resolve_synthetic(&mut loader, request);
        assert_eq!(loader.entries().len(), TOTAL);
        assert!(!loader.has_more());
        assert!(loader.load_more().is_none());
    }

    #[test]
    fn test_refresh_resets_and_drops_stale_page() {
        let (mut loader, events) = recording_loader();

        let initial = loader.initialize().unwrap();
        resolve_synthetic(&mut loader, initial);
        let stale = loader.load_more().expect("page 1 in flight");

        let fresh = loader.refresh();
        assert!(loader.entries().is_empty());
        assert!(loader.is_initial_loading());
        assert_eq!(fresh.cursor, 0);

        // The superseded fetch resolves late: it must not touch the list
        // and must not notify.
        let before = event_count(&events);
        loader.resolve(stale.epoch, Ok(synthetic_page(stale.cursor, stale.size, TOTAL)));
        assert!(loader.entries().is_empty());
        assert_eq!(event_count(&events), before);

        resolve_synthetic(&mut loader, fresh);
        assert_eq!(loader.entries().len(), PAGE_SIZE);
        assert_eq!(loader.page_cursor(), 1);
        assert!(!loader.is_initial_loading());
    }

    #[test]
    fn test_fetch_failure_clears_flags_and_surfaces_error() {
        let (mut loader, events) = recording_loader();

        let initial = loader.initialize().unwrap();
        resolve_synthetic(&mut loader, initial);

        let request = loader.load_more().unwrap();
        let failure = FetchError {
            cursor: request.cursor,
            reason: "synthetic outage".to_string(),
        };
        loader.resolve(request.epoch, Err(failure.clone()));

        // No stuck spinner, and the failure is visible to the shell.
        assert!(!loader.is_loading_more());
        assert!(!loader.is_initial_loading());
        assert_eq!(loader.error(), Some(&failure));
        assert!(matches!(
            events.lock().unwrap().last(),
            Some(CatalogEvent::Failed(_))
        ));

        // No auto-retry: the caller decides. A fresh load_more succeeds and
        // clears the error.
        let retry = loader.load_more().expect("retry allowed after failure");
        resolve_synthetic(&mut loader, retry);
        assert!(loader.error().is_none());
        assert_eq!(loader.entries().len(), 2 * PAGE_SIZE);
    }

    #[test]
    fn test_load_more_before_initialize_is_rejected() {
        let (mut loader, events) = recording_loader();
        assert!(loader.load_more().is_none());
        assert_eq!(event_count(&events), 0);
    }
}
