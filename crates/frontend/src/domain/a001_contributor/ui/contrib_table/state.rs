use contracts::domain::a001_contributor::{Contributor, OrgQuery, OrgResponse};
use contracts::enums::CacheMode;

use crate::domain::a001_contributor::api::FetchError;
use crate::domain::a001_contributor::events::ErrorEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TablePhase {
    InitialLoad,
    Loaded,
    Error,
}

/// A fetch handed out by [`ContribTableState`]; only the newest ticket may land
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingFetch {
    pub ticket: u64,
    pub query: OrgQuery,
}

/// Pager, cache and loading state of one contributors table
#[derive(Clone, Debug)]
pub struct ContribTableState {
    // Rows of the current page
    pub items: Vec<Contributor>,

    // Pagination
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,

    /// `None` until the first fetch settles
    pub cache: Option<CacheMode>,
    pub is_loading: bool,
    pub phase: TablePhase,

    latest_ticket: u64,
}

impl ContribTableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            page_size: page_size.max(1),
            total_count: 0,
            total_pages: 0,
            cache: None,
            is_loading: true,
            phase: TablePhase::InitialLoad,
            latest_ticket: 0,
        }
    }

    fn next_fetch(&mut self) -> PendingFetch {
        self.latest_ticket += 1;
        self.is_loading = true;
        PendingFetch {
            ticket: self.latest_ticket,
            query: OrgQuery::new(
                (self.page + 1) as u32,
                self.page_size as u32,
                self.cache,
            ),
        }
    }

    /// Fetch for activation and pager events: clears the rows while in flight
    pub fn begin_page_load(&mut self) -> PendingFetch {
        self.items.clear();
        self.next_fetch()
    }

    pub fn go_to_page(&mut self, page: usize) -> PendingFetch {
        self.page = page;
        self.begin_page_load()
    }

    /// Keeps the first row that was on screen on the new page
    pub fn change_page_size(&mut self, size: usize) -> PendingFetch {
        let size = size.max(1);
        let first_row = self.page * self.page_size;
        self.page_size = size;
        self.page = first_row / size;
        self.begin_page_load()
    }

    /// User-triggered reload of the current page; rows stay until the answer arrives
    pub fn begin_refresh(&mut self, force: bool) -> PendingFetch {
        self.cache = Some(CacheMode::for_refresh(force));
        self.next_fetch()
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest_ticket
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns the event to report upward when the fetch failed. Results of
    /// superseded tickets are dropped without touching state.
    pub fn complete(
        &mut self,
        ticket: u64,
        result: Result<OrgResponse, FetchError>,
    ) -> Option<ErrorEvent> {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale response for ticket {} (latest {})",
                ticket,
                self.latest_ticket
            );
            return None;
        }

        self.is_loading = false;
        self.cache = Some(CacheMode::Cached);

        match result {
            Ok(resp) => {
                let nav = resp.navigation;
                self.items = resp.data;
                self.page_size = (nav.per_page as usize).max(1);
                self.total_count = nav.total_contributors as usize;
                self.total_pages = if nav.total_pages > 0 {
                    nav.total_pages as usize
                } else {
                    page_count(self.total_count, self.page_size)
                };
                self.phase = TablePhase::Loaded;
                None
            }
            Err(err) => {
                self.items.clear();
                self.phase = TablePhase::Error;
                Some(ErrorEvent::from(&err))
            }
        }
    }
}

/// Number of pages needed for `total` rows
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}
