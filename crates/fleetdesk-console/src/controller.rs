// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdesk_app::{
    CatalogError, CatalogRecord, FacetFilter, FilterCriteria, PageStripEntry, PagerState,
    PriceBand, ReconcilePolicy, SelectionState, SortKey, page_strip, project,
};

use crate::service::CatalogService;
use crate::store::CollectionStore;

/// The paginated collection controller: one server page held locally,
/// client-side projection on top, single-record detail selection, and
/// mutating commands reconciled against the remote service.
///
/// All mutating entry points take the service explicitly so the projection
/// and state transitions stay deterministic under test. A command failure
/// returns the error and leaves every piece of local state unchanged; the
/// operator retries by re-triggering the command.
#[derive(Debug)]
pub struct CollectionController<R: CatalogRecord> {
    store: CollectionStore<R>,
    criteria: FilterCriteria,
    selection: SelectionState<R::Id>,
    pager: PagerState,
    page_size: u32,
    pending_removal: Option<R::Id>,
}

impl<R: CatalogRecord> CollectionController<R> {
    pub fn new(page_size: u32) -> Self {
        Self {
            store: CollectionStore::new(),
            criteria: FilterCriteria::default(),
            selection: SelectionState::default(),
            pager: PagerState::default(),
            page_size: page_size.max(1),
            pending_removal: None,
        }
    }

    // --- page loading ---

    /// Loads (or reloads) the page the pager currently points at.
    pub fn refresh(&mut self, service: &mut impl CatalogService<R>) -> Result<(), CatalogError> {
        self.load_page(service, self.pager.current())
    }

    /// Fetches `page` and moves to it. Out-of-range targets are no-ops.
    /// The pager only advances once the page installs, so a failed load
    /// leaves both the records and the reported page index on the previous
    /// page.
    pub fn go_to(
        &mut self,
        service: &mut impl CatalogService<R>,
        page: u32,
    ) -> Result<bool, CatalogError> {
        if !self.pager.in_range(page) {
            return Ok(false);
        }
        self.load_page(service, page)?;
        Ok(true)
    }

    pub fn next_page(
        &mut self,
        service: &mut impl CatalogService<R>,
    ) -> Result<bool, CatalogError> {
        self.go_to(service, self.pager.current() + 1)
    }

    pub fn prev_page(
        &mut self,
        service: &mut impl CatalogService<R>,
    ) -> Result<bool, CatalogError> {
        match self.pager.current() {
            1 => Ok(false),
            current => self.go_to(service, current - 1),
        }
    }

    fn load_page(
        &mut self,
        service: &mut impl CatalogService<R>,
        page_index: u32,
    ) -> Result<(), CatalogError> {
        let ticket = self.store.begin_load(page_index);
        // On failure the ticket is abandoned and the store keeps its last
        // good page: stale but consistent.
        let page = service.fetch_page(page_index, self.page_size)?;
        if self.store.install(ticket, page) {
            self.pager
                .sync(self.store.page_index(), self.store.total_pages());
            self.selection
                .retain_present(self.store.records().iter().map(CatalogRecord::id));
        }
        Ok(())
    }

    // --- projection ---

    /// The displayed sequence: the current page filtered and sorted by the
    /// operator's criteria. Scoped to this page only.
    pub fn displayed(&self) -> Vec<R> {
        project(self.store.records(), &self.criteria)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
    }

    pub fn set_facet(&mut self, facet: FacetFilter) {
        self.criteria.facet = facet;
    }

    pub fn set_price_band(&mut self, band: PriceBand) {
        self.criteria.price_band = band;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.criteria.sort_key = key;
    }

    pub fn reset_filters(&mut self) {
        self.criteria.reset_filters();
    }

    /// True when the loaded page itself has no records.
    pub fn page_is_empty(&self) -> bool {
        self.store.records().is_empty()
    }

    /// True when the page has records but the criteria match none of them,
    /// so the presentation can say "no results" instead of "empty page".
    pub fn no_matches(&self) -> bool {
        !self.page_is_empty() && self.displayed().is_empty()
    }

    // --- pagination metadata ---

    pub fn page_index(&self) -> u32 {
        self.pager.current()
    }

    pub fn total_pages(&self) -> u32 {
        self.pager.total()
    }

    pub fn page_strip(&self) -> Vec<PageStripEntry> {
        page_strip(self.pager.current(), self.pager.total())
    }

    // --- selection / detail ---

    pub fn open_detail(&mut self, id: R::Id) {
        self.selection.open(id);
    }

    pub fn close_detail(&mut self) {
        self.selection.close();
    }

    /// The record behind the open detail view. None when nothing is
    /// selected or the record has left the current page.
    pub fn detail_record(&self) -> Option<&R> {
        self.selection
            .selected()
            .and_then(|id| self.store.get(id))
    }

    pub fn toggle_expand(&mut self, id: R::Id) {
        self.selection.toggle_expand(id);
    }

    pub fn is_expanded(&self, id: &R::Id) -> bool {
        self.selection.is_expanded(id)
    }

    pub fn records(&self) -> &[R] {
        self.store.records()
    }

    // --- commands ---

    /// Sends a status change and reconciles by the kind's declared policy:
    /// local patch keeps the record in place with only its status changed;
    /// re-fetch reloads the current page from the server.
    pub fn set_status(
        &mut self,
        service: &mut impl CatalogService<R>,
        id: &R::Id,
        status: &str,
    ) -> Result<(), CatalogError> {
        service.update_status(id, status)?;
        match R::STATUS_POLICY {
            ReconcilePolicy::LocalPatch => {
                if !self.store.patch_status(id, status) {
                    log::warn!("{}: local patch found no record {id}", R::KIND);
                }
                Ok(())
            }
            ReconcilePolicy::Refetch => self.load_page(service, self.pager.current()),
        }
    }

    /// First half of the removal protocol: marks the record as pending
    /// confirmation. Nothing is sent until `confirm_removal`.
    pub fn request_removal(&mut self, id: R::Id) {
        self.pending_removal = Some(id);
    }

    pub fn pending_removal(&self) -> Option<&R::Id> {
        self.pending_removal.as_ref()
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    /// Second half of the removal protocol: sends the delete and re-fetches
    /// the current page. When the page comes back empty and it was not page
    /// 1, the controller steps back one page so the operator never strands
    /// on an empty tail page. A failed delete keeps the confirmation
    /// pending; it is never auto-retried.
    pub fn confirm_removal(
        &mut self,
        service: &mut impl CatalogService<R>,
    ) -> Result<(), CatalogError> {
        let Some(id) = self.pending_removal.clone() else {
            return Ok(());
        };
        service.remove(&id)?;
        self.pending_removal = None;

        self.load_page(service, self.pager.current())?;
        if self.store.records().is_empty() && self.store.page_index() > 1 {
            let previous = self.store.page_index() - 1;
            self.load_page(service, previous)?;
        }
        Ok(())
    }
}
