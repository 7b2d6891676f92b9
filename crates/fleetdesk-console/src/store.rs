// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdesk_app::{CatalogRecord, Page};

/// Holds the current server page. Pages are replaced wholesale on install;
/// the only in-place mutation is the explicit local-patch path used by
/// status reconciliation.
///
/// Every load carries a monotonically increasing sequence number. A
/// response is installed only if no newer response has been installed
/// already: highest sequence wins, so a stale fetch that resolves late can
/// never overwrite a newer page. Nothing is canceled; stale responses are
/// simply dropped.
#[derive(Debug, Clone)]
pub struct CollectionStore<R> {
    page: Page<R>,
    next_seq: u64,
    installed_seq: u64,
}

/// Proof that a load was issued, carrying its sequence number and the page
/// index that was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    page_index: u32,
}

impl LoadTicket {
    pub fn page_index(&self) -> u32 {
        self.page_index
    }
}

impl<R: CatalogRecord> Default for CollectionStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CatalogRecord> CollectionStore<R> {
    pub fn new() -> Self {
        Self {
            page: Page::empty(),
            next_seq: 0,
            installed_seq: 0,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.page.records
    }

    pub fn page_index(&self) -> u32 {
        self.page.page_index
    }

    pub fn total_pages(&self) -> u32 {
        self.page.total_pages
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.page.records.iter().find(|record| record.id() == id)
    }

    /// Issues the next load. Call once per fetch, before the request goes
    /// out, so interleaved responses resolve by issue order.
    pub fn begin_load(&mut self, page_index: u32) -> LoadTicket {
        self.next_seq += 1;
        LoadTicket {
            seq: self.next_seq,
            page_index,
        }
    }

    /// Replaces the page atomically. Returns false (and leaves the store
    /// untouched) when a newer load has already been installed.
    pub fn install(&mut self, ticket: LoadTicket, page: Page<R>) -> bool {
        if ticket.seq < self.installed_seq {
            log::warn!(
                "{}: dropping stale page {} (seq {} < {})",
                R::KIND,
                ticket.page_index,
                ticket.seq,
                self.installed_seq
            );
            return false;
        }
        log::debug!(
            "{}: installed page {}/{} ({} records, seq {})",
            R::KIND,
            page.page_index,
            page.total_pages,
            page.records.len(),
            ticket.seq
        );
        self.installed_seq = ticket.seq;
        self.page = page;
        true
    }

    /// The local-patch reconciliation path: applies a status value to the
    /// matching record in place, preserving its page position and every
    /// other field. Returns false when the record is not on this page or
    /// the value is outside the kind's vocabulary.
    pub fn patch_status(&mut self, id: &R::Id, status: &str) -> bool {
        match self.page.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => record.patch_status(status),
            None => false,
        }
    }
}
