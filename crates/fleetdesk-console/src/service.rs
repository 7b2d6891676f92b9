// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdesk_app::{CatalogError, CatalogRecord, Page};

/// The remote catalog/partner service as the controller sees it.
///
/// The HTTP client implements this per record kind; tests substitute an
/// in-memory catalog. Calls are synchronous from the controller's point of
/// view; the hosting event loop decides where they run.
pub trait CatalogService<R: CatalogRecord> {
    /// Fetches one page. `limit` is the fixed page size.
    fn fetch_page(&mut self, page: u32, limit: u32) -> Result<Page<R>, CatalogError>;

    /// Sends a partial status update (`PATCH .../{id}/status`).
    fn update_status(&mut self, id: &R::Id, status: &str) -> Result<(), CatalogError>;

    /// Sends the destructive delete (`DELETE .../{id}`). Confirmation is
    /// the controller's concern, not the service's.
    fn remove(&mut self, id: &R::Id) -> Result<(), CatalogError>;
}
