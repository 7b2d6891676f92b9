// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use fleetdesk_api::CatalogClient;
use fleetdesk_app::{CatalogError, CatalogRecord, Page};
use fleetdesk_console::CatalogService;
use serde::de::DeserializeOwned;

/// Binds the generic service seam to the blocking HTTP client. One adapter
/// serves both record kinds; the kind picks its own URL segment.
pub struct HttpCatalog<'a> {
    client: &'a CatalogClient,
}

impl<'a> HttpCatalog<'a> {
    pub fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }
}

impl<R> CatalogService<R> for HttpCatalog<'_>
where
    R: CatalogRecord + DeserializeOwned,
{
    fn fetch_page(&mut self, page: u32, limit: u32) -> Result<Page<R>, CatalogError> {
        self.client.page(page, limit)
    }

    fn update_status(&mut self, id: &R::Id, status: &str) -> Result<(), CatalogError> {
        self.client.update_status::<R>(id, status)
    }

    fn remove(&mut self, id: &R::Id) -> Result<(), CatalogError> {
        self.client.remove::<R>(id)
    }
}
