// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Blocking HTTP client for the remote catalog service. One generic path
//! per verb; the record kind picks the collection segment of the URL.

use anyhow::{Context, Result, bail};
use fleetdesk_app::{CatalogError, CatalogRecord, Page};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    asset_base: Url,
    timeout: Duration,
    http: HttpClient,
}

impl CatalogClient {
    pub fn new(base_url: &str, asset_base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("service.base_url must not be empty");
        }
        let asset_base = Url::parse(asset_base_url)
            .with_context(|| format!("service.asset_base_url {asset_base_url:?} is not a URL"))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            asset_base,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves a relative image path stored on a record against the asset
    /// host. Absolute inputs pass through unchanged by `Url::join` rules.
    pub fn asset_url(&self, relative: &str) -> Result<Url> {
        self.asset_base
            .join(relative)
            .with_context(|| format!("resolve asset path {relative:?}"))
    }

    /// Fetches one server page of the kind's collection.
    pub fn page<R>(&self, page: u32, limit: u32) -> Result<Page<R>, CatalogError>
    where
        R: CatalogRecord + DeserializeOwned,
    {
        let url = format!(
            "{}/{}?page={page}&limit={limit}",
            self.base_url,
            R::KIND
        );
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|error| connection_error(&self.base_url, &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CatalogError::fetch(server_message(status, &body)));
        }

        let envelope: PageEnvelope<R> = response
            .json()
            .map_err(|error| CatalogError::decode(format!("{} page: {error}", R::KIND)))?;
        Ok(Page::new(
            envelope.data,
            page,
            envelope.pagination.total_pages,
        ))
    }

    /// Sends a status change for one record.
    pub fn update_status<R>(&self, id: &R::Id, status: &str) -> Result<(), CatalogError>
    where
        R: CatalogRecord,
        R::Id: Display,
    {
        let url = format!("{}/{}/{id}/status", self.base_url, R::KIND);
        log::debug!("PATCH {url} -> {status}");

        let response = self
            .http
            .patch(&url)
            .json(&serde_json::json!({ "status": status }))
            .send()
            .map_err(|error| connection_error(&self.base_url, &error))?;

        let http_status = response.status();
        if !http_status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CatalogError::command(server_message(http_status, &body)));
        }
        Ok(())
    }

    /// Deletes one record from the catalog.
    pub fn remove<R>(&self, id: &R::Id) -> Result<(), CatalogError>
    where
        R: CatalogRecord,
        R::Id: Display,
    {
        let url = format!("{}/{}/{id}", self.base_url, R::KIND);
        log::debug!("DELETE {url}");

        let response = self
            .http
            .delete(&url)
            .send()
            .map_err(|error| connection_error(&self.base_url, &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CatalogError::command(server_message(status, &body)));
        }
        Ok(())
    }
}

fn connection_error(base_url: &str, error: &reqwest::Error) -> CatalogError {
    CatalogError::fetch(format!(
        "cannot reach {base_url} -- is the catalog service running? ({error})"
    ))
}

fn server_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(message) = parsed.message
        && !message.is_empty()
    {
        return format!("server error ({}): {message}", status.as_u16());
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return format!("server error ({}): {}", status.as_u16(), body.trim());
    }

    format!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageEnvelope<R> {
    data: Vec<R>,
    pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
struct PaginationMeta {
    #[serde(rename = "totalPages")]
    total_pages: u32,
}
