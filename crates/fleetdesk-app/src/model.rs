// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use time::OffsetDateTime;

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Active,
    Inactive,
}

impl Availability {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    pub const fn from_flag(available: bool) -> Self {
        if available { Self::Active } else { Self::Inactive }
    }

    pub const fn is_available(self) -> bool {
        matches!(self, Self::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStatus {
    Pending,
    Approved,
    Rejected,
}

impl ProviderStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Individual,
    Company,
}

impl BusinessType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "individual" => Some(Self::Individual),
            "company" => Some(Self::Company),
            _ => None,
        }
    }
}

/// How the local page is brought back in line with the server after a
/// successful status command. Local patch preserves page position but can
/// drift from server-derived counters; re-fetch is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcilePolicy {
    LocalPatch,
    Refetch,
}

/// Equipment category vocabulary used by the console's facet filter.
pub const EQUIPMENT_CATEGORIES: [&str; 7] = [
    "excavators",
    "bulldozers",
    "cranes",
    "trucks",
    "concrete",
    "generators",
    "other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(rename = "_id", default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "userId", default)]
    pub reviewer: Option<UserRef>,
    pub rating: i32,
    #[serde(default)]
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRecord {
    #[serde(rename = "_id")]
    pub id: EquipmentId,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub weekly_rate: Option<f64>,
    #[serde(default)]
    pub monthly_rate: Option<f64>,
    pub availability: bool,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub ratings_count: i64,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub rentals_count: i64,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "ownerId", default)]
    pub owner: Option<UserRef>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    #[serde(rename = "_id")]
    pub id: ProviderId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub address: String,
    pub status: ProviderStatus,
    #[serde(default)]
    pub business_type: Option<BusinessType>,
    #[serde(default)]
    pub years_of_experience: Option<i64>,
    #[serde(default)]
    pub equipment_types: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tax_number: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub identity_document: Option<String>,
    #[serde(default)]
    pub commercial_register: Option<String>,
    #[serde(default)]
    pub equipment_count: i64,
    #[serde(default)]
    pub active_rentals: i64,
    #[serde(default)]
    pub completed_rentals: i64,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// One server-fetched slice of the collection.
///
/// Invariant: `1 <= page_index <= total_pages` once a page is installed in
/// a store; a server `total_pages` of 0 (empty collection) is normalized to
/// a single empty page at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub records: Vec<R>,
    pub page_index: u32,
    pub total_pages: u32,
}

impl<R> Page<R> {
    pub fn new(records: Vec<R>, page_index: u32, total_pages: u32) -> Self {
        Self {
            records,
            page_index,
            total_pages: total_pages.max(1),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 1, 1)
    }
}

/// The seam the generalized collection controller works against. Both
/// record kinds of the console (rentable equipment, affiliated providers)
/// implement it; everything above this trait is kind-agnostic.
pub trait CatalogRecord: Clone {
    type Id: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// Path segment and log label for this record kind.
    const KIND: &'static str;

    /// Reconciliation strategy applied after a successful status command.
    const STATUS_POLICY: ReconcilePolicy;

    fn id(&self) -> &Self::Id;

    /// Text fields the search predicate matches against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value the equality facet filter compares (category or status).
    fn facet(&self) -> &str;

    fn price(&self) -> Option<f64>;

    /// Rating aggregate with a missing rating treated as 0.
    fn rating(&self) -> f64;

    fn created_at(&self) -> OffsetDateTime;

    /// Applies a wire status value in place. Returns false when the value
    /// is not part of this kind's status vocabulary; the record is left
    /// untouched in that case.
    fn patch_status(&mut self, status: &str) -> bool;
}

impl CatalogRecord for EquipmentRecord {
    type Id = EquipmentId;

    const KIND: &'static str = "equipment";

    // The availability toggle re-fetches: rental counters and view counts
    // are recomputed server-side.
    const STATUS_POLICY: ReconcilePolicy = ReconcilePolicy::Refetch;

    fn id(&self) -> &EquipmentId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.manufacturer, &self.model]
    }

    fn facet(&self) -> &str {
        &self.category
    }

    fn price(&self) -> Option<f64> {
        self.daily_rate
    }

    fn rating(&self) -> f64 {
        self.average_rating.unwrap_or(0.0)
    }

    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    fn patch_status(&mut self, status: &str) -> bool {
        match Availability::parse(status) {
            Some(value) => {
                self.availability = value.is_available();
                true
            }
            None => false,
        }
    }
}

impl CatalogRecord for ProviderRecord {
    type Id = ProviderId;

    const KIND: &'static str = "providers";

    // Approval/rejection patches in place, preserving page position.
    const STATUS_POLICY: ReconcilePolicy = ReconcilePolicy::LocalPatch;

    fn id(&self) -> &ProviderId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.company_name, &self.phone]
    }

    fn facet(&self) -> &str {
        self.status.as_str()
    }

    fn price(&self) -> Option<f64> {
        None
    }

    fn rating(&self) -> f64 {
        self.average_rating.unwrap_or(0.0)
    }

    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    fn patch_status(&mut self, status: &str) -> bool {
        match ProviderStatus::parse(status) {
            Some(value) => {
                self.status = value;
                true
            }
            None => false,
        }
    }
}
