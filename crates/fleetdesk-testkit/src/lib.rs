// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Deterministic fixtures for the console: record builders seeded from
//! constant pools, and an in-memory catalog service that paginates a flat
//! record list the way the remote service does.

use fleetdesk_app::{
    CatalogError, CatalogRecord, EQUIPMENT_CATEGORIES, EquipmentId, EquipmentRecord, Page,
    ProviderId, ProviderRecord, ProviderStatus, UserRef,
};
use fleetdesk_console::CatalogService;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

const EQUIPMENT_TITLES: [&str; 8] = [
    "Crawler excavator",
    "Wheel loader",
    "Tower crane",
    "Dump truck",
    "Concrete mixer",
    "Diesel generator",
    "Mini excavator",
    "Telehandler",
];

const MANUFACTURERS: [&str; 6] = ["CAT", "Komatsu", "Liebherr", "Volvo", "Hitachi", "JCB"];

const PROVIDER_NAMES: [&str; 8] = [
    "Omar Haddad",
    "Lina Khoury",
    "Samir Aziz",
    "Rana Nasser",
    "Fadi Saleh",
    "Maya Darwish",
    "Karim Mansour",
    "Nour Habib",
];

const COMPANY_SUFFIXES: [&str; 4] = ["Rentals", "Machinery", "Equipment Co", "Heavy Works"];

const EPOCH: OffsetDateTime = datetime!(2025-01-01 00:00 UTC);

/// A fully populated equipment record. `index` seeds every varying field so
/// fixtures are reproducible and distinct.
pub fn equipment(index: usize) -> EquipmentRecord {
    let title = EQUIPMENT_TITLES[index % EQUIPMENT_TITLES.len()];
    EquipmentRecord {
        id: EquipmentId::new(format!("eq-{index:04}")),
        title: format!("{title} #{index}"),
        category: EQUIPMENT_CATEGORIES[index % EQUIPMENT_CATEGORIES.len()].to_owned(),
        manufacturer: MANUFACTURERS[index % MANUFACTURERS.len()].to_owned(),
        model: format!("M{}", 100 + index),
        year: Some(2015 + (index % 10) as i32),
        daily_rate: Some(100.0 + (index as f64) * 25.0),
        weekly_rate: None,
        monthly_rate: None,
        availability: true,
        average_rating: Some(3.0 + (index % 3) as f64 * 0.5),
        ratings_count: index as i64,
        views: (index * 7) as i64,
        rentals_count: (index % 5) as i64,
        main_image: format!("uploads/equipment/{index}.jpg"),
        additional_images: Vec::new(),
        location: "Amman".to_owned(),
        condition: "good".to_owned(),
        description: String::new(),
        owner: Some(UserRef {
            id: None,
            name: PROVIDER_NAMES[index % PROVIDER_NAMES.len()].to_owned(),
        }),
        reviews: Vec::new(),
        created_at: EPOCH + Duration::days(index as i64),
    }
}

/// Equipment with explicit projection-relevant fields; everything else is
/// the deterministic default.
pub fn equipment_priced(id: &str, title: &str, daily_rate: Option<f64>) -> EquipmentRecord {
    let mut record = equipment(0);
    record.id = EquipmentId::from(id);
    record.title = title.to_owned();
    record.daily_rate = daily_rate;
    record
}

pub fn equipment_fleet(count: usize) -> Vec<EquipmentRecord> {
    (0..count).map(equipment).collect()
}

pub fn provider(index: usize) -> ProviderRecord {
    let name = PROVIDER_NAMES[index % PROVIDER_NAMES.len()];
    ProviderRecord {
        id: ProviderId::new(format!("pr-{index:04}")),
        name: name.to_owned(),
        email: format!("contact{index}@example.com"),
        phone: format!("+96279{index:06}"),
        company_name: format!(
            "{} {}",
            name.split(' ').next().unwrap_or(name),
            COMPANY_SUFFIXES[index % COMPANY_SUFFIXES.len()]
        ),
        address: "Amman, Jordan".to_owned(),
        status: ProviderStatus::ALL[index % ProviderStatus::ALL.len()],
        business_type: None,
        years_of_experience: Some((index % 20) as i64),
        equipment_types: vec![EQUIPMENT_CATEGORIES[index % EQUIPMENT_CATEGORIES.len()].to_owned()],
        description: String::new(),
        tax_number: String::new(),
        website: String::new(),
        identity_document: None,
        commercial_register: None,
        equipment_count: index as i64,
        active_rentals: 0,
        completed_rentals: 0,
        average_rating: None,
        created_at: EPOCH + Duration::days(index as i64),
    }
}

pub fn provider_roster(count: usize) -> Vec<ProviderRecord> {
    (0..count).map(provider).collect()
}

/// In-memory stand-in for the remote service: a flat record list sliced
/// into fixed-size pages, with one-shot failure injection and call
/// counters so tests can assert reconciliation traffic.
pub struct InMemoryCatalog<R> {
    records: Vec<R>,
    fail_next_fetch: Option<CatalogError>,
    fail_next_command: Option<CatalogError>,
    pub fetch_calls: usize,
    pub status_calls: usize,
    pub remove_calls: usize,
}

impl<R: CatalogRecord> InMemoryCatalog<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            fail_next_fetch: None,
            fail_next_command: None,
            fetch_calls: 0,
            status_calls: 0,
            remove_calls: 0,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn fail_next_fetch(&mut self, error: CatalogError) {
        self.fail_next_fetch = Some(error);
    }

    pub fn fail_next_command(&mut self, error: CatalogError) {
        self.fail_next_command = Some(error);
    }

    fn total_pages(&self, limit: u32) -> u32 {
        let limit = limit.max(1) as usize;
        (self.records.len().div_ceil(limit) as u32).max(1)
    }
}

impl<R: CatalogRecord> CatalogService<R> for InMemoryCatalog<R> {
    fn fetch_page(&mut self, page: u32, limit: u32) -> Result<Page<R>, CatalogError> {
        self.fetch_calls += 1;
        if let Some(error) = self.fail_next_fetch.take() {
            return Err(error);
        }

        let limit_usize = limit.max(1) as usize;
        let start = (page.max(1) as usize - 1) * limit_usize;
        let slice: Vec<R> = self
            .records
            .iter()
            .skip(start)
            .take(limit_usize)
            .cloned()
            .collect();
        Ok(Page::new(slice, page, self.total_pages(limit)))
    }

    fn update_status(&mut self, id: &R::Id, status: &str) -> Result<(), CatalogError> {
        self.status_calls += 1;
        if let Some(error) = self.fail_next_command.take() {
            return Err(error);
        }

        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| CatalogError::command(format!("no record {id}")))?;
        if !record.patch_status(status) {
            return Err(CatalogError::command(format!("bad status {status:?}")));
        }
        Ok(())
    }

    fn remove(&mut self, id: &R::Id) -> Result<(), CatalogError> {
        self.remove_calls += 1;
        if let Some(error) = self.fail_next_command.take() {
            return Err(error);
        }

        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            return Err(CatalogError::command(format!("no record {id}")));
        }
        Ok(())
    }
}
