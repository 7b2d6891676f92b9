// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// Equality filter over a record's facet value (equipment category or
/// provider status). `All` is the explicit bypass that the source modeled
/// as an `"all"` sentinel string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetFilter {
    All,
    Only(String),
}

impl FacetFilter {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(facet) => facet == value,
        }
    }
}

impl Default for FacetFilter {
    fn default() -> Self {
        Self::All
    }
}

/// Inclusive numeric range filter over a record's price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
}

impl PriceBand {
    /// The full domain; admits every record, priced or not.
    pub const ANY: Self = Self {
        min: 0.0,
        max: f64::INFINITY,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_any(&self) -> bool {
        self.min <= 0.0 && self.max == f64::INFINITY
    }

    /// Inclusive on both bounds. A record with no price fails any band
    /// narrower than the full domain; it is never silently passed.
    pub fn admits(&self, price: Option<f64>) -> bool {
        if self.is_any() {
            return true;
        }
        match price {
            Some(value) => self.min <= value && value <= self.max,
            None => false,
        }
    }
}

impl Default for PriceBand {
    fn default() -> Self {
        Self::ANY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Newest,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortKey {
    pub const ALL: [Self; 4] = [
        Self::Newest,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::RatingDesc,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::RatingDesc => "rating",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(Self::Newest),
            "price_asc" => Some(Self::PriceAsc),
            "price_desc" => Some(Self::PriceDesc),
            "rating" => Some(Self::RatingDesc),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "newest first",
            Self::PriceAsc => "price: low to high",
            Self::PriceDesc => "price: high to low",
            Self::RatingDesc => "rating",
        }
    }
}

/// Operator-entered view criteria. Pure value object with a lifecycle
/// independent from the page: created and updated only by operator input,
/// and preserved across page changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub facet: FacetFilter,
    pub price_band: PriceBand,
    pub sort_key: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            facet: FacetFilter::All,
            price_band: PriceBand::ANY,
            sort_key: SortKey::Newest,
        }
    }
}

impl FilterCriteria {
    /// Restores search, facet, and price band to defaults. The sort key is
    /// a view preference, not a filter, and survives the reset.
    pub fn reset_filters(&mut self) {
        self.search_text.clear();
        self.facet = FacetFilter::All;
        self.price_band = PriceBand::ANY;
    }
}
