// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::criteria::{FilterCriteria, SortKey};
use crate::model::CatalogRecord;

/// Derives the displayed sequence from one loaded page.
///
/// Pure: records are filtered (search, facet, price band) and then sorted,
/// scoped to the given slice only. Filtering never reaches across pages.
pub fn project<R: CatalogRecord>(records: &[R], criteria: &FilterCriteria) -> Vec<R> {
    let needle = criteria.search_text.trim().to_lowercase();
    let mut rows: Vec<R> = records
        .iter()
        .filter(|record| matches_search(*record, &needle))
        .filter(|record| criteria.facet.matches(record.facet()))
        .filter(|record| criteria.price_band.admits(record.price()))
        .cloned()
        .collect();
    sort_rows(&mut rows, criteria.sort_key);
    rows
}

fn matches_search<R: CatalogRecord>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

// Stable sort keeps equal-key order deterministic; unpriced records sort as
// price 0 and unrated records as rating 0.
fn sort_rows<R: CatalogRecord>(rows: &mut [R], key: SortKey) {
    match key {
        SortKey::Newest => rows.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortKey::PriceAsc => rows.sort_by(|a, b| {
            a.price()
                .unwrap_or(0.0)
                .total_cmp(&b.price().unwrap_or(0.0))
        }),
        SortKey::PriceDesc => rows.sort_by(|a, b| {
            b.price()
                .unwrap_or(0.0)
                .total_cmp(&a.price().unwrap_or(0.0))
        }),
        SortKey::RatingDesc => rows.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
    }
}

#[cfg(test)]
mod tests {
    use super::project;
    use crate::criteria::{FacetFilter, FilterCriteria, PriceBand, SortKey};
    use crate::ids::EquipmentId;
    use crate::model::EquipmentRecord;
    use time::OffsetDateTime;
    use time::macros::datetime;

    fn equipment(
        id: &str,
        title: &str,
        category: &str,
        daily_rate: Option<f64>,
        rating: Option<f64>,
        created_at: OffsetDateTime,
    ) -> EquipmentRecord {
        EquipmentRecord {
            id: EquipmentId::from(id),
            title: title.to_owned(),
            category: category.to_owned(),
            manufacturer: "CAT".to_owned(),
            model: "320".to_owned(),
            year: Some(2021),
            daily_rate,
            weekly_rate: None,
            monthly_rate: None,
            availability: true,
            average_rating: rating,
            ratings_count: 0,
            views: 0,
            rentals_count: 0,
            main_image: String::new(),
            additional_images: Vec::new(),
            location: String::new(),
            condition: String::new(),
            description: String::new(),
            owner: None,
            reviews: Vec::new(),
            created_at,
        }
    }

    fn sample_page() -> Vec<EquipmentRecord> {
        vec![
            equipment(
                "a",
                "Tower crane",
                "cranes",
                Some(100.0),
                Some(3.0),
                datetime!(2025-03-01 00:00 UTC),
            ),
            equipment(
                "b",
                "Mini excavator",
                "excavators",
                Some(50.0),
                None,
                datetime!(2025-05-01 00:00 UTC),
            ),
            equipment(
                "c",
                "Dump truck",
                "trucks",
                Some(200.0),
                Some(4.8),
                datetime!(2025-04-01 00:00 UTC),
            ),
        ]
    }

    fn ids(rows: &[EquipmentRecord]) -> Vec<&str> {
        rows.iter().map(|row| row.id.as_str()).collect()
    }

    #[test]
    fn price_ascending_orders_by_daily_rate() {
        let criteria = FilterCriteria {
            sort_key: SortKey::PriceAsc,
            ..FilterCriteria::default()
        };
        let rows = project(&sample_page(), &criteria);
        assert_eq!(ids(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn price_descending_reverses_ascending_for_distinct_prices() {
        let records = sample_page();
        let asc = project(
            &records,
            &FilterCriteria {
                sort_key: SortKey::PriceAsc,
                ..FilterCriteria::default()
            },
        );
        let desc = project(
            &records,
            &FilterCriteria {
                sort_key: SortKey::PriceDesc,
                ..FilterCriteria::default()
            },
        );

        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn newest_first_orders_by_creation_timestamp() {
        let rows = project(&sample_page(), &FilterCriteria::default());
        assert_eq!(ids(&rows), vec!["b", "c", "a"]);
    }

    #[test]
    fn rating_sort_treats_missing_rating_as_zero() {
        let criteria = FilterCriteria {
            sort_key: SortKey::RatingDesc,
            ..FilterCriteria::default()
        };
        let rows = project(&sample_page(), &criteria);
        assert_eq!(ids(&rows), vec!["c", "a", "b"]);
    }

    #[test]
    fn projection_is_idempotent() {
        let criteria = FilterCriteria {
            search_text: "crane".to_owned(),
            sort_key: SortKey::PriceDesc,
            ..FilterCriteria::default()
        };
        let once = project(&sample_page(), &criteria);
        let twice = project(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_search_matches_everything() {
        let criteria = FilterCriteria {
            search_text: String::new(),
            facet: FacetFilter::Only("trucks".to_owned()),
            ..FilterCriteria::default()
        };
        let rows = project(&sample_page(), &criteria);
        assert_eq!(ids(&rows), vec!["c"]);
    }

    #[test]
    fn search_is_case_insensitive_substring_over_any_field() {
        let criteria = FilterCriteria {
            search_text: "EXCAV".to_owned(),
            ..FilterCriteria::default()
        };
        let rows = project(&sample_page(), &criteria);
        assert_eq!(ids(&rows), vec!["b"]);

        // Manufacturer is part of the haystack too.
        let criteria = FilterCriteria {
            search_text: "cat".to_owned(),
            ..FilterCriteria::default()
        };
        assert_eq!(project(&sample_page(), &criteria).len(), 3);
    }

    #[test]
    fn price_band_is_inclusive_and_excludes_unpriced_records() {
        let mut records = sample_page();
        records.push(equipment(
            "d",
            "Unpriced loader",
            "other",
            None,
            None,
            datetime!(2025-01-01 00:00 UTC),
        ));

        let criteria = FilterCriteria {
            price_band: PriceBand::new(50.0, 100.0),
            sort_key: SortKey::PriceAsc,
            ..FilterCriteria::default()
        };
        let rows = project(&records, &criteria);
        assert_eq!(ids(&rows), vec!["b", "a"]);

        // The full domain admits the unpriced record again.
        let criteria = FilterCriteria::default();
        assert_eq!(project(&records, &criteria).len(), 4);
    }
}
