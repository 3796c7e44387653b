//! The catalog filter pipeline.

use crate::catalog::Product;
use crate::search::FilterCriteria;

/// Narrow and order a product list.
///
/// Filters run in fixed order (category, price, materials, text) and every
/// active filter must pass. The sort is stable, so ties keep dataset order.
/// An empty result is the "no results" state, not an error.
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    let filters = criteria.filters();
    let mut results: Vec<&Product> = products
        .iter()
        .filter(|product| filters.iter().all(|filter| filter.matches(product)))
        .collect();
    results.sort_by(|a, b| criteria.sort.compare(a, b));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::search::{PriceRange, SortKey};

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_criteria_sorts_by_name() {
        let catalog = Catalog::sample().unwrap();
        let results = filter_products(catalog.products(), &FilterCriteria::default());
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Alpaca Thermal Gloves",
                "Andean Storm Shell",
                "Condor Trek Pants",
                "Inca Base Layer",
                "Machu Picchu Mid-Layer",
                "Quechua Safety Module",
            ]
        );
    }

    #[test]
    fn test_jackets_category() {
        let catalog = Catalog::sample().unwrap();
        let criteria = FilterCriteria::new().with_category("jackets");
        let results = filter_products(catalog.products(), &criteria);
        assert_eq!(ids(&results), vec!["1"]);
    }

    #[test]
    fn test_category_slug_is_case_insensitive() {
        let catalog = Catalog::sample().unwrap();
        let criteria = FilterCriteria::new().with_category("Accessories");
        assert_eq!(filter_products(catalog.products(), &criteria).len(), 2);

        let criteria = FilterCriteria::new().with_category("ALL");
        assert_eq!(filter_products(catalog.products(), &criteria).len(), 6);
    }

    #[test]
    fn test_price_range_bounds_inclusive() {
        let catalog = Catalog::sample().unwrap();
        let criteria = FilterCriteria::new()
            .with_price_range(PriceRange::from_major(95.0, 225.0))
            .with_sort(SortKey::PriceLow);
        let results = filter_products(catalog.products(), &criteria);
        assert_eq!(ids(&results), vec!["5", "3", "2"]);
    }

    #[test]
    fn test_material_filter() {
        let catalog = Catalog::sample().unwrap();
        let criteria = FilterCriteria::new()
            .with_material("Alpaca fiber")
            .with_sort(SortKey::PriceHigh);
        let results = filter_products(catalog.products(), &criteria);
        assert_eq!(ids(&results), vec!["1", "3", "6"]);
    }

    #[test]
    fn test_text_combines_with_other_filters() {
        let catalog = Catalog::sample().unwrap();

        let criteria = FilterCriteria::new().with_query("Moisture");
        assert_eq!(filter_products(catalog.products(), &criteria).len(), 2);

        // Only the gloves are both moisture-wicking and an accessory.
        let criteria = criteria.with_category("accessories");
        let results = filter_products(catalog.products(), &criteria);
        assert_eq!(ids(&results), vec!["6"]);

        // And a price cap excludes them as well.
        let criteria = criteria.with_price_range(PriceRange::from_major(0.0, 50.0));
        assert!(filter_products(catalog.products(), &criteria).is_empty());
    }

    #[test]
    fn test_sustainability_sort() {
        let catalog = Catalog::sample().unwrap();
        let criteria = FilterCriteria::new().with_sort(SortKey::Sustainability);
        let results = filter_products(catalog.products(), &criteria);
        assert_eq!(ids(&results), vec!["1", "3", "6", "2", "4", "5"]);
    }

    #[test]
    fn test_price_sorts_are_reversed() {
        let catalog = Catalog::sample().unwrap();
        let low = filter_products(
            catalog.products(),
            &FilterCriteria::new().with_sort(SortKey::PriceLow),
        );
        let mut high = filter_products(
            catalog.products(),
            &FilterCriteria::new().with_sort(SortKey::PriceHigh),
        );
        high.reverse();
        assert_eq!(ids(&low), ids(&high));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = Catalog::sample().unwrap();
        let criteria = FilterCriteria::new()
            .with_material("merino wool")
            .with_sort(SortKey::PriceLow);
        let first = filter_products(catalog.products(), &criteria);
        let second = filter_products(catalog.products(), &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_results() {
        let catalog = Catalog::sample().unwrap();
        let criteria = FilterCriteria::new().with_query("snowboard");
        assert!(filter_products(catalog.products(), &criteria).is_empty());
    }
}
