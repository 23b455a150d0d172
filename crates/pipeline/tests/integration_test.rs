//! Integration tests for the pipeline.
//!
//! These tests drive the full round trip against the sample catalog:
//! query string, decode, compile, apply, edit one field, re-encode.

use catalog::{Catalog, Product};
use pipeline::{FilterEngine, apply};
use query::{FilterKey, FilterSpec, decode, encode, update_query};

fn ids(products: &[&Product]) -> Vec<u32> {
    products.iter().map(|p| p.id).collect()
}

fn run(query: &str) -> Vec<u32> {
    let catalog = Catalog::sample();
    let spec = decode(query).unwrap();
    ids(&apply(&spec, catalog.iter()).unwrap())
}

#[test]
fn scenario_a_category() {
    let catalog = Catalog::sample();
    let spec = FilterSpec::new().with_category("Electronics");

    let result = apply(&spec, catalog.iter()).unwrap();
    assert_eq!(ids(&result), vec![1, 3, 4, 5]);
}

#[test]
fn scenario_b_price_range() {
    let catalog = Catalog::sample();
    let spec = FilterSpec::new().with_min_price(100.0).with_max_price(1000.0);

    let result = apply(&spec, catalog.iter()).unwrap();

    // 199.99, 799.99 and 499.99 are in range; 1299.99 and 1499.99 are above
    // it, 99.99 and below are under it.
    assert_eq!(ids(&result), vec![1, 3, 7]);
    for product in &result {
        assert!(product.price >= 100.0 && product.price <= 1000.0);
    }
}

#[test]
fn scenario_c_in_stock() {
    let catalog = Catalog::sample();
    let spec = FilterSpec::new().with_stock_available(true);

    let result = apply(&spec, catalog.iter()).unwrap();
    assert_eq!(ids(&result), vec![1, 2, 4, 5, 6, 7, 8]);
}

#[test]
fn scenario_d_brand_is_case_insensitive() {
    let catalog = Catalog::sample();
    let spec = FilterSpec::new().with_brand("sound");

    let result = apply(&spec, catalog.iter()).unwrap();
    assert_eq!(ids(&result), vec![1, 5]);
}

#[test]
fn scenario_e_encoded_spec_filters_the_same() {
    let spec = FilterSpec::new().with_category("Electronics").with_min_price(50.0);
    let encoded = encode(&spec);

    assert_eq!(encoded, "category=Electronics&minPrice=50");
    assert_eq!(decode(&encoded).unwrap(), spec);
    assert_eq!(run(&encoded), vec![1, 3, 4, 5]);
}

#[test]
fn scenario_f_false_stock_is_no_constraint() {
    assert_eq!(run("stockAvailable=false"), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn boundary_prices_are_included() {
    assert_eq!(run("minPrice=99.99&maxPrice=199.99"), vec![1, 5]);
}

#[test]
fn inverted_range_is_empty_not_error() {
    assert!(run("minPrice=1000&maxPrice=100").is_empty());
}

#[test]
fn unknown_category_is_empty_not_error() {
    assert!(run("category=Garden").is_empty());
}

#[test]
fn unparseable_price_places_no_bound() {
    assert_eq!(run("maxPrice=cheap"), run(""));
}

#[test]
fn invalid_brand_pattern_surfaces_from_query() {
    let catalog = Catalog::sample();
    let spec = decode("brand=%28sound").unwrap();

    let err = apply(&spec, catalog.iter()).unwrap_err();
    assert_eq!(err.field, FilterKey::Brand);
    assert_eq!(err.pattern, "(sound");
}

#[test]
fn editing_one_field_keeps_the_others() {
    let catalog = Catalog::sample();

    let query = update_query("", FilterKey::Category, "Electronics").unwrap();
    let query = update_query(&query, FilterKey::StockAvailable, "true").unwrap();
    let query = update_query(&query, FilterKey::MaxPrice, "1000").unwrap();
    assert_eq!(query, "category=Electronics&maxPrice=1000&stockAvailable=true");

    let engine = FilterEngine::new(&decode(&query).unwrap()).unwrap();
    assert_eq!(ids(&engine.apply(catalog.iter())), vec![1, 5]);

    // Unchecking the stock box drops only that constraint.
    let query = update_query(&query, FilterKey::StockAvailable, "").unwrap();
    assert_eq!(query, "category=Electronics&maxPrice=1000");
    assert_eq!(run(&query), vec![1, 3, 5]);
}

#[test]
fn combined_constraints() {
    assert_eq!(run("?category=Computers&brand=view&stockAvailable=true"), vec![7]);
    assert_eq!(run("brand=^(fit|key)&maxPrice=100"), vec![6, 8]);
}
