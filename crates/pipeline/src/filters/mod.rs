//! Filter implementations for the product pipeline.
//!
//! One filter per `FilterSpec` field. Each is built from the already-typed
//! field value and can be composed into a FilterPipeline.

pub mod brand;
pub mod category;
pub mod price_range;
pub mod stock;

// Re-export for convenience
pub use brand::BrandFilter;
pub use category::CategoryFilter;
pub use price_range::PriceRangeFilter;
pub use stock::StockFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use catalog::Product;
    use chrono::NaiveDate;

    pub(crate) fn product(id: u32, category: &str, price: f64, stock: u32, brand: &str) -> Product {
        let date = NaiveDate::from_ymd_opt(2023, 9, 1).unwrap();
        Product {
            id,
            name: format!("Product {id}"),
            category: category.to_string(),
            price,
            stock,
            rating: 4.0,
            brand: brand.to_string(),
            color: "Black".to_string(),
            created_at: date,
            updated_at: date,
        }
    }
}
