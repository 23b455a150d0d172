//! The built-in sample catalog.
//!
//! Eight products spread over four categories, one of them out of stock.
//! Used by the CLI when no catalog file is configured, and by tests.

use crate::types::{Catalog, Product};
use chrono::NaiveDate;

struct Row {
    id: u32,
    name: &'static str,
    category: &'static str,
    price: f64,
    stock: u32,
    rating: f64,
    brand: &'static str,
    color: &'static str,
    created_at: (i32, u32, u32),
    updated_at: (i32, u32, u32),
}

const ROWS: [Row; 8] = [
    Row {
        id: 1,
        name: "Wireless Headphones",
        category: "Electronics",
        price: 199.99,
        stock: 35,
        rating: 4.5,
        brand: "SoundX",
        color: "Black",
        created_at: (2023, 9, 1),
        updated_at: (2023, 9, 15),
    },
    Row {
        id: 2,
        name: "Gaming Laptop",
        category: "Computers",
        price: 1499.99,
        stock: 12,
        rating: 4.8,
        brand: "GameTech",
        color: "Gray",
        created_at: (2023, 8, 20),
        updated_at: (2023, 9, 10),
    },
    Row {
        id: 3,
        name: "Smartphone",
        category: "Electronics",
        price: 799.99,
        stock: 0,
        rating: 4.2,
        brand: "MobilePro",
        color: "Blue",
        created_at: (2023, 7, 15),
        updated_at: (2023, 9, 5),
    },
    Row {
        id: 4,
        name: "4K TV",
        category: "Electronics",
        price: 1299.99,
        stock: 20,
        rating: 4.7,
        brand: "VisionTech",
        color: "Black",
        created_at: (2023, 6, 10),
        updated_at: (2023, 9, 20),
    },
    Row {
        id: 5,
        name: "Bluetooth Speaker",
        category: "Electronics",
        price: 99.99,
        stock: 50,
        rating: 4.0,
        brand: "SoundX",
        color: "Red",
        created_at: (2023, 9, 25),
        updated_at: (2023, 9, 26),
    },
    Row {
        id: 6,
        name: "Mechanical Keyboard",
        category: "Accessories",
        price: 89.99,
        stock: 45,
        rating: 4.6,
        brand: "KeyPro",
        color: "White",
        created_at: (2023, 9, 5),
        updated_at: (2023, 9, 15),
    },
    Row {
        id: 7,
        name: "Curved Monitor",
        category: "Computers",
        price: 499.99,
        stock: 22,
        rating: 4.3,
        brand: "ViewMaster",
        color: "Black",
        created_at: (2023, 8, 1),
        updated_at: (2023, 9, 18),
    },
    Row {
        id: 8,
        name: "Fitness Tracker",
        category: "Wearables",
        price: 59.99,
        stock: 70,
        rating: 4.1,
        brand: "FitTrack",
        color: "Gray",
        created_at: (2023, 9, 12),
        updated_at: (2023, 9, 28),
    },
];

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    // Rows are fixed literals; an invalid date is a typo caught by the tests.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The sample products, in catalog order.
pub fn sample_products() -> Vec<Product> {
    ROWS.iter()
        .map(|row| Product {
            id: row.id,
            name: row.name.to_string(),
            category: row.category.to_string(),
            price: row.price,
            stock: row.stock,
            rating: row.rating,
            brand: row.brand.to_string(),
            color: row.color.to_string(),
            created_at: date(row.created_at),
            updated_at: date(row.updated_at),
        })
        .collect()
}

impl Catalog {
    /// The built-in eight-product catalog.
    pub fn sample() -> Self {
        // Fixed data with unique ids and valid prices; skip re-validation.
        Self {
            products: sample_products(),
        }
    }
}
