//! Phone models for CSV parsing and internal representation.

use crate::error::{BrowserError, Result};
use serde::Deserialize;
use std::str::FromStr;

/// Raw phone row as read from CSV.
///
/// Fields arrive positionally as `brand,model,releaseYear,price,screenSize`
/// and are kept as text until [`PhoneRecord::parse`] converts them, so a bad
/// number only rejects its own line.
#[derive(Debug, Deserialize)]
pub struct PhoneRecord {
    pub brand: String,
    pub model: String,
    pub release_year: String,
    pub price: String,
    pub screen_size: String,
}

impl PhoneRecord {
    /// Parses the raw CSV row into a typed phone.
    ///
    /// `row` is the 1-indexed line number used in the error message.
    pub fn parse(&self, row: usize) -> Result<Phone> {
        Ok(Phone {
            brand: self.brand.clone(),
            model: self.model.clone(),
            release_year: parse_field(&self.release_year, "release year", row)?,
            price: parse_field(&self.price, "price", row)?,
            screen_size: parse_field(&self.screen_size, "screen size", row)?,
        })
    }
}

fn parse_field<T: FromStr>(raw: &str, name: &str, row: usize) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| BrowserError::InvalidRecord {
            row,
            message: format!("{} '{}' is not a valid number", name, raw),
        })
}

/// A single phone entry.
///
/// Records are never modified once loaded; no field is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Phone {
    /// Manufacturer name.
    pub brand: String,

    /// Model name. Used for lookups but not guaranteed unique.
    pub model: String,

    /// Year the model went on sale.
    pub release_year: i32,

    /// Launch price.
    pub price: f32,

    /// Diagonal screen size in inches.
    pub screen_size: f32,
}

impl Phone {
    /// Creates a phone from already-typed values.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        release_year: i32,
        price: f32,
        screen_size: f32,
    ) -> Self {
        Phone {
            brand: brand.into(),
            model: model.into(),
            release_year,
            price,
            screen_size,
        }
    }
}
