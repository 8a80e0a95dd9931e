//! Read-only queries over a slice of phones.
//!
//! Every function takes the records it works on and returns derived data; none
//! of them mutate their input. "Not found" outcomes are `None` or empty
//! collections, never errors.

use crate::error::{BrowserError, Result};
use crate::phone::Phone;
use std::collections::BTreeMap;

/// Newest, oldest and average release year of a set of phones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseYearStats<'a> {
    /// First phone with the highest release year.
    pub newest: &'a Phone,

    /// First phone with the lowest release year.
    pub oldest: &'a Phone,

    /// Mean release year, truncated toward zero.
    pub average: i32,
}

/// Returns the index of the first phone whose model equals `model` exactly.
pub fn find_by_model(phones: &[Phone], model: &str) -> Option<usize> {
    phones.iter().position(|p| p.model == model)
}

/// Yields every phone whose model contains `needle` (case-sensitive), in order.
///
/// An empty needle matches every phone.
pub fn find_by_partial_model<'a>(
    phones: &'a [Phone],
    needle: &'a str,
) -> impl Iterator<Item = &'a Phone> + 'a {
    phones.iter().filter(move |p| p.model.contains(needle))
}

/// Counts phones per exact brand string.
///
/// Keys come back in lexicographic order.
pub fn count_by_brand(phones: &[Phone]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for phone in phones {
        *counts.entry(phone.brand.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Returns the phones whose brand equals `brand` exactly, in order.
pub fn filter_by_brand<'a>(phones: &'a [Phone], brand: &str) -> Vec<&'a Phone> {
    phones.iter().filter(|p| p.brand == brand).collect()
}

/// Returns the phones ordered by price, most expensive first.
///
/// The sort is stable: phones with equal prices keep their relative order.
pub fn sort_by_price_descending(phones: &[Phone]) -> Vec<&Phone> {
    let mut sorted: Vec<&Phone> = phones.iter().collect();
    // Adding 0.0 folds -0.0 into 0.0 so the two compare equal.
    sorted.sort_by(|a, b| (b.price + 0.0).total_cmp(&(a.price + 0.0)));
    sorted
}

/// Computes newest, oldest and average release year in a single pass.
///
/// Only a strictly newer or older year replaces the running extreme, so the
/// earliest phone wins ties. Returns [`BrowserError::EmptyStore`] when there is
/// nothing to average.
pub fn release_year_stats(phones: &[Phone]) -> Result<ReleaseYearStats<'_>> {
    let (first, rest) = phones.split_first().ok_or(BrowserError::EmptyStore)?;

    let mut newest = first;
    let mut oldest = first;
    let mut total = i64::from(first.release_year);

    for phone in rest {
        if phone.release_year > newest.release_year {
            newest = phone;
        }
        if phone.release_year < oldest.release_year {
            oldest = phone;
        }
        total += i64::from(phone.release_year);
    }

    // i64 division truncates toward zero and the mean always fits in i32.
    let average = (total / phones.len() as i64) as i32;

    Ok(ReleaseYearStats {
        newest,
        oldest,
        average,
    })
}
