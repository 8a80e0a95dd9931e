//! Fixed-width text rendering of phones and query results.

use crate::error::Result;
use crate::phone::Phone;
use std::collections::BTreeMap;
use std::io::Write;

const BRAND_WIDTH: usize = 15;
const MODEL_WIDTH: usize = 35;
const YEAR_WIDTH: usize = 15;
const PRICE_WIDTH: usize = 15;
const SCREEN_WIDTH: usize = 10;

/// Writes the column header line.
pub fn write_header<W: Write>(mut writer: W) -> Result<()> {
    writeln!(
        writer,
        "{:<bw$}{:<mw$}{:<yw$}{:<pw$}{:<sw$}",
        "Brand",
        "Model",
        "Release Year",
        "Price",
        "Screen Size",
        bw = BRAND_WIDTH,
        mw = MODEL_WIDTH,
        yw = YEAR_WIDTH,
        pw = PRICE_WIDTH,
        sw = SCREEN_WIDTH,
    )?;
    Ok(())
}

/// Writes one phone as a row.
///
/// Price is shown with two decimals, screen size with one.
pub fn write_phone<W: Write>(mut writer: W, phone: &Phone) -> Result<()> {
    writeln!(
        writer,
        "{:<bw$}{:<mw$}{:<yw$}{:<pw$.2}{:<sw$.1}",
        phone.brand,
        phone.model,
        phone.release_year,
        phone.price,
        phone.screen_size,
        bw = BRAND_WIDTH,
        mw = MODEL_WIDTH,
        yw = YEAR_WIDTH,
        pw = PRICE_WIDTH,
        sw = SCREEN_WIDTH,
    )?;
    Ok(())
}

/// Writes a header followed by one row per phone.
pub fn write_table<'a, W, I>(mut writer: W, phones: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Phone>,
{
    write_header(&mut writer)?;
    for phone in phones {
        write_phone(&mut writer, phone)?;
    }
    Ok(())
}

/// Writes `brand: count` lines in key order.
pub fn write_brand_counts<W: Write>(mut writer: W, counts: &BTreeMap<&str, usize>) -> Result<()> {
    for (brand, count) in counts {
        writeln!(writer, "{}: {}", brand, count)?;
    }
    Ok(())
}
