//! # Phone Browser
//!
//! Loads a catalog of phones from a headerless CSV file into memory and
//! answers read-only queries over it: exact and partial model lookup, brand
//! filtering and counting, price ordering and release-year statistics.
//!
//! ## Design Principles
//!
//! - **Load once, read forever**: the store is never mutated after loading
//! - **Skip, don't abort**: malformed lines are reported and skipped
//! - **Empty is valid**: a missing file yields an empty store, not a crash
//! - **Pure queries**: every query borrows its input and returns derived data
//!
//! ## Example
//!
//! ```
//! use phone_browser::{query, PhoneStore};
//! use std::io::Cursor;
//!
//! let csv = "A,X,2019,100.00,5.5\nB,Y,2020,200.00,6.1\n";
//! let mut store = PhoneStore::new();
//! store.load_csv(Cursor::new(csv)).unwrap();
//!
//! let brand_a = query::filter_by_brand(store.phones(), "A");
//! assert_eq!(brand_a.len(), 1);
//! assert_eq!(brand_a[0].model, "X");
//! ```

pub mod display;
pub mod error;
pub mod phone;
pub mod query;
pub mod shell;
pub mod store;

pub use error::{BrowserError, Result};
pub use phone::{Phone, PhoneRecord};
pub use query::ReleaseYearStats;
pub use shell::{MenuChoice, Shell};
pub use store::{LoadReport, PhoneStore};
