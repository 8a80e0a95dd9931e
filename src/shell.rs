//! Interactive menu loop.
//!
//! The shell owns no data of its own: it reads a choice, runs the matching
//! query against the store and renders the result. Loop control is carried by
//! the [`ControlFlow`] returned from each dispatched choice.

use crate::display::{write_brand_counts, write_phone, write_table};
use crate::error::{BrowserError, Result};
use crate::query;
use crate::store::PhoneStore;
use log::debug;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    FindByModel,
    CountByBrand,
    FilterByBrand,
    ReleaseYearStats,
    SearchPartialModel,
    SortByPrice,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order; entry `i` is selected by `i + 1`.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ListAll,
        MenuChoice::FindByModel,
        MenuChoice::CountByBrand,
        MenuChoice::FilterByBrand,
        MenuChoice::ReleaseYearStats,
        MenuChoice::SearchPartialModel,
        MenuChoice::SortByPrice,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ListAll => "Display all phones",
            MenuChoice::FindByModel => "Search phone by model",
            MenuChoice::CountByBrand => "Count phones by brand",
            MenuChoice::FilterByBrand => "Display phones by brand",
            MenuChoice::ReleaseYearStats => "Release year statistics",
            MenuChoice::SearchPartialModel => "Search phones by partial model",
            MenuChoice::SortByPrice => "Display phones sorted by price (high to low)",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = BrowserError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| MenuChoice::ALL.get(idx).copied())
            .ok_or_else(|| BrowserError::InvalidMenuChoice(trimmed.to_string()))
    }
}

/// Menu-driven front end over a loaded [`PhoneStore`].
pub struct Shell<'s, R, W> {
    store: &'s PhoneStore,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> Shell<'s, R, W> {
    pub fn new(store: &'s PhoneStore, input: R, output: W) -> Self {
        Shell {
            store,
            input,
            output,
        }
    }

    /// Runs the menu until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.write_menu()?;
            let line = match self.prompt("Enter your choice: ")? {
                Some(line) => line,
                None => break,
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!("Menu choice: {:?}", choice);
                    self.dispatch(choice)?
                }
                Err(e) => {
                    debug!("{}", e);
                    writeln!(self.output, "Invalid choice, please try again.")?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n----- Phone Browser -----")?;
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, choice.label())?;
        }
        Ok(())
    }

    /// Prints `message` and reads one line without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Runs one menu choice and reports whether the loop should go on.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        let phones = self.store.phones();

        match choice {
            MenuChoice::ListAll => {
                write_table(&mut self.output, phones)?;
            }
            MenuChoice::FindByModel => {
                let Some(model) = self.prompt("Enter model to search: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                match query::find_by_model(phones, &model) {
                    Some(index) => {
                        writeln!(self.output, "Phone found for index: {}", index)?;
                        write_phone(&mut self.output, &phones[index])?;
                    }
                    None => writeln!(self.output, "Phone not found")?,
                }
            }
            MenuChoice::CountByBrand => {
                writeln!(self.output, "----Count of phones by brand----")?;
                write_brand_counts(&mut self.output, &query::count_by_brand(phones))?;
            }
            MenuChoice::FilterByBrand => {
                let Some(brand) = self.prompt("Enter brand to filter: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let matches = query::filter_by_brand(phones, &brand);
                if matches.is_empty() {
                    writeln!(self.output, "No phones found for brand: {}", brand)?;
                } else {
                    writeln!(self.output, "Phones of brand: {}", brand)?;
                    write_table(&mut self.output, matches)?;
                }
            }
            MenuChoice::ReleaseYearStats => match query::release_year_stats(phones) {
                Ok(stats) => {
                    writeln!(self.output, "Newest phone:")?;
                    write_table(&mut self.output, [stats.newest])?;
                    writeln!(self.output, "Oldest phone:")?;
                    write_table(&mut self.output, [stats.oldest])?;
                    writeln!(self.output, "Average release year: {}", stats.average)?;
                }
                Err(BrowserError::EmptyStore) => writeln!(self.output, "No data available")?,
                Err(e) => return Err(e),
            },
            MenuChoice::SearchPartialModel => {
                let Some(needle) = self.prompt("Enter part of the model name: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let matches: Vec<_> = query::find_by_partial_model(phones, &needle).collect();
                if matches.is_empty() {
                    writeln!(self.output, "No phones found matching: {}", needle)?;
                } else {
                    write_table(&mut self.output, matches)?;
                }
            }
            MenuChoice::SortByPrice => {
                write_table(&mut self.output, query::sort_by_price_descending(phones))?;
            }
            MenuChoice::Exit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }
}
