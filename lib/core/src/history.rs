//! History backends that hold the URL fragment.
//!
//! The browser implementation lives in the web crate; [`MemoryHistory`] keeps
//! the same contract in process for tests and non-browser hosts.

use crate::error::HistoryError;
use rootcause::prelude::Report;
use std::cell::RefCell;

/// A store of URL fragments with push/replace semantics.
pub trait History {
    /// The current raw fragment, e.g. `#/about` (may be empty).
    fn fragment(&self) -> String;

    /// Adds a new entry and makes it current.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the update.
    fn push(&self, fragment: &str) -> Result<(), Report<HistoryError>>;

    /// Overwrites the current entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the update.
    fn replace(&self, fragment: &str) -> Result<(), Report<HistoryError>>;
}

#[derive(Debug)]
struct Entries {
    stack: Vec<String>,
    index: usize,
}

/// In-memory history with a back/forward stack.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Entries>,
}

impl MemoryHistory {
    /// Creates a history holding a single entry.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: RefCell::new(Entries {
                stack: vec![initial.into()],
                index: 0,
            }),
        }
    }

    /// Steps back one entry. Returns `false` at the start of the stack.
    pub fn back(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.index == 0 {
            return false;
        }
        entries.index -= 1;
        true
    }

    /// Steps forward one entry. Returns `false` at the end of the stack.
    pub fn forward(&self) -> bool {
        let mut entries = self.entries.borrow_mut();
        if entries.index + 1 >= entries.stack.len() {
            return false;
        }
        entries.index += 1;
        true
    }

    /// Number of entries in the stack.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.borrow().stack.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl History for MemoryHistory {
    fn fragment(&self) -> String {
        let entries = self.entries.borrow();
        entries.stack[entries.index].clone()
    }

    fn push(&self, fragment: &str) -> Result<(), Report<HistoryError>> {
        let mut entries = self.entries.borrow_mut();
        // Pushing discards any forward entries, like a browser does.
        let next = entries.index + 1;
        entries.stack.truncate(next);
        entries.stack.push(fragment.to_string());
        entries.index = next;
        Ok(())
    }

    fn replace(&self, fragment: &str) -> Result<(), Report<HistoryError>> {
        let mut entries = self.entries.borrow_mut();
        let index = entries.index;
        entries.stack[index] = fragment.to_string();
        Ok(())
    }
}

impl<H: History + ?Sized> History for &H {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn push(&self, fragment: &str) -> Result<(), Report<HistoryError>> {
        (**self).push(fragment)
    }

    fn replace(&self, fragment: &str) -> Result<(), Report<HistoryError>> {
        (**self).replace(fragment)
    }
}
