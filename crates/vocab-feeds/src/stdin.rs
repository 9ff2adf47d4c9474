//! Reader feed: stdin, or any [`Read`] in tests.

use std::io::{self, Read};

use vocab_core::Result;

use crate::{strip_bom, Feed};

pub struct ReaderFeed<R> {
    name: String,
    reader: R,
}

impl<R: Read> ReaderFeed<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self { name: name.into(), reader }
    }
}

/// Feed that reads all of stdin until EOF.
pub fn stdin() -> ReaderFeed<io::Stdin> {
    ReaderFeed::new("<stdin>", io::stdin())
}

impl<R: Read> Feed for ReaderFeed<R> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_text(&mut self) -> Result<String> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(strip_bom(text))
    }
}
