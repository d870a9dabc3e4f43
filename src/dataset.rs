//! Loading the FAQ knowledge base from JSON.
//!
//! The on-disk format is a single object with a `questions` array:
//!
//! ```json
//! {
//!   "questions": [
//!     { "question": "How do I track my order?", "answer": "..." }
//!   ]
//! }
//! ```
//!
//! Elements missing a field or carrying the wrong types are skipped,
//! not fatal; only a document that is not valid JSON or lacks the
//! `questions` key is an error.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::retriever::FaqEntry;

/// A parsed FAQ file: the usable entries plus how many elements were
/// dropped
#[derive(Debug, Clone, PartialEq)]
pub struct FaqFile {
    pub entries: Vec<FaqEntry>,
    pub skipped: usize,
}

#[derive(Deserialize, Debug)]
struct Dataset {
    questions: Vec<Value>,
}

/// Read and parse an FAQ file from disk
pub fn read_faq_file<P: AsRef<Path>>(path: P) -> Result<FaqFile> {
    let text = fs::read_to_string(path)?;
    parse_faq(&text)
}

/// Parse FAQ JSON text.
///
/// Entries keep their file order. Malformed array elements are counted
/// in `skipped` so the caller can warn about them.
pub fn parse_faq(text: &str) -> Result<FaqFile> {
    let dataset: Dataset = serde_json::from_str(text)?;
    let mut entries = Vec::with_capacity(dataset.questions.len());
    let mut skipped = 0;
    for element in dataset.questions {
        match serde_json::from_value::<FaqEntry>(element) {
            Ok(entry) => entries.push(entry),
            Err(_) => skipped += 1,
        }
    }
    Ok(FaqFile { entries, skipped })
}
