//! Heuristic splitting of flattened plan text into titled sections.
//!
//! Blocks are separated by blank lines. A block containing `**` or `:` opens
//! a new section; any other block becomes a body line of the most recently
//! opened section. Blocks before the first header are dropped.
//!
//! A header whose cleaned title was already used re-opens that title: the
//! title keeps its original position and its body list starts over.

use serde::ser::{Serialize, SerializeMap, Serializer};

// ---------------------------------------------------------------------------
// SectionMap
// ---------------------------------------------------------------------------

/// Section title → body lines, ordered by first appearance of each title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, Vec<String>)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, body)| body.as_slice())
    }

    /// Open `title` for appending, resetting its body if it already exists.
    /// Returns the index of the section.
    fn open(&mut self, title: String) -> usize {
        if let Some(i) = self.entries.iter().position(|(t, _)| *t == title) {
            self.entries[i].1.clear();
            return i;
        }
        self.entries.push((title, Vec::new()));
        self.entries.len() - 1
    }

    fn push_line(&mut self, index: usize, line: String) {
        self.entries[index].1.push(line);
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (title, body) in &self.entries {
            map.serialize_entry(title, body)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Splitter
// ---------------------------------------------------------------------------

pub fn split_sections(text: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current: Option<usize> = None;

    for block in text.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        if is_header(block) {
            current = Some(sections.open(clean_title(block)));
        } else if let Some(index) = current {
            sections.push_line(index, block.to_string());
        }
    }

    sections
}

fn is_header(block: &str) -> bool {
    block.contains("**") || block.contains(':')
}

fn clean_title(block: &str) -> String {
    block
        .trim_matches(|c: char| c == '*' || c == ':' || c.is_whitespace())
        .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
