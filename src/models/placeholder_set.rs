// src/models/placeholder_set.rs
// the ordered list of rotating input hints

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderSet {
    hints: Vec<String>,
}

// accepted file layouts: a bare array, or an object with a "placeholders" key
#[derive(Deserialize)]
#[serde(untagged)]
enum PlaceholderFile {
    List(Vec<String>),
    Object { placeholders: Vec<String> },
}

impl PlaceholderSet {
    pub fn new<I, S>(hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hints: hints.into_iter().map(Into::into).collect(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: PlaceholderFile = serde_json::from_str(content)?;
        let hints = match file {
            PlaceholderFile::List(hints) => hints,
            PlaceholderFile::Object { placeholders } => placeholders,
        };
        Ok(Self { hints })
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.hints.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hints.iter().map(String::as_str)
    }
}
