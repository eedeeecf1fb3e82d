// src/models/font_spec.rs
//
// Font metrics of the live input, parsed from a CSS-like shorthand
// such as "16px Ubuntu, sans-serif".

use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::Error;

fn shorthand_regex() -> &'static Regex {
    static SHORTHAND: OnceLock<Regex> = OnceLock::new();
    SHORTHAND.get_or_init(|| Regex::new(r"^\s*([\d.]+)px\s+(.+?)\s*$").expect("font shorthand pattern"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size_px: f32,
    pub family: String,
}

impl FontSpec {
    pub fn new(size_px: f32, family: impl Into<String>) -> Self {
        Self {
            size_px,
            family: family.into(),
        }
    }

    /// The first family in the fallback list, unquoted.
    pub fn primary_family(&self) -> &str {
        self.family
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
    }
}

impl FromStr for FontSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = shorthand_regex()
            .captures(s)
            .ok_or_else(|| Error::InvalidFont(s.to_string()))?;
        let size_px: f32 = caps[1]
            .parse()
            .map_err(|_| Error::InvalidFont(s.to_string()))?;
        if size_px <= 0.0 {
            return Err(Error::InvalidFont(s.to_string()));
        }
        Ok(Self::new(size_px, &caps[2]))
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(16.0, "sans-serif")
    }
}
