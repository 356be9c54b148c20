//! Validity classifier: detects invalid names and computes their sanitized form.

use super::charset::{CharSet, Platform};

/// Classifies node names against a [`CharSet`].
#[derive(Debug, Clone)]
pub struct Classifier {
    charset: CharSet,
}

impl Classifier {
    pub fn new(charset: CharSet) -> Self {
        Self { charset }
    }

    /// Classifier with the default character set for `platform`.
    pub fn for_platform(platform: Platform) -> Self {
        Self::new(CharSet::for_platform(platform))
    }

    pub fn is_char_invalid(&self, c: char) -> bool {
        self.charset.contains(c)
    }

    /// True iff any character of `name` is invalid. The empty name is valid.
    pub fn is_invalid(&self, name: &str) -> bool {
        name.chars().any(|c| self.is_char_invalid(c))
    }

    /// Compute the sanitized form of `name`.
    ///
    /// Every invalid character is deleted wherever it occurs. The result then
    /// loses all trailing dots and whitespace, and any leading whitespace.
    /// The output may be empty when `name` held nothing but invalid
    /// characters, dots and spaces.
    pub fn sanitize(&self, name: &str) -> String {
        let kept: String = name.chars().filter(|c| !self.is_char_invalid(*c)).collect();
        strip_edges(&kept).to_string()
    }
}

fn strip_edges(name: &str) -> &str {
    name.trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .trim_start()
}
