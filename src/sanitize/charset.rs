//! Invalid character sets, parameterized by target platform.

use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Literal characters rejected on POSIX-style targets.
const POSIX_CHARS: &[char] = &['\\', '/', '"', ':', '<', '>', '^', '|', '*', '?'];

/// Literal characters rejected on Windows-style targets (`\` is the separator there).
const WINDOWS_CHARS: &[char] = &['/', '"', ':', '<', '>', '^', '|', '*', '?'];

/// Unicode general categories rejected regardless of the literal set:
/// Other_Letter, Other_Symbol and Control.
pub const DISALLOWED_CATEGORIES: [GeneralCategory; 3] = [
    GeneralCategory::OtherLetter,
    GeneralCategory::OtherSymbol,
    GeneralCategory::Control,
];

/// Target platform whose naming rules the classifier enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Platform of the compile target.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Literal invalid characters for this platform.
    pub fn invalid_chars(self) -> &'static [char] {
        match self {
            Platform::Posix => POSIX_CHARS,
            Platform::Windows => WINDOWS_CHARS,
        }
    }

    /// Invalid characters that can still be embedded in a name created on
    /// this platform. The path separator `/` can never appear in a basename.
    pub fn embeddable_chars(self) -> Vec<char> {
        self.invalid_chars()
            .iter()
            .copied()
            .filter(|c| *c != '/')
            .collect()
    }
}

/// Map a two-letter general category abbreviation (`Lo`, `So`, ...) to its category.
///
/// Only the categories that make sense to reject in file names are accepted.
pub fn parse_category(abbrev: &str) -> Option<GeneralCategory> {
    let category = match abbrev {
        "Lo" => GeneralCategory::OtherLetter,
        "So" => GeneralCategory::OtherSymbol,
        "Sk" => GeneralCategory::ModifierSymbol,
        "Sm" => GeneralCategory::MathSymbol,
        "Sc" => GeneralCategory::CurrencySymbol,
        "Mn" => GeneralCategory::NonspacingMark,
        "Cc" => GeneralCategory::Control,
        "Cf" => GeneralCategory::Format,
        "Co" => GeneralCategory::PrivateUse,
        "Cn" => GeneralCategory::Unassigned,
        "Zl" => GeneralCategory::LineSeparator,
        "Zp" => GeneralCategory::ParagraphSeparator,
        _ => return None,
    };
    Some(category)
}

/// The set of characters a [`crate::sanitize::Classifier`] rejects.
#[derive(Debug, Clone)]
pub struct CharSet {
    literals: Vec<char>,
    categories: Vec<GeneralCategory>,
}

impl CharSet {
    /// Default set for a platform: its literal characters plus Lo, So and Cc.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            literals: platform.invalid_chars().to_vec(),
            categories: DISALLOWED_CATEGORIES.to_vec(),
        }
    }

    /// Build a set from explicit parts.
    pub fn new(literals: Vec<char>, categories: Vec<GeneralCategory>) -> Self {
        Self {
            literals,
            categories,
        }
    }

    /// Add literal characters, ignoring ones already present.
    pub fn with_extra_chars(mut self, extra: impl IntoIterator<Item = char>) -> Self {
        for c in extra {
            if !self.literals.contains(&c) {
                self.literals.push(c);
            }
        }
        self
    }

    /// True if `c` is in the literal set or belongs to a rejected category.
    pub fn contains(&self, c: char) -> bool {
        if self.literals.contains(&c) {
            return true;
        }
        let category = get_general_category(c);
        self.categories.iter().any(|rejected| *rejected == category)
    }
}
