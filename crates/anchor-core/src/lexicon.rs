//! Keyword tables driving the classifier.
//!
//! The lexicon is plain data: it can be built in code, loaded from a TOML or
//! JSON file, or taken from the built-in default. Keywords may overlap
//! between categories; the classifier resolves overlap by scoring.

use crate::error::LexiconError;
use crate::Category;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_NEGATIONS: &[&str] = &[
    "not", "don't", "doesn't", "isn't", "aren't", "wasn't", "weren't", "can't", "won't", "no",
    "never",
];

const DEFAULT_ENTRIES: &[(Category, &[&str])] = &[
    (
        Category::Sad,
        &[
            "sad",
            "depressed",
            "hopeless",
            "crying",
            "miserable",
            "unhappy",
            "down",
            "bleak",
        ],
    ),
    (
        Category::Happy,
        &[
            "happy",
            "excited",
            "joy",
            "amazing",
            "wonderful",
            "great",
            "good",
            "fantastic",
        ],
    ),
    (
        Category::Anxious,
        &[
            "anxious",
            "worried",
            "nervous",
            "scared",
            "panic",
            "overwhelmed",
            "stressed",
        ],
    ),
    (
        Category::Grateful,
        &["grateful", "thankful", "appreciate", "blessed", "fortunate"],
    ),
];

/// Accepted range for a category weight
pub const WEIGHT_RANGE: std::ops::RangeInclusive<i32> = 1..=100;

const fn default_weight() -> i32 {
    1
}

/// Keywords for one scored category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub category: Category,
    pub keywords: Vec<String>,
    #[serde(default = "default_weight")]
    pub weight: i32,
}

impl LexiconEntry {
    #[must_use]
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            weight: default_weight(),
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }
}

#[derive(Deserialize)]
struct RawLexicon {
    entries: Vec<LexiconEntry>,
    negations: Vec<String>,
}

/// Validated keyword table plus negation set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    negations: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon, normalizing keywords to trimmed lowercase and
    /// dropping duplicates within each category.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry targets `neutral`, a category appears
    /// twice, a weight falls outside [`WEIGHT_RANGE`], a keyword is empty,
    /// or the negation set is empty.
    pub fn new(entries: Vec<LexiconEntry>, negations: Vec<String>) -> Result<Self, LexiconError> {
        let mut normalized: Vec<LexiconEntry> = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.category == Category::Neutral {
                return Err(LexiconError::NeutralEntry);
            }
            if normalized.iter().any(|e| e.category == entry.category) {
                return Err(LexiconError::DuplicateCategory(entry.category));
            }
            if !WEIGHT_RANGE.contains(&entry.weight) {
                return Err(LexiconError::InvalidWeight {
                    category: entry.category,
                    weight: entry.weight,
                });
            }

            let mut keywords: Vec<String> = Vec::with_capacity(entry.keywords.len());
            for keyword in entry.keywords {
                let keyword = keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(LexiconError::EmptyKeyword(entry.category));
                }
                if !keywords.contains(&keyword) {
                    keywords.push(keyword);
                }
            }

            normalized.push(LexiconEntry {
                category: entry.category,
                keywords,
                weight: entry.weight,
            });
        }

        let mut negation_set: Vec<String> = Vec::with_capacity(negations.len());
        for negation in negations {
            let negation = normalize_token(&negation.to_lowercase());
            if !negation.is_empty() && !negation_set.contains(&negation) {
                negation_set.push(negation);
            }
        }
        if negation_set.is_empty() {
            return Err(LexiconError::NoNegations);
        }

        Ok(Self {
            entries: normalized,
            negations: negation_set,
        })
    }

    /// Parse a lexicon from TOML
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation
    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        let raw: RawLexicon = toml::from_str(content)?;
        Self::new(raw.entries, raw.negations)
    }

    /// Parse a lexicon from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation
    pub fn from_json_str(content: &str) -> Result<Self, LexiconError> {
        let raw: RawLexicon = serde_json::from_str(content)?;
        Self::new(raw.entries, raw.negations)
    }

    /// Load a lexicon file; `.json` files are read as JSON, anything else as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let lexicon = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        log::info!(
            "Loaded lexicon from {} ({} categories, {} negations)",
            path.display(),
            lexicon.entries.len(),
            lexicon.negations.len()
        );
        Ok(lexicon)
    }

    #[must_use]
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    #[must_use]
    pub fn negations(&self) -> &[String] {
        &self.negations
    }

    /// Keywords for a category (empty for `neutral` or absent categories)
    #[must_use]
    pub fn keywords(&self, category: Category) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.keywords.as_slice())
            .unwrap_or_default()
    }

    /// Whether a single lowercase token is a negation word.
    ///
    /// Matching is by exact membership after stripping surrounding
    /// punctuation, so "no," matches but "know" and "nothing" do not.
    #[must_use]
    pub fn is_negation(&self, token: &str) -> bool {
        let token = normalize_token(token);
        !token.is_empty() && self.negations.iter().any(|n| *n == token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(category, keywords)| LexiconEntry::new(*category, keywords))
                .collect(),
            negations: DEFAULT_NEGATIONS.iter().map(|n| (*n).to_string()).collect(),
        }
    }
}

/// Strip leading/trailing punctuation and fold typographic apostrophes
pub(crate) fn normalize_token(token: &str) -> String {
    token
        .replace('\u{2019}', "'")
        .trim_matches(|c: char| !(c.is_alphanumeric() || c == '\''))
        .to_string()
}
