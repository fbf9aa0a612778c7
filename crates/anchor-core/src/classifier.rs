#[cfg(test)]
mod tests;

use crate::{Category, Lexicon};

/// Default number of tokens inspected before a keyword for negation
pub const DEFAULT_NEGATION_WINDOW: usize = 3;

/// Default lookback for the explicit "sad" boost
pub const DEFAULT_SAD_BOOST_WINDOW: usize = 2;

const SAD_LITERAL: &str = "sad";
const SAD_BOOST: i32 = 2;
const NEGATED_HAPPY_PENALTY: i32 = 2;

/// Per-category scores accumulated while classifying one message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores([i32; Category::ALL.len()]);

impl Scores {
    /// Score for a category; `neutral` is never scored and stays 0
    #[must_use]
    pub const fn get(&self, category: Category) -> i32 {
        self.0[category.index()]
    }

    fn add(&mut self, category: Category, delta: i32) {
        let score = &mut self.0[category.index()];
        *score = score.saturating_add(delta);
    }

    fn set(&mut self, category: Category, value: i32) {
        self.0[category.index()] = value;
    }

    /// Highest positive score, ties resolved by declaration order
    #[must_use]
    pub fn winner(&self) -> Option<Category> {
        let mut best: Option<(Category, i32)> = None;
        for category in Category::SCORED {
            let score = self.get(category);
            match best {
                _ if score <= 0 => {}
                Some((_, top)) if score <= top => {}
                _ => best = Some((category, score)),
            }
        }
        best.map(|(category, _)| category)
    }
}

/// A keyword found in the message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub category: Category,
    pub keyword: String,
    pub negated: bool,
}

/// Classification result with the evidence behind it
#[derive(Debug, Clone)]
pub struct Classification {
    pub category: Category,
    pub scores: Scores,
    pub matches: Vec<KeywordMatch>,
}

/// Negation-aware keyword classifier for emotional tone.
///
/// Scoring works on the lowercased message:
/// 1. every keyword found as a substring is located at the first token that
///    contains it, and is negated when one of the preceding
///    `negation_window` tokens is a negation word
/// 2. an unnegated keyword adds its category weight; a negated happy
///    keyword costs happy 2 and gives sad 1; other negated keywords count 0
/// 3. an unnegated literal "sad" (own `sad_boost_window` lookback) adds 2 to sad
/// 4. a negated message mentioning a happy keyword with nothing but happy
///    scoring is read as mild sadness
///
/// The highest positive score wins, ties resolved by [`Category`]
/// declaration order, and `neutral` is returned when nothing scores.
///
/// Known limitations: only happy keywords have a negation override, and the
/// explicit "sad" boost is a substring check, so "crusade" scores as sad.
#[derive(Debug, Clone)]
pub struct Classifier {
    lexicon: Lexicon,
    negation_window: usize,
    sad_boost_window: usize,
}

impl Classifier {
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            negation_window: DEFAULT_NEGATION_WINDOW,
            sad_boost_window: DEFAULT_SAD_BOOST_WINDOW,
        }
    }

    #[must_use]
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    #[must_use]
    pub fn with_sad_boost_window(mut self, window: usize) -> Self {
        self.sad_boost_window = window;
        self
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify a message into a single category
    #[must_use]
    pub fn classify(&self, message: &str) -> Category {
        self.classify_full(message).category
    }

    /// Classify with scores and keyword matches
    #[must_use]
    pub fn classify_full(&self, message: &str) -> Classification {
        let normalized = message.to_lowercase();
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        let mut scores = Scores::default();
        let mut matches = Vec::new();

        for entry in self.lexicon.entries() {
            for keyword in &entry.keywords {
                if !normalized.contains(keyword.as_str()) {
                    continue;
                }

                let negated = self.is_negated(&tokens, keyword, self.negation_window);
                if negated {
                    if entry.category == Category::Happy {
                        scores.add(Category::Happy, -NEGATED_HAPPY_PENALTY);
                        scores.add(Category::Sad, 1);
                    }
                } else {
                    scores.add(entry.category, entry.weight);
                }

                matches.push(KeywordMatch {
                    category: entry.category,
                    keyword: keyword.clone(),
                    negated,
                });
            }
        }

        if normalized.contains(SAD_LITERAL)
            && !self.is_negated(&tokens, SAD_LITERAL, self.sad_boost_window)
        {
            scores.add(Category::Sad, SAD_BOOST);
        }

        let has_negation = tokens.iter().any(|t| self.lexicon.is_negation(t));
        let mentions_happy = self
            .lexicon
            .keywords(Category::Happy)
            .iter()
            .any(|k| normalized.contains(k.as_str()));
        let others_scored = Category::SCORED
            .iter()
            .any(|c| *c != Category::Happy && scores.get(*c) > 0);

        if has_negation && mentions_happy && !others_scored {
            scores.add(Category::Sad, 1);
            scores.set(Category::Happy, (scores.get(Category::Happy) - 1).max(0));
        }

        let category = scores.winner().unwrap_or(Category::Neutral);
        log::debug!("Classified message as '{category}' (scores: {scores:?})");

        Classification {
            category,
            scores,
            matches,
        }
    }

    /// Whether the first token containing `keyword` is preceded by a
    /// negation word within `window` tokens
    fn is_negated(&self, tokens: &[&str], keyword: &str, window: usize) -> bool {
        tokens
            .iter()
            .position(|t| t.contains(keyword))
            .is_some_and(|index| {
                tokens[index.saturating_sub(window)..index]
                    .iter()
                    .any(|t| self.lexicon.is_negation(t))
            })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}
