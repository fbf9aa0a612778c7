use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emotional state a message can be classified into.
///
/// Declaration order doubles as the classifier's tie-break order, first
/// wins. Explicitly named emotions come before sadness, which a negated
/// happy keyword can add indirectly, and sad comes before happy so that
/// "unhappy" (which also contains "happy") reads as sad. `Neutral` is never
/// scored and is only returned as a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anxious,
    Grateful,
    Sad,
    Happy,
    Neutral,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Anxious,
        Self::Grateful,
        Self::Sad,
        Self::Happy,
        Self::Neutral,
    ];

    /// Categories the classifier scores (everything except `Neutral`), in
    /// declaration order
    pub const SCORED: [Self; 4] = [Self::Anxious, Self::Grateful, Self::Sad, Self::Happy];

    /// Lowercase token used on the wire and in the snapshot file
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sad => "sad",
            Self::Happy => "happy",
            Self::Anxious => "anxious",
            Self::Grateful => "grateful",
            Self::Neutral => "neutral",
        }
    }

    /// Position in declaration order
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotional category: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sad" => Ok(Self::Sad),
            "happy" => Ok(Self::Happy),
            "anxious" => Ok(Self::Anxious),
            "grateful" => Ok(Self::Grateful),
            "neutral" => Ok(Self::Neutral),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SAD".parse::<Category>().unwrap(), Category::Sad);
        assert_eq!(" Grateful ".parse::<Category>().unwrap(), Category::Grateful);
        assert!("furious".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn test_scored_excludes_neutral() {
        assert!(!Category::SCORED.contains(&Category::Neutral));
        assert_eq!(Category::Neutral.index(), Category::ALL.len() - 1);
    }

    #[test]
    fn test_constants_follow_declaration_order() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
        }
        assert_eq!(Category::SCORED, Category::ALL[..4]);
        assert!(Category::Anxious < Category::Sad);
        assert!(Category::Sad < Category::Happy);
    }
}
