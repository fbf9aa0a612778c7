use crate::memory::InteractionEntry;
use crate::Category;

/// Message returned when a session has no history
pub const EMPTY_SUMMARY: &str =
    "We haven't shared many conversations yet. I'm here when you're ready.";

/// How often a category appears in a session log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    /// Share of all entries, 0-100
    pub percentage: f64,
}

/// Per-category shares in first-observed order
#[must_use]
pub fn category_shares(entries: &[InteractionEntry]) -> Vec<CategoryShare> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(c, _)| *c == entry.emotional_state) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.emotional_state, 1)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let total = entries.len() as f64;
    counts
        .into_iter()
        .map(|(category, count)| {
            #[allow(clippy::cast_precision_loss)]
            let percentage = count as f64 / total * 100.0;
            CategoryShare {
                category,
                count,
                percentage,
            }
        })
        .collect()
}

/// Most frequent category; ties go to the one observed first
#[must_use]
pub fn dominant_category(entries: &[InteractionEntry]) -> Option<Category> {
    category_shares(entries)
        .into_iter()
        .fold(None, |best: Option<CategoryShare>, share| match best {
            Some(b) if b.count >= share.count => Some(b),
            _ => Some(share),
        })
        .map(|share| share.category)
}

/// Human-readable sentence describing the emotional mix of a session log
#[must_use]
pub fn summarize(entries: &[InteractionEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    let insights: Vec<String> = category_shares(entries)
        .iter()
        .map(|share| format!("{:.1}% {} moments", share.percentage, share.category))
        .collect();

    format!(
        "Looking at our conversations, I notice: {}. I'm here through all of them.",
        insights.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(states: &[Category]) -> Vec<InteractionEntry> {
        states
            .iter()
            .map(|s| InteractionEntry::with_timestamp("2024-01-01T00:00:00Z", "msg", *s))
            .collect()
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(summarize(&[]), EMPTY_SUMMARY);
        assert!(category_shares(&[]).is_empty());
        assert_eq!(dominant_category(&[]), None);
    }

    #[test]
    fn test_two_thirds_sad() {
        let entries = log(&[Category::Sad, Category::Sad, Category::Happy]);
        assert_eq!(
            summarize(&entries),
            "Looking at our conversations, I notice: 66.7% sad moments, 33.3% happy moments. \
             I'm here through all of them."
        );
    }

    #[test]
    fn test_shares_keep_first_observed_order() {
        let entries = log(&[
            Category::Grateful,
            Category::Anxious,
            Category::Anxious,
            Category::Grateful,
        ]);
        let shares = category_shares(&entries);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, Category::Grateful);
        assert_eq!(shares[1].count, 2);
        assert!((shares[1].percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(dominant_category(&entries), Some(Category::Grateful));
    }

    #[test]
    fn test_single_category() {
        let entries = log(&[Category::Neutral]);
        assert!(summarize(&entries).contains("100.0% neutral moments"));
        assert_eq!(dominant_category(&entries), Some(Category::Neutral));
    }
}
