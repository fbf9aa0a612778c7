use crate::Category;
use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

const SAD_REPLIES: &[&str] = &[
    "I'm here with you. Storms don't last forever, and neither will this feeling.",
    "Your feelings are completely valid. Let's anchor ourselves in this moment together.",
    "I'm holding space for you. You don't have to carry this weight alone.",
    "Even anchors face rough seas. What makes you feel steady right now?",
    "This moment is tough, but it's not your whole story. I believe in your resilience.",
];

const HAPPY_REPLIES: &[&str] = &[
    "I'm so glad to share this joyful moment with you! Your happiness matters.",
    "This is beautiful! Let's anchor this happy memory together.",
    "Your joy is contagious! Tell me more about what's lighting you up.",
    "I'm celebrating with you! These are the moments that make life wonderful.",
    "Your happiness anchors me too! Thank you for sharing this light.",
];

const ANXIOUS_REPLIES: &[&str] = &[
    "Let's breathe together. In... and out... You're safe here.",
    "I'm your steady anchor. What's one small thing that feels manageable right now?",
    "Your feelings are waves - they rise and fall. I'm here through all of them.",
    "Let's focus on just this moment. What do you notice around you right now?",
    "I'm not going anywhere. We can sit with these feelings together.",
];

const GRATEFUL_REPLIES: &[&str] = &[
    "Your gratitude is beautiful. It anchors you in what truly matters.",
    "I'm so glad you're recognizing these moments.",
    "Gratitude is a gift. Thank you for sharing it.",
];

const NEUTRAL_REPLIES: &[&str] = &[
    "I'm here, anchored and ready to listen whenever you need.",
    "How are you really feeling beneath the surface today?",
    "I'm present with you, in calm waters or stormy seas.",
    "Your everyday moments matter too. What's on your mind?",
    "I'm your steady companion through all of life's emotions.",
];

/// Something that can answer a classified message.
///
/// The canned table is the built-in source; a generative backend can be
/// plugged in behind the same trait.
pub trait ResponseSource: Send + Sync {
    /// Produce a reply for a message already classified as `category`
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a reply
    fn respond(&self, message: &str, category: Category) -> Result<String>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Fixed supportive replies per category, picked uniformly at random
#[derive(Debug, Clone)]
pub struct CannedResponses {
    table: Vec<(Category, Vec<String>)>,
}

impl CannedResponses {
    /// Build from a custom table. Categories without replies fall back to
    /// the neutral replies, and to a fixed line if those are missing too.
    #[must_use]
    pub fn new(table: Vec<(Category, Vec<String>)>) -> Self {
        Self { table }
    }

    /// Replies configured for a category (empty if none)
    #[must_use]
    pub fn replies(&self, category: Category) -> &[String] {
        self.table
            .iter()
            .find(|(c, replies)| *c == category && !replies.is_empty())
            .map(|(_, replies)| replies.as_slice())
            .unwrap_or_default()
    }

    /// Pick a reply with the given random source
    pub fn pick_with<R: Rng + ?Sized>(&self, category: Category, rng: &mut R) -> &str {
        let replies = match self.replies(category) {
            [] => self.replies(Category::Neutral),
            replies => replies,
        };
        replies
            .choose(rng)
            .map_or(NEUTRAL_REPLIES[0], String::as_str)
    }

    /// Pick a reply using the thread-local random source
    #[must_use]
    pub fn pick(&self, category: Category) -> &str {
        self.pick_with(category, &mut rand::thread_rng())
    }
}

fn owned_replies(replies: &[&str]) -> Vec<String> {
    replies.iter().map(|r| (*r).to_string()).collect()
}

impl Default for CannedResponses {
    fn default() -> Self {
        Self::new(vec![
            (Category::Sad, owned_replies(SAD_REPLIES)),
            (Category::Happy, owned_replies(HAPPY_REPLIES)),
            (Category::Anxious, owned_replies(ANXIOUS_REPLIES)),
            (Category::Grateful, owned_replies(GRATEFUL_REPLIES)),
            (Category::Neutral, owned_replies(NEUTRAL_REPLIES)),
        ])
    }
}

impl ResponseSource for CannedResponses {
    fn respond(&self, _message: &str, category: Category) -> Result<String> {
        Ok(self.pick(category).to_string())
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}
