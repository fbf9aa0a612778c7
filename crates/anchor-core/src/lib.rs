pub mod category;
pub mod classifier;
pub mod companion;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod memory;
pub mod responses;
pub mod summary;

pub use category::{Category, UnknownCategory};
pub use classifier::{Classification, Classifier, KeywordMatch, Scores};
pub use companion::{is_exit_command, Companion, Reply};
pub use config::AnchorConfig;
pub use error::{ConfigError, LexiconError, MemoryError};
pub use lexicon::{Lexicon, LexiconEntry};
pub use memory::{InteractionEntry, SessionStore};
pub use responses::{CannedResponses, ResponseSource};
pub use summary::{category_shares, dominant_category, summarize, CategoryShare};
