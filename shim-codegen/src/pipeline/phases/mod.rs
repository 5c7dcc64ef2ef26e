//! Built-in pipeline phases.

mod collect;
mod discover;
mod vocabulary;

pub use collect::CollectPhase;
pub use discover::DiscoverPhase;
pub use vocabulary::VocabularyPhase;
