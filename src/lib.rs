pub mod candidates;
pub mod classify;
pub mod rank;
pub mod similarity;
pub mod suggest;

pub use candidates::{CommandModel, OptionCandidate, SubcommandCandidate};
pub use classify::{classify, TokenClass};
pub use rank::{most_similar, strip_markers, DEFAULT_THRESHOLD, MAX_SUGGESTIONS};
pub use similarity::similarity;
pub use suggest::{suggestions, suggestions_with_threshold, Suggestion};
