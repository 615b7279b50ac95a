mod aggregate;
mod export;
mod matcher;
mod normalizer;
mod session;
mod similarity;
mod summary;
mod tokenizer;

pub use aggregate::{aggregate, find_cheapest, LineItem, StoreAggregate};
pub use export::{aggregates_to_csv, ExportError};
pub use matcher::{match_query, MatchResult, DEFAULT_THRESHOLD, EXACT_SCORE, SUBSTRING_SCORE};
pub use normalizer::normalize;
pub use session::BasketSession;
pub use summary::{summarize, BasketSummary};
pub use tokenizer::tokenize;
