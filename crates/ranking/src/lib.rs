//! Candidate ranking: scores intervention triples against the model and
//! reports the top-K.

pub mod candidates;
pub mod ranker;
pub mod report;

pub use ranker::Ranker;
pub use report::RankingReport;
