pub mod candidate_record;

pub use candidate_record::{CandidateRecord, ScoredCandidate};
