// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The identifier a voter gives when joining the queue and when voting.
///
/// It is supplied by the caller and is not required to be unique: the same
/// identifier may be queued several times.
pub type VoterId = i64;

// ******** Output data structures *********

/// A candidate and its current number of votes.
///
/// This is a snapshot: modifying it has no effect on the election.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Candidate {
    pub name: String,
    pub votes: u64,
}

/// A voter waiting in line, with the name of the candidate they chose.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct QueueEntry {
    pub voter_id: VoterId,
    pub candidate: String,
}

/// A vote that went through.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct LedgerEntry {
    pub voter_id: VoterId,
    pub candidate: String,
}

/// Where a voter currently stands.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum VoterStatus {
    /// Never queued, never voted.
    Unregistered,
    /// Waiting in line. `position` is 0 for the head of the queue.
    Queued { position: usize },
    /// Served, and not queued again.
    Voted { candidate: String },
}

/// Everything that can be reported about an election, taken at one point in time.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ElectionSummary {
    /// Sorted by name.
    pub candidates: Vec<Candidate>,
    /// Sorted by decreasing number of votes, then by name.
    pub ranking: Vec<Candidate>,
    /// Head first.
    pub queue: Vec<QueueEntry>,
    /// Sorted by voter id.
    pub votes: Vec<LedgerEntry>,
}

/// Errors returned by the election operations.
///
/// None of them is fatal: the election is left exactly as it was before the
/// failed call.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ElectionError {
    /// A voter asked for a candidate that was never added.
    CandidateNotFound { name: String },
    /// A vote was cast while nobody is waiting in line.
    QueueEmpty,
    /// A vote was cast by someone who is not at the head of the queue.
    NotYourTurn { voter_id: VoterId, head: VoterId },
    /// Only returned under [DuplicateCandidateMode::Reject].
    DuplicateCandidateName { name: String },
    EmptyCandidateName,
}

impl Error for ElectionError {}

impl Display for ElectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElectionError::CandidateNotFound { name } => {
                write!(f, "Candidate '{}' not found", name)
            }
            ElectionError::QueueEmpty => write!(f, "No voters in the voting queue"),
            ElectionError::NotYourTurn { voter_id, head } => write!(
                f,
                "It's not the turn for voter with ID {} (voter {} is first in line)",
                voter_id, head
            ),
            ElectionError::DuplicateCandidateName { name } => {
                write!(f, "Candidate '{}' already exists", name)
            }
            ElectionError::EmptyCandidateName => write!(f, "Candidate names may not be empty"),
        }
    }
}

// ********* Configuration **********

/// What to do when a candidate is added a second time.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum DuplicateCandidateMode {
    /// Keep the existing candidate and report success.
    Ignore,
    /// Keep the existing candidate and return [ElectionError::DuplicateCandidateName].
    Reject,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ElectionRules {
    pub duplicate_candidate_mode: DuplicateCandidateMode,
}

impl ElectionRules {
    pub const DEFAULT_RULES: ElectionRules = ElectionRules {
        duplicate_candidate_mode: DuplicateCandidateMode::Ignore,
    };
}

impl Default for ElectionRules {
    fn default() -> Self {
        ElectionRules::DEFAULT_RULES
    }
}
