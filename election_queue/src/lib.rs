/*!
An in-memory election where voters line up before voting.

Candidates are added by name. Voters join a queue by giving their identifier
and the candidate they want to vote for, and then vote one at a time, in the
order they joined. Only the voter at the head of the queue may vote.

```
use election_queue::*;

let mut election = ElectionService::new(&ElectionRules::DEFAULT_RULES);
election.add_candidate("Bob")?;
election.add_candidate("Alice")?;

election.register_voter(1, "Bob")?;
election.register_voter(2, "Alice")?;

// Voter 2 has to wait for voter 1.
assert_eq!(
    election.cast_vote(2),
    Err(ElectionError::NotYourTurn { voter_id: 2, head: 1 })
);
election.cast_vote(1)?;

assert_eq!(election.ranking()[0].name, "Bob");
# Ok::<(), ElectionError>(())
```
*/

pub mod builder;
mod config;
mod ledger;
pub mod manual;
mod queue;
mod registry;
pub mod report;

use log::{debug, info};

pub use crate::config::*;
use crate::ledger::VotingLedger;
use crate::queue::{PendingVote, VoterQueue};
use crate::registry::{CandidateId, CandidateRegistry, Insertion};

/// The state of one election: its candidates, the voters waiting in line and
/// the votes already cast.
///
/// All the reads return copies. The only way to change an election is through
/// `add_candidate`, `register_voter` and `cast_vote`.
#[derive(Debug, Clone)]
pub struct ElectionService {
    rules: ElectionRules,
    registry: CandidateRegistry,
    queue: VoterQueue,
    ledger: VotingLedger,
}

impl Default for ElectionService {
    fn default() -> Self {
        ElectionService::new(&ElectionRules::DEFAULT_RULES)
    }
}

impl ElectionService {
    pub fn new(rules: &ElectionRules) -> ElectionService {
        info!("Starting election with rules: {:?}", rules);
        ElectionService {
            rules: rules.clone(),
            registry: CandidateRegistry::new(),
            queue: VoterQueue::new(),
            ledger: VotingLedger::new(),
        }
    }

    pub fn rules(&self) -> &ElectionRules {
        &self.rules
    }

    /// Adds a candidate with no votes.
    ///
    /// Adding a name that is already present does not change anything. Whether
    /// it is reported as an error depends on [ElectionRules::duplicate_candidate_mode].
    pub fn add_candidate(&mut self, name: &str) -> Result<(), ElectionError> {
        if name.is_empty() {
            return Err(ElectionError::EmptyCandidateName);
        }
        match (self.registry.add(name), self.rules.duplicate_candidate_mode) {
            (Insertion::Added(_), _) => Ok(()),
            (Insertion::AlreadyPresent(_), DuplicateCandidateMode::Ignore) => Ok(()),
            (Insertion::AlreadyPresent(_), DuplicateCandidateMode::Reject) => {
                Err(ElectionError::DuplicateCandidateName {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Puts a voter at the end of the line, with their choice of candidate.
    ///
    /// The candidate must exist. The same voter may be registered more than
    /// once, each registration waits for its own turn.
    pub fn register_voter(
        &mut self,
        voter_id: VoterId,
        candidate_name: &str,
    ) -> Result<(), ElectionError> {
        let cid = self.find_id(candidate_name)?;
        self.queue.enqueue(voter_id, cid);
        Ok(())
    }

    /// Records the vote of the voter at the head of the line.
    ///
    /// Returns the candidate that received the vote, with its updated count.
    /// On error, nothing is changed.
    pub fn cast_vote(&mut self, voter_id: VoterId) -> Result<Candidate, ElectionError> {
        let head: PendingVote = self.queue.peek_head().ok_or(ElectionError::QueueEmpty)?;
        if head.voter_id != voter_id {
            debug!(
                "cast_vote: voter {} is not first in line (head: {})",
                voter_id, head.voter_id
            );
            return Err(ElectionError::NotYourTurn {
                voter_id,
                head: head.voter_id,
            });
        }
        let removed = self.queue.dequeue_if_matches(voter_id);
        debug_assert!(removed, "head changed between peek and dequeue");
        self.registry.increment_votes(head.candidate);
        if let Some(previous) = self.ledger.record(voter_id, head.candidate) {
            debug!(
                "cast_vote: voter {} had already voted for {}",
                voter_id,
                self.registry.name(previous)
            );
        }
        let candidate = self.registry.get(head.candidate);
        info!(
            "Vote for candidate {:?} recorded by voter {}",
            candidate.name, voter_id
        );
        Ok(candidate)
    }

    // ******** Reads *********

    pub fn find_candidate(&self, name: &str) -> Option<Candidate> {
        self.registry.find(name).map(|cid| self.registry.get(cid))
    }

    /// All the candidates, sorted by name.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.registry.list_sorted_by_name()
    }

    /// All the candidates, by decreasing number of votes and then by name.
    pub fn ranking(&self) -> Vec<Candidate> {
        self.registry.list_ranked_by_votes()
    }

    /// The voters waiting in line, head first.
    pub fn queue(&self) -> Vec<QueueEntry> {
        self.queue
            .snapshot()
            .iter()
            .map(|pv| self.queue_entry(pv))
            .collect()
    }

    pub fn queue_head(&self) -> Option<QueueEntry> {
        self.queue.peek_head().map(|pv| self.queue_entry(&pv))
    }

    /// The votes cast so far, the latest one for each voter.
    /// No particular order should be assumed.
    pub fn votes(&self) -> Vec<LedgerEntry> {
        self.ledger
            .all_entries()
            .iter()
            .map(|(voter_id, cid)| LedgerEntry {
                voter_id: *voter_id,
                candidate: self.registry.name(*cid).to_string(),
            })
            .collect()
    }

    pub fn voter_status(&self, voter_id: VoterId) -> VoterStatus {
        if let Some(position) = self.queue.position(voter_id) {
            return VoterStatus::Queued { position };
        }
        match self.ledger.get(voter_id) {
            Some(cid) => VoterStatus::Voted {
                candidate: self.registry.name(cid).to_string(),
            },
            None => VoterStatus::Unregistered,
        }
    }

    pub fn num_candidates(&self) -> usize {
        self.registry.len()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_queue_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn total_votes(&self) -> u64 {
        self.registry.total_votes().0
    }

    pub fn summary(&self) -> ElectionSummary {
        let mut votes = self.votes();
        votes.sort_by_key(|e| e.voter_id);
        ElectionSummary {
            candidates: self.candidates(),
            ranking: self.ranking(),
            queue: self.queue(),
            votes,
        }
    }

    // ******** Text reports *********

    pub fn list_candidates(&self) -> String {
        report::render_candidates(&self.candidates())
    }

    pub fn list_queue(&self) -> String {
        report::render_queue(&self.queue())
    }

    pub fn list_votes(&self) -> String {
        report::render_votes(&self.votes())
    }

    pub fn rank_by_votes(&self) -> String {
        report::render_ranking(&self.ranking())
    }

    fn find_id(&self, name: &str) -> Result<CandidateId, ElectionError> {
        self.registry
            .find(name)
            .ok_or_else(|| ElectionError::CandidateNotFound {
                name: name.to_string(),
            })
    }

    fn queue_entry(&self, pv: &PendingVote) -> QueueEntry {
        QueueEntry {
            voter_id: pv.voter_id,
            candidate: self.registry.name(pv.candidate).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn election(names: &[&str]) -> ElectionService {
        init();
        let mut e = ElectionService::default();
        for n in names {
            e.add_candidate(n).unwrap();
        }
        e
    }

    fn tally(e: &ElectionService) -> Vec<(String, u64)> {
        e.candidates()
            .iter()
            .map(|c| (c.name.clone(), c.votes))
            .collect()
    }

    fn queued(e: &ElectionService) -> Vec<(VoterId, String)> {
        e.queue()
            .iter()
            .map(|q| (q.voter_id, q.candidate.clone()))
            .collect()
    }

    // Everything a caller can observe.
    fn state(e: &ElectionService) -> ElectionSummary {
        e.summary()
    }

    #[test]
    fn candidates_are_listed_by_name() {
        let e = election(&["Carol", "Alice", "Bob"]);
        assert_eq!(
            tally(&e),
            vec![
                ("Alice".to_string(), 0),
                ("Bob".to_string(), 0),
                ("Carol".to_string(), 0)
            ]
        );
    }

    #[test]
    fn adding_twice_keeps_one_candidate() {
        let mut e = election(&["Alice", "Bob", "Alice"]);
        e.register_voter(1, "Alice").unwrap();
        e.cast_vote(1).unwrap();
        assert_eq!(e.add_candidate("Alice"), Ok(()));
        assert_eq!(e.num_candidates(), 2);
        assert_eq!(e.find_candidate("Alice").map(|c| c.votes), Some(1));
    }

    #[test]
    fn duplicates_can_be_rejected() {
        init();
        let rules = ElectionRules {
            duplicate_candidate_mode: DuplicateCandidateMode::Reject,
        };
        let mut e = ElectionService::new(&rules);
        e.add_candidate("Alice").unwrap();
        assert_eq!(
            e.add_candidate("Alice"),
            Err(ElectionError::DuplicateCandidateName {
                name: "Alice".to_string()
            })
        );
        assert_eq!(e.num_candidates(), 1);
    }

    #[test]
    fn empty_names_are_refused() {
        let mut e = election(&[]);
        assert_eq!(e.add_candidate(""), Err(ElectionError::EmptyCandidateName));
        assert_eq!(e.num_candidates(), 0);
    }

    #[test]
    fn register_unknown_candidate() {
        let mut e = election(&["Alice"]);
        let before = state(&e);
        assert_eq!(
            e.register_voter(1, "Zed"),
            Err(ElectionError::CandidateNotFound {
                name: "Zed".to_string()
            })
        );
        assert_eq!(state(&e), before);
        assert_eq!(e.voter_status(1), VoterStatus::Unregistered);
    }

    #[test]
    fn vote_on_empty_queue() {
        let mut e = election(&["Alice"]);
        let before = state(&e);
        assert_eq!(e.cast_vote(1), Err(ElectionError::QueueEmpty));
        assert_eq!(state(&e), before);
    }

    // The walkthrough: register two voters, try out of order, then in order.
    #[test]
    fn queue_walkthrough() {
        let mut e = election(&["Alice", "Bob", "Carol"]);
        e.register_voter(1, "Bob").unwrap();
        e.register_voter(2, "Alice").unwrap();
        assert_eq!(
            queued(&e),
            vec![(1, "Bob".to_string()), (2, "Alice".to_string())]
        );

        let before = state(&e);
        assert_eq!(
            e.cast_vote(2),
            Err(ElectionError::NotYourTurn {
                voter_id: 2,
                head: 1
            })
        );
        assert_eq!(state(&e), before);

        let voted = e.cast_vote(1).unwrap();
        assert_eq!(
            voted,
            Candidate {
                name: "Bob".to_string(),
                votes: 1
            }
        );
        assert_eq!(queued(&e), vec![(2, "Alice".to_string())]);
        assert_eq!(
            e.votes(),
            vec![LedgerEntry {
                voter_id: 1,
                candidate: "Bob".to_string()
            }]
        );
        assert_eq!(
            e.voter_status(1),
            VoterStatus::Voted {
                candidate: "Bob".to_string()
            }
        );
        assert_eq!(e.voter_status(2), VoterStatus::Queued { position: 0 });

        // Voting again is refused: voter 2 is now first in line.
        assert_eq!(
            e.cast_vote(1),
            Err(ElectionError::NotYourTurn {
                voter_id: 1,
                head: 2
            })
        );
        assert_eq!(e.find_candidate("Bob").map(|c| c.votes), Some(1));
        assert_eq!(e.votes().len(), 1);
    }

    #[test]
    fn fifo_order_is_enforced() {
        let mut e = election(&["Alice", "Bob"]);
        let order: Vec<VoterId> = vec![5, 3, 9, 1, 4];
        for (idx, vid) in order.iter().enumerate() {
            let name = if idx % 2 == 0 { "Alice" } else { "Bob" };
            e.register_voter(*vid, name).unwrap();
        }
        for (idx, vid) in order.iter().enumerate() {
            // Everybody behind the head is refused.
            for later in order[idx + 1..].iter() {
                let before = state(&e);
                assert!(matches!(
                    e.cast_vote(*later),
                    Err(ElectionError::NotYourTurn { .. })
                ));
                assert_eq!(state(&e), before);
            }
            assert_eq!(e.queue_head().map(|h| h.voter_id), Some(*vid));
            e.cast_vote(*vid).unwrap();
        }
        assert!(e.is_queue_empty());
        assert_eq!(e.total_votes(), 5);
        assert_eq!(tally(&e), vec![("Alice".to_string(), 3), ("Bob".to_string(), 2)]);
    }

    #[test]
    fn requeued_voter_votes_twice() {
        let mut e = election(&["Alice", "Bob"]);
        e.register_voter(1, "Alice").unwrap();
        e.register_voter(2, "Bob").unwrap();
        e.register_voter(1, "Bob").unwrap();
        assert_eq!(e.voter_status(1), VoterStatus::Queued { position: 0 });

        e.cast_vote(1).unwrap();
        assert_eq!(e.voter_status(1), VoterStatus::Queued { position: 1 });
        e.cast_vote(2).unwrap();
        e.cast_vote(1).unwrap();

        // Both votes counted, the ledger keeps the latest one.
        assert_eq!(tally(&e), vec![("Alice".to_string(), 1), ("Bob".to_string(), 2)]);
        let mut votes = e.votes();
        votes.sort_by_key(|v| v.voter_id);
        assert_eq!(
            votes,
            vec![
                LedgerEntry {
                    voter_id: 1,
                    candidate: "Bob".to_string()
                },
                LedgerEntry {
                    voter_id: 2,
                    candidate: "Bob".to_string()
                }
            ]
        );
    }

    #[test]
    fn ranking_breaks_ties_by_name() {
        let mut e = election(&["Alice", "Bob", "Carol"]);
        let choices = ["Carol", "Bob", "Alice", "Bob", "Carol", "Carol", "Bob"];
        for (idx, name) in choices.iter().enumerate() {
            e.register_voter(idx as VoterId, name).unwrap();
        }
        for idx in 0..choices.len() {
            e.cast_vote(idx as VoterId).unwrap();
        }
        let ranking: Vec<(String, u64)> = e
            .ranking()
            .iter()
            .map(|c| (c.name.clone(), c.votes))
            .collect();
        assert_eq!(
            ranking,
            vec![
                ("Bob".to_string(), 3),
                ("Carol".to_string(), 3),
                ("Alice".to_string(), 1)
            ]
        );
        assert_eq!(
            e.rank_by_votes(),
            "Candidates sorted by Votes (Descending Order):\n\
             Bob                  : 3 votes\n\
             Carol                : 3 votes\n\
             Alice                : 1 votes\n"
        );
    }

    #[test]
    fn text_reports() {
        let mut e = election(&["Bob", "Alice"]);
        e.register_voter(1, "Bob").unwrap();
        e.register_voter(2, "Alice").unwrap();
        e.cast_vote(1).unwrap();
        assert_eq!(
            e.list_candidates(),
            "Candidates and Votes:\n\
             Alice                : 0 votes\n\
             Bob                  : 1 votes\n"
        );
        assert_eq!(
            e.list_queue(),
            "Candidates Waiting in Line:\nVoter ID: 2 for candidate 'Alice'\n"
        );
        assert_eq!(
            e.list_votes(),
            "Voted Candidates:\nVoter ID: 1 voted for candidate 'Bob'\n"
        );
    }
}
