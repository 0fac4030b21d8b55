use log::debug;

use std::collections::VecDeque;

use crate::config::VoterId;
use crate::registry::CandidateId;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub(crate) struct PendingVote {
    pub(crate) voter_id: VoterId,
    pub(crate) candidate: CandidateId,
}

/// Voters waiting to vote, served strictly in arrival order.
///
/// The only way to leave the queue is to be at its head and to be asked for
/// by identifier (see `dequeue_if_matches`). Nobody is skipped.
#[derive(Debug, Clone, Default)]
pub(crate) struct VoterQueue {
    entries: VecDeque<PendingVote>,
}

impl VoterQueue {
    pub(crate) fn new() -> VoterQueue {
        VoterQueue::default()
    }

    /// No check is made on the voter id: the same voter may be queued several times.
    pub(crate) fn enqueue(&mut self, voter_id: VoterId, candidate: CandidateId) {
        self.entries.push_back(PendingVote {
            voter_id,
            candidate,
        });
        debug!(
            "enqueue: voter {} queued for {:?}, queue length: {}",
            voter_id,
            candidate,
            self.entries.len()
        );
    }

    pub(crate) fn peek_head(&self) -> Option<PendingVote> {
        self.entries.front().cloned()
    }

    /// Removes the head of the queue if it belongs to this voter.
    /// The queue is left untouched otherwise.
    pub(crate) fn dequeue_if_matches(&mut self, voter_id: VoterId) -> bool {
        match self.entries.front() {
            Some(head) if head.voter_id == voter_id => {
                self.entries.pop_front();
                true
            }
            _ => false,
        }
    }

    /// Head first.
    pub(crate) fn snapshot(&self) -> Vec<PendingVote> {
        self.entries.iter().cloned().collect()
    }

    /// Position of the first pending entry of this voter (0 is the head).
    pub(crate) fn position(&self, voter_id: VoterId) -> Option<usize> {
        self.entries.iter().position(|e| e.voter_id == voter_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
