use std::collections::BTreeMap;

use crate::config::VoterId;
use crate::registry::CandidateId;

/// The votes that went through, one per voter.
///
/// Recording a vote for a voter that is already present replaces the previous
/// entry.
#[derive(Debug, Clone, Default)]
pub(crate) struct VotingLedger {
    votes: BTreeMap<VoterId, CandidateId>,
}

impl VotingLedger {
    pub(crate) fn new() -> VotingLedger {
        VotingLedger::default()
    }

    /// Returns the previous choice of this voter, if any.
    pub(crate) fn record(
        &mut self,
        voter_id: VoterId,
        candidate: CandidateId,
    ) -> Option<CandidateId> {
        self.votes.insert(voter_id, candidate)
    }

    pub(crate) fn get(&self, voter_id: VoterId) -> Option<CandidateId> {
        self.votes.get(&voter_id).cloned()
    }

    // Callers must not rely on the order. It happens to be by voter id.
    pub(crate) fn all_entries(&self) -> Vec<(VoterId, CandidateId)> {
        self.votes.iter().map(|(vid, cid)| (*vid, *cid)).collect()
    }
}
