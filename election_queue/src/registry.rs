use log::debug;

use std::{collections::HashMap, ops::AddAssign};

use crate::config::Candidate;

// Index of a candidate in the registry storage. Candidates are never removed,
// so an id stays valid for the whole election.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub(crate) struct CandidateId(u32);

impl CandidateId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
pub(crate) struct VoteCount(pub(crate) u64);

impl VoteCount {
    pub(crate) const EMPTY: VoteCount = VoteCount(0);
    const ONE: VoteCount = VoteCount(1);
}

impl std::iter::Sum for VoteCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        VoteCount(iter.map(|vc| vc.0).sum())
    }
}

impl AddAssign for VoteCount {
    fn add_assign(&mut self, rhs: VoteCount) {
        self.0 += rhs.0;
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
struct CandidateRecord {
    name: String,
    votes: VoteCount,
}

impl CandidateRecord {
    fn snapshot(&self) -> Candidate {
        Candidate {
            name: self.name.clone(),
            votes: self.votes.0,
        }
    }
}

/// Outcome of an insertion.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub(crate) enum Insertion {
    Added(CandidateId),
    AlreadyPresent(CandidateId),
}

/// All the candidates of an election.
///
/// Candidates are stored once, in insertion order, and are looked up by name
/// through a hash index. The sorted views are computed on demand.
#[derive(Debug, Clone, Default)]
pub(crate) struct CandidateRegistry {
    records: Vec<CandidateRecord>,
    by_name: HashMap<String, CandidateId>,
}

impl CandidateRegistry {
    pub(crate) fn new() -> CandidateRegistry {
        CandidateRegistry::default()
    }

    /// Inserts a candidate with no votes. An existing candidate with the same
    /// name is left untouched.
    pub(crate) fn add(&mut self, name: &str) -> Insertion {
        if let Some(cid) = self.by_name.get(name) {
            debug!("add: candidate {:?} already registered as {:?}", name, cid);
            return Insertion::AlreadyPresent(*cid);
        }
        let cid = CandidateId(self.records.len() as u32);
        self.records.push(CandidateRecord {
            name: name.to_string(),
            votes: VoteCount::EMPTY,
        });
        self.by_name.insert(name.to_string(), cid);
        debug!("add: candidate {:?} registered as {:?}", name, cid);
        Insertion::Added(cid)
    }

    /// Exact, case-sensitive lookup.
    pub(crate) fn find(&self, name: &str) -> Option<CandidateId> {
        self.by_name.get(name).cloned()
    }

    pub(crate) fn name(&self, cid: CandidateId) -> &str {
        self.records[cid.index()].name.as_str()
    }

    pub(crate) fn get(&self, cid: CandidateId) -> Candidate {
        self.records[cid.index()].snapshot()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn total_votes(&self) -> VoteCount {
        self.records.iter().map(|r| r.votes).sum()
    }

    /// Returns the new count for this candidate.
    pub(crate) fn increment_votes(&mut self, cid: CandidateId) -> VoteCount {
        let record = &mut self.records[cid.index()];
        record.votes += VoteCount::ONE;
        debug!(
            "increment_votes: {:?} ({}) now has {:?}",
            cid, record.name, record.votes
        );
        record.votes
    }

    /// All the candidates, in increasing name order.
    pub(crate) fn list_sorted_by_name(&self) -> Vec<Candidate> {
        let mut sorted: Vec<&CandidateRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted.iter().map(|r| r.snapshot()).collect()
    }

    /// All the candidates, by decreasing number of votes.
    /// Candidates with the same number of votes are in increasing name order.
    pub(crate) fn list_ranked_by_votes(&self) -> Vec<Candidate> {
        let mut ranked = self.list_sorted_by_name();
        // sort_by is stable: ties keep the name order from above.
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cs: &[Candidate]) -> Vec<&str> {
        cs.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn sorted_by_name_whatever_the_insertion_order() {
        let mut reg = CandidateRegistry::new();
        for n in ["Carol", "Alice", "bob", "Bob", "Dave"] {
            reg.add(n);
        }
        assert_eq!(
            names(&reg.list_sorted_by_name()),
            vec!["Alice", "Bob", "Carol", "Dave", "bob"]
        );
    }

    #[test]
    fn duplicate_name_is_not_inserted_twice() {
        let mut reg = CandidateRegistry::new();
        let first = reg.add("Alice");
        let cid = match first {
            Insertion::Added(cid) => cid,
            x => panic!("unexpected {:?}", x),
        };
        reg.increment_votes(cid);
        assert_eq!(reg.add("Alice"), Insertion::AlreadyPresent(cid));
        assert_eq!(reg.len(), 1);
        // The existing candidate kept its votes.
        assert_eq!(reg.get(cid).votes, 1);
    }

    #[test]
    fn find_is_exact() {
        let mut reg = CandidateRegistry::new();
        reg.add("Alice");
        assert!(reg.find("Alice").is_some());
        assert_eq!(reg.find("alice"), None);
        assert_eq!(reg.find("Alic"), None);
        assert_eq!(reg.find(""), None);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let mut reg = CandidateRegistry::new();
        for n in ["Carol", "Bob", "Alice"] {
            reg.add(n);
        }
        let bob = reg.find("Bob").unwrap();
        let carol = reg.find("Carol").unwrap();
        let alice = reg.find("Alice").unwrap();
        for _ in 0..3 {
            reg.increment_votes(carol);
            reg.increment_votes(bob);
        }
        reg.increment_votes(alice);
        let ranked = reg.list_ranked_by_votes();
        assert_eq!(names(&ranked), vec!["Bob", "Carol", "Alice"]);
        assert_eq!(
            ranked.iter().map(|c| c.votes).collect::<Vec<u64>>(),
            vec![3, 3, 1]
        );
        assert_eq!(reg.total_votes(), VoteCount(7));
    }

    #[test]
    fn increment_returns_new_count() {
        let mut reg = CandidateRegistry::new();
        let cid = match reg.add("Alice") {
            Insertion::Added(cid) => cid,
            x => panic!("unexpected {:?}", x),
        };
        assert_eq!(reg.increment_votes(cid), VoteCount(1));
        assert_eq!(reg.increment_votes(cid), VoteCount(2));
        assert_eq!(reg.name(cid), "Alice");
    }
}
