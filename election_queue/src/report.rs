// Plain text rendering of the election reports.

use std::fmt::Write;

use crate::config::{Candidate, LedgerEntry, QueueEntry};

pub const CANDIDATES_HEADER: &str = "Candidates and Votes:";
pub const QUEUE_HEADER: &str = "Candidates Waiting in Line:";
pub const VOTES_HEADER: &str = "Voted Candidates:";
pub const RANKING_HEADER: &str = "Candidates sorted by Votes (Descending Order):";

/// One line per candidate: `<name> : <votes> votes`, with the name padded to 20 columns.
pub fn candidate_line(c: &Candidate) -> String {
    format!("{:<20} : {} votes", c.name, c.votes)
}

pub fn queue_line(e: &QueueEntry) -> String {
    format!("Voter ID: {} for candidate '{}'", e.voter_id, e.candidate)
}

pub fn vote_line(e: &LedgerEntry) -> String {
    format!("Voter ID: {} voted for candidate '{}'", e.voter_id, e.candidate)
}

fn render<T>(header: &str, items: &[T], line: fn(&T) -> String) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", header);
    for item in items {
        let _ = writeln!(out, "{}", line(item));
    }
    out
}

pub(crate) fn render_candidates(candidates: &[Candidate]) -> String {
    render(CANDIDATES_HEADER, candidates, candidate_line)
}

pub(crate) fn render_ranking(ranking: &[Candidate]) -> String {
    render(RANKING_HEADER, ranking, candidate_line)
}

pub(crate) fn render_queue(queue: &[QueueEntry]) -> String {
    render(QUEUE_HEADER, queue, queue_line)
}

pub(crate) fn render_votes(votes: &[LedgerEntry]) -> String {
    render(VOTES_HEADER, votes, vote_line)
}
