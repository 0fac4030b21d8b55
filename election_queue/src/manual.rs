/*!

This is the long-form manual for `election_queue` and `elq`.

## How an election runs

1. Candidates are added by name. Names are case-sensitive: `Bob` and `bob`
   are two different candidates. Adding the same name twice keeps a single
   candidate (or is refused, see [Configuration](#configuration)).
2. Voters join the line by giving their voter ID and the name of the
   candidate they want to vote for. The candidate must already exist.
3. Voters vote in the order they joined the line. Casting a vote with a voter
   ID that is not the one at the head of the line is refused and changes
   nothing: the person at the head keeps their place.

Voter IDs are not checked for uniqueness. A voter that joins the line twice
votes twice; the list of votes only keeps their latest choice, while both votes
are counted.

## Reports

- `Display Candidates`: all the candidates in alphabetical order with their
  number of votes.
- `Display Queue`: the voters waiting in line, first in line first.
- `Display Voted Candidates`: who voted for whom.
- `Sort Candidates by Votes`: the candidates with the most votes first.
  Candidates with the same number of votes are listed in alphabetical order.

## Interactive mode

Running `elq` without a `--config` file starts a menu on the terminal:

```text
==== Online Voting System ====
1. Add Candidate
2. Register Voter
3. Vote
4. Display Candidates
5. Display Queue
6. Display Voted Candidates
7. Sort Candidates by Votes
8. Exit
Enter your choice:
```

## Session files

A whole session can be replayed from a JSON file with `--config`:

```text
{
  "electionSettings": {
    "electionName": "Club board",
    "duplicateCandidates": "ignore",
    "stopOnError": false
  },
  "candidates": [{"name": "Alice"}, {"name": "Bob"}],
  "commands": [
    {"action": "addCandidate", "name": "Carol"},
    {"action": "registerVoter", "voterId": 1, "candidate": "Bob"},
    {"action": "castVote", "voterId": 1}
  ]
}
```

Commands that are refused (unknown candidate, not the voter's turn, ...) are
listed under `rejected` in the summary, unless `stopOnError` (or `--strict`)
is set, in which case the run stops at the first one.

The summary is written in JSON with `--out <file>` (or `--out stdout`).
Passing `--reference <file>` compares the summary with an expected one and
fails if they differ.

## Candidate rosters

Candidates can be loaded from an Excel file with `--roster`. The names are
read from the first column of the first worksheet (or of the worksheet given
with `--worksheet`). Empty cells are skipped. Use `--roster-skip-rows 1` if the
first row is a header.

## Configuration

- `duplicateCandidates` (`"ignore"` or `"reject"`, default `"ignore"`): whether
  adding an existing candidate is silently accepted or reported as an error.
  The `--reject-duplicates` flag forces `"reject"`.
- `stopOnError` (boolean, default `false`): stop the session at the first
  refused command. The `--strict` flag forces it.

 */
