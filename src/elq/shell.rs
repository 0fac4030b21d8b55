// The interactive menu. It parses what the user types and calls the election.

use std::io::{BufRead, Write};

use crate::elq::*;

const MENU: &str = "==== Online Voting System ====
1. Add Candidate
2. Register Voter
3. Vote
4. Display Candidates
5. Display Queue
6. Display Voted Candidates
7. Sort Candidates by Votes
8. Exit";

struct Shell<'e, R, W> {
    election: &'e mut ElectionService,
    input: R,
    output: W,
    // One more than the largest voter ID registered so far.
    next_voter_id: VoterId,
}

impl<'e, R: BufRead, W: Write> Shell<'e, R, W> {
    fn say(&mut self, msg: &str) -> ElqResult<()> {
        writeln!(self.output, "{}", msg).context(ShellIoSnafu {})
    }

    fn prompt(&mut self, msg: &str) -> ElqResult<()> {
        write!(self.output, "{}", msg).context(ShellIoSnafu {})?;
        self.output.flush().context(ShellIoSnafu {})
    }

    /// None at the end of the input.
    fn read_line(&mut self) -> ElqResult<Option<String>> {
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf).context(ShellIoSnafu {})?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()))
    }

    fn read_voter_id(&mut self, hint: bool) -> ElqResult<Option<Option<VoterId>>> {
        if hint {
            let msg = format!("Enter your voter ID (next free ID: {}): ", self.next_voter_id);
            self.prompt(&msg)?;
        } else {
            self.prompt("Enter your voter ID: ")?;
        }
        let line = self.read_line()?;
        Ok(line.map(|l| l.trim().parse::<VoterId>().ok()))
    }

    fn show(&mut self, report: String) -> ElqResult<()> {
        write!(self.output, "\n{}", report).context(ShellIoSnafu {})
    }

    // Returns false when the user is done.
    fn step(&mut self) -> ElqResult<bool> {
        self.say(MENU)?;
        self.prompt("Enter your choice: ")?;
        let choice = match self.read_line()? {
            Some(l) => l.trim().parse::<u32>().ok(),
            None => return Ok(false),
        };
        debug!("shell: choice {:?}", choice);
        match choice {
            Some(1) => {
                self.prompt("Enter candidate name: ")?;
                let name = match self.read_line()? {
                    Some(n) => n,
                    None => return Ok(false),
                };
                match self.election.add_candidate(&name) {
                    Ok(()) => self.say(&format!("Candidate '{}' added successfully.", name))?,
                    Err(e) => self.say(&format!("{}.", e))?,
                }
            }
            Some(2) => {
                let voter_id = match self.read_voter_id(true)? {
                    Some(Some(vid)) => vid,
                    Some(None) => {
                        self.say("Invalid voter ID.")?;
                        return Ok(true);
                    }
                    None => return Ok(false),
                };
                self.prompt("Enter the candidate you want to vote for: ")?;
                let name = match self.read_line()? {
                    Some(n) => n,
                    None => return Ok(false),
                };
                match self.election.register_voter(voter_id, &name) {
                    Ok(()) => {
                        self.next_voter_id = self.next_voter_id.max(voter_id.saturating_add(1));
                        self.say(&format!(
                            "Voter with ID {} is now waiting in line for candidate '{}'.",
                            voter_id, name
                        ))?
                    }
                    Err(e) => self.say(&format!("{}.", e))?,
                }
            }
            Some(3) => {
                let voter_id = match self.read_voter_id(false)? {
                    Some(Some(vid)) => vid,
                    Some(None) => {
                        self.say("Invalid voter ID.")?;
                        return Ok(true);
                    }
                    None => return Ok(false),
                };
                let msg = match self.election.cast_vote(voter_id) {
                    Ok(c) => format!(
                        "Vote for candidate '{}' recorded by voter with ID {}.",
                        c.name, voter_id
                    ),
                    Err(ElectionError::NotYourTurn { .. }) => {
                        format!("It's not the turn for voter with ID {}.", voter_id)
                    }
                    Err(ElectionError::QueueEmpty) => {
                        "No candidates in the voting queue.".to_string()
                    }
                    Err(e) => format!("{}.", e),
                };
                self.say(&msg)?;
            }
            Some(4) => {
                let report = self.election.list_candidates();
                self.show(report)?;
            }
            Some(5) => {
                let report = self.election.list_queue();
                self.show(report)?;
            }
            Some(6) => {
                let report = self.election.list_votes();
                self.show(report)?;
            }
            Some(7) => {
                let report = self.election.rank_by_votes();
                self.show(report)?;
            }
            Some(8) => return Ok(false),
            _ => self.say("Invalid choice. Please try again.")?,
        }
        Ok(true)
    }
}

/// Runs the menu until the user exits or the input ends.
pub fn run_shell<R: BufRead, W: Write>(
    election: &mut ElectionService,
    input: R,
    output: W,
) -> ElqResult<()> {
    let mut shell = Shell {
        election,
        input,
        output,
        next_voter_id: 1,
    };
    while shell.step()? {}
    shell.say("Exiting program.")?;
    info!(
        "shell: leaving with {} votes cast, {} voters still in line",
        shell.election.total_votes(),
        shell.election.queue_len()
    );
    Ok(())
}
