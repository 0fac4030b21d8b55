use log::{debug, info, warn};

use election_queue::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::io::{self, BufRead, Write};

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::elq::config_reader::*;

pub mod config_reader;
pub mod roster;
pub mod shell;

#[derive(Debug, Snafu)]
pub enum ElqError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Worksheet {worksheet} not found in {path}"))]
    EmptyExcel { path: String, worksheet: String },
    #[snafu(display("Row {row} of the roster: expected a candidate name, found {cell}"))]
    RosterCell { row: usize, cell: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson { source: std::io::Error, path: String },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing the summary to {path}"))]
    WritingSummary { source: std::io::Error, path: String },
    #[snafu(display("Error in the terminal session"))]
    ShellIo { source: std::io::Error },
    #[snafu(display("Could not set up the election: {source}"))]
    Setup { source: ElectionError },
    #[snafu(display("Command #{index} was refused: {source}"))]
    Refused { source: ElectionError, index: usize },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ElqResult<T> = Result<T, ElqError>;

/// A command of the session that the election refused.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Rejection {
    pub index: usize,
    pub error: ElectionError,
}

fn validate_settings(
    settings: &ElectionSettings,
    reject_duplicates: bool,
) -> ElqResult<ElectionRules> {
    let duplicate_candidate_mode = match settings.duplicate_candidates.as_deref() {
        _ if reject_duplicates => DuplicateCandidateMode::Reject,
        None | Some("ignore") => DuplicateCandidateMode::Ignore,
        Some("reject") => DuplicateCandidateMode::Reject,
        Some(x) => {
            whatever!(
                "Cannot use duplicateCandidates mode {:?}: expected \"ignore\" or \"reject\"",
                x
            )
        }
    };
    Ok(ElectionRules {
        duplicate_candidate_mode,
    })
}

fn apply_command(
    election: &mut ElectionService,
    cmd: &SessionCommand,
) -> Result<(), ElectionError> {
    match cmd {
        SessionCommand::AddCandidate { name } => election.add_candidate(name),
        SessionCommand::RegisterVoter {
            voter_id,
            candidate,
        } => election.register_voter(*voter_id, candidate),
        SessionCommand::CastVote { voter_id } => election.cast_vote(*voter_id).map(|_| ()),
    }
}

/// Replays the commands in order.
///
/// Refused commands are collected, or stop the session if `stop_on_error` is set.
pub fn run_session(
    election: &mut ElectionService,
    commands: &[SessionCommand],
    stop_on_error: bool,
) -> ElqResult<Vec<Rejection>> {
    let mut rejected: Vec<Rejection> = Vec::new();
    for (index, cmd) in commands.iter().enumerate() {
        match apply_command(election, cmd) {
            Ok(()) => debug!("run_session: command #{} applied: {:?}", index, cmd),
            Err(error) if stop_on_error => {
                return Err(ElqError::Refused { source: error, index });
            }
            Err(error) => {
                warn!("run_session: command #{} {:?} refused: {}", index, cmd, error);
                rejected.push(Rejection { index, error });
            }
        }
    }
    Ok(rejected)
}

fn candidates_to_json(cs: &[Candidate]) -> Vec<JSValue> {
    cs.iter()
        .map(|c| json!({"name": c.name, "votes": c.votes}))
        .collect()
}

fn build_summary_js(
    settings: &ElectionSettings,
    election: &ElectionService,
    rejected: &[Rejection],
) -> JSValue {
    let summary = election.summary();
    let duplicates = match election.rules().duplicate_candidate_mode {
        DuplicateCandidateMode::Ignore => "ignore",
        DuplicateCandidateMode::Reject => "reject",
    };
    let queue: Vec<JSValue> = summary
        .queue
        .iter()
        .map(|e| json!({"voterId": e.voter_id, "candidate": e.candidate}))
        .collect();
    let votes: Vec<JSValue> = summary
        .votes
        .iter()
        .map(|e| json!({"voterId": e.voter_id, "candidate": e.candidate}))
        .collect();
    let rejected_js: Vec<JSValue> = rejected
        .iter()
        .map(|r| json!({"command": r.index, "error": r.error.to_string()}))
        .collect();
    json!({
        "config": {
            "election": settings.election_name,
            "duplicateCandidates": duplicates,
        },
        "results": {
            "candidates": candidates_to_json(&summary.candidates),
            "ranking": candidates_to_json(&summary.ranking),
            "queue": queue,
            "votes": votes,
            "rejected": rejected_js,
        }
    })
}

fn text_reports(election: &ElectionService) -> String {
    [
        election.list_candidates(),
        election.list_queue(),
        election.list_votes(),
        election.rank_by_votes(),
    ]
    .join("\n")
}

fn write_summary(out: &str, pretty_js: &str) -> ElqResult<()> {
    if out == "stdout" {
        println!("{}", pretty_js);
        return Ok(());
    }
    info!("Writing summary to {:?}", out);
    fs::write(out, pretty_js).context(WritingSummarySnafu { path: out })
}

fn check_reference(reference_path: &str, pretty_js_stats: &str) -> ElqResult<()> {
    let summary_ref = read_summary(reference_path)?;
    info!("reference summary: {:?}", summary_ref);
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats, "\n");
        whatever!("Difference detected between calculated summary and reference summary")
    }
    Ok(())
}

fn initial_candidates(args: &Args, session: Option<&SessionConfig>) -> ElqResult<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    if let Some(path) = args.roster.as_deref() {
        let mut from_roster =
            roster::read_roster(path, args.worksheet.as_deref(), args.roster_skip_rows)?;
        info!("Read {} candidates from roster {:?}", from_roster.len(), path);
        names.append(&mut from_roster);
    }
    if let Some(s) = session {
        names.extend(s.candidates.iter().map(|c| c.name.clone()));
    }
    Ok(names)
}

fn setup_election(rules: &ElectionRules, names: &[String]) -> ElqResult<ElectionService> {
    builder::Builder::new(rules)
        .and_then(|b| b.candidates(names))
        .and_then(|b| b.build())
        .context(SetupSnafu {})
}

/// Runs a session file (or the interactive menu when no session file is given).
pub fn run_election(args: &Args) -> ElqResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_election_io(args, stdin.lock(), stdout.lock())
}

fn run_election_io<R: BufRead, W: Write>(args: &Args, input: R, mut output: W) -> ElqResult<()> {
    let session = match args.config.as_deref() {
        Some(path) => Some(read_session(path)?),
        None => None,
    };
    let settings = session
        .as_ref()
        .map(|s| s.election_settings.clone())
        .unwrap_or_default();
    info!("settings: {:?}", settings);
    let rules = validate_settings(&settings, args.reject_duplicates)?;

    let names = initial_candidates(args, session.as_ref())?;
    let mut election = setup_election(&rules, &names)?;

    let rejected = match session.as_ref() {
        Some(s) => {
            let stop_on_error = args.strict || settings.stop_on_error.unwrap_or(false);
            let rejected = run_session(&mut election, &s.commands, stop_on_error)?;
            info!(
                "Session done: {} commands, {} refused, {} votes cast",
                s.commands.len(),
                rejected.len(),
                election.total_votes()
            );
            rejected
        }
        None => {
            shell::run_shell(&mut election, input, &mut output)?;
            Vec::new()
        }
    };

    let result_js = build_summary_js(&settings, &election, &rejected);
    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(ParsingJsonSnafu {})?;

    match args.out.as_deref() {
        Some(out) => write_summary(out, &pretty_js_stats)?,
        // The menu already showed the reports it was asked for.
        None if session.is_none() => {}
        None => output
            .write_all(text_reports(&election).as_bytes())
            .context(ShellIoSnafu {})?,
    }

    // The reference summary, if provided for comparison
    if let Some(reference) = args.reference.as_deref() {
        check_reference(reference, &pretty_js_stats)?;
    }

    Ok(())
}
