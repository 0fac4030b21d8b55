use crate::elq::*;

use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElectionSettings {
    #[serde(rename = "electionName")]
    pub election_name: Option<String>,
    #[serde(rename = "duplicateCandidates")]
    pub duplicate_candidates: Option<String>,
    #[serde(rename = "stopOnError")]
    pub stop_on_error: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SessionCandidate {
    pub name: String,
}

/// One step of a recorded session.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum SessionCommand {
    #[serde(rename = "addCandidate")]
    AddCandidate { name: String },
    #[serde(rename = "registerVoter")]
    RegisterVoter {
        #[serde(rename = "voterId")]
        voter_id: VoterId,
        candidate: String,
    },
    #[serde(rename = "castVote")]
    CastVote {
        #[serde(rename = "voterId")]
        voter_id: VoterId,
    },
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(rename = "electionSettings", default)]
    pub election_settings: ElectionSettings,
    #[serde(default)]
    pub candidates: Vec<SessionCandidate>,
    #[serde(default)]
    pub commands: Vec<SessionCommand>,
}

pub fn parse_session(contents: &str) -> ElqResult<SessionConfig> {
    serde_json::from_str(contents).context(ParsingJsonSnafu {})
}

pub fn read_session(path: &str) -> ElqResult<SessionConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read content: {:?}", contents);
    let config = parse_session(&contents)?;
    info!(
        "session {:?}: {} candidates, {} commands",
        path,
        config.candidates.len(),
        config.commands.len()
    );
    Ok(config)
}

pub fn read_summary(path: &str) -> ElqResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read content: {:?}", contents);
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
