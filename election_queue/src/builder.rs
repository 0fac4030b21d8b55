pub use crate::config::*;
use crate::ElectionService;

/// A builder for preparing an election before the first voter shows up.
///
/// ```
/// pub use election_queue::builder::Builder;
/// pub use election_queue::ElectionRules;
/// # use election_queue::ElectionError;
///
/// let mut builder = Builder::new(&ElectionRules::DEFAULT_RULES)?
///     .candidates(&["Anna".to_string(), "Bob".to_string()])?;
///
/// builder.add_candidate("Clara")?;
/// let election = builder.build()?;
///
/// assert_eq!(election.num_candidates(), 3);
///
/// # Ok::<(), ElectionError>(())
/// ```
pub struct Builder {
    pub(crate) _rules: ElectionRules,
    pub(crate) _candidates: Vec<String>,
}

impl Builder {
    pub fn new(rules: &ElectionRules) -> Result<Builder, ElectionError> {
        Ok(Builder {
            _rules: rules.clone(),
            _candidates: Vec::new(),
        })
    }

    /// Replaces the list of candidates.
    pub fn candidates(self, cands: &[String]) -> Result<Builder, ElectionError> {
        Ok(Builder {
            _rules: self._rules,
            _candidates: cands.to_vec(),
        })
    }

    /// Adds one more candidate to the roster.
    pub fn add_candidate(&mut self, name: &str) -> Result<(), ElectionError> {
        if name.is_empty() {
            return Err(ElectionError::EmptyCandidateName);
        }
        self._candidates.push(name.to_string());
        Ok(())
    }

    /// Creates the election, with all the candidates and no voters.
    ///
    /// The candidates are added in roster order, so that the duplicate rules
    /// apply as if they had been added one by one.
    pub fn build(self) -> Result<ElectionService, ElectionError> {
        let mut election = ElectionService::new(&self._rules);
        for name in self._candidates.iter() {
            election.add_candidate(name)?;
        }
        Ok(election)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_with_duplicates() {
        let names = vec!["Anna".to_string(), "Bob".to_string(), "Anna".to_string()];
        let election = Builder::new(&ElectionRules::DEFAULT_RULES)
            .unwrap()
            .candidates(&names)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(election.num_candidates(), 2);

        let strict = ElectionRules {
            duplicate_candidate_mode: DuplicateCandidateMode::Reject,
        };
        let res = Builder::new(&strict)
            .unwrap()
            .candidates(&names)
            .unwrap()
            .build();
        assert_eq!(
            res.err(),
            Some(ElectionError::DuplicateCandidateName {
                name: "Anna".to_string()
            })
        );
    }

    #[test]
    fn empty_name_in_roster() {
        let mut builder = Builder::new(&ElectionRules::DEFAULT_RULES).unwrap();
        assert_eq!(
            builder.add_candidate(""),
            Err(ElectionError::EmptyCandidateName)
        );
        let res = builder
            .candidates(&["".to_string()])
            .and_then(|b| b.build());
        assert_eq!(res.err(), Some(ElectionError::EmptyCandidateName));
    }
}
