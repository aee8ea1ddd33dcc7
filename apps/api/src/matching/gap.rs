use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::matching::normalize::normalize;

/// Skill gap between a job's requirements and a candidate's skills.
///
/// `matched_skills` carries the candidate's spelling, `missing_skills` the job's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub num_matched: usize,
    pub num_missing: usize,
    pub coverage: u32, // 0 – 100
}

impl MatchResult {
    /// Distinct required skills the result was computed over.
    pub fn total_required(&self) -> usize {
        self.num_matched + self.num_missing
    }
}

/// Compares `candidate` against `required`, walking `required` in order.
///
/// Required skills that normalize to the same key count once. Coverage is 0 when
/// nothing is required.
pub fn compute_match<R, C>(required: &[R], candidate: &[C]) -> MatchResult
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    let mut candidate_index: HashMap<String, &str> = HashMap::with_capacity(candidate.len());
    for skill in candidate {
        candidate_index
            .entry(normalize(skill.as_ref()))
            .or_insert_with(|| skill.as_ref());
    }

    let mut seen = HashSet::with_capacity(required.len());
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in required {
        let key = normalize(skill.as_ref());
        if !seen.insert(key.clone()) {
            continue;
        }
        match candidate_index.get(&key) {
            Some(original) => matched_skills.push((*original).to_string()),
            None => missing_skills.push(skill.as_ref().to_string()),
        }
    }

    let num_matched = matched_skills.len();
    let num_missing = missing_skills.len();

    MatchResult {
        coverage: percentage(num_matched, num_matched + num_missing),
        matched_skills,
        missing_skills,
        num_matched,
        num_missing,
    }
}

/// `round(100 * part / whole)`, 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}
