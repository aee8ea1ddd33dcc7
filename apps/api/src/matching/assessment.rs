use serde::{Deserialize, Serialize};

use crate::matching::gap::MatchResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl MatchLevel {
    pub fn from_coverage(coverage: u32) -> Self {
        match coverage {
            80.. => MatchLevel::Excellent,
            60..=79 => MatchLevel::Good,
            40..=59 => MatchLevel::Fair,
            _ => MatchLevel::NeedsImprovement,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub level: MatchLevel,
    pub summary: String,
}

/// Classifies a match and names the first few gaps worth closing.
pub fn assess(result: &MatchResult) -> Assessment {
    let level = MatchLevel::from_coverage(result.coverage);
    Assessment {
        level,
        summary: build_summary(level, result),
    }
}

fn build_summary(level: MatchLevel, result: &MatchResult) -> String {
    if result.total_required() == 0 {
        return "This job lists no required skills to compare against.".to_string();
    }
    if result.missing_skills.is_empty() {
        return "Fully qualified. You already have every skill this job requires.".to_string();
    }

    let top_gaps = result
        .missing_skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let coverage = result.coverage;

    match level {
        MatchLevel::Excellent => {
            format!("Excellent fit ({coverage}%). Only a few skills left to add: {top_gaps}.")
        }
        MatchLevel::Good => {
            format!("Good fit ({coverage}%). A solid base; consider adding: {top_gaps}.")
        }
        MatchLevel::Fair => {
            format!("Fair fit ({coverage}%). Some key skills are there; still missing: {top_gaps}.")
        }
        MatchLevel::NeedsImprovement => format!(
            "Low fit ({coverage}%). Significant gaps: {top_gaps}. The recommended courses target them."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::gap::compute_match;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(MatchLevel::from_coverage(100), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_coverage(80), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_coverage(79), MatchLevel::Good);
        assert_eq!(MatchLevel::from_coverage(60), MatchLevel::Good);
        assert_eq!(MatchLevel::from_coverage(59), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_coverage(40), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_coverage(39), MatchLevel::NeedsImprovement);
        assert_eq!(MatchLevel::from_coverage(0), MatchLevel::NeedsImprovement);
    }

    #[test]
    fn test_fully_qualified_summary() {
        let result = compute_match(&["SQL"], &["sql"]);
        let assessment = assess(&result);
        assert_eq!(assessment.level, MatchLevel::Excellent);
        assert!(assessment.summary.starts_with("Fully qualified"));
    }

    #[test]
    fn test_low_fit_lists_at_most_three_gaps() {
        let result = compute_match(&["A", "B", "C", "D", "E"], &["x"]);
        let assessment = assess(&result);
        assert_eq!(assessment.level, MatchLevel::NeedsImprovement);
        assert!(assessment.summary.contains("A, B, C"));
        assert!(!assessment.summary.contains(", D"));
    }

    #[test]
    fn test_fair_fit_mentions_coverage() {
        let result = compute_match(&["React", "TypeScript", "CSS", "Node.js"], &["react", "CSS"]);
        let assessment = assess(&result);
        assert_eq!(assessment.level, MatchLevel::Fair);
        assert!(assessment.summary.contains("50%"));
        assert!(assessment.summary.contains("TypeScript"));
    }

    #[test]
    fn test_nothing_required() {
        let result = compute_match::<&str, _>(&[], &["Python"]);
        let assessment = assess(&result);
        assert_eq!(assessment.level, MatchLevel::NeedsImprovement);
        assert!(assessment.summary.contains("no required skills"));
    }
}
