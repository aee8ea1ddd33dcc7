use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::gap::percentage;
use crate::matching::normalize::normalize;
use crate::models::course::Course;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecommendation {
    #[serde(flatten)]
    pub course: Course,
    /// Course outcomes that close a queried gap, in the course's own order and casing.
    pub relevant_skills: Vec<String>,
    pub relevance_score: u32, // 0 – 100
}

/// Ranks `catalog` by how many of `missing` each course teaches.
///
/// Courses teaching none of the missing skills are dropped. Ties keep catalog order.
/// An empty `missing` list yields no recommendations.
pub fn recommend<S: AsRef<str>>(missing: &[S], catalog: &[Course]) -> Vec<CourseRecommendation> {
    let targets: HashSet<String> = missing.iter().map(|s| normalize(s.as_ref())).collect();
    if targets.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<CourseRecommendation> = catalog
        .iter()
        .filter_map(|course| {
            let relevant_skills = relevant_outcomes(course, &targets);
            if relevant_skills.is_empty() {
                return None;
            }
            Some(CourseRecommendation {
                relevance_score: percentage(relevant_skills.len(), targets.len()),
                relevant_skills,
                course: course.clone(),
            })
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    ranked
}

fn relevant_outcomes(course: &Course, targets: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    course
        .skills_outcomes
        .iter()
        .filter(|skill| {
            let key = normalize(skill);
            targets.contains(&key) && seen.insert(key)
        })
        .cloned()
        .collect()
}
