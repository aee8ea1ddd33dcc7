use std::collections::HashSet;

/// Canonical comparison key for a skill: lower-cased, surrounding whitespace trimmed.
///
/// Only used for equality checks. Display always keeps the caller's original string.
pub fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Normalizes a skill list, dropping blanks and duplicates while keeping first-seen order.
pub fn normalize_all<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

/// Drops blank entries and trims the rest, keeping original casing.
pub fn sanitize(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .filter_map(|s| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_collapse_to_same_key() {
        assert_eq!(normalize("  React "), normalize("react"));
        assert_eq!(normalize("POWER BI"), normalize("power bi\t"));
        assert_eq!(normalize("Node.js"), "node.js");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_eq!(normalize(" Power  BI "), "power  bi");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_all_dedupes_and_drops_blanks() {
        let out = normalize_all(&["SQL", " sql", "", "Python", "  ", "PYTHON", "Excel"]);
        assert_eq!(out, vec!["sql", "python", "excel"]);
    }

    #[test]
    fn test_sanitize_keeps_casing() {
        let out = sanitize(vec![" React ".into(), "".into(), "  ".into(), "CSS".into()]);
        assert_eq!(out, vec!["React", "CSS"]);
    }
}
