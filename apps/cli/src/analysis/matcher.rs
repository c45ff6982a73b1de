//! Skill Matcher — decides which required skills a user already covers.
//!
//! Equivalence rule: two skills match when, after lowercasing, one's text is
//! a substring of the other's. Symmetric, no tokenization, no edit distance.
//! The rule is deliberately crude and fixed policy — do not replace it with
//! stemming or a synonym table.

/// Returns true iff some user skill matches `required` under case-insensitive
/// symmetric substring containment. "Data Analysis" is satisfied by
/// "analysis" and by "advanced data analysis skills".
pub fn is_satisfied(required: &str, user_skills: &[String]) -> bool {
    let required = required.to_lowercase();
    user_skills.iter().any(|user_skill| {
        let user_skill = user_skill.to_lowercase();
        user_skill.contains(&required) || required.contains(&user_skill)
    })
}

/// Required skills the user already covers, in requiredSkills order.
pub fn matched_skills<'a>(required_skills: &'a [String], user_skills: &[String]) -> Vec<&'a str> {
    required_skills
        .iter()
        .filter(|skill| is_satisfied(skill, user_skills))
        .map(String::as_str)
        .collect()
}

/// Required skills with no matching user skill, in requiredSkills order.
/// Together with `matched_skills` this partitions the required list exactly.
pub fn missing_skills<'a>(required_skills: &'a [String], user_skills: &[String]) -> Vec<&'a str> {
    required_skills
        .iter()
        .filter(|skill| !is_satisfied(skill, user_skills))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_satisfies() {
        assert!(is_satisfied("Python", &skills(&["Python"])));
    }

    #[test]
    fn test_user_skill_containing_required_satisfies() {
        assert!(is_satisfied(
            "Python",
            &skills(&["experienced python developer"])
        ));
    }

    #[test]
    fn test_required_containing_user_skill_satisfies() {
        // Symmetric direction: "analysis" ⊆ "Data Analysis"
        assert!(is_satisfied("Data Analysis", &skills(&["analysis"])));
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        assert!(is_satisfied("REACT", &skills(&["react.js"])));
        assert!(is_satisfied("react.js", &skills(&["REACT.JS"])));
    }

    #[test]
    fn test_unrelated_skill_does_not_satisfy() {
        assert!(!is_satisfied("Kubernetes", &skills(&["Python", "SQL"])));
    }

    #[test]
    fn test_empty_user_skills_satisfies_nothing() {
        assert!(!is_satisfied("Python", &[]));
    }

    #[test]
    fn test_matched_skills_preserves_required_order() {
        let required = skills(&["SQL", "Python", "Docker", "Go"]);
        let user = skills(&["golang is fun", "python", "sql server admin"]);
        let matched = matched_skills(&required, &user);
        assert_eq!(matched, vec!["SQL", "Python", "Go"]);
    }

    #[test]
    fn test_matched_and_missing_partition_required_exactly() {
        let required = skills(&["SQL", "Python", "Docker", "Go"]);
        let user = skills(&["python"]);
        let matched = matched_skills(&required, &user);
        let missing = missing_skills(&required, &user);

        assert_eq!(matched.len() + missing.len(), required.len());

        // Every required skill lands in exactly one side of the partition.
        for skill in &required {
            let in_matched = matched.contains(&skill.as_str());
            let in_missing = missing.contains(&skill.as_str());
            assert!(in_matched != in_missing, "{skill} must be in exactly one");
        }

        // Merging the two sides in required order reconstructs the list.
        let mut merged: Vec<&str> = Vec::new();
        let (mut m, mut g) = (matched.iter(), missing.iter());
        let (mut next_m, mut next_g) = (m.next(), g.next());
        for skill in &required {
            if next_m == Some(&skill.as_str()) {
                merged.push(skill);
                next_m = m.next();
            } else if next_g == Some(&skill.as_str()) {
                merged.push(skill);
                next_g = g.next();
            }
        }
        let expected: Vec<&str> = required.iter().map(String::as_str).collect();
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_missing_skills_preserves_required_order() {
        let required = skills(&["A", "B", "C"]);
        let user = skills(&["b"]);
        assert_eq!(missing_skills(&required, &user), vec!["A", "C"]);
    }
}
