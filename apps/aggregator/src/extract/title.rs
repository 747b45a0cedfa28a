//! Title Standardizer — maps raw free-text job titles onto a small set of
//! canonical role names so aggregation keys stay meaningful.
//!
//! Rules are evaluated in fixed priority order and the first family match
//! wins. Collapsing aggressively is the point: a low role cardinality is what
//! makes per-role statistics worth computing.

use regex::Regex;

use crate::extract::vocab::{DEPARTMENT_WHITELIST, TITLE_STOPWORDS};

pub const UNKNOWN_ROLE: &str = "Unknown Role";

pub struct TitleStandardizer {
    re_job_id: Regex,
    re_year_prefix: Regex,
    re_usa: Regex,
    re_remote_dash: Regex,
    re_remote_paren: Regex,
    re_remote_word: Regex,
    re_level_iii: Regex,
    re_level_ii: Regex,
    re_sr: Regex,
    re_jr: Regex,
    re_paren: Regex,
}

impl Default for TitleStandardizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleStandardizer {
    pub fn new() -> Self {
        Self {
            re_job_id: re(r"^#\d+\s*-\s*"),
            re_year_prefix: re(r"^\d{4}\s+"),
            re_usa: re(r"\(usa\)\s*"),
            re_remote_dash: re(r"\s*-\s*.*remote.*"),
            re_remote_paren: re(r"\s*\(.*remote.*\)"),
            re_remote_word: re(r"\s*\bremote\b\s*"),
            re_level_iii: re(r"\biii\b"),
            re_level_ii: re(r"\bii\b"),
            re_sr: re(r"\bsr\b"),
            re_jr: re(r"\bjr\b"),
            re_paren: re(r"\s*\(([^)]*)\)"),
        }
    }

    /// Standardizes a raw job title. Total: always returns a non-empty
    /// string, with [`UNKNOWN_ROLE`] as the sentinel for blank input.
    pub fn standardize(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return UNKNOWN_ROLE.to_string();
        }

        let mut title = raw.to_lowercase();

        // Scrape artifacts: job ids, year prefixes, country markers.
        title = self.re_job_id.replace(&title, "").into_owned();
        title = self.re_year_prefix.replace(&title, "").into_owned();
        title = self.re_usa.replace_all(&title, "").into_owned();

        // Remote/location qualifiers.
        title = self.re_remote_dash.replace_all(&title, "").into_owned();
        title = self.re_remote_paren.replace_all(&title, "").into_owned();
        title = self.re_remote_word.replace_all(&title, " ").into_owned();

        // Spelling variants.
        title = title
            .replace("front-end", "frontend")
            .replace("front end", "frontend")
            .replace("back-end", "backend")
            .replace("back end", "backend")
            .replace("full-stack", "full stack")
            .replace("fullstack", "full stack");

        // Role-family rules, first match wins.
        if title.contains("software engineer") {
            title = self.fold_seniority(&title, "software engineer");
        } else if title.contains("data scientist") {
            title = self.fold_seniority(&title, "data scientist");
        } else if title.contains("data engineer") {
            title = self.fold_seniority(&title, "data engineer");
        } else if title.contains("web developer") {
            title = self.fold_web_developer(&title);
        } else if title.contains("machine learning") {
            title = self.fold_machine_learning(&title);
        }

        // Truncate at the first comma.
        if let Some(idx) = title.find(',') {
            title.truncate(idx);
        }

        // Strip parentheticals unless they name a whitelisted department.
        if let Some(caps) = self.re_paren.captures(&title) {
            let dept = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            if !DEPARTMENT_WHITELIST.contains(&dept) {
                title = self.re_paren.replace_all(&title, "").into_owned();
            }
        }

        let cased = title_case(&title);
        if cased.is_empty() {
            UNKNOWN_ROLE.to_string()
        } else {
            cased
        }
    }

    /// Seniority folding shared by the engineer/scientist families.
    /// Roman numerals take priority; the unmarked "I" level collapses into
    /// the bare family name.
    fn fold_seniority(&self, title: &str, family: &str) -> String {
        if self.re_level_iii.is_match(title) {
            format!("{family} iii")
        } else if self.re_level_ii.is_match(title) {
            format!("{family} ii")
        } else if title.contains("senior") || self.re_sr.is_match(title) {
            format!("senior {family}")
        } else if title.contains("junior") || self.re_jr.is_match(title) {
            format!("junior {family}")
        } else if title.contains("staff") || title.contains("principal") {
            format!("staff {family}")
        } else if title.contains("associate") {
            format!("associate {family}")
        } else {
            family.to_string()
        }
    }

    fn fold_web_developer(&self, title: &str) -> String {
        if title.contains("frontend") || title.contains("front") {
            "frontend web developer".to_string()
        } else if title.contains("backend") || title.contains("back") {
            "backend web developer".to_string()
        } else if title.contains("full stack") {
            "full stack web developer".to_string()
        } else if title.contains("senior") || self.re_sr.is_match(title) {
            "senior web developer".to_string()
        } else if title.contains("junior") || self.re_jr.is_match(title) {
            "junior web developer".to_string()
        } else {
            "web developer".to_string()
        }
    }

    fn fold_machine_learning(&self, title: &str) -> String {
        if title.contains("senior") || self.re_sr.is_match(title) {
            "senior machine learning engineer".to_string()
        } else if title.contains("junior") || self.re_jr.is_match(title) {
            "junior machine learning engineer".to_string()
        } else if title.contains("scientist") {
            "machine learning scientist".to_string()
        } else {
            "machine learning engineer".to_string()
        }
    }
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hardcoded pattern is valid")
}

/// Capitalizes each word except the stopword list. Matches the scrape
/// cleanup convention: first character uppercased, rest lowercased.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            if TITLE_STOPWORDS.contains(&word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn std(raw: &str) -> String {
        TitleStandardizer::new().standardize(raw)
    }

    #[test]
    fn test_blank_title_is_unknown_role() {
        assert_eq!(std(""), UNKNOWN_ROLE);
        assert_eq!(std("   "), UNKNOWN_ROLE);
    }

    #[test]
    fn test_senior_software_engineer_any_case() {
        assert_eq!(std("Senior Software Engineer"), "Senior Software Engineer");
        assert_eq!(std("SENIOR SOFTWARE ENGINEER"), "Senior Software Engineer");
        assert_eq!(std("senior   software engineer"), "Senior Software Engineer");
    }

    #[test]
    fn test_sr_abbreviation_folds_to_senior() {
        assert_eq!(std("Sr. Software Engineer"), "Senior Software Engineer");
        assert_eq!(std("Sr Data Scientist"), "Senior Data Scientist");
    }

    #[test]
    fn test_roman_numeral_beats_seniority_prefix() {
        // Level II wins even when a seniority marker is present.
        assert_eq!(std("Sr. Software Engineer II"), "Software Engineer Ii");
    }

    #[test]
    fn test_level_iii_not_swallowed_by_ii() {
        assert_eq!(std("Software Engineer III"), "Software Engineer Iii");
        assert_eq!(std("Software Engineer II"), "Software Engineer Ii");
    }

    #[test]
    fn test_level_i_collapses_to_bare_family() {
        assert_eq!(std("Software Engineer I"), "Software Engineer");
    }

    #[test]
    fn test_staff_and_principal_fold_together() {
        assert_eq!(std("Staff Software Engineer"), "Staff Software Engineer");
        assert_eq!(std("Principal Software Engineer"), "Staff Software Engineer");
    }

    #[test]
    fn test_remote_qualifiers_stripped() {
        assert_eq!(std("Data Scientist - Remote"), "Data Scientist");
        assert_eq!(std("Data Scientist (Remote)"), "Data Scientist");
        assert_eq!(std("Remote Data Scientist"), "Data Scientist");
    }

    #[test]
    fn test_spelling_variants_normalized() {
        assert_eq!(std("Front-End Web Developer"), "Frontend Web Developer");
        assert_eq!(std("Back end Web Developer"), "Backend Web Developer");
        assert_eq!(std("Fullstack Web Developer"), "Full Stack Web Developer");
    }

    #[test]
    fn test_machine_learning_family() {
        assert_eq!(std("Machine Learning Engineer"), "Machine Learning Engineer");
        assert_eq!(std("Machine Learning Scientist"), "Machine Learning Scientist");
        assert_eq!(
            std("Senior Machine Learning Engineer"),
            "Senior Machine Learning Engineer"
        );
    }

    #[test]
    fn test_fallback_truncates_at_comma() {
        assert_eq!(std("Product Designer, Growth Team"), "Product Designer");
    }

    #[test]
    fn test_fallback_strips_unlisted_parenthetical() {
        assert_eq!(std("Product Designer (Contract)"), "Product Designer");
    }

    #[test]
    fn test_whitelisted_department_kept() {
        assert_eq!(std("Avionics Engineer (Starlink)"), "Avionics Engineer (starlink)");
    }

    #[test]
    fn test_fallback_stopwords_stay_lowercase() {
        assert_eq!(std("design and research lead"), "Design and Research Lead");
    }

    #[test]
    fn test_job_id_prefix_stripped() {
        assert_eq!(std("#12345 - Software Engineer"), "Software Engineer");
    }

    #[test]
    fn test_year_prefix_stripped() {
        assert_eq!(std("2025 Software Engineer"), "Software Engineer");
    }

    #[test]
    fn test_first_family_match_wins() {
        // Contains both "software engineer" and "machine learning"; priority
        // order keeps it in the software engineer family.
        assert_eq!(
            std("Software Engineer, Machine Learning"),
            "Software Engineer"
        );
    }
}
