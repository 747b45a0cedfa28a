//! Skill Extractor — layered heuristic extraction of canonical skill names
//! from free-text job descriptions.
//!
//! Each layer adds candidates with an integer confidence score; the final
//! filter keeps a candidate when its score reaches 2 or it appears verbatim
//! in the base vocabulary. Deliberately a heuristic, not ML-based NER.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::extract::vocab::{
    CRITICAL_SKILLS, CRITICAL_VARIANTS, ENTITY_DENYLIST, FALSE_POSITIVES, GENERIC_TERMS,
    SKILL_ALIASES, SKILL_INDICATORS, TECH_MARKERS, TECH_SKILLS,
};

/// Confidence needed to keep a candidate that is not in the base vocabulary.
const KEEP_THRESHOLD: u32 = 2;
/// Occurrence count contribution is capped here.
const MAX_OCCURRENCE_SCORE: u32 = 3;
/// Window (in bytes, clamped to char boundaries) searched for a skill
/// context indicator around each match.
const CONTEXT_RADIUS: usize = 75;

pub struct SkillExtractor {
    /// Word-boundary pattern per vocabulary term. Symbol-heavy terms whose
    /// boundary patterns cannot match are covered by the critical override.
    vocab_patterns: Vec<(&'static str, Regex)>,
    /// Dotted/suffix tech-name families: X.js, X++, XSQL, XDB, Xlang.
    tech_patterns: Vec<Regex>,
    /// Header-scoped spans likely to contain comma/bullet skill lists.
    section_patterns: Vec<Regex>,
    /// Capitalized proper-noun spans standing in for product/org entities.
    entity_pattern: Regex,
    /// Alias and plural/singular normalization, applied after filtering.
    aliases: HashMap<String, String>,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        let vocab_patterns = TECH_SKILLS
            .iter()
            .map(|&term| (term, word_boundary_pattern(term)))
            .collect();

        let tech_patterns = vec![
            re(r"\b[a-z][\w-]*\.js\b"),
            re(r"\b[a-z][\w-]*\+\+\b"),
            re(r"\b[a-z][\w-]*sql\b"),
            re(r"\b[a-z][\w-]*db\b"),
            re(r"\b[a-z][\w-]*lang\b"),
        ];

        let section_patterns = vec![
            re(r"(?s)(?:technical skills|skills & expertise|technologies|tech stack)[\s:]+(.*?)(?:\n\n|\n\w+:|$)"),
            re(r"(?:experience|expertise) (?:with|in)[\s:]+(.*?)(?:\.|$)"),
            re(r"(?:proficiency|proficient) (?:with|in)[\s:]+(.*?)(?:\.|$)"),
            re(r"(?s)(?:requirements|qualifications)[\s:]*(.*?)(?:\n\n|\n\w+:|$)"),
        ];

        // Two-plus chars after an uppercase start; spans may continue over
        // further capitalized words.
        let entity_pattern =
            Regex::new(r"\b[A-Z][A-Za-z0-9+#.-]+(?:[ \t][A-Z][A-Za-z0-9+#.-]+)*")
                .expect("hardcoded pattern is valid");

        Self {
            vocab_patterns,
            tech_patterns,
            section_patterns,
            entity_pattern,
            aliases: build_alias_map(),
        }
    }

    /// Extracts a deduplicated list of canonical skill names. The internal
    /// confidence ordering drives selection only; output order carries no
    /// semantic meaning.
    pub fn extract(&self, description: &str) -> Vec<String> {
        if description.trim().is_empty() {
            return Vec::new();
        }

        let text = description.to_lowercase();
        let mut confidence: HashMap<String, u32> = HashMap::new();

        self.match_vocabulary(&text, &mut confidence);
        self.match_entities(description, &mut confidence);
        self.match_tech_patterns(&text, &mut confidence);
        self.match_skill_sections(&text, &mut confidence);
        self.match_critical_skills(&text, &mut confidence);

        self.select(confidence)
    }

    /// Layer 1: vocabulary terms with word boundaries. Score is occurrence
    /// count (capped) plus a context bonus when any occurrence sits near a
    /// skill indicator phrase.
    fn match_vocabulary(&self, text: &str, confidence: &mut HashMap<String, u32>) {
        for (term, pattern) in &self.vocab_patterns {
            let matches: Vec<_> = pattern.find_iter(text).collect();
            if matches.is_empty() {
                continue;
            }

            let mut score = (matches.len() as u32).min(MAX_OCCURRENCE_SCORE);
            for m in &matches {
                if has_skill_context(text, m.start(), m.end()) {
                    score += 2;
                    break;
                }
            }

            let entry = confidence.entry(term.to_string()).or_insert(0);
            if score > *entry {
                *entry = score;
            }
        }
    }

    /// Layer 2: capitalized proper-noun spans in the original text, standing
    /// in for product/organization entity tags. Low base confidence; these
    /// only survive the filter with a context bonus.
    fn match_entities(&self, original: &str, confidence: &mut HashMap<String, u32>) {
        for m in self.entity_pattern.find_iter(original) {
            if m.as_str().len() <= 2 {
                continue;
            }
            let candidate = m.as_str().to_lowercase();
            if ENTITY_DENYLIST.contains(&candidate.as_str())
                || confidence.contains_key(&candidate)
                || GENERIC_TERMS.iter().any(|g| candidate.contains(g))
            {
                continue;
            }

            let mut score = 1;
            let window = context_window(original, m.start(), m.end()).to_lowercase();
            if SKILL_INDICATORS.iter().any(|ind| window.contains(ind)) {
                score += 2;
            }
            confidence.insert(candidate, score);
        }
    }

    /// Layer 3: dotted/suffix tech-name pattern families.
    fn match_tech_patterns(&self, text: &str, confidence: &mut HashMap<String, u32>) {
        for pattern in &self.tech_patterns {
            for m in pattern.find_iter(text) {
                let name = m.as_str().to_string();
                confidence.entry(name).or_insert(2);
            }
        }
    }

    /// Layer 4: short phrases from skill-list sections. Kept when they are
    /// 2-3 words, not a bare generic term, and carry a technical marker.
    fn match_skill_sections(&self, text: &str, confidence: &mut HashMap<String, u32>) {
        let splitter = re(r"[,\n•;|]|-");
        for pattern in &self.section_patterns {
            for caps in pattern.captures_iter(text) {
                let Some(section) = caps.get(1) else { continue };
                for phrase in splitter.split(section.as_str()) {
                    let phrase = phrase.trim();
                    let words = phrase.split_whitespace().count();
                    if !(2..=3).contains(&words) {
                        continue;
                    }
                    if GENERIC_TERMS.contains(&phrase) {
                        continue;
                    }
                    if TECH_MARKERS.iter().any(|marker| phrase.contains(marker)) {
                        confidence.entry(phrase.to_string()).or_insert(2);
                    }
                }
            }
        }
    }

    /// Layer 5: plain-substring override for high-value skills and their
    /// spelling variants. Compensates for boundary-pattern failures on
    /// symbol-heavy names like c++ and c#.
    fn match_critical_skills(&self, text: &str, confidence: &mut HashMap<String, u32>) {
        for &skill in CRITICAL_SKILLS {
            if text.contains(skill) {
                let entry = confidence.entry(skill.to_string()).or_insert(0);
                if *entry < 3 {
                    *entry = 3;
                }
            }
        }
        for (canonical, variants) in CRITICAL_VARIANTS {
            if variants.iter().any(|v| text.contains(v)) {
                let entry = confidence.entry(canonical.to_string()).or_insert(0);
                if *entry < 3 {
                    *entry = 3;
                }
            }
        }
    }

    /// Layers 6-7: confidence filter, alias normalization, generic and
    /// false-positive removal, dedup after mapping.
    fn select(&self, confidence: HashMap<String, u32>) -> Vec<String> {
        let mut candidates: Vec<(String, u32)> = confidence.into_iter().collect();
        // Confidence descending; name ascending keeps runs deterministic.
        candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut cleaned: Vec<String> = Vec::new();
        for (skill, score) in candidates {
            if score < KEEP_THRESHOLD && !TECH_SKILLS.contains(&skill.as_str()) {
                continue;
            }

            let mapped = self
                .aliases
                .get(&skill)
                .cloned()
                .unwrap_or(skill);

            if mapped.len() <= 1
                || GENERIC_TERMS.contains(&mapped.as_str())
                || FALSE_POSITIVES.contains(&mapped.as_str())
            {
                continue;
            }
            if !cleaned.contains(&mapped) {
                cleaned.push(mapped);
            }
        }
        cleaned
    }
}

/// Case-insensitive word-boundary pattern for one vocabulary term.
fn word_boundary_pattern(term: &str) -> Regex {
    let pattern = format!(r"\b{}\b", regex::escape(term));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped term pattern is valid")
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hardcoded pattern is valid")
}

/// Abbreviations/variants plus plural-singular collapse for vocabulary terms
/// where both forms exist.
fn build_alias_map() -> HashMap<String, String> {
    let mut map: HashMap<String, String> = SKILL_ALIASES
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

    for &skill in TECH_SKILLS {
        if let Some(singular) = skill.strip_suffix('s') {
            if TECH_SKILLS.contains(&singular) {
                map.entry(skill.to_string())
                    .or_insert_with(|| singular.to_string());
            }
        } else {
            map.entry(format!("{skill}s"))
                .or_insert_with(|| skill.to_string());
        }
    }
    map
}

/// Returns true when a skill indicator phrase appears within the context
/// window around a match.
fn has_skill_context(text: &str, start: usize, end: usize) -> bool {
    let window = context_window(text, start, end);
    SKILL_INDICATORS.iter().any(|ind| window.contains(ind))
}

/// Clamped, char-boundary-safe slice of ±CONTEXT_RADIUS bytes around a span.
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let mut s = start.saturating_sub(CONTEXT_RADIUS);
    while s > 0 && !text.is_char_boundary(s) {
        s -= 1;
    }
    let mut e = (end + CONTEXT_RADIUS).min(text.len());
    while e < text.len() && !text.is_char_boundary(e) {
        e += 1;
    }
    &text[s..e]
}
