// src/name.rs
//
// Candidate-name extraction. When a person-entity recognizer is available
// its candidates are filtered against a role-word blacklist and a position
// test; without one, the first line of the resume usually carries the name
// and a capitalized-run match is good enough.

use regex::Regex;

pub trait PersonRecognizer {
    fn persons(&self, text: &str) -> anyhow::Result<Vec<String>>;
}

// Entity fragments containing these are section headers or job titles that
// recognizers regularly mislabel as people.
const NAME_BLACKLIST: [&str; 5] = ["ENGINEER", "DEVELOPER", "PROJECT", "MANAGER", "SUMMARY"];

// Leading run of capitalized words on the first non-empty line.
pub fn first_line_name(text: &str) -> Option<String> {
    let first_line = text.lines().find(|line| !line.trim().is_empty())?.trim();
    let re = Regex::new(r"^[A-Z][a-z]+(?: [A-Z][a-z]+)*").ok()?;
    re.find(first_line).map(|m| m.as_str().to_string())
}

// Picks a name out of recognizer candidates: drop blacklisted entries, keep
// 1-3 word candidates, prefer the first one appearing verbatim in the top
// five lines, otherwise the first survivor. No survivors means no name.
pub fn pick_person(candidates: &[String], text: &str) -> Option<String> {
    let top_lines: Vec<&str> = text.lines().take(5).collect();

    let survivors: Vec<&String> = candidates
        .iter()
        .filter(|candidate| {
            let upper = candidate.to_uppercase();
            !NAME_BLACKLIST.iter().any(|word| upper.contains(word))
        })
        .filter(|candidate| {
            let words = candidate.split_whitespace().count();
            (1..=3).contains(&words)
        })
        .collect();

    for candidate in &survivors {
        if top_lines.iter().any(|line| line.contains(candidate.as_str())) {
            return Some((*candidate).clone());
        }
    }
    survivors.first().map(|candidate| (*candidate).clone())
}

#[cfg(feature = "ner")]
pub use bert::BertPersonRecognizer;

#[cfg(feature = "ner")]
mod bert {
    use super::PersonRecognizer;
    use rust_bert::pipelines::ner::NERModel;

    pub struct BertPersonRecognizer {
        model: NERModel,
    }

    impl BertPersonRecognizer {
        pub fn new() -> anyhow::Result<Self> {
            let model = NERModel::new(Default::default())?;
            Ok(Self { model })
        }
    }

    impl PersonRecognizer for BertPersonRecognizer {
        fn persons(&self, text: &str) -> anyhow::Result<Vec<String>> {
            let mut entities = self.model.predict(&[text]);
            let first = if entities.is_empty() {
                Vec::new()
            } else {
                entities.remove(0)
            };
            Ok(first
                .into_iter()
                .filter(|entity| entity.label.contains("PER"))
                .map(|entity| entity.word.trim().to_string())
                .collect())
        }
    }
}
