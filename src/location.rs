// src/location.rs
//
// Fuzzy place-name lookup. Address/contact details almost always sit on
// lines punctuated with commas or pipes, so matching is restricted to those
// lines when any exist.

const SCORE_CUTOFF: f64 = 70.0;

pub fn best_location(text: &str, places: &[String]) -> Option<String> {
    let contact_lines: Vec<&str> = text
        .lines()
        .filter(|line| line.contains(',') || line.contains('|'))
        .collect();
    let restricted = if contact_lines.is_empty() {
        text.to_string()
    } else {
        contact_lines.join(" ")
    };
    best_match(&restricted, places, SCORE_CUTOFF).map(String::from)
}

// Scores every candidate against same-width token windows of the query and
// returns the top candidate at or above the cutoff (0-100 scale). Equal
// scores keep the earlier candidate.
pub fn best_match<'a>(query: &str, candidates: &'a [String], cutoff: f64) -> Option<&'a str> {
    let tokens: Vec<String> = query
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect();

    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let target = candidate.to_lowercase();
        let width = target.split_whitespace().count().max(1);

        let mut score = 0.0f64;
        if tokens.len() >= width {
            for window in tokens.windows(width) {
                let span = window.join(" ");
                score = score.max(strsim::normalized_levenshtein(&span, &target) * 100.0);
            }
        } else if !tokens.is_empty() {
            score = strsim::normalized_levenshtein(&tokens.join(" "), &target) * 100.0;
        }

        if score >= cutoff && best.map_or(true, |(_, top)| score > top) {
            best = Some((candidate.as_str(), score));
        }
    }
    best.map(|(candidate, _)| candidate)
}
