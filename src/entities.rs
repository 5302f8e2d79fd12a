// src/entities.rs
//
// Independent regex extractors over normalized resume text. Each one is a
// pure function: no match means None/empty, never an error.

use std::collections::BTreeSet;

use regex::Regex;

use crate::record::ProjectEntry;

pub fn extract_email(text: &str) -> Option<String> {
    let re = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}

// First match wins; grouped forms like "+91 98765 43210" or a country code
// followed by ten digits. Whitespace and hyphens are dropped from the
// captured span so the stored value is digits plus an optional leading "+".
pub fn extract_phone(text: &str) -> Option<String> {
    let re =
        Regex::new(r"\+?\d{1,3}[\s-]?\d{5}[\s-]?\d{5}|\+?\d{1,3}[\s-]?\d{10}|\d{10}").ok()?;
    let matched = re.find(text)?;
    let cleaned: String = matched
        .as_str()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    Some(cleaned)
}

pub fn extract_urls(text: &str) -> Vec<String> {
    match Regex::new(r"https?://[^\s]+") {
        Ok(re) => re.find_iter(text).map(|m| m.as_str().to_string()).collect(),
        Err(_) => Vec::new(),
    }
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    let re = Regex::new(r"(?:https?://)?(?:www\.)?linkedin\.com/[A-Za-z0-9/_-]+").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_github(text: &str) -> Option<String> {
    let re = Regex::new(r"(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9/_-]+").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}

// Whole-word, case-insensitive match against the reference table. Results
// carry the table's canonical casing, sorted and deduplicated.
pub fn extract_skills(text: &str, table: &[String]) -> Vec<String> {
    let mut found = BTreeSet::new();
    for skill in table {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(skill));
        if let Ok(re) = Regex::new(&pattern) {
            if re.is_match(text) {
                found.insert(skill.clone());
            }
        }
    }
    found.into_iter().collect()
}

pub fn extract_yoe(text: &str) -> Option<String> {
    let re = Regex::new(r"(?i)\d+\+?\s*(?:years|yrs)").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}

// Scans for lines mentioning the word "project". The project name is what
// remains after the "...project[:-]" prefix, cut at the first "(". The tech
// stack is every skill-table hit on the line itself plus the following two
// lines. A project line with nothing left for a name still yields an entry.
pub fn extract_projects(text: &str, skills_table: &[String]) -> Vec<ProjectEntry> {
    let detect = match Regex::new(r"(?i)\bproject\b") {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };
    let prefix = Regex::new(r"(?i)^.*project[:\-]?\s*").ok();

    let lines: Vec<&str> = text.lines().collect();
    let mut projects = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !detect.is_match(line) {
            continue;
        }

        let stripped = match &prefix {
            Some(re) => re.replace(line, "").into_owned(),
            None => line.to_string(),
        };
        let name = stripped
            .split('(')
            .next()
            .unwrap_or("")
            .trim_matches(|c: char| matches!(c, ' ' | '-' | ':' | '•'))
            .to_string();

        let mut window = line.to_string();
        for nearby in lines.iter().skip(i + 1).take(2) {
            window.push(' ');
            window.push_str(nearby);
        }
        let tech_stack = extract_skills(&window, skills_table);

        projects.push(ProjectEntry {
            name: if name.is_empty() { None } else { Some(name) },
            tech_stack,
        });
    }

    projects
}
