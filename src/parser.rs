// src/parser.rs
//
// Ties the pipeline together: normalize once, then run every extractor over
// the same normalized text. Extractors are independent, so a field that
// finds nothing stays empty without disturbing the rest.

use crate::entities;
use crate::error::ParseError;
use crate::location;
use crate::name::{self, PersonRecognizer};
use crate::normalize::normalize;
use crate::record::ResumeRecord;
use crate::tables::ReferenceTables;

// Optional external classifier; its label is attached to the record and has
// no influence on extraction.
pub trait CategoryClassifier {
    fn predict(&self, text: &str) -> anyhow::Result<String>;
}

pub struct ResumeParser {
    tables: ReferenceTables,
    recognizer: Option<Box<dyn PersonRecognizer>>,
    classifier: Option<Box<dyn CategoryClassifier>>,
}

impl ResumeParser {
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            tables,
            recognizer: None,
            classifier: None,
        }
    }

    pub fn with_recognizer(mut self, recognizer: Box<dyn PersonRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn with_classifier(mut self, classifier: Box<dyn CategoryClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn parse(&self, raw_text: &str) -> Result<ResumeRecord, ParseError> {
        if raw_text.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let text = normalize(raw_text);
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        Ok(ResumeRecord {
            name: self.extract_name(&text),
            email: entities::extract_email(&text),
            phone: entities::extract_phone(&text),
            urls: entities::extract_urls(&text),
            linkedin: entities::extract_linkedin(&text),
            github: entities::extract_github(&text),
            skills: entities::extract_skills(&text, &self.tables.skills),
            yoe: entities::extract_yoe(&text),
            location: location::best_location(&text, &self.tables.places),
            projects: entities::extract_projects(&text, &self.tables.skills),
            predicted_category: self
                .classifier
                .as_ref()
                .and_then(|classifier| classifier.predict(&text).ok()),
        })
    }

    fn extract_name(&self, text: &str) -> Option<String> {
        if let Some(recognizer) = &self.recognizer {
            match recognizer.persons(text) {
                Ok(candidates) => return name::pick_person(&candidates, text),
                // recognizer unavailable: fall through to the line heuristic
                Err(_) => {}
            }
        }
        name::first_line_name(text)
    }
}
