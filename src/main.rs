use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::WriterBuilder;

mod dashboard;
mod entities;
mod error;
mod extract;
mod location;
mod name;
mod normalize;
mod parser;
mod record;
mod store;
mod tables;

use parser::ResumeParser;
use record::ResumeRecord;
use tables::ReferenceTables;

fn main() -> anyhow::Result<()> {
    // --- Dashboard Launch ---
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "dashboard" {
        println!("Launching dashboard...");
        if let Err(e) = dashboard::run_dashboard() {
            eprintln!("Dashboard error: {}", e);
        }
        return Ok(()); // Exit after dashboard runs
    }
    // --- End Dashboard Launch ---

    // Reload a previously parsed record without re-running the pipeline
    if args.len() > 1 && args[1] == "show" {
        let record_path = args
            .get(2)
            .ok_or_else(|| anyhow::anyhow!("Usage: resume-parser show <record.json>"))?;
        let record = store::load_record(Path::new(record_path))?;
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let input_path = match args.get(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            println!("Enter the path of a resume to parse (.pdf, .txt, .md):");
            let mut path_input = String::new();
            io::stdin().read_line(&mut path_input)?;
            PathBuf::from(path_input.trim())
        }
    };

    println!("Extracting text from {}...", input_path.display());
    let raw_text = extract::extract_text(&input_path)?;

    let resume_parser = build_parser();

    println!("Parsing resume...");
    let record = resume_parser.parse(&raw_text)?;

    println!("{}", serde_json::to_string_pretty(&record)?);

    // Persist the record under the source file's stem
    let key = input_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("resume");
    let saved = store::save_record(Path::new("parsed"), key, &record)?;
    println!("Saved parsed entities to {}", saved.display());

    log_parse(&input_path, &record)?;

    println!("Resume parsing complete!");
    Ok(())
}

fn build_parser() -> ResumeParser {
    let resume_parser = ResumeParser::new(ReferenceTables::default());

    #[cfg(feature = "ner")]
    let resume_parser = {
        println!("Initializing NER model...");
        match name::BertPersonRecognizer::new() {
            Ok(recognizer) => resume_parser.with_recognizer(Box::new(recognizer)),
            Err(e) => {
                eprintln!("NER model unavailable, using the first-line heuristic: {}", e);
                resume_parser
            }
        }
    };

    resume_parser
}

// CSV Logging
fn log_parse(input_path: &Path, record: &ResumeRecord) -> anyhow::Result<()> {
    let csv_path = PathBuf::from("parsed_resumes.csv");
    let file_exists = csv_path.exists();

    let csv_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&csv_path)?;

    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(csv_file);

    if !file_exists {
        wtr.write_record([
            "Timestamp", "File", "Name", "Email", "Phone", "Location", "Skills", "Status",
        ])?;
    }

    wtr.write_record([
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        input_path.display().to_string(),
        record.name.clone().unwrap_or_default(),
        record.email.clone().unwrap_or_default(),
        record.phone.clone().unwrap_or_default(),
        record.location.clone().unwrap_or_default(),
        record.skills.len().to_string(),
        "Parsed".to_string(),
    ])?;
    wtr.flush()?;
    println!("Logged parse to {}", csv_path.display());

    Ok(())
}
