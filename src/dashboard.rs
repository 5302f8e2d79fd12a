use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame, Terminal,
};
use std::{error::Error, fs::File, io};
use csv::ReaderBuilder;
use serde::Deserialize; // For deserializing CSV data

#[derive(Debug, Deserialize)]
struct ParseLogEntry {
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "File")]
    file: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Phone")]
    phone: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Skills")]
    skills: String,
    #[serde(rename = "Status")]
    status: String,
}

fn read_parse_log() -> Result<Vec<ParseLogEntry>, Box<dyn Error>> {
    let file = File::open("parsed_resumes.csv")?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        let entry: ParseLogEntry = result?;
        entries.push(entry);
    }
    Ok(entries)
}

pub fn run_dashboard() -> Result<(), Box<dyn Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut table_state = TableState::default();
    table_state.select(Some(0)); // Select the first row by default

    loop {
        let entries = read_parse_log().unwrap_or_else(|_| vec![]); // Handle error if CSV not found/readable
        terminal.draw(|f| ui(f, &entries, &mut table_state))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Down => {
                        let i = match table_state.selected() {
                            Some(i) => if entries.is_empty() { 0 } else if i >= entries.len() - 1 { 0 } else { i + 1 },
                            None => 0,
                        };
                        if !entries.is_empty() { table_state.select(Some(i)); } else { table_state.select(None); }
                    }
                    KeyCode::Up => {
                        let i = match table_state.selected() {
                            Some(i) => if entries.is_empty() { 0 } else if i == 0 { entries.len() - 1 } else { i - 1 },
                            None => 0,
                        };
                        if !entries.is_empty() { table_state.select(Some(i)); } else { table_state.select(None); }
                    }
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn ui(f: &mut Frame, entries: &[ParseLogEntry], table_state: &mut TableState) {
    let rects = Layout::default()
        .constraints([Constraint::Percentage(100)].as_ref())
        .margin(1)
        .split(f.size());

    let selected_style = Style::default().add_modifier(Modifier::REVERSED).fg(Color::Yellow);
    let normal_style = Style::default().fg(Color::White);
    let header_cells = [
        "Parsed At", "File", "Name", "Email", "Phone", "Location", "Skills", "Status",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
    let header = Row::new(header_cells)
        .style(normal_style)
        .height(1)
        .bottom_margin(1);

    let rows = entries.iter().map(|item| {
        let cells = vec![
            Cell::from(item.timestamp.clone()),
            Cell::from(item.file.clone()),
            Cell::from(item.name.clone()),
            Cell::from(item.email.clone()),
            Cell::from(item.phone.clone()),
            Cell::from(item.location.clone()),
            Cell::from(item.skills.clone()),
            Cell::from(item.status.clone()),
        ];
        Row::new(cells).style(normal_style)
    });

    let col_widths = vec![
            Constraint::Min(19), // Parsed At
            Constraint::Min(20), // File
            Constraint::Min(16), // Name
            Constraint::Min(24), // Email
            Constraint::Min(14), // Phone
            Constraint::Min(12), // Location
            Constraint::Min(7),  // Skills
            Constraint::Min(8),  // Status
        ];

    let table = Table::new(rows, col_widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Parsed Resumes"))
        .highlight_style(selected_style)
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, rects[0], table_state);
}
