use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RouteResult;
use crate::render::{render_instructions, render_page, EmailMessage, OutboxMailer};
use crate::route::build_map_url;
use crate::sheet::{extract, read_table};
use crate::types::{Extraction, Selection};

/// The silent exclusion record, formatted for verbose output.
fn extraction_report(selection: Selection, extraction: &Extraction) -> String {
    let mut report = format!(
        "   Selection: {} | {} entries, {} skipped\n",
        selection,
        extraction.entries.len(),
        extraction.skipped.len()
    );
    for skipped in &extraction.skipped {
        report.push_str(&format!(
            "   {} row {}: {}\n",
            "⏭".yellow(),
            skipped.row + 1,
            skipped.reason
        ));
    }
    for key in &extraction.duplicate_headers {
        report.push_str(&format!(
            "   {} duplicate header '{}': later column used\n",
            "⚠️".yellow(),
            key
        ));
    }
    report
}

/// Read the table and extract the selected entries, surfacing the silent
/// exclusion record when verbose.
fn load_entries(file: &Path, rows: Option<Selection>, verbose: bool) -> RouteResult<Extraction> {
    let selection = rows.unwrap_or_else(Selection::all);
    let table = read_table(file)?;
    let extraction = extract(&table, selection)?;

    if verbose {
        println!("{}", extraction_report(selection, &extraction));
    }

    Ok(extraction)
}

/// Execute the map command - print the cycling route URL
pub fn map(
    file: PathBuf,
    rows: Option<Selection>,
    origin: String,
    destination: String,
    verbose: bool,
) -> RouteResult<()> {
    println!("{}", "🚲 sheetroute - Route Map".bold().green());
    println!("   File: {}\n", file.display());

    let extraction = load_entries(&file, rows, verbose)?;
    let url = build_map_url(&origin, &destination, &extraction.entries)?;

    println!(
        "{} {} stop(s):",
        "🗺".green(),
        extraction.entries.len().to_string().bold()
    );
    println!("{url}");
    Ok(())
}

/// Execute the instructions command - render the HTML instructions page
pub fn instructions(
    file: PathBuf,
    rows: Option<Selection>,
    message: Option<String>,
    output: Option<PathBuf>,
    verbose: bool,
) -> RouteResult<()> {
    let extraction = if output.is_some() {
        println!("{}", "📋 sheetroute - Instructions".bold().green());
        println!("   File: {}\n", file.display());
        load_entries(&file, rows, verbose)?
    } else {
        // Stdout is the document; diagnostics go to stderr so it stays pipeable
        let extraction = load_entries(&file, rows, false)?;
        if verbose {
            let selection = rows.unwrap_or_else(Selection::all);
            eprintln!("{}", extraction_report(selection, &extraction));
        }
        extraction
    };
    let fragment = render_instructions(&extraction.entries, message.as_deref());

    let page = render_page("Instructions", &fragment);
    match output {
        Some(path) => {
            fs::write(&path, page)?;
            println!("{} Wrote {}", "✅".green(), path.display());
        }
        None => print!("{page}"),
    }
    Ok(())
}

/// Execute the send command - email the instructions via the outbox
#[allow(clippy::too_many_arguments)]
pub fn send(
    file: PathBuf,
    rows: Option<Selection>,
    to: String,
    subject: String,
    message: Option<String>,
    outbox: PathBuf,
    dry_run: bool,
    verbose: bool,
) -> RouteResult<()> {
    println!("{}", "✉️  sheetroute - Send Instructions".bold().green());
    println!("   File: {}", file.display());
    println!("   To: {}\n", to.bright_blue());

    let extraction = load_entries(&file, rows, verbose)?;
    let html_body = render_instructions(&extraction.entries, message.as_deref());
    let email = EmailMessage {
        to,
        subject,
        html_body,
    };

    if dry_run {
        println!("{}", "📋 DRY RUN - nothing written\n".yellow());
        println!("Subject: {}", email.subject);
        println!("{}", email.html_body);
        return Ok(());
    }

    let mailer = OutboxMailer::new(&outbox);
    let path = mailer.deliver(&email)?;
    println!("{} Queued {}", "✅".green(), path.display());
    Ok(())
}

/// Execute the list command - show the extracted entries
pub fn list(file: PathBuf, rows: Option<Selection>, json: bool, verbose: bool) -> RouteResult<()> {
    if json {
        let extraction = load_entries(&file, rows, false)?;
        println!("{}", serde_json::to_string_pretty(&extraction.entries)?);
        return Ok(());
    }

    println!("{}", "📇 sheetroute - Entries".bold().green());
    println!("   File: {}\n", file.display());

    let extraction = load_entries(&file, rows, verbose)?;
    if extraction.entries.is_empty() {
        println!("{}", "   No entries in selection".yellow());
        return Ok(());
    }

    for (i, entry) in extraction.entries.iter().enumerate() {
        println!("   {}. {}", i + 1, entry.waypoint().bright_blue());
        for (key, value) in &entry.extras {
            if value.is_truthy() {
                println!("      {}: {}", key.cyan(), value);
            }
        }
    }
    Ok(())
}
