// Driver for the demo flow: sign in, seed a few notes, read them back and
// print the report. Each step is gated on the one before it, except the
// note creations, which are independent of each other.

use std::io::Write;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::api::{NoteClient, Transport};
use crate::config::Credentials;
use crate::report::generate_report;

/// Notes created on every run, in this order.
pub const SAMPLE_NOTES: [(&str, &str); 5] = [
    ("An Important Note", "This is a very important note about something."),
    ("Emergency Contact", "Call John at 555-1234 in case of emergency."),
    ("Shopping List", "Milk, Bread, Eggs, Cheese, Apples"),
    ("Meeting Notes", "Discussed project timeline and deliverables."),
    ("Ideas for Weekend", "Visit the park, read a book, call mom."),
];

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    AuthenticationFailed,
    RetrievalFailed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Completed => 0,
            Outcome::AuthenticationFailed | Outcome::RetrievalFailed => 1,
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner
}

/// Run the whole flow against `client`, writing user-facing output to
/// `out`. Only write failures come back as `Err`; API failures end the run
/// with the matching `Outcome`.
pub fn run<T: Transport, W: Write>(
    client: &mut NoteClient<T>,
    credentials: &Credentials,
    out: &mut W,
) -> Result<Outcome> {
    writeln!(out, "Note Keeper API Client")?;
    writeln!(out, "{}", "=".repeat(30))?;
    writeln!(out, "Attempting to authenticate with username: {}", credentials.username)?;

    if let Err(e) = client.authenticate(&credentials.username, &credentials.password) {
        writeln!(out, "Authentication failed: {}", e)?;
        writeln!(
            out,
            "Please check your credentials and ensure the API is running at {}.",
            client.base_url()
        )?;
        return Ok(Outcome::AuthenticationFailed);
    }

    writeln!(out, "\nCreating sample notes...")?;
    let pb = spinner("Creating notes...");
    let mut created = 0;
    for (title, content) in SAMPLE_NOTES {
        pb.set_message(format!("Creating \"{}\"...", title));
        match client.create_note(title, content) {
            Ok(_) => created += 1,
            Err(e) => warn!(title, "Skipping sample note: {}", e),
        }
    }
    pb.finish_and_clear();
    info!("Created {} of {} sample notes", created, SAMPLE_NOTES.len());

    writeln!(out, "\nRetrieving notes...")?;
    let pb = spinner("Retrieving notes...");
    let notes = client.list_notes();
    pb.finish_and_clear();

    let notes = match notes {
        Ok(notes) => notes,
        Err(e) => {
            writeln!(out, "Failed to retrieve notes: {}", e)?;
            return Ok(Outcome::RetrievalFailed);
        }
    };

    writeln!(out)?;
    write!(out, "{}", generate_report(&notes))?;
    writeln!(out, "\nClient execution completed successfully!")?;
    Ok(Outcome::Completed)
}
