use anyhow::Result;
use calremind_core::{Appointment, Store, reminder};
use owo_colors::OwoColorize;

use crate::render::{Render, reminder_banner};

pub fn run(store: &Store, json: bool) -> Result<()> {
    let due = reminder::check_due(store);

    if json {
        println!("{}", serde_json::to_string_pretty(&due)?);
    } else {
        println!("{}", report(&due));
    }

    Ok(())
}

fn report(due: &[Appointment]) -> String {
    if due.is_empty() {
        return "No reminders are currently due.".dimmed().to_string();
    }

    let mut out = format!("You have {} due reminder(s):", due.len());
    for appt in due {
        out.push_str(&format!("\n\n{}\n{}", reminder_banner(appt), appt.render()));
    }
    out
}
