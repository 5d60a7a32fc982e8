//! Terminal rendering for appointments.
//!
//! Extension traits that add colored output to calremind-core types using
//! owo_colors.

use calremind_core::Appointment;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Appointment {
    fn render(&self) -> String {
        let mut lines = vec![
            field("ID", &self.id.dimmed().to_string()),
            field("Title", &self.title.bold().to_string()),
            field("Date", &self.date),
            field("Time", &self.time),
            field("Description", or_na(&self.description)),
            field("Location", or_na(&self.location)),
            field("Reminder Set", if self.reminder_set { "Yes" } else { "No" }),
        ];
        if self.reminder_set {
            lines.push(field("Reminder Time", &self.reminder_time.yellow().to_string()));
        }
        lines.push("-".repeat(20).dimmed().to_string());

        lines.join("\n")
    }
}

/// One-line summary used when listing appointments to pick from.
pub fn summary_line(appt: &Appointment) -> String {
    format!(
        "  ID: {}, Title: {}, Date: {}, Time: {}",
        appt.id, appt.title, appt.date, appt.time
    )
}

/// Heading printed above a due appointment.
pub fn reminder_banner(appt: &Appointment) -> String {
    format!(
        "{} Appointment '{}' at {} {}",
        "REMINDER:".yellow().bold(),
        appt.title,
        appt.date,
        appt.time
    )
}

fn field(label: &str, value: &str) -> String {
    format!("  {}: {}", label.dimmed(), value)
}

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}
