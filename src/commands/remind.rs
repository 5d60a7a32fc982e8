use anyhow::{Result, bail};
use calremind_core::datetime::parse_datetime;
use calremind_core::{Appointment, Store, reminder};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &Store, appointment_id: &str, reminder_time: &str) -> Result<()> {
    let Some(appt) = store.get(appointment_id) else {
        bail!("Invalid appointment ID: {}", appointment_id);
    };
    check_reminder(&appt, reminder_time)?;

    let updated = reminder::set_reminder(store, appointment_id, reminder_time)?;

    println!("{}", "Reminder set successfully!".green());
    println!("{}", updated.render());

    Ok(())
}

/// A reminder must parse and fall strictly before the appointment itself.
pub fn check_reminder(appt: &Appointment, reminder_time: &str) -> Result<()> {
    let reminder = parse_datetime(reminder_time)?;
    let scheduled = appt.scheduled_at()?;

    if reminder >= scheduled {
        bail!("Reminder time must be before the appointment time.");
    }

    Ok(())
}
