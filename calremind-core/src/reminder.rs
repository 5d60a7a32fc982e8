//! Reminder windows on top of the appointment store.
//!
//! An appointment is due while the current moment lies in
//! `[reminder_time, date + time]`, both ends inclusive. Once the appointment's
//! own moment has passed the reminder is no longer reported.

use chrono::{Local, NaiveDateTime};
use log::debug;

use crate::appointment::Appointment;
use crate::datetime::parse_datetime;
use crate::error::{CalremindError, CalremindResult};
use crate::store::Store;

/// Attach a reminder to the appointment with `appointment_id`.
///
/// `reminder_time` must be `YYYY-MM-DD HH:MM` and is stored exactly as given.
/// Nothing is written when the id is unknown or the timestamp does not parse.
pub fn set_reminder(
    store: &Store,
    appointment_id: &str,
    reminder_time: &str,
) -> CalremindResult<Appointment> {
    let _guard = store.lock();

    let mut appointments = store.load();
    let appt = appointments
        .iter_mut()
        .find(|a| a.id == appointment_id)
        .ok_or_else(|| CalremindError::AppointmentNotFound(appointment_id.to_string()))?;

    parse_datetime(reminder_time)?;

    appt.reminder_set = true;
    appt.reminder_time = reminder_time.to_string();
    let updated = appt.clone();

    store.save(&appointments)?;

    debug!("Reminder for {} set to {}", updated.id, updated.reminder_time);
    Ok(updated)
}

/// Appointments whose reminder window contains the local wall-clock time.
pub fn check_due(store: &Store) -> Vec<Appointment> {
    due_at(store, Local::now().naive_local())
}

/// Appointments whose reminder window contains `now`, in stored order.
///
/// Records with unparseable reminder or schedule strings are skipped.
pub fn due_at(store: &Store, now: NaiveDateTime) -> Vec<Appointment> {
    store
        .load()
        .into_iter()
        .filter(|appt| is_due(appt, now))
        .collect()
}

/// Whether `now` falls in the appointment's reminder window.
pub fn is_due(appt: &Appointment, now: NaiveDateTime) -> bool {
    let Some(reminder) = appt.reminder_at() else {
        return false;
    };

    let window = reminder.and_then(|start| appt.scheduled_at().map(|end| (start, end)));
    match window {
        Ok((start, end)) => start <= now && now <= end,
        Err(e) => {
            debug!("Skipping appointment {} in due check: {}", appt.id, e);
            false
        }
    }
}
