//! Appointment persistence.
//!
//! The whole collection lives in one JSON file. Every operation reads the file
//! fresh and every mutation rewrites it in full; nothing is cached between calls.

use log::{debug, warn};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::appointment::{Appointment, NewAppointment};
use crate::error::{CalremindError, CalremindResult};

/// Owner of the appointment data file.
///
/// Clones share a write lock, so load-mutate-save sequences issued through
/// any clone in this process run one at a time.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every appointment from the data file.
    ///
    /// A missing, empty, or malformed file yields an empty collection.
    pub fn load(&self) -> Vec<Appointment> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Could not read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        if content.is_empty() {
            debug!("Data file {} is empty", self.path.display());
            return Vec::new();
        }

        match serde_json::from_str(&content) {
            Ok(appointments) => appointments,
            Err(e) => {
                warn!(
                    "Ignoring malformed data file {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the data file with `appointments`.
    pub fn save(&self, appointments: &[Appointment]) -> CalremindResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        appointments
            .serialize(&mut ser)
            .map_err(|e| CalremindError::Serialization(e.to_string()))?;

        std::fs::write(&self.path, buf)?;
        Ok(())
    }

    /// Append a new appointment and persist the collection.
    ///
    /// `date` and `time` are stored as given; validating their format is up to
    /// the caller.
    pub fn add(&self, new: NewAppointment) -> CalremindResult<Appointment> {
        let _guard = self.lock();

        let mut appointments = self.load();
        let appointment = Appointment::create(new);
        appointments.push(appointment.clone());
        self.save(&appointments)?;

        debug!("Added appointment {} ({})", appointment.id, appointment.title);
        Ok(appointment)
    }

    /// Appointments whose `date` equals `date` exactly, in stored order.
    pub fn on_date(&self, date: &str) -> Vec<Appointment> {
        self.load()
            .into_iter()
            .filter(|appt| appt.date == date)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Appointment> {
        self.load().into_iter().find(|appt| appt.id == id)
    }

    /// Hold this while running a load-mutate-save sequence.
    pub(crate) fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a poisoned lock carries no broken state.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
