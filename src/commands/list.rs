use anyhow::Result;
use calremind_core::datetime::parse_date;
use calremind_core::{Appointment, Store};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &Store, date: Option<String>, json: bool) -> Result<()> {
    let appointments = select(store, date.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&appointments)?);
    } else {
        println!("{}", report(&appointments, date.as_deref()));
    }

    Ok(())
}

/// Everything, or only `date` once it has been checked as `YYYY-MM-DD`.
fn select(store: &Store, date: Option<&str>) -> Result<Vec<Appointment>> {
    match date {
        Some(d) => {
            parse_date(d).map_err(anyhow::Error::msg)?;
            Ok(store.on_date(d))
        }
        None => Ok(store.load()),
    }
}

fn report(appointments: &[Appointment], date: Option<&str>) -> String {
    if appointments.is_empty() {
        let message = match date {
            Some(d) => format!("No appointments found on {}.", d),
            None => "No appointments found.".to_string(),
        };
        return message.dimmed().to_string();
    }

    let mut lines = Vec::new();
    if let Some(d) = date {
        lines.push(format!("Appointments on {}:", d).bold().to_string());
    }
    lines.extend(appointments.iter().map(|appt| appt.render()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use calremind_core::NewAppointment;

    fn test_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("appointments.json"));
        store.add(NewAppointment::new("Team Meeting", "2024-07-30", "10:00")).unwrap();
        store.add(NewAppointment::new("Dentist", "2024-07-31", "09:00")).unwrap();
        (dir, store)
    }

    #[test]
    fn rejects_malformed_date() {
        let (_dir, store) = test_store();

        let err = run(&store, Some("07/30/2024".to_string()), false).unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
        assert!(select(&store, Some("2024-13-01")).is_err());
    }

    #[test]
    fn empty_date_reports_no_appointments() {
        let (_dir, store) = test_store();

        let appointments = select(&store, Some("2024-08-01")).unwrap();
        assert!(appointments.is_empty());
        assert!(report(&appointments, Some("2024-08-01")).contains("No appointments found on 2024-08-01."));
        assert!(report(&[], None).contains("No appointments found."));
    }

    #[test]
    fn date_report_has_heading_and_matches_only() {
        let (_dir, store) = test_store();

        let appointments = select(&store, Some("2024-07-30")).unwrap();
        let out = report(&appointments, Some("2024-07-30"));
        assert!(out.contains("Appointments on 2024-07-30:"));
        assert!(out.contains("Team Meeting"));
        assert!(!out.contains("Dentist"));

        assert_eq!(select(&store, None).unwrap().len(), 2);
    }
}
