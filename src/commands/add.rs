use anyhow::{Result, bail};
use calremind_core::datetime::{parse_date, parse_time};
use calremind_core::{NewAppointment, Store};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &Store, new: NewAppointment) -> Result<()> {
    validate(&new)?;

    let appt = store.add(new)?;

    println!("{}", "Appointment added successfully:".green());
    println!("{}", appt.render());

    Ok(())
}

/// Presentation-layer checks the store itself does not make.
pub fn validate(new: &NewAppointment) -> Result<()> {
    if new.title.is_empty() {
        bail!("Title cannot be empty.");
    }
    parse_date(&new.date).map_err(anyhow::Error::msg)?;
    parse_time(&new.time).map_err(anyhow::Error::msg)?;
    Ok(())
}
