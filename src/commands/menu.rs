//! Interactive menu loop.

use anyhow::Result;
use calremind_core::datetime::{parse_date, parse_time};
use calremind_core::{NewAppointment, Store, reminder};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::commands::{add, due, remind};
use crate::render::{Render, summary_line};

const MENU_ITEMS: &[&str] = &[
    "Add new appointment",
    "View appointments for a date",
    "Set a reminder for an appointment",
    "Check for due reminders",
    "Exit",
];

pub fn run(store: &Store) -> Result<()> {
    println!("{}", "Welcome to calremind!".bold());

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Menu")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => add_appointment(store)?,
            1 => view_appointments(store)?,
            2 => set_reminder(store)?,
            3 => due::run(store, false)?,
            _ => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}

fn add_appointment(store: &Store) -> Result<()> {
    println!("\n{}", "--- Add New Appointment ---".bold());

    let title: String = Input::new()
        .with_prompt("  Title")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.is_empty() {
                Err("Title cannot be empty.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let date = optional_input("  Date (YYYY-MM-DD)")?;
    if let Err(e) = parse_date(&date) {
        eprintln!("  {}", e.red());
        return Ok(());
    }

    let time = optional_input("  Time (HH:MM)")?;
    if let Err(e) = parse_time(&time) {
        eprintln!("  {}", e.red());
        return Ok(());
    }

    let description = optional_input("  Description (skip)")?;
    let location = optional_input("  Where? (skip)")?;

    let new = NewAppointment::new(title, date, time)
        .description(description)
        .location(location);
    add::run(store, new)
}

fn view_appointments(store: &Store) -> Result<()> {
    println!("\n{}", "--- View Appointments for a Date ---".bold());

    let date = optional_input("  Date (YYYY-MM-DD)")?;
    if let Err(e) = parse_date(&date) {
        eprintln!("  {}", e.red());
        return Ok(());
    }

    let appointments = store.on_date(&date);
    if appointments.is_empty() {
        println!("{}", format!("No appointments found on {}.", date).dimmed());
        return Ok(());
    }

    println!("\nAppointments on {}:", date.bold());
    for appt in &appointments {
        println!("{}", appt.render());
    }
    Ok(())
}

fn set_reminder(store: &Store) -> Result<()> {
    println!("\n{}", "--- Set Reminder for an Appointment ---".bold());

    let appointments = store.load();
    if appointments.is_empty() {
        println!("{}", "No appointments available to set reminders for.".dimmed());
        return Ok(());
    }

    println!("Available appointments:");
    for appt in &appointments {
        println!("{}", summary_line(appt));
    }

    let id = optional_input("  Appointment ID")?;
    let Some(appt) = appointments.iter().find(|a| a.id == id.trim()) else {
        eprintln!("  {}", "Invalid appointment ID.".red());
        return Ok(());
    };

    let reminder_time = optional_input("  Reminder (YYYY-MM-DD HH:MM)")?;
    if let Err(e) = remind::check_reminder(appt, &reminder_time) {
        eprintln!("  {}", e.to_string().red());
        return Ok(());
    }

    match reminder::set_reminder(store, &appt.id, &reminder_time) {
        Ok(updated) => {
            println!("{}", "Reminder set successfully!".green());
            println!("\nUpdated appointment details:");
            println!("{}", updated.render());
        }
        Err(e) if e.is_rejection() => {
            eprintln!(
                "  {}",
                "Failed to set reminder. Ensure the appointment ID is correct and the datetime format is valid."
                    .red()
            );
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Free-text prompt that accepts an empty answer.
fn optional_input(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    Ok(input.trim().to_string())
}
