mod commands;
mod render;

use anyhow::Result;
use calremind_core::{NewAppointment, Settings, Store};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calremind")]
#[command(about = "Keep track of appointments and see which reminders are due")]
struct Cli {
    /// Appointment data file (overrides data_file from the config)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default when no command is given)
    Menu,
    /// Add an appointment
    Add {
        title: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Time (HH:MM)
        #[arg(short, long)]
        time: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(short, long, default_value = "")]
        location: String,
    },
    /// List appointments
    List {
        /// Only show appointments on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Set a reminder for an appointment
    Remind {
        /// Appointment ID
        id: String,

        /// Reminder date and time (YYYY-MM-DD HH:MM)
        at: String,
    },
    /// Show appointments whose reminders are due now
    Due {
        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let store = resolve_store(cli.data_file)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::run(&store),
        Commands::Add {
            title,
            date,
            time,
            description,
            location,
        } => {
            let new = NewAppointment::new(title, date, time)
                .description(description)
                .location(location);
            commands::add::run(&store, new)
        }
        Commands::List { date, json } => commands::list::run(&store, date, json),
        Commands::Remind { id, at } => commands::remind::run(&store, &id, &at),
        Commands::Due { json } => commands::due::run(&store, json),
    }
}

fn resolve_store(data_file: Option<PathBuf>) -> Result<Store> {
    let store = match data_file {
        Some(path) => Store::new(path),
        None => Settings::load()?.store(),
    };
    log::debug!("Using data file {}", store.path().display());
    Ok(store)
}
