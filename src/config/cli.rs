use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "salon")]
#[command(about = "Salon bookings: clients, master schedules and appointments")]
pub struct CliConfig {
    /// JSON file holding clients, schedules and appointments
    #[arg(long, global = true)]
    pub data_file: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format: compact or json
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage clients
    #[command(subcommand)]
    Client(ClientCommand),
    /// List the salon's masters
    #[command(subcommand)]
    Master(MasterCommand),
    /// List the service catalog
    #[command(subcommand)]
    Service(ServiceCommand),
    /// Manage master working hours
    #[command(subcommand)]
    Schedule(ScheduleCommand),
    /// Book an appointment
    Book(BookArgs),
    /// List all appointments
    Appointments,
    /// Show schedules and appointments grouped by day
    Agenda,
    /// Export appointments as CSV
    Export(ExportArgs),
    /// Delete all clients, schedules and appointments
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ClientCommand {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
    },
    List,
}

#[derive(Debug, Clone, Subcommand)]
pub enum MasterCommand {
    List,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ServiceCommand {
    List,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ScheduleCommand {
    Add {
        /// Master name
        #[arg(long)]
        master: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        start: String,
        /// HH:MM
        #[arg(long)]
        end: String,
    },
    List {
        #[arg(long)]
        master: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct BookArgs {
    /// Client name, as registered
    #[arg(long)]
    pub client: String,
    /// Master name
    #[arg(long)]
    pub master: String,
    /// Service id from `service list`
    #[arg(long)]
    pub service: u32,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// HH:MM
    #[arg(long)]
    pub time: String,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Destination file; stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = self.config.as_ref().map(TomlConfig::from_file).transpose()?;
        if let Some(file) = &file {
            crate::utils::validation::Validate::validate(file)?;
        }
        AppConfig::merge(
            file.as_ref(),
            self.data_file.as_deref(),
            self.verbose,
            self.log_format.as_deref(),
        )
    }
}
