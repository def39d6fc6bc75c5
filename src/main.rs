use anyhow::Context;
use clap::Parser;
use salon_booking::config::cli::{
    BookArgs, ClientCommand, Command, MasterCommand, ScheduleCommand, ServiceCommand,
};
use salon_booking::core::ConfigProvider;
use salon_booking::utils::error::ErrorSeverity;
use salon_booking::utils::validation::{parse_date, parse_date_time, parse_time, Validate};
use salon_booking::utils::logger;
use salon_booking::{agenda, export, CliConfig, LocalStorage, Salon, SalonError};

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_format, config.verbose());
    tracing::debug!("Effective config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = Salon::open(LocalStorage::new("."), config.data_file())
        .map_err(anyhow::Error::from)
        .and_then(|mut salon| run(cli.command, &mut salon));

    if let Err(e) = result {
        let Some(err) = e.downcast_ref::<SalonError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            err,
            err.category(),
            err.severity()
        );
        eprintln!("❌ {}", err.user_friendly_message());
        eprintln!("💡 {}", err.recovery_suggestion());

        let exit_code = match err.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(command: Command, salon: &mut Salon<LocalStorage>) -> anyhow::Result<()> {
    match command {
        Command::Client(ClientCommand::Add { name, phone, email }) => {
            let client = salon.add_client(&name, &phone, &email)?;
            println!("✅ Client {} added (id {})", client.name, client.id);
        }
        Command::Client(ClientCommand::List) => {
            if salon.clients().is_empty() {
                println!("No clients yet");
            }
            for c in salon.clients() {
                println!("{:>4}  {:<24} {:<18} {}", c.id, c.name, c.phone, c.email);
            }
        }
        Command::Master(MasterCommand::List) => {
            for m in salon.masters() {
                println!("{:>4}  {}", m.id, m.name);
            }
        }
        Command::Service(ServiceCommand::List) => {
            for s in salon.services() {
                println!(
                    "{:>4}. {:<12} {:<50} {:>8} {:>8.0}",
                    s.id,
                    s.category,
                    s.name,
                    agenda::format_duration(s.duration_min),
                    s.price
                );
            }
        }
        Command::Schedule(ScheduleCommand::Add {
            master,
            date,
            start,
            end,
        }) => {
            let master_id = master_id(salon, &master)?;
            let item = salon.add_schedule(
                master_id,
                parse_date(&date)?,
                parse_time(&start)?,
                parse_time(&end)?,
            )?;
            println!(
                "✅ Schedule added: {} works {} {}-{}",
                master,
                item.date,
                item.start_time.format("%H:%M"),
                item.end_time.format("%H:%M")
            );
        }
        Command::Schedule(ScheduleCommand::List { master, date }) => {
            let only_master = master.as_deref().map(|m| master_id(salon, m)).transpose()?;
            let only_date = date.as_deref().map(parse_date).transpose()?;
            for s in salon.schedules().iter().filter(|s| {
                only_master.map_or(true, |id| s.master_id == id)
                    && only_date.map_or(true, |d| s.date == d)
            }) {
                println!(
                    "{:>4}  {}  {:<10} {}-{}",
                    s.id,
                    s.date,
                    salon.master_name(s.master_id),
                    s.start_time.format("%H:%M"),
                    s.end_time.format("%H:%M")
                );
            }
        }
        Command::Book(args) => book(salon, args)?,
        Command::Appointments => {
            for a in salon.appointments() {
                println!(
                    "{:>4}  {} {}-{}  {:<10} {:<20} {}",
                    a.id,
                    a.date(),
                    a.start.format("%H:%M"),
                    a.end.format("%H:%M"),
                    salon.master_name(a.master_id),
                    salon.client_name(a.client_id),
                    salon.service_name(a.service_id)
                );
            }
        }
        Command::Agenda => {
            print!("{}", agenda::render_agenda(&agenda::build_agenda(salon)));
        }
        Command::Export(args) => {
            let rows = match &args.output {
                Some(path) => {
                    let file = std::fs::File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    export::export_appointments_csv(salon, file)?
                }
                None => export::export_appointments_csv(salon, std::io::stdout().lock())?,
            };
            tracing::info!("Exported {} appointments", rows);
        }
        Command::Clear { yes } => {
            if !yes {
                anyhow::bail!("refusing to delete all data without --yes");
            }
            salon.clear_all()?;
            println!("✅ All data cleared");
        }
    }
    Ok(())
}

fn master_id(salon: &Salon<LocalStorage>, name: &str) -> Result<u32, SalonError> {
    salon
        .find_master_by_name(name)
        .map(|m| m.id)
        .ok_or_else(|| SalonError::not_found("Master", name))
}

fn book(salon: &mut Salon<LocalStorage>, args: BookArgs) -> anyhow::Result<()> {
    let client_id = salon
        .find_client_by_name(&args.client)
        .map(|c| c.id)
        .ok_or_else(|| SalonError::not_found("Client", &args.client))?;
    let master_id = master_id(salon, &args.master)?;
    let start = parse_date_time(&args.date, &args.time)?;

    let appt = salon.add_appointment(client_id, master_id, args.service, start)?;
    println!(
        "✅ Booked {} for {} with {} on {} {}-{} ({} min)",
        salon.service_name(appt.service_id),
        args.client,
        args.master,
        appt.date(),
        appt.start.format("%H:%M"),
        appt.end.format("%H:%M"),
        salon.service_duration(appt.service_id)
    );
    Ok(())
}
