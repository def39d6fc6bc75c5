use crate::core::salon::Salon;
use crate::core::Storage;
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkingHours {
    pub master: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaEntry {
    pub appointment_id: u32,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_min: u32,
    pub master: String,
    pub client: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayAgenda {
    pub date: NaiveDate,
    pub working_hours: Vec<WorkingHours>,
    pub appointments: Vec<AgendaEntry>,
}

/// One entry per date that has either a working window or an appointment, newest first.
pub fn build_agenda<S: Storage>(salon: &Salon<S>) -> Vec<DayAgenda> {
    let dates: BTreeSet<NaiveDate> = salon
        .schedules()
        .iter()
        .map(|s| s.date)
        .chain(salon.appointments().iter().map(|a| a.date()))
        .collect();

    dates
        .into_iter()
        .rev()
        .map(|date| {
            let working_hours = salon
                .schedules()
                .iter()
                .filter(|s| s.date == date)
                .map(|s| WorkingHours {
                    master: salon.master_name(s.master_id).to_string(),
                    start: s.start_time,
                    end: s.end_time,
                })
                .collect();

            let mut appointments: Vec<AgendaEntry> = salon
                .appointments()
                .iter()
                .filter(|a| a.date() == date)
                .map(|a| AgendaEntry {
                    appointment_id: a.id,
                    start: a.start.time(),
                    end: a.end.time(),
                    duration_min: salon.service_duration(a.service_id),
                    master: salon.master_name(a.master_id).to_string(),
                    client: salon.client_name(a.client_id).to_string(),
                    service: salon.service_name(a.service_id).to_string(),
                })
                .collect();
            appointments.sort_by_key(|e| (e.start, e.appointment_id));

            DayAgenda {
                date,
                working_hours,
                appointments,
            }
        })
        .collect()
}

pub fn format_duration(minutes: u32) -> String {
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match (hours, minutes) {
        (0, m) => format!("{}min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}min", h, m),
    }
}

/// Plain-text agenda; `to_string()` renders it.
pub struct AgendaView<'a>(pub &'a [DayAgenda]);

impl fmt::Display for AgendaView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No schedules or appointments yet")?;
            return writeln!(f, "Add master working hours and client appointments first");
        }
        self.0.iter().try_for_each(|day| write_day(f, day))
    }
}

fn write_day(f: &mut fmt::Formatter<'_>, day: &DayAgenda) -> fmt::Result {
    writeln!(f, "\nDATE: {}", day.date)?;
    writeln!(f, "{}\n", "=".repeat(60))?;

    if !day.working_hours.is_empty() {
        writeln!(f, "WORKING HOURS:")?;
        for hours in &day.working_hours {
            writeln!(
                f,
                "   * {}: {} - {}",
                hours.master,
                hours.start.format("%H:%M"),
                hours.end.format("%H:%M")
            )?;
        }
        writeln!(f)?;
    }

    if day.appointments.is_empty() {
        return writeln!(f, "   No client appointments on this date\n");
    }

    writeln!(f, "APPOINTMENTS:")?;
    for entry in &day.appointments {
        writeln!(
            f,
            "   * Time: {}-{} ({})",
            entry.start.format("%H:%M"),
            entry.end.format("%H:%M"),
            format_duration(entry.duration_min)
        )?;
        writeln!(f, "     Master: {}", entry.master)?;
        writeln!(f, "     Client: {}", entry.client)?;
        writeln!(f, "     Service: {}\n", entry.service)?;
    }
    Ok(())
}

pub fn render_agenda(days: &[DayAgenda]) -> String {
    AgendaView(days).to_string()
}
