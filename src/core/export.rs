use crate::core::salon::Salon;
use crate::core::Storage;
use crate::domain::model::Appointment;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct AppointmentRow<'a> {
    id: u32,
    date: String,
    start: String,
    end: String,
    duration_min: u32,
    master: &'a str,
    client: &'a str,
    service: &'a str,
    price: f64,
}

/// Writes every appointment as CSV, in chronological order. Returns the row count.
pub fn export_appointments_csv<S: Storage, W: Write>(salon: &Salon<S>, writer: W) -> Result<usize> {
    let mut appointments: Vec<&Appointment> = salon.appointments().iter().collect();
    appointments.sort_by_key(|a| (a.start, a.id));

    let mut csv_writer = csv::Writer::from_writer(writer);
    for appt in &appointments {
        let service = salon.service(appt.service_id);
        csv_writer.serialize(AppointmentRow {
            id: appt.id,
            date: appt.date().to_string(),
            start: appt.start.format("%H:%M").to_string(),
            end: appt.end.format("%H:%M").to_string(),
            duration_min: salon.service_duration(appt.service_id),
            master: salon.master_name(appt.master_id),
            client: salon.client_name(appt.client_id),
            service: salon.service_name(appt.service_id),
            price: service.map(|s| s.price).unwrap_or(0.0),
        })?;
    }
    csv_writer.flush()?;

    tracing::debug!("Exported {} appointments as CSV", appointments.len());
    Ok(appointments.len())
}
