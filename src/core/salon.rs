use crate::core::Storage;
use crate::domain::catalog::{default_masters, default_services};
use crate::domain::model::{Appointment, Client, Master, SalonSnapshot, ScheduleItem, Service};
use crate::utils::error::{Result, SalonError};
use crate::utils::validation::require_field;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use serde_json::Value;

pub const UNKNOWN_CLIENT: &str = "Unknown client";
pub const UNKNOWN_MASTER: &str = "Unknown master";
pub const UNKNOWN_SERVICE: &str = "Unknown service";

/// On-disk layout before migration. Appointments stay untyped so that legacy
/// records can be repaired or skipped one by one.
#[derive(Debug, Default, Deserialize)]
struct StoredSnapshot {
    #[serde(default)]
    clients: Vec<Client>,
    #[serde(default)]
    appointments: Vec<Value>,
    #[serde(default)]
    schedules: Vec<ScheduleItem>,
}

/// The salon's bookkeeping: catalog, clients, schedules and appointments.
///
/// Every mutation rewrites the whole data file through the [`Storage`] port.
pub struct Salon<S: Storage> {
    storage: S,
    data_file: String,
    services: Vec<Service>,
    masters: Vec<Master>,
    state: SalonSnapshot,
}

impl<S: Storage> Salon<S> {
    /// Loads `data_file` if it exists, migrates legacy appointment records and
    /// writes the normalised file back.
    pub fn open(storage: S, data_file: impl Into<String>) -> Result<Self> {
        let mut salon = Self {
            storage,
            data_file: data_file.into(),
            services: default_services(),
            masters: default_masters(),
            state: SalonSnapshot::default(),
        };

        let Some(bytes) = salon.storage.read_file(&salon.data_file)? else {
            tracing::debug!("No data file at {}, starting empty", salon.data_file);
            return Ok(salon);
        };

        let stored: StoredSnapshot = serde_json::from_slice(&bytes)?;
        let total = stored.appointments.len();
        let appointments: Vec<Appointment> = stored
            .appointments
            .into_iter()
            .map(|raw| migrate_appointment(raw, &salon.services))
            .filter_map(|raw| match serde_json::from_value::<Appointment>(raw) {
                Ok(appt) => Some(appt),
                Err(e) => {
                    tracing::warn!("Skipping unreadable appointment record: {}", e);
                    None
                }
            })
            .collect();

        tracing::info!(
            "Loaded {} clients, {} schedules, {}/{} appointments from {}",
            stored.clients.len(),
            stored.schedules.len(),
            appointments.len(),
            total,
            salon.data_file
        );

        salon.commit(SalonSnapshot {
            clients: stored.clients,
            appointments,
            schedules: stored.schedules,
        })?;
        Ok(salon)
    }

    fn persist(&self, state: &SalonSnapshot) -> Result<()> {
        let data = serde_json::to_vec_pretty(state)?;
        tracing::debug!("Writing {} bytes to {}", data.len(), self.data_file);
        self.storage.write_file(&self.data_file, &data)
    }

    /// Replaces the in-memory state only once `next` is on disk.
    fn commit(&mut self, next: SalonSnapshot) -> Result<()> {
        self.persist(&next)?;
        self.state = next;
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn masters(&self) -> &[Master] {
        &self.masters
    }

    pub fn clients(&self) -> &[Client] {
        &self.state.clients
    }

    pub fn schedules(&self) -> &[ScheduleItem] {
        &self.state.schedules
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.state.appointments
    }

    pub fn service(&self, service_id: u32) -> Option<&Service> {
        self.services.iter().find(|s| s.id == service_id)
    }

    pub fn master(&self, master_id: u32) -> Option<&Master> {
        self.masters.iter().find(|m| m.id == master_id)
    }

    pub fn client(&self, client_id: u32) -> Option<&Client> {
        self.state.clients.iter().find(|c| c.id == client_id)
    }

    pub fn add_client(&mut self, name: &str, phone: &str, email: &str) -> Result<Client> {
        let name = require_field("client name", name)?;
        let phone = require_field("client phone", phone)?;
        let email = require_field("client email", email)?;

        let client = Client {
            id: next_id(self.state.clients.iter().map(|c| c.id)),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        };
        let mut next = self.state.clone();
        next.clients.push(client.clone());
        self.commit(next)?;

        tracing::info!("Added client {} ({})", client.id, client.name);
        Ok(client)
    }

    pub fn find_client_by_name(&self, name: &str) -> Option<&Client> {
        self.state.clients.iter().find(|c| c.name == name)
    }

    pub fn find_master_by_name(&self, name: &str) -> Option<&Master> {
        self.masters.iter().find(|m| m.name == name)
    }

    pub fn add_schedule(
        &mut self,
        master_id: u32,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<ScheduleItem> {
        if self.master(master_id).is_none() {
            return Err(SalonError::not_found("Master", master_id));
        }
        if end_time <= start_time {
            return Err(SalonError::validation(format!(
                "end time {} must be later than start time {}",
                end_time.format("%H:%M"),
                start_time.format("%H:%M")
            )));
        }

        let item = ScheduleItem {
            id: next_id(self.state.schedules.iter().map(|s| s.id)),
            master_id,
            date,
            start_time,
            end_time,
        };
        let mut next = self.state.clone();
        next.schedules.push(item.clone());
        self.commit(next)?;

        tracing::info!(
            "Added schedule {} for master {} on {} {}-{}",
            item.id,
            master_id,
            date,
            start_time.format("%H:%M"),
            end_time.format("%H:%M")
        );
        Ok(item)
    }

    pub fn schedules_for(&self, master_id: u32, date: NaiveDate) -> Vec<&ScheduleItem> {
        self.state
            .schedules
            .iter()
            .filter(|s| s.master_id == master_id && s.date == date)
            .collect()
    }

    /// Books `service_id` with `master_id` starting at `start`.
    ///
    /// The booking must fit entirely inside one of the master's windows for
    /// that day and must not overlap any of the master's other appointments.
    pub fn add_appointment(
        &mut self,
        client_id: u32,
        master_id: u32,
        service_id: u32,
        start: NaiveDateTime,
    ) -> Result<Appointment> {
        let duration = self
            .service(service_id)
            .map(|s| s.duration_min)
            .ok_or_else(|| SalonError::not_found("Service", service_id))?;
        if self.client(client_id).is_none() {
            return Err(SalonError::not_found("Client", client_id));
        }
        if self.master(master_id).is_none() {
            return Err(SalonError::not_found("Master", master_id));
        }

        let end = start + Duration::minutes(i64::from(duration));
        let date = start.date();

        let windows = self.schedules_for(master_id, date);
        if windows.is_empty() {
            return Err(SalonError::MasterNotWorking {
                master_id,
                date: date.to_string(),
            });
        }
        if !windows.iter().any(|w| w.contains(start, end)) {
            return Err(SalonError::OutsideWorkingHours {
                master_id,
                start: start.format("%Y-%m-%d %H:%M").to_string(),
                end: end.format("%H:%M").to_string(),
            });
        }

        if let Some(taken) = self
            .state
            .appointments
            .iter()
            .find(|a| a.master_id == master_id && a.overlaps(start, end))
        {
            return Err(SalonError::SlotTaken {
                appointment_id: taken.id,
            });
        }

        let appt = Appointment {
            id: next_id(self.state.appointments.iter().map(|a| a.id)),
            client_id,
            master_id,
            service_id,
            start,
            end,
        };
        let mut next = self.state.clone();
        next.appointments.push(appt.clone());
        self.commit(next)?;

        tracing::info!(
            "Booked appointment {}: client {} with master {} at {}",
            appt.id,
            client_id,
            master_id,
            start
        );
        Ok(appt)
    }

    pub fn client_name(&self, client_id: u32) -> &str {
        self.client(client_id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_CLIENT)
    }

    pub fn master_name(&self, master_id: u32) -> &str {
        self.master(master_id)
            .map(|m| m.name.as_str())
            .unwrap_or(UNKNOWN_MASTER)
    }

    pub fn service_name(&self, service_id: u32) -> &str {
        self.service(service_id)
            .map(|s| s.name.as_str())
            .unwrap_or(UNKNOWN_SERVICE)
    }

    pub fn service_duration(&self, service_id: u32) -> u32 {
        self.service(service_id).map(|s| s.duration_min).unwrap_or(0)
    }

    /// Drops all clients, schedules and appointments. The catalog stays.
    pub fn clear_all(&mut self) -> Result<()> {
        self.commit(SalonSnapshot::default())?;
        tracing::info!("Cleared all salon data in {}", self.data_file);
        Ok(())
    }
}

fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().unwrap_or(0) + 1
}

/// Old files referenced services by name; swap that for the id when the name is known.
fn migrate_appointment(mut raw: Value, services: &[Service]) -> Value {
    if let Some(record) = raw.as_object_mut() {
        if record.contains_key("service_name") && !record.contains_key("service_id") {
            let name = record.get("service_name").and_then(Value::as_str);
            if let Some(service) = services.iter().find(|s| Some(s.name.as_str()) == name) {
                record.insert("service_id".to_string(), Value::from(service.id));
            }
            record.remove("service_name");
        }
    }
    raw
}
