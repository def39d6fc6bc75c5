use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub category: String,
    pub name: String,
    pub duration_min: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Master {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A working window of one master on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: u32,
    pub master_id: u32,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
}

impl ScheduleItem {
    fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    fn ends_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    pub fn contains(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start >= self.starts_at() && end <= self.ends_at()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub client_id: u32,
    pub master_id: u32,
    pub service_id: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Appointment {
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Half-open overlap: an appointment ending at 11:00 does not clash with one starting at 11:00.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        !(end <= self.start || start >= self.end)
    }
}

/// Everything that is persisted. Services and masters come from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalonSnapshot {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub schedules: Vec<ScheduleItem>,
}

mod hh_mm {
    use crate::utils::validation::{parse_time, TIME_FORMAT};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_schedule_item_uses_short_times_on_disk() {
        let item = ScheduleItem {
            id: 1,
            master_id: 2,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["start_time"], "09:00");
        assert_eq!(json["end_time"], "18:30");
    }

    #[test]
    fn test_appointment_timestamps_are_iso() {
        let raw = r#"{"id":1,"client_id":1,"master_id":1,"service_id":2,
            "start":"2024-05-01T10:00:00","end":"2024-05-01T10:45:00"}"#;
        let appt: Appointment = serde_json::from_str(raw).unwrap();
        assert_eq!(appt.start, at("2024-05-01 10:00"));
        assert_eq!(
            serde_json::to_value(&appt).unwrap()["end"],
            "2024-05-01T10:45:00"
        );
    }

    #[test]
    fn test_overlap_is_half_open() {
        let appt = Appointment {
            id: 1,
            client_id: 1,
            master_id: 1,
            service_id: 1,
            start: at("2024-05-01 10:00"),
            end: at("2024-05-01 11:00"),
        };
        assert!(!appt.overlaps(at("2024-05-01 11:00"), at("2024-05-01 11:30")));
        assert!(!appt.overlaps(at("2024-05-01 09:00"), at("2024-05-01 10:00")));
        assert!(appt.overlaps(at("2024-05-01 10:59"), at("2024-05-01 11:30")));
        assert!(appt.overlaps(at("2024-05-01 09:00"), at("2024-05-01 12:00")));
    }
}
