use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use salon_booking::{export, LocalStorage, Salon, SalonError};
use tempfile::TempDir;

const DATA_FILE: &str = "salon_data.json";

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut salon = Salon::open(LocalStorage::new(temp_dir.path()), DATA_FILE).unwrap();
        let client = salon.add_client("Irina", "+7 900 111 22 33", "irina@example.com").unwrap();
        salon
            .add_schedule(2, date("2024-06-10"), time("09:00"), time("13:00"))
            .unwrap();
        salon
            .add_appointment(client.id, 2, 9, at("2024-06-10 11:00"))
            .unwrap();
    }

    let salon = Salon::open(LocalStorage::new(temp_dir.path()), DATA_FILE).unwrap();
    assert_eq!(salon.clients().len(), 1);
    assert_eq!(salon.schedules()[0].start_time, time("09:00"));

    let appt = &salon.appointments()[0];
    assert_eq!(appt.master_id, 2);
    assert_eq!(appt.end, at("2024-06-10 12:00"));

    let raw = std::fs::read_to_string(temp_dir.path().join(DATA_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["schedules"][0]["end_time"], "13:00");
    assert_eq!(json["appointments"][0]["start"], "2024-06-10T11:00:00");
}

#[test]
fn test_conflicts_are_checked_against_persisted_bookings() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut salon = Salon::open(LocalStorage::new(temp_dir.path()), DATA_FILE).unwrap();
        salon.add_client("Irina", "1", "i@x").unwrap();
        salon
            .add_schedule(1, date("2024-06-10"), time("10:00"), time("18:00"))
            .unwrap();
        salon.add_appointment(1, 1, 15, at("2024-06-10 10:00")).unwrap();
    }

    let mut salon = Salon::open(LocalStorage::new(temp_dir.path()), DATA_FILE).unwrap();
    let err = salon
        .add_appointment(1, 1, 4, at("2024-06-10 12:45"))
        .unwrap_err();
    assert!(matches!(err, SalonError::SlotTaken { appointment_id: 1 }));

    let appt = salon.add_appointment(1, 1, 4, at("2024-06-10 13:00")).unwrap();
    assert_eq!(appt.id, 2);
}

#[test]
fn test_legacy_file_is_migrated_on_open() {
    let temp_dir = TempDir::new().unwrap();
    let legacy = r#"{
  "clients": [{"id": 1, "name": "Irina", "phone": "1", "email": "i@x"}],
  "appointments": [
    {"id": 3, "client_id": 1, "master_id": 1, "service_name": "Toning",
     "start": "2024-06-10T10:00:00", "end": "2024-06-10T11:00:00"}
  ],
  "schedules": []
}"#;
    std::fs::write(temp_dir.path().join(DATA_FILE), legacy).unwrap();

    let salon = Salon::open(LocalStorage::new(temp_dir.path()), DATA_FILE).unwrap();
    assert_eq!(salon.appointments()[0].service_id, 9);

    let raw = std::fs::read_to_string(temp_dir.path().join(DATA_FILE)).unwrap();
    assert!(!raw.contains("service_name"));
    assert!(raw.contains("\"service_id\": 9"));
}

#[test]
fn test_csv_export_is_chronological() {
    let temp_dir = TempDir::new().unwrap();
    let mut salon = Salon::open(LocalStorage::new(temp_dir.path()), DATA_FILE).unwrap();
    salon.add_client("Irina", "1", "i@x").unwrap();
    salon.add_client("Petr", "2", "p@x").unwrap();
    salon
        .add_schedule(4, date("2024-06-10"), time("10:00"), time("18:00"))
        .unwrap();
    salon.add_appointment(2, 4, 2, at("2024-06-10 15:00")).unwrap();
    salon.add_appointment(1, 4, 6, at("2024-06-10 10:00")).unwrap();

    let mut out = Vec::new();
    let rows = export::export_appointments_csv(&salon, &mut out).unwrap();
    assert_eq!(rows, 2);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "id,date,start,end,duration_min,master,client,service,price"
    );
    assert_eq!(lines[1], "2,2024-06-10,10:00,10:20,20,Dmitry,Irina,Clipper cut,500.0");
    assert!(lines[2].starts_with("1,2024-06-10,15:00,15:45,45,Dmitry,Petr,"));
}

#[test]
fn test_clear_all_persists_empty_state() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut salon = Salon::open(LocalStorage::new(temp_dir.path()), DATA_FILE).unwrap();
        salon.add_client("Irina", "1", "i@x").unwrap();
        salon.clear_all().unwrap();
    }

    let salon = Salon::open(LocalStorage::new(temp_dir.path()), DATA_FILE).unwrap();
    assert!(salon.clients().is_empty());
    assert_eq!(salon.masters().len(), 5);
}
