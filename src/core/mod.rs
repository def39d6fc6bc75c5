pub mod agenda;
pub mod export;
pub mod salon;

pub use crate::domain::model::{Appointment, Client, Master, SalonSnapshot, ScheduleItem, Service};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
