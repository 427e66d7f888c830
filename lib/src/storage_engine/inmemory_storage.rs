// lib/src/storage_engine/inmemory_storage.rs
use super::storage_engine::AppointmentStorage;
use crate::registry::DoctorRegistry;
use async_trait::async_trait;
use models::{
    Appointment, AppointmentChanges, AppointmentId, BookingError, BookingResult, NewAppointment,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug)]
struct AppointmentBook {
    appointments: Vec<Appointment>,
    next_id: AppointmentId,
}

impl AppointmentBook {
    fn position(&self, id: AppointmentId) -> BookingResult<usize> {
        self.appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or(BookingError::AppointmentNotFound(id))
    }
}

/// Process-local appointment store.
///
/// The collection and the id counter sit behind one lock, so a create's
/// conflict check and its insert are a single critical section.
#[derive(Debug)]
pub struct InMemoryAppointmentStorage {
    registry: Arc<DoctorRegistry>,
    book: RwLock<AppointmentBook>,
    check_update_conflicts: bool,
}

impl InMemoryAppointmentStorage {
    pub fn new(registry: Arc<DoctorRegistry>) -> Self {
        InMemoryAppointmentStorage {
            registry,
            book: RwLock::new(AppointmentBook {
                appointments: Vec::new(),
                next_id: 1,
            }),
            check_update_conflicts: true,
        }
    }

    /// When disabled, `update` may move an appointment onto an occupied slot.
    pub fn with_update_conflict_check(mut self, enabled: bool) -> Self {
        self.check_update_conflicts = enabled;
        self
    }
}

#[async_trait]
impl AppointmentStorage for InMemoryAppointmentStorage {
    async fn create(&self, new: NewAppointment) -> BookingResult<Appointment> {
        self.registry.find(new.doctor_id)?;

        let mut book = self.book.write().await;
        if book
            .appointments
            .iter()
            .any(|a| a.occupies(new.doctor_id, new.date, &new.time))
        {
            return Err(BookingError::TimeConflict {
                doctor_id: new.doctor_id,
                date: new.date,
                time: new.time,
            });
        }

        let id = book.next_id;
        book.next_id += 1;
        let appointment = Appointment::from_new(id, new);
        book.appointments.push(appointment.clone());
        info!(
            appointment_id = id,
            doctor_id = appointment.doctor_id,
            date = %appointment.date,
            time = %appointment.time,
            "appointment created"
        );
        Ok(appointment)
    }

    async fn list(&self) -> Vec<Appointment> {
        self.book.read().await.appointments.clone()
    }

    async fn get(&self, id: AppointmentId) -> BookingResult<Appointment> {
        let book = self.book.read().await;
        let index = book.position(id)?;
        Ok(book.appointments[index].clone())
    }

    async fn update(&self, id: AppointmentId, changes: AppointmentChanges) -> BookingResult<Appointment> {
        let mut book = self.book.write().await;
        let index = book.position(id)?;
        let doctor_id = book.appointments[index].doctor_id;

        if self.check_update_conflicts
            && book
                .appointments
                .iter()
                .any(|a| a.id != id && a.occupies(doctor_id, changes.date, &changes.time))
        {
            return Err(BookingError::TimeConflict {
                doctor_id,
                date: changes.date,
                time: changes.time,
            });
        }

        let appointment = &mut book.appointments[index];
        appointment.apply(changes);
        info!(appointment_id = id, date = %appointment.date, time = %appointment.time, "appointment updated");
        Ok(appointment.clone())
    }

    async fn delete(&self, id: AppointmentId) -> BookingResult<Appointment> {
        let mut book = self.book.write().await;
        let index = book.position(id)?;
        // Vec::remove keeps the remaining records in insertion order.
        let removed = book.appointments.remove(index);
        info!(appointment_id = id, "appointment deleted");
        debug!(remaining = book.appointments.len(), "appointment book size");
        Ok(removed)
    }

    async fn len(&self) -> usize {
        self.book.read().await.appointments.len()
    }

    fn get_type(&self) -> &'static str {
        "InMemory"
    }
}
