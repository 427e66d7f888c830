// lib/src/storage_engine/storage_engine.rs
use async_trait::async_trait;
use models::{Appointment, AppointmentChanges, AppointmentId, BookingResult, NewAppointment};
use std::fmt::Debug;

/// Owner of the appointment collection and its id counter.
///
/// Every method is atomic with respect to the double-booking and id
/// invariants; callers only ever receive copies of stored records.
#[async_trait]
pub trait AppointmentStorage: Send + Sync + Debug + 'static {
    /// Books a slot. Fails with `DoctorNotFound` or `TimeConflict`.
    async fn create(&self, new: NewAppointment) -> BookingResult<Appointment>;

    /// All live appointments in insertion order.
    async fn list(&self) -> Vec<Appointment>;

    async fn get(&self, id: AppointmentId) -> BookingResult<Appointment>;

    /// Replaces date, time and comment in place.
    async fn update(&self, id: AppointmentId, changes: AppointmentChanges) -> BookingResult<Appointment>;

    /// Removes the record permanently and returns it.
    async fn delete(&self, id: AppointmentId) -> BookingResult<Appointment>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn get_type(&self) -> &'static str;
}
