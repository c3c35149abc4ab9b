pub mod memory;

use chrono::Utc;

use crate::ids;
use crate::models::{
    Booking, BookingPatch, BookingStatus, NewBooking, NewService, Service, ServicePatch,
};
use memory::{MemoryRepo, Record};

impl Record for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Booking {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The process-lifetime store: one insertion-ordered collection per resource,
/// lost on restart. The single source of truth; clients hold soft copies.
pub struct Store {
    services: MemoryRepo<Service>,
    bookings: MemoryRepo<Booking>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            services: MemoryRepo::new(),
            bookings: MemoryRepo::new(),
        }
    }

    pub fn list_services(&self) -> Vec<Service> {
        self.services.list()
    }

    pub fn get_service(&self, id: &str) -> Option<Service> {
        self.services.get(id)
    }

    pub fn create_service(&self, new: NewService) -> Service {
        self.services.insert(Service {
            id: ids::generate(),
            name: new.name,
            description: new.description,
            price: new.price,
            duration: new.duration,
            category: new.category,
            image: new.image,
            available: new.available,
        })
    }

    pub fn update_service(&self, id: &str, patch: ServicePatch) -> Option<Service> {
        self.services.update_with(id, |s| s.apply(patch))
    }

    /// Removes a service. Does not cascade: its bookings keep their
    /// `service_id` and `service_name` snapshot, now dangling.
    pub fn delete_service(&self, id: &str) -> Option<Service> {
        self.services.delete(id)
    }

    pub fn list_bookings(&self) -> Vec<Booking> {
        self.bookings.list()
    }

    pub fn get_booking(&self, id: &str) -> Option<Booking> {
        self.bookings.get(id)
    }

    /// Stamps `created_at` and defaults `status` to pending. No slot overlap
    /// check: two bookings for the same service, date, and time both succeed.
    pub fn create_booking(&self, new: NewBooking) -> Booking {
        self.bookings.insert(Booking {
            id: ids::generate(),
            service_id: new.service_id,
            service_name: new.service_name,
            date: new.date,
            time: new.time,
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            customer_phone: new.customer_phone,
            status: new.status.unwrap_or(BookingStatus::Pending),
            created_at: Utc::now(),
        })
    }

    pub fn update_booking(&self, id: &str, patch: BookingPatch) -> Option<Booking> {
        self.bookings.update_with(id, |b| b.apply(patch))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn haircut() -> NewService {
        NewService {
            name: "Haircut".to_string(),
            description: "Basic cut".to_string(),
            price: 30.0,
            duration: 30,
            category: "Beauty".to_string(),
            image: String::new(),
            available: true,
        }
    }

    fn booking_for(service: &Service) -> NewBooking {
        NewBooking {
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            date: "2024-06-01".to_string(),
            time: "10:00".to_string(),
            customer_name: "A".to_string(),
            customer_email: "a@x.com".to_string(),
            customer_phone: "555".to_string(),
            status: None,
        }
    }

    #[test]
    fn created_services_get_distinct_ids() {
        let store = Store::new();
        let a = store.create_service(haircut());
        let b = store.create_service(haircut());

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn service_patch_preserves_absent_fields() {
        let store = Store::new();
        let created = store.create_service(haircut());

        let merged = store
            .update_service(
                &created.id,
                ServicePatch {
                    price: Some(35.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(merged.price, 35.0);
        assert_eq!(merged.name, "Haircut");
        assert_eq!(merged.duration, 30);
        assert!(merged.available);
    }

    #[test]
    fn deleted_service_is_gone() {
        let store = Store::new();
        let created = store.create_service(haircut());

        let removed = store.delete_service(&created.id).unwrap();
        assert_eq!(removed.id, created.id);
        assert!(store.get_service(&created.id).is_none());
        assert!(store.delete_service(&created.id).is_none());
    }

    #[test]
    fn booking_status_defaults_to_pending() {
        let store = Store::new();
        let service = store.create_service(haircut());
        let booking = store.create_booking(booking_for(&service));

        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn booking_keeps_caller_status_when_given() {
        let store = Store::new();
        let service = store.create_service(haircut());
        let mut new = booking_for(&service);
        new.status = Some(BookingStatus::Confirmed);

        let booking = store.create_booking(new);
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn booking_created_at_is_stamped_at_request_time() {
        let store = Store::new();
        let service = store.create_service(haircut());

        let before = Utc::now();
        let booking = store.create_booking(booking_for(&service));
        let after = Utc::now();

        assert!(booking.created_at >= before);
        assert!(booking.created_at <= after);
    }

    #[test]
    fn double_booking_the_same_slot_is_accepted() {
        let store = Store::new();
        let service = store.create_service(haircut());

        let first = store.create_booking(booking_for(&service));
        let second = store.create_booking(booking_for(&service));

        assert_ne!(first.id, second.id);
        assert_eq!(store.list_bookings().len(), 2);
    }

    #[test]
    fn deleting_a_service_leaves_its_bookings_dangling() {
        let store = Store::new();
        let service = store.create_service(haircut());
        let booking = store.create_booking(booking_for(&service));

        store.delete_service(&service.id);

        let kept = store.get_booking(&booking.id).unwrap();
        assert_eq!(kept.service_id, service.id);
        assert_eq!(kept.service_name, "Haircut");
    }

    #[test]
    fn booking_patch_transitions_status_freely() {
        let store = Store::new();
        let service = store.create_service(haircut());
        let booking = store.create_booking(booking_for(&service));

        for status in [
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Pending,
        ] {
            let merged = store
                .update_booking(
                    &booking.id,
                    BookingPatch {
                        status: Some(status),
                        ..Default::default()
                    },
                )
                .unwrap();
            assert_eq!(merged.status, status);
        }

        // Other fields survived the status churn.
        let kept = store.get_booking(&booking.id).unwrap();
        assert_eq!(kept.customer_name, "A");
        assert_eq!(kept.date, "2024-06-01");
    }
}
