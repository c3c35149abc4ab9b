pub mod forms;
pub mod http;

use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::{Booking, BookingPatch, NewBooking, NewService, Service, ServicePatch};

pub use http::HttpApi;

/// Transport seam between the client cache and the HTTP boundary. The real
/// implementation is [`HttpApi`]; tests substitute their own.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn fetch_services(&self) -> anyhow::Result<Vec<Service>>;
    async fn fetch_bookings(&self) -> anyhow::Result<Vec<Booking>>;
    async fn create_service(&self, new: &NewService) -> anyhow::Result<Service>;
    async fn update_service(&self, id: &str, patch: &ServicePatch) -> anyhow::Result<Service>;
    async fn delete_service(&self, id: &str) -> anyhow::Result<Service>;
    async fn create_booking(&self, new: &NewBooking) -> anyhow::Result<Booking>;
    async fn update_booking(&self, id: &str, patch: &BookingPatch) -> anyhow::Result<Booking>;
}

/// Client-side data-access layer: a soft copy of the server's lists, kept
/// approximately in sync by applying each mutation locally after the network
/// call succeeds. On failure the error is logged and the cache left as-is,
/// so client and server can diverge silently until the next [`refresh`].
/// Nothing is retried.
///
/// [`refresh`]: BookingClient::refresh
pub struct BookingClient {
    api: Box<dyn BookingApi>,
    services: Mutex<Vec<Service>>,
    bookings: Mutex<Vec<Booking>>,
}

impl BookingClient {
    pub fn new(api: Box<dyn BookingApi>) -> Self {
        Self {
            api,
            services: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
        }
    }

    /// Creates a client and issues the two initial list fetches. A failed
    /// fetch leaves that cache empty.
    pub async fn connect(api: Box<dyn BookingApi>) -> Self {
        let client = Self::new(api);
        client.refresh().await;
        client
    }

    /// Refetches both lists. Each list is replaced only on success.
    pub async fn refresh(&self) {
        match self.api.fetch_services().await {
            Ok(list) => *self.services.lock().unwrap() = list,
            Err(err) => tracing::error!("failed to fetch services: {err:#}"),
        }
        match self.api.fetch_bookings().await {
            Ok(list) => *self.bookings.lock().unwrap() = list,
            Err(err) => tracing::error!("failed to fetch bookings: {err:#}"),
        }
    }

    pub fn services(&self) -> Vec<Service> {
        self.services.lock().unwrap().clone()
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    pub async fn add_service(&self, new: NewService) -> Option<Service> {
        match self.api.create_service(&new).await {
            Ok(created) => {
                self.services.lock().unwrap().push(created.clone());
                Some(created)
            }
            Err(err) => {
                tracing::error!("failed to add service: {err:#}");
                None
            }
        }
    }

    pub async fn update_service(&self, id: &str, patch: ServicePatch) -> Option<Service> {
        match self.api.update_service(id, &patch).await {
            Ok(_) => {
                let mut services = self.services.lock().unwrap();
                let service = services.iter_mut().find(|s| s.id == id)?;
                service.apply(patch);
                Some(service.clone())
            }
            Err(err) => {
                tracing::error!("failed to update service {id}: {err:#}");
                None
            }
        }
    }

    pub async fn delete_service(&self, id: &str) -> Option<Service> {
        match self.api.delete_service(id).await {
            Ok(removed) => {
                self.services.lock().unwrap().retain(|s| s.id != id);
                Some(removed)
            }
            Err(err) => {
                tracing::error!("failed to delete service {id}: {err:#}");
                None
            }
        }
    }

    pub async fn add_booking(&self, new: NewBooking) -> Option<Booking> {
        match self.api.create_booking(&new).await {
            Ok(created) => {
                self.bookings.lock().unwrap().push(created.clone());
                Some(created)
            }
            Err(err) => {
                tracing::error!("failed to add booking: {err:#}");
                None
            }
        }
    }

    pub async fn update_booking(&self, id: &str, patch: BookingPatch) -> Option<Booking> {
        match self.api.update_booking(id, &patch).await {
            Ok(_) => {
                let mut bookings = self.bookings.lock().unwrap();
                let booking = bookings.iter_mut().find(|b| b.id == id)?;
                booking.apply(patch);
                Some(booking.clone())
            }
            Err(err) => {
                tracing::error!("failed to update booking {id}: {err:#}");
                None
            }
        }
    }
}
