use anyhow::Context;
use async_trait::async_trait;

use super::BookingApi;
use crate::models::{Booking, BookingPatch, NewBooking, NewService, Service, ServicePatch};

/// reqwest-backed transport talking to the `/api` routes.
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Reads the base URL from `API_BASE_URL`, defaulting to the local server.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string()),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl BookingApi for HttpApi {
    async fn fetch_services(&self) -> anyhow::Result<Vec<Service>> {
        self.client
            .get(self.url("/api/services"))
            .send()
            .await
            .context("service fetch failed")?
            .error_for_status()
            .context("service fetch returned error")?
            .json()
            .await
            .context("invalid service list payload")
    }

    async fn fetch_bookings(&self) -> anyhow::Result<Vec<Booking>> {
        self.client
            .get(self.url("/api/bookings"))
            .send()
            .await
            .context("booking fetch failed")?
            .error_for_status()
            .context("booking fetch returned error")?
            .json()
            .await
            .context("invalid booking list payload")
    }

    async fn create_service(&self, new: &NewService) -> anyhow::Result<Service> {
        self.client
            .post(self.url("/api/services"))
            .json(new)
            .send()
            .await
            .context("failed to add service")?
            .error_for_status()
            .context("add service returned error")?
            .json()
            .await
            .context("invalid created service payload")
    }

    async fn update_service(&self, id: &str, patch: &ServicePatch) -> anyhow::Result<Service> {
        self.client
            .put(self.url(&format!("/api/services/{id}")))
            .json(patch)
            .send()
            .await
            .context("failed to update service")?
            .error_for_status()
            .context("update service returned error")?
            .json()
            .await
            .context("invalid merged service payload")
    }

    async fn delete_service(&self, id: &str) -> anyhow::Result<Service> {
        self.client
            .delete(self.url(&format!("/api/services/{id}")))
            .send()
            .await
            .context("failed to delete service")?
            .error_for_status()
            .context("delete service returned error")?
            .json()
            .await
            .context("invalid removed service payload")
    }

    async fn create_booking(&self, new: &NewBooking) -> anyhow::Result<Booking> {
        self.client
            .post(self.url("/api/bookings"))
            .json(new)
            .send()
            .await
            .context("failed to add booking")?
            .error_for_status()
            .context("add booking returned error")?
            .json()
            .await
            .context("invalid created booking payload")
    }

    async fn update_booking(&self, id: &str, patch: &BookingPatch) -> anyhow::Result<Booking> {
        self.client
            .put(self.url(&format!("/api/bookings/{id}")))
            .json(patch)
            .send()
            .await
            .context("failed to update booking")?
            .error_for_status()
            .context("update booking returned error")?
            .json()
            .await
            .context("invalid merged booking payload")
    }
}
