use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reservation of a service for a customer at a date and time slot.
///
/// `service_id` is a plain reference, not a foreign key: deleting a service
/// leaves its bookings in place with a dangling `service_id` and the
/// `service_name` snapshot taken at booking time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub service_id: String,
    pub service_name: String,
    pub date: String,
    pub time: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Creation payload: a `Booking` minus the server-assigned `id` and
/// `created_at`. `status` defaults to pending when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub service_id: String,
    pub service_name: String,
    pub date: String,
    pub time: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

/// Partial update. `id` and `created_at` are assigned at creation and cannot
/// be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

impl Booking {
    pub fn apply(&mut self, patch: BookingPatch) {
        if let Some(service_id) = patch.service_id {
            self.service_id = service_id;
        }
        if let Some(service_name) = patch.service_name {
            self.service_name = service_name;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(customer_name) = patch.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(customer_email) = patch.customer_email {
            self.customer_email = customer_email;
        }
        if let Some(customer_phone) = patch.customer_phone {
            self.customer_phone = customer_phone;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}
