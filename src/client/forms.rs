//! Presence and range checks for the booking and service forms. These run
//! on the client only; the server accepts payloads as given.

use crate::errors::AppError;
use crate::models::slot;
use crate::models::{BookingStatus, NewBooking, NewService};

#[derive(Debug, Default, Clone)]
pub struct BookingForm {
    pub service_id: String,
    pub service_name: String,
    pub date: String,
    pub time: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub status: Option<BookingStatus>,
}

impl BookingForm {
    /// Checks every required field and the time slot, returning the payload
    /// to submit or a user-facing message that blocks submission.
    pub fn validate(self) -> Result<NewBooking, AppError> {
        let required = [
            &self.service_id,
            &self.service_name,
            &self.date,
            &self.time,
            &self.customer_name,
            &self.customer_email,
            &self.customer_phone,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(AppError::Validation(
                "Please fill in all required fields.".to_string(),
            ));
        }
        if !slot::is_valid(&self.time) {
            return Err(AppError::Validation(
                "Please choose one of the available time slots.".to_string(),
            ));
        }

        Ok(NewBooking {
            service_id: self.service_id,
            service_name: self.service_name,
            date: self.date,
            time: self.time,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            status: self.status,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32,
    pub category: String,
    pub image: String,
    pub available: bool,
}

impl ServiceForm {
    pub fn validate(self) -> Result<NewService, AppError> {
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || self.category.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Please fill in all required fields.".to_string(),
            ));
        }
        if self.price < 0.0 {
            return Err(AppError::Validation(
                "Price cannot be negative.".to_string(),
            ));
        }
        if self.duration == 0 {
            return Err(AppError::Validation(
                "Duration must be at least one minute.".to_string(),
            ));
        }

        // image may be empty; a placeholder is shown instead.
        Ok(NewService {
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
            category: self.category,
            image: self.image,
            available: self.available,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_booking() -> BookingForm {
        BookingForm {
            service_id: "svc-1".to_string(),
            service_name: "Haircut".to_string(),
            date: "2024-06-01".to_string(),
            time: "10:00".to_string(),
            customer_name: "A".to_string(),
            customer_email: "a@x.com".to_string(),
            customer_phone: "555".to_string(),
            status: None,
        }
    }

    #[test]
    fn complete_booking_form_passes() {
        let new = filled_booking().validate().unwrap();
        assert_eq!(new.time, "10:00");
        assert!(new.status.is_none());
    }

    #[test]
    fn missing_customer_name_blocks_submission() {
        let mut form = filled_booking();
        form.customer_name = String::new();

        let msg = form.validate().unwrap_err().to_string();
        assert!(msg.contains("required fields"));
    }

    #[test]
    fn off_grid_time_blocks_submission() {
        let mut form = filled_booking();
        form.time = "10:15".to_string();

        let msg = form.validate().unwrap_err().to_string();
        assert!(msg.contains("time slots"));
    }

    fn filled_service() -> ServiceForm {
        ServiceForm {
            name: "Haircut".to_string(),
            description: "Basic cut".to_string(),
            price: 30.0,
            duration: 30,
            category: "Beauty".to_string(),
            image: String::new(),
            available: true,
        }
    }

    #[test]
    fn complete_service_form_passes() {
        let new = filled_service().validate().unwrap();
        assert_eq!(new.name, "Haircut");
        assert!(new.image.is_empty());
    }

    #[test]
    fn negative_price_blocks_submission() {
        let mut form = filled_service();
        form.price = -1.0;

        assert!(form.validate().unwrap_err().to_string().contains("negative"));
    }

    #[test]
    fn zero_duration_blocks_submission() {
        let mut form = filled_service();
        form.duration = 0;

        assert!(form.validate().unwrap_err().to_string().contains("Duration"));
    }
}
