pub mod booking;
pub mod service;
pub mod slot;

pub use booking::{Booking, BookingPatch, BookingStatus, NewBooking};
pub use service::{NewService, Service, ServicePatch};
