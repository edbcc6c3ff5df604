pub mod app;
pub mod bookings;
pub mod store;
