pub mod booking;
pub mod form;

pub use booking::{Booking, Occasion};
pub use form::{FormErrors, FormField, FormPhase, SubmitEvent};
