pub mod booking_form;
pub mod navigation;
pub mod storage;
pub mod time_slots;
