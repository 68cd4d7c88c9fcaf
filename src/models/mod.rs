mod appointment;
mod doctor;
mod entity;
mod patient;

pub use appointment::*;
pub use doctor::*;
pub use entity::*;
pub use patient::*;
