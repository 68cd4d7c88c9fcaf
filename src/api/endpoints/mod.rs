//! API endpoint handlers, one module per resource.
//!
//! Every handler validates first, then opens its own connection, so a
//! rejected request never touches the store.

pub mod appointments;
pub mod doctors;
pub mod health;
pub mod patients;
