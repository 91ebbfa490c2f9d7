//! Small reusable form controls.
mod buttons;
mod fields;

pub use buttons::ActionButton;
pub use fields::{LabelSelect, SecondsField, TextField};
