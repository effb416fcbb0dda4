//! SleepDial crate root: re-exports and module wiring.
//!
//! A circular drag-to-set dual-time picker built on egui/eframe: the user
//! drags a sleep handle and a wake handle around a clock dial and the
//! widget reports the resulting bed/wake times and the wrap-aware sleep
//! duration.
//!
//! The crate splits into cohesive modules:
//! - `angle`: pure angle/time math (normalization, snapping, vector deltas)
//! - `time`: times of day and the duration between them
//! - `dial`: the drag controller and its gesture state machine
//! - `style`: immutable visual configuration for the dial
//! - `widget`: the egui rendering/input layer
//! - `app`: a ready-to-run eframe demo and the `run_sleepdial` helper

pub mod angle;
pub mod app;
pub mod dial;
pub mod style;
pub mod time;
pub mod widget;

// Public re-exports for a compact external API
pub use app::{run_sleepdial, SleepDialApp, SleepDialConfig};
pub use dial::{DialPicker, Handle};
pub use style::DialStyle;
pub use time::{SleepDuration, TimeOfDay};
pub use widget::sleep_dial;
