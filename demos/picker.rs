//! Example: The sleep dial demo window
//!
//! What it demonstrates
//! - Launching the bundled demo app with `run_sleepdial` and `SleepDialConfig`.
//! - Setting the initial bed/wake times (the classic 23:00 → 07:00 night).
//!
//! How to run
//! ```bash
//! cargo run --example picker
//! ```
//! Drag either handle around the dial; the readout at the bottom updates
//! with the snapped bed/wake times and the sleep duration.

use sleepdial::{run_sleepdial, SleepDialConfig, TimeOfDay};

fn main() -> eframe::Result<()> {
    let cfg = SleepDialConfig {
        title: Some("Sleep dial demo".to_string()),
        bed_time: TimeOfDay::new(23, 0),
        wake_time: TimeOfDay::new(7, 0),
        ..Default::default()
    };
    run_sleepdial(cfg)
}
