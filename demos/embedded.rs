//! Example: Embedding the dial widget in your own egui application
//!
//! What it demonstrates
//! - Driving `sleep_dial` directly with your own `DialPicker` and `DialStyle`.
//! - Registering a change listener that observes every accepted drag step.
//!
//! How to run
//! ```bash
//! cargo run --example embedded
//! ```
//! The window shows the dial plus a log line with the most recent
//! listener notification.

use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::{egui, NativeOptions};
use sleepdial::{sleep_dial, DialPicker, DialStyle, SleepDuration, TimeOfDay};

struct EmbedApp {
    picker: DialPicker,
    style: DialStyle,
    changes: Receiver<(TimeOfDay, TimeOfDay)>,
    last_change: Option<(TimeOfDay, TimeOfDay)>,
}

impl EmbedApp {
    fn new() -> Self {
        let (tx, rx): (Sender<(TimeOfDay, TimeOfDay)>, _) = channel();
        let mut picker = DialPicker::new();
        picker.set_on_change(move |bed, wake| {
            let _ = tx.send((bed, wake));
        });
        Self {
            picker,
            style: DialStyle::default(),
            changes: rx,
            last_change: None,
        }
    }
}

impl eframe::App for EmbedApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(pair) = self.changes.try_recv() {
            self.last_change = Some(pair);
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Embedded sleep dial");
            match self.last_change {
                Some((bed, wake)) => {
                    let d = SleepDuration::between(bed, wake);
                    ui.label(format!("last change: bed {bed}, wake {wake} ({d})"));
                }
                None => {
                    ui.label("drag a handle to see listener notifications");
                }
            }
            sleep_dial(ui, &mut self.picker, &self.style);
        });
    }
}

fn main() -> eframe::Result<()> {
    eframe::run_native(
        "Embedded sleep dial",
        NativeOptions::default(),
        Box::new(|_cc| Ok(Box::new(EmbedApp::new()))),
    )
}
