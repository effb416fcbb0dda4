//! Ready-to-run eframe app hosting the sleep dial, plus the unified run
//! helper.

use chrono::NaiveTime;
use eframe::egui;

use crate::dial::DialPicker;
use crate::style::DialStyle;
use crate::time::{SleepDuration, TimeOfDay};
use crate::widget::sleep_dial;

/// Configuration for [`run_sleepdial`].
pub struct SleepDialConfig {
    /// Window title. `None` uses the default.
    pub title: Option<String>,
    /// Initial bed time.
    pub bed_time: TimeOfDay,
    /// Initial wake time.
    pub wake_time: TimeOfDay,
    /// Dial appearance.
    pub style: DialStyle,
    /// Optionally pre-built native options (viewport settings etc.).
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for SleepDialConfig {
    fn default() -> Self {
        Self {
            title: None,
            bed_time: TimeOfDay::new(23, 0),
            wake_time: TimeOfDay::new(7, 0),
            style: DialStyle::default(),
            native_options: None,
        }
    }
}

/// Demo application: the dial with live bed/wake/duration readouts.
pub struct SleepDialApp {
    picker: DialPicker,
    style: DialStyle,
}

impl SleepDialApp {
    pub fn new(bed: TimeOfDay, wake: TimeOfDay, style: DialStyle) -> Self {
        Self {
            picker: DialPicker::with_times(bed, wake),
            style,
        }
    }

    /// Access the underlying picker, e.g. to attach a change listener.
    pub fn picker_mut(&mut self) -> &mut DialPicker {
        &mut self.picker
    }
}

/// 12-hour clock readout, `h:mm am/pm`.
fn format_clock(t: TimeOfDay) -> String {
    NaiveTime::from(t).format("%-I:%M %p").to_string()
}

impl eframe::App for SleepDialApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("readout").show(ctx, |ui| {
            let bed = self.picker.bed_time();
            let wake = self.picker.wake_time();
            let duration = SleepDuration::between(bed, wake);
            ui.horizontal(|ui| {
                ui.label(format!("Bed time: {}", format_clock(bed)));
                ui.separator();
                ui.label(format!("Wake time: {}", format_clock(wake)));
                ui.separator();
                if duration.minutes > 0 {
                    ui.label(format!(
                        "{} h {} min of sleep",
                        duration.hours, duration.minutes
                    ));
                } else {
                    ui.label(format!("{} h of sleep", duration.hours));
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            sleep_dial(ui, &mut self.picker, &self.style);
        });
    }
}

/// Run the sleep dial demo window with default title and size.
/// Unified entry point for the native UI.
pub fn run_sleepdial(cfg: SleepDialConfig) -> eframe::Result<()> {
    let mut options = cfg
        .native_options
        .unwrap_or_else(eframe::NativeOptions::default);
    options.viewport = egui::ViewportBuilder::default().with_inner_size([480.0, 560.0]);
    let title = cfg
        .title
        .clone()
        .unwrap_or_else(|| "Sleep dial".to_string());
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SleepDialApp::new(
                cfg.bed_time,
                cfg.wake_time,
                cfg.style.clone(),
            )))
        }),
    )
}
