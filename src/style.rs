//! DialStyle: visual styling for the picker dial.

use eframe::egui;

/// The visual presentation of the dial (colors, stroke widths, scale
/// metrics). Built once and passed by reference each frame; the drawing
/// code never mutates it.
#[derive(Debug, Clone)]
pub struct DialStyle {
    /// Color of the progress arc between the two handles.
    pub progress_color: egui::Color32,
    /// Color of the full background track circle.
    pub track_color: egui::Color32,
    /// Color of the hour division ticks.
    pub division_color: egui::Color32,
    /// Color of the hour labels.
    pub label_color: egui::Color32,
    /// Stroke width of the progress arc.
    pub progress_width: f32,
    /// Stroke width of the background track.
    pub track_width: f32,
    /// Gap between the inside of the track and the division ticks.
    pub division_offset: f32,
    /// Length of each division tick.
    pub division_length: f32,
    /// Stroke width of each division tick.
    pub division_width: f32,
    /// Distance from the track to the center of each hour label.
    pub label_offset: f32,
    /// Hour label text size in points.
    pub label_size: f32,
    /// Radius of each handle knob.
    pub handle_radius: f32,
    /// Fill color of the handle knobs.
    pub handle_color: egui::Color32,
    /// Outline color of the handle knobs.
    pub handle_outline_color: egui::Color32,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            progress_color: egui::Color32::WHITE,
            track_color: egui::Color32::from_rgb(0xe0, 0xe0, 0xe0),
            division_color: egui::Color32::from_rgb(0xe0, 0xe0, 0xe0),
            label_color: egui::Color32::WHITE,
            progress_width: 8.0,
            track_width: 8.0,
            division_offset: 12.0,
            division_length: 8.0,
            division_width: 2.0,
            label_offset: 36.0,
            label_size: 13.0,
            handle_radius: 14.0,
            handle_color: egui::Color32::WHITE,
            handle_outline_color: egui::Color32::from_rgb(0x90, 0x90, 0x90),
        }
    }
}
