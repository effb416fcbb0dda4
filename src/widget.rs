//! egui widget for the sleep dial.
//!
//! Pure drawing and input translation: the widget allocates a square
//! region, feeds the frame's layout facts and pointer events into the
//! [`DialPicker`], and paints the track, progress arc, hour scale and the
//! two handle knobs from the controller's geometry. It keeps no angle
//! state of its own.

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::dial::{DialPicker, Handle};
use crate::style::DialStyle;

/// Clock-face labels, index 0 at the top of the dial.
const HOUR_LABELS: [u32; 12] = [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// How far beyond its visual radius a handle accepts a press.
const GRAB_FACTOR: f32 = 1.8;

/// Show the dial, taking the largest square that fits the available space.
///
/// Returns the widget's [`egui::Response`]; `changed()` is set on every
/// frame in which a drag moved a handle.
pub fn sleep_dial(ui: &mut egui::Ui, picker: &mut DialPicker, style: &DialStyle) -> egui::Response {
    let side = ui.available_size().min_elem();
    let (rect, mut response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());

    let center = rect.center();
    let inset = style.handle_radius.max(style.track_width / 2.0);
    let radius = (side / 2.0 - inset).max(0.0);
    picker.set_layout(center, radius);
    sync_handle_bounds(picker, style);

    // Input: translate the egui drag lifecycle into controller events.
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            picker.pointer_down(pos);
        }
    }
    // Skip the press frame itself; only genuine moves rotate the handle.
    if response.dragged() && !response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            if picker.pointer_move(pos) {
                response.mark_changed();
            }
        }
    }
    if response.drag_stopped() {
        picker.pointer_up();
    }
    // Keep the stored bounds in step with any angle change from this frame.
    sync_handle_bounds(picker, style);

    if ui.is_rect_visible(rect) {
        paint_dial(ui, picker, style, center, radius);
    }
    response
}

fn sync_handle_bounds(picker: &mut DialPicker, style: &DialStyle) {
    let grab = Vec2::splat(2.0 * style.handle_radius * GRAB_FACTOR);
    for handle in [Handle::Sleep, Handle::Wake] {
        let bounds = Rect::from_center_size(picker.handle_position(handle), grab);
        picker.set_handle_bounds(handle, bounds);
    }
}

fn paint_dial(ui: &egui::Ui, picker: &DialPicker, style: &DialStyle, center: Pos2, radius: f32) {
    let painter = ui.painter();

    // Background track.
    painter.circle_stroke(
        center,
        radius,
        Stroke::new(style.track_width, style.track_color),
    );

    // Progress arc from the sleep handle, sweeping clockwise to the wake
    // handle. Approximated as a polyline; one segment per ~3°.
    let sweep = picker.sweep_degrees();
    if sweep > 0.0 {
        let segments = (sweep / 3.0).ceil().max(1.0) as usize;
        let step = sweep / segments as f64;
        let points: Vec<Pos2> = (0..=segments)
            .map(|i| {
                let a = (picker.sleep_angle() - i as f64 * step).to_radians();
                point_on_circle(center, radius, a)
            })
            .collect();
        painter.add(Shape::line(
            points,
            Stroke::new(style.progress_width, style.progress_color),
        ));
    }

    // Hour divisions and labels, twelve of them, "12" on top.
    let tick_outer = radius - style.track_width / 2.0 - style.division_offset;
    let tick_inner = tick_outer - style.division_length;
    let label_radius = radius - style.track_width / 2.0 - style.label_offset;
    for (index, label) in HOUR_LABELS.iter().enumerate() {
        // Screen coordinates (y down): -90° is the top of the dial.
        let a = ((index as f64) * 30.0 - 90.0).to_radians();
        let dir = Vec2::new(a.cos() as f32, a.sin() as f32);
        painter.line_segment(
            [center + tick_outer * dir, center + tick_inner * dir],
            Stroke::new(style.division_width, style.division_color),
        );
        painter.text(
            center + label_radius * dir,
            Align2::CENTER_CENTER,
            label.to_string(),
            FontId::proportional(style.label_size),
            style.label_color,
        );
    }

    // Handle knobs.
    for handle in [Handle::Sleep, Handle::Wake] {
        let pos = picker.handle_position(handle);
        painter.circle_filled(pos, style.handle_radius, style.handle_color);
        painter.circle_stroke(
            pos,
            style.handle_radius,
            Stroke::new(1.0, style.handle_outline_color),
        );
    }
}

fn point_on_circle(center: Pos2, radius: f32, angle_rad: f64) -> Pos2 {
    Pos2::new(
        center.x + radius * angle_rad.cos() as f32,
        center.y - radius * angle_rad.sin() as f32,
    )
}
