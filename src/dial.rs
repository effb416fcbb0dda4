//! Drag/dial controller: owns the two handle angles and the single-gesture
//! drag state machine, with no rendering dependency.
//!
//! The rendering layer pushes layout facts in every pass (dial center and
//! radius, the screen-space bounds of the two handle knobs) and translates
//! raw pointer events into [`DialPicker::pointer_down`] /
//! [`DialPicker::pointer_move`] / [`DialPicker::pointer_up`]. The
//! controller integrates pointer motion as signed angle deltas — it never
//! jumps a handle to the absolute touch angle, which is what makes a drag
//! track smoothly across the 0°/360° seam and across full revolutions.
//!
//! Everything is synchronous and single-owner: `&mut self` on all mutating
//! entry points is the whole concurrency story.

use egui::{Pos2, Rect};

use crate::angle::{
    angle_between_vectors, angle_to_minutes, minutes_to_angle, normalize_360, normalize_720,
    snap_minutes,
};
use crate::time::TimeOfDay;

/// Times snapped to this grid when read out of the dial.
const STEP_MINUTES: i32 = 15;

/// One of the two draggable markers on the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// The bed-time handle.
    Sleep,
    /// The wake-time handle.
    Wake,
}

/// Callback invoked with the new `(bed_time, wake_time)` pair on every
/// accepted angle change.
pub type ChangeListener = Box<dyn FnMut(TimeOfDay, TimeOfDay)>;

/// State and interaction logic of the circular dual-time picker.
///
/// Angles live in the extended [0, 720) range (one spare lap) so that
/// incremental drag deltas accumulate without wrap ambiguity; see the
/// [`crate::angle`] module docs.
pub struct DialPicker {
    sleep_angle: f64,
    wake_angle: f64,
    active: Option<Handle>,
    center: Pos2,
    radius: f32,
    sleep_bounds: Option<Rect>,
    wake_bounds: Option<Rect>,
    listener: Option<ChangeListener>,
}

impl Default for DialPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DialPicker {
    /// A picker preset to the default 23:00 bed time and 07:00 wake time.
    pub fn new() -> Self {
        Self::with_times(TimeOfDay::new(23, 0), TimeOfDay::new(7, 0))
    }

    /// A picker starting at the given bed/wake pair.
    pub fn with_times(bed: TimeOfDay, wake: TimeOfDay) -> Self {
        Self {
            sleep_angle: minutes_to_angle(bed.total_minutes()),
            wake_angle: minutes_to_angle(wake.total_minutes()),
            active: None,
            center: Pos2::ZERO,
            radius: 0.0,
            sleep_bounds: None,
            wake_bounds: None,
            listener: None,
        }
    }

    /// Register the change listener. It fires synchronously on every
    /// operation that moves either angle, with no debouncing.
    pub fn set_on_change(&mut self, listener: impl FnMut(TimeOfDay, TimeOfDay) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // ── Programmatic time input ─────────────────────────────────────────

    /// Set both times directly, outside of any drag gesture.
    pub fn set_time(&mut self, bed: TimeOfDay, wake: TimeOfDay) {
        self.sleep_angle = minutes_to_angle(bed.total_minutes());
        self.wake_angle = minutes_to_angle(wake.total_minutes());
        self.notify();
    }

    // ── Layout inputs (refreshed each pass by the rendering layer) ──────

    /// Current dial center and radius in the widget's coordinate space.
    pub fn set_layout(&mut self, center: Pos2, radius: f32) {
        self.center = center;
        self.radius = radius;
    }

    /// Screen-space bounds of one handle knob, used for hit-testing.
    pub fn set_handle_bounds(&mut self, handle: Handle, bounds: Rect) {
        match handle {
            Handle::Sleep => self.sleep_bounds = Some(bounds),
            Handle::Wake => self.wake_bounds = Some(bounds),
        }
    }

    /// Which handle (if any) is under `pos`. Returns `None` before the
    /// first layout pass has supplied bounds — the dial simply is not
    /// interactive yet.
    pub fn hit_test(&self, pos: Pos2) -> Option<Handle> {
        if self.sleep_bounds.is_some_and(|b| b.contains(pos)) {
            Some(Handle::Sleep)
        } else if self.wake_bounds.is_some_and(|b| b.contains(pos)) {
            Some(Handle::Wake)
        } else {
            None
        }
    }

    // ── Pointer event entry points ──────────────────────────────────────

    /// Pointer pressed at `pos`. Starts a drag when the press lands on a
    /// handle and no drag is in progress; the first touched handle wins
    /// and later presses are ignored until release. Returns whether the
    /// event was consumed.
    pub fn pointer_down(&mut self, pos: Pos2) -> bool {
        if self.active.is_some() {
            return false;
        }
        match self.hit_test(pos) {
            Some(handle) => {
                self.active = Some(handle);
                true
            }
            None => false,
        }
    }

    /// Pointer moved to `pos` while (possibly) dragging. Applies the
    /// minimal signed angle delta between the active handle's direction
    /// and the touch direction, then notifies. Returns whether the event
    /// was consumed; moves with no active handle are silently ignored.
    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        let Some(handle) = self.active else {
            return false;
        };
        // Screen y grows downward, so flip it to get math-convention angles.
        let touch_rad = f64::from(self.center.y - pos.y).atan2(f64::from(pos.x - self.center.x));
        let angle = match handle {
            Handle::Sleep => &mut self.sleep_angle,
            Handle::Wake => &mut self.wake_angle,
        };
        let diff = angle_between_vectors(angle.to_radians(), touch_rad).to_degrees();
        *angle = normalize_720(*angle + diff);
        self.notify();
        true
    }

    /// Pointer released: end the gesture. Idempotent.
    pub fn pointer_up(&mut self) {
        self.active = None;
    }

    /// Gesture cancelled by the windowing layer; same effect as a release.
    pub fn pointer_cancel(&mut self) {
        self.active = None;
    }

    // ── Derived state ───────────────────────────────────────────────────

    /// Bed time derived from the sleep handle, snapped to 15 minutes.
    pub fn bed_time(&self) -> TimeOfDay {
        Self::angle_to_time(self.sleep_angle)
    }

    /// Wake time derived from the wake handle, snapped to 15 minutes.
    pub fn wake_time(&self) -> TimeOfDay {
        Self::angle_to_time(self.wake_angle)
    }

    fn angle_to_time(angle: f64) -> TimeOfDay {
        TimeOfDay::from_minutes(snap_minutes(angle_to_minutes(angle), STEP_MINUTES))
    }

    /// The handle currently being dragged, if any.
    pub fn active_handle(&self) -> Option<Handle> {
        self.active
    }

    /// Sleep handle angle in degrees, [0, 720).
    pub fn sleep_angle(&self) -> f64 {
        self.sleep_angle
    }

    /// Wake handle angle in degrees, [0, 720).
    pub fn wake_angle(&self) -> f64 {
        self.wake_angle
    }

    /// Sweep of the progress arc from the sleep handle to the wake handle,
    /// clockwise, in [0, 360) degrees.
    pub fn sweep_degrees(&self) -> f64 {
        normalize_360(self.sleep_angle - self.wake_angle)
    }

    /// Where a handle knob sits on the dial circle, given the current
    /// layout. Screen coordinates, y down.
    pub fn handle_position(&self, handle: Handle) -> Pos2 {
        let angle = match handle {
            Handle::Sleep => self.sleep_angle,
            Handle::Wake => self.wake_angle,
        }
        .to_radians();
        Pos2::new(
            self.center.x + self.radius * angle.cos() as f32,
            self.center.y - self.radius * angle.sin() as f32,
        )
    }

    fn notify(&mut self) {
        let bed = self.bed_time();
        let wake = self.wake_time();
        if let Some(listener) = self.listener.as_mut() {
            listener(bed, wake);
        }
    }
}
