use chrono::NaiveTime;
use sleepdial::{SleepDuration, TimeOfDay};

#[test]
fn from_minutes_normalizes() {
    assert_eq!(TimeOfDay::from_minutes(0), TimeOfDay::new(0, 0));
    assert_eq!(TimeOfDay::from_minutes(1440), TimeOfDay::new(0, 0));
    assert_eq!(TimeOfDay::from_minutes(1505), TimeOfDay::new(1, 5));
    assert_eq!(TimeOfDay::from_minutes(-30), TimeOfDay::new(23, 30));
    assert_eq!(TimeOfDay::from_minutes(425), TimeOfDay::new(7, 5));
}

#[test]
fn total_minutes_inverts_from_minutes() {
    for m in (0..1440).step_by(7) {
        assert_eq!(TimeOfDay::from_minutes(m).total_minutes(), m);
    }
}

#[test]
fn constructor_reduces_out_of_range_components() {
    assert_eq!(TimeOfDay::new(24, 60), TimeOfDay::new(0, 0));
    assert_eq!(TimeOfDay::new(25, 61), TimeOfDay::new(1, 1));
}

#[test]
fn displays_zero_padded() {
    assert_eq!(TimeOfDay::new(7, 5).to_string(), "07:05");
    assert_eq!(TimeOfDay::new(23, 30).to_string(), "23:30");
}

#[test]
fn duration_of_a_typical_night() {
    let d = SleepDuration::between(TimeOfDay::new(23, 0), TimeOfDay::new(7, 0));
    assert_eq!(d, SleepDuration { hours: 8, minutes: 0 });
}

#[test]
fn equal_times_mean_a_full_day() {
    let d = SleepDuration::between(TimeOfDay::new(7, 0), TimeOfDay::new(7, 0));
    assert_eq!(d, SleepDuration { hours: 24, minutes: 0 });
}

#[test]
fn short_nap_without_wrap() {
    let d = SleepDuration::between(TimeOfDay::new(6, 0), TimeOfDay::new(6, 30));
    assert_eq!(d, SleepDuration { hours: 0, minutes: 30 });
}

#[test]
fn wake_just_before_bed_wraps_to_almost_a_day() {
    let d = SleepDuration::between(TimeOfDay::new(12, 0), TimeOfDay::new(11, 45));
    assert_eq!(
        d,
        SleepDuration {
            hours: 23,
            minutes: 45
        }
    );
}

#[test]
fn chrono_interop_round_trips() {
    let t = TimeOfDay::new(22, 15);
    let naive: NaiveTime = t.into();
    assert_eq!(naive, NaiveTime::from_hms_opt(22, 15, 0).unwrap());
    assert_eq!(TimeOfDay::from(naive), t);

    // Sub-minute precision truncates.
    let with_seconds = NaiveTime::from_hms_opt(5, 59, 42).unwrap();
    assert_eq!(TimeOfDay::from(with_seconds), TimeOfDay::new(5, 59));
}
