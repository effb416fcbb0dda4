use sleepdial::angle::*;

#[test]
fn normalize_360_wraps_into_range() {
    assert_eq!(normalize_360(0.0), 0.0);
    assert_eq!(normalize_360(360.0), 0.0);
    assert_eq!(normalize_360(725.0), 5.0);
    assert_eq!(normalize_360(-30.0), 330.0);
    assert_eq!(normalize_360(-720.0), 0.0);
}

#[test]
fn normalize_720_wraps_into_range() {
    assert_eq!(normalize_720(0.0), 0.0);
    assert_eq!(normalize_720(720.0), 0.0);
    assert_eq!(normalize_720(725.0), 5.0);
    assert_eq!(normalize_720(-10.0), 710.0);
    assert_eq!(normalize_720(365.0), 365.0);
}

#[test]
fn normalization_is_idempotent() {
    for x in [-1234.5, -360.0, -0.25, 0.0, 17.3, 359.9, 360.0, 719.9, 5000.0] {
        let a = normalize_360(x);
        assert_eq!(normalize_360(a), a);
        assert!((0.0..360.0).contains(&a));
        let b = normalize_720(x);
        assert_eq!(normalize_720(b), b);
        assert!((0.0..720.0).contains(&b));
    }
}

#[test]
fn angle_and_minutes_table() {
    // Whole-hour fixture pairs; angles map exactly at this granularity.
    let angles = [
        0.0, 60.0, 90.0, 150.0, 180.0, 270.0, 330.0, 390.0, 450.0, 510.0, 570.0, 660.0, 690.0,
    ];
    let hours = [3, 1, 0, 22, 21, 18, 16, 14, 12, 10, 8, 5, 4];
    for (angle, hour) in angles.iter().zip(hours.iter()) {
        let mins = hour * 60;
        assert_eq!(angle_to_minutes(*angle), mins, "angle {angle}");
        assert!(
            (minutes_to_angle(mins) - angle).abs() < 1e-4,
            "minutes {mins}"
        );
    }
}

#[test]
fn minutes_round_trip_over_full_day() {
    for m in 0..MINUTES_PER_DAY {
        let got = angle_to_minutes(minutes_to_angle(m));
        // Truncation may land one minute low; never further, never high.
        assert!(got == m || got == m - 1, "minute {m} came back as {got}");
    }
}

#[test]
fn angle_to_minutes_never_negative() {
    for angle in [-5000.0, -719.5, -0.0001, 0.0, 89.9999, 720.0, 12345.6] {
        let m = angle_to_minutes(angle);
        assert!((0..MINUTES_PER_DAY).contains(&m), "angle {angle} gave {m}");
    }
}

#[test]
fn snap_rounds_half_steps_up() {
    let cases = [(0, 0), (10, 15), (15, 15), (18, 15), (28, 30), (35, 30)];
    for (minutes, expected) in cases {
        assert_eq!(snap_minutes(minutes, 15), expected, "minutes {minutes}");
    }
}

#[test]
fn snap_boundary_follows_integer_rule() {
    // remainder of exactly half a step rounds up, one below rounds down
    assert_eq!(snap_minutes(5, 10), 10);
    assert_eq!(snap_minutes(4, 10), 0);
    assert_eq!(snap_minutes(1437, 15), 1440);
}

#[test]
fn angle_between_vectors_table() {
    let cases = [
        (0.0, 45.0, 45.0),
        (45.0, 90.0, 45.0),
        (90.0, 100.0, 10.0),
        (135.0, 145.0, 10.0),
        (190.0, 170.0, -20.0),
        (350.0, 10.0, 20.0),
    ];
    for (a, b, expected) in cases {
        let got = angle_between_vectors(f64::to_radians(a), f64::to_radians(b)).to_degrees();
        assert!(
            (got - expected).abs() < 1e-3,
            "({a}, {b}) gave {got}, expected {expected}"
        );
    }
}

#[test]
fn angle_between_vectors_stays_in_half_open_range() {
    // Opposite vectors come back as +180, not -180.
    let opposite = angle_between_vectors(0.0, std::f64::consts::PI).to_degrees();
    assert!((opposite - 180.0).abs() < 1e-9);

    let mut a = -370.0;
    while a < 370.0 {
        let mut b = -370.0;
        while b < 370.0 {
            let got = angle_between_vectors(f64::to_radians(a), f64::to_radians(b)).to_degrees();
            assert!(got > -180.0 - 1e-9 && got <= 180.0 + 1e-9, "({a}, {b}) gave {got}");
            b += 23.0;
        }
        a += 23.0;
    }
}
