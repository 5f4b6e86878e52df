use chrono::{TimeZone, Utc};
use sun_viewer::ViewerError;
use sun_viewer::api::{SunViewer, ViewerConfig};
use sun_viewer::core::{FixedClock, NavigationState, Timestamp, ViewerTimeZone};
use sun_viewer::display::NullDisplay;

fn clock_at(hour: u32, minute: u32) -> FixedClock {
    let now = Utc
        .with_ymd_and_hms(2024, 6, 1, hour, minute, 7)
        .single()
        .expect("valid clock reading");
    FixedClock::at(now)
}

fn build_viewer() -> SunViewer<NullDisplay> {
    let config = ViewerConfig::default().with_time_zone(ViewerTimeZone::Utc);
    SunViewer::new(NullDisplay::default(), config, &clock_at(14, 45)).expect("viewer init")
}

fn at(raw: &str) -> Timestamp {
    Timestamp::parse_local(raw, ViewerTimeZone::Utc).expect("timestamp")
}

#[test]
fn initial_state_sits_on_ceiling_with_default_channel() {
    let viewer = build_viewer();
    let snapshot = viewer.snapshot();

    assert_eq!(snapshot.current, "2024-06-01T14:00");
    assert_eq!(snapshot.max, "2024-06-01T14:00");
    assert_eq!(snapshot.min, "2010-05-19T00:00");
    assert_eq!(snapshot.channel, "0094");
    assert_eq!(snapshot.image_path, "/img/sun/aia/0094/2024/060114.jpg");
    assert!(snapshot.prev_available);
    assert!(!snapshot.next_available);
    assert_eq!(viewer.display().presented_count, 1);
}

#[test]
fn early_in_the_hour_ceiling_is_previous_hour() {
    let config = ViewerConfig::default().with_time_zone(ViewerTimeZone::Utc);
    let viewer =
        SunViewer::new(NullDisplay::default(), config, &clock_at(14, 15)).expect("viewer init");
    assert_eq!(viewer.bounds().max(), at("2024-06-01T13:00"));
    assert_eq!(viewer.current(), at("2024-06-01T13:00"));
}

#[test]
fn set_time_below_floor_snaps_to_floor() {
    let mut viewer = build_viewer();
    let snapshot = viewer.set_time("2010-05-18T23:00").expect("set time");

    assert_eq!(snapshot.current, "2010-05-19T00:00");
    assert!(!snapshot.prev_available);
    assert!(snapshot.next_available);
}

#[test]
fn set_time_above_ceiling_snaps_to_ceiling() {
    let mut viewer = build_viewer();
    viewer.set_time("2020-01-01T00:00").expect("set time");
    let snapshot = viewer.set_time("2024-06-01T15:00").expect("set time");

    assert_eq!(snapshot.current, "2024-06-01T14:00");
    assert!(!snapshot.next_available);
    assert!(snapshot.prev_available);
}

#[test]
fn set_time_inside_range_enables_both_directions() {
    let mut viewer = build_viewer();
    let snapshot = viewer.set_time("2012-03-04T05:00").expect("set time");

    assert_eq!(snapshot.image_path, "/img/sun/aia/0094/2012/030405.jpg");
    assert_eq!(
        viewer.navigation(),
        NavigationState {
            prev_available: true,
            next_available: true
        }
    );
}

#[test]
fn invalid_input_is_rejected_without_state_change() {
    let mut viewer = build_viewer();
    viewer.set_time("2012-03-04T05:00").expect("set time");
    let before = viewer.snapshot();
    let presented = viewer.display().presented_count;

    let err = viewer.set_time("2012-03-04").expect_err("must fail");
    assert!(matches!(err, ViewerError::InvalidInput { .. }));
    assert_eq!(viewer.snapshot(), before);
    assert_eq!(viewer.display().presented_count, presented);
}

#[test]
fn resubmitting_current_value_is_idempotent() {
    let mut viewer = build_viewer();
    let first = viewer.set_time("2015-07-08T09:00").expect("set time");
    let second = viewer.set_time(&first.current).expect("set time again");
    assert_eq!(first, second);
}

#[test]
fn stepping_moves_one_hour_and_gates_at_bounds() {
    let mut viewer = build_viewer();
    assert_eq!(viewer.step_forward(), None);

    let back = viewer.step_backward().expect("step back");
    assert_eq!(back.current, "2024-06-01T13:00");
    assert!(back.next_available);

    let forward = viewer.step_forward().expect("step forward");
    assert_eq!(forward.current, "2024-06-01T14:00");
    assert!(!forward.next_available);

    viewer.set_time("2010-05-19T00:00").expect("set floor");
    let before = viewer.snapshot();
    assert_eq!(viewer.step_backward(), None);
    assert_eq!(viewer.snapshot(), before);
}

#[test]
fn arrow_shortcuts_step_and_other_keys_are_ignored() {
    let mut viewer = build_viewer();

    let left = viewer.handle_shortcut("ArrowLeft").expect("left arrow steps back");
    assert_eq!(left.current, "2024-06-01T13:00");

    let right = viewer.handle_shortcut("ArrowRight").expect("right arrow steps forward");
    assert_eq!(right.current, "2024-06-01T14:00");

    assert_eq!(viewer.handle_shortcut("ArrowUp"), None);
    assert_eq!(viewer.current(), at("2024-06-01T14:00"));
}

#[test]
fn paths_use_viewer_zone_calendar_fields() {
    let config = ViewerConfig::default()
        .with_time_zone(ViewerTimeZone::FixedOffsetMinutes { minutes: -300 });
    let mut viewer =
        SunViewer::new(NullDisplay::default(), config, &clock_at(14, 45)).expect("viewer init");

    // 14:45 UTC reads as 09:45 at UTC-5.
    assert_eq!(viewer.snapshot().current, "2024-06-01T09:00");
    assert_eq!(viewer.image_path(), "/img/sun/aia/0094/2024/060109.jpg");

    let snapshot = viewer.set_time("2012-01-01T02:00").expect("set time");
    assert_eq!(snapshot.image_path, "/img/sun/aia/0094/2012/010102.jpg");
    assert_eq!(viewer.current().as_utc().to_rfc3339(), "2012-01-01T07:00:00+00:00");
}

#[test]
fn archive_start_after_ceiling_fails_init() {
    let config = ViewerConfig::default()
        .with_time_zone(ViewerTimeZone::Utc)
        .with_archive_start("2030-01-01T00:00");
    let result = SunViewer::new(NullDisplay::default(), config, &clock_at(14, 45));
    assert!(matches!(result, Err(ViewerError::InvalidConfig(_))));
}
