use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use sun_viewer::ViewerError;
use sun_viewer::api::{SunViewer, ViewerConfig};
use sun_viewer::core::{FixedClock, ViewerTimeZone};
use sun_viewer::display::NullDisplay;
use sun_viewer::extensions::{ViewerContext, ViewerEvent, ViewerPlugin};

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(ViewerEvent, ViewerContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(ViewerEvent, ViewerContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ViewerPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: ViewerEvent, context: ViewerContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &ViewerEvent) -> &'static str {
    match event {
        ViewerEvent::TimeChanged { .. } => "time",
        ViewerEvent::ChannelChanged => "channel",
        ViewerEvent::AutoRetreated { .. } => "retreat",
        ViewerEvent::RetreatBlockedAtFloor { .. } => "floor",
        ViewerEvent::RetreatStreakAbandoned => "abandon",
        ViewerEvent::LoadRecovered => "recovered",
        ViewerEvent::InputRejected => "rejected",
    }
}

fn build_viewer() -> SunViewer<NullDisplay> {
    let now = Utc
        .with_ymd_and_hms(2024, 6, 1, 14, 45, 0)
        .single()
        .expect("valid clock reading");
    let config = ViewerConfig::default()
        .with_time_zone(ViewerTimeZone::Utc)
        .with_archive_start("2024-06-01T13:00");
    SunViewer::new(NullDisplay::default(), config, &FixedClock::at(now)).expect("viewer init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut viewer = build_viewer();
    let events = Rc::new(RefCell::new(Vec::new()));
    viewer
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    viewer.set_channel("hmi").expect("set channel");
    let _ = viewer.set_time("bad");
    viewer.report_load_failure();
    viewer.report_load_failure();
    viewer.report_load_success();

    let kinds: Vec<_> = events
        .borrow()
        .iter()
        .map(|(event, _)| event_kind(event))
        .collect();
    assert_eq!(
        kinds,
        vec!["channel", "rejected", "time", "retreat", "floor", "recovered"]
    );

    let recorded = events.borrow();
    let (_, context) = recorded[3];
    assert_eq!(context.failure_count, 1);
    assert!(!context.navigation.prev_available);
}

#[test]
fn duplicate_or_empty_plugin_ids_are_rejected() {
    let mut viewer = build_viewer();
    let events = Rc::new(RefCell::new(Vec::new()));
    viewer
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect("register");

    let err = viewer
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect_err("duplicate must fail");
    assert!(matches!(err, ViewerError::InvalidConfig(_)));

    let err = viewer
        .register_plugin(Box::new(RecordingPlugin::new("", events)))
        .expect_err("empty must fail");
    assert!(matches!(err, ViewerError::InvalidConfig(_)));
    assert_eq!(viewer.plugin_count(), 1);
}

#[test]
fn unregistered_plugin_stops_receiving_events() {
    let mut viewer = build_viewer();
    let events = Rc::new(RefCell::new(Vec::new()));
    viewer
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register");
    assert!(viewer.has_plugin("recorder"));

    assert!(viewer.unregister_plugin("recorder"));
    assert!(!viewer.unregister_plugin("recorder"));
    viewer.step_backward();
    assert!(events.borrow().is_empty());
}
