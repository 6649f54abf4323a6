//! Dispatch tests against an in-memory page.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use chordframe_common::{FrameId, HostError};
use chordframe_config::RouterConfig;
use serde_json::{json, Value};

use super::*;

type Outbox = Rc<RefCell<Vec<(FrameId, Value, String)>>>;

struct FakePort {
    frame: FrameId,
    outbox: Outbox,
    fail: bool,
}

impl FramePort for FakePort {
    type Payload = Value;

    fn post(&self, body: &Value, target_origin: &str) -> Result<(), HostError> {
        if self.fail {
            return Err(HostError::PostFailed {
                frame: self.frame,
                reason: "detached".into(),
            });
        }
        self.outbox
            .borrow_mut()
            .push((self.frame, body.clone(), target_origin.to_string()));
        Ok(())
    }
}

struct FakePage {
    loaded: RefCell<HashSet<FrameId>>,
    width: f64,
    outbox: Outbox,
    resolves: RefCell<usize>,
    failing: Option<FrameId>,
}

impl FakePage {
    fn with_all_frames(width: f64) -> Self {
        Self {
            loaded: RefCell::new(FrameId::ALL.into_iter().collect()),
            width,
            outbox: Rc::default(),
            resolves: RefCell::new(0),
            failing: None,
        }
    }
}

impl FrameHost for FakePage {
    type Port = FakePort;

    fn resolve(&self, frame: FrameId) -> Option<FakePort> {
        *self.resolves.borrow_mut() += 1;
        self.loaded.borrow().contains(&frame).then(|| FakePort {
            frame,
            outbox: Rc::clone(&self.outbox),
            fail: self.failing == Some(frame),
        })
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }
}

fn router(width: f64) -> FrameRouter<FakePage> {
    FrameRouter::new(FakePage::with_all_frames(width), &RouterConfig::default())
}

/// Route `msg` as if the sender's payload and its JSON view were the same.
fn route(router: &FrameRouter<FakePage>, origin: &str, msg: Value) -> RouteOutcome {
    router.route(origin, msg.clone(), &msg)
}

fn sent(router: &FrameRouter<FakePage>) -> Vec<(FrameId, Value, String)> {
    router.host().outbox.borrow().clone()
}

#[test]
fn every_kind_reaches_exactly_one_frame() {
    let cases = [
        ("SAMPLES_UPDATED", FrameId::R2a),
        ("R2A_LOAD_TO_R3", FrameId::R3),
        ("R2A_LOAD_CHORDS", FrameId::R1),
        ("R1_LOAD_CHORD", FrameId::R3),
        ("R1_LOAD_ALL", FrameId::R3),
        ("R1_CLEAR_ALL", FrameId::R3),
        ("R3_SEND_TO_R2B", FrameId::R2b),
        ("R3_CLEAR_ALL", FrameId::R3),
        ("R3_FOCUS_AND_PLAY", FrameId::R3),
        ("LOAD_CHORD_DATA", FrameId::R2a),
        ("SET_CHORD_DURATION", FrameId::R3),
        ("EDIT_SAMPLE", FrameId::Sample),
    ];
    for (kind, expected) in cases {
        let router = router(1280.0);
        let outcome = route(&router, "null", json!({ "type": kind, "chords": ["C"] }));
        assert!(
            matches!(outcome, RouteOutcome::Forwarded { to, .. } if to == expected),
            "{kind}: {outcome:?}"
        );
        let sent = sent(&router);
        assert_eq!(sent.len(), 1, "{kind}");
        assert_eq!(sent[0].0, expected, "{kind}");
    }
}

#[test]
fn unknown_kind_forwards_nothing() {
    let router = router(1280.0);
    assert_eq!(
        route(&router, "null", json!({ "type": "HELLO", "chords": [] })),
        RouteOutcome::Ignored
    );
    assert!(sent(&router).is_empty());
    assert_eq!(*router.host().resolves.borrow(), 0);
}

#[test]
fn malformed_message_forwards_nothing() {
    let router = router(1280.0);
    assert_eq!(route(&router, "null", json!(42)), RouteOutcome::Malformed);
    assert_eq!(
        route(&router, "null", json!({ "type": "R2A_LOAD_TO_R3", "titleLine": "x" })),
        RouteOutcome::Malformed
    );
    assert!(sent(&router).is_empty());
}

#[test]
fn missing_frame_is_skipped() {
    let router = router(1280.0);
    router.host().loaded.borrow_mut().remove(&FrameId::R2b);

    let outcome = route(&router, "null", json!({ "type": "R3_SEND_TO_R2B" }));
    assert_eq!(outcome, RouteOutcome::FrameMissing { to: FrameId::R2b });
    assert!(sent(&router).is_empty());
}

#[test]
fn frames_are_resolved_on_every_dispatch() {
    let router = router(1280.0);
    router.host().loaded.borrow_mut().remove(&FrameId::R3);
    let msg = json!({ "type": "R1_CLEAR_ALL" });

    assert_eq!(
        route(&router, "null", msg.clone()),
        RouteOutcome::FrameMissing { to: FrameId::R3 }
    );

    // R3 finishes loading after the first message.
    router.host().loaded.borrow_mut().insert(FrameId::R3);
    assert!(matches!(
        route(&router, "null", msg),
        RouteOutcome::Forwarded { to: FrameId::R3, .. }
    ));
    assert_eq!(*router.host().resolves.borrow(), 2);
}

#[test]
fn post_failure_is_reported() {
    let mut page = FakePage::with_all_frames(1280.0);
    page.failing = Some(FrameId::Sample);
    let router = FrameRouter::new(page, &RouterConfig::default());

    let outcome = route(&router, "null", json!({ "type": "EDIT_SAMPLE", "data": { "id": 3 } }));
    assert_eq!(outcome, RouteOutcome::PostFailed { to: FrameId::Sample });
}

#[test]
fn narrow_viewport_repacks_load_chords_for_r3() {
    let router = router(1024.0);
    let outcome = route(&router, 
        "null",
        json!({ "type": "R2A_LOAD_CHORDS", "chords": ["Am", "G"], "titleLine": "Chorus" }),
    );
    assert_eq!(
        outcome,
        RouteOutcome::Forwarded {
            to: FrameId::R3,
            transformed: true
        }
    );
    let sent = sent(&router);
    assert_eq!(sent[0].1, json!({ "type": "R1_LOAD_ALL", "chords": ["Am", "G"] }));
}

#[test]
fn wide_viewport_passes_load_chords_to_r1() {
    let router = router(1025.0);
    let raw = json!({ "type": "R2A_LOAD_CHORDS", "chords": ["Am", "G"], "titleLine": "Chorus" });
    route(&router, "null", raw.clone());
    let sent = sent(&router);
    assert_eq!(sent[0].0, FrameId::R1);
    assert_eq!(sent[0].1, raw);
}

#[test]
fn direct_load_drops_title_on_any_viewport() {
    for width in [375.0, 1024.0, 1920.0] {
        let router = router(width);
        route(&router, 
            "null",
            json!({ "type": "R2A_LOAD_TO_R3", "chords": [1, 2, 3], "titleLine": "Intro" }),
        );
        let sent = sent(&router);
        assert_eq!(sent[0].0, FrameId::R3);
        assert_eq!(sent[0].1, json!({ "type": "R1_LOAD_ALL", "chords": [1, 2, 3] }));
    }
}

#[test]
fn uses_configured_target_origin() {
    let config = RouterConfig {
        target_origin: "https://chords.example".into(),
        ..RouterConfig::default()
    };
    let router = FrameRouter::new(FakePage::with_all_frames(1280.0), &config);
    route(&router, "null", json!({ "type": "LOAD_CHORD_DATA" }));
    assert_eq!(sent(&router)[0].2, "https://chords.example");
}

#[test]
fn default_target_origin_is_wildcard() {
    let router = router(1280.0);
    route(&router, "null", json!({ "type": "LOAD_CHORD_DATA" }));
    assert_eq!(sent(&router)[0].2, "*");
}

#[test]
fn allowlist_rejects_foreign_origins() {
    let config = RouterConfig {
        allowed_origins: vec!["https://chords.example".into()],
        ..RouterConfig::default()
    };
    let router = FrameRouter::new(FakePage::with_all_frames(1280.0), &config);

    assert_eq!(
        route(&router, "https://evil.example", json!({ "type": "R1_CLEAR_ALL" })),
        RouteOutcome::Rejected
    );
    assert!(sent(&router).is_empty());

    assert!(matches!(
        route(&router, "https://chords.example", json!({ "type": "R1_CLEAR_ALL" })),
        RouteOutcome::Forwarded { .. }
    ));
}

#[test]
fn messages_are_forwarded_in_arrival_order() {
    let router = router(1280.0);
    route(&router, "null", json!({ "type": "R1_CLEAR_ALL" }));
    route(&router, "null", json!({ "type": "R1_LOAD_CHORD", "chord": "F#m" }));
    route(&router, "null", json!({ "type": "R3_FOCUS_AND_PLAY", "rowIndex": 0 }));
    let kinds: Vec<String> = sent(&router)
        .iter()
        .map(|(_, body, _)| body["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(kinds, ["R1_CLEAR_ALL", "R1_LOAD_CHORD", "R3_FOCUS_AND_PLAY"]);
}

#[test]
fn dispatch_logs_with_a_subscriber_installed() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let router = router(800.0);
        let outcome = route(&router, 
            "null",
            json!({ "type": "R2A_LOAD_CHORDS", "chords": ["C"], "titleLine": "t" }),
        );
        assert!(matches!(outcome, RouteOutcome::Forwarded { .. }));
    });
}

#[test]
fn desktop_load_chords_passes_through_without_chord_list() {
    for raw in [
        json!({ "type": "R2A_LOAD_CHORDS", "titleLine": "Blues" }),
        json!({ "type": "R2A_LOAD_CHORDS", "chords": null, "titleLine": "Blues" }),
    ] {
        let router = router(1440.0);
        assert_eq!(
            route(&router, "https://x", raw.clone()),
            RouteOutcome::Forwarded {
                to: FrameId::R1,
                transformed: false
            }
        );
        assert_eq!(sent(&router), [(FrameId::R1, raw, "*".to_string())]);
    }
}

#[test]
fn narrow_load_chords_without_chord_list_is_dropped() {
    let router = router(800.0);
    let outcome = route(&router, "null", json!({ "type": "R2A_LOAD_CHORDS", "titleLine": "Blues" }));
    assert_eq!(outcome, RouteOutcome::Malformed);
    assert!(sent(&router).is_empty());
    assert_eq!(*router.host().resolves.borrow(), 0);
}

#[test]
fn passthrough_posts_the_sender_payload_not_the_decoded_view() {
    let router = router(1280.0);
    // The view lost a field JSON could not carry; the payload still has it.
    let view = json!({ "type": "EDIT_SAMPLE", "data": null });
    let payload = json!({ "type": "EDIT_SAMPLE", "data": [0, 255, 16], "extra": true });

    let outcome = router.route("null", view, &payload);
    assert!(matches!(outcome, RouteOutcome::Forwarded { to: FrameId::Sample, .. }));
    assert_eq!(sent(&router)[0].1, payload);
}

#[test]
fn repack_is_built_from_the_payload() {
    let router = router(1280.0);
    let msg = json!({ "type": "R2A_LOAD_TO_R3", "chords": ["Dm"], "titleLine": "x" });
    router.route("null", msg.clone(), &msg);
    assert_eq!(
        sent(&router)[0].1,
        json!({ "type": "R1_LOAD_ALL", "chords": ["Dm"] })
    );
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if let Ok(mut buf) = self.0.lock() {
            buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[test]
fn rejected_and_malformed_messages_are_still_traced_as_received() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    let config = RouterConfig {
        allowed_origins: vec!["https://chords.example".into()],
        ..RouterConfig::default()
    };
    tracing::subscriber::with_default(subscriber, || {
        let router = FrameRouter::new(FakePage::with_all_frames(1280.0), &config);
        assert_eq!(
            route(&router, "https://evil.example", json!({ "type": "R1_CLEAR_ALL" })),
            RouteOutcome::Rejected
        );
        assert_eq!(
            route(&router, "https://chords.example", json!({ "type": "R2A_LOAD_TO_R3" })),
            RouteOutcome::Malformed
        );
    });

    let out = logs.contents();
    let received: Vec<&str> = out.lines().filter(|l| l.contains("received message")).collect();
    assert_eq!(received.len(), 2, "{out}");
    assert!(received[0].contains("R1_CLEAR_ALL"), "{out}");
    assert!(received[1].contains("R2A_LOAD_TO_R3"), "{out}");
}
