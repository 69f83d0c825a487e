//! Sentinel drift behaviour end to end
//!
//! Exercises the public API the way a caller would: construct, observe a
//! sequence of vectors, export the report, and read it back.

use liora_sentinel::{
    normalize, CaptureSink, DriftStatus, NullSink, Report, Sentinel, SentinelError,
    SentinelEvent, SentinelPolicy, StepId, TrailRetention, REPORT_MODULE, REPORT_VERSION,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tempfile::TempDir;

const TOL: f64 = 1e-9;

fn quiet(origin: &[f64], policy: SentinelPolicy) -> Sentinel {
    Sentinel::with_sink(origin, policy, Arc::new(NullSink)).unwrap()
}

/// Rotate `[1, 0]` by `angle` radians
fn rotated(angle: f64) -> [f64; 2] {
    [angle.cos(), angle.sin()]
}

#[test]
fn test_axis_scenario() {
    let mut sentinel = quiet(&[1.0, 0.0], SentinelPolicy::with_threshold(0.01));

    let (safe, drift, _) = sentinel.observe(&[1.0, 0.0], None).unwrap().into_tuple();
    assert!(safe);
    assert!(drift.abs() < TOL);

    let (safe, drift, _) = sentinel.observe(&[0.0, 1.0], None).unwrap().into_tuple();
    assert!(!safe);
    assert!((drift - 1.0).abs() < TOL);

    let (safe, drift, _) = sentinel.observe(&[-1.0, 0.0], None).unwrap().into_tuple();
    assert!(!safe);
    assert!((drift - 2.0).abs() < TOL);
}

#[test]
fn test_zero_origin_creates_nothing() {
    let capture = CaptureSink::new();
    let result = Sentinel::with_sink(
        &[0.0, 0.0],
        SentinelPolicy::default(),
        Arc::new(capture.clone()),
    );

    assert!(matches!(result, Err(SentinelError::DegenerateVector)));
    // No activation event means no sentinel and no trail ever existed
    assert_eq!(capture.count(), 0);
}

#[test]
fn test_decision_monotonic_in_drift() {
    let threshold = 0.15;
    let mut sentinel = quiet(&[1.0, 0.0], SentinelPolicy::with_threshold(threshold));

    // 1 - cos(θ) = drift  →  θ = acos(1 - drift)
    let below = (1.0f64 - 0.10).acos();
    let above = (1.0f64 - 0.20).acos();

    let low = sentinel.observe(&rotated(below), None).unwrap();
    let high = sentinel.observe(&rotated(above), None).unwrap();

    assert!(low.drift <= threshold && threshold < high.drift);
    assert!(low.is_safe);
    assert!(!high.is_safe);
    assert_eq!(low.status, DriftStatus::Coherent);
    assert_eq!(high.status, DriftStatus::DriftAlert);
}

#[test]
fn test_window_size_never_changes_decision() {
    let origin = [0.85, 0.90, 0.40, 0.99];
    let mut narrow = quiet(&origin, SentinelPolicy::default().window_size(1));
    let mut wide = quiet(&origin, SentinelPolicy::default().window_size(10));

    // Warm the wide window with large drifts so its mean diverges
    for _ in 0..5 {
        wide.observe(&[-0.85, -0.90, -0.40, -0.99], None).unwrap();
    }
    narrow.observe(&[-0.85, -0.90, -0.40, -0.99], None).unwrap();

    let probe = [0.84, 0.91, 0.41, 0.98];
    let a = narrow.observe(&probe, Some(1u64.into())).unwrap();
    let b = wide.observe(&probe, Some(1u64.into())).unwrap();

    assert_eq!(a.is_safe, b.is_safe);
    assert_eq!(a.drift, b.drift);
    assert!(a.is_safe);
    assert_ne!(a.avg_drift, b.avg_drift);
}

#[test]
fn test_single_step_identical_across_window_sizes() {
    let origin = [1.0, 2.0, 3.0];
    let mut small = quiet(&origin, SentinelPolicy::default().window_size(1));
    let mut large = quiet(&origin, SentinelPolicy::default().window_size(50));

    let v = [3.0, 2.0, 1.0];
    let a = small.observe(&v, None).unwrap();
    let b = large.observe(&v, None).unwrap();

    assert_eq!(a.is_safe, b.is_safe);
    assert_eq!(a.drift, b.drift);
}

#[test]
fn test_trail_length_and_order() {
    let mut sentinel = quiet(&[1.0, 1.0, 1.0], SentinelPolicy::default());

    let ids: Vec<StepId> = vec![
        StepId::from(5u64),
        StepId::from(5u64),
        StepId::from(2u64),
        StepId::from("late"),
    ];
    for (i, id) in ids.iter().enumerate() {
        let v = [1.0, 1.0 + i as f64 * 0.1, 1.0];
        sentinel.observe(&v, Some(id.clone())).unwrap();
    }
    sentinel.observe(&[1.0, 1.0, 1.0], None).unwrap();

    let recorded: Vec<Option<StepId>> =
        sentinel.trail().iter().map(|e| e.step_id.clone()).collect();
    let mut expected: Vec<Option<StepId>> = ids.into_iter().map(Some).collect();
    expected.push(None);

    assert_eq!(sentinel.trail().len(), 5);
    assert_eq!(recorded, expected);
}

#[test]
fn test_window_holds_most_recent_values() {
    let mut sentinel = quiet(&[1.0, 0.0], SentinelPolicy::default().window_size(3));

    let angles = [0.1, 0.2, 0.3, 0.4, 0.5];
    let mut drifts = Vec::new();
    for angle in angles {
        drifts.push(sentinel.observe(&rotated(angle), None).unwrap().drift);
        assert!(sentinel.window().len() <= 3);
    }

    assert_eq!(sentinel.window().values(), drifts[2..].to_vec());
}

#[test]
fn test_report_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("liora_report.json");

    let mut sentinel = quiet(&[1.0, 0.0], SentinelPolicy::with_threshold(0.01));
    sentinel.observe(&[1.0, 0.0], Some(1u64.into())).unwrap();
    sentinel.observe(&[0.0, 1.0], Some("two".into())).unwrap();
    sentinel.observe(&[-1.0, 0.0], None).unwrap();
    sentinel.export_report(&path).unwrap();

    let report = Report::load(&path).unwrap();
    assert_eq!(report.meta.module, REPORT_MODULE);
    assert_eq!(report.meta.version, REPORT_VERSION);
    assert_eq!(report.meta.threshold, sentinel.threshold());
    assert_eq!(report.meta.origin_hash, sentinel.origin_hash());
    assert_eq!(report.audit_trail.len(), sentinel.trail().len());

    for (loaded, live) in report.audit_trail.iter().zip(sentinel.trail().iter()) {
        assert_eq!(loaded.step_id, live.step_id);
        assert_eq!(loaded.status, live.status);
        assert_eq!(loaded.action_required, live.action_required);
    }

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw["audit_trail"][2]["step_id"].is_null());
    assert_eq!(raw["audit_trail"][1]["status"], "DRIFT_ALERT");
    assert_eq!(raw["audit_trail"][2]["drift_raw"], 2.0);
}

#[test]
fn test_export_overwrites_previous_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    let mut sentinel = quiet(&[1.0, 0.0], SentinelPolicy::default());
    for i in 0..10u64 {
        sentinel.observe(&[1.0, 0.0], Some(i.into())).unwrap();
    }
    sentinel.export_report(&path).unwrap();

    let fresh = quiet(&[1.0, 0.0], SentinelPolicy::default());
    fresh.export_report(&path).unwrap();

    assert!(Report::load(&path).unwrap().audit_trail.is_empty());
}

#[test]
fn test_export_to_unwritable_destination_fails() {
    let dir = TempDir::new().unwrap();
    let capture = CaptureSink::new();
    let sentinel =
        Sentinel::with_sink(&[1.0], SentinelPolicy::default(), Arc::new(capture.clone())).unwrap();
    capture.clear();

    let result = sentinel.export_report(dir.path().join("missing").join("r.json"));

    assert!(matches!(result, Err(SentinelError::Io(_))));
    assert_eq!(capture.count(), 0);
}

#[test]
fn test_export_reports_destination() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("r.json");
    let capture = CaptureSink::new();
    let sentinel =
        Sentinel::with_sink(&[1.0], SentinelPolicy::default(), Arc::new(capture.clone())).unwrap();

    sentinel.export_report(&path).unwrap();

    let last = capture.events().pop().unwrap();
    assert_eq!(last.event, SentinelEvent::ReportWritten { path });
}

#[test]
fn test_capped_trail_and_flush() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("trail.jsonl");

    let policy = SentinelPolicy::default().retention(TrailRetention::Capped { max_events: 3 });
    let mut sentinel = quiet(&[1.0, 0.0], policy);

    for i in 0..5u64 {
        sentinel.observe(&[1.0, 0.0], Some(i.into())).unwrap();
    }
    assert_eq!(sentinel.trail().len(), 3);
    assert_eq!(sentinel.trail().evicted(), 2);
    assert_eq!(sentinel.stats().observations, 5);

    assert_eq!(sentinel.flush_trail(&archive).unwrap(), 3);
    assert!(sentinel.trail().is_empty());

    sentinel.observe(&[1.0, 0.0], Some(5u64.into())).unwrap();
    assert_eq!(sentinel.flush_trail(&archive).unwrap(), 1);

    let archived = liora_audit::parse_archive(&archive).unwrap();
    let ids: Vec<StepId> = archived.into_iter().filter_map(|e| e.step_id).collect();
    assert_eq!(
        ids,
        vec![2u64.into(), 3u64.into(), 4u64.into(), 5u64.into()]
    );
}

#[test]
fn test_observe_accepts_unnormalized_input() {
    let mut sentinel = quiet(&[0.85, 0.90, 0.40, 0.99], SentinelPolicy::default());
    let unit = normalize(&[0.85, 0.90, 0.40, 0.99]).unwrap();
    let scaled: Vec<f64> = unit.iter().map(|x| x * 1000.0).collect();

    let a = sentinel.observe(&unit, None).unwrap();
    let b = sentinel.observe(&scaled, None).unwrap();

    assert!(a.drift.abs() < TOL);
    assert!((a.drift - b.drift).abs() < TOL);
}

#[test]
fn test_drift_bounded_for_self_and_negation() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..5_000 {
        let origin: Vec<f64> = (0..4).map(|_| rng.random_range(-1.0..1.0)).collect();
        let negated: Vec<f64> = origin.iter().map(|x| -x).collect();
        let mut sentinel = quiet(&origin, SentinelPolicy::default());

        let same = sentinel.observe(&origin, None).unwrap();
        assert!(same.is_safe);
        assert!(
            (0.0..=TOL).contains(&same.drift) && !same.drift.is_sign_negative(),
            "self drift {} for {:?}",
            same.drift,
            origin
        );

        let opposite = sentinel.observe(&negated, None).unwrap();
        assert!(!opposite.is_safe);
        assert!(opposite.drift <= 2.0 && opposite.drift > 2.0 - TOL);
        assert!((0.0..=2.0).contains(&opposite.avg_drift));

        for event in sentinel.trail().iter() {
            assert!(!event.drift_raw.is_sign_negative());
            assert!((0.0..=2.0).contains(&event.drift_raw));
        }
        assert!(sentinel.stats().max_drift.is_some_and(|d| d <= 2.0));

        let json = sentinel.build_report().to_pretty_json().unwrap();
        assert!(!json.contains("-0.0"));
    }
}
