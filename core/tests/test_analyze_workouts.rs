use metricsbike_core::telemetry::Metrics;
use metricsbike_core::*;
use serde_json::json;

fn workout(id: u64, url: Option<&str>) -> Workout {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("ride {id}"),
        "workout_summary": url.map(|u| json!({ "file": { "url": u } })),
    }))
    .unwrap()
}

#[test]
fn pipeline_skips_unusable_workouts_and_keeps_order() {
    let source = StaticPowerSource::new()
        .with_series("a.fit", vec![200.0; 600])
        .with_series("empty.fit", vec![])
        .with_series("zeros.fit", vec![0.0; 100])
        .with_series("b.fit", vec![150.0; 90]);

    let workouts = vec![
        workout(1, Some("a.fit")),
        workout(2, None),
        workout(3, Some("missing.fit")),
        workout(4, Some("empty.fit")),
        workout(5, Some("zeros.fit")),
        workout(6, Some("b.fit")),
    ];

    let metrics = Metrics::new();
    let out = analyze_workouts(&workouts, &source, &metrics);

    let ids: Vec<_> = out.iter().map(|a| a.workout.id.as_ref()).collect();
    assert_eq!(ids, vec![Some(&WorkoutId::Num(1)), Some(&WorkoutId::Num(6))]);
    assert_eq!(out[0].metrics.average_power, Some(200));
    assert_eq!(out[1].metrics.normalized_power, Some(150));
    assert_eq!(out[1].metrics.best_efforts.get(EffortDuration::FiveMinutes), None);

    assert_eq!(metrics.workouts_analyzed_total().get(), 2);
    assert_eq!(metrics.workouts_skipped_total("no_file").get(), 1);
    assert_eq!(metrics.workouts_skipped_total("decode_failed").get(), 1);
    assert_eq!(metrics.workouts_skipped_total("no_power").get(), 1);
    assert_eq!(metrics.workouts_skipped_total("no_positive_power").get(), 1);
    assert_eq!(metrics.power_samples_total().get(), 600 + 100 + 90);
}

#[test]
fn analyze_workout_reports_skip_reason() {
    let source = StaticPowerSource::new().with_series("zeros.fit", vec![0.0; 40]);
    let metrics = Metrics::new();

    let r = analyze_workout(&workout(1, None), &source, &metrics);
    assert_eq!(r.unwrap_err(), SkipReason::NoFile);

    let r = analyze_workout(&workout(2, Some("zeros.fit")), &source, &metrics);
    assert_eq!(r.unwrap_err(), SkipReason::NoPositivePower);
}

#[test]
fn analyzed_workout_serializes_flat_with_metrics() {
    let source = StaticPowerSource::new().with_series("a.fit", vec![210.0; 60]);
    let out = analyze_workouts(&[workout(9, Some("a.fit"))], &source, &Metrics::new());
    let v = serde_json::to_value(&out[0]).unwrap();
    assert_eq!(v["id"], 9);
    assert_eq!(v["metrics"]["averagePower"], 210);
    assert_eq!(v["metrics"]["bestEfforts"]["1m"], 210);
}
