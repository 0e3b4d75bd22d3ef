use crate::models::{AnalyzedWorkout, Workout};
use crate::types::PowerMetrics;

pub const NO_ACTIVITIES_MESSAGE: &str = "No cycling activities with power data found.";

/// HH:MM:SS
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Navn med stor forbokstav, "Unknown" hvis mangler.
pub fn display_name(workout: &Workout) -> String {
    match workout.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => "Unknown".to_string(),
    }
}

fn watts(x: Option<u32>) -> String {
    x.map_or_else(|| "-".to_string(), |w| format!("{w} watts"))
}

fn block(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn metric_lines(metrics: &PowerMetrics) -> Vec<String> {
    let efforts: Vec<String> = metrics
        .best_efforts
        .iter()
        .map(|(d, w)| format!("{d}: {}", w.map_or_else(|| "-".to_string(), |w| format!("{w}W"))))
        .collect();
    vec![
        format!("Average Power: {}", watts(metrics.average_power)),
        format!("Normalized Power: {}", watts(metrics.normalized_power)),
        format!("Best Efforts: {}", efforts.join(", ")),
    ]
}

/// Metrikkblokken (avg, NP, best efforts).
pub fn render_power_metrics(metrics: &PowerMetrics) -> String {
    block(&metric_lines(metrics))
}

/// Én økt som tekstblokk.
pub fn render_workout(a: &AnalyzedWorkout) -> String {
    let w = &a.workout;
    let summary = w.workout_summary.as_ref();

    let start = w
        .starts
        .map_or_else(|| "Unknown date".to_string(), |t| t.format("%Y-%m-%d %H:%M UTC").to_string());
    // `minutes` er minutter i API-et
    let duration = w
        .minutes
        .filter(|m| *m > 0.0)
        .map_or_else(|| "Unknown duration".to_string(), |m| format_duration((m * 60.0).round() as u64));
    let distance = summary
        .and_then(|s| s.distance_accum)
        .filter(|d| *d > 0.0)
        .map_or_else(|| "Unknown distance".to_string(), |d| format!("{:.2} km", d / 1000.0));

    let mut lines = vec![
        format!("{} - {}", display_name(w), start),
        format!("Duration: {duration}"),
        format!("Distance: {distance}"),
    ];
    if let Some(kcal) = summary.and_then(|s| s.calories_accum).filter(|c| *c > 0.0) {
        lines.push(format!("Calories: {kcal} kcal"));
    }
    if let Some(hr) = summary.and_then(|s| s.heart_rate_avg).filter(|h| *h > 0.0) {
        lines.push(format!("Avg Heart Rate: {hr} bpm"));
    }
    if let Some(v) = summary.and_then(|s| s.speed_avg).filter(|v| *v > 0.0) {
        lines.push(format!("Avg Speed: {:.1} km/h", v * 3.6));
    }
    lines.extend(metric_lines(&a.metrics));
    block(&lines)
}

/// Hele listen, skilt med blank linje.
pub fn render_workouts(workouts: &[AnalyzedWorkout]) -> String {
    if workouts.is_empty() {
        return format!("{NO_ACTIVITIES_MESSAGE}\n");
    }
    workouts
        .iter()
        .map(render_workout)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(36000), "10:00:00");
    }

    #[test]
    fn test_display_name() {
        let mut w = Workout::default();
        assert_eq!(display_name(&w), "Unknown");
        w.name = Some("morning ride".to_string());
        assert_eq!(display_name(&w), "Morning ride");
        w.name = Some("  ".to_string());
        assert_eq!(display_name(&w), "Unknown");
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(render_workouts(&[]), format!("{NO_ACTIVITIES_MESSAGE}\n"));
    }
}
