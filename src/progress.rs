use crate::models::{
    ExerciseLog, FrequencyEntry, Metric, ProgressPoint, SetEntry, Trend, VolumePoint, WeightPoint,
    WorkoutDay,
};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// How many exercises the frequency ranking keeps.
const TOP_EXERCISES: usize = 5;

/// First date inside a trailing window of exactly `window_days` calendar
/// days ending today (today counts as one of them). Returned as an ISO date
/// string so callers can filter date-keyed records with a plain string
/// comparison.
pub fn window_start(today: NaiveDate, window_days: i64) -> String {
    (today - Duration::days(window_days - 1)).to_string()
}

/// Group exercise logs and body-weight entries by date.
///
/// Every date present in either input appears exactly once; a date present in
/// only one of them gets an empty exercise list or no weight. Logs with zero
/// sets are treated as absent. The `BTreeMap` keys are ISO dates, so
/// iteration is already chronological.
pub fn build_workout_days(
    exercises: &[ExerciseLog],
    body_weights: &BTreeMap<String, f64>,
) -> BTreeMap<String, WorkoutDay> {
    let mut days: BTreeMap<String, WorkoutDay> = BTreeMap::new();

    for log in exercises {
        if log.sets.is_empty() {
            continue;
        }
        days.entry(log.date.clone())
            .or_insert_with(|| empty_day(&log.date))
            .exercises
            .push(log.clone());
    }

    for (date, weight) in body_weights {
        days.entry(date.clone())
            .or_insert_with(|| empty_day(date))
            .body_weight = Some(*weight);
    }

    days
}

fn empty_day(date: &str) -> WorkoutDay {
    WorkoutDay {
        date: date.to_string(),
        exercises: Vec::new(),
        body_weight: None,
    }
}

/// Body weight over time. Days without an observation are omitted, never
/// interpolated or zero-filled.
pub fn weight_series(days: &BTreeMap<String, WorkoutDay>) -> Vec<WeightPoint> {
    days.values()
        .filter_map(|day| {
            day.body_weight.map(|weight| WeightPoint {
                date: day.date.clone(),
                weight,
            })
        })
        .collect()
}

/// Total training volume per day. Every day is emitted, including ones with
/// no exercises (a weight-only day charts as zero volume).
pub fn volume_series(days: &BTreeMap<String, WorkoutDay>) -> Vec<VolumePoint> {
    days.values()
        .map(|day| VolumePoint {
            date: day.date.clone(),
            total_volume: day.exercises.iter().map(ExerciseLog::total_volume).sum(),
            exercise_count: day.exercises.len(),
        })
        .collect()
}

/// The most-performed exercises in the window, at most [`TOP_EXERCISES`]
/// entries, descending by count. Ties keep first-seen order (stable sort).
pub fn exercise_frequency(days: &BTreeMap<String, WorkoutDay>) -> Vec<FrequencyEntry> {
    let mut counts: Vec<FrequencyEntry> = Vec::new();
    for day in days.values() {
        for log in &day.exercises {
            match counts.iter_mut().find(|entry| entry.name == log.name) {
                Some(entry) => entry.count += 1,
                None => counts.push(FrequencyEntry {
                    name: log.name.clone(),
                    count: 1,
                }),
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_EXERCISES);
    counts
}

/// Per-date progress for one exercise name (exact, case-sensitive match).
/// When the same name was logged more than once on a day, all of that day's
/// sets count toward the day's point. Empty when no day matches.
pub fn exercise_series(days: &BTreeMap<String, WorkoutDay>, name: &str) -> Vec<ProgressPoint> {
    days.values()
        .filter_map(|day| {
            let sets: Vec<&SetEntry> = day
                .exercises
                .iter()
                .filter(|log| log.name == name)
                .flat_map(|log| log.sets.iter())
                .collect();
            if sets.is_empty() {
                return None;
            }
            Some(progress_point(&day.date, &sets))
        })
        .collect()
}

fn progress_point(date: &str, sets: &[&SetEntry]) -> ProgressPoint {
    // Max and average only consider sets with actual load; sets logged at
    // weight 0 still count toward volume and reps.
    let loaded: Vec<f64> = sets
        .iter()
        .map(|set| set.weight)
        .filter(|weight| *weight > 0.0)
        .collect();

    let max_weight = loaded.iter().copied().fold(0.0, f64::max);
    let avg_weight = if loaded.is_empty() {
        0.0
    } else {
        loaded.iter().sum::<f64>() / loaded.len() as f64
    };

    ProgressPoint {
        date: date.to_string(),
        max_weight,
        avg_weight,
        total_volume: sets.iter().map(|set| set.volume()).sum(),
        total_reps: sets.iter().map(|set| set.reps as u64).sum(),
        sets: sets.len(),
    }
}

/// Percent change of `metric` from the first point to the last.
///
/// Needs at least two points, and a non-zero first value to be well defined;
/// otherwise there is no trend to report and `None` comes back instead of an
/// Infinity or NaN reaching the display layer.
pub fn trend(points: &[ProgressPoint], metric: Metric) -> Option<Trend> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => (first, last),
        _ => return None,
    };

    let baseline = metric.of(first);
    if baseline == 0.0 {
        return None;
    }

    let percent = (metric.of(last) - baseline) / baseline * 100.0;
    Some(Trend::from_percent(percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrendDirection;

    fn log(id: u64, date: &str, name: &str, sets: &[(u32, f64)]) -> ExerciseLog {
        ExerciseLog {
            id,
            name: name.to_string(),
            date: date.to_string(),
            sets: sets
                .iter()
                .map(|(reps, weight)| SetEntry {
                    reps: *reps,
                    weight: *weight,
                })
                .collect(),
        }
    }

    fn weights(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(date, weight)| (date.to_string(), *weight))
            .collect()
    }

    #[test]
    fn workout_days_union_of_dates_without_duplicates() {
        let exercises = vec![
            log(1, "2024-01-01", "Sentadilla", &[(5, 100.0)]),
            log(2, "2024-01-03", "Dominadas", &[(8, 0.0)]),
        ];
        let body_weights = weights(&[("2024-01-02", 80.0), ("2024-01-03", 79.5)]);

        let days = build_workout_days(&exercises, &body_weights);
        let dates: Vec<&str> = days.keys().map(String::as_str).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);

        assert!(days["2024-01-01"].body_weight.is_none());
        assert!(days["2024-01-02"].exercises.is_empty());
        assert_eq!(days["2024-01-03"].exercises.len(), 1);
        assert_eq!(days["2024-01-03"].body_weight, Some(79.5));
    }

    #[test]
    fn workout_days_skip_logs_with_no_sets() {
        let exercises = vec![log(1, "2024-01-01", "Sentadilla", &[])];
        let days = build_workout_days(&exercises, &BTreeMap::new());
        assert!(days.is_empty());
    }

    #[test]
    fn weight_series_only_days_with_an_observation() {
        let exercises = vec![log(1, "2024-01-01", "Sentadilla", &[(5, 100.0)])];
        let body_weights = weights(&[("2024-01-02", 80.0)]);
        let days = build_workout_days(&exercises, &body_weights);

        let series = weight_series(&days);
        assert_eq!(
            series,
            vec![WeightPoint {
                date: "2024-01-02".to_string(),
                weight: 80.0,
            }]
        );
    }

    #[test]
    fn volume_series_emits_every_day_even_without_exercises() {
        // Weight-only day: charts as zero volume, zero exercises.
        let body_weights = weights(&[("2024-01-01", 80.0)]);
        let days = build_workout_days(&[], &body_weights);

        let series = volume_series(&days);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].total_volume, 0.0);
        assert_eq!(series[0].exercise_count, 0);

        let weight = weight_series(&days);
        assert_eq!(weight.len(), 1);
        assert_eq!(weight[0].weight, 80.0);
    }

    #[test]
    fn volume_sums_reps_times_weight_across_all_sets() {
        let exercises = vec![
            log(1, "2024-01-01", "Sentadilla", &[(5, 100.0), (5, 100.0)]),
            log(2, "2024-01-01", "Dominadas", &[(10, 0.0)]),
        ];
        let days = build_workout_days(&exercises, &BTreeMap::new());

        let series = volume_series(&days);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].total_volume, 1000.0);
        assert_eq!(series[0].exercise_count, 2);
    }

    #[test]
    fn progress_point_metrics_for_a_single_day() {
        let exercises = vec![log(1, "2024-01-01", "Sentadilla", &[(5, 100.0), (5, 100.0)])];
        let days = build_workout_days(&exercises, &BTreeMap::new());

        let points = exercise_series(&days, "Sentadilla");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].total_volume, 1000.0);
        assert_eq!(points[0].max_weight, 100.0);
        assert_eq!(points[0].avg_weight, 100.0);
        assert_eq!(points[0].total_reps, 10);
        assert_eq!(points[0].sets, 2);
    }

    #[test]
    fn zero_weight_sets_excluded_from_max_and_avg_but_not_volume() {
        let exercises = vec![log(1, "2024-01-01", "Dominadas", &[(8, 0.0), (5, 10.0)])];
        let days = build_workout_days(&exercises, &BTreeMap::new());

        let points = exercise_series(&days, "Dominadas");
        assert_eq!(points[0].max_weight, 10.0);
        assert_eq!(points[0].avg_weight, 10.0);
        assert_eq!(points[0].total_volume, 50.0);
        assert_eq!(points[0].total_reps, 13);
    }

    #[test]
    fn all_bodyweight_sets_yield_zero_max_and_avg() {
        let exercises = vec![log(1, "2024-01-01", "Dominadas", &[(8, 0.0), (6, 0.0)])];
        let days = build_workout_days(&exercises, &BTreeMap::new());

        let points = exercise_series(&days, "Dominadas");
        assert_eq!(points[0].max_weight, 0.0);
        assert_eq!(points[0].avg_weight, 0.0);
        assert_eq!(points[0].total_reps, 14);
    }

    #[test]
    fn exercise_series_is_exact_match_and_sorted() {
        let exercises = vec![
            log(1, "2024-01-05", "Sentadilla", &[(5, 110.0)]),
            log(2, "2024-01-01", "Sentadilla", &[(5, 100.0)]),
            log(3, "2024-01-03", "sentadilla", &[(5, 200.0)]),
        ];
        let days = build_workout_days(&exercises, &BTreeMap::new());

        let points = exercise_series(&days, "Sentadilla");
        let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-05"]);
    }

    #[test]
    fn exercise_series_merges_repeated_logs_on_one_day() {
        let exercises = vec![
            log(1, "2024-01-01", "Sentadilla", &[(5, 100.0)]),
            log(2, "2024-01-01", "Sentadilla", &[(3, 120.0)]),
        ];
        let days = build_workout_days(&exercises, &BTreeMap::new());

        let points = exercise_series(&days, "Sentadilla");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].max_weight, 120.0);
        assert_eq!(points[0].total_volume, 860.0);
        assert_eq!(points[0].sets, 2);
    }

    #[test]
    fn exercise_series_empty_when_nothing_matches() {
        let exercises = vec![log(1, "2024-01-01", "Sentadilla", &[(5, 100.0)])];
        let days = build_workout_days(&exercises, &BTreeMap::new());
        assert!(exercise_series(&days, "Peck deck").is_empty());
    }

    #[test]
    fn frequency_ranks_by_count_with_deterministic_ties() {
        let exercises = vec![
            log(1, "2024-01-01", "Sentadilla", &[(5, 100.0)]),
            log(2, "2024-01-01", "Remo en polea", &[(10, 40.0)]),
            log(3, "2024-01-02", "Sentadilla", &[(5, 102.5)]),
            log(4, "2024-01-02", "Peck deck", &[(12, 35.0)]),
            log(5, "2024-01-03", "Peck deck", &[(12, 37.5)]),
        ];
        let days = build_workout_days(&exercises, &BTreeMap::new());

        let ranking = exercise_frequency(&days);
        assert!(ranking.len() <= 5);
        // Sentadilla and Peck deck tie at 2, both above Remo en polea; the
        // tie resolves to first-seen order.
        assert_eq!(ranking[0].name, "Sentadilla");
        assert_eq!(ranking[0].count, 2);
        assert_eq!(ranking[1].name, "Peck deck");
        assert_eq!(ranking[1].count, 2);
        assert_eq!(ranking[2].name, "Remo en polea");
        assert_eq!(ranking[2].count, 1);
    }

    #[test]
    fn frequency_caps_at_five_entries() {
        let names = [
            "Sentadilla",
            "Peck deck",
            "Dominadas",
            "Remo en polea",
            "Press Frances",
            "Curl Femoral",
            "Pantorrilla",
        ];
        let exercises: Vec<ExerciseLog> = names
            .iter()
            .enumerate()
            .map(|(i, name)| log(i as u64 + 1, "2024-01-01", name, &[(5, 20.0)]))
            .collect();
        let days = build_workout_days(&exercises, &BTreeMap::new());

        assert_eq!(exercise_frequency(&days).len(), 5);
    }

    #[test]
    fn trend_improvement_between_two_sessions() {
        let exercises = vec![
            log(1, "2024-01-01", "Sentadilla", &[(5, 100.0)]),
            log(2, "2024-01-08", "Sentadilla", &[(5, 110.0)]),
        ];
        let days = build_workout_days(&exercises, &BTreeMap::new());
        let points = exercise_series(&days, "Sentadilla");

        let trend = trend(&points, Metric::MaxWeight).expect("two points give a trend");
        assert!((trend.percent_change - 10.0).abs() < 1e-9);
        assert_eq!(trend.direction, TrendDirection::Improving);
        assert_eq!(trend.label, "+10.0%");
    }

    #[test]
    fn trend_needs_at_least_two_points() {
        let exercises = vec![log(1, "2024-01-01", "Sentadilla", &[(5, 100.0)])];
        let days = build_workout_days(&exercises, &BTreeMap::new());
        let points = exercise_series(&days, "Sentadilla");

        assert!(trend(&points, Metric::MaxWeight).is_none());
        assert!(trend(&[], Metric::TotalVolume).is_none());
    }

    #[test]
    fn trend_undefined_when_baseline_is_zero() {
        let exercises = vec![
            log(1, "2024-01-01", "Dominadas", &[(8, 0.0)]),
            log(2, "2024-01-08", "Dominadas", &[(8, 10.0)]),
        ];
        let days = build_workout_days(&exercises, &BTreeMap::new());
        let points = exercise_series(&days, "Dominadas");

        assert!(trend(&points, Metric::MaxWeight).is_none());
    }

    #[test]
    fn trend_declining_and_flat() {
        let exercises = vec![
            log(1, "2024-01-01", "Sentadilla", &[(5, 100.0)]),
            log(2, "2024-01-08", "Sentadilla", &[(5, 90.0)]),
        ];
        let days = build_workout_days(&exercises, &BTreeMap::new());
        let points = exercise_series(&days, "Sentadilla");

        let down = trend(&points, Metric::MaxWeight).unwrap();
        assert_eq!(down.direction, TrendDirection::Declining);
        assert!((down.percent_change + 10.0).abs() < 1e-9);

        let same = vec![points[0].clone(), points[0].clone()];
        let flat = trend(&same, Metric::MaxWeight).unwrap();
        assert_eq!(flat.direction, TrendDirection::Flat);
        assert_eq!(flat.label, "+0.0%");
    }

    #[test]
    fn aggregation_does_not_mutate_input_and_is_idempotent() {
        let exercises = vec![
            log(1, "2024-01-01", "Sentadilla", &[(5, 100.0)]),
            log(2, "2024-01-02", "Peck deck", &[(12, 35.0)]),
        ];
        let body_weights = weights(&[("2024-01-01", 80.0)]);
        let snapshot = exercises.clone();

        let days_a = build_workout_days(&exercises, &body_weights);
        let days_b = build_workout_days(&exercises, &body_weights);

        assert_eq!(exercises, snapshot);
        assert_eq!(volume_series(&days_a), volume_series(&days_b));
        assert_eq!(weight_series(&days_a), weight_series(&days_b));
        assert_eq!(exercise_frequency(&days_a), exercise_frequency(&days_b));
        assert_eq!(
            exercise_series(&days_a, "Sentadilla"),
            exercise_series(&days_b, "Sentadilla")
        );
    }

    #[test]
    fn window_start_spans_exactly_window_days() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        // 30 dates inclusive of today: 2024-01-03 through 2024-02-01.
        assert_eq!(window_start(today, 30), "2024-01-03");
        assert_eq!(window_start(today, 1), "2024-02-01");
    }
}
