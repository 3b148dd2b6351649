//! Daily summaries built from 3-hourly forecast samples.

use std::collections::BTreeMap;

use crate::model::{DaySummary, RawSample, UNKNOWN_DESCRIPTION};

/// The free forecast endpoint covers five days.
pub const MAX_FORECAST_DAYS: usize = 5;

const NOON: i64 = 12;

/// Group samples by date into at most [`MAX_FORECAST_DAYS`] summaries,
/// ascending by date. Samples without a date are ignored.
pub fn aggregate(samples: &[RawSample]) -> Vec<DaySummary> {
    let mut by_date: BTreeMap<&str, Vec<&RawSample>> = BTreeMap::new();
    for sample in samples {
        if let Some(date) = sample.date() {
            by_date.entry(date).or_default().push(sample);
        }
    }

    by_date
        .into_iter()
        .take(MAX_FORECAST_DAYS)
        .map(|(date, day)| summarize(date, &day))
        .collect()
}

fn summarize(date: &str, day: &[&RawSample]) -> DaySummary {
    let (min_c, max_c) = day
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.temp_c), hi.max(s.temp_c))
        });

    DaySummary {
        date: date.to_string(),
        min_c,
        max_c,
        description: representative_description(day),
    }
}

/// Description of the sample closest to noon; the earliest sample wins ties.
fn representative_description(day: &[&RawSample]) -> String {
    let mut best: Option<(i64, &RawSample)> = None;
    for sample in day {
        let Some(hour) = sample.hour() else { continue };
        let delta = (hour - NOON).abs();
        if best.is_none_or(|(best_delta, _)| delta < best_delta) {
            best = Some((delta, sample));
        }
    }

    best.and_then(|(_, s)| s.description.clone())
        .unwrap_or_else(|| UNKNOWN_DESCRIPTION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ts: &str, temp: f64, desc: &str) -> RawSample {
        RawSample::new(ts, temp, Some(desc))
    }

    #[test]
    fn empty_input_gives_no_days() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn min_and_max_per_date() {
        let days = aggregate(&[
            sample("2025-10-21 06:00:00", 18.5, "mist"),
            sample("2025-10-21 12:00:00", 27.0, "clear sky"),
            sample("2025-10-21 21:00:00", 15.25, "clear sky"),
            sample("2025-10-22 12:00:00", 30.0, "light rain"),
        ]);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2025-10-21");
        assert_eq!(days[0].min_c, 15.25);
        assert_eq!(days[0].max_c, 27.0);
        assert_eq!(days[1].date, "2025-10-22");
    }

    #[test]
    fn single_sample_day_has_equal_min_and_max() {
        let days = aggregate(&[sample("2025-10-21 09:00:00", 11.0, "fog")]);
        assert_eq!(days[0].min_c, days[0].max_c);
        assert_eq!(days[0].description, "fog");
    }

    #[test]
    fn dates_sorted_and_capped_at_five() {
        let input: Vec<RawSample> = [
            "2025-10-27", "2025-10-21", "2025-10-25", "2025-10-23", "2025-10-26", "2025-10-22",
            "2025-10-24",
        ]
        .iter()
        .map(|d| sample(&format!("{d} 12:00:00"), 20.0, "clear"))
        .collect();

        let dates: Vec<String> = aggregate(&input).into_iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            ["2025-10-21", "2025-10-22", "2025-10-23", "2025-10-24", "2025-10-25"]
        );
    }

    #[test]
    fn description_closest_to_noon() {
        let days = aggregate(&[
            sample("2025-10-21 00:00:00", 10.0, "clear sky"),
            sample("2025-10-21 15:00:00", 20.0, "broken clouds"),
            sample("2025-10-21 12:00:00", 22.0, "light rain"),
        ]);
        assert_eq!(days[0].description, "light rain");
    }

    #[test]
    fn tie_goes_to_first_in_input_order() {
        let days = aggregate(&[
            sample("2025-10-21 13:00:00", 20.0, "afternoon"),
            sample("2025-10-21 11:00:00", 20.0, "morning"),
        ]);
        assert_eq!(days[0].description, "afternoon");

        let days = aggregate(&[
            sample("2025-10-21 09:00:00", 20.0, "nine"),
            sample("2025-10-21 15:00:00", 20.0, "fifteen"),
        ]);
        assert_eq!(days[0].description, "nine");
    }

    #[test]
    fn no_parseable_hour_gives_unknown_description() {
        let days = aggregate(&[sample("2025-10-21", 3.0, "snow")]);
        assert_eq!(days[0].description, UNKNOWN_DESCRIPTION);
        assert_eq!(days[0].min_c, 3.0);
    }

    #[test]
    fn chosen_sample_without_conditions_gives_unknown_description() {
        let days = aggregate(&[
            RawSample::new("2025-10-21 12:00:00", 3.0, None::<String>),
            sample("2025-10-21 18:00:00", 1.0, "snow"),
        ]);
        assert_eq!(days[0].description, UNKNOWN_DESCRIPTION);
        assert_eq!(days[0].min_c, 1.0);
    }

    #[test]
    fn date_with_only_unusable_entries_is_absent() {
        let raw = r#"{"list": [
            {"dt_txt": "2025-10-23 12:00:00", "main": {"temp": 290.15}, "weather": []},
            {"dt_txt": "2025-10-24 12:00:00", "main": {}, "weather": [{"description": "rain"}]},
            {"dt_txt": "2025-10-24 15:00:00", "main": {"temp": "warm"}}
        ]}"#;

        let days = aggregate(&crate::parse::parse_forecast(raw).unwrap());
        let dates: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["2025-10-23"]);
    }

    #[test]
    fn samples_without_date_are_ignored() {
        let days = aggregate(&[
            sample("bogus", -50.0, "nope"),
            sample("2025-10-21 12:00:00", 5.0, "clear"),
        ]);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].min_c, 5.0);
    }
}
