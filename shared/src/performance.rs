use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_DAYS, PERFORMANCE_FETCH_ERROR};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// XP earned on one day of the chart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyXp {
    pub day: String,
    pub xp: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PerformanceResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<DailyXp>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PerformanceResponse {
    pub fn into_series(self) -> Result<Vec<DailyXp>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| PERFORMANCE_FETCH_ERROR.to_string()))
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Placeholder week shown when the stats API is unavailable: the seven days
/// ending `today`, oldest first, with a small upward trend.
pub fn fallback_week<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<DailyXp> {
    (0..FALLBACK_DAYS)
        .map(|index| {
            let days_back = (FALLBACK_DAYS - 1 - index) as i64;
            let date = today - Duration::days(days_back);
            DailyXp {
                day: day_name(date).to_string(),
                xp: index as u32 * 3 + rng.gen_range(0..3),
            }
        })
        .collect()
}

/// Maps a series onto a plot area padded inside a `width` by `height` surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub max_xp: u32,
    pub count: usize,
}

impl ChartScale {
    pub fn for_series(series: &[DailyXp], width: f64, height: f64, padding: f64) -> Self {
        let peak = series.iter().map(|d| d.xp).max().unwrap_or(0);
        Self {
            width,
            height,
            padding,
            max_xp: (peak.div_ceil(5) * 5).max(5),
            count: series.len(),
        }
    }

    fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    pub fn slot_width(&self) -> f64 {
        self.plot_width() / self.count.max(1) as f64
    }

    pub fn x_center(&self, index: usize) -> f64 {
        self.padding + self.slot_width() * (index as f64 + 0.5)
    }

    pub fn y(&self, xp: u32) -> f64 {
        let ratio = xp.min(self.max_xp) as f64 / self.max_xp as f64;
        self.padding + self.plot_height() * (1.0 - ratio)
    }

    /// Bar rectangle as (x, y, width, height).
    pub fn bar(&self, index: usize, xp: u32) -> (f64, f64, f64, f64) {
        let bar_width = self.slot_width() * 0.6;
        let top = self.y(xp);
        (
            self.x_center(index) - bar_width / 2.0,
            top,
            bar_width,
            self.baseline() - top,
        )
    }

    pub fn baseline(&self) -> f64 {
        self.padding + self.plot_height()
    }

    /// Horizontal grid lines as (xp value, y), bottom to top.
    pub fn grid_lines(&self) -> Vec<(u32, f64)> {
        let step = self.max_xp / 5;
        (0..=5).map(|i| (i * step, self.y(i * step))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(xp: u32) -> DailyXp {
        DailyXp { day: "Mon".to_string(), xp }
    }

    #[test]
    fn test_fallback_week_shape() {
        // 2026-10-14 is a Wednesday
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let week = fallback_week(today, &mut rng);

        let days: Vec<&str> = week.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, vec!["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]);
        for (index, entry) in week.iter().enumerate() {
            let base = index as u32 * 3;
            assert!(entry.xp >= base && entry.xp < base + 3);
        }
    }

    #[test]
    fn test_response_into_series() {
        let ok: PerformanceResponse =
            serde_json::from_str(r#"{"success":true,"data":[{"day":"Mon","xp":12}]}"#).unwrap();
        assert_eq!(ok.into_series(), Ok(vec![DailyXp { day: "Mon".to_string(), xp: 12 }]));

        let failed: PerformanceResponse =
            serde_json::from_str(r#"{"success":false,"message":"no stats"}"#).unwrap();
        assert_eq!(failed.into_series(), Err("no stats".to_string()));

        let bare: PerformanceResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(bare.into_series(), Err(PERFORMANCE_FETCH_ERROR.to_string()));
    }

    #[test]
    fn test_chart_scale() {
        let series = vec![day(0), day(7), day(3)];
        let scale = ChartScale::for_series(&series, 330.0, 230.0, 15.0);
        assert_eq!(scale.max_xp, 10);
        assert_eq!(scale.slot_width(), 100.0);
        assert_eq!(scale.x_center(1), 165.0);
        assert_eq!(scale.y(10), 15.0);
        assert_eq!(scale.y(0), 215.0);

        let (x, y, w, h) = scale.bar(0, 5);
        assert_eq!((x, y, w, h), (35.0, 115.0, 60.0, 100.0));

        let grid = scale.grid_lines();
        assert_eq!(grid.first(), Some(&(0, 215.0)));
        assert_eq!(grid.last(), Some(&(10, 15.0)));
    }

    #[test]
    fn test_chart_scale_empty_series() {
        let scale = ChartScale::for_series(&[], 100.0, 100.0, 10.0);
        assert_eq!(scale.max_xp, 5);
        assert_eq!(scale.slot_width(), 80.0);
    }
}
