//! Last-12-months creation analytics for the admin dashboard.
//!
//! The database returns one row per month that had activity; the series
//! builder fills the empty months so the chart always has 12 points.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_database::repositories::analytics::{AnalyticsEntity, AnalyticsRepository};
use learnhub_entity::analytics::{MonthData, MonthlyCount, MonthlySeries};

/// Analytics service.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    analytics: AnalyticsRepository,
}

impl AnalyticsService {
    /// Create a new analytics service.
    pub fn new(analytics: AnalyticsRepository) -> Self {
        Self { analytics }
    }

    /// Accounts created per month over the last 12 months.
    pub async fn users_series(&self) -> AppResult<MonthlySeries> {
        self.series(AnalyticsEntity::Users).await
    }

    /// Courses created per month over the last 12 months.
    pub async fn courses_series(&self) -> AppResult<MonthlySeries> {
        self.series(AnalyticsEntity::Courses).await
    }

    /// Orders placed per month over the last 12 months.
    pub async fn orders_series(&self) -> AppResult<MonthlySeries> {
        self.series(AnalyticsEntity::Orders).await
    }

    async fn series(&self, entity: AnalyticsEntity) -> AppResult<MonthlySeries> {
        let now = Utc::now();
        let since = month_start(now.year(), now.month(), 11)?;
        let counts = self.analytics.monthly_counts(entity, since).await?;
        build_monthly_series(&counts, now)
    }
}

/// Fill the 12 calendar-month buckets ending at `now`'s month.
///
/// Each bucket is labelled with the last day of its month, e.g.
/// `"31 Aug 2026"`.
fn build_monthly_series(counts: &[MonthlyCount], now: DateTime<Utc>) -> AppResult<MonthlySeries> {
    let by_month: HashMap<(i32, u32), i64> = counts
        .iter()
        .map(|c| ((c.month.year(), c.month.month()), c.count))
        .collect();

    let mut last_12_months = Vec::with_capacity(12);
    for back in (0..12).rev() {
        let (year, month) = shift_months(now.year(), now.month(), back);
        let label = last_day_of_month(year, month)?.format("%d %b %Y").to_string();
        let count = by_month.get(&(year, month)).copied().unwrap_or(0);
        last_12_months.push(MonthData {
            month: label,
            count,
        });
    }

    Ok(MonthlySeries { last_12_months })
}

/// First instant of the month `back` months before the given one.
fn month_start(year: i32, month: u32, back: u32) -> AppResult<DateTime<Utc>> {
    let (year, month) = shift_months(year, month, back);
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
        .ok_or_else(|| AppError::internal("Invalid month arithmetic"))
}

fn shift_months(year: i32, month: u32, back: u32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 - back as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

fn last_day_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::internal("Invalid month arithmetic"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_series_has_12_points_ending_at_current_month() {
        let series = build_monthly_series(&[], at(2026, 8, 30)).unwrap();
        assert_eq!(series.last_12_months.len(), 12);
        assert_eq!(series.last_12_months[0].month, "30 Sep 2025");
        assert_eq!(series.last_12_months[11].month, "31 Aug 2026");
        assert!(series.last_12_months.iter().all(|m| m.count == 0));
    }

    #[test]
    fn test_counts_land_in_their_buckets() {
        let counts = vec![
            MonthlyCount {
                month: at(2026, 8, 1),
                count: 7,
            },
            MonthlyCount {
                month: at(2026, 2, 1),
                count: 3,
            },
        ];
        let series = build_monthly_series(&counts, at(2026, 8, 30)).unwrap();
        assert_eq!(series.last_12_months[11].count, 7);
        assert_eq!(series.last_12_months[5].count, 3);
        assert_eq!(series.last_12_months[5].month, "28 Feb 2026");
    }

    #[test]
    fn test_year_boundary() {
        let series = build_monthly_series(&[], at(2026, 1, 15)).unwrap();
        assert_eq!(series.last_12_months[0].month, "28 Feb 2025");
        assert_eq!(series.last_12_months[11].month, "31 Jan 2026");
    }

    #[test]
    fn test_month_start_window() {
        let since = month_start(2026, 8, 11).unwrap();
        assert_eq!(since, at(2025, 9, 1) - chrono::Duration::hours(12));
    }
}
