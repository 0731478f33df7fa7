use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Period preset of the financial report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
    /// Bounds come from the request
    Custom,
}

impl ReportPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
            ReportPeriod::Quarter => "quarter",
            ReportPeriod::Year => "year",
            ReportPeriod::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "Esta semana",
            ReportPeriod::Month => "Este mes",
            ReportPeriod::Quarter => "Este trimestre",
            ReportPeriod::Year => "Este año",
            ReportPeriod::Custom => "Personalizado",
        }
    }

    pub fn all() -> Vec<ReportPeriod> {
        vec![
            ReportPeriod::Week,
            ReportPeriod::Month,
            ReportPeriod::Quarter,
            ReportPeriod::Year,
            ReportPeriod::Custom,
        ]
    }

    /// Calendar bounds of the preset containing `anchor`, inclusive
    ///
    /// `Custom` has no preset bounds and returns `None`.
    pub fn range(&self, anchor: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            ReportPeriod::Week => {
                let from = anchor - Duration::days(i64::from(anchor.weekday().num_days_from_monday()));
                Some((from, from + Duration::days(6)))
            }
            ReportPeriod::Month => {
                let from = anchor.with_day(1)?;
                Some((from, last_day_of_month(anchor.year(), anchor.month())?))
            }
            ReportPeriod::Quarter => {
                let first_month = (anchor.month0() / 3) * 3 + 1;
                let from = NaiveDate::from_ymd_opt(anchor.year(), first_month, 1)?;
                Some((from, last_day_of_month(anchor.year(), first_month + 2)?))
            }
            ReportPeriod::Year => Some((
                NaiveDate::from_ymd_opt(anchor.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(anchor.year(), 12, 31)?,
            )),
            ReportPeriod::Custom => None,
        }
    }
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
