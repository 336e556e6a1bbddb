//! Month arithmetic and the per-day grouping behind the calendar view.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::format::{MONTH_SHORT, month_title};
use crate::models::Transaction;

/// A calendar month. Only built through [`YearMonth::new`], so `month` is
/// always in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `month` is clamped into 1..=12.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// The date for `day` of this month, if it exists.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Move by `delta` months, crossing year boundaries.
    pub fn shift(self, delta: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + delta;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn previous(self) -> Self {
        self.shift(-1)
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn last_day(self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .unwrap_or_else(|| self.first_day())
    }

    pub fn days(self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    pub fn short_label(self) -> &'static str {
        MONTH_SHORT[(self.month - 1) as usize]
    }

    pub fn title(self) -> String {
        month_title(self.year, self.month)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTotals {
    pub income: f64,
    pub expenses: f64,
    pub count: usize,
}

impl DayTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Totals keyed by day of month, only for days with activity.
pub fn daily_totals(transactions: &[Transaction], month: YearMonth) -> BTreeMap<u32, DayTotals> {
    let mut days: BTreeMap<u32, DayTotals> = BTreeMap::new();
    for tx in transactions {
        let Some(date) = tx.date() else { continue };
        if !month.contains(date) {
            continue;
        }
        let entry = days.entry(date.day()).or_default();
        if tx.is_income {
            entry.income += tx.amount;
        } else {
            entry.expenses += tx.amount;
        }
        entry.count += 1;
    }
    days
}

/// Transactions dated on `date`, in their original order.
pub fn transactions_on(transactions: &[Transaction], date: NaiveDate) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.date() == Some(date))
        .cloned()
        .collect()
}

/// Monday-first grid of weeks; `None` pads days outside the month.
pub fn month_grid(month: YearMonth) -> Vec<[Option<u32>; 7]> {
    let lead = month.first_day().weekday().num_days_from_monday() as usize;
    let total = month.days() as usize;
    let cells = (lead + total).div_ceil(7) * 7;

    let mut weeks = Vec::with_capacity(cells / 7);
    let mut week = [None; 7];
    for cell in 0..cells {
        week[cell % 7] = if cell >= lead && cell < lead + total {
            Some((cell - lead + 1) as u32)
        } else {
            None
        };
        if cell % 7 == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    weeks
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, amount: f64, is_income: bool, date: &str) -> Transaction {
        Transaction {
            id,
            amount,
            is_income,
            transaction_date: date.to_string(),
            description: None,
            tag_id: None,
            tag: None,
        }
    }

    #[test]
    fn shift_crosses_year_boundaries() {
        let jan = YearMonth::new(2024, 1);
        assert_eq!(jan.previous(), YearMonth::new(2023, 12));
        assert_eq!(YearMonth::new(2023, 12).next(), jan);
        assert_eq!(jan.shift(-13), YearMonth::new(2022, 12));
        assert_eq!(jan.shift(25), YearMonth::new(2026, 2));
    }

    #[test]
    fn month_bounds() {
        let feb = YearMonth::new(2024, 2);
        assert_eq!(feb.days(), 29);
        assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(feb.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!feb.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert_eq!(YearMonth::new(2023, 12).days(), 31);
    }

    #[test]
    fn grid_is_monday_first_and_padded() {
        // 1 January 2024 is a Monday.
        let grid = month_grid(YearMonth::new(2024, 1));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][0], Some(1));
        assert_eq!(grid[4][2], Some(31));
        assert_eq!(grid[4][3], None);

        // 1 September 2024 is a Sunday.
        let grid = month_grid(YearMonth::new(2024, 9));
        assert_eq!(grid[0][..6], [None::<u32>; 6]);
        assert_eq!(grid[0][6], Some(1));
        assert_eq!(grid.len(), 6);
    }

    #[test]
    fn daily_totals_group_by_day_within_month() {
        let txs = vec![
            tx(1, 100.0, true, "2024-01-05"),
            tx(2, 40.0, false, "2024-01-05T12:00:00Z"),
            tx(3, 10.0, false, "2024-01-20"),
            tx(4, 99.0, false, "2024-02-05"),
            tx(5, 1.0, false, "sin fecha"),
        ];
        let days = daily_totals(&txs, YearMonth::new(2024, 1));
        assert_eq!(days.len(), 2);
        let fifth = days[&5];
        assert_eq!(fifth.income, 100.0);
        assert_eq!(fifth.expenses, 40.0);
        assert_eq!(fifth.count, 2);
        assert_eq!(fifth.net(), 60.0);
        assert_eq!(days[&20].expenses, 10.0);
    }

    #[test]
    fn transactions_on_matches_exact_date() {
        let txs = vec![tx(1, 1.0, true, "2024-01-05"), tx(2, 2.0, true, "2024-01-06")];
        let day = transactions_on(&txs, NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].id, 2);
    }

    #[test]
    fn out_of_range_month_is_clamped() {
        let low = YearMonth::new(2024, 0);
        assert_eq!(low.month(), 1);
        assert_eq!(low.short_label(), "ene");
        assert_eq!(low.first_day(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let high = YearMonth::new(2024, 13);
        assert_eq!((high.year(), high.month()), (2024, 12));
        assert_eq!(high.day(31), NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(high.day(32), None);
    }
}
