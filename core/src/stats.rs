//! Aggregates behind the dashboard and statistics views.
//!
//! Everything here is a pure function of a transaction list and a reference
//! date, so the views can be recomputed freely after every fetch.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::calendar::YearMonth;
use crate::models::{Account, Transaction};

/// Label for expenses without a tag.
pub const UNCATEGORIZED: &str = "Sin categoría";

/// Groups kept in the category breakdown.
pub const TOP_CATEGORIES: usize = 8;

/// Months covered by the trend chart, current month included.
pub const TREND_MONTHS: i32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Expenses grouped by tag name, largest first, top eight.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut groups: HashMap<&str, f64> = HashMap::new();
    let mut total = 0.0;
    for tx in transactions.iter().filter(|tx| !tx.is_income) {
        let name = tx.tag_name().unwrap_or(UNCATEGORIZED);
        *groups.entry(name).or_insert(0.0) += tx.amount;
        total += tx.amount;
    }

    let mut slices: Vec<CategorySlice> = groups
        .into_iter()
        .map(|(name, amount)| CategorySlice {
            name: name.to_string(),
            amount,
            percentage: if total > 0.0 { amount / total * 100.0 } else { 0.0 },
        })
        .collect();
    slices.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.name.cmp(&b.name))
    });
    slices.truncate(TOP_CATEGORIES);
    slices
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTotals {
    pub month: YearMonth,
    pub income: f64,
    pub expenses: f64,
}

impl MonthTotals {
    pub fn label(&self) -> &'static str {
        self.month.short_label()
    }

    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Income and expenses for each of the last six months, oldest first.
pub fn monthly_trend(transactions: &[Transaction], now: NaiveDate) -> Vec<MonthTotals> {
    let current = YearMonth::of(now);
    (0..TREND_MONTHS)
        .rev()
        .map(|back| {
            let month = current.shift(-back);
            let totals = totals_in(transactions, month);
            MonthTotals {
                month,
                income: totals.income,
                expenses: totals.expenses,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodTotals {
    pub income: f64,
    pub expenses: f64,
    pub count: usize,
}

impl PeriodTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Totals over every transaction given.
pub fn totals(transactions: &[Transaction]) -> PeriodTotals {
    transactions.iter().fold(PeriodTotals::default(), accumulate)
}

/// Totals over the transactions dated inside `month`.
pub fn totals_in(transactions: &[Transaction], month: YearMonth) -> PeriodTotals {
    transactions
        .iter()
        .filter(|tx| tx.date().is_some_and(|d| month.contains(d)))
        .fold(PeriodTotals::default(), accumulate)
}

fn accumulate(mut acc: PeriodTotals, tx: &Transaction) -> PeriodTotals {
    if tx.is_income {
        acc.income += tx.amount;
    } else {
        acc.expenses += tx.amount;
    }
    acc.count += 1;
    acc
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodComparison {
    pub current: PeriodTotals,
    pub previous: PeriodTotals,
    pub income_change: f64,
    pub expense_change: f64,
    pub count_change: f64,
}

/// `(current - previous) / previous * 100`, or 0 when there is no previous.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Current calendar month against the previous one.
pub fn period_comparison(transactions: &[Transaction], now: NaiveDate) -> PeriodComparison {
    let month = YearMonth::of(now);
    let current = totals_in(transactions, month);
    let previous = totals_in(transactions, month.previous());
    PeriodComparison {
        current,
        previous,
        income_change: percent_change(current.income, previous.income),
        expense_change: percent_change(current.expenses, previous.expenses),
        count_change: percent_change(current.count as f64, previous.count as f64),
    }
}

/// Share of income left after expenses, as a percentage.
pub fn savings_rate(totals: &PeriodTotals) -> f64 {
    if totals.income <= 0.0 {
        0.0
    } else {
        totals.net() / totals.income * 100.0
    }
}

/// Income earned per unit spent; `None` when nothing was spent.
pub fn income_expense_ratio(totals: &PeriodTotals) -> Option<f64> {
    (totals.expenses > 0.0).then(|| totals.income / totals.expenses)
}

/// Newest first; undated transactions sink to the end.
pub fn most_recent(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()).then_with(|| b.id.cmp(&a.id)));
    sorted.truncate(limit);
    sorted
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub balance: f64,
    pub month: PeriodTotals,
    pub recent: Vec<Transaction>,
}

pub fn dashboard_summary(
    accounts: &[Account],
    transactions: &[Transaction],
    now: NaiveDate,
) -> DashboardSummary {
    DashboardSummary {
        balance: accounts.iter().map(|a| a.money).sum(),
        month: totals_in(transactions, YearMonth::of(now)),
        recent: most_recent(transactions, 5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TagRef;

    fn tx(id: i64, amount: f64, is_income: bool, tag: Option<&str>, date: &str) -> Transaction {
        Transaction {
            id,
            amount,
            is_income,
            transaction_date: date.to_string(),
            description: None,
            tag_id: None,
            tag: tag.map(|name| TagRef {
                id: None,
                name: name.to_string(),
            }),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, 1200.0, true, Some("Nómina"), "2024-03-01"),
            tx(2, 300.0, false, Some("Comida"), "2024-03-03"),
            tx(3, 150.0, false, Some("Comida"), "2024-03-10"),
            tx(4, 60.0, false, None, "2024-03-12"),
            tx(5, 500.0, false, Some("Alquiler"), "2024-02-01"),
            tx(6, 900.0, true, None, "2024-02-28"),
            tx(7, 25.5, false, Some("  "), "2023-10-15"),
        ]
    }

    #[test]
    fn scenario_food_and_january_trend() {
        let txs = vec![
            tx(1, 100.0, true, None, "2024-01-05"),
            tx(2, 40.0, false, Some("Food"), "2024-01-10"),
        ];
        let breakdown = category_breakdown(&txs);
        assert_eq!(
            breakdown,
            vec![CategorySlice {
                name: "Food".into(),
                amount: 40.0,
                percentage: 100.0
            }]
        );

        let trend = monthly_trend(&txs, date(2024, 1, 31));
        let january = trend.last().unwrap();
        assert_eq!(january.month, YearMonth::new(2024, 1));
        assert_eq!(january.income, 100.0);
        assert_eq!(january.expenses, 40.0);
    }

    #[test]
    fn breakdown_sums_to_total_expenses() {
        let txs = sample();
        let breakdown = category_breakdown(&txs);
        let expense_total: f64 = txs.iter().filter(|t| !t.is_income).map(|t| t.amount).sum();
        let breakdown_total: f64 = breakdown.iter().map(|s| s.amount).sum();
        assert!((expense_total - breakdown_total).abs() < 1e-9);

        let pct: f64 = breakdown.iter().map(|s| s.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_sorted_and_blank_tags_uncategorized() {
        let breakdown = category_breakdown(&sample());
        let names: Vec<&str> = breakdown.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alquiler", "Comida", UNCATEGORIZED]);
        assert_eq!(breakdown[2].amount, 85.5);
    }

    #[test]
    fn breakdown_keeps_top_eight() {
        let txs: Vec<Transaction> = (0..12)
            .map(|i| {
                let name = format!("tag-{i:02}");
                tx(i, (i + 1) as f64, false, Some(name.as_str()), "2024-01-01")
            })
            .collect();
        let breakdown = category_breakdown(&txs);
        assert_eq!(breakdown.len(), TOP_CATEGORIES);
        assert_eq!(breakdown[0].name, "tag-11");
        assert_eq!(breakdown[7].name, "tag-04");
    }

    #[test]
    fn breakdown_empty_without_expenses() {
        let txs = vec![tx(1, 10.0, true, None, "2024-01-01")];
        assert!(category_breakdown(&txs).is_empty());
    }

    #[test]
    fn trend_always_six_months_oldest_first() {
        let trend = monthly_trend(&[], date(2024, 2, 15));
        assert_eq!(trend.len(), 6);
        assert_eq!(trend[0].month, YearMonth::new(2023, 9));
        assert_eq!(trend[5].month, YearMonth::new(2024, 2));
        assert!(trend.iter().all(|m| m.income == 0.0 && m.expenses == 0.0));
        assert_eq!(trend[0].label(), "sep");
    }

    #[test]
    fn trend_buckets_by_month() {
        let trend = monthly_trend(&sample(), date(2024, 3, 20));
        assert_eq!(trend[5].income, 1200.0);
        assert_eq!(trend[5].expenses, 510.0);
        assert_eq!(trend[4].income, 900.0);
        assert_eq!(trend[4].expenses, 500.0);
        assert_eq!(trend[0].month, YearMonth::new(2023, 10));
        assert_eq!(trend[0].expenses, 25.5);
        assert_eq!(trend[5].net(), 690.0);
    }

    #[test]
    fn comparison_against_previous_month() {
        let cmp = period_comparison(&sample(), date(2024, 3, 20));
        assert_eq!(cmp.current.count, 4);
        assert_eq!(cmp.previous.count, 2);
        assert!((cmp.income_change - 33.333_333).abs() < 1e-3);
        assert!((cmp.expense_change - 2.0).abs() < 1e-9);
        assert_eq!(cmp.count_change, 100.0);
    }

    #[test]
    fn comparison_zero_previous_is_zero_change() {
        let txs = vec![tx(1, 50.0, true, None, "2024-05-02")];
        let cmp = period_comparison(&txs, date(2024, 5, 10));
        assert_eq!(cmp.previous, PeriodTotals::default());
        assert_eq!(cmp.income_change, 0.0);
        assert_eq!(cmp.expense_change, 0.0);
        assert_eq!(cmp.count_change, 0.0);
        assert!(cmp.income_change.is_finite());
    }

    #[test]
    fn comparison_across_new_year() {
        let txs = vec![
            tx(1, 100.0, false, None, "2023-12-20"),
            tx(2, 50.0, false, None, "2024-01-03"),
        ];
        let cmp = period_comparison(&txs, date(2024, 1, 4));
        assert_eq!(cmp.expense_change, -50.0);
    }

    #[test]
    fn savings_rate_handles_no_income() {
        assert_eq!(savings_rate(&PeriodTotals::default()), 0.0);
        let t = PeriodTotals {
            income: 200.0,
            expenses: 150.0,
            count: 2,
        };
        assert_eq!(savings_rate(&t), 25.0);
    }

    #[test]
    fn dashboard_summary_sums_balances_and_picks_recent() {
        let accounts = vec![
            Account {
                id: 1,
                name: "Banco".into(),
                money: 1000.0,
                category_id: None,
            },
            Account {
                id: 2,
                name: "Efectivo".into(),
                money: 55.5,
                category_id: None,
            },
        ];
        let summary = dashboard_summary(&accounts, &sample(), date(2024, 3, 20));
        assert_eq!(summary.balance, 1055.5);
        assert_eq!(summary.month.income, 1200.0);
        assert_eq!(summary.recent.len(), 5);
        assert_eq!(summary.recent[0].id, 4);
        assert_eq!(summary.recent[4].id, 6);
    }

    #[test]
    fn ratio_needs_some_spending() {
        let none = PeriodTotals {
            income: 100.0,
            expenses: 0.0,
            count: 1,
        };
        let some = PeriodTotals {
            income: 150.0,
            expenses: 60.0,
            count: 2,
        };
        assert_eq!(income_expense_ratio(&none), None);
        assert_eq!(income_expense_ratio(&some), Some(2.5));
    }
}
