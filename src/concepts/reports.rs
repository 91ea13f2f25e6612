//! Reports concept: balance sheet and profit-and-loss over one period.

use chrono::NaiveDate;

use crate::{
    reports::{Report, ReportName, ReportQuery},
    service::DataService,
    APIResult,
};

/// Executes the balance sheet and profit-and-loss reports for the given
/// period, summarized by customer on an accrual basis, in that order.
///
/// # Errors
/// Propagates remote failures; a failing report aborts the sequence.
pub fn run<S: DataService>(
    service: &mut S,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> APIResult<Vec<Report>> {
    let mut reports = Vec::new();
    for name in [ReportName::BalanceSheet, ReportName::ProfitAndLoss] {
        let query = ReportQuery::new(name)
            .start_date(start_date)
            .end_date(end_date)
            .summarize_column_by("Customers")
            .accounting_method("Accrual");
        let report = service.report(&query)?;
        log::info!(
            "ReportName -> name: {}",
            report
                .header
                .report_name
                .as_deref()
                .unwrap_or("<unnamed>")
                .to_lowercase()
        );
        reports.push(report);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockDataService;

    #[test]
    fn both_reports_run_in_order() {
        let mut service = MockDataService::new();
        let reports = run(
            &mut service,
            NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2018, 4, 6).unwrap(),
        )
        .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].header.report_name.as_deref(), Some("BalanceSheet"));
        assert_eq!(
            reports[1].header.report_name.as_deref(),
            Some("ProfitAndLoss")
        );
        assert_eq!(
            service.calls,
            vec!["report BalanceSheet", "report ProfitAndLoss"]
        );
    }
}
