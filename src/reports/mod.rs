//! Report names, query parameters, and the report response shape.
//!
//! Only the header is typed; rows and columns are passed through as raw
//! JSON, since their layout is owned by the service and varies per report.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

macro_rules! impl_report_names {
    ($($report:ident, $url_name:expr, [$($param:expr),* $(,)?];)+) => {
        /// Reports reachable through the reports endpoint.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum ReportName {
            $($report,)+
        }

        impl ReportName {
            #[must_use]
            pub fn url_name(self) -> &'static str {
                match self {
                    $(ReportName::$report => $url_name,)+
                }
            }

            #[must_use]
            pub fn valid_query_params(self) -> &'static [&'static str] {
                match self {
                    $(ReportName::$report => &[$($param),*],)+
                }
            }
        }
    };
}

impl_report_names!(
  BalanceSheet, "BalanceSheet", ["customer", "qzurl", "end_date", "accounting_method", "date_macro", "adjusted_gain_loss", "class", "item", "sort_order", "summarize_column_by", "department", "vendor", "start_date"];
  ProfitAndLoss, "ProfitAndLoss", ["customer", "qzurl", "accounting_method", "end_date", "date_macro", "adjusted_gain_loss", "class", "item", "sort_order", "summarize_column_by", "department", "vendor", "start_date"];
  CashFlow, "CashFlow", ["customer", "vendor", "end_date", "date_macro", "class", "item", "sort_order", "summarize_column_by", "department", "start_date"];
  TrialBalance, "TrialBalance", ["accounting_method", "end_date", "date_macro", "sort_order", "summarize_column_by", "start_date"];
  CustomerBalance, "CustomerBalance", ["customer", "accounting_method", "date_macro", "arpaid", "report_date", "sort_order", "summarize_column_by", "department"];
  VendorBalance, "VendorBalance", ["qzurl", "accounting_method", "date_macro", "appaid", "report_date", "sort_order", "summarize_column_by", "department", "vendor"];
);

/// A report request: the report name plus its validated query parameters.
#[derive(Debug, Clone)]
pub struct ReportQuery {
    name: ReportName,
    params: Vec<(&'static str, String)>,
}

impl ReportQuery {
    #[must_use]
    pub fn new(name: ReportName) -> Self {
        ReportQuery {
            name,
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> ReportName {
        self.name
    }

    pub(crate) fn params(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.params
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
    }

    /// Adds a query parameter, dropping keys the report does not accept.
    #[must_use]
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        if self.name.valid_query_params().contains(&key) {
            self.params.push((key, value.to_string()));
        } else {
            log::warn!(
                "parameter {key} is not valid for report {}, ignoring",
                self.name.url_name()
            );
        }
        self
    }

    #[must_use]
    pub fn start_date(self, date: NaiveDate) -> Self {
        self.param("start_date", date.format("%Y-%m-%d"))
    }

    #[must_use]
    pub fn end_date(self, date: NaiveDate) -> Self {
        self.param("end_date", date.format("%Y-%m-%d"))
    }

    #[must_use]
    pub fn summarize_column_by(self, criteria: &str) -> Self {
        self.param("summarize_column_by", criteria)
    }

    #[must_use]
    pub fn accounting_method(self, method: &str) -> Self {
        self.param("accounting_method", method)
    }
}

/// Report payload: typed header, raw rows and columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Report {
    pub header: ReportHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReportHeader {
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarize_columns_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_params_are_dropped() {
        let query = ReportQuery::new(ReportName::TrialBalance)
            .accounting_method("Accrual")
            .param("vendor", "42");
        let params: Vec<_> = query.params().collect();
        assert_eq!(params, vec![("accounting_method", "Accrual")]);
    }

    #[test]
    fn date_params_format_as_iso() {
        let query = ReportQuery::new(ReportName::BalanceSheet)
            .start_date(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
            .end_date(NaiveDate::from_ymd_opt(2018, 4, 6).unwrap());
        let params: Vec<_> = query.params().collect();
        assert_eq!(
            params,
            vec![("start_date", "2018-01-01"), ("end_date", "2018-04-06")]
        );
    }

    #[test]
    fn report_header_parses() {
        let body = r#"{
            "Header": {"Time": "2024-03-11T10:12:32Z", "ReportName": "BalanceSheet", "Currency": "USD"},
            "Columns": {"Column": []},
            "Rows": {"Row": []}
        }"#;
        let report: Report = serde_json::from_str(body).unwrap();
        assert_eq!(report.header.report_name.as_deref(), Some("BalanceSheet"));
        assert!(report.rows.is_some());
    }
}
