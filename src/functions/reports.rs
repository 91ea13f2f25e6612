use ureq::{http::Method, Agent};

use super::qb_request;
use crate::{
    reports::{Report, ReportQuery},
    APIResult, QBContext,
};

/// Executes a report with the query's parameters.
///
/// # Errors
/// Propagates transport, authorization, and fault responses.
pub fn qb_report(report: &ReportQuery, qb: &QBContext, client: &Agent) -> APIResult<Report> {
    let path = format!(
        "company/{}/reports/{}",
        qb.company_id,
        report.name().url_name()
    );
    qb_request(
        qb,
        client,
        Method::GET,
        &path,
        None::<&()>,
        None,
        Some(report.params()),
    )
}
