use chrono::{DateTime, Utc};
use serde::Deserialize;
use ureq::{http::Method, Agent};

use super::qb_request;
use crate::{error::APIError, types::QBEntity, APIResult, QBContext};

/// Runs a `select * from <entity> <where_clause>` query with an explicit
/// result-size cap.
///
/// The clause may be empty to match everything. Ordering is the service's;
/// callers that take the first row accept "first match wins".
///
/// # Errors
/// Propagates transport, authorization, and fault responses.
pub fn qb_query<T: QBEntity>(
    where_clause: &str,
    max_results: usize,
    qb: &QBContext,
    client: &Agent,
) -> APIResult<Vec<T>> {
    let sql = if where_clause.is_empty() {
        format!("select * from {} MAXRESULTS {max_results}", T::type_name())
    } else {
        format!(
            "select * from {} {where_clause} MAXRESULTS {max_results}",
            T::type_name()
        )
    };
    let response: QueryResponseExt<T> = qb_request(
        qb,
        client,
        Method::GET,
        &format!("company/{}/query", qb.company_id),
        None::<&()>,
        None,
        Some([("query", sql.as_str())]),
    )?;

    Ok(response.query_response.items)
}

/// Like [`qb_query`] capped at one row, failing when nothing matches.
///
/// # Errors
/// [`APIError::NoQueryResults`] when the query comes back empty.
pub fn qb_query_single<T: QBEntity>(
    where_clause: &str,
    qb: &QBContext,
    client: &Agent,
) -> APIResult<T> {
    qb_query(where_clause, 1, qb, client)?
        .pop()
        .ok_or(APIError::NoQueryResults(T::type_name()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryResponse<T> {
    #[serde(rename = "totalCount")]
    pub total_count: i64,
    #[serde(
        alias = "Account",
        alias = "Vendor",
        alias = "Term",
        alias = "Customer",
        alias = "Item",
        alias = "Invoice",
        alias = "Estimate",
        alias = "JournalEntry",
        alias = "Bill",
        alias = "BillPayment",
        alias = "VendorCredit",
        alias = "Payment"
    )]
    pub(crate) items: Vec<T>,
    #[serde(rename = "startPosition")]
    pub start_position: i64,
    #[serde(rename = "maxResults")]
    pub max_results: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponseExt<T> {
    #[serde(default, rename = "QueryResponse")]
    pub query_response: QueryResponse<T>,
    #[serde(default, rename = "time")]
    pub time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;

    #[test]
    fn empty_query_response_deserializes_to_no_items() {
        let body = r#"{"QueryResponse": {}, "time": "2024-03-11T10:12:32Z"}"#;
        let parsed: QueryResponseExt<Account> = serde_json::from_str(body).unwrap();
        assert!(parsed.query_response.items.is_empty());
    }

    #[test]
    fn items_come_back_under_the_entity_alias() {
        let body = r#"{
            "QueryResponse": {
                "Account": [{"Id": "85", "Name": "Checking", "AccountType": "Bank"}],
                "startPosition": 1,
                "maxResults": 1,
                "totalCount": 1
            }
        }"#;
        let parsed: QueryResponseExt<Account> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.query_response.items.len(), 1);
        assert_eq!(parsed.query_response.items[0].id.as_deref(), Some("85"));
    }
}
