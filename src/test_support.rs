//! In-memory stand-ins for the remote collaborators, used across the
//! crate's tests.

use std::cell::Cell;
use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::{
    client::{TokenGrant, TokenRefresher},
    error::APIError,
    limiter::RateLimiter,
    reports::{Report, ReportHeader, ReportQuery},
    service::DataService,
    types::{QBEntity, QBSendable},
    APIResult, DiscoveryDoc, Environment, QBContext,
};

/// Offline context for exercising code paths that never hit the network.
pub(crate) fn context() -> QBContext {
    QBContext {
        environment: Environment::SANDBOX,
        company_id: "9130347".into(),
        access_token: "at-0".into(),
        expires_in: chrono::Utc::now() + chrono::Duration::hours(1),
        discovery_doc: DiscoveryDoc::default(),
        minor_version: "75".into(),
        limiter: RateLimiter::new(500, Duration::from_secs(60)),
    }
}

/// Refresher returning a fixed grant (or a fixed failure) and counting
/// how often it was asked.
pub(crate) struct ScriptedRefresher {
    grant: Option<(String, String)>,
    calls: Cell<u32>,
}

impl ScriptedRefresher {
    pub fn granting(access_token: &str, refresh_token: &str) -> Self {
        ScriptedRefresher {
            grant: Some((access_token.to_string(), refresh_token.to_string())),
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        ScriptedRefresher {
            grant: None,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl TokenRefresher for ScriptedRefresher {
    fn refresh(&self, _refresh_token: &str) -> APIResult<TokenGrant> {
        self.calls.set(self.calls.get() + 1);
        match &self.grant {
            Some((access_token, refresh_token)) => Ok(TokenGrant {
                access_token: access_token.clone(),
                refresh_token: refresh_token.clone(),
                expires_in: 3600,
            }),
            None => Err(APIError::InvalidClient),
        }
    }
}

/// In-memory [`DataService`]: entities are stored as JSON rows per type,
/// ids are assigned sequentially, and `where` clauses of the
/// `Field = 'value' and ...` form are evaluated against the rows.
pub(crate) struct MockDataService {
    store: HashMap<&'static str, Vec<Value>>,
    next_id: u64,
    /// One entry per service call, e.g. `"query Account"`.
    pub calls: Vec<String>,
    /// `(resource/id, recipient)` per emailed document.
    pub sent_emails: Vec<(String, String)>,
    scripted_failures: HashMap<usize, APIError>,
}

impl MockDataService {
    pub fn new() -> Self {
        MockDataService {
            store: HashMap::new(),
            next_id: 0,
            calls: Vec::new(),
            sent_emails: Vec::new(),
            scripted_failures: HashMap::new(),
        }
    }

    /// Makes the next service call fail with the given error.
    pub fn fail_next(&mut self, error: APIError) {
        self.fail_call(self.calls.len(), error);
    }

    /// Makes the `index`-th service call (0-based, counted across all
    /// calls) fail with the given error.
    pub fn fail_call(&mut self, index: usize, error: APIError) {
        self.scripted_failures.insert(index, error);
    }

    /// Stores an entity directly, bypassing call recording.
    pub fn seed<T: QBEntity>(&mut self, entity: T) -> T {
        let value = self
            .persist(&entity)
            .expect("seed entity must serialize to an object");
        serde_json::from_value(value).expect("seeded entity must round-trip")
    }

    pub fn count_stored(&self, type_name: &str) -> usize {
        self.store.get(type_name).map_or(0, Vec::len)
    }

    fn take_failure(&mut self) -> APIResult<()> {
        let current = self.calls.len().saturating_sub(1);
        match self.scripted_failures.remove(&current) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn persist<T: QBEntity>(&mut self, entity: &T) -> APIResult<Value> {
        let mut value = serde_json::to_value(entity)?;
        self.next_id += 1;
        value["Id"] = Value::String(self.next_id.to_string());
        value["SyncToken"] = Value::String("0".into());
        // The live service computes invoice totals from the lines.
        if T::type_name() == "Invoice" && value.get("TotalAmt").is_none() {
            let total: f64 = value
                .get("Line")
                .and_then(Value::as_array)
                .map(|lines| {
                    lines
                        .iter()
                        .filter_map(|line| line.get("Amount").and_then(Value::as_f64))
                        .sum()
                })
                .unwrap_or(0.0);
            value["TotalAmt"] = Value::from(total);
        }
        self.store
            .entry(T::type_name())
            .or_default()
            .push(value.clone());
        Ok(value)
    }

    /// Mirrors the service-side inventory decrement: invoiced quantities
    /// come off the referenced items' quantity on hand.
    fn apply_inventory_effects(&mut self, invoice: &Value) {
        let Some(lines) = invoice.get("Line").and_then(Value::as_array).cloned() else {
            return;
        };
        for line in lines {
            let Some(detail) = line.get("SalesItemLineDetail") else {
                continue;
            };
            let Some(item_id) = detail
                .pointer("/ItemRef/value")
                .and_then(Value::as_str)
                .map(String::from)
            else {
                continue;
            };
            let qty = detail.get("Qty").and_then(Value::as_f64).unwrap_or(0.0);
            if let Some(rows) = self.store.get_mut("Item") {
                for row in rows {
                    if row.get("Id").and_then(Value::as_str) == Some(item_id.as_str()) {
                        let on_hand = row.get("QtyOnHand").and_then(Value::as_f64);
                        if let Some(on_hand) = on_hand {
                            row["QtyOnHand"] = Value::from(on_hand - qty);
                        }
                    }
                }
            }
        }
    }
}

fn predicate_pairs(where_clause: &str) -> Vec<(String, String)> {
    let clause = where_clause.trim();
    let clause = clause
        .strip_prefix("where ")
        .or_else(|| clause.strip_prefix("WHERE "))
        .unwrap_or(clause);
    if clause.is_empty() {
        return Vec::new();
    }
    clause
        .replace(" AND ", " and ")
        .split(" and ")
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            Some((
                key.trim().to_string(),
                value.trim().trim_matches('\'').to_string(),
            ))
        })
        .collect()
}

fn row_matches(row: &Value, pairs: &[(String, String)]) -> bool {
    pairs.iter().all(|(key, expected)| {
        row.get(key).and_then(Value::as_str) == Some(expected.as_str())
    })
}

impl DataService for MockDataService {
    fn query<T: QBEntity>(&mut self, where_clause: &str, max_results: usize) -> APIResult<Vec<T>> {
        self.calls.push(format!("query {}", T::type_name()));
        self.take_failure()?;
        let pairs = predicate_pairs(where_clause);
        let rows: &[Value] = self.store.get(T::type_name()).map_or(&[], Vec::as_slice);
        rows.iter()
            .filter(|row| row_matches(row, &pairs))
            .take(max_results)
            .map(|row| Ok(serde_json::from_value(row.clone())?))
            .collect()
    }

    fn add<T: QBEntity>(&mut self, entity: &T) -> APIResult<T> {
        self.calls.push(format!("add {}", T::type_name()));
        self.take_failure()?;
        let value = self.persist(entity)?;
        if T::type_name() == "Invoice" {
            self.apply_inventory_effects(&value);
        }
        Ok(serde_json::from_value(value)?)
    }

    fn update<T: QBEntity>(&mut self, entity: &T) -> APIResult<T> {
        self.calls.push(format!("update {}", T::type_name()));
        self.take_failure()?;
        let (Some(id), Some(sync_token)) = (entity.id(), entity.sync_token()) else {
            return Err(APIError::MissingUpdateFields(T::type_name()));
        };
        let mut value = serde_json::to_value(entity)?;
        let bumped = sync_token.parse::<u64>().unwrap_or(0) + 1;
        value["SyncToken"] = Value::String(bumped.to_string());
        let rows = self.store.entry(T::type_name()).or_default();
        let Some(slot) = rows
            .iter_mut()
            .find(|row| row.get("Id").and_then(Value::as_str) == Some(id.as_str()))
        else {
            return Err(APIError::NoQueryResults(T::type_name()));
        };
        *slot = value.clone();
        Ok(serde_json::from_value(value)?)
    }

    fn read<T: QBEntity>(&mut self, id: &str) -> APIResult<T> {
        self.calls.push(format!("read {}", T::type_name()));
        self.take_failure()?;
        let rows: &[Value] = self.store.get(T::type_name()).map_or(&[], Vec::as_slice);
        rows.iter()
            .find(|row| row.get("Id").and_then(Value::as_str) == Some(id))
            .map(|row| Ok(serde_json::from_value(row.clone())?))
            .unwrap_or(Err(APIError::NoQueryResults(T::type_name())))
    }

    fn send_email<T: QBEntity + QBSendable>(&mut self, entity: &T, send_to: &str) -> APIResult<T> {
        self.calls.push(format!("send {}", T::type_name()));
        self.take_failure()?;
        let id = entity
            .id()
            .ok_or(APIError::MissingUpdateFields(T::type_name()))?;
        self.sent_emails
            .push((format!("{}/{}", T::resource(), id), send_to.to_string()));
        Ok(entity.clone())
    }

    fn report(&mut self, query: &ReportQuery) -> APIResult<Report> {
        self.calls.push(format!("report {}", query.name().url_name()));
        self.take_failure()?;
        Ok(Report {
            header: ReportHeader {
                report_name: Some(query.name().url_name().to_string()),
                ..ReportHeader::default()
            },
            ..Report::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[test]
    fn predicates_filter_rows() {
        let mut service = MockDataService::new();
        service.seed(samples::bank_account());
        service.seed(samples::credit_card_account());

        let banks: Vec<crate::types::Account> = service
            .query("where AccountType = 'Bank'", 10)
            .unwrap();
        assert_eq!(banks.len(), 1);

        let cards: Vec<crate::types::Account> = service
            .query("where AccountType = 'Credit Card' and AccountSubType = 'CreditCard'", 10)
            .unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn max_results_caps_the_rows() {
        let mut service = MockDataService::new();
        service.seed(samples::bank_account());
        service.seed(samples::bank_account());
        let rows: Vec<crate::types::Account> = service.query("", 1).unwrap();
        assert_eq!(rows.len(), 1);
    }
}
