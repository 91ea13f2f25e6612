//! The remote accounting service seam.
//!
//! [`DataService`] is the interface the resolver and the concept flows are
//! written against; [`QboDataService`] is the HTTP implementation over a
//! context and agent. Tests substitute an in-memory implementation.

use ureq::Agent;

use crate::{
    functions,
    reports::{Report, ReportQuery},
    types::{QBEntity, QBSendable},
    APIResult, QBContext,
};

/// Remote accounting service operations used by the flows.
///
/// All calls are synchronous; the caller's thread blocks for the round
/// trip. Errors propagate unchanged — retry-on-401 belongs to
/// [`crate::RefreshableQBContext::with_reauth`], wrapped around the whole
/// top-level operation, not to individual calls.
pub trait DataService {
    /// Queries entities matching a `where` clause, capped at
    /// `max_results` rows in service order.
    ///
    /// # Errors
    /// Propagates remote failures.
    fn query<T: QBEntity>(&mut self, where_clause: &str, max_results: usize) -> APIResult<Vec<T>>;

    /// Persists a new entity, returning the server's id-bearing copy.
    ///
    /// # Errors
    /// Propagates remote failures.
    fn add<T: QBEntity>(&mut self, entity: &T) -> APIResult<T>;

    /// Full update of a persisted entity.
    ///
    /// # Errors
    /// Propagates remote failures; fails when id or sync token is unset.
    fn update<T: QBEntity>(&mut self, entity: &T) -> APIResult<T>;

    /// Fetches a persisted entity by id.
    ///
    /// # Errors
    /// Propagates remote failures.
    fn read<T: QBEntity>(&mut self, id: &str) -> APIResult<T>;

    /// Emails a sendable document to the given address.
    ///
    /// # Errors
    /// Propagates remote failures; fails when the document has no id.
    fn send_email<T: QBEntity + QBSendable>(&mut self, entity: &T, send_to: &str) -> APIResult<T>;

    /// Executes a report.
    ///
    /// # Errors
    /// Propagates remote failures.
    fn report(&mut self, query: &ReportQuery) -> APIResult<Report>;
}

/// HTTP-backed [`DataService`] over a [`QBContext`] and [`Agent`].
pub struct QboDataService<'a> {
    qb: &'a QBContext,
    client: &'a Agent,
}

impl<'a> QboDataService<'a> {
    #[must_use]
    pub fn new(qb: &'a QBContext, client: &'a Agent) -> Self {
        QboDataService { qb, client }
    }
}

impl DataService for QboDataService<'_> {
    fn query<T: QBEntity>(&mut self, where_clause: &str, max_results: usize) -> APIResult<Vec<T>> {
        functions::qb_query(where_clause, max_results, self.qb, self.client)
    }

    fn add<T: QBEntity>(&mut self, entity: &T) -> APIResult<T> {
        functions::qb_create(entity, self.qb, self.client)
    }

    fn update<T: QBEntity>(&mut self, entity: &T) -> APIResult<T> {
        functions::qb_update(entity, self.qb, self.client)
    }

    fn read<T: QBEntity>(&mut self, id: &str) -> APIResult<T> {
        functions::qb_get_single(id, self.qb, self.client)
    }

    fn send_email<T: QBEntity + QBSendable>(&mut self, entity: &T, send_to: &str) -> APIResult<T> {
        functions::qb_send_email(entity, send_to, self.qb, self.client)
    }

    fn report(&mut self, query: &ReportQuery) -> APIResult<Report> {
        functions::qb_report(query, self.qb, self.client)
    }
}
