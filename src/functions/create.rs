use ureq::{http::Method, Agent};

use super::{qb_request, QBResponse};
use crate::{types::QBEntity, APIResult, QBContext};

/// Persists a new entity and returns the server's copy, which carries the
/// assigned id and sync token.
///
/// # Errors
/// Propagates transport, authorization, and fault responses.
pub fn qb_create<T: QBEntity>(entity: &T, qb: &QBContext, client: &Agent) -> APIResult<T> {
    let response: QBResponse<T> = qb_request(
        qb,
        client,
        Method::POST,
        &format!("company/{}/{}", qb.company_id, T::resource()),
        Some(entity),
        None,
        None::<[(&str, &str); 0]>,
    )?;

    log::info!(
        "Successfully created {} object with ID : {}",
        T::type_name(),
        response.object.id().map_or("<none>", String::as_str)
    );

    Ok(response.object)
}
