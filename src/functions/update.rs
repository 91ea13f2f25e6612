use ureq::{http::Method, Agent};

use super::{qb_request, QBResponse};
use crate::{error::APIError, types::QBEntity, APIResult, QBContext};

/// Sends a full update for a persisted entity and returns the server's
/// copy with the bumped sync token.
///
/// # Errors
/// [`APIError::MissingUpdateFields`] when the entity has no id or sync
/// token; otherwise propagates transport, authorization, and fault
/// responses.
pub fn qb_update<T: QBEntity>(entity: &T, qb: &QBContext, client: &Agent) -> APIResult<T> {
    if entity.id().is_none() || entity.sync_token().is_none() {
        return Err(APIError::MissingUpdateFields(T::type_name()));
    }

    let response: QBResponse<T> = qb_request(
        qb,
        client,
        Method::POST,
        &format!("company/{}/{}", qb.company_id, T::resource()),
        Some(entity),
        None,
        Some([("operation", "update")]),
    )?;

    log::info!(
        "Successfully updated {} object with ID : {}",
        T::type_name(),
        response.object.id().map_or("<none>", String::as_str)
    );

    Ok(response.object)
}
