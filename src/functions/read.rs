use ureq::{http::Method, Agent};

use super::{qb_request, QBResponse};
use crate::{error::APIError, types::QBEntity, APIResult, QBContext};

/// Re-reads a persisted entity in place from its id.
///
/// # Errors
/// [`APIError::MissingUpdateFields`] when the entity has no id yet;
/// otherwise propagates transport, authorization, and fault responses.
pub fn qb_read<T: QBEntity>(item: &mut T, qb: &QBContext, client: &Agent) -> APIResult<()> {
    let Some(id) = item.id() else {
        return Err(APIError::MissingUpdateFields(T::type_name()));
    };

    let fetched = qb_get_single(id, qb, client)?;
    *item = fetched;
    Ok(())
}

/// Retrieves an entity by id.
///
/// # Errors
/// Propagates transport, authorization, and fault responses.
pub fn qb_get_single<T: QBEntity>(id: &str, qb: &QBContext, client: &Agent) -> APIResult<T> {
    let response: QBResponse<T> = qb_request(
        qb,
        client,
        Method::GET,
        &format!("company/{}/{}/{}", qb.company_id, T::resource(), id),
        None::<&()>,
        None,
        None::<[(&str, &str); 0]>,
    )?;

    log::info!(
        "Successfully read {} object with ID : {}",
        T::type_name(),
        response.object.id().map_or("<none>", String::as_str)
    );

    Ok(response.object)
}
