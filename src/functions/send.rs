use ureq::{http::Method, Agent};

use super::{qb_request, QBResponse};
use crate::{
    error::APIError,
    types::{QBEntity, QBSendable},
    APIResult, QBContext,
};

/// Emails a sendable document (invoice, estimate) to the given address and
/// returns the server's copy with its updated delivery info.
///
/// # Errors
/// [`APIError::MissingUpdateFields`] when the document has no id yet;
/// otherwise propagates transport, authorization, and fault responses.
pub fn qb_send_email<T: QBEntity + QBSendable>(
    entity: &T,
    send_to: &str,
    qb: &QBContext,
    client: &Agent,
) -> APIResult<T> {
    let Some(id) = entity.id() else {
        return Err(APIError::MissingUpdateFields(T::type_name()));
    };

    let response: QBResponse<T> = qb_request(
        qb,
        client,
        Method::POST,
        &format!("company/{}/{}/{}/send", qb.company_id, T::resource(), id),
        None::<&()>,
        Some("application/octet-stream"),
        Some([("sendTo", send_to)]),
    )?;

    log::info!(
        "Successfully sent {} with ID {} to {}",
        T::type_name(),
        id,
        send_to
    );

    Ok(response.object)
}
