use crate::APIResult;
use serde::Serialize;
use ureq::{
    http::{request::Builder, Method, Request},
    SendBody,
};
mod context;
mod refresh;
pub use context::QBContext;
pub use refresh::{OAuthRefresher, RefreshableQBContext, TokenGrant, TokenRefresher};
use urlencoding::encode;

pub(crate) fn set_headers(content_type: &str, access_token: &str, request: Builder) -> Builder {
    let bt = format!("Bearer {access_token}");
    request
        .header("Authorization", bt)
        .header("Content-Type", content_type)
        .header("Accept", "application/json")
}

pub(crate) fn build_request<B, S, SS>(
    method: Method,
    path: &str,
    body: Option<&B>,
    query: Option<impl IntoIterator<Item = (S, SS)>>,
    content_type: &str,
    qb: &QBContext,
) -> APIResult<Request<SendBody<'static>>>
where
    B: Serialize,
    S: AsRef<str>,
    SS: AsRef<str>,
{
    let url = build_url(qb, path, query);
    let mut request = Request::builder().method(method.clone()).uri(url.as_str());
    request = set_headers(content_type, &qb.access_token, request);

    let request = match (method == Method::GET || method == Method::DELETE, body) {
        (true, _) | (false, None) => request.body(SendBody::none()),
        (false, Some(body)) => {
            let json_bytes = serde_json::to_vec(body)?;
            let reader = std::io::Cursor::new(json_bytes);
            request.body(SendBody::from_owned_reader(reader))
        }
    }?;

    log::debug!(
        "Built Request with params: {}-{}-{}",
        path,
        method,
        if body.is_some() {
            "With JSON Body"
        } else {
            "No JSON Body"
        },
    );

    Ok(request)
}

/// Builds the full request URL, appending the context's minor version to
/// every query string.
pub(crate) fn build_url<S, SS>(
    qb: &QBContext,
    path: &str,
    query: Option<impl IntoIterator<Item = (S, SS)>>,
) -> String
where
    S: AsRef<str>,
    SS: AsRef<str>,
{
    let mut url = qb.environment.endpoint_url().to_string();
    url.push_str(path);
    let query_string: String = query
        .into_iter()
        .flatten()
        .map(|(k, v)| {
            format!(
                "{}={}",
                encode(k.as_ref()),
                encode(v.as_ref())
            )
        })
        .chain(std::iter::once(format!(
            "minorversion={}",
            qb.minor_version
        )))
        .collect::<Vec<_>>()
        .join("&");
    url.push('?');
    url.push_str(&query_string);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn url_carries_query_and_minor_version() {
        let qb = test_support::context();
        let url = build_url(
            &qb,
            "company/9130347/query",
            Some([("query", "select * from Account MAXRESULTS 1")]),
        );
        assert!(url.starts_with("https://sandbox-quickbooks.api.intuit.com/v3/company/9130347/query?"));
        assert!(url.contains("query=select%20%2A%20from%20Account%20MAXRESULTS%201"));
        assert!(url.ends_with("minorversion=75"));
    }

    #[test]
    fn url_without_query_still_pins_minor_version() {
        let mut qb = test_support::context();
        qb.minor_version = "4".into();
        let url = build_url(&qb, "company/9130347/invoice", None::<[(&str, &str); 0]>);
        assert!(url.ends_with("company/9130347/invoice?minorversion=4"));
    }
}
