use serde::{Deserialize, Serialize};

use super::{common::EmailAddress, impl_qb_entity};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email_addr: Option<EmailAddress>,
}

impl_qb_entity!(Customer, "customer", ref_name = display_name);

impl Customer {
    /// Email address used when sending documents to this customer.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        self.primary_email_addr
            .as_ref()
            .and_then(|email| email.address.as_deref())
    }
}
