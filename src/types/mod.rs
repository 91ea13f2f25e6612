//! Data model for the QuickBooks entities the crate drives.
//!
//! Plain serde structs mirroring the QBO wire format: entity fields are
//! `PascalCase`, reference objects use lowercase `value`/`name`. Optional
//! fields are skipped when unset so sparse create payloads stay sparse.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{error::APIError, APIResult};

mod account;
mod bill;
mod common;
mod customer;
mod estimate;
mod invoice;
mod item;
mod journal_entry;
mod line;
mod payment;
mod vendor;

pub use account::{Account, AccountClassification, AccountSubType, AccountType};
pub use bill::Bill;
pub use common::{
    EmailAddress, GlobalTaxCalculation, PhysicalAddress, TelephoneNumber, WebSiteAddress,
};
pub use customer::Customer;
pub use estimate::Estimate;
pub use invoice::Invoice;
pub use item::{Item, ItemType};
pub use journal_entry::{JournalEntry, JournalEntryEntity, JournalEntryLineDetail, PostingType};
pub use line::{
    AccountBasedExpenseLineDetail, DiscountLineDetail, Line, LineDetailType, SalesItemLineDetail,
};
pub use payment::{
    BillPayment, BillPaymentCheck, BillPaymentType, CheckPayment, Payment, PrintStatus,
    VendorCredit,
};
pub use vendor::{Term, Vendor};

/// Capabilities every persisted QuickBooks entity exposes: its
/// server-assigned identifier, the optimistic-concurrency sync token, the
/// display name carried onto references, and its naming on the wire.
pub trait QBEntity: Clone + Default + std::fmt::Debug + Serialize + DeserializeOwned {
    /// Server-assigned id; `None` until the entity has been persisted.
    fn id(&self) -> Option<&String>;

    /// Sync token required for updates; `None` until persisted.
    fn sync_token(&self) -> Option<&String>;

    /// Display name copied onto references, for kinds that carry one.
    fn ref_name(&self) -> Option<&String>;

    /// Entity name as it appears in queries and response envelopes.
    fn type_name() -> &'static str;

    /// URL path segment for the entity's endpoint.
    fn resource() -> &'static str;

    /// Builds a reference to this entity.
    ///
    /// # Errors
    /// Fails with [`APIError::MissingEntityId`] when the entity has not
    /// been persisted yet; an id-less reference is never produced.
    fn to_ref(&self) -> APIResult<NtRef> {
        let Some(id) = self.id() else {
            return Err(APIError::MissingEntityId(Self::type_name()));
        };
        Ok(NtRef {
            value: id.clone(),
            name: self.ref_name().cloned(),
        })
    }
}

/// Entities that support the `send` endpoint (emailed documents).
pub trait QBSendable: QBEntity {}

/// Transaction kinds that can appear behind a [`LinkedTxn`].
pub trait QBLinkable: QBEntity {
    const TXN_TYPE: TxnType;

    /// Builds a backward link to this document.
    ///
    /// # Errors
    /// Fails with [`APIError::MissingEntityId`] when the document has no
    /// server-assigned id yet.
    fn as_linked_txn(&self) -> APIResult<LinkedTxn> {
        let Some(id) = self.id() else {
            return Err(APIError::MissingEntityId(Self::type_name()));
        };
        Ok(LinkedTxn {
            txn_id: id.clone(),
            txn_type: Self::TXN_TYPE,
        })
    }
}

/// Implements [`QBEntity`] for an entity struct with `id`/`sync_token`
/// fields, naming the wire type, the endpoint segment, and (optionally)
/// the field used as the reference display name.
macro_rules! impl_qb_entity {
    ($entity:ident, $resource:literal, ref_name = $name_field:ident) => {
        impl $crate::types::QBEntity for $entity {
            fn id(&self) -> Option<&String> {
                self.id.as_ref()
            }
            fn sync_token(&self) -> Option<&String> {
                self.sync_token.as_ref()
            }
            fn ref_name(&self) -> Option<&String> {
                self.$name_field.as_ref()
            }
            fn type_name() -> &'static str {
                stringify!($entity)
            }
            fn resource() -> &'static str {
                $resource
            }
        }
    };
    ($entity:ident, $resource:literal) => {
        impl $crate::types::QBEntity for $entity {
            fn id(&self) -> Option<&String> {
                self.id.as_ref()
            }
            fn sync_token(&self) -> Option<&String> {
                self.sync_token.as_ref()
            }
            fn ref_name(&self) -> Option<&String> {
                None
            }
            fn type_name() -> &'static str {
                stringify!($entity)
            }
            fn resource() -> &'static str {
                $resource
            }
        }
    };
}
pub(crate) use impl_qb_entity;

/// Reference to a persisted entity: the id plus an optional cached
/// display name. Never owns the entity it points at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NtRef {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NtRef {
    #[must_use]
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: Some(name.into()),
        }
    }

    /// An id-only reference (tax codes, currencies).
    #[must_use]
    pub fn value_only(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: None,
        }
    }
}

/// Backward pointer from one document to the document it derives from or
/// pays against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkedTxn {
    pub txn_id: String,
    pub txn_type: TxnType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxnType {
    Bill,
    Invoice,
    Estimate,
    JournalEntry,
}
