use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{impl_qb_entity, Line, NtRef, QBLinkable, QBSendable, TxnType};

/// Proposed sale sent to a customer before invoicing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Estimate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_to_account_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_tax_after_discount: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<f64>,
}

impl_qb_entity!(Estimate, "estimate");

impl QBSendable for Estimate {}

impl QBLinkable for Estimate {
    const TXN_TYPE: TxnType = TxnType::Estimate;
}

impl Estimate {
    /// Assembles an estimate from a customer reference and already-built
    /// lines, preserving line order. The total is taken as given.
    #[must_use]
    pub fn assemble(
        customer_ref: NtRef,
        lines: Vec<Line>,
        txn_date: NaiveDate,
        expiration_date: NaiveDate,
        total_amt: f64,
    ) -> Self {
        Estimate {
            customer_ref: Some(customer_ref),
            line: lines,
            txn_date: Some(txn_date),
            expiration_date: Some(expiration_date),
            apply_tax_after_discount: Some(false),
            total_amt: Some(total_amt),
            ..Estimate::default()
        }
    }

    #[must_use]
    pub fn with_doc_number(mut self, doc_number: impl Into<String>) -> Self {
        self.doc_number = Some(doc_number.into());
        self
    }

    #[must_use]
    pub fn with_deposit_account(mut self, account_ref: NtRef) -> Self {
        self.deposit_to_account_ref = Some(account_ref);
        self
    }

    #[must_use]
    pub fn with_private_note(mut self, note: impl Into<String>) -> Self {
        self.private_note = Some(note.into());
        self
    }
}
