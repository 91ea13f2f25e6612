use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{common::PhysicalAddress, impl_qb_entity, Line, NtRef};

/// Customer payment received against an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<Line>,
}

impl_qb_entity!(Payment, "payment");

impl Payment {
    /// Assembles a payment from a customer reference and linked lines.
    #[must_use]
    pub fn assemble(customer_ref: NtRef, lines: Vec<Line>, total_amt: f64) -> Self {
        Payment {
            customer_ref: Some(customer_ref),
            total_amt: Some(total_amt),
            line: lines,
            ..Payment::default()
        }
    }
}

/// Vendor bill payment, by check in the flows this crate drives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BillPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_payment: Option<BillPaymentCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_type: Option<BillPaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<f64>,
}

impl_qb_entity!(BillPayment, "billpayment");

impl BillPayment {
    /// Assembles a check payment against already-linked lines.
    #[must_use]
    pub fn assemble(
        check_payment: BillPaymentCheck,
        lines: Vec<Line>,
        txn_date: NaiveDate,
        total_amt: f64,
    ) -> Self {
        BillPayment {
            txn_date: Some(txn_date),
            line: lines,
            check_payment: Some(check_payment),
            pay_type: Some(BillPaymentType::Check),
            total_amt: Some(total_amt),
            ..BillPayment::default()
        }
    }

    #[must_use]
    pub fn with_vendor(mut self, vendor_ref: NtRef) -> Self {
        self.vendor_ref = Some(vendor_ref);
        self
    }

    #[must_use]
    pub fn with_private_note(mut self, note: impl Into<String>) -> Self {
        self.private_note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillPaymentType {
    Check,
    CreditCard,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BillPaymentCheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_detail: Option<CheckPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_status: Option<PrintStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acct_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_on_acct: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintStatus {
    NotSet,
    NeedToPrint,
    PrintComplete,
}

/// Credit issued by a vendor against future bills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VendorCredit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_ref: Option<NtRef>,
    #[serde(rename = "APAccountRef", skip_serializing_if = "Option::is_none")]
    pub ap_account_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<f64>,
}

impl_qb_entity!(VendorCredit, "vendorcredit");

impl VendorCredit {
    /// Assembles a vendor credit mirroring the bill layout: expense lines
    /// against an accounts-payable account.
    #[must_use]
    pub fn assemble(
        ap_account_ref: NtRef,
        lines: Vec<Line>,
        txn_date: NaiveDate,
        total_amt: f64,
    ) -> Self {
        VendorCredit {
            ap_account_ref: Some(ap_account_ref),
            line: lines,
            domain: Some("QBO".into()),
            txn_date: Some(txn_date),
            total_amt: Some(total_amt),
            ..VendorCredit::default()
        }
    }

    #[must_use]
    pub fn with_vendor(mut self, vendor_ref: NtRef) -> Self {
        self.vendor_ref = Some(vendor_ref);
        self
    }

    #[must_use]
    pub fn with_private_note(mut self, note: impl Into<String>) -> Self {
        self.private_note = Some(note.into());
        self
    }
}
