use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    common::{EmailAddress, GlobalTaxCalculation, PhysicalAddress},
    impl_qb_entity, Line, NtRef, QBLinkable, TxnType,
};

/// Vendor bill: expense lines against an accounts-payable account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Bill {
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
    pub bill_email: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_email: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remit_to_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_addr: Option<PhysicalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_tax_calculation: Option<GlobalTaxCalculation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<f64>,
}

impl_qb_entity!(Bill, "bill");

impl QBLinkable for Bill {
    const TXN_TYPE: TxnType = TxnType::Bill;
}

impl Bill {
    /// Assembles a bill from resolved references and already-built lines,
    /// preserving line order. The total is taken as given, never recomputed
    /// from the lines.
    #[must_use]
    pub fn assemble(
        ap_account_ref: NtRef,
        lines: Vec<Line>,
        txn_date: NaiveDate,
        due_date: NaiveDate,
        total_amt: f64,
    ) -> Self {
        Bill {
            ap_account_ref: Some(ap_account_ref),
            line: lines,
            domain: Some("QBO".into()),
            global_tax_calculation: Some(GlobalTaxCalculation::NotApplicable),
            txn_date: Some(txn_date),
            due_date: Some(due_date),
            total_amt: Some(total_amt),
            ..Bill::default()
        }
    }

    #[must_use]
    pub fn with_vendor(mut self, vendor_ref: NtRef) -> Self {
        self.vendor_ref = Some(vendor_ref);
        self
    }

    #[must_use]
    pub fn with_contact(
        mut self,
        email: EmailAddress,
        reply_email: EmailAddress,
        remit_to: PhysicalAddress,
        ship_to: PhysicalAddress,
    ) -> Self {
        self.bill_email = Some(email);
        self.reply_email = Some(reply_email);
        self.remit_to_addr = Some(remit_to);
        self.ship_addr = Some(ship_to);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_trusted_as_given() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let line = Line::expense(30.0, NtRef::new("77", "Advertising"));
        // Deliberately inconsistent with the line sum; the assembler must
        // not correct it.
        let bill = Bill::assemble(NtRef::new("80", "Payables"), vec![line], date, date, 45.0);
        assert_eq!(bill.total_amt, Some(45.0));
    }
}
