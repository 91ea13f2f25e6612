use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    estimate::Estimate, impl_qb_entity, line::SalesItemLineDetail, Line, LineDetailType,
    LinkedTxn, NtRef, QBLinkable, QBSendable, TxnType,
};
use crate::APIResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Invoice {
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
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub linked_txn: Vec<LinkedTxn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<f64>,
}

impl_qb_entity!(Invoice, "invoice");

impl QBSendable for Invoice {}

impl QBLinkable for Invoice {
    const TXN_TYPE: TxnType = TxnType::Invoice;
}

impl Invoice {
    /// Assembles an invoice for one customer from already-built lines,
    /// preserving line order.
    #[must_use]
    pub fn assemble(customer_ref: NtRef, lines: Vec<Line>) -> Self {
        Invoice {
            customer_ref: Some(customer_ref),
            line: lines,
            ..Invoice::default()
        }
    }

    /// Derives an invoice from an estimate: the estimate's lines and
    /// customer reference are carried over verbatim, and a backward link
    /// to the estimate is attached so the two documents stay related.
    ///
    /// # Errors
    /// Fails when the estimate has not been persisted (no id to link to).
    pub fn from_estimate(estimate: &Estimate) -> APIResult<Self> {
        let mut lines = estimate.line.clone();
        // A sales line coming back from the service may be sparse; give it
        // an empty detail rather than dropping the tag.
        for line in &mut lines {
            if line.detail_type == Some(LineDetailType::SalesItemLineDetail)
                && line.sales_item_line_detail.is_none()
            {
                line.sales_item_line_detail = Some(SalesItemLineDetail::default());
            }
        }
        Ok(Invoice {
            customer_ref: estimate.customer_ref.clone(),
            line: lines,
            linked_txn: vec![estimate.as_linked_txn()?],
            ..Invoice::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineDetailType, TxnType};

    fn persisted_estimate() -> Estimate {
        let detail = SalesItemLineDetail {
            item_ref: Some(NtRef::new("11", "Consulting")),
            qty: None,
            tax_code_ref: Some(NtRef::value_only("NON")),
        };
        let mut estimate = Estimate::assemble(
            NtRef::new("5", "Acme"),
            vec![Line::sales_item(300.0, detail).with_line_num(1)],
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 26).unwrap(),
            300.0,
        );
        estimate.id = Some("123".into());
        estimate
    }

    #[test]
    fn from_estimate_carries_lines_customer_and_backlink() {
        let estimate = persisted_estimate();
        let invoice = Invoice::from_estimate(&estimate).unwrap();

        assert_eq!(invoice.customer_ref, estimate.customer_ref);
        assert_eq!(invoice.line.len(), 1);
        assert_eq!(
            invoice.line[0].detail_type,
            Some(LineDetailType::SalesItemLineDetail)
        );
        assert_eq!(
            invoice.line[0]
                .sales_item_line_detail
                .as_ref()
                .unwrap()
                .item_ref
                .as_ref()
                .unwrap()
                .value,
            "11"
        );
        assert_eq!(invoice.linked_txn.len(), 1);
        assert_eq!(invoice.linked_txn[0].txn_id, "123");
        assert_eq!(invoice.linked_txn[0].txn_type, TxnType::Estimate);
    }

    #[test]
    fn from_estimate_rejects_an_unsaved_source() {
        let mut estimate = persisted_estimate();
        estimate.id = None;
        assert!(Invoice::from_estimate(&estimate).is_err());
    }
}
