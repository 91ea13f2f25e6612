use serde::{Deserialize, Serialize};

use super::{journal_entry::JournalEntryLineDetail, LinkedTxn, NtRef};

/// One itemized entry within a composite document.
///
/// Mirrors the wire layout: `DetailType` discriminates which of the typed
/// detail payloads is populated. The constructors below set both together
/// so a line never carries a mismatched tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<LineDetailType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_entry_line_detail: Option<JournalEntryLineDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_item_line_detail: Option<SalesItemLineDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_based_expense_line_detail: Option<AccountBasedExpenseLineDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_line_detail: Option<DiscountLineDetail>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub linked_txn: Vec<LinkedTxn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineDetailType {
    JournalEntryLineDetail,
    SalesItemLineDetail,
    AccountBasedExpenseLineDetail,
    DiscountLineDetail,
}

impl Line {
    #[must_use]
    pub fn journal(amount: f64, detail: JournalEntryLineDetail) -> Self {
        Line {
            amount: Some(amount),
            detail_type: Some(LineDetailType::JournalEntryLineDetail),
            journal_entry_line_detail: Some(detail),
            ..Line::default()
        }
    }

    #[must_use]
    pub fn sales_item(amount: f64, detail: SalesItemLineDetail) -> Self {
        Line {
            amount: Some(amount),
            detail_type: Some(LineDetailType::SalesItemLineDetail),
            sales_item_line_detail: Some(detail),
            ..Line::default()
        }
    }

    #[must_use]
    pub fn expense(amount: f64, account_ref: NtRef) -> Self {
        Line {
            amount: Some(amount),
            detail_type: Some(LineDetailType::AccountBasedExpenseLineDetail),
            account_based_expense_line_detail: Some(AccountBasedExpenseLineDetail {
                account_ref: Some(account_ref),
            }),
            ..Line::default()
        }
    }

    #[must_use]
    pub fn discount(amount: f64, detail: DiscountLineDetail) -> Self {
        Line {
            amount: Some(amount),
            detail_type: Some(LineDetailType::DiscountLineDetail),
            discount_line_detail: Some(detail),
            ..Line::default()
        }
    }

    /// Detail-less line carrying only an amount and a backward link;
    /// payments and bill payments use these.
    #[must_use]
    pub fn linked(amount: f64, linked_txn: LinkedTxn) -> Self {
        Line {
            amount: Some(amount),
            linked_txn: vec![linked_txn],
            ..Line::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_line_num(mut self, line_num: u32) -> Self {
        self.line_num = Some(line_num);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesItemLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code_ref: Option<NtRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccountBasedExpenseLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ref: Option<NtRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiscountLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_based: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_account_ref: Option<NtRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TxnType;

    #[test]
    fn detail_tag_and_payload_travel_together() {
        let line = Line::expense(30.0, NtRef::new("77", "Advertising"));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["DetailType"], "AccountBasedExpenseLineDetail");
        assert_eq!(
            json["AccountBasedExpenseLineDetail"]["AccountRef"]["value"],
            "77"
        );
        assert!(json.get("SalesItemLineDetail").is_none());
    }

    #[test]
    fn linked_line_has_no_detail_tag() {
        let line = Line::linked(
            30.0,
            LinkedTxn {
                txn_id: "512".into(),
                txn_type: TxnType::Bill,
            },
        );
        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("DetailType").is_none());
        assert_eq!(json["LinkedTxn"][0]["TxnId"], "512");
        assert_eq!(json["LinkedTxn"][0]["TxnType"], "Bill");
    }
}
