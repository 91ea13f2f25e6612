use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{impl_qb_entity, Line, NtRef, QBLinkable, TxnType};

/// Double-entry journal document. Line order is significant: it is the
/// debit/credit presentation order and is preserved exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JournalEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line: Vec<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amt: Option<f64>,
}

impl_qb_entity!(JournalEntry, "journalentry");

impl QBLinkable for JournalEntry {
    const TXN_TYPE: TxnType = TxnType::JournalEntry;
}

impl JournalEntry {
    /// Assembles a journal entry from already-built lines, preserving
    /// their order.
    #[must_use]
    pub fn assemble(txn_date: NaiveDate, lines: Vec<Line>) -> Self {
        JournalEntry {
            txn_date: Some(txn_date),
            domain: Some("QBO".into()),
            line: lines,
            ..JournalEntry::default()
        }
    }

    #[must_use]
    pub fn with_private_note(mut self, note: impl Into<String>) -> Self {
        self.private_note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JournalEntryLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_type: Option<PostingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<JournalEntryEntity>,
}

impl JournalEntryLineDetail {
    #[must_use]
    pub fn debit(account_ref: NtRef) -> Self {
        JournalEntryLineDetail {
            posting_type: Some(PostingType::Debit),
            account_ref: Some(account_ref),
            entity: None,
        }
    }

    #[must_use]
    pub fn credit(account_ref: NtRef) -> Self {
        JournalEntryLineDetail {
            posting_type: Some(PostingType::Credit),
            account_ref: Some(account_ref),
            entity: None,
        }
    }

    /// Attaches the vendor this posting concerns.
    #[must_use]
    pub fn with_vendor(mut self, vendor_ref: NtRef) -> Self {
        self.entity = Some(JournalEntryEntity {
            entity_type: Some("Vendor".into()),
            entity_ref: Some(vendor_ref),
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostingType {
    Debit,
    Credit,
}

/// Name/value pair pointing a journal posting at a named entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JournalEntryEntity {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_ref: Option<NtRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_preserves_line_order() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let debit = Line::journal(100.0, JournalEntryLineDetail::debit(NtRef::new("1", "Bank")));
        let credit = Line::journal(
            100.0,
            JournalEntryLineDetail::credit(NtRef::new("2", "Card")),
        );
        let entry = JournalEntry::assemble(date, vec![debit.clone(), credit.clone()]);
        assert_eq!(entry.line, vec![debit, credit]);
        assert_eq!(entry.txn_date, Some(date));
    }

    #[test]
    fn vendor_entity_rides_on_the_credit_posting() {
        let detail =
            JournalEntryLineDetail::credit(NtRef::new("2", "Card")).with_vendor(NtRef::new("9", "Acme"));
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["PostingType"], "Credit");
        assert_eq!(json["Entity"]["Type"], "Vendor");
        assert_eq!(json["Entity"]["EntityRef"]["value"], "9");
    }
}
