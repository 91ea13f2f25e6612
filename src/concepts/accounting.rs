//! Journal entry concept: two accounts and a balanced two-line posting.

use chrono::Utc;

use crate::{
    qb_where_clause,
    resolver::resolve,
    samples,
    service::DataService,
    types::{Account, JournalEntry, JournalEntryLineDetail, Line, QBEntity, Vendor},
    APIResult,
};

/// Creates (or finds) a bank account and a credit card account, then
/// posts a journal entry debiting the bank and crediting the card for
/// 100.00, with the credit posting tied to a resolved vendor.
///
/// Lines are submitted in debit-then-credit order and the service keeps
/// that order.
///
/// # Errors
/// Propagates remote failures; prerequisites already created stay behind.
pub fn run<S: DataService>(service: &mut S) -> APIResult<JournalEntry> {
    let today = Utc::now().date_naive();

    let bank: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Bank"),
        samples::bank_account,
    )?;
    let card: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Credit Card"),
        samples::credit_card_account,
    )?;
    // Any vendor will do; first match wins.
    let vendor: Vendor = resolve(service, "", || samples::vendor(today))?;

    let debit = Line::journal(100.0, JournalEntryLineDetail::debit(bank.to_ref()?))
        .with_description(format!("Description {}", samples::random_alnum(15)));
    let credit = Line::journal(
        100.0,
        JournalEntryLineDetail::credit(card.to_ref()?).with_vendor(vendor.to_ref()?),
    )
    .with_description(format!("Description {}", samples::random_alnum(15)));

    let entry = JournalEntry::assemble(today, vec![debit, credit]).with_private_note("Journal Entry");
    let saved = service.add(&entry)?;
    log::info!(
        "JournalEntry created: {}",
        saved.id().map_or("<none>", String::as_str)
    );
    Ok(saved)
}
