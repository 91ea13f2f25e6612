//! Default-instance factories for prerequisite entities.
//!
//! Each factory populates plausible sample values; display names carry a
//! random alphanumeric suffix so repeated creates never collide. Dates are
//! always passed in by the caller.

use chrono::NaiveDate;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::types::{
    Account, AccountClassification, AccountSubType, AccountType, CheckPayment, Customer,
    EmailAddress, Item, ItemType, NtRef, PhysicalAddress, TelephoneNumber, Term, Vendor,
    WebSiteAddress,
};

pub(crate) fn random_alnum(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn suffix(len: usize) -> String {
    random_alnum(len)
}

fn usd() -> NtRef {
    NtRef::new("USD", "United States Dollar")
}

fn named_account(prefix: &str, suffix_len: usize) -> Account {
    let name = format!("{prefix}{}", suffix(suffix_len));
    Account {
        fully_qualified_name: Some(name.clone()),
        name: Some(name),
        sub_account: Some(false),
        active: Some(true),
        current_balance: Some(0.0),
        current_balance_with_sub_accounts: Some(0.0),
        ..Account::default()
    }
}

#[must_use]
pub fn bank_account() -> Account {
    Account {
        classification: Some(AccountClassification::Asset),
        account_type: Some(AccountType::Bank),
        txn_location_type: Some("FranceOverseas".into()),
        acct_num: Some(format!("B{}", suffix(6))),
        ..named_account("Ba", 7)
    }
}

#[must_use]
pub fn credit_card_account() -> Account {
    Account {
        classification: Some(AccountClassification::Liability),
        account_type: Some(AccountType::CreditCard),
        account_sub_type: Some(AccountSubType::CreditCard),
        currency_ref: Some(usd()),
        ..named_account("CreditCa", 5)
    }
}

#[must_use]
pub fn expense_account() -> Account {
    Account {
        classification: Some(AccountClassification::Expense),
        account_type: Some(AccountType::Expense),
        account_sub_type: Some(AccountSubType::AdvertisingPromotional),
        currency_ref: Some(usd()),
        ..named_account("Expense", 5)
    }
}

/// Accounts-payable account carrying an opening balance, as the billing
/// flow expects.
#[must_use]
pub fn accounts_payable_account() -> Account {
    Account {
        classification: Some(AccountClassification::Liability),
        account_type: Some(AccountType::AccountsPayable),
        account_sub_type: Some(AccountSubType::AccountsPayable),
        current_balance: Some(3000.0),
        current_balance_with_sub_accounts: Some(3000.0),
        currency_ref: Some(usd()),
        ..named_account("Payable", 5)
    }
}

#[must_use]
pub fn service_income_account() -> Account {
    Account {
        classification: Some(AccountClassification::Revenue),
        account_type: Some(AccountType::Income),
        account_sub_type: Some(AccountSubType::ServiceFeeIncome),
        currency_ref: Some(usd()),
        ..named_account("Incom", 5)
    }
}

#[must_use]
pub fn product_income_account() -> Account {
    Account {
        account_type: Some(AccountType::Income),
        account_sub_type: Some(AccountSubType::SalesOfProductIncome),
        ..named_account("Income ", 5)
    }
}

#[must_use]
pub fn cogs_account() -> Account {
    Account {
        account_type: Some(AccountType::CostOfGoodsSold),
        account_sub_type: Some(AccountSubType::SuppliesMaterialsCogs),
        ..named_account("Expense ", 5)
    }
}

#[must_use]
pub fn inventory_asset_account() -> Account {
    Account {
        account_type: Some(AccountType::OtherCurrentAsset),
        account_sub_type: Some(AccountSubType::Inventory),
        ..named_account("Other Current Asset ", 5)
    }
}

/// Vendor with only the mandatory fields.
#[must_use]
pub fn vendor(open_balance_date: NaiveDate) -> Vendor {
    Vendor {
        display_name: Some(suffix(8)),
        open_balance_date: Some(open_balance_date),
        ..Vendor::default()
    }
}

/// Fully populated vendor: contact details, addresses, and the given
/// payment term.
#[must_use]
pub fn vendor_with_details(term_ref: NtRef, open_balance_date: NaiveDate) -> Vendor {
    Vendor {
        display_name: Some(suffix(8)),
        company_name: Some("ABC Corp".into()),
        title: Some(suffix(7)),
        given_name: Some(suffix(8)),
        middle_name: Some(suffix(1)),
        family_name: Some(suffix(8)),
        suffix: Some("Sr.".into()),
        print_on_check_name: Some("MS".into()),
        bill_addr: Some(billing_address()),
        tax_identifier: Some("1111111".into()),
        primary_email_addr: Some(contact_email()),
        primary_phone: Some(TelephoneNumber::new("(650)111-1111", true, "Business")),
        alternate_phone: Some(TelephoneNumber::new("(650)111-2222", false, "Business")),
        mobile: Some(TelephoneNumber::new("(650)111-3333", false, "Home")),
        fax: Some(TelephoneNumber::new("(650)111-1111", false, "Business")),
        web_addr: Some(WebSiteAddress {
            uri: Some("http://abccorp.com".into()),
            default: Some(true),
            tag: Some("Business".into()),
        }),
        term_ref: Some(term_ref),
        acct_num: Some("11223344".into()),
        balance: Some(0.0),
        open_balance_date: Some(open_balance_date),
        ..Vendor::default()
    }
}

#[must_use]
pub fn term() -> Term {
    Term {
        name: Some(format!("Term_{}", suffix(5))),
        active: Some(true),
        term_type: Some("STANDARD".into()),
        discount_percent: Some(50.0),
        due_days: Some(50),
        ..Term::default()
    }
}

/// Customer with only the mandatory display name.
#[must_use]
pub fn customer() -> Customer {
    Customer {
        display_name: Some(suffix(6)),
        ..Customer::default()
    }
}

#[must_use]
pub fn customer_with_email() -> Customer {
    Customer {
        company_name: Some("ABC Corporations".into()),
        primary_email_addr: Some(EmailAddress::new("testconceptsample@mailinator.com")),
        ..customer()
    }
}

/// Service item priced at 200, billed against the given income account
/// and, when supplied, expensed against the given expense account.
#[must_use]
pub fn service_item(income_account_ref: NtRef, expense_account_ref: Option<NtRef>) -> Item {
    Item {
        name: Some(format!("Item{}", suffix(5))),
        active: Some(true),
        taxable: Some(false),
        unit_price: Some(200.0),
        item_type: Some(ItemType::Service),
        income_account_ref: Some(income_account_ref),
        expense_account_ref,
        ..Item::default()
    }
}

/// Inventory item starting with ten on hand.
#[must_use]
pub fn inventory_item(
    income_account_ref: NtRef,
    expense_account_ref: NtRef,
    asset_account_ref: NtRef,
    inv_start_date: NaiveDate,
) -> Item {
    Item {
        name: Some(format!("Inventory Item {}", suffix(5))),
        item_type: Some(ItemType::Inventory),
        inv_start_date: Some(inv_start_date),
        qty_on_hand: Some(10.0),
        track_qty_on_hand: Some(true),
        income_account_ref: Some(income_account_ref),
        expense_account_ref: Some(expense_account_ref),
        asset_account_ref: Some(asset_account_ref),
        ..Item::default()
    }
}

#[must_use]
pub fn billing_address() -> PhysicalAddress {
    PhysicalAddress {
        line1: Some("123 Main St".into()),
        city: Some("Mountain View".into()),
        country: Some("United States".into()),
        country_sub_division_code: Some("CA".into()),
        postal_code: Some("94043".into()),
    }
}

#[must_use]
pub fn contact_email() -> EmailAddress {
    EmailAddress::new("test@abc.com")
}

/// Check details stamped with one shared random suffix.
#[must_use]
pub fn check_payment() -> CheckPayment {
    let tag = suffix(8);
    CheckPayment {
        acct_num: Some(format!("AccNum{tag}")),
        bank_name: Some(format!("BankName{tag}")),
        check_num: Some(format!("CheckNum{tag}")),
        name_on_acct: Some(format!("Name{tag}")),
        status: Some(format!("Status{tag}")),
    }
}

/// Four-digit document number for estimates.
#[must_use]
pub fn doc_number() -> String {
    let mut rng = rand::thread_rng();
    (0..4).map(|_| rng.gen_range('0'..='9')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_do_not_collide() {
        let first = bank_account();
        let second = bank_account();
        assert_ne!(first.name, second.name);
    }

    #[test]
    fn factories_never_set_server_fields() {
        assert!(bank_account().id.is_none());
        assert!(vendor_with_details(NtRef::value_only("3"), sample_date()).id.is_none());
        assert!(term().sync_token.is_none());
    }

    #[test]
    fn doc_numbers_are_four_digits() {
        let number = doc_number();
        assert_eq!(number.len(), 4);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    }
}
