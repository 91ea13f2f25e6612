//! Billing concept: vendor, bill, check payment, and vendor credit.

use chrono::{Duration, Utc};

use crate::{
    qb_where_clause,
    resolver::resolve,
    samples,
    service::DataService,
    types::{
        Account, Bill, BillPayment, BillPaymentCheck, Line, PrintStatus, QBEntity, QBLinkable,
        Term, Vendor, VendorCredit,
    },
    APIResult,
};

/// Everything the billing flow created, in creation order.
#[derive(Debug, Clone)]
pub struct BillingOutcome {
    pub vendor: Vendor,
    pub bill: Bill,
    pub bill_payment: BillPayment,
    pub vendor_credit: VendorCredit,
}

/// Creates a fully populated vendor (with a resolved payment term), bills
/// 30.00 of expenses against it, pays the bill by check from a resolved
/// bank account, and records a 30.00 vendor credit.
///
/// Each document build resolves its own prerequisites; nothing is
/// memoized between the bill and the credit.
///
/// # Errors
/// Propagates remote failures; documents already created stay behind.
pub fn run<S: DataService>(service: &mut S) -> APIResult<BillingOutcome> {
    let today = Utc::now().date_naive();

    let term: Term = resolve(service, "", samples::term)?;
    let vendor = service.add(&samples::vendor_with_details(term.to_ref()?, today))?;
    let vendor_ref = vendor.to_ref()?;

    // Bill: one expense line against accounts payable.
    let payables: Account = resolve(
        service,
        qb_where_clause!(
            Account | account_type = "Accounts Payable",
            classification = "Liability"
        ),
        samples::accounts_payable_account,
    )?;
    let expense: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Expense"),
        samples::expense_account,
    )?;
    let bill = Bill::assemble(
        payables.to_ref()?,
        vec![Line::expense(30.0, expense.to_ref()?)],
        today,
        today + Duration::days(45),
        30.0,
    )
    .with_vendor(vendor_ref.clone())
    .with_contact(
        samples::contact_email(),
        samples::contact_email(),
        samples::billing_address(),
        samples::billing_address(),
    );
    let bill = service.add(&bill)?;

    // Check payment linked back to the bill.
    let bank: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Bank"),
        samples::bank_account,
    )?;
    let check = BillPaymentCheck {
        bank_account_ref: Some(bank.to_ref()?),
        check_detail: Some(samples::check_payment()),
        payee_addr: Some(samples::billing_address()),
        print_status: Some(PrintStatus::NeedToPrint),
    };
    let bill_payment = BillPayment::assemble(
        check,
        vec![Line::linked(30.0, bill.as_linked_txn()?)],
        today,
        30.0,
    )
    .with_vendor(vendor_ref.clone())
    .with_private_note("Check billPayment");
    let bill_payment = service.add(&bill_payment)?;

    // Vendor credit mirroring the bill, resolved afresh.
    let payables: Account = resolve(
        service,
        qb_where_clause!(
            Account | account_type = "Accounts Payable",
            classification = "Liability"
        ),
        samples::accounts_payable_account,
    )?;
    let expense: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Expense"),
        samples::expense_account,
    )?;
    let vendor_credit = VendorCredit::assemble(
        payables.to_ref()?,
        vec![Line::expense(30.0, expense.to_ref()?)],
        today,
        30.0,
    )
    .with_vendor(vendor_ref)
    .with_private_note("Credit should be specified");
    let vendor_credit = service.add(&vendor_credit)?;

    Ok(BillingOutcome {
        vendor,
        bill,
        bill_payment,
        vendor_credit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockDataService;
    use crate::types::TxnType;

    #[test]
    fn full_flow_links_payment_to_the_bill() {
        let mut service = MockDataService::new();
        let outcome = run(&mut service).unwrap();

        assert_eq!(outcome.bill.vendor_ref, outcome.bill_payment.vendor_ref);
        let linked = &outcome.bill_payment.line[0].linked_txn[0];
        assert_eq!(Some(&linked.txn_id), outcome.bill.id());
        assert_eq!(linked.txn_type, TxnType::Bill);

        // Vendor carries the resolved term.
        let term_ref = outcome.vendor.term_ref.as_ref().unwrap();
        assert!(!term_ref.value.is_empty());
    }

    #[test]
    fn second_run_reuses_every_resolved_account() {
        let mut service = MockDataService::new();
        run(&mut service).unwrap();
        let accounts_after_first = service.count_stored("Account");
        run(&mut service).unwrap();
        // Payables, expense, and bank resolved to existing rows.
        assert_eq!(service.count_stored("Account"), accounts_after_first);
        // A fresh vendor is created per run, by design.
        assert_eq!(service.count_stored("Vendor"), 2);
    }

    #[test]
    fn bill_total_is_the_caller_supplied_amount() {
        let mut service = MockDataService::new();
        let outcome = run(&mut service).unwrap();
        assert_eq!(outcome.bill.total_amt, Some(30.0));
        assert_eq!(outcome.vendor_credit.total_amt, Some(30.0));
    }
}
