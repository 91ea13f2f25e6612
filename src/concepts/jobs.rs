//! Jobs concept: estimate for a customer, invoice derived from it, and a
//! discounted invoice update.

use chrono::{Duration, Utc};

use crate::{
    qb_where_clause,
    resolver::resolve,
    samples,
    service::DataService,
    types::{
        Account, DiscountLineDetail, Estimate, Invoice, Line, NtRef, QBEntity,
        SalesItemLineDetail,
    },
    APIResult,
};

/// The final estimate and invoice the jobs flow produced.
#[derive(Debug, Clone)]
pub struct JobsOutcome {
    pub estimate: Estimate,
    pub invoice: Invoice,
}

/// Creates a customer and a service item, estimates 300.00 of work,
/// raises the estimate to 400.00, derives an invoice from the estimate
/// (lines and customer carried over, plus a backward link), and appends a
/// 10.00 discount line to the invoice.
///
/// The discount-line update only behaves on older API revisions; when
/// running against the live service, construct the context with
/// [`crate::QBContext::with_minor_version`] set to `"4"`.
///
/// # Errors
/// Propagates remote failures; documents already created stay behind.
pub fn run<S: DataService>(service: &mut S) -> APIResult<JobsOutcome> {
    let today = Utc::now().date_naive();

    let customer = service.add(&samples::customer())?;

    let income: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Income"),
        samples::service_income_account,
    )?;
    let expense: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Expense"),
        samples::expense_account,
    )?;
    let item = service.add(&samples::service_item(
        income.to_ref()?,
        Some(expense.to_ref()?),
    ))?;

    let bank: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Bank"),
        samples::bank_account,
    )?;

    let detail = SalesItemLineDetail {
        item_ref: Some(item.to_ref()?),
        qty: None,
        tax_code_ref: Some(NtRef::value_only("NON")),
    };
    let estimate = Estimate::assemble(
        customer.to_ref()?,
        vec![Line::sales_item(300.0, detail).with_line_num(1)],
        today,
        today + Duration::days(15),
        300.0,
    )
    .with_doc_number(samples::doc_number())
    .with_deposit_account(bank.to_ref()?)
    .with_private_note("Accurate Estimate");
    let mut estimate = service.add(&estimate)?;

    // Raise the agreed amount; the line stays as estimated.
    estimate.total_amt = Some(400.0);
    let estimate = service.update(&estimate)?;

    let invoice = Invoice::from_estimate(&estimate)?;
    let mut invoice = service.add(&invoice)?;

    // Append a fixed 10.00 discount and push the update.
    let discount_account: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Income"),
        samples::service_income_account,
    )?;
    invoice.line.push(Line::discount(
        10.0,
        DiscountLineDetail {
            percent_based: Some(false),
            discount_percent: None,
            discount_account_ref: Some(discount_account.to_ref()?),
        },
    ));
    let invoice = service.update(&invoice)?;

    Ok(JobsOutcome { estimate, invoice })
}
