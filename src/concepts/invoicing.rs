//! Invoicing concept: customer, service item, emailed invoice, payment.

use crate::{
    qb_where_clause,
    resolver::resolve,
    samples,
    service::DataService,
    types::{Account, Invoice, Line, Payment, QBEntity, QBLinkable, SalesItemLineDetail},
    APIResult,
};

/// Everything the invoicing flow created.
#[derive(Debug, Clone)]
pub struct InvoicingOutcome {
    pub invoice: Invoice,
    pub payment: Payment,
}

/// Creates a customer and a service item (resolving the item's income
/// account), invoices 100.00, emails the invoice to the customer, and
/// records a payment for the invoice total, linked back to the invoice.
///
/// # Errors
/// Propagates remote failures; documents already created stay behind.
pub fn run<S: DataService>(service: &mut S) -> APIResult<InvoicingOutcome> {
    let customer = service.add(&samples::customer_with_email())?;

    let income: Account = resolve(
        service,
        qb_where_clause!(Account | account_type = "Income"),
        samples::service_income_account,
    )?;
    let item = service.add(&samples::service_item(income.to_ref()?, None))?;

    let detail = SalesItemLineDetail {
        item_ref: Some(item.to_ref()?),
        qty: None,
        tax_code_ref: None,
    };
    let invoice = Invoice::assemble(customer.to_ref()?, vec![Line::sales_item(100.0, detail)]);
    let invoice = service.add(&invoice)?;

    let invoice = match customer.email_address() {
        Some(address) => service.send_email(&invoice, address)?,
        None => invoice,
    };

    // Payment for the server-computed total, linked to the invoice.
    let total = invoice.total_amt.unwrap_or(0.0);
    let payment = Payment::assemble(
        customer.to_ref()?,
        vec![Line::linked(total, invoice.as_linked_txn()?)],
        total,
    );
    let payment = service.add(&payment)?;

    Ok(InvoicingOutcome { invoice, payment })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockDataService;
    use crate::types::TxnType;

    #[test]
    fn payment_settles_the_emailed_invoice() {
        let mut service = MockDataService::new();
        let outcome = run(&mut service).unwrap();

        let invoice_id = outcome.invoice.id().unwrap();
        assert_eq!(service.sent_emails.len(), 1);
        assert_eq!(service.sent_emails[0].0, format!("invoice/{invoice_id}"));
        assert_eq!(service.sent_emails[0].1, "testconceptsample@mailinator.com");

        let linked = &outcome.payment.line[0].linked_txn[0];
        assert_eq!(&linked.txn_id, invoice_id);
        assert_eq!(linked.txn_type, TxnType::Invoice);
        assert_eq!(outcome.payment.total_amt, Some(100.0));
        assert_eq!(outcome.payment.customer_ref, outcome.invoice.customer_ref);
    }
}
