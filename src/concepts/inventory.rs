//! Inventory concept: tracked item, invoice for one unit, re-read the
//! remaining quantity.

use chrono::Utc;

use crate::{
    error::APIError,
    qb_where_clause,
    resolver::resolve,
    samples,
    service::DataService,
    types::{Account, Invoice, Item, Line, QBEntity, SalesItemLineDetail},
    APIResult,
};

/// Creates an inventory item starting at ten on hand (resolving its
/// income, cost-of-goods, and asset accounts by type and subtype), sells
/// one unit to a fresh customer, and re-reads the item so the caller sees
/// the decremented quantity.
///
/// # Errors
/// Propagates remote failures; prerequisites already created stay behind.
pub fn run<S: DataService>(service: &mut S) -> APIResult<Item> {
    let today = Utc::now().date_naive();

    let income: Account = resolve(
        service,
        qb_where_clause!(
            Account | account_type = "Income",
            account_sub_type = "SalesOfProductIncome"
        ),
        samples::product_income_account,
    )?;
    let cogs: Account = resolve(
        service,
        qb_where_clause!(
            Account | account_type = "Cost of Goods Sold",
            account_sub_type = "SuppliesMaterialsCogs"
        ),
        samples::cogs_account,
    )?;
    let asset: Account = resolve(
        service,
        qb_where_clause!(
            Account | account_type = "Other Current Asset",
            account_sub_type = "Inventory"
        ),
        samples::inventory_asset_account,
    )?;

    let item = service.add(&samples::inventory_item(
        income.to_ref()?,
        cogs.to_ref()?,
        asset.to_ref()?,
        today,
    ))?;

    let customer = service.add(&samples::customer_with_email())?;
    let detail = SalesItemLineDetail {
        item_ref: Some(item.to_ref()?),
        qty: Some(1.0),
        tax_code_ref: None,
    };
    let invoice = Invoice::assemble(customer.to_ref()?, vec![Line::sales_item(100.0, detail)]);
    service.add(&invoice)?;

    // Read the item back; quantity on hand reflects the sale.
    let item_id = item.id().ok_or(APIError::MissingEntityId("Item"))?;
    service.read(item_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockDataService;

    #[test]
    fn selling_one_unit_leaves_nine_on_hand() {
        let mut service = MockDataService::new();
        let remaining = run(&mut service).unwrap();
        assert_eq!(remaining.qty_on_hand, Some(9.0));
        assert_eq!(service.count_stored("Account"), 3);
        assert_eq!(service.count_stored("Invoice"), 1);
    }

    #[test]
    fn account_resolution_matches_type_and_subtype() {
        let mut service = MockDataService::new();
        // An income account with the wrong subtype must not satisfy the
        // product-income predicate.
        service.seed(samples::service_income_account());
        run(&mut service).unwrap();
        // The seeded ServiceFeeIncome account was not reused.
        assert_eq!(service.count_stored("Account"), 4);
    }
}
