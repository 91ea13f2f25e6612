use serde::{Deserialize, Serialize};

use super::{impl_qb_entity, NtRef};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<AccountClassification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sub_type: Option<AccountSubType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance_with_sub_accounts: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_location_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acct_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_ref: Option<NtRef>,
}

impl_qb_entity!(Account, "account", ref_name = name);

/// Account types used by the concept flows. Wire values carry spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Bank,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Expense,
    #[serde(rename = "Accounts Payable")]
    AccountsPayable,
    Income,
    #[serde(rename = "Cost of Goods Sold")]
    CostOfGoodsSold,
    #[serde(rename = "Other Current Asset")]
    OtherCurrentAsset,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AccountType::Bank => "Bank",
            AccountType::CreditCard => "Credit Card",
            AccountType::Expense => "Expense",
            AccountType::AccountsPayable => "Accounts Payable",
            AccountType::Income => "Income",
            AccountType::CostOfGoodsSold => "Cost of Goods Sold",
            AccountType::OtherCurrentAsset => "Other Current Asset",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountSubType {
    CreditCard,
    AdvertisingPromotional,
    AccountsPayable,
    ServiceFeeIncome,
    SalesOfProductIncome,
    SuppliesMaterialsCogs,
    Inventory,
}

impl std::fmt::Display for AccountSubType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AccountSubType::CreditCard => "CreditCard",
            AccountSubType::AdvertisingPromotional => "AdvertisingPromotional",
            AccountSubType::AccountsPayable => "AccountsPayable",
            AccountSubType::ServiceFeeIncome => "ServiceFeeIncome",
            AccountSubType::SalesOfProductIncome => "SalesOfProductIncome",
            AccountSubType::SuppliesMaterialsCogs => "SuppliesMaterialsCogs",
            AccountSubType::Inventory => "Inventory",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountClassification {
    Asset,
    Liability,
    Expense,
    Revenue,
}
