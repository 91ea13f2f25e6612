use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{impl_qb_entity, NtRef};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_account_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_account_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_account_ref: Option<NtRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inv_start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty_on_hand: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_qty_on_hand: Option<bool>,
}

impl_qb_entity!(Item, "item", ref_name = name);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    Service,
    Inventory,
    NonInventory,
}
