use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A valuation record counted towards net worth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub asset_type: String,
    pub asset_type_label: String,
    pub amount: Decimal,
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetType {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct AssetTypes {
    pub types: Vec<AssetType>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssetCreate {
    pub name: String,
    pub asset_type: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AssetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<AssetCreate> for AssetUpdate {
    fn from(create: AssetCreate) -> Self {
        Self {
            name: Some(create.name),
            asset_type: Some(create.asset_type),
            amount: Some(create.amount),
            description: create.description,
        }
    }
}

/// Sum of all asset amounts.
pub fn total_assets(assets: &[Asset]) -> Decimal {
    assets.iter().map(|a| a.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_response() {
        let types: AssetTypes = serde_json::from_str(
            r#"{"types": [{"value": "nisa", "label": "NISA"}, {"value": "crypto", "label": "暗号資産"}]}"#,
        )
        .unwrap();
        assert_eq!(types.types.len(), 2);
        assert_eq!(types.types[1].value, "crypto");
    }

    #[test]
    fn test_total_assets() {
        let assets: Vec<Asset> = serde_json::from_str(
            r#"[
                {"id": "a1", "name": "積立NISA", "asset_type": "nisa", "asset_type_label": "NISA", "amount": "1200000.00", "description": null},
                {"id": "a2", "name": "定期", "asset_type": "fixed_deposit", "asset_type_label": "定期預金", "amount": "500000", "description": "満期3月"}
            ]"#,
        )
        .unwrap();
        assert_eq!(total_assets(&assets), Decimal::new(1_700_000, 0));
        assert_eq!(total_assets(&[]), Decimal::ZERO);
    }
}
