//! Fixed field-name tables shared by the feature stages.

/// Identifier column carried alongside the features.
pub const ID_FIELD: &str = "Id";

/// Input aliases renamed to their canonical field name before imputation.
///
/// Different exports of the same dataset spell the floor/porch areas differently.
pub const FIELD_ALIASES: &[(&str, &[&str])] = &[
    ("firstFlrSF", &["FirstFloorSF", "1stFlrSF"]),
    ("secondFlrSF", &["SecondFloorSF", "2ndFlrSF"]),
    ("threeSsnPorch", &["ThreeSeasonPorchSF", "3SsnPorch"]),
];

/// Numeric fields recast as categories before encoding.
pub const RECAST_AS_CATEGORY: &[&str] = &["MSSubClass", "YrSold", "MoSold"];

/// Fields superseded by the aggregate features.
pub const DROPPED_FIELDS: &[&str] = &["threeSsnPorch", "PoolArea", "LowQualFinSF"];

/// Fields expanded into one-hot indicator columns.
pub const CATEGORICAL_FIELDS: &[&str] = &[
    "MSSubClass",
    "MSZoning",
    "Street",
    "Alley",
    "LotShape",
    "LandContour",
    "Utilities",
    "LotConfig",
    "LandSlope",
    "Neighborhood",
    "Condition1",
    "Condition2",
    "BldgType",
    "HouseStyle",
    "RoofStyle",
    "RoofMatl",
    "Exterior1st",
    "Exterior2nd",
    "MasVnrType",
    "ExterQual",
    "ExterCond",
    "Foundation",
    "BsmtQual",
    "BsmtCond",
    "BsmtExposure",
    "BsmtFinType1",
    "BsmtFinType2",
    "Heating",
    "HeatingQC",
    "CentralAir",
    "Electrical",
    "KitchenQual",
    "Functional",
    "FireplaceQu",
    "GarageType",
    "GarageFinish",
    "GarageQual",
    "GarageCond",
    "PavedDrive",
    "PoolQC",
    "Fence",
    "MiscFeature",
    "MoSold",
    "YrSold",
    "SaleType",
    "SaleCondition",
    "has_pool",
    "has_garage",
    "has_bsmt",
    "has_fireplace",
];

/// Canonical spelling of a field name.
pub fn canonical_field_name(name: &str) -> &str {
    FIELD_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&name))
        .map_or(name, |(canonical, _)| *canonical)
}

pub fn is_categorical(name: &str) -> bool {
    CATEGORICAL_FIELDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_canonical_names() {
        assert_eq!(canonical_field_name("1stFlrSF"), "firstFlrSF");
        assert_eq!(canonical_field_name("ThreeSeasonPorchSF"), "threeSsnPorch");
        assert_eq!(canonical_field_name("LotArea"), "LotArea");
    }

    #[test]
    fn categorical_list_covers_derived_indicators() {
        assert_eq!(CATEGORICAL_FIELDS.len(), 50);
        for name in ["has_pool", "has_garage", "has_bsmt", "has_fireplace", "MSSubClass"] {
            assert!(is_categorical(name));
        }
        assert!(!is_categorical("TotalSF"));
    }
}
