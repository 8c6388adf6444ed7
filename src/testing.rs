//! Test fixtures shared by the unit tests.
//!
//! Only compiled for tests.

use crate::domain::{RawRecord, Value};
use crate::model::{LinearModel, TrainingSchema};

/// A fully specified raw record with every field the pipeline references.
///
/// Values follow a typical one-story house; `Alley`, `FireplaceQu`, `PoolQC`
/// and `MiscFeature` are missing as they usually are in the source data.
pub fn complete_record(id: i32) -> RawRecord {
    RawRecord::new()
        .with("Id", id)
        .with("MSSubClass", 20)
        .with("MSZoning", "RH")
        .with("LotFrontage", 80)
        .with("LotArea", 11622)
        .with("Street", "Pave")
        .with("Alley", Value::Missing)
        .with("LotShape", "Reg")
        .with("LandContour", "Lvl")
        .with("Utilities", "AllPub")
        .with("LotConfig", "Inside")
        .with("LandSlope", "Gtl")
        .with("Neighborhood", "NAmes")
        .with("Condition1", "Feedr")
        .with("Condition2", "Norm")
        .with("BldgType", "1Fam")
        .with("HouseStyle", "1Story")
        .with("OverallQual", 5)
        .with("OverallCond", 6)
        .with("YearBuilt", 1961)
        .with("YearRemodAdd", 1961)
        .with("RoofStyle", "Gable")
        .with("RoofMatl", "CompShg")
        .with("Exterior1st", "VinylSd")
        .with("Exterior2nd", "VinylSd")
        .with("MasVnrType", "None")
        .with("MasVnrArea", 0)
        .with("ExterQual", "TA")
        .with("ExterCond", "TA")
        .with("Foundation", "CBlock")
        .with("BsmtQual", "TA")
        .with("BsmtCond", "TA")
        .with("BsmtExposure", "No")
        .with("BsmtFinType1", "Rec")
        .with("BsmtFinSF1", 468)
        .with("BsmtFinType2", "LwQ")
        .with("BsmtFinSF2", 144)
        .with("BsmtUnfSF", 270)
        .with("TotalBsmtSF", 882)
        .with("Heating", "GasA")
        .with("HeatingQC", "TA")
        .with("CentralAir", "Y")
        .with("Electrical", "SBrkr")
        .with("firstFlrSF", 896)
        .with("secondFlrSF", 0)
        .with("LowQualFinSF", 0)
        .with("GrLivArea", 896)
        .with("BsmtFullBath", 0)
        .with("BsmtHalfBath", 0)
        .with("FullBath", 1)
        .with("HalfBath", 0)
        .with("BedroomAbvGr", 2)
        .with("KitchenAbvGr", 1)
        .with("KitchenQual", "TA")
        .with("TotRmsAbvGrd", 5)
        .with("Functional", "Typ")
        .with("Fireplaces", 0)
        .with("FireplaceQu", Value::Missing)
        .with("GarageType", "Attchd")
        .with("GarageYrBlt", 1961)
        .with("GarageFinish", "Unf")
        .with("GarageCars", 1)
        .with("GarageArea", 730)
        .with("GarageQual", "TA")
        .with("GarageCond", "TA")
        .with("PavedDrive", "Y")
        .with("WoodDeckSF", 140)
        .with("OpenPorchSF", 0)
        .with("EnclosedPorch", 0)
        .with("threeSsnPorch", 0)
        .with("ScreenPorch", 120)
        .with("PoolArea", 0)
        .with("PoolQC", Value::Missing)
        .with("Fence", "MnPrv")
        .with("MiscFeature", Value::Missing)
        .with("MiscVal", 0)
        .with("MoSold", 6)
        .with("YrSold", 2010)
        .with("SaleType", "WD")
        .with("SaleCondition", "Normal")
}

/// Schema built from a list of names; panics on invalid input.
pub fn schema(columns: &[&str]) -> TrainingSchema {
    TrainingSchema::new(columns.iter().map(|c| c.to_string()).collect()).unwrap()
}

/// A model with zero intercept whose coefficients are all zero except `weights`.
pub fn sparse_model(schema: &TrainingSchema, weights: &[(&str, f64)]) -> LinearModel {
    let coefficients = schema
        .columns()
        .iter()
        .map(|c| {
            weights
                .iter()
                .find(|(name, _)| *name == c.as_str())
                .map_or(0.0, |(_, w)| *w)
        })
        .collect();
    LinearModel::new("test", 0.0, coefficients, schema).unwrap()
}
