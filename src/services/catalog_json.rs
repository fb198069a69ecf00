use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::items::{CostItem, CostType, RevenueItem, RevenueType};
use crate::domain::master_data::{Persona, Product};
use crate::domain::module::{Module, ModuleScope, ModuleVariant};
use crate::services::catalog::{Catalog, CatalogError};

#[derive(Error, Debug)]
pub enum CatalogJsonError {
    #[error("failed to read catalog file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse catalog json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing module id")]
    MissingModuleId,
    #[error("missing variant id in module {0}")]
    MissingVariantId(String),
    #[error("missing product id")]
    MissingProductId,
    #[error("missing persona id")]
    MissingPersonaId,
    #[error("invalid cost type: {0}")]
    InvalidCostType(String),
    #[error("invalid revenue type: {0}")]
    InvalidRevenueType(String),
    #[error("invalid module scope: {0}")]
    InvalidModuleScope(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Deserialize)]
struct ModuleRecord {
    id: String,
    name: String,
    scope: Option<String>,
    variants: Vec<VariantRecord>,
}

#[derive(Deserialize)]
struct VariantRecord {
    id: String,
    name: String,
    description: Option<String>,
    #[serde(default)]
    cost_items: Vec<CostItemRecord>,
    #[serde(default)]
    revenue_items: Vec<RevenueItemRecord>,
}

#[derive(Deserialize)]
struct CostItemRecord {
    name: String,
    amount: f64,
    cost_type: Option<String>,
    description: Option<String>,
    multiplier_key: Option<String>,
}

/// Shared with the scenario codec, which persists revenue items in the
/// same shape.
#[derive(Serialize, Deserialize)]
pub(crate) struct RevenueItemRecord {
    pub(crate) name: String,
    pub(crate) amount: f64,
    pub(crate) revenue_type: Option<String>,
    pub(crate) description: Option<String>,
}

#[derive(Deserialize)]
struct MasterDataRecord {
    #[serde(default)]
    products: Vec<ProductRecord>,
    #[serde(default)]
    personas: Vec<PersonaRecord>,
}

#[derive(Deserialize)]
struct ProductRecord {
    id: String,
    name: String,
    sales_price: f64,
    purchase_price: f64,
    unit: Option<String>,
}

#[derive(Deserialize)]
struct PersonaRecord {
    id: String,
    name: String,
    description: Option<String>,
    #[serde(default)]
    consumption: BTreeMap<String, f64>,
    #[serde(default)]
    module_adoption_rates: BTreeMap<String, f64>,
}

/// Loads modules.json plus master_data.json and builds the indexed catalog.
pub fn load_catalog_from_json_files(
    modules_path: &str,
    master_data_path: &str,
) -> Result<Catalog, CatalogJsonError> {
    let modules = deserialize_modules_from_json_str(&std::fs::read_to_string(modules_path)?)?;
    let (products, personas) =
        deserialize_master_data_from_json_str(&std::fs::read_to_string(master_data_path)?)?;
    Ok(Catalog::new(modules, products, personas)?)
}

pub fn deserialize_modules_from_json_str(input: &str) -> Result<Vec<Module>, CatalogJsonError> {
    let records: Vec<ModuleRecord> = serde_json::from_str(input)?;
    records.into_iter().map(module_from_record).collect()
}

pub fn deserialize_master_data_from_json_str(
    input: &str,
) -> Result<(Vec<Product>, Vec<Persona>), CatalogJsonError> {
    let record: MasterDataRecord = serde_json::from_str(input)?;

    let mut products = Vec::with_capacity(record.products.len());
    for product in record.products {
        if product.id.trim().is_empty() {
            return Err(CatalogJsonError::MissingProductId);
        }
        products.push(Product {
            id: product.id,
            name: product.name,
            sales_price: product.sales_price,
            purchase_price: product.purchase_price,
            unit: product.unit.unwrap_or_else(|| "unit".to_string()),
        });
    }

    let mut personas = Vec::with_capacity(record.personas.len());
    for persona in record.personas {
        if persona.id.trim().is_empty() {
            return Err(CatalogJsonError::MissingPersonaId);
        }
        personas.push(Persona {
            id: persona.id,
            name: persona.name,
            description: persona.description,
            consumption: persona.consumption,
            module_adoption_rates: persona.module_adoption_rates,
        });
    }

    Ok((products, personas))
}

fn module_from_record(record: ModuleRecord) -> Result<Module, CatalogJsonError> {
    if record.id.trim().is_empty() {
        return Err(CatalogJsonError::MissingModuleId);
    }
    let mut variants = Vec::with_capacity(record.variants.len());
    for variant in record.variants {
        if variant.id.trim().is_empty() {
            return Err(CatalogJsonError::MissingVariantId(record.id.clone()));
        }
        variants.push(ModuleVariant {
            id: variant.id,
            name: variant.name,
            description: variant.description,
            cost_items: variant
                .cost_items
                .into_iter()
                .map(cost_item_from_record)
                .collect::<Result<_, _>>()?,
            revenue_items: variant
                .revenue_items
                .into_iter()
                .map(revenue_item_from_record)
                .collect::<Result<_, _>>()?,
        });
    }
    Ok(Module {
        id: record.id,
        name: record.name,
        scope: parse_scope(record.scope.as_deref())?,
        variants,
    })
}

fn cost_item_from_record(record: CostItemRecord) -> Result<CostItem, CatalogJsonError> {
    Ok(CostItem {
        name: record.name,
        amount: record.amount,
        cost_type: parse_cost_type(record.cost_type.as_deref())?,
        description: record.description,
        multiplier_key: record.multiplier_key,
    })
}

pub(crate) fn revenue_item_from_record(
    record: RevenueItemRecord,
) -> Result<RevenueItem, CatalogJsonError> {
    Ok(RevenueItem {
        name: record.name,
        amount: record.amount,
        revenue_type: parse_revenue_type(record.revenue_type.as_deref())?,
        description: record.description,
    })
}

pub(crate) fn revenue_item_to_record(item: &RevenueItem) -> RevenueItemRecord {
    RevenueItemRecord {
        name: item.name.clone(),
        amount: item.amount,
        revenue_type: Some(item.revenue_type.label().to_string()),
        description: item.description.clone(),
    }
}

fn parse_cost_type(value: Option<&str>) -> Result<CostType, CatalogJsonError> {
    let cost_type = match value {
        None => return Ok(CostType::Fixed),
        Some(text) => match text {
            "fixed" => CostType::Fixed,
            "per_visitor" => CostType::PerVisitor,
            "per_hour" => CostType::PerHour,
            _ => return Err(CatalogJsonError::InvalidCostType(text.to_string())),
        },
    };
    Ok(cost_type)
}

fn parse_revenue_type(value: Option<&str>) -> Result<RevenueType, CatalogJsonError> {
    let revenue_type = match value {
        None => return Ok(RevenueType::Fixed),
        Some(text) => match text {
            "fixed" => RevenueType::Fixed,
            "per_visitor" => RevenueType::PerVisitor,
            "per_unit_sold" => RevenueType::PerUnitSold,
            _ => return Err(CatalogJsonError::InvalidRevenueType(text.to_string())),
        },
    };
    Ok(revenue_type)
}

fn parse_scope(value: Option<&str>) -> Result<ModuleScope, CatalogJsonError> {
    let scope = match value {
        None => return Ok(ModuleScope::Both),
        Some(text) => match text {
            "global" => ModuleScope::Global,
            "daily" => ModuleScope::Daily,
            "both" => ModuleScope::Both,
            _ => return Err(CatalogJsonError::InvalidModuleScope(text.to_string())),
        },
    };
    Ok(scope)
}
