use std::collections::HashMap;

use thiserror::Error;

use crate::domain::master_data::{Persona, Product};
use crate::domain::module::Module;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate module id: {0}")]
    DuplicateModuleId(String),
    #[error("duplicate variant id {variant} in module {module}")]
    DuplicateVariantId { module: String, variant: String },
    #[error("module {0} has no variants")]
    MissingVariants(String),
    #[error("duplicate product id: {0}")]
    DuplicateProductId(String),
    #[error("duplicate persona id: {0}")]
    DuplicatePersonaId(String),
}

/// Indexed module/product/persona definitions. Read-only once built, so a
/// single catalog can serve any number of calculations concurrently.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub modules: Vec<Module>,
    pub products: Vec<Product>,
    pub personas: Vec<Persona>,
    modules_by_id: HashMap<String, usize>,
    products_by_id: HashMap<String, usize>,
    personas_by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(
        modules: Vec<Module>,
        products: Vec<Product>,
        personas: Vec<Persona>,
    ) -> Result<Self, CatalogError> {
        let mut modules_by_id = HashMap::with_capacity(modules.len());
        for (index, module) in modules.iter().enumerate() {
            if module.variants.is_empty() {
                return Err(CatalogError::MissingVariants(module.id.clone()));
            }
            for (position, variant) in module.variants.iter().enumerate() {
                let duplicated = module.variants[..position]
                    .iter()
                    .any(|other| other.id == variant.id);
                if duplicated {
                    return Err(CatalogError::DuplicateVariantId {
                        module: module.id.clone(),
                        variant: variant.id.clone(),
                    });
                }
            }
            if modules_by_id.insert(module.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateModuleId(module.id.clone()));
            }
        }

        let mut products_by_id = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            if products_by_id.insert(product.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateProductId(product.id.clone()));
            }
        }

        let mut personas_by_id = HashMap::with_capacity(personas.len());
        for (index, persona) in personas.iter().enumerate() {
            if personas_by_id.insert(persona.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicatePersonaId(persona.id.clone()));
            }
        }

        Ok(Catalog {
            modules,
            products,
            personas,
            modules_by_id,
            products_by_id,
            personas_by_id,
        })
    }

    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules_by_id
            .get(module_id)
            .map(|&index| &self.modules[index])
    }

    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products_by_id
            .get(product_id)
            .map(|&index| &self.products[index])
    }

    pub fn persona(&self, persona_id: &str) -> Option<&Persona> {
        self.personas_by_id
            .get(persona_id)
            .map(|&index| &self.personas[index])
    }
}
