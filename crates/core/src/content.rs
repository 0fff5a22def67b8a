use crate::{Activation, ModifierEffect, ModifierRarity, RngState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A purchasable modifier as shipped in the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModifierDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: ModifierRarity,
    pub cost: i64,
    pub activation: Activation,
    pub effect: ModifierEffect,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("modifier definition with empty id")]
    EmptyId,
    #[error("duplicate modifier id {0:?}")]
    DuplicateId(String),
    #[error("modifier {id:?} has non-positive cost {cost}")]
    InvalidCost { id: String, cost: i64 },
}

/// The full modifier definition set, supplied once at process start.
#[derive(Debug, Clone)]
pub struct Catalog {
    defs: Vec<ModifierDef>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(defs: Vec<ModifierDef>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(defs.len());
        for (pos, def) in defs.iter().enumerate() {
            if def.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if def.cost <= 0 {
                return Err(CatalogError::InvalidCost {
                    id: def.id.clone(),
                    cost: def.cost,
                });
            }
            if index.insert(def.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
        }
        Ok(Self { defs, index })
    }

    pub fn get(&self, id: &str) -> Option<&ModifierDef> {
        self.index.get(id).map(|&pos| &self.defs[pos])
    }

    pub fn defs(&self) -> &[ModifierDef] {
        &self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Up to `count` distinct definitions, uniformly sampled (shuffle a
    /// scratch index list and take the prefix). Fewer if the catalog is
    /// smaller than `count`.
    pub fn sample_distinct(&self, count: usize, rng: &mut RngState) -> Vec<&ModifierDef> {
        let mut indices: Vec<usize> = (0..self.defs.len()).collect();
        rng.shuffle(&mut indices);
        indices.truncate(count);
        indices.into_iter().map(|idx| &self.defs[idx]).collect()
    }
}
