use serde::Deserialize;

pub use feltro_core::{
    Activation, CardFilter, Catalog, GameConfig, HandKind, ModifierDef, ModifierEffect,
    ModifierRarity, Suit,
};

/// On-disk shape of one modifier definition. Keywords are resolved into the
/// core enums by `load`; unknown keywords fail loading rather than being
/// carried along.
#[derive(Debug, Clone, Deserialize)]
pub struct RawModifierDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: String,
    pub cost: i64,
    pub activation: String,
    pub effect: RawEffect,
}

/// One effect descriptor. `kind` picks the capability; the remaining fields
/// are required or ignored depending on it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEffect {
    pub kind: String,
    #[serde(default)]
    pub chips: Option<i64>,
    #[serde(default)]
    pub mult: Option<f64>,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub hands: Option<Vec<String>>,
}
