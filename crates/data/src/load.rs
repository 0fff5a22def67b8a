use crate::schema::{RawEffect, RawModifierDef};
use anyhow::{bail, Context};
use feltro_core::{
    Activation, CardFilter, Catalog, GameConfig, HandKind, ModifierDef, ModifierEffect,
    ModifierRarity, Suit,
};

const BUILTIN_MODIFIERS: &[u8] = include_bytes!("../modifiers.json");
const BUILTIN_CONFIG: &[u8] = include_bytes!("../config.json");

/// Load the shipped modifier catalog from the embedded `modifiers.json`.
pub fn load_builtin_catalog() -> Catalog {
    load_catalog(BUILTIN_MODIFIERS).expect("built-in modifiers.json must be valid")
}

/// Load the shipped tuning values from the embedded `config.json`.
pub fn load_builtin_config() -> GameConfig {
    load_config(BUILTIN_CONFIG).expect("built-in config.json must be valid")
}

pub fn load_catalog(json_bytes: &[u8]) -> anyhow::Result<Catalog> {
    let raws: Vec<RawModifierDef> =
        serde_json::from_slice(json_bytes).context("parse modifiers JSON")?;
    let defs = raws
        .iter()
        .map(resolve_modifier)
        .collect::<anyhow::Result<Vec<ModifierDef>>>()?;
    Catalog::new(defs).context("validate modifier catalog")
}

pub fn load_config(json_bytes: &[u8]) -> anyhow::Result<GameConfig> {
    serde_json::from_slice(json_bytes).context("parse config JSON")
}

fn resolve_modifier(raw: &RawModifierDef) -> anyhow::Result<ModifierDef> {
    let context = || format!("modifier {:?}", raw.id);
    Ok(ModifierDef {
        id: raw.id.clone(),
        name: raw.name.clone(),
        description: raw.description.clone(),
        rarity: parse_rarity(&raw.rarity).with_context(context)?,
        cost: raw.cost,
        activation: parse_activation(&raw.activation).with_context(context)?,
        effect: resolve_effect(&raw.effect).with_context(context)?,
    })
}

fn resolve_effect(raw: &RawEffect) -> anyhow::Result<ModifierEffect> {
    let effect = match raw.kind.as_str() {
        "add_chips" => ModifierEffect::AddChips(require_chips(raw)?),
        "add_mult" => ModifierEffect::AddMult(require_mult(raw)?),
        "per_card_chips" => ModifierEffect::PerCardChips {
            filter: require_filter(raw)?,
            chips: require_chips(raw)?,
        },
        "per_card_mult" => ModifierEffect::PerCardMult {
            filter: require_filter(raw)?,
            mult: require_mult(raw)?,
        },
        "chips_per_pool_card" => ModifierEffect::ChipsPerPoolCard(require_chips(raw)?),
        "times_mult" => ModifierEffect::TimesMult(require_mult(raw)?),
        "times_mult_if_hand" => ModifierEffect::TimesMultIfHand {
            hands: require_hands(raw)?,
            mult: require_mult(raw)?,
        },
        other => bail!("unknown effect kind {other:?}"),
    };
    Ok(effect)
}

fn require_chips(raw: &RawEffect) -> anyhow::Result<i64> {
    raw.chips
        .with_context(|| format!("effect {:?} needs a chips value", raw.kind))
}

fn require_mult(raw: &RawEffect) -> anyhow::Result<f64> {
    raw.mult
        .with_context(|| format!("effect {:?} needs a mult value", raw.kind))
}

fn require_filter(raw: &RawEffect) -> anyhow::Result<CardFilter> {
    let keyword = raw
        .filter
        .as_deref()
        .with_context(|| format!("effect {:?} needs a card filter", raw.kind))?;
    parse_filter(keyword)
}

fn require_hands(raw: &RawEffect) -> anyhow::Result<Vec<HandKind>> {
    let ids = raw
        .hands
        .as_deref()
        .with_context(|| format!("effect {:?} needs a hand list", raw.kind))?;
    if ids.is_empty() {
        bail!("effect {:?} has an empty hand list", raw.kind);
    }
    ids.iter()
        .map(|id| HandKind::from_id(id).with_context(|| format!("unknown hand kind {id:?}")))
        .collect()
}

fn parse_rarity(value: &str) -> anyhow::Result<ModifierRarity> {
    match value.to_lowercase().as_str() {
        "common" => Ok(ModifierRarity::Common),
        "uncommon" => Ok(ModifierRarity::Uncommon),
        "rare" => Ok(ModifierRarity::Rare),
        "legendary" => Ok(ModifierRarity::Legendary),
        other => bail!("unknown rarity {other:?}"),
    }
}

fn parse_activation(value: &str) -> anyhow::Result<Activation> {
    match value.to_lowercase().as_str() {
        "passive" => Ok(Activation::Passive),
        "on_play" => Ok(Activation::OnPlay),
        other => bail!("unknown activation {other:?}"),
    }
}

fn parse_filter(value: &str) -> anyhow::Result<CardFilter> {
    match value.to_lowercase().as_str() {
        "spades" => Ok(CardFilter::Suit(Suit::Spades)),
        "hearts" => Ok(CardFilter::Suit(Suit::Hearts)),
        "clubs" => Ok(CardFilter::Suit(Suit::Clubs)),
        "diamonds" => Ok(CardFilter::Suit(Suit::Diamonds)),
        "odd" => Ok(CardFilter::OddRank),
        "even" => Ok(CardFilter::EvenRank),
        other => bail!("unknown card filter {other:?}"),
    }
}
