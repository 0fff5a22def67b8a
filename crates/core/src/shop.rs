use crate::{Catalog, GameConfig, ModifierRarity, RngState};
use serde::{Deserialize, Serialize};

/// One purchasable slot in the shop. Cost and rarity are copied from the
/// definition so the offer renders without a catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopOffer {
    pub def_id: String,
    pub cost: i64,
    pub rarity: ModifierRarity,
}

/// Offers rolled on entering the shop. Regenerated each time a round is
/// cleared; affordability and rack capacity are checked at purchase, not
/// at offer time.
#[derive(Debug, Clone, Default)]
pub struct ShopState {
    pub offers: Vec<ShopOffer>,
}

impl ShopState {
    pub fn generate(catalog: &Catalog, config: &GameConfig, rng: &mut RngState) -> Self {
        let offers = catalog
            .sample_distinct(config.shop_offers, rng)
            .into_iter()
            .map(|def| ShopOffer {
                def_id: def.id.clone(),
                cost: def.cost,
                rarity: def.rarity,
            })
            .collect();
        Self { offers }
    }

    pub fn offer(&self, def_id: &str) -> Option<&ShopOffer> {
        self.offers.iter().find(|offer| offer.def_id == def_id)
    }
}
