use crate::{Card, HandKind, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ModifierRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl ModifierRarity {
    pub fn id(self) -> &'static str {
        match self {
            ModifierRarity::Common => "common",
            ModifierRarity::Uncommon => "uncommon",
            ModifierRarity::Rare => "rare",
            ModifierRarity::Legendary => "legendary",
        }
    }
}

/// UI hint only: whether the effect reads the played cards or applies
/// regardless of them. The scoring engine evaluates both the same way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Activation {
    Passive,
    OnPlay,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardFilter {
    Suit(Suit),
    OddRank,
    EvenRank,
}

impl CardFilter {
    pub fn matches(&self, card: Card) -> bool {
        match self {
            CardFilter::Suit(suit) => card.suit == *suit,
            CardFilter::OddRank => card.rank.is_odd(),
            CardFilter::EvenRank => card.rank.is_even(),
        }
    }
}

/// Pure scoring capability carried by a modifier definition. The engine
/// evaluates these generically; adding a modifier never touches engine code.
///
/// Every variant feeds exactly one accumulator (bonus chips, bonus mult, or
/// the x-multiplier), which keeps application commutative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ModifierEffect {
    /// Flat bonus chips.
    AddChips(i64),
    /// Flat bonus mult.
    AddMult(f64),
    /// Bonus chips per classified card matching the filter.
    PerCardChips { filter: CardFilter, chips: i64 },
    /// Bonus mult per classified card matching the filter.
    PerCardMult { filter: CardFilter, mult: f64 },
    /// Bonus chips scaled by the run's pool size (deck + hand + discard).
    ChipsPerPoolCard(i64),
    /// Unconditional x-multiplier.
    TimesMult(f64),
    /// X-multiplier applied only when the classification is in `hands`.
    TimesMultIfHand { hands: Vec<HandKind>, mult: f64 },
}
