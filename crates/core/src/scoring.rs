use crate::{Catalog, HandEval, HandKind, ModifierEffect, ModifierInstance};
use serde::{Deserialize, Serialize};

/// Itemized result of one scoring pass. `total` is the floored combination
/// `(base_chips + card_chips + bonus_chips) × ((base_mult + bonus_mult) × x_mult)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub kind: HandKind,
    pub base_chips: i64,
    pub card_chips: i64,
    pub base_mult: f64,
    pub bonus_chips: i64,
    pub bonus_mult: f64,
    pub x_mult: f64,
    pub total: i64,
}

/// Score a classified selection against the active modifier rack.
///
/// Pure: safe to call repeatedly for live preview before a play commits.
/// Modifiers are applied in rack (acquisition) order; all shipped effects
/// are commutative, and rack order is the documented tie-break should a
/// non-commutative effect ever be added. Instances whose `def_id` is not in
/// the catalog are skipped without aborting the pass.
pub fn calculate_score(
    eval: &HandEval,
    rack: &[ModifierInstance],
    catalog: &Catalog,
    pool_size: usize,
) -> ScoreBreakdown {
    let card_chips: i64 = eval.cards.iter().map(|card| card.chips()).sum();

    let mut bonus_chips = 0i64;
    let mut bonus_mult = 0.0f64;
    let mut x_mult = 1.0f64;

    for instance in rack {
        let Some(def) = catalog.get(&instance.def_id) else {
            continue;
        };
        match &def.effect {
            ModifierEffect::AddChips(chips) => bonus_chips += chips,
            ModifierEffect::AddMult(mult) => bonus_mult += mult,
            ModifierEffect::PerCardChips { filter, chips } => {
                bonus_chips += chips * count_matching(eval, filter);
            }
            ModifierEffect::PerCardMult { filter, mult } => {
                bonus_mult += mult * count_matching(eval, filter) as f64;
            }
            ModifierEffect::ChipsPerPoolCard(chips) => {
                bonus_chips += chips * pool_size as i64;
            }
            ModifierEffect::TimesMult(mult) => x_mult *= mult,
            ModifierEffect::TimesMultIfHand { hands, mult } => {
                if hands.contains(&eval.kind) {
                    x_mult *= mult;
                }
            }
        }
    }

    let chips = eval.base_chips + card_chips + bonus_chips;
    let mult = (eval.base_mult + bonus_mult) * x_mult;
    let total = (chips as f64 * mult).floor() as i64;

    ScoreBreakdown {
        kind: eval.kind,
        base_chips: eval.base_chips,
        card_chips,
        base_mult: eval.base_mult,
        bonus_chips,
        bonus_mult,
        x_mult,
        total,
    }
}

fn count_matching(eval: &HandEval, filter: &crate::CardFilter) -> i64 {
    eval.cards
        .iter()
        .filter(|card| filter.matches(**card))
        .count() as i64
}
