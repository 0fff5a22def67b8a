use crate::Card;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 10] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::ThreeOfAKind,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::FourOfAKind,
        HandKind::StraightFlush,
        HandKind::RoyalFlush,
    ];

    /// Stable key used for score lookup and by external display-text
    /// resolution. Never user-facing on its own.
    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::ThreeOfAKind => "three_of_a_kind",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::FourOfAKind => "four_of_a_kind",
            HandKind::StraightFlush => "straight_flush",
            HandKind::RoyalFlush => "royal_flush",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        HandKind::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Base (chips, mult) for the category.
    pub fn base_score(self) -> (i64, f64) {
        match self {
            HandKind::HighCard => (5, 1.0),
            HandKind::Pair => (10, 2.0),
            HandKind::TwoPair => (20, 2.0),
            HandKind::ThreeOfAKind => (30, 3.0),
            HandKind::Straight => (30, 4.0),
            HandKind::Flush => (35, 4.0),
            HandKind::FullHouse => (40, 4.0),
            HandKind::FourOfAKind => (60, 7.0),
            HandKind::StraightFlush | HandKind::RoyalFlush => (100, 8.0),
        }
    }
}

/// Classification of a selection: category, its base score, and the selected
/// cards sorted ascending by rank value. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct HandEval {
    pub kind: HandKind,
    pub base_chips: i64,
    pub base_mult: f64,
    pub cards: Vec<Card>,
}

impl HandEval {
    /// Sentinel for an empty selection. Classified as a high card with a
    /// zeroed base so it can never score as a real play.
    fn empty() -> Self {
        Self {
            kind: HandKind::HighCard,
            base_chips: 0,
            base_mult: 0.0,
            cards: Vec::new(),
        }
    }
}

/// Classify 0–5 selected cards. First match in the precedence ladder wins.
///
/// Straight and flush detection require exactly five cards; smaller
/// selections only ever classify through the rank-frequency ladder.
pub fn evaluate_hand(selected: &[Card]) -> HandEval {
    if selected.is_empty() {
        return HandEval::empty();
    }

    let mut cards = selected.to_vec();
    cards.sort_by_key(|card| card.value());

    let is_flush = cards.len() == 5 && cards.iter().all(|card| card.suit == cards[0].suit);
    let is_straight = cards.len() == 5 && is_straight_run(&cards);

    let mut rank_counts: HashMap<u8, usize> = HashMap::new();
    for card in &cards {
        *rank_counts.entry(card.value()).or_insert(0) += 1;
    }
    let mut freq: Vec<usize> = rank_counts.values().copied().collect();
    freq.sort_by(|a, b| b.cmp(a));

    let kind = if is_flush && is_straight {
        if is_royal(&cards) {
            HandKind::RoyalFlush
        } else {
            HandKind::StraightFlush
        }
    } else if freq[0] == 4 {
        HandKind::FourOfAKind
    } else if freq[0] == 3 && freq.get(1).copied().unwrap_or(0) >= 2 {
        HandKind::FullHouse
    } else if is_flush {
        HandKind::Flush
    } else if is_straight {
        HandKind::Straight
    } else if freq[0] == 3 {
        HandKind::ThreeOfAKind
    } else if freq[0] == 2 && freq.get(1).copied().unwrap_or(0) == 2 {
        HandKind::TwoPair
    } else if freq[0] == 2 {
        HandKind::Pair
    } else {
        HandKind::HighCard
    };

    let (base_chips, base_mult) = kind.base_score();
    HandEval {
        kind,
        base_chips,
        base_mult,
        cards,
    }
}

/// Five consecutive distinct rank values, with A-2-3-4-5 (the wheel) treated
/// as consecutive.
fn is_straight_run(cards: &[Card]) -> bool {
    let mut values: Vec<u8> = cards.iter().map(|card| card.value()).collect();
    values.sort_unstable();
    values.dedup();
    if values.len() != 5 {
        return false;
    }
    if values == [2, 3, 4, 5, 14] {
        return true;
    }
    values.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Royal requires both Ace and King in a straight flush, which rules the
/// wheel flush out.
fn is_royal(cards: &[Card]) -> bool {
    let has = |value: u8| cards.iter().any(|card| card.value() == value);
    has(14) && has(13)
}
