use crate::HandKind;
use serde::{Deserialize, Serialize};

/// Everything the core wants observed. Committed transitions push here; the
/// presentation drains into its log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        round: u32,
        target: i64,
        hands: u8,
        discards: u8,
    },
    HandPlayed {
        kind: HandKind,
        score: i64,
        round_score: i64,
        hands_left: u8,
    },
    CardsDiscarded {
        count: usize,
        discards_left: u8,
        money: i64,
    },
    RoundCleared {
        round: u32,
        score: i64,
        bonus: i64,
        money: i64,
    },
    ShopOpened {
        offers: usize,
    },
    ModifierBought {
        id: String,
        cost: i64,
        money: i64,
    },
    ShopSkipped {
        round: u32,
    },
    GameOver {
        round: u32,
        score: i64,
        target: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
