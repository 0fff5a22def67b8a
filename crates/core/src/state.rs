use crate::{GameConfig, HandKind, ScoreBreakdown};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Play,
    Shop,
    GameOver,
}

/// Advisory line shown to the player. Typed, not display text: the
/// presentation resolves these to whatever language it speaks, the same way
/// it resolves `HandKind::id()` keys. Free-form advisor output rides in
/// `Advice`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Advisory {
    SelectCards,
    Played { kind: HandKind, score: i64 },
    Discarded,
    ChooseModifier,
    TooPoor,
    RackFull,
    GameOver,
    Advice(String),
}

/// Mutable round state. Replaced wholesale at round start except for the
/// carried fields: round, ante, target, money. The modifier rack is carried
/// on the run itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub round: u32,
    /// Display tier only; carried across rounds, never advanced.
    pub ante: u8,
    pub round_score: i64,
    pub target: i64,
    pub hands_left: u8,
    pub discards_left: u8,
    pub money: i64,
    pub message: Option<Advisory>,
    pub last_hand: Option<ScoreBreakdown>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::Play,
            round: 1,
            ante: 1,
            round_score: 0,
            target: config.base_target,
            hands_left: config.hands_per_round,
            discards_left: config.discards_per_round,
            money: config.starting_money,
            message: Some(Advisory::SelectCards),
            last_hand: None,
        }
    }
}
