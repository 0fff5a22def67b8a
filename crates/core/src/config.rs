use serde::{Deserialize, Serialize};

/// Every tuning constant in one place. The shipped values live in the
/// `Default` impl; the data crate can load a full override from JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    pub hand_size: usize,
    pub hands_per_round: u8,
    pub discards_per_round: u8,
    pub starting_money: i64,
    pub base_target: i64,
    /// Target growth per round, applied with a floor.
    pub target_factor: f64,
    /// Money credited on clearing a round.
    pub clear_bonus: i64,
    /// Money debited per discard action, floored at zero.
    pub discard_cost: i64,
    pub max_selected: usize,
    pub modifier_slots: usize,
    pub shop_offers: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 8,
            hands_per_round: 4,
            discards_per_round: 3,
            starting_money: 4,
            base_target: 300,
            target_factor: 1.5,
            clear_bonus: 5,
            discard_cost: 1,
            max_selected: 5,
            modifier_slots: 5,
            shop_offers: 3,
        }
    }
}

impl GameConfig {
    pub fn next_target(&self, target: i64) -> i64 {
        (target as f64 * self.target_factor).floor() as i64
    }
}
