use crate::{Advisor, Catalog, Deck, GameConfig, GameState, Rack, RngState, ShopState, TableView};

mod hand;
mod round;
mod shop;

pub use hand::SortKey;

/// One run of the game: the card partitions, the modifier rack, the round
/// state, and the command surface the presentation drives.
///
/// Commands follow the silent no-op policy: a failed guard leaves the run
/// untouched and raises no error; economic rejections surface through the
/// advisory field only.
pub struct RunState {
    pub config: GameConfig,
    pub catalog: Catalog,
    pub rng: RngState,
    pub deck: Deck,
    pub hand: Vec<crate::Card>,
    pub selected: Vec<crate::CardId>,
    pub rack: Rack,
    pub shop: Option<ShopState>,
    pub state: GameState,
    advisor: Option<Box<dyn Advisor>>,
    next_card_id: u32,
    next_instance_uid: u32,
}

impl RunState {
    /// Total cards tracked by the run: deck + hand + discard. Scaling
    /// modifier effects read this.
    pub fn pool_size(&self) -> usize {
        self.deck.draw.len() + self.deck.discard.len() + self.hand.len()
    }

    pub fn set_advisor(&mut self, advisor: Option<Box<dyn Advisor>>) {
        self.advisor = advisor;
    }

    /// Forward a read-only view to the wired advisor and store its line in
    /// the advisory field. No other state effect, no-op without an advisor.
    pub fn request_advice(&mut self) {
        let Some(advisor) = self.advisor.as_deref() else {
            return;
        };
        let line = advisor.advise(TableView {
            hand: &self.hand,
            round_score: self.state.round_score,
            target: self.state.target,
        });
        self.state.message = Some(crate::Advisory::Advice(line));
    }

    pub(crate) fn alloc_card_id(&mut self) -> crate::CardId {
        let id = self.next_card_id;
        self.next_card_id = self.next_card_id.saturating_add(1);
        crate::CardId(id)
    }

    pub(crate) fn alloc_instance_uid(&mut self) -> u32 {
        let uid = self.next_instance_uid;
        self.next_instance_uid = self.next_instance_uid.saturating_add(1);
        uid
    }

    pub(crate) fn refill_hand(&mut self) {
        let needed = self.config.hand_size.saturating_sub(self.hand.len());
        if needed == 0 {
            return;
        }
        let mut drawn = self.deck.draw_cards(needed);
        self.hand.append(&mut drawn);
    }
}
