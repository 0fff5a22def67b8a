use super::RunState;
use crate::{
    calculate_score, evaluate_hand, Advisory, Card, CardId, Event, EventBus, Phase, ScoreBreakdown,
    ShopState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rank,
    Suit,
}

impl RunState {
    /// Toggle a card in or out of the selection. Ignores ids not in the
    /// hand; a sixth selection is rejected with the prior five retained.
    pub fn toggle_select(&mut self, id: CardId) {
        if self.state.phase != Phase::Play {
            return;
        }
        if !self.hand.iter().any(|card| card.id == id) {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|&sel| sel == id) {
            self.selected.remove(pos);
        } else if self.selected.len() < self.config.max_selected {
            self.selected.push(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selected_cards(&self) -> Vec<Card> {
        self.hand
            .iter()
            .copied()
            .filter(|card| self.selected.contains(&card.id))
            .collect()
    }

    /// Score the current selection without committing anything. Reentrant;
    /// the presentation calls this on every selection change.
    pub fn preview_score(&self) -> Option<ScoreBreakdown> {
        if self.selected.is_empty() {
            return None;
        }
        let eval = evaluate_hand(&self.selected_cards());
        Some(calculate_score(
            &eval,
            &self.rack.modifiers,
            &self.catalog,
            self.pool_size(),
        ))
    }

    /// Reorder the hand for display. Selection is id-based and unaffected.
    pub fn sort_hand(&mut self, key: SortKey) {
        match key {
            SortKey::Rank => self
                .hand
                .sort_by(|a, b| b.value().cmp(&a.value()).then(a.suit.cmp(&b.suit))),
            SortKey::Suit => self
                .hand
                .sort_by(|a, b| a.suit.cmp(&b.suit).then(b.value().cmp(&a.value()))),
        }
    }

    /// Play the selection: score it, move it to the discard pile, refill the
    /// hand, burn a hand counter, then settle the round outcome.
    pub fn play_hand(&mut self, events: &mut EventBus) {
        if self.state.phase != Phase::Play
            || self.state.hands_left == 0
            || self.selected.is_empty()
        {
            return;
        }

        let pool_size = self.pool_size();
        let played = self.take_selected();
        let eval = evaluate_hand(&played);
        let breakdown = calculate_score(&eval, &self.rack.modifiers, &self.catalog, pool_size);

        self.deck.discard(played);
        self.refill_hand();
        self.state.hands_left -= 1;
        self.state.round_score += breakdown.total;
        self.state.message = Some(Advisory::Played {
            kind: breakdown.kind,
            score: breakdown.total,
        });
        events.push(Event::HandPlayed {
            kind: breakdown.kind,
            score: breakdown.total,
            round_score: self.state.round_score,
            hands_left: self.state.hands_left,
        });
        self.state.last_hand = Some(breakdown);

        if self.state.round_score >= self.state.target {
            self.clear_round(events);
        } else if self.state.hands_left == 0 {
            self.state.phase = Phase::GameOver;
            self.state.message = Some(Advisory::GameOver);
            events.push(Event::GameOver {
                round: self.state.round,
                score: self.state.round_score,
                target: self.state.target,
            });
        }
    }

    /// Discard the selection: to the pile, refill, burn a discard counter,
    /// debit the fee (money never drops below zero).
    pub fn discard_selected(&mut self, events: &mut EventBus) {
        if self.state.phase != Phase::Play
            || self.state.discards_left == 0
            || self.selected.is_empty()
        {
            return;
        }

        let discarded = self.take_selected();
        let count = discarded.len();
        self.deck.discard(discarded);
        self.refill_hand();
        self.state.discards_left -= 1;
        self.state.money = (self.state.money - self.config.discard_cost).max(0);
        self.state.message = Some(Advisory::Discarded);
        events.push(Event::CardsDiscarded {
            count,
            discards_left: self.state.discards_left,
            money: self.state.money,
        });
    }

    /// Target reached: credit the clear bonus and open the shop. Two
    /// back-to-back transitions ("round cleared", "shop opened"); any pause
    /// between them is a presentation concern.
    fn clear_round(&mut self, events: &mut EventBus) {
        self.state.money += self.config.clear_bonus;
        events.push(Event::RoundCleared {
            round: self.state.round,
            score: self.state.round_score,
            bonus: self.config.clear_bonus,
            money: self.state.money,
        });

        let shop = ShopState::generate(&self.catalog, &self.config, &mut self.rng);
        events.push(Event::ShopOpened {
            offers: shop.offers.len(),
        });
        self.shop = Some(shop);
        self.state.phase = Phase::Shop;
        self.state.message = Some(Advisory::ChooseModifier);
    }

    fn take_selected(&mut self) -> Vec<Card> {
        let ids: Vec<CardId> = self.selected.drain(..).collect();
        let mut taken = Vec::with_capacity(ids.len());
        self.hand.retain(|card| {
            if ids.contains(&card.id) {
                taken.push(*card);
                false
            } else {
                true
            }
        });
        taken
    }
}
