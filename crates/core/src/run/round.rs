use super::RunState;
use crate::{Advisory, Catalog, Deck, Event, EventBus, GameConfig, GameState, Phase, Rack, RngState};

impl RunState {
    /// Start a fresh run with an entropy-backed shuffler.
    pub fn new(config: GameConfig, catalog: Catalog, events: &mut EventBus) -> Self {
        Self::with_rng(config, catalog, RngState::from_entropy(), events)
    }

    pub fn with_rng(
        config: GameConfig,
        catalog: Catalog,
        rng: RngState,
        events: &mut EventBus,
    ) -> Self {
        let state = GameState::new(&config);
        let rack = Rack::with_slots(config.modifier_slots);
        let mut run = Self {
            config,
            catalog,
            rng,
            deck: Deck::default(),
            hand: Vec::new(),
            selected: Vec::new(),
            rack,
            shop: None,
            state,
            advisor: None,
            next_card_id: 1,
            next_instance_uid: 1,
        };
        run.start_round(events);
        run
    }

    /// Rebuild the table for the current round: fresh 52-card deck with new
    /// identities, full shuffle, hand dealt to size, discard and selection
    /// cleared, counters reset. Round number, ante, target, money, and the
    /// rack carry through untouched.
    pub(super) fn start_round(&mut self, events: &mut EventBus) {
        let mut deck = Deck::standard52();
        for card in &mut deck.draw {
            card.id = self.alloc_card_id();
        }
        deck.shuffle(&mut self.rng);
        self.deck = deck;
        self.hand.clear();
        self.selected.clear();
        self.shop = None;

        self.state.phase = Phase::Play;
        self.state.round_score = 0;
        self.state.hands_left = self.config.hands_per_round;
        self.state.discards_left = self.config.discards_per_round;
        self.state.last_hand = None;
        self.state.message = Some(Advisory::SelectCards);

        self.refill_hand();

        events.push(Event::RoundStarted {
            round: self.state.round,
            target: self.state.target,
            hands: self.state.hands_left,
            discards: self.state.discards_left,
        });
    }

    /// Shared tail of both shop exits: next round number, scaled target,
    /// then a full table rebuild.
    pub(super) fn advance_round(&mut self, events: &mut EventBus) {
        self.state.round = self.state.round.saturating_add(1);
        self.state.target = self.config.next_target(self.state.target);
        self.start_round(events);
    }
}
