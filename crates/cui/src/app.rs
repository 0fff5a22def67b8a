use crate::input::UiAction;
use anyhow::Result;
use feltro_core::{
    Advisor, Advisory, Card, Event, EventBus, HandKind, ModifierRarity, RngState, RunState,
    SortKey, Suit, TableView,
};
use feltro_data::{load_builtin_catalog, load_builtin_config};
use std::collections::{HashMap, VecDeque};

const MAX_EVENT_LOG: usize = 100;

pub struct App {
    pub run: RunState,
    pub cursor: usize,
    pub log: VecDeque<String>,
    pub should_quit: bool,
    pub show_help: bool,
}

impl App {
    pub fn bootstrap(seed: Option<u64>) -> Result<Self> {
        let config = load_builtin_config();
        let catalog = load_builtin_catalog();
        let rng = match seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let mut events = EventBus::default();
        let mut run = RunState::with_rng(config, catalog, rng, &mut events);
        run.set_advisor(Some(Box::new(TableTalk)));

        let mut app = Self {
            run,
            cursor: 0,
            log: VecDeque::new(),
            should_quit: false,
            show_help: false,
        };
        app.drain_events(&mut events);
        Ok(app)
    }

    pub fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::None => {}
            UiAction::Quit => self.should_quit = true,
            UiAction::Help => self.show_help = !self.show_help,
            UiAction::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            UiAction::CursorRight => self.cursor += 1,
            UiAction::ToggleSelect => {
                if let Some(card) = self.run.hand.get(self.cursor) {
                    let id = card.id;
                    self.run.toggle_select(id);
                }
            }
            UiAction::PlayHand => self.with_events(|run, events| run.play_hand(events)),
            UiAction::Discard => self.with_events(|run, events| run.discard_selected(events)),
            UiAction::SortRank => self.run.sort_hand(SortKey::Rank),
            UiAction::SortSuit => self.run.sort_hand(SortKey::Suit),
            UiAction::BuyOffer(index) => {
                let def_id = self
                    .run
                    .shop
                    .as_ref()
                    .and_then(|shop| shop.offers.get(index))
                    .map(|offer| offer.def_id.clone());
                if let Some(def_id) = def_id {
                    self.with_events(|run, events| run.buy_modifier(&def_id, events));
                }
            }
            UiAction::SkipShop => self.with_events(|run, events| run.skip_shop(events)),
            UiAction::Advice => self.run.request_advice(),
        }
        self.clamp_cursor();
    }

    fn with_events(&mut self, command: impl FnOnce(&mut RunState, &mut EventBus)) {
        let mut events = EventBus::default();
        command(&mut self.run, &mut events);
        self.drain_events(&mut events);
    }

    fn drain_events(&mut self, events: &mut EventBus) {
        let lines: Vec<String> = events.drain().map(|event| self.format_event(&event)).collect();
        for line in lines {
            self.log.push_back(line);
            while self.log.len() > MAX_EVENT_LOG {
                self.log.pop_front();
            }
        }
    }

    fn clamp_cursor(&mut self) {
        if self.run.hand.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.run.hand.len() {
            self.cursor = self.run.hand.len() - 1;
        }
    }

    fn format_event(&self, event: &Event) -> String {
        match event {
            Event::RoundStarted {
                round,
                target,
                hands,
                discards,
            } => format!("Round {round}: score at least {target} ({hands} hands, {discards} discards)"),
            Event::HandPlayed {
                kind,
                score,
                round_score,
                hands_left,
            } => format!(
                "Played {} for {score}: {round_score} banked, {hands_left} hands left",
                hand_label(*kind)
            ),
            Event::CardsDiscarded {
                count,
                discards_left,
                money,
            } => format!("Discarded {count} cards: {discards_left} discards left, ${money}"),
            Event::RoundCleared {
                round,
                score,
                bonus,
                money,
            } => format!("Round {round} cleared at {score} (+${bonus}, ${money})"),
            Event::ShopOpened { offers } => format!("Shop open with {offers} offers"),
            Event::ModifierBought { id, cost, money } => {
                let name = self
                    .run
                    .catalog
                    .get(id)
                    .map(|def| def.name.as_str())
                    .unwrap_or(id.as_str());
                format!("Bought {name} for ${cost} (${money} left)")
            }
            Event::ShopSkipped { round } => format!("Skipped the shop after round {round}"),
            Event::GameOver {
                round,
                score,
                target,
            } => format!("GAME OVER in round {round}: {score}/{target}"),
        }
    }

    /// Resolve the typed advisory to display text. The core only ever emits
    /// stable keys; all wording lives here.
    pub fn advisory_text(&self) -> String {
        match &self.run.state.message {
            None => "Select up to 5 cards".to_string(),
            Some(Advisory::SelectCards) => "Select cards to play.".to_string(),
            Some(Advisory::Played { kind, score }) => {
                format!("Played {} for {score}!", hand_label(*kind))
            }
            Some(Advisory::Discarded) => "Trash taken out.".to_string(),
            Some(Advisory::ChooseModifier) => "Choose a Joker to add to your deck!".to_string(),
            Some(Advisory::TooPoor) => "Too poor!".to_string(),
            Some(Advisory::RackFull) => "No room for more Jokers!".to_string(),
            Some(Advisory::GameOver) => "GAME OVER".to_string(),
            Some(Advisory::Advice(line)) => line.clone(),
        }
    }
}

pub fn hand_label(kind: HandKind) -> &'static str {
    match kind {
        HandKind::HighCard => "High Card",
        HandKind::Pair => "Pair",
        HandKind::TwoPair => "Two Pair",
        HandKind::ThreeOfAKind => "Three of a Kind",
        HandKind::Straight => "Straight",
        HandKind::Flush => "Flush",
        HandKind::FullHouse => "Full House",
        HandKind::FourOfAKind => "Four of a Kind",
        HandKind::StraightFlush => "Straight Flush",
        HandKind::RoyalFlush => "Royal Flush",
    }
}

pub fn suit_symbol(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "♠",
        Suit::Hearts => "♥",
        Suit::Clubs => "♣",
        Suit::Diamonds => "♦",
    }
}

pub fn card_label(card: Card) -> String {
    format!("{}{}", card.rank.id(), suit_symbol(card.suit))
}

pub fn rarity_label(rarity: ModifierRarity) -> &'static str {
    match rarity {
        ModifierRarity::Common => "Common",
        ModifierRarity::Uncommon => "Uncommon",
        ModifierRarity::Rare => "Rare",
        ModifierRarity::Legendary => "Legendary",
    }
}

/// Offline table-talk: the same seam an external advisory text service would
/// plug into, speaking from a couple of canned observations about the hand.
pub struct TableTalk;

impl Advisor for TableTalk {
    fn advise(&self, view: TableView<'_>) -> String {
        let mut suit_counts: HashMap<Suit, usize> = HashMap::new();
        let mut rank_counts: HashMap<u8, usize> = HashMap::new();
        for card in view.hand {
            *suit_counts.entry(card.suit).or_insert(0) += 1;
            *rank_counts.entry(card.value()).or_insert(0) += 1;
        }
        let flush_suit = suit_counts
            .iter()
            .find(|(_, &count)| count >= 5)
            .map(|(&suit, _)| suit);
        let best_group = rank_counts.values().copied().max().unwrap_or(0);
        let gap = view.target - view.round_score;

        if let Some(suit) = flush_suit {
            return format!(
                "Five {}s in hand. Go for the flush, you coward.",
                suit_symbol(suit)
            );
        }
        match best_group {
            4.. => "Four of a kind is sitting right there. Don't blow it.".to_string(),
            3 => "Trips in hand. Respectable, barely.".to_string(),
            2 if gap > 200 => format!("A pair won't close a {gap} gap. Dig for better."),
            2 => "A pair? Pathetic, but it might work.".to_string(),
            _ => "Garbage hand. Discard something and pray.".to_string(),
        }
    }
}
