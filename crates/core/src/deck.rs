use crate::{Card, CardId, Rank, RngState, Suit};

/// The run's draw and discard piles. The third partition, the hand, lives on
/// the run itself; together the three always hold exactly the 52 cards built
/// by `standard52`.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    pub fn standard52() -> Self {
        let mut draw = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                draw.push(Card::new(CardId::default(), suit, rank));
            }
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    /// Draw up to `count` cards from the top. Short draws are not an error;
    /// an exhausted draw pile just yields fewer cards.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.draw.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    pub fn discard(&mut self, mut cards: Vec<Card>) {
        self.discard.append(&mut cards);
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }
}
