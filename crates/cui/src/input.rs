use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    Quit,
    Help,
    CursorLeft,
    CursorRight,
    ToggleSelect,
    PlayHand,
    Discard,
    SortRank,
    SortSuit,
    BuyOffer(usize),
    SkipShop,
    Advice,
}

pub fn map_key(key: KeyEvent) -> UiAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return UiAction::Quit;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => UiAction::Quit,
        KeyCode::Char('?') => UiAction::Help,
        KeyCode::Left | KeyCode::Char('h') => UiAction::CursorLeft,
        KeyCode::Right | KeyCode::Char('l') => UiAction::CursorRight,
        KeyCode::Char(' ') => UiAction::ToggleSelect,
        KeyCode::Enter | KeyCode::Char('p') => UiAction::PlayHand,
        KeyCode::Char('d') => UiAction::Discard,
        KeyCode::Char('r') => UiAction::SortRank,
        KeyCode::Char('u') => UiAction::SortSuit,
        KeyCode::Char('s') => UiAction::SkipShop,
        KeyCode::Char('a') => UiAction::Advice,
        KeyCode::Char(digit @ '1'..='3') => UiAction::BuyOffer(digit as usize - '1' as usize),
        _ => UiAction::None,
    }
}
