use crate::app::{card_label, hand_label, rarity_label, App};
use feltro_core::{Phase, Suit};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(root[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(middle[0]);
    draw_hand(frame, left[0], app);
    draw_preview(frame, left[1], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(middle[1]);
    draw_rack(frame, right[0], app);
    draw_shop_or_last_hand(frame, right[1], app);

    draw_log(frame, root[2], app);

    if app.run.state.phase == Phase::GameOver {
        draw_game_over(frame, app);
    }
    if app.show_help {
        draw_help(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.run.state;
    let stats = format!(
        "Round {}  Ante {}/8  ${}  Hands {}  Discards {}  Score {}/{}  Deck {}",
        state.round,
        state.ante,
        state.money,
        state.hands_left,
        state.discards_left,
        state.round_score,
        state.target,
        app.run.deck.remaining(),
    );
    let lines = vec![Line::from(stats), Line::from(app.advisory_text())];
    let header = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Feltro (? for help)"));
    frame.render_widget(header, area);
}

fn draw_hand(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .run
        .hand
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let cursor = if idx == app.cursor { '>' } else { ' ' };
            let mark = if app.run.selected.contains(&card.id) {
                'x'
            } else {
                ' '
            };
            let line = format!(
                "{cursor} [{mark}] {:<3} +{} chips",
                card_label(*card),
                card.chips()
            );
            let mut style = match card.suit {
                Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
                Suit::Spades | Suit::Clubs => Style::default(),
            };
            if idx == app.cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(line).style(style)
        })
        .collect();
    let title = format!(
        "Hand ({} selected of {})",
        app.run.selected.len(),
        app.run.config.max_selected
    );
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_preview(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match app.run.preview_score() {
        Some(preview) => {
            let chips = preview.base_chips + preview.card_chips + preview.bonus_chips;
            let mult = (preview.base_mult + preview.bonus_mult) * preview.x_mult;
            vec![
                Line::from(hand_label(preview.kind).to_string()),
                Line::from(format!("{chips} chips x {mult} mult")),
                Line::from(format!("= {}", preview.total)),
            ]
        }
        None => vec![Line::from("Select up to 5 cards")],
    };
    let preview =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Preview"));
    frame.render_widget(preview, area);
}

fn draw_rack(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .run
        .rack
        .modifiers
        .iter()
        .map(|instance| {
            let line = match app.run.catalog.get(&instance.def_id) {
                Some(def) => format!("{}: {}", def.name, def.description),
                None => instance.def_id.clone(),
            };
            ListItem::new(line)
        })
        .collect();
    let title = format!("Jokers {}/{}", app.run.rack.len(), app.run.rack.slots);
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_shop_or_last_hand(frame: &mut Frame, area: Rect, app: &App) {
    if app.run.state.phase == Phase::Shop {
        draw_shop(frame, area, app);
    } else {
        draw_last_hand(frame, area, app);
    }
}

fn draw_shop(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    if let Some(shop) = app.run.shop.as_ref() {
        for (idx, offer) in shop.offers.iter().enumerate() {
            let (name, description) = app
                .run
                .catalog
                .get(&offer.def_id)
                .map(|def| (def.name.as_str(), def.description.as_str()))
                .unwrap_or((offer.def_id.as_str(), ""));
            lines.push(Line::from(format!(
                "{}) {} ${} [{}] {}",
                idx + 1,
                name,
                offer.cost,
                rarity_label(offer.rarity),
                description
            )));
        }
    }
    lines.push(Line::from("s) Skip shop"));
    let shop = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Shop"));
    frame.render_widget(shop, area);
}

fn draw_last_hand(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match &app.run.state.last_hand {
        Some(last) => vec![
            Line::from(format!("{} = {}", hand_label(last.kind), last.total)),
            Line::from(format!(
                "chips {} + {} + {}",
                last.base_chips, last.card_chips, last.bonus_chips
            )),
            Line::from(format!(
                "mult ({} + {}) x {}",
                last.base_mult, last.bonus_mult, last.x_mult
            )),
        ],
        None => vec![
            Line::from("space select  enter play  d discard"),
            Line::from("r/u sort  a advice  q quit"),
        ],
    };
    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Last Hand"));
    frame.render_widget(panel, area);
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.log.len().saturating_sub(visible);
    let items: Vec<ListItem> = app
        .log
        .iter()
        .skip(start)
        .map(|line| ListItem::new(line.clone()))
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Events"));
    frame.render_widget(list, area);
}

fn draw_game_over(frame: &mut Frame, app: &App) {
    let area = centered_rect(40, 7, frame.area());
    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(format!("Reached Round {}", app.run.state.round)),
        Line::from(format!(
            "Final score {}/{}",
            app.run.state.round_score, app.run.state.target
        )),
        Line::from("q to quit"),
    ];
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn draw_help(frame: &mut Frame) {
    let area = centered_rect(48, 12, frame.area());
    let lines = vec![
        Line::from("left/right or h/l  move cursor"),
        Line::from("space              select / deselect"),
        Line::from("enter or p         play hand"),
        Line::from("d                  discard selection (-$1)"),
        Line::from("r / u              sort by rank / suit"),
        Line::from("1-3                buy shop offer"),
        Line::from("s                  skip shop"),
        Line::from("a                  ask the joker"),
        Line::from("q or esc           quit"),
    ];
    let popup = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Keys"));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
