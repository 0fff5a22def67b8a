use feltro_core::{
    Activation, Advisory, CardId, Catalog, EventBus, GameConfig, ModifierDef, ModifierEffect,
    ModifierInstance, ModifierRarity, Phase, RngState, RunState, SortKey,
};
use std::collections::HashSet;

fn catalog() -> Catalog {
    let defs = (0..6)
        .map(|idx| ModifierDef {
            id: format!("mod_{idx}"),
            name: format!("Mod {idx}"),
            description: String::new(),
            rarity: ModifierRarity::Common,
            cost: 3,
            activation: Activation::Passive,
            effect: ModifierEffect::AddMult(4.0),
        })
        .collect();
    Catalog::new(defs).expect("test catalog is valid")
}

fn new_run(seed: u64) -> RunState {
    let mut events = EventBus::default();
    RunState::with_rng(
        GameConfig::default(),
        catalog(),
        RngState::from_seed(seed),
        &mut events,
    )
}

/// deck ∪ hand ∪ discard must always be exactly the 52 distinct cards.
fn assert_partition(run: &RunState) {
    let mut seen: HashSet<CardId> = HashSet::new();
    let mut pairs = HashSet::new();
    for card in run
        .deck
        .draw
        .iter()
        .chain(run.deck.discard.iter())
        .chain(run.hand.iter())
    {
        assert!(seen.insert(card.id), "duplicate card id {:?}", card.id);
        pairs.insert((card.suit, card.rank));
    }
    assert_eq!(seen.len(), 52);
    assert_eq!(pairs.len(), 52, "shuffle must keep all 52 suit/rank pairs");
}

fn select_first(run: &mut RunState, count: usize) {
    let ids: Vec<CardId> = run.hand.iter().take(count).map(|card| card.id).collect();
    for id in ids {
        run.toggle_select(id);
    }
}

#[test]
fn a_fresh_run_deals_eight_from_a_full_shuffled_deck() {
    let run = new_run(7);
    assert_eq!(run.state.phase, Phase::Play);
    assert_eq!(run.state.round, 1);
    assert_eq!(run.state.target, 300);
    assert_eq!(run.state.money, 4);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.deck.draw.len(), 44);
    assert!(run.deck.discard.is_empty());
    assert_partition(&run);
}

#[test]
fn selection_is_capped_at_five_and_keeps_prior_picks() {
    let mut run = new_run(7);
    let ids: Vec<CardId> = run.hand.iter().map(|card| card.id).collect();
    for id in &ids[..6] {
        run.toggle_select(*id);
    }
    assert_eq!(run.selected.len(), 5);
    assert_eq!(run.selected, ids[..5].to_vec());

    // Toggling a selected card back out frees a slot.
    run.toggle_select(ids[0]);
    assert_eq!(run.selected.len(), 4);
    run.toggle_select(ids[5]);
    assert_eq!(run.selected.len(), 5);
}

#[test]
fn unknown_ids_are_ignored_by_selection() {
    let mut run = new_run(7);
    run.toggle_select(CardId(9999));
    assert!(run.selected.is_empty());
}

#[test]
fn play_with_empty_selection_is_a_no_op() {
    let mut run = new_run(7);
    let mut events = EventBus::default();
    run.play_hand(&mut events);
    assert_eq!(run.state.hands_left, 4);
    assert_eq!(events.drain().count(), 0);
}

#[test]
fn playing_moves_cards_through_the_discard_pile() {
    let mut run = new_run(7);
    let mut events = EventBus::default();
    select_first(&mut run, 5);
    run.play_hand(&mut events);

    assert_eq!(run.state.hands_left, 3);
    assert_eq!(run.deck.discard.len(), 5);
    assert_eq!(run.hand.len(), 8);
    assert!(run.selected.is_empty());
    assert!(run.state.last_hand.is_some());
    assert!(run.state.round_score > 0);
    assert_partition(&run);
}

#[test]
fn discard_burns_a_counter_and_a_dollar() {
    let mut run = new_run(7);
    let mut events = EventBus::default();
    select_first(&mut run, 3);
    run.discard_selected(&mut events);

    assert_eq!(run.state.discards_left, 2);
    assert_eq!(run.state.money, 3);
    assert_eq!(run.state.hands_left, 4, "discarding must not burn a hand");
    assert_eq!(run.deck.discard.len(), 3);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.state.message, Some(Advisory::Discarded));
    assert_partition(&run);
}

#[test]
fn discard_cost_floors_money_at_zero() {
    let mut run = new_run(7);
    let mut events = EventBus::default();
    run.state.money = 0;
    select_first(&mut run, 1);
    run.discard_selected(&mut events);
    assert_eq!(run.state.money, 0);
}

#[test]
fn discards_exhausted_means_no_op() {
    let mut run = new_run(7);
    let mut events = EventBus::default();
    run.state.discards_left = 0;
    select_first(&mut run, 1);
    run.discard_selected(&mut events);
    assert_eq!(run.selected.len(), 1, "selection must survive the rejection");
    assert_eq!(run.deck.discard.len(), 0);
}

#[test]
fn four_failed_hands_end_the_run() {
    let mut run = new_run(7);
    let mut events = EventBus::default();
    // Single low cards can never reach the 300 target in four plays.
    for _ in 0..4 {
        select_first(&mut run, 1);
        run.play_hand(&mut events);
    }
    assert_eq!(run.state.phase, Phase::GameOver);
    assert_eq!(run.state.hands_left, 0);
    assert_eq!(run.state.message, Some(Advisory::GameOver));
}

#[test]
fn game_over_absorbs_every_command() {
    let mut run = new_run(7);
    let mut events = EventBus::default();
    for _ in 0..4 {
        select_first(&mut run, 1);
        run.play_hand(&mut events);
    }
    assert_eq!(run.state.phase, Phase::GameOver);

    let round = run.state.round;
    let money = run.state.money;
    select_first(&mut run, 1);
    assert!(run.selected.is_empty(), "selection is closed after game over");
    run.play_hand(&mut events);
    run.discard_selected(&mut events);
    run.buy_modifier("mod_0", &mut events);
    run.skip_shop(&mut events);
    assert_eq!(run.state.phase, Phase::GameOver);
    assert_eq!(run.state.round, round);
    assert_eq!(run.state.money, money);
}

fn run_in_shop(seed: u64) -> (RunState, EventBus) {
    let mut run = new_run(seed);
    let mut events = EventBus::default();
    // Any scored play clears a trivial target.
    run.state.target = 1;
    select_first(&mut run, 5);
    run.play_hand(&mut events);
    assert_eq!(run.state.phase, Phase::Shop);
    (run, events)
}

#[test]
fn clearing_the_round_credits_the_bonus_and_opens_the_shop() {
    let (run, _) = run_in_shop(11);
    assert_eq!(run.state.money, 4 + 5);
    let shop = run.shop.as_ref().expect("shop offers rolled");
    assert_eq!(shop.offers.len(), 3);
    let distinct: HashSet<&str> = shop.offers.iter().map(|o| o.def_id.as_str()).collect();
    assert_eq!(distinct.len(), 3, "offers must be distinct definitions");
    assert_eq!(run.state.message, Some(Advisory::ChooseModifier));
}

#[test]
fn buying_debits_money_and_starts_the_next_round() {
    let (mut run, mut events) = run_in_shop(11);
    let offer = run.shop.as_ref().unwrap().offers[0].clone();
    let money_before = run.state.money;

    run.buy_modifier(&offer.def_id, &mut events);

    assert_eq!(run.rack.len(), 1);
    assert_eq!(run.rack.modifiers[0].def_id, offer.def_id);
    assert_eq!(run.state.money, money_before - offer.cost);
    assert_eq!(run.state.round, 2);
    assert_eq!(run.state.target, 1, "floor(1 × 1.5) = 1");
    assert_eq!(run.state.phase, Phase::Play);
    assert_eq!(run.state.hands_left, 4);
    assert_eq!(run.state.discards_left, 3);
    assert_eq!(run.state.round_score, 0);
    assert_eq!(run.hand.len(), 8);
    assert!(run.deck.discard.is_empty());
    assert_partition(&run);
}

#[test]
fn skip_takes_the_same_round_advance_path() {
    let (mut run, mut events) = run_in_shop(11);
    run.state.target = 300;
    let money = run.state.money;
    let rack_len = run.rack.len();

    run.skip_shop(&mut events);

    assert_eq!(run.state.round, 2);
    assert_eq!(run.state.target, 450);
    assert_eq!(run.state.money, money);
    assert_eq!(run.rack.len(), rack_len);
    assert_eq!(run.state.phase, Phase::Play);
}

#[test]
fn target_scaling_floors_odd_products() {
    let (mut run, mut events) = run_in_shop(11);
    run.state.target = 25;
    run.skip_shop(&mut events);
    assert_eq!(run.state.target, 37, "floor(25 × 1.5) = 37");
}

#[test]
fn unaffordable_purchase_changes_only_the_advisory() {
    let (mut run, mut events) = run_in_shop(11);
    run.state.money = 0;
    let offer_id = run.shop.as_ref().unwrap().offers[0].def_id.clone();
    let round = run.state.round;

    run.buy_modifier(&offer_id, &mut events);

    assert_eq!(run.state.money, 0);
    assert_eq!(run.rack.len(), 0);
    assert_eq!(run.state.phase, Phase::Shop);
    assert_eq!(run.state.round, round);
    assert_eq!(run.state.message, Some(Advisory::TooPoor));
}

#[test]
fn full_rack_rejects_the_purchase() {
    let (mut run, mut events) = run_in_shop(11);
    for uid in 0..5 {
        run.rack
            .try_add(ModifierInstance {
                uid,
                def_id: "mod_5".to_string(),
            })
            .unwrap();
    }
    let offer_id = run.shop.as_ref().unwrap().offers[0].def_id.clone();
    let money = run.state.money;

    run.buy_modifier(&offer_id, &mut events);

    assert_eq!(run.rack.len(), 5);
    assert_eq!(run.state.money, money);
    assert_eq!(run.state.phase, Phase::Shop);
    assert_eq!(run.state.message, Some(Advisory::RackFull));
}

#[test]
fn buying_an_id_not_on_offer_is_ignored() {
    let (mut run, mut events) = run_in_shop(11);
    let money = run.state.money;
    run.buy_modifier("definitely_not_offered", &mut events);
    assert_eq!(run.state.phase, Phase::Shop);
    assert_eq!(run.state.money, money);
    assert_eq!(run.rack.len(), 0);
}

#[test]
fn money_and_rack_persist_across_rounds() {
    let (mut run, mut events) = run_in_shop(11);
    let offer = run.shop.as_ref().unwrap().offers[0].clone();
    run.buy_modifier(&offer.def_id, &mut events);
    let money = run.state.money;

    run.state.target = 1;
    select_first(&mut run, 5);
    run.play_hand(&mut events);
    assert_eq!(run.state.phase, Phase::Shop);
    run.skip_shop(&mut events);

    assert_eq!(run.rack.len(), 1, "rack carries across rounds");
    assert_eq!(run.state.money, money + 5, "only the clear bonus came in");
    assert_eq!(run.state.round, 3);
}

#[test]
fn preview_is_pure_and_repeatable() {
    let mut run = new_run(7);
    select_first(&mut run, 5);

    let hands_left = run.state.hands_left;
    let score = run.state.round_score;
    let first = run.preview_score().expect("selection previews");
    let second = run.preview_score().expect("selection previews");

    assert_eq!(first, second);
    assert_eq!(run.state.hands_left, hands_left);
    assert_eq!(run.state.round_score, score);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.selected.len(), 5);
}

#[test]
fn preview_of_nothing_is_none() {
    let run = new_run(7);
    assert!(run.preview_score().is_none());
}

#[test]
fn sorting_reorders_without_touching_selection() {
    let mut run = new_run(7);
    select_first(&mut run, 2);
    let selected = run.selected.clone();

    run.sort_hand(SortKey::Rank);
    let values: Vec<u8> = run.hand.iter().map(|card| card.value()).collect();
    let mut expected = values.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(values, expected);
    assert_eq!(run.selected, selected);

    run.sort_hand(SortKey::Suit);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.selected, selected);
    assert_partition(&run);
}

#[test]
fn every_round_rebuilds_a_full_deck_with_fresh_identities() {
    let (mut run, mut events) = run_in_shop(11);
    let old_ids: HashSet<CardId> = run
        .deck
        .draw
        .iter()
        .chain(run.deck.discard.iter())
        .chain(run.hand.iter())
        .map(|card| card.id)
        .collect();

    run.skip_shop(&mut events);
    assert_partition(&run);
    let reused = run
        .deck
        .draw
        .iter()
        .chain(run.hand.iter())
        .filter(|card| old_ids.contains(&card.id))
        .count();
    assert_eq!(reused, 0, "round start must mint fresh card identities");
}
