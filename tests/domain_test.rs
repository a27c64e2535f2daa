//! Интеграционные тесты для доменной модели (crate::domain).

mod common;

use std::collections::HashSet;

use common::{c, cards};
use quince_engine::domain::*;
use quince_engine::engine::{EngineError, ErrorCategory};
use quince_engine::infra::DeterministicRng;

/// Card::new: номинал только 1..=10.
#[test]
fn card_new_rejects_out_of_range_values() {
    assert!(Card::new(1, Suit::Oro).is_ok());
    assert!(Card::new(10, Suit::Copa).is_ok());

    let err = Card::new(0, Suit::Oro).unwrap_err();
    assert_eq!(err, EngineError::InvalidCardValue(0));
    assert_eq!(err.category(), ErrorCategory::Validation);

    assert_eq!(
        Card::new(11, Suit::Basto).unwrap_err(),
        EngineError::InvalidCardValue(11)
    );
}

/// Display + FromStr.
#[test]
fn card_display_and_parse() {
    let samples = [
        (Card::new(7, Suit::Oro).unwrap(), "7o"),
        (Card::new(10, Suit::Espada).unwrap(), "10e"),
        (Card::new(1, Suit::Copa).unwrap(), "1c"),
        (Card::new(8, Suit::Basto).unwrap(), "8b"),
    ];

    for (card, text) in samples {
        assert_eq!(card.to_string(), text);
        assert_eq!(text.parse::<Card>().unwrap(), card);
    }

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("o".parse::<Card>().is_err());
    assert!("7x".parse::<Card>().is_err());
    assert!("11o".parse::<Card>().is_err());
    assert!("0b".parse::<Card>().is_err());
    assert!("100c".parse::<Card>().is_err());
}

/// Веса сетенты по таблице [11,4,6,8,10,14,17.5,1,1,1].
#[test]
fn setenta_weights_follow_the_table() {
    let expected = [110, 40, 60, 80, 100, 140, 175, 10, 10, 10];
    for value in 1..=10u8 {
        let card = Card::new(value, Suit::Espada).unwrap();
        assert_eq!(card.setenta_weight(), expected[(value - 1) as usize]);
    }
    assert!(c("7o").is_siete_de_velo());
    assert!(!c("7b").is_siete_de_velo());
}

/// Колода: 40 карт, по 10 на масть, номиналы 1..10, без повторов.
#[test]
fn standard_deck_has_forty_distinct_cards() {
    let deck = Deck::standard_40();
    assert_eq!(deck.len(), 40);

    let set: HashSet<_> = deck.cards().iter().collect();
    assert_eq!(set.len(), 40);

    for suit in Suit::ALL {
        let mut values: Vec<u8> = deck
            .cards()
            .iter()
            .filter(|card| card.suit() == suit)
            .map(|card| card.value())
            .collect();
        values.sort_unstable();
        assert_eq!(values, (1..=10).collect::<Vec<u8>>());
    }
}

#[test]
fn shuffled_deck_is_a_permutation_of_the_standard_deck() {
    let mut rng = DeterministicRng::from_u64(42);
    let deck = Deck::shuffled(&mut rng);

    assert_eq!(deck.len(), 40);
    assert_ne!(deck, Deck::standard_40());

    let shuffled: HashSet<_> = deck.cards().iter().copied().collect();
    let standard: HashSet<_> = Deck::standard_40().cards().iter().copied().collect();
    assert_eq!(shuffled, standard);
}

/// deal берёт карты с конца и не меняет исходную колоду.
#[test]
fn deal_takes_from_the_end_and_leaves_receiver_intact() {
    let deck = Deck::standard_40();
    let (hand, rest) = deck.deal(3).unwrap();

    assert_eq!(hand, cards(&["10b", "10e", "10c"]));
    assert_eq!(rest.len(), 37);
    assert_eq!(deck.len(), 40);

    let (next, rest2) = rest.deal(4).unwrap();
    assert_eq!(next, cards(&["9b", "9e", "9c", "10o"]));
    assert_eq!(rest2.len(), 33);

    // Розданные карты больше в колоде не встречаются.
    for card in hand.iter().chain(next.iter()) {
        assert!(!rest2.cards().contains(card));
    }
}

#[test]
fn deal_more_than_remaining_fails() {
    let deck = Deck::standard_40();
    let err = deck.deal(41).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientCards {
            requested: 41,
            available: 40
        }
    );

    let (all, empty) = deck.deal(40).unwrap();
    assert_eq!(all.len(), 40);
    assert!(empty.is_empty());
    assert!(empty.deal(1).is_err());
    assert!(empty.deal(0).unwrap().0.is_empty());
}

#[test]
fn from_ordered_requires_the_full_distinct_set() {
    let mut cards40 = Deck::standard_40().cards().to_vec();
    assert!(Deck::from_ordered(cards40.clone()).is_ok());

    let short = cards40[..39].to_vec();
    assert!(matches!(
        Deck::from_ordered(short),
        Err(EngineError::InvalidDeck(_))
    ));

    cards40[0] = cards40[1];
    assert!(matches!(
        Deck::from_ordered(cards40),
        Err(EngineError::InvalidDeck(_))
    ));
}

/// Pila::add не меняет получателя.
#[test]
fn pila_add_returns_new_pila() {
    let empty = Pila::new();
    let one = empty.add(&cards(&["7o", "8b"]), false);

    assert_eq!(empty.total_cards(), 0);
    assert_eq!(one.total_cards(), 2);
    assert_eq!(one.escobas(), 0);

    let two = one.add(&cards(&["3c"]), true);
    assert_eq!(one.total_cards(), 2);
    assert_eq!(one.escobas(), 0);
    assert_eq!(two.total_cards(), 3);
    assert_eq!(two.escobas(), 1);
}

#[test]
fn pila_partitions_cards_by_suit() {
    let pila = Pila::new().add(&cards(&["1o", "2b", "3o", "4e", "5c", "6o"]), false);

    assert_eq!(pila.total_oros(), 3);
    assert_eq!(pila.cards_of(Suit::Oro), cards(&["1o", "3o", "6o"]).as_slice());
    assert_eq!(pila.cards_of(Suit::Basto), cards(&["2b"]).as_slice());
    assert_eq!(pila.cards().count(), 6);
    assert!(!pila.has_siete_de_velo());

    let with_velo = pila.add(&[c("7o")], false);
    assert!(with_velo.has_siete_de_velo());
}

/// best_setenta: пусто без одной из мастей, иначе по одной лучшей карте на масть.
#[test]
fn best_setenta_requires_all_four_suits() {
    let three_suits = Pila::new().add(&cards(&["7o", "7b", "7e", "1o"]), false);
    assert!(three_suits.best_setenta().is_empty());
    assert_eq!(three_suits.setenta_points(), None);

    let full = three_suits.add(&cards(&["2c", "6c"]), false);
    let best = full.best_setenta();
    assert_eq!(best, cards(&["7o", "7b", "7e", "6c"]));
    assert_eq!(
        full.setenta_points(),
        Some(SetentaPoints::from_tenths(175 * 3 + 140))
    );
}

/// При равных весах внутри масти – первая встреченная карта.
#[test]
fn best_setenta_ties_pick_first_encountered() {
    let pila = Pila::new().add(&cards(&["9o", "8o", "10o", "1b", "1e", "1c"]), false);
    let best = pila.best_setenta();
    assert_eq!(best[0], c("9o"));
    assert_eq!(best.len(), 4);
}

#[test]
fn setenta_points_display() {
    assert_eq!(SetentaPoints::from_tenths(365).to_string(), "36.5");
    assert_eq!(SetentaPoints::from_tenths(700).to_string(), "70");
    assert_eq!(
        SetentaPoints(100) + SetentaPoints(75),
        SetentaPoints::from_tenths(175)
    );
    assert!(SetentaPoints::ZERO.is_zero());
}

/// Номинал из строки: только 1..10 без знака и ведущих нулей.
#[test]
fn card_parse_rejects_signs_and_leading_zeros() {
    for bad in ["+7o", "-7o", "07o", "010o", "00o", " 7o", "7 o"] {
        assert!(bad.parse::<Card>().is_err(), "{bad:?} не должна разбираться");
    }
    assert_eq!("10o".parse::<Card>().unwrap(), Card::new(10, Suit::Oro).unwrap());
    assert_eq!("1B".parse::<Card>().unwrap(), Card::new(1, Suit::Basto).unwrap());
}

/// JSON-карта проходит ту же проверку, что и `Card::new`.
#[test]
fn card_deserialization_validates_value() {
    let card = c("7o");
    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);

    for value in [0u8, 11, 42] {
        let raw = format!(r#"{{"value":{value},"suit":"Oro"}}"#);
        let err = serde_json::from_str::<Card>(&raw).unwrap_err();
        assert!(
            err.to_string()
                .contains(&EngineError::InvalidCardValue(value).to_string()),
            "value={value}: {err}"
        );
    }
}

/// JSON-колода: полный набор из 40 карт и `remaining` не больше 40.
#[test]
fn deck_deserialization_validates_cards_and_remaining() {
    let (_, dealt) = Deck::standard_40().deal(3).unwrap();
    let json = serde_json::to_value(&dealt).unwrap();
    let back: Deck = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(back, dealt);
    assert_eq!(back.len(), 37);

    let mut too_many = json.clone();
    too_many["remaining"] = 41.into();
    let err = serde_json::from_value::<Deck>(too_many).unwrap_err();
    assert!(err.to_string().contains("Некорректная колода"), "{err}");

    let short = r#"{"order":[{"value":1,"suit":"Oro"}],"remaining":5}"#;
    let err = serde_json::from_str::<Deck>(short).unwrap_err();
    assert!(err.to_string().contains("Некорректная колода"), "{err}");

    let mut duplicated = json;
    duplicated["order"][1] = duplicated["order"][0].clone();
    assert!(serde_json::from_value::<Deck>(duplicated).is_err());

    let bad_card = serde_json::from_str::<Deck>(
        r#"{"order":[{"value":0,"suit":"Copa"}],"remaining":1}"#,
    )
    .unwrap_err();
    assert!(bad_card
        .to_string()
        .contains(&EngineError::InvalidCardValue(0).to_string()));
}

/// `setenta()` отдаёт те же карты и очки, что и отдельные запросы.
#[test]
fn pila_setenta_matches_best_cards_and_points() {
    let pila = Pila::new().add(&cards(&["7o", "1b", "6e", "4c", "2o"]), false);
    let (best, points) = pila.setenta().unwrap();

    assert_eq!(best, pila.best_setenta());
    assert_eq!(Some(points), pila.setenta_points());
    assert_eq!(points, SetentaPoints::from_tenths(175 + 110 + 140 + 80));

    let no_copa = Pila::new().add(&cards(&["7o", "1b", "6e"]), false);
    assert_eq!(no_copa.setenta(), None);
}
