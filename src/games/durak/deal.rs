//! Deal initializer.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::cards::{build_deck, Card};
use crate::core::{
    CheatState, DurakError, GameOptions, GameRng, GameState, Hand, Phase, PlayerId, PlayerState,
    Result, SeatSpec, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS,
};

/// Create a new match.
///
/// Builds the configured deck, optionally shuffles it (seeded by
/// `options.seed`, or OS entropy), fixes the last deck card as trump and
/// deals six cards to each seat in seating order from the front of the
/// deck. The first attacker is the holder of the lowest trump; if nobody
/// holds a trump, seat 0 attacks. The defender is the next seat clockwise.
///
/// Fails with `PlayerCount` unless 2-6 seats are given, `DuplicatePlayer`
/// for a repeated id, `DeckTooSmall` if the deck cannot fill every hand and
/// `InvalidOption` for a `max_on_table` of zero.
///
/// ```
/// use rust_durak::core::{GameOptions, SeatSpec};
/// use rust_durak::games::durak::init_game;
///
/// let seats = [SeatSpec::new("a", "Ann"), SeatSpec::new("b", "Bob")];
/// let state = init_game(&seats, false, GameOptions::default()).unwrap();
/// assert_eq!(state.deck.len(), 24);
/// assert_eq!(state.deck.back(), Some(&state.trump));
/// ```
pub fn init_game(seats: &[SeatSpec], shuffle: bool, options: GameOptions) -> Result<GameState> {
    let player_count = seats.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(DurakError::PlayerCount(player_count));
    }

    let mut seen = FxHashSet::default();
    for seat in seats {
        if !seen.insert(seat.id.as_str()) {
            return Err(DurakError::DuplicatePlayer(seat.id.clone()));
        }
    }

    // No attack could ever be played.
    if options.max_on_table == 0 {
        return Err(DurakError::InvalidOption("max_on_table must be at least 1".to_string()));
    }

    let deck_cards = options.deck_size.card_count();
    if player_count * HAND_SIZE > deck_cards {
        return Err(DurakError::DeckTooSmall {
            players: player_count,
            deck: deck_cards,
        });
    }

    let mut cards: Vec<Card> = build_deck(options.deck_size).into_iter().collect();
    let seed = if shuffle {
        let mut rng = options.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        rng.shuffle(&mut cards);
        Some(rng.seed())
    } else {
        None
    };

    let Some(&trump) = cards.last() else {
        return Err(DurakError::DeckTooSmall {
            players: player_count,
            deck: 0,
        });
    };

    let mut deck: Vector<Card> = cards.into_iter().collect();
    let players: Vec<PlayerState> = seats
        .iter()
        .map(|seat| {
            let hand: Hand = std::iter::from_fn(|| deck.pop_front()).take(HAND_SIZE).collect();
            PlayerState {
                id: seat.id.clone(),
                nick: seat.nick.clone(),
                hand,
            }
        })
        .collect();

    let attacker = lowest_trump_holder(&players, trump).unwrap_or(PlayerId::new(0));
    let defender = attacker.next(player_count);

    tracing::info!(
        players = player_count,
        deck = deck_cards,
        trump = %trump,
        attacker = %attacker,
        shuffled = shuffle,
        "deal created"
    );

    Ok(GameState {
        deck,
        discard: Vector::new(),
        trump,
        turn_defender_initial_hand_count: players[defender.index()].hand.len(),
        players,
        attacker,
        defender,
        table: Vec::new(),
        phase: Phase::Playing,
        first_beat_done: false,
        finished_order: Vec::new(),
        winner: None,
        loser: None,
        cheat: options.with_trick.then(|| CheatState::new(player_count)),
        options,
        exchange: 0,
        next_pair_id: 0,
        history: Vector::new(),
        seed,
    })
}

/// Seat holding the lowest-ranked trump, if any seat holds one.
fn lowest_trump_holder(players: &[PlayerState], trump: Card) -> Option<PlayerId> {
    players
        .iter()
        .enumerate()
        .flat_map(|(seat, p)| {
            p.hand
                .iter()
                .filter(|c| c.is_trump(trump.suit))
                .map(move |c| (c.rank, seat))
        })
        .min()
        .map(|(_, seat)| PlayerId::new(seat as u8))
}
