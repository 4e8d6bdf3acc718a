//! Legal move generation.
//!
//! `legal_moves` is a pure query. The order of the result is stable for a
//! given state: attacker moves (EndTurn, then attacks non-trump first and
//! by ascending rank, then cheat attacks), defender moves (covers in table
//! order, translations, Take), then accusations.

use smallvec::SmallVec;

use super::cheat;
use super::exchange::next_in_game;
use crate::cards::card::attack_order_key;
use crate::cards::{can_beat, Card};
use crate::core::{GameState, Move, Pair, PlayerId, FIRST_BEAT_LIMIT};

/// Every move `player` may make right now.
///
/// Empty once the match is finished or for an unknown seat.
pub fn legal_moves(state: &GameState, player: PlayerId) -> Vec<Move> {
    if !state.is_playing() {
        return Vec::new();
    }
    let Ok(hand) = state.hand(player) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    if player == state.attacker {
        attacker_moves(state, hand, &mut moves);
    }
    if player == state.defender {
        defender_moves(state, player, hand, &mut moves);
    }
    if state.options.with_trick {
        cheat::accuse_moves(state, player, &mut moves);
    }
    moves
}

/// Can `player` translate the current attack?
///
/// Mirrors the Translate branch of [`legal_moves`] without enumerating the
/// whole move set.
#[must_use]
pub fn is_translation_available(state: &GameState, player: PlayerId) -> bool {
    !translation_cards(state, player).is_empty()
}

fn attacker_moves(state: &GameState, hand: &[Card], out: &mut Vec<Move>) {
    if state.all_defended() {
        out.push(Move::EndTurn);
    }
    if state.table.len() >= state.attack_limit() {
        return;
    }

    let trump = state.trump_suit();
    let mut candidates: SmallVec<[Card; 8]> = SmallVec::from_slice(hand);
    candidates.sort_by_key(|&c| attack_order_key(c, trump));

    if state.table.is_empty() {
        out.extend(candidates.iter().map(|&card| Move::Attack { card }));
        return;
    }

    let ranks = state.table_ranks();
    let (matching, off_rank): (SmallVec<[Card; 8]>, SmallVec<[Card; 8]>) =
        candidates.into_iter().partition(|c| ranks.contains(&c.rank));

    out.extend(matching.iter().map(|&card| Move::Attack { card }));
    if state.options.with_trick {
        out.extend(off_rank.iter().map(|&card| Move::CheatAttack { card }));
    }
}

fn defender_moves(state: &GameState, player: PlayerId, hand: &[Card], out: &mut Vec<Move>) {
    let trump = state.trump_suit();
    let open: SmallVec<[&Pair; 6]> = state.table.iter().filter(|p| !p.is_defended()).collect();

    for pair in &open {
        for &card in hand {
            if can_beat(pair.attack, card, trump) {
                out.push(Move::Defend {
                    attack: pair.attack,
                    card,
                });
            }
        }
    }

    out.extend(
        translation_cards(state, player)
            .into_iter()
            .map(|card| Move::Translate { card }),
    );

    if !open.is_empty() {
        out.push(Move::Take);
    }
}

/// Hand cards `player` could translate with.
fn translation_cards(state: &GameState, player: PlayerId) -> SmallVec<[Card; 4]> {
    let mut cards = SmallVec::new();
    if !state.options.allow_translation
        || !state.is_playing()
        || player != state.defender
        || state.first_beat_done
    {
        return cards;
    }

    let Some(first) = state.table.first() else {
        return cards;
    };
    let rank = first.attack.rank;
    if state
        .table
        .iter()
        .any(|p| p.is_defended() || p.attack.rank != rank)
    {
        return cards;
    }

    // The grown table must fit what the next defender can be asked to beat.
    let next = next_in_game(state, player);
    let next_hand = state.players[next.index()].hand.len();
    let mut limit = state.options.max_on_table.min(next_hand);
    if state.options.limit_five_before_beat {
        limit = limit.min(FIRST_BEAT_LIMIT);
    }
    if state.table.len() + 1 > limit {
        return cards;
    }

    let Ok(hand) = state.hand(player) else {
        return cards;
    };
    cards.extend(hand.iter().copied().filter(|c| c.rank == rank));
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::{GameOptions, Hand, Phase, SeatSpec};
    use crate::games::durak::init_game;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn hand(cards: &[Card]) -> Hand {
        cards.iter().copied().collect()
    }

    /// Two seats, trump spades, hands replaced by the given cards.
    fn fixture(options: GameOptions, attacker: &[Card], defender: &[Card]) -> GameState {
        let seats = vec![SeatSpec::new("a", "A"), SeatSpec::new("b", "B")];
        let mut state = init_game(&seats, false, options).unwrap();
        state.players[0].hand = hand(attacker);
        state.players[1].hand = hand(defender);
        state.turn_defender_initial_hand_count = defender.len();
        state
    }

    fn attack(state: &mut GameState, card: Card) {
        let id = state.next_pair_id;
        state.next_pair_id += 1;
        state.table.push(Pair {
            id,
            attack: card,
            defend: None,
            owner: Some(state.attacker),
        });
    }

    #[test]
    fn test_opening_attacks_sorted_non_trump_first() {
        let state = fixture(
            GameOptions::default(),
            &[c(Rank::Six, Suit::Spades), c(Rank::King, Suit::Hearts), c(Rank::Seven, Suit::Clubs)],
            &[c(Rank::Ace, Suit::Diamonds)],
        );
        let moves = legal_moves(&state, PlayerId::new(0));
        assert_eq!(
            moves,
            vec![
                Move::Attack { card: c(Rank::Seven, Suit::Clubs) },
                Move::Attack { card: c(Rank::King, Suit::Hearts) },
                Move::Attack { card: c(Rank::Six, Suit::Spades) },
            ]
        );
    }

    #[test]
    fn test_follow_up_attacks_need_table_rank() {
        let mut state = fixture(
            GameOptions::default(),
            &[c(Rank::Seven, Suit::Hearts), c(Rank::Nine, Suit::Clubs)],
            &[c(Rank::Eight, Suit::Diamonds), c(Rank::Ace, Suit::Hearts)],
        );
        attack(&mut state, c(Rank::Seven, Suit::Diamonds));
        state.table[0].defend = Some(c(Rank::Nine, Suit::Diamonds));

        let moves = legal_moves(&state, PlayerId::new(0));
        assert_eq!(
            moves,
            vec![
                Move::EndTurn,
                Move::Attack { card: c(Rank::Seven, Suit::Hearts) },
                Move::Attack { card: c(Rank::Nine, Suit::Clubs) },
            ]
        );
    }

    #[test]
    fn test_cheat_attacks_offered_with_trick() {
        let mut state = fixture(
            GameOptions::default().with_trick(),
            &[c(Rank::Seven, Suit::Hearts), c(Rank::Queen, Suit::Clubs)],
            &[c(Rank::Eight, Suit::Diamonds), c(Rank::Ace, Suit::Hearts)],
        );
        attack(&mut state, c(Rank::Seven, Suit::Diamonds));

        let moves = legal_moves(&state, PlayerId::new(0));
        assert!(moves.contains(&Move::Attack { card: c(Rank::Seven, Suit::Hearts) }));
        assert!(moves.contains(&Move::CheatAttack { card: c(Rank::Queen, Suit::Clubs) }));
        assert!(!moves.contains(&Move::Attack { card: c(Rank::Queen, Suit::Clubs) }));
    }

    #[test]
    fn test_attack_limit_follows_defender_snapshot() {
        let mut state = fixture(
            GameOptions::default(),
            &[c(Rank::Seven, Suit::Hearts), c(Rank::Seven, Suit::Clubs)],
            &[c(Rank::Ace, Suit::Diamonds)],
        );
        attack(&mut state, c(Rank::Seven, Suit::Diamonds));

        // Defender started the exchange with one card: no more attacks.
        let moves = legal_moves(&state, PlayerId::new(0));
        assert!(moves.is_empty());
    }

    #[test]
    fn test_defender_moves() {
        let mut state = fixture(
            GameOptions::default(),
            &[c(Rank::Nine, Suit::Hearts)],
            &[
                c(Rank::Ten, Suit::Hearts),
                c(Rank::Eight, Suit::Hearts),
                c(Rank::Six, Suit::Spades),
                c(Rank::Ace, Suit::Clubs),
            ],
        );
        attack(&mut state, c(Rank::Nine, Suit::Hearts));

        let moves = legal_moves(&state, PlayerId::new(1));
        assert_eq!(
            moves,
            vec![
                Move::Defend {
                    attack: c(Rank::Nine, Suit::Hearts),
                    card: c(Rank::Ten, Suit::Hearts),
                },
                Move::Defend {
                    attack: c(Rank::Nine, Suit::Hearts),
                    card: c(Rank::Six, Suit::Spades),
                },
                Move::Take,
            ]
        );
    }

    #[test]
    fn test_translation_offered_for_same_rank() {
        let mut state = fixture(
            GameOptions::default().with_translation(),
            &[c(Rank::Nine, Suit::Hearts), c(Rank::King, Suit::Hearts)],
            &[c(Rank::Nine, Suit::Clubs), c(Rank::Ace, Suit::Clubs)],
        );
        attack(&mut state, c(Rank::Nine, Suit::Diamonds));

        let defender = PlayerId::new(1);
        assert!(is_translation_available(&state, defender));
        assert!(legal_moves(&state, defender).contains(&Move::Translate {
            card: c(Rank::Nine, Suit::Clubs)
        }));
        assert!(!is_translation_available(&state, PlayerId::new(0)));
    }

    #[test]
    fn test_translation_blocked_after_first_beat_or_when_disabled() {
        let mut state = fixture(
            GameOptions::default(),
            &[c(Rank::Nine, Suit::Hearts), c(Rank::King, Suit::Hearts)],
            &[c(Rank::Nine, Suit::Clubs), c(Rank::Ace, Suit::Clubs)],
        );
        attack(&mut state, c(Rank::Nine, Suit::Diamonds));
        assert!(!is_translation_available(&state, PlayerId::new(1)));

        state.options.allow_translation = true;
        state.first_beat_done = true;
        assert!(!is_translation_available(&state, PlayerId::new(1)));
    }

    #[test]
    fn test_translation_blocked_when_next_defender_too_short() {
        let mut state = fixture(
            GameOptions::default().with_translation(),
            &[c(Rank::Nine, Suit::Hearts)],
            &[c(Rank::Nine, Suit::Clubs), c(Rank::Ace, Suit::Clubs)],
        );
        attack(&mut state, c(Rank::Nine, Suit::Diamonds));

        // The attacker would defend two cards holding only one.
        assert!(!is_translation_available(&state, PlayerId::new(1)));
    }

    #[test]
    fn test_nothing_after_finish_or_for_unknown_seat() {
        let mut state = fixture(
            GameOptions::default(),
            &[c(Rank::Nine, Suit::Hearts)],
            &[c(Rank::Ten, Suit::Hearts)],
        );
        assert!(legal_moves(&state, PlayerId::new(5)).is_empty());

        state.phase = Phase::Finished;
        assert!(legal_moves(&state, PlayerId::new(0)).is_empty());
    }

    #[test]
    fn test_bystander_only_accuses() {
        let seats = vec![
            SeatSpec::new("a", "A"),
            SeatSpec::new("b", "B"),
            SeatSpec::new("c", "C"),
        ];
        let mut state = init_game(&seats, false, GameOptions::default().with_trick()).unwrap();
        let card = state.players[0].hand[0];
        attack(&mut state, card);

        let moves = legal_moves(&state, PlayerId::new(2));
        assert_eq!(
            moves,
            vec![Move::Accuse {
                against: PlayerId::new(0),
                card,
            }]
        );
    }
}
