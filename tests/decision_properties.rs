//! Property tests for address parsing and route selection.

use proptest::prelude::*;

use route_lookup::address::Address;
use route_lookup::routing::{contains, select, Prefix, RouteEntry, RoutingTable};

/// A route whose network is the destination with some low bits flipped, so
/// that a good share of generated routes actually contain the destination.
fn route_near(destination: u32) -> impl Strategy<Value = RouteEntry> {
    (any::<u32>(), 0u32..=32, 0u8..=32, 0u32..4, 0u32..4).prop_map(
        move |(flip, shift, length, ad, metric)| {
            let network = destination ^ flip.checked_shr(shift).unwrap_or(0);
            RouteEntry::new(
                Prefix::new(Address::from_bits(network), length).unwrap(),
                Address::from_bits(0x0A00_0001),
                ad,
                metric,
            )
        },
    )
}

fn table_and_destination() -> impl Strategy<Value = (RoutingTable, Address)> {
    any::<u32>().prop_flat_map(|destination| {
        (
            prop::collection::vec(route_near(destination), 0..12),
            Just(Address::from_bits(destination)),
        )
            .prop_map(|(entries, destination)| (RoutingTable::new(entries), destination))
    })
}

proptest! {
    #[test]
    fn prop_format_parse_round_trip(a in any::<u8>(), b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
        let text = format!("{}.{}.{}.{}", a, b, c, d);
        let addr = Address::parse(&text).unwrap();
        prop_assert_eq!(addr.to_string(), text);
        prop_assert_eq!(addr.octets(), [a, b, c, d]);
    }

    #[test]
    fn prop_parse_format_inverse(bits in any::<u32>()) {
        let addr = Address::from_bits(bits);
        prop_assert_eq!(Address::parse(&addr.to_string()).unwrap(), addr);
    }

    #[test]
    fn prop_default_route_matches_everything(bits in any::<u32>()) {
        let table = RoutingTable::new(vec![RouteEntry::new(
            Prefix::default_route(),
            Address::from_bits(1),
            1,
            0,
        )]);
        let decision = select(&table, Address::from_bits(bits));
        prop_assert_eq!(decision.matches.len(), 1);
        prop_assert!(decision.winner().is_some());
    }

    #[test]
    fn prop_canonical_prefix_contains_same_addresses(
        network in any::<u32>(),
        length in 0u8..=32,
        candidate in any::<u32>(),
    ) {
        let prefix = Prefix::new(Address::from_bits(network), length).unwrap();
        let addr = Address::from_bits(candidate);
        prop_assert_eq!(contains(&prefix, addr), contains(&prefix.canonical(), addr));
    }

    #[test]
    fn prop_match_set_is_exactly_the_containing_entries((table, destination) in table_and_destination()) {
        let decision = select(&table, destination);
        let expected = table.iter().filter(|e| contains(&e.prefix, destination)).count();
        prop_assert_eq!(decision.matches.len(), expected);
        prop_assert_eq!(decision.matches.iter().filter(|r| r.is_best).count(), usize::from(expected > 0));
        prop_assert_eq!(decision.explanation.is_some(), expected > 0);
    }

    #[test]
    fn prop_winner_respects_tie_break_chain((table, destination) in table_and_destination()) {
        let decision = select(&table, destination);
        if let Some(winner) = decision.winner() {
            let length = winner.prefix.length();
            for route in &decision.matches {
                let other = route.entry;
                prop_assert!(length >= other.prefix.length());
                if other.prefix.length() == length {
                    prop_assert!(winner.ad <= other.ad);
                    if other.ad == winner.ad {
                        prop_assert!(winner.metric <= other.metric);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_ranking_is_sorted_and_stable((table, destination) in table_and_destination()) {
        let decision = select(&table, destination);
        let position = |entry: &RouteEntry| {
            table.iter().position(|e| std::ptr::eq(e, entry)).unwrap()
        };
        for pair in decision.matches.windows(2) {
            let (a, b) = (pair[0].entry, pair[1].entry);
            let key_a = (std::cmp::Reverse(a.prefix.length()), a.ad, a.metric);
            let key_b = (std::cmp::Reverse(b.prefix.length()), b.ad, b.metric);
            prop_assert!(key_a <= key_b);
            if key_a == key_b {
                prop_assert!(position(a) < position(b));
            }
        }
    }

    #[test]
    fn prop_selection_is_deterministic((table, destination) in table_and_destination()) {
        prop_assert_eq!(select(&table, destination), select(&table, destination));
    }

    #[test]
    fn prop_explanation_agrees_with_ranking((table, destination) in table_and_destination()) {
        let decision = select(&table, destination);
        if let (Some(winner), Some(explanation)) = (decision.winner(), decision.explanation.as_ref()) {
            let peers: Vec<&RouteEntry> = decision.matches[1..]
                .iter()
                .map(|r| r.entry)
                .filter(|e| e.prefix.length() == winner.prefix.length())
                .collect();

            prop_assert!(!explanation.prefix_match.contains("more specific"));
            prop_assert!(!explanation.ad_reason.contains("Not the lowest"));
            prop_assert!(!explanation.metric_reason.contains("Not the lowest"));

            if peers.is_empty() {
                prop_assert!(explanation.ad_reason.contains("Only route with prefix length"));
            } else if peers.iter().all(|p| p.ad > winner.ad) {
                prop_assert!(explanation.ad_reason.contains("Lowest AD"));
            } else {
                prop_assert!(explanation.ad_reason.contains("Ties for the lowest AD"));
            }
        }
    }
}
