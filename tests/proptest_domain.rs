//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that category selection, venue asset
//! extraction, and reconciliation hold their invariants across random
//! inputs.

use std::collections::HashSet;

use proptest::prelude::*;

use category_scanner::domain::{
    extract_assets, sort_by_market_cap, AllowList, Category, CategoryFilter, CategoryMember,
    CategoryReport, Instrument, VenueAssetSet, VenueMarket,
};

const IDS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];
const NAMES: [&str; 5] = ["DeFi", "Memes", "a16z Portfolio", "PORTFOLIO Picks", "Layer 1"];
const SYMBOLS: [&str; 8] = ["BTC", "ETH", "SOL", "USDT", "USD", "FOO", "BAR", "ADA"];

fn arb_category() -> impl Strategy<Value = Category> {
    (
        prop::sample::select(IDS.to_vec()),
        prop::sample::select(NAMES.to_vec()),
        0u32..50,
        0.0f64..1e12,
    )
        .prop_map(|(id, name, num_tokens, market_cap)| Category {
            id: id.to_string(),
            name: name.to_string(),
            title: String::new(),
            description: String::new(),
            num_tokens,
            avg_price_change: 0.0,
            market_cap,
            market_cap_change: 0.0,
            volume: 0.0,
            volume_change: 0.0,
        })
}

fn arb_instruments() -> impl Strategy<Value = Vec<Instrument>> {
    prop::collection::vec(
        (prop::sample::select(SYMBOLS.to_vec()), prop::sample::select(SYMBOLS.to_vec()))
            .prop_map(|(b, q)| Instrument::new(b, q)),
        0..20,
    )
}

fn filter(allowed: &HashSet<&'static str>) -> CategoryFilter {
    CategoryFilter::new(
        ["portfolio"],
        AllowList::from_pairs(allowed.iter().map(|id| (*id, ""))),
    )
}

fn select(categories: Vec<Category>, f: &CategoryFilter) -> Vec<Category> {
    let mut categories = categories;
    sort_by_market_cap(&mut categories);
    categories.into_iter().filter(|c| f.retains(c)).collect()
}

// ── Category Selection Properties ───────────────────────────

proptest! {
    /// Retained categories always have tokens, no excluded name, and an allowed id.
    #[test]
    fn retained_categories_pass_every_rule(
        categories in prop::collection::vec(arb_category(), 0..30),
        allowed in prop::collection::hash_set(prop::sample::select(IDS.to_vec()), 0..6),
    ) {
        let f = filter(&allowed);
        for c in select(categories, &f) {
            prop_assert!(c.num_tokens > 0);
            prop_assert!(!c.name.to_lowercase().contains("portfolio"));
            prop_assert!(allowed.contains(c.id.as_str()));
        }
    }

    /// Retained order is non-increasing in market cap.
    #[test]
    fn retained_categories_sorted_descending(
        categories in prop::collection::vec(arb_category(), 0..30),
        allowed in prop::collection::hash_set(prop::sample::select(IDS.to_vec()), 0..6),
    ) {
        let selected = select(categories, &filter(&allowed));
        for pair in selected.windows(2) {
            prop_assert!(pair[0].market_cap >= pair[1].market_cap);
        }
    }

    /// Sorting only reorders: the multiset of categories is unchanged.
    #[test]
    fn sorting_preserves_contents(categories in prop::collection::vec(arb_category(), 0..30)) {
        let mut sorted = categories.clone();
        sort_by_market_cap(&mut sorted);
        prop_assert_eq!(sorted.len(), categories.len());
        for c in &categories {
            let before = categories.iter().filter(|x| *x == c).count();
            let after = sorted.iter().filter(|x| *x == c).count();
            prop_assert_eq!(before, after);
        }
    }
}

// ── Venue Asset Properties ──────────────────────────────────

proptest! {
    /// Extraction is deterministic for identical inputs.
    #[test]
    fn extraction_is_idempotent(instruments in arb_instruments()) {
        for market in VenueMarket::ALL {
            prop_assert_eq!(
                extract_assets(market, &instruments),
                extract_assets(market, &instruments)
            );
        }
    }

    /// Coin-margined extraction contains exactly the base assets.
    #[test]
    fn coin_margined_uses_base_only(instruments in arb_instruments()) {
        let bases: HashSet<String> = instruments.iter().map(|i| i.base_asset.clone()).collect();
        prop_assert_eq!(extract_assets(VenueMarket::CoinMargined, &instruments), bases);
    }

    /// Spot extraction contains both legs of every instrument.
    #[test]
    fn spot_includes_both_legs(instruments in arb_instruments()) {
        let assets = extract_assets(VenueMarket::Spot, &instruments);
        for i in &instruments {
            prop_assert!(assets.contains(&i.base_asset));
            prop_assert!(assets.contains(&i.quote_asset));
        }
    }
}

// ── Reconciliation Properties ───────────────────────────────

proptest! {
    /// A member symbol is reported iff it is in the venue asset set.
    #[test]
    fn reported_coins_iff_on_venue(
        member_symbols in prop::collection::vec(prop::sample::select(SYMBOLS.to_vec()), 0..20),
        venue_symbols in prop::collection::hash_set(prop::sample::select(SYMBOLS.to_vec()), 0..8),
    ) {
        let venue: VenueAssetSet = venue_symbols.iter().copied().collect();
        let members: Vec<CategoryMember> = member_symbols
            .iter()
            .map(|s| CategoryMember {
                symbol: (*s).to_string(),
                name: String::new(),
                volume_24h: 0.0,
                market_cap: 0.0,
            })
            .collect();
        let category = Category {
            id: "x".to_string(),
            name: "X".to_string(),
            title: String::new(),
            description: String::new(),
            num_tokens: 1,
            avg_price_change: 0.0,
            market_cap: 0.0,
            market_cap_change: 0.0,
            volume: 0.0,
            volume_change: 0.0,
        };

        let report = CategoryReport::reconcile(category, &members, &venue);
        let reported: HashSet<&str> = report.coins.iter().map(String::as_str).collect();

        for m in &members {
            prop_assert_eq!(reported.contains(m.symbol.as_str()), venue.contains(&m.symbol));
        }
        for coin in &report.coins {
            prop_assert!(venue.contains(coin));
        }
    }
}
