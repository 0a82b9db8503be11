//! Property-based invariant tests for the font size controller.
//!
//! Verifies:
//! 1. The index stays within `0..=last_index` for any increase/decrease sequence
//! 2. Increase at the maximum and decrease at the minimum change nothing
//! 3. After any successful step exactly one listed tier label is present,
//!    and it is the tier at the current index
//! 4. Classes outside the tier list survive every step in their original order
//! 5. `with_tier` is idempotent
//! 6. The starting index is the first listed tier present, else the default
//! 7. Custom tier lists built from the full scale obey the same bounds

use fontsize_core::{
    ClassSet, ClassTarget, FontSizeController, MemoryTarget, Step, Tier, TierList,
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Op {
    Increase,
    Decrease,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Increase), Just(Op::Decrease)]
}

fn arb_tier() -> impl Strategy<Value = Tier> {
    (0..Tier::ALL.len()).prop_map(|i| Tier::ALL[i])
}

fn arb_plain_class() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("prose".to_owned()),
        Just("mx-auto".to_owned()),
        Just("leading-7".to_owned()),
        Just("dark:text-white".to_owned()),
        "[a-z]{1,8}",
    ]
}

/// A class attribute mixing arbitrary plain classes with arbitrary scale tiers.
fn arb_class_attribute() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => arb_plain_class(),
            1 => arb_tier().prop_map(|t| t.class_name().to_owned()),
        ],
        0..8,
    )
    .prop_map(|tokens| tokens.join(" "))
}

/// A non-empty ascending subset of the scale with one member as default.
fn arb_tier_list() -> impl Strategy<Value = TierList> {
    prop::sample::subsequence(Tier::ALL.to_vec(), 1..=Tier::ALL.len())
        .prop_flat_map(|tiers| {
            let len = tiers.len();
            (Just(tiers), 0..len)
        })
        .prop_map(|(tiers, d)| {
            TierList::new(&tiers, tiers[d]).expect("ascending subset with listed default")
        })
}

fn listed_labels(attribute: &str, tiers: &TierList) -> Vec<String> {
    ClassSet::parse(attribute)
        .iter()
        .filter(|t| tiers.class_names().any(|n| n == *t))
        .map(str::to_owned)
        .collect()
}

fn unlisted_classes(attribute: &str, tiers: &TierList) -> Vec<String> {
    ClassSet::parse(attribute)
        .iter()
        .filter(|t| !tiers.class_names().any(|n| n == *t))
        .map(str::to_owned)
        .collect()
}

fn run(c: &mut FontSizeController<MemoryTarget>, op: Op) -> Step {
    match op {
        Op::Increase => c.increase(),
        Op::Decrease => c.decrease(),
    }
}

proptest! {
    #[test]
    fn index_stays_in_bounds(
        class in arb_class_attribute(),
        ops in prop::collection::vec(arb_op(), 0..64),
    ) {
        let mut c = FontSizeController::shipped(MemoryTarget::new(class));
        for op in ops {
            run(&mut c, op);
            prop_assert!(c.index() <= c.tiers().last_index());
        }
    }

    #[test]
    fn boundaries_are_silent_noops(
        tiers in arb_tier_list(),
        ops in prop::collection::vec(arb_op(), 0..32),
    ) {
        let mut c = FontSizeController::new(tiers, MemoryTarget::default());
        for op in ops {
            let before_index = c.index();
            let before_class = c.target().class_attribute();
            let at_edge = match op {
                Op::Increase => before_index == c.tiers().last_index(),
                Op::Decrease => before_index == 0,
            };
            let step = run(&mut c, op);
            if at_edge {
                prop_assert_eq!(step, Step::Clamped);
                prop_assert_eq!(c.index(), before_index);
                prop_assert_eq!(c.target().class_attribute(), before_class);
            } else {
                prop_assert!(step.moved());
            }
        }
    }

    #[test]
    fn exactly_one_listed_tier_after_step(
        class in arb_class_attribute(),
        ops in prop::collection::vec(arb_op(), 1..32),
    ) {
        let tiers = TierList::SHIPPED;
        let mut c = FontSizeController::new(tiers.clone(), MemoryTarget::new(class));
        for op in ops {
            if run(&mut c, op).moved() {
                let labels = listed_labels(&c.target().class_attribute(), &tiers);
                prop_assert_eq!(labels, vec![c.tier().class_name().to_owned()]);
            }
        }
    }

    #[test]
    fn unlisted_classes_survive(
        class in arb_class_attribute(),
        ops in prop::collection::vec(arb_op(), 0..16),
    ) {
        let tiers = TierList::SHIPPED;
        let before = unlisted_classes(&class, &tiers);
        let mut c = FontSizeController::new(tiers.clone(), MemoryTarget::new(class));
        for op in ops {
            run(&mut c, op);
        }
        c.apply();
        prop_assert_eq!(unlisted_classes(&c.target().class_attribute(), &tiers), before);
    }

    #[test]
    fn with_tier_is_idempotent(
        class in arb_class_attribute(),
        tiers in arb_tier_list(),
        pick in any::<prop::sample::Index>(),
    ) {
        let tier = tiers.get(pick.index(tiers.len())).expect("index within list");
        let once = ClassSet::parse(&class).with_tier(tier, &tiers);
        let twice = once.with_tier(tier, &tiers);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn start_index_follows_first_listed_tier(
        class in arb_class_attribute(),
        tiers in arb_tier_list(),
    ) {
        let classes = ClassSet::parse(&class);
        let expected = tiers
            .iter()
            .position(|t| classes.contains(t.class_name()))
            .unwrap_or(tiers.default_index());
        let c = FontSizeController::new(tiers, MemoryTarget::new(class));
        prop_assert_eq!(c.index(), expected);
        prop_assert_eq!(c.target().writes(), 0);
    }

    #[test]
    fn climbing_stops_at_last_tier(tiers in arb_tier_list()) {
        let last = tiers.last_index();
        let first = tiers.get(0).expect("non-empty");
        let mut c = FontSizeController::new(tiers, MemoryTarget::new(first.class_name()));
        prop_assert_eq!(c.index(), 0);
        for expected in 1..=last {
            prop_assert_eq!(c.increase(), Step::Moved { from: expected - 1, to: expected });
        }
        prop_assert_eq!(c.increase(), Step::Clamped);
        prop_assert_eq!(c.index(), last);
    }
}
