//! Tests for the stateful capability and the seeding fork

use dicerng_core::{
    RandomSource, RngCoreSource, SplitMix64, StatefulRandom, StatefulRng, XorShift128Plus,
};
use proptest::prelude::*;

#[test]
fn test_get_then_set_is_noop() {
    let mut rng = StatefulRng::new(12345);
    let mut untouched = rng.copy();

    let token = rng.state();
    rng.set_state(token);

    for _ in 0..100 {
        assert_eq!(rng.next_u64(), untouched.next_u64());
    }
}

#[test]
fn test_copy_matches_for_ten_thousand_draws() {
    let mut rng = StatefulRng::new(-99);
    let mut copy = rng.copy();
    assert_eq!(rng.state(), copy.state());

    for _ in 0..10_000 {
        assert_eq!(rng.next_u64(), copy.next_u64());
    }
    assert_eq!(rng.state(), copy.state());
}

#[test]
fn test_token_restores_into_another_instance() {
    let mut rng = StatefulRng::new(5);
    rng.next_u64();
    let token = rng.state();
    let expected: Vec<u64> = (0..20).map(|_| rng.next_u64()).collect();

    let mut other = StatefulRng::new(0);
    other.set_state(token);
    let replayed: Vec<u64> = (0..20).map(|_| other.next_u64()).collect();

    assert_eq!(expected, replayed);
}

#[test]
fn test_seeding_fork_consumes_exactly_one_draw() {
    let source = XorShift128Plus::new(77);
    let mut reference = source.copy();
    let fork_seed = reference.next_u64();

    let forked = StatefulRng::from_source(source);
    assert_eq!(forked.state(), fork_seed);
}

#[test]
fn test_seeding_fork_decouples_sequences() {
    let mut source = XorShift128Plus::new(77);
    let mut forked = StatefulRng::from_source(source.copy());

    // The original keeps its own sequence; the fork follows SplitMix64 from the drawn seed.
    let fork_seed = source.next_u64();
    let mut expected = SplitMix64::new(fork_seed);
    for _ in 0..50 {
        assert_eq!(forked.next_u64(), expected.next_u64());
    }
}

#[test]
fn test_stateful_source_is_not_forked() {
    let mut inner = SplitMix64::new(500);
    inner.next_u64();
    let token = inner.state();

    let rng = StatefulRng::from_source(inner);
    assert_eq!(rng.state(), token);
}

#[test]
fn test_rng_core_adapter_forks() {
    let mut reference = XorShift128Plus::new(3);
    let seed = reference.next_u64();

    let rng = StatefulRng::from_source(RngCoreSource::new(XorShift128Plus::new(3)));
    assert_eq!(rng.state(), seed);
}

#[test]
fn test_rand_core_interop() {
    use rand_core::RngCore;

    let mut via_trait = XorShift128Plus::new(11);
    let mut direct = XorShift128Plus::new(11);

    assert_eq!(RngCore::next_u64(&mut via_trait), direct.next_u64());
    assert_eq!(
        RngCore::next_u32(&mut via_trait),
        direct.next_u64() as u32,
        "next_u32 is the low half of one draw"
    );

    let mut a = [0u8; 13];
    let mut b = [0u8; 13];
    via_trait.fill_bytes(&mut a);
    RandomSource::next_bytes(&mut direct, &mut b);
    assert_eq!(a, b);
}

#[test]
fn test_boxed_capability_dispatch() {
    let generators: Vec<Box<dyn StatefulRandom>> = vec![
        Box::new(SplitMix64::new(1)),
        Box::new(StatefulRng::new(1)),
    ];
    let firsts: Vec<u64> = generators
        .into_iter()
        .map(|mut rng| rng.next_u64())
        .collect();
    assert_eq!(firsts[0], firsts[1]);
}

#[test]
fn test_display_diagnostic() {
    let rng = StatefulRng::new(0x1234);
    assert_eq!(format!("{}", rng), "StatefulRng{0000000000001234}");
    assert_eq!(format!("{:?}", rng), "StatefulRng { state: 4660 }");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_capture_restore(seed in any::<i64>(), warmup in 0usize..64, k in 1usize..256) {
        let mut rng = StatefulRng::new(seed);
        for _ in 0..warmup {
            rng.next_u64();
        }

        let token = rng.state();
        let first: Vec<u64> = (0..k).map(|_| rng.next_u64()).collect();
        rng.set_state(token);
        let second: Vec<u64> = (0..k).map(|_| rng.next_u64()).collect();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_forked_rng_restores(seed in any::<i64>(), k in 1usize..128) {
        let mut rng = StatefulRng::from_source(XorShift128Plus::new(seed));
        let token = rng.state();
        let first: Vec<u64> = (0..k).map(|_| rng.next_u64()).collect();
        rng.set_state(token);
        let second: Vec<u64> = (0..k).map(|_| rng.next_u64()).collect();

        prop_assert_eq!(first, second);
    }
}
