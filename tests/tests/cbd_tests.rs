//! Integration tests for centered binomial sampling

use polysample_algorithms::drive::Driver;
use polysample_algorithms::sampler::{sample_cbd, CbdSampler};
use polysample_algorithms::{sample_noise, BitView};
use polysample_api::{CoefficientSampler, Error, Stall, Tick};
use polysample_params::{cbd_seed_bytes, N, Q};
use polysample_tests::vectors::{self, NOISE_ETA2_NONCE0, NOISE_ETA3_NONCE0};
use polysample_tests::{random_bytes, run_with_consumer, test_rng, values};

#[test]
fn test_noise_known_answers() {
    let seed = vectors::ramp_seed();
    let eta2 = sample_noise(&seed, 0, 2).unwrap();
    vectors::assert_matches(eta2.as_coeffs_slice(), &NOISE_ETA2_NONCE0);

    let eta3 = sample_noise(&seed, 0, 3).unwrap();
    vectors::assert_matches(eta3.as_coeffs_slice(), &NOISE_ETA3_NONCE0);
}

#[test]
fn test_first_coefficient_from_bit_pattern() {
    // Bits 1,0 | 1,0 give x = 1, y = 1; bits 1,1 | 0,0 give 2
    let mut seed = vec![0u8; cbd_seed_bytes(2)];
    seed[0] = 0b0000_0011;
    let mut sampler = CbdSampler::new(2).unwrap();
    let log = run_with_consumer(&mut sampler, &seed, 1).unwrap();
    assert_eq!(log.items[0].coefficient.value, 2);
    assert_eq!(log.items[1].coefficient.value, 0);

    seed[0] = 0b0000_0101;
    let log = run_with_consumer(&mut sampler, &seed, 1).unwrap();
    assert_eq!(log.items[0].coefficient.value, 0);
}

#[test]
fn test_bit_order_is_lsb_first() {
    let bytes = [0b0000_0101u8, 0x80];
    let bits = BitView::new(&bytes);
    let pattern: Vec<u8> = (0..4).map(|k| bits.bit(k).unwrap()).collect();
    assert_eq!(pattern, [1, 0, 1, 0]);
    assert_eq!(bits.get(15), Some(1));
    assert!(bits.bit(16).is_err());
}

#[test]
fn test_stepped_matches_one_shot() {
    let mut rng = test_rng(42);
    for eta in [2u8, 3] {
        let mut sampler = CbdSampler::new(eta).unwrap();
        for _ in 0..8 {
            let seed = random_bytes(&mut rng, cbd_seed_bytes(eta));
            let expected = sample_cbd(&seed, eta).unwrap();
            let poly = Driver::default().run(&mut sampler, &seed).unwrap();
            assert_eq!(poly.as_coeffs_slice(), &expected[..]);
        }
    }
}

#[test]
fn test_run_shape() {
    let mut rng = test_rng(7);
    let seed = random_bytes(&mut rng, cbd_seed_bytes(3));
    let mut sampler = CbdSampler::new(3).unwrap();
    let log = run_with_consumer(&mut sampler, &seed, 1).unwrap();

    assert_eq!(log.items.len(), N);
    for (i, item) in log.items.iter().enumerate() {
        assert_eq!(item.coefficient.index as usize, i);
        assert!(item.coefficient.value < Q);
        assert_eq!(item.is_last, i == N - 1);
    }
    assert_eq!(log.done_flags, 1);
    assert_eq!(log.ticks.iter().filter(|t| t.is_done()).count(), 1);
    assert_eq!(sampler.step(), Ok(Tick::Idle));
}

#[test]
fn test_slow_consumer_sees_same_values() {
    let mut rng = test_rng(9);
    let seed = random_bytes(&mut rng, cbd_seed_bytes(2));
    let mut sampler = CbdSampler::new(2).unwrap();

    let fast = run_with_consumer(&mut sampler, &seed, 1).unwrap();
    let slow = run_with_consumer(&mut sampler, &seed, 5).unwrap();
    assert_eq!(values(&fast.items), values(&slow.items));
    assert!(slow
        .ticks
        .iter()
        .any(|t| *t == Tick::Stalled(Stall::OutputFull)));
    assert!(slow.ticks.len() > fast.ticks.len());
}

#[test]
fn test_restart_is_idempotent() {
    let mut rng = test_rng(11);
    let seed = random_bytes(&mut rng, cbd_seed_bytes(2));
    let mut sampler = CbdSampler::new(2).unwrap();

    sampler.start(&seed).unwrap();
    for _ in 0..40 {
        sampler.step().unwrap();
        sampler.poll_output();
    }
    sampler.abort();

    let first = run_with_consumer(&mut sampler, &seed, 1).unwrap();
    let second = run_with_consumer(&mut sampler, &seed, 1).unwrap();
    assert_eq!(first.items, second.items);
}

#[test]
fn test_rejects_bad_input() {
    assert!(matches!(
        CbdSampler::new(4),
        Err(Error::InvalidParameter { .. })
    ));

    let mut sampler = CbdSampler::new(2).unwrap();
    assert_eq!(
        sampler.start(&[0u8; 127]),
        Err(Error::InvalidLength {
            context: "CbdSampler::start",
            expected: 128,
            actual: 127
        })
    );
    assert!(!sampler.status().busy);

    sampler.start(&[0u8; 128]).unwrap();
    assert!(matches!(sampler.start(&[0u8; 128]), Err(Error::Busy { .. })));
}
