//! Property-based tests for both samplers

use polysample_algorithms::drive::Driver;
use polysample_algorithms::sampler::{
    evaluate_chunk, fill_uniform, sample_cbd, CbdSampler, FlowController,
};
use polysample_algorithms::xof::SliceProducer;
use polysample_params::{cbd_seed_bytes, N, Q, UNIFORM_INPUT_BYTES};
use polysample_tests::{run_with_consumer, values};
use proptest::prelude::*;

/// Streams long enough to finish a run whatever their content
fn accepting_stream() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..600).prop_map(|mut v| {
        v.extend(std::iter::repeat(0u8).take(3 * N));
        v
    })
}

fn eta_and_seed() -> impl Strategy<Value = (u8, Vec<u8>)> {
    prop_oneof![Just(2u8), Just(3u8)]
        .prop_flat_map(|eta| (Just(eta), prop::collection::vec(any::<u8>(), cbd_seed_bytes(eta))))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cbd_values_are_centered((eta, seed) in eta_and_seed()) {
        let coeffs = sample_cbd(&seed, eta).unwrap();
        for c in coeffs {
            prop_assert!(c < Q);
            prop_assert!(c <= eta as u16 || c >= Q - eta as u16);
        }
    }

    #[test]
    fn cbd_stepped_run_is_complete((eta, seed) in eta_and_seed(), poll_every in 1usize..6) {
        let mut sampler = CbdSampler::new(eta).unwrap();
        let log = run_with_consumer(&mut sampler, &seed, poll_every).unwrap();
        prop_assert_eq!(log.items.len(), N);
        prop_assert_eq!(log.done_flags, 1);
        prop_assert_eq!(values(&log.items), sample_cbd(&seed, eta).unwrap().to_vec());
    }

    #[test]
    fn rejection_emits_exactly_n_reduced(
        stream in accepting_stream(),
        poll_every in 1usize..6,
        gaps in 0usize..5,
    ) {
        let producer = SliceProducer::new(&stream).with_gaps(gaps);
        let mut flow = FlowController::new(producer);
        let log = run_with_consumer(&mut flow, &[0u8; UNIFORM_INPUT_BYTES], poll_every).unwrap();

        prop_assert_eq!(log.items.len(), N);
        for (i, item) in log.items.iter().enumerate() {
            prop_assert_eq!(item.coefficient.index as usize, i);
            prop_assert!(item.coefficient.value < Q);
            prop_assert_eq!(item.is_last, i == N - 1);
        }
    }

    #[test]
    fn streaming_equals_one_shot_fill(stream in accepting_stream()) {
        let mut flow = FlowController::new(SliceProducer::new(&stream));
        let poly = Driver::default().run(&mut flow, &[0u8; UNIFORM_INPUT_BYTES]).unwrap();

        let mut coeffs = [0u16; N];
        let (count, consumed) = fill_uniform(&mut coeffs, 0, &stream);
        prop_assert_eq!(count, N);
        prop_assert_eq!(consumed % 3, 0);
        prop_assert_eq!(poly.as_coeffs_slice(), &coeffs[..]);
    }

    #[test]
    fn chunk_decision_respects_limit(chunk in any::<[u8; 3]>(), accepted in 0usize..=N) {
        let decision = evaluate_chunk(chunk, accepted);
        prop_assert!(accepted + decision.accepted() <= N);
        prop_assert!(decision.accepted_values().all(|v| v < Q));
    }
}
