//! Integration tests for streamed rejection sampling

use polysample_algorithms::drive::{DriveConfig, Driver};
use polysample_algorithms::sampler::{fill_uniform, FlowController, FlowState};
use polysample_algorithms::xof::{Shake128Producer, SliceProducer};
use polysample_algorithms::{expand_matrix, sample_uniform};
use polysample_api::{Beat, CoefficientSampler, Error, Stall, Tick, XofProducer};
use polysample_params::{KYBER768, N, Q, UNIFORM_INPUT_BYTES};
use polysample_tests::vectors::{self, UNIFORM_0_0, UNIFORM_0_0_BYTES_USED};
use polysample_tests::{random_bytes, run_with_consumer, test_rng, values};

fn ramp_input(a: u8, b: u8) -> [u8; UNIFORM_INPUT_BYTES] {
    let mut input = [0u8; UNIFORM_INPUT_BYTES];
    input[..32].copy_from_slice(&vectors::ramp_seed());
    input[32] = a;
    input[33] = b;
    input
}

/// Squeeze `beats` beats from a SHAKE128 producer after absorbing `input`
fn shake128_stream(input: &[u8], beats: usize) -> Vec<u8> {
    let mut producer = Shake128Producer::new();
    let mut chunks = input.chunks(8).peekable();
    while let Some(chunk) = chunks.next() {
        let beat = Beat::new(chunk, chunks.peek().is_none()).unwrap();
        assert!(producer.absorb(&beat).unwrap());
    }
    let mut stream = Vec::new();
    for _ in 0..beats {
        stream.extend_from_slice(producer.squeeze().unwrap().unwrap().as_bytes());
    }
    stream
}

/// Request/response decode of `stream` in blocks of `block` bytes
fn fill_in_blocks(stream: &[u8], block: usize) -> Option<[u16; N]> {
    let mut coeffs = [0u16; N];
    let mut count = 0;
    let mut carry: Vec<u8> = Vec::new();
    for piece in stream.chunks(block) {
        carry.extend_from_slice(piece);
        let (filled, consumed) = fill_uniform(&mut coeffs, count, &carry);
        count = filled;
        carry.drain(..consumed);
        if count == N {
            return Some(coeffs);
        }
    }
    None
}

#[test]
fn test_shake_stream_known_answer() {
    let stream = shake128_stream(&ramp_input(0, 0), 3);
    assert_eq!(hex::encode(stream), vectors::SHAKE128_RAMP_PREFIX_HEX);
}

#[test]
fn test_uniform_known_answer() {
    let poly = sample_uniform(&vectors::ramp_seed(), 0, 0).unwrap();
    vectors::assert_matches(poly.as_coeffs_slice(), &UNIFORM_0_0);
}

#[test]
fn test_request_response_known_answer() {
    let stream = shake128_stream(&ramp_input(0, 0), 60);
    let mut coeffs = [0u16; N];
    let (count, consumed) = fill_uniform(&mut coeffs, 0, &stream);
    assert_eq!(count, N);
    assert_eq!(consumed, UNIFORM_0_0_BYTES_USED);
    vectors::assert_matches(&coeffs, &UNIFORM_0_0);
}

#[test]
fn test_streaming_matches_request_response() {
    let mut rng = test_rng(42);
    for _ in 0..8 {
        let stream = random_bytes(&mut rng, 720);
        let mut flow = FlowController::new(SliceProducer::new(&stream));
        let poly = Driver::default().run(&mut flow, &[0u8; UNIFORM_INPUT_BYTES]).unwrap();

        for block in [3usize, 7, 64, 168] {
            let coeffs = fill_in_blocks(&stream, block).unwrap();
            assert_eq!(poly.as_coeffs_slice(), &coeffs[..]);
        }
    }
}

#[test]
fn test_slow_consumer_and_gaps_do_not_change_output() {
    let mut rng = test_rng(3);
    let stream = random_bytes(&mut rng, 720);
    let input = [0x33u8; UNIFORM_INPUT_BYTES];

    let mut flow = FlowController::new(SliceProducer::new(&stream));
    let fast = run_with_consumer(&mut flow, &input, 1).unwrap();

    let producer = SliceProducer::new(&stream)
        .with_gaps(2)
        .with_absorb_backpressure(3);
    let mut flow = FlowController::new(producer);
    let slow = run_with_consumer(&mut flow, &input, 7).unwrap();

    assert_eq!(fast.items.len(), N);
    assert_eq!(values(&fast.items), values(&slow.items));
    for stall in [Stall::OutputFull, Stall::InputUnderrun, Stall::ProducerBusy] {
        assert!(slow.ticks.contains(&Tick::Stalled(stall)), "{stall:?}");
    }
    assert_eq!(slow.done_flags, 1);
}

#[test]
fn test_leftover_bytes_are_discarded() {
    let stream = vec![0u8; 3 * N];
    let mut flow = FlowController::new(SliceProducer::new(&stream));
    let log = run_with_consumer(&mut flow, &[0u8; UNIFORM_INPUT_BYTES], 1).unwrap();

    assert!(values(&log.items).iter().all(|&v| v == 0));
    assert!(flow.byte_queue().is_empty());
    assert!(flow.producer().is_stopped());
    assert_eq!(flow.state(), FlowState::Idle);
    assert!(flow.producer().remaining() > 0);
}

#[test]
fn test_boundary_values() {
    // d1 = 3328 accepted, d2 = 3329 rejected, then d1 = 4095 rejected, d2 = 0 accepted
    let mut stream = vec![0x00, 0x1D, 0xD0, 0xFF, 0x0F, 0x00];
    stream.extend(vec![0u8; 3 * N]);
    let mut flow = FlowController::new(SliceProducer::new(&stream));
    let log = run_with_consumer(&mut flow, &[0u8; UNIFORM_INPUT_BYTES], 1).unwrap();

    assert_eq!(log.items[0].coefficient.value, Q - 1);
    assert_eq!(log.items[1].coefficient.value, 0);
    assert_eq!(log.items[1].coefficient.index, 1);
}

#[test]
fn test_short_stream_is_an_error() {
    let mut rng = test_rng(5);
    let stream = random_bytes(&mut rng, 200);
    let mut flow = FlowController::new(SliceProducer::new(&stream));
    let err = Driver::new(DriveConfig::unbounded())
        .run(&mut flow, &[0u8; UNIFORM_INPUT_BYTES])
        .unwrap_err();
    assert!(matches!(err, Error::StreamExhausted { required: N, .. }));
    assert!(err.is_run_failure());
    assert!(!flow.status().busy);

    // The controller is reusable after the failed run
    let stream = vec![0u8; 3 * N];
    let mut flow = FlowController::new(SliceProducer::new(&stream));
    assert!(Driver::default().run(&mut flow, &[0u8; UNIFORM_INPUT_BYTES]).is_ok());
}

#[test]
fn test_matrix_for_kyber768() {
    let rho = vectors::ramp_seed();
    let matrix = expand_matrix(&rho, KYBER768.k).unwrap();
    assert_eq!(matrix.len(), 3);
    assert!(matrix.iter().all(|row| row.len() == 3));
    vectors::assert_matches(matrix[0][0].as_coeffs_slice(), &UNIFORM_0_0);
    assert_eq!(matrix[2][1], sample_uniform(&rho, 1, 2).unwrap());
}

#[test]
fn test_controller_behind_trait_object() {
    let mut rng = test_rng(8);
    let stream = random_bytes(&mut rng, 720);
    let mut flow = FlowController::new(SliceProducer::new(&stream));
    let sampler: &mut dyn CoefficientSampler = &mut flow;
    assert_eq!(sampler.name(), "Rejection");
    assert_eq!(sampler.seed_len(), UNIFORM_INPUT_BYTES);

    let coeffs: Vec<_> = Driver::default()
        .coefficients(sampler, &[1u8; UNIFORM_INPUT_BYTES])
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(coeffs.len(), N);
    assert!(coeffs.windows(2).all(|w| w[1].index == w[0].index + 1));
}
