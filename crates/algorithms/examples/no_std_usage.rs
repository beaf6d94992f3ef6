// This example drives both samplers by hand without allocating, the way a
// no_std caller would, even though it is compiled with std for printing.

use polysample_algorithms::sampler::{CbdSampler, FlowController};
use polysample_algorithms::xof::Shake128Producer;
use polysample_api::{CoefficientSampler, Error, Tick};
use polysample_params::{N, UNIFORM_INPUT_BYTES};

/// Step `sampler` to completion into a fixed array, polling every `poll_every` ticks
fn drain_into<S: CoefficientSampler>(
    sampler: &mut S,
    seed: &[u8],
    poll_every: usize,
    out: &mut [u16; N],
) -> Result<usize, Error> {
    sampler.start(seed)?;
    let mut written = 0;
    let mut ticks = 0;
    loop {
        let tick = sampler.step()?;
        ticks += 1;
        if ticks % poll_every == 0 || tick.is_done() {
            while let Some(item) = sampler.poll_output() {
                out[item.coefficient.index as usize] = item.coefficient.value;
                written += 1;
            }
        }
        if tick == Tick::Done {
            assert_eq!(written, N);
            return Ok(ticks);
        }
    }
}

fn main() -> Result<(), Error> {
    let mut coeffs = [0u16; N];

    let mut cbd = CbdSampler::new(2)?;
    let seed = [0xA5u8; 128];
    let ticks = drain_into(&mut cbd, &seed, 1, &mut coeffs)?;
    println!("CBD(2): {ticks} ticks, first coefficients {:?}", &coeffs[..8]);

    let mut flow = FlowController::new(Shake128Producer::new());
    let mut input = [0u8; UNIFORM_INPUT_BYTES];
    input[..32].copy_from_slice(&[0x42; 32]);
    let ticks = drain_into(&mut flow, &input, 3, &mut coeffs)?;
    println!(
        "Uniform: {ticks} ticks with a slow consumer, {} bytes squeezed, first coefficients {:?}",
        flow.producer().squeezed(),
        &coeffs[..8]
    );

    Ok(())
}
