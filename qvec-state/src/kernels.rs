//! Gate application kernels over a dense amplitude buffer
//!
//! Each kernel walks the 2^n amplitude buffer once, touching exactly the
//! index groups its gate couples. Qubit `q` is bit `q` of the basis-state
//! index (qubit 0 is least significant), so a single-qubit gate pairs
//! indices that differ in the `1 << q` bit and a two-qubit gate works on
//! groups of four.
//!
//! When `parallel` is set the buffer is sharded with rayon across
//! read- and write-disjoint chunks; callers must still serialize between
//! successive gates, since a later gate reads the fully updated state.
//!
//! All kernels assume validated qubit indices (the circuit layer rejects
//! out-of-range targets before execution).

use num_complex::Complex64;
use rayon::prelude::*;

/// 2x2 complex matrix in row-major order
pub type Matrix2 = [[Complex64; 2]; 2];

/// 4x4 complex matrix in row-major order
pub type Matrix4 = [[Complex64; 4]; 4];

/// Apply a general single-qubit gate
pub fn apply_single_qubit(gate: &Matrix2, qubit: usize, state: &mut [Complex64], parallel: bool) {
    debug_assert!(state.len().is_power_of_two());
    let stride = 1 << qubit;
    debug_assert!(stride < state.len());

    let pair = |chunk: &mut [Complex64]| {
        for j in 0..stride {
            let a = chunk[j];
            let b = chunk[j + stride];
            chunk[j] = gate[0][0] * a + gate[0][1] * b;
            chunk[j + stride] = gate[1][0] * a + gate[1][1] * b;
        }
    };

    if parallel {
        state.par_chunks_mut(stride * 2).for_each(pair);
    } else {
        state.chunks_mut(stride * 2).for_each(pair);
    }
}

/// Apply a diagonal single-qubit gate diag(d0, d1)
///
/// 2-3x faster than the general kernel since no amplitudes mix.
pub fn apply_diagonal(diagonal: [Complex64; 2], qubit: usize, state: &mut [Complex64], parallel: bool) {
    debug_assert!(state.len().is_power_of_two());
    let stride = 1 << qubit;
    debug_assert!(stride < state.len());
    let [d0, d1] = diagonal;

    let scale = move |chunk: &mut [Complex64]| {
        for amp in chunk[..stride].iter_mut() {
            *amp *= d0;
        }
        for amp in chunk[stride..].iter_mut() {
            *amp *= d1;
        }
    };

    if parallel {
        state.par_chunks_mut(stride * 2).for_each(scale);
    } else {
        state.chunks_mut(stride * 2).for_each(scale);
    }
}

/// Apply a Pauli-X gate (pure amplitude exchange)
pub fn apply_pauli_x(qubit: usize, state: &mut [Complex64], parallel: bool) {
    debug_assert!(state.len().is_power_of_two());
    let stride = 1 << qubit;
    debug_assert!(stride < state.len());

    let flip = |chunk: &mut [Complex64]| {
        for j in 0..stride {
            chunk.swap(j, j + stride);
        }
    };

    if parallel {
        state.par_chunks_mut(stride * 2).for_each(flip);
    } else {
        state.chunks_mut(stride * 2).for_each(flip);
    }
}

/// Apply a Hadamard gate
pub fn apply_hadamard(qubit: usize, state: &mut [Complex64], parallel: bool) {
    const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;
    debug_assert!(state.len().is_power_of_two());
    let stride = 1 << qubit;
    debug_assert!(stride < state.len());

    let mix = |chunk: &mut [Complex64]| {
        for j in 0..stride {
            let a = chunk[j];
            let b = chunk[j + stride];
            chunk[j] = (a + b) * INV_SQRT2;
            chunk[j + stride] = (a - b) * INV_SQRT2;
        }
    };

    if parallel {
        state.par_chunks_mut(stride * 2).for_each(mix);
    } else {
        state.chunks_mut(stride * 2).for_each(mix);
    }
}

/// Apply a CNOT via direct index manipulation
pub fn apply_cnot(control: usize, target: usize, state: &mut [Complex64], parallel: bool) {
    debug_assert!(state.len().is_power_of_two());
    debug_assert_ne!(control, target);
    let cmask = 1 << control;
    let tmask = 1 << target;

    if parallel {
        state
            .par_chunks_mut(tmask * 2)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let base = chunk_idx * tmask * 2;
                for j in 0..tmask {
                    if (base + j) & cmask != 0 {
                        chunk.swap(j, j + tmask);
                    }
                }
            });
    } else {
        for i in 0..state.len() {
            if i & cmask != 0 && i & tmask == 0 {
                state.swap(i, i | tmask);
            }
        }
    }
}

/// Apply a CZ: negate the amplitudes where both qubits are 1
pub fn apply_cz(qubit_a: usize, qubit_b: usize, state: &mut [Complex64], parallel: bool) {
    debug_assert!(state.len().is_power_of_two());
    debug_assert_ne!(qubit_a, qubit_b);
    let both = (1 << qubit_a) | (1 << qubit_b);

    if parallel {
        state.par_iter_mut().enumerate().for_each(|(i, amp)| {
            if i & both == both {
                *amp = -*amp;
            }
        });
    } else {
        for (i, amp) in state.iter_mut().enumerate() {
            if i & both == both {
                *amp = -*amp;
            }
        }
    }
}

/// Apply a SWAP: exchange the |01⟩ and |10⟩ amplitudes of the pair
pub fn apply_swap(qubit_a: usize, qubit_b: usize, state: &mut [Complex64], parallel: bool) {
    debug_assert!(state.len().is_power_of_two());
    debug_assert_ne!(qubit_a, qubit_b);
    let amask = 1 << qubit_a;
    let bmask = 1 << qubit_b;
    let hi = qubit_a.max(qubit_b);

    let exchange = move |chunk: &mut [Complex64]| {
        for l in 0..chunk.len() {
            if l & amask != 0 && l & bmask == 0 {
                chunk.swap(l, l ^ amask ^ bmask);
            }
        }
    };

    if parallel {
        state.par_chunks_mut(1 << (hi + 1)).for_each(exchange);
    } else {
        state.chunks_mut(1 << (hi + 1)).for_each(exchange);
    }
}

/// Apply a general two-qubit gate
///
/// The matrix is in |q_first q_second⟩ basis order: row/column index is
/// `bit_first * 2 + bit_second`.
pub fn apply_two_qubit(
    gate: &Matrix4,
    qubit_a: usize,
    qubit_b: usize,
    state: &mut [Complex64],
    parallel: bool,
) {
    debug_assert!(state.len().is_power_of_two());
    debug_assert_ne!(qubit_a, qubit_b);
    let amask = 1 << qubit_a;
    let bmask = 1 << qubit_b;
    let hi = qubit_a.max(qubit_b);

    let contract = move |chunk: &mut [Complex64]| {
        for l in 0..chunk.len() {
            if l & amask == 0 && l & bmask == 0 {
                let idx = [l, l | bmask, l | amask, l | amask | bmask];
                let v = [chunk[idx[0]], chunk[idx[1]], chunk[idx[2]], chunk[idx[3]]];
                for (row, &out) in idx.iter().enumerate() {
                    chunk[out] = gate[row][0] * v[0]
                        + gate[row][1] * v[1]
                        + gate[row][2] * v[2]
                        + gate[row][3] * v[3];
                }
            }
        }
    };

    if parallel {
        state.par_chunks_mut(1 << (hi + 1)).for_each(contract);
    } else {
        state.chunks_mut(1 << (hi + 1)).for_each(contract);
    }
}
