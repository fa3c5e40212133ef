//! Harmonic Calculation Functions
//!
//! The pure math behind every calculation tool. Each function is a total,
//! deterministic mapping from its arguments to an f64 result or sequence;
//! there is no shared state and no I/O, so callers may run any number of
//! these concurrently.
//!
//! φ and √2 are derived from `f64::sqrt` at each call site rather than
//! cached between calls.

/// Canonical Fibonacci values used for frequency scaling. Indices past the
/// end of the table clamp to the last value.
const FIBONACCI: [f64; 12] = [
    1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0, 144.0,
];

/// First ten primes, the default multiplier set for prime harmonics
pub const DEFAULT_PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Golden ratio, (1 + √5) / 2
pub fn phi() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// Integer harmonic series: base × 1, base × 2, … base × count
pub fn harmonic_series(base: f64, count: usize) -> Vec<f64> {
    (0..count).map(|n| base * (n as f64 + 1.0)).collect()
}

/// Frequency scaled by a Pythagorean interval ratio
pub fn pythagorean_ratio(base: f64, numerator: i64, denominator: i64) -> f64 {
    base * (numerator as f64 / denominator as f64)
}

/// Base frequency scaled by the Fibonacci value at `index`, clamping
/// out-of-table indices to 144
pub fn fibonacci_frequency(base: f64, index: usize) -> f64 {
    let scale = FIBONACCI
        .get(index)
        .copied()
        .unwrap_or(FIBONACCI[FIBONACCI.len() - 1]);
    base * scale
}

/// Base frequency scaled by φ
pub fn golden_ratio_frequency(base: f64) -> f64 {
    base * phi()
}

/// Base frequency scaled by each prime, preserving input order
pub fn prime_harmonics(base: f64, primes: &[u64]) -> Vec<f64> {
    primes.iter().map(|&p| base * p as f64).collect()
}

/// Golden-ratio spiral: base × φ⁰, base × φ¹, … base × φ^(count-1)
pub fn phi_spiral(base: f64, count: usize) -> Vec<f64> {
    let phi = phi();
    (0..count).map(|n| base * phi.powi(n as i32)).collect()
}

/// Energy-level harmonic: base × level²
pub fn quantum_harmonic(base: f64, level: i64) -> f64 {
    base * (level as f64) * (level as f64)
}

/// Self-similar expansion around φ. Starting from `[base]`, each depth
/// iteration appends `last × 2/φ` and then `last × φ`, where `last` is
/// the most recently appended value. The result is a frequency *set*:
/// deduplicated and sorted ascending.
pub fn fractal_frequencies(base: f64, depth: usize) -> Vec<f64> {
    let phi = phi();
    let mut frequencies = vec![base];
    let mut last = base;
    for _ in 0..depth {
        last = last * 2.0 / phi;
        frequencies.push(last);
        last *= phi;
        frequencies.push(last);
    }
    sorted_unique(frequencies)
}

/// Multiplicative √2 cascade of `steps` values starting at `base`
pub fn resonance_cascade(base: f64, steps: usize) -> Vec<f64> {
    let root_two = 2.0_f64.sqrt();
    let mut cascade = vec![base];
    let mut last = base;
    for _ in 1..steps {
        last *= root_two;
        cascade.push(last);
    }
    cascade
}

/// Combined frequency set drawing on the Fibonacci, φ-spiral, and prime
/// families. `size` bounds each contributing family (the Fibonacci slice
/// is additionally capped by its 12-entry table, the prime slice by the
/// 10 default primes). Deduplicated and sorted ascending.
pub fn frequency_matrix(
    base: f64,
    include_fibonacci: bool,
    include_golden_ratio: bool,
    include_primes: bool,
    size: usize,
) -> Vec<f64> {
    let mut matrix = Vec::new();
    if include_fibonacci {
        for index in 0..size.min(FIBONACCI.len()) {
            matrix.push(fibonacci_frequency(base, index));
        }
    }
    if include_golden_ratio {
        matrix.extend(phi_spiral(base, size));
    }
    if include_primes {
        let primes = &DEFAULT_PRIMES[..size.min(DEFAULT_PRIMES.len())];
        matrix.extend(prime_harmonics(base, primes));
    }
    sorted_unique(matrix)
}

fn sorted_unique(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}
