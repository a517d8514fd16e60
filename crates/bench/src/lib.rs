use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes shared by the sort benchmarks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    AlreadySorted,
    ReverseSorted,
    FewUniques16,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::AlreadySorted,
    Distribution::ReverseSorted,
    Distribution::FewUniques16,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::AlreadySorted => "already_sorted",
            Self::ReverseSorted => "reverse_sorted",
            Self::FewUniques16 => "few_uniques_16",
        }
    }

    pub fn generate(self, size: usize, seed: u64) -> Vec<u64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = Vec::with_capacity(size);

        match self {
            Self::RandomUniform => {
                for _ in 0..size {
                    data.push(rng.random::<u64>());
                }
            }
            Self::AlreadySorted => {
                data.extend(0..size as u64);
            }
            Self::ReverseSorted => {
                data.extend((0..size as u64).rev());
            }
            Self::FewUniques16 => {
                for _ in 0..size {
                    data.push(rng.random_range(0..16_u64) * 17);
                }
            }
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_labels_are_unique() {
        for (i, a) in ALL_DISTRIBUTIONS.iter().enumerate() {
            for b in &ALL_DISTRIBUTIONS[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn generate_is_deterministic_per_seed() {
        for &dist in &ALL_DISTRIBUTIONS {
            let a = dist.generate(128, 0xBA5E_0001);
            let b = dist.generate(128, 0xBA5E_0001);
            assert_eq!(a, b, "distribution={}", dist.label());
            assert_eq!(a.len(), 128);
        }
    }
}
