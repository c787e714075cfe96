//! Landmark sampling

use crate::config::{LandmarkConfig, SamplingStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of landmarks a run aims for: the configured cap, bounded by the vertex count
pub fn target_landmarks(node_count: usize, max_landmarks: usize) -> usize {
    max_landmarks.min(node_count)
}

/// RNG for one sampling run: seeded when the config asks for reproducibility
pub fn landmark_rng(config: &LandmarkConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw landmark indices from `0..node_count`, returned in ascending order.
///
/// When `target >= node_count` every vertex is a landmark regardless of strategy.
/// [`SamplingStrategy::Bernoulli`] keeps each vertex with probability
/// `target / node_count`, so the realised size only approximates `target`.
pub fn sample_landmarks<R: Rng + ?Sized>(
    node_count: usize,
    target: usize,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Vec<usize> {
    if target >= node_count {
        return (0..node_count).collect();
    }
    if target == 0 {
        return Vec::new();
    }

    match strategy {
        SamplingStrategy::Bernoulli => {
            let p = target as f64 / node_count as f64;
            (0..node_count).filter(|_| rng.gen_bool(p)).collect()
        }
        SamplingStrategy::Exact => {
            let mut picked = rand::seq::index::sample(rng, node_count, target).into_vec();
            picked.sort_unstable();
            picked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_is_capped_by_vertex_count() {
        assert_eq!(target_landmarks(10, 1000), 10);
        assert_eq!(target_landmarks(5000, 1000), 1000);
    }

    #[test]
    fn test_small_graph_uses_every_vertex() {
        let mut rng = StdRng::seed_from_u64(1);
        for strategy in [SamplingStrategy::Bernoulli, SamplingStrategy::Exact] {
            assert_eq!(sample_landmarks(6, 6, strategy, &mut rng), vec![0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_exact_sampling_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_landmarks(10_000, 250, SamplingStrategy::Exact, &mut rng);
        assert_eq!(picked.len(), 250);
        assert!(picked.windows(2).all(|w| w[0] < w[1]));
        assert!(picked.iter().all(|&i| i < 10_000));
    }

    #[test]
    fn test_bernoulli_sampling_size_is_near_target() {
        let mut rng = StdRng::seed_from_u64(42);
        let picked = sample_landmarks(20_000, 1000, SamplingStrategy::Bernoulli, &mut rng);
        // Binomial(20000, 0.05): sd ~ 30.8, allow > 6 sd
        assert!(picked.len() > 800 && picked.len() < 1200, "got {}", picked.len());
        assert!(picked.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let config = LandmarkConfig {
            seed: Some(99),
            ..LandmarkConfig::default()
        };
        let a = sample_landmarks(5000, 100, SamplingStrategy::Bernoulli, &mut landmark_rng(&config));
        let b = sample_landmarks(5000, 100, SamplingStrategy::Bernoulli, &mut landmark_rng(&config));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_target_samples_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(sample_landmarks(50, 0, SamplingStrategy::Bernoulli, &mut rng).is_empty());
    }
}
