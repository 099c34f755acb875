//! Choosing one value from a comma-separated list of alternatives.

use bfd_model::{ExportOptions, SamplingMode};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Resolves distribution strings such as `1,2,3` into one literal.
///
/// Owns its random source. Use one sampler per thread.
#[derive(Debug, Clone)]
pub struct DistributionSampler<R = StdRng> {
    mode: SamplingMode,
    rng: R,
}

impl DistributionSampler<StdRng> {
    /// Always selects the first alternative.
    pub fn deterministic() -> Self {
        Self::with_rng(SamplingMode::Deterministic, StdRng::seed_from_u64(0))
    }

    /// Selects uniformly at random; `None` seeds from the operating system.
    pub fn random(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(SamplingMode::Random, rng)
    }

    pub fn from_options(options: &ExportOptions) -> Self {
        match options.sampling {
            SamplingMode::Deterministic => Self::deterministic(),
            SamplingMode::Random => Self::random(options.seed),
        }
    }
}

impl<R: Rng> DistributionSampler<R> {
    pub fn with_rng(mode: SamplingMode, rng: R) -> Self {
        Self { mode, rng }
    }

    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    /// Pick one alternative from `value`, or return it unchanged when it
    /// holds no comma.
    ///
    /// Alternatives are not trimmed. Trailing empty alternatives are
    /// ignored, so `A,B,` samples from `A` and `B`.
    pub fn sample<'a>(&mut self, value: &'a str) -> &'a str {
        if !value.contains(',') {
            return value;
        }
        let candidates = candidates(value);
        match self.mode {
            SamplingMode::Deterministic => candidates.first().copied().unwrap_or(""),
            SamplingMode::Random => candidates.choose(&mut self.rng).copied().unwrap_or(""),
        }
    }
}

/// Split a distribution string, dropping trailing empty entries.
pub fn candidates(value: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = value.split(',').collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_comma_unchanged() {
        let mut sampler = DistributionSampler::random(Some(1));
        assert_eq!(sampler.sample("72"), "72");
        assert_eq!(sampler.sample(""), "");
    }

    #[test]
    fn test_deterministic_takes_first() {
        let mut sampler = DistributionSampler::deterministic();
        for _ in 0..10 {
            assert_eq!(sampler.sample("A,B,C"), "A");
        }
    }

    #[test]
    fn test_candidates_not_trimmed() {
        let mut sampler = DistributionSampler::deterministic();
        assert_eq!(sampler.sample(" A , B"), " A ");
        assert_eq!(candidates("A, B"), vec!["A", " B"]);
    }

    #[test]
    fn test_trailing_empty_candidates_dropped() {
        assert_eq!(candidates("A,B,,"), vec!["A", "B"]);
        assert_eq!(candidates(",A"), vec!["", "A"]);
        let mut sampler = DistributionSampler::deterministic();
        assert_eq!(sampler.sample(",,"), "");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = DistributionSampler::random(Some(2021));
        let mut second = DistributionSampler::random(Some(2021));
        let a: Vec<_> = (0..50).map(|_| first.sample("1,2,3,4,5,6")).collect();
        let b: Vec<_> = (0..50).map(|_| second.sample("1,2,3,4,5,6")).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_covers_all_candidates() {
        let mut sampler = DistributionSampler::random(Some(7));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(sampler.sample("A,B,C"));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_from_options() {
        let options = ExportOptions::default();
        assert_eq!(
            DistributionSampler::from_options(&options).mode(),
            SamplingMode::Deterministic
        );
        let options = options
            .with_sampling(SamplingMode::Random)
            .with_seed(Some(3));
        assert_eq!(
            DistributionSampler::from_options(&options).mode(),
            SamplingMode::Random
        );
    }

    proptest! {
        #[test]
        fn test_random_pick_is_one_of_the_candidates(
            parts in proptest::collection::vec("[A-Z0-9]{1,4}", 2..8),
            seed in any::<u64>(),
        ) {
            let value = parts.join(",");
            let mut sampler = DistributionSampler::random(Some(seed));
            let picked = sampler.sample(&value);
            prop_assert!(parts.iter().any(|p| p == picked));
        }
    }
}
