use indexmap::IndexMap;
use num::Num;
use serde::{Deserialize, Serialize};

/// Sparse TF-IDF vector: feature to weight, absent feature = 0.
///
/// One vector per corpus entry, built once, and one short-lived vector
/// per query. Keys keep their insertion order so the same document
/// always produces an identical vector.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(serialize = "N: Serialize", deserialize = "N: Deserialize<'de>"))]
pub struct FeatureVector<N = f64>
where
    N: Num,
{
    #[serde(with = "indexmap::map::serde_seq")]
    weights: IndexMap<String, N>,
}

impl<N> FeatureVector<N>
where
    N: Num + Copy,
{
    /// Create an empty vector
    pub fn new() -> Self {
        FeatureVector {
            weights: IndexMap::new(),
        }
    }

    /// Set one feature's weight, replacing any previous value
    #[inline]
    pub fn set_weight(&mut self, term: &str, weight: N) -> &mut Self {
        self.weights.insert(term.to_string(), weight);
        self
    }

    /// Get one feature's weight (zero when absent)
    #[inline]
    pub fn weight(&self, term: &str) -> N {
        self.weights.get(term).copied().unwrap_or(N::zero())
    }

    /// Iterate features and weights in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> + '_ {
        self.weights.iter().map(|(term, &weight)| (term.as_str(), weight))
    }

    /// Number of stored features
    #[inline]
    pub fn term_num(&self) -> usize {
        self.weights.len()
    }

    /// True when no feature is stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Similarity math
impl<N> FeatureVector<N>
where
    N: Num + Copy + Into<f64>,
{
    /// Dot product over the key union.
    ///
    /// A feature missing on either side contributes 0, so only the
    /// intersection needs walking.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.iter()
            .map(|(term, weight)| {
                let a: f64 = weight.into();
                let b: f64 = other.weight(term).into();
                a * b
            })
            .sum()
    }

    /// Euclidean norm
    #[inline]
    pub fn norm(&self) -> f64 {
        self.iter()
            .map(|(_, weight)| {
                let w: f64 = weight.into();
                w * w
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Cosine similarity, in [-1, 1].
    ///
    /// cosθ = A・B / (|A||B|). Either side with a zero norm scores 0,
    /// never NaN.
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a > 0.0 && norm_b > 0.0 {
            self.dot(other) / (norm_a * norm_b)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> FeatureVector<f64> {
        let mut v = FeatureVector::new();
        for (term, weight) in pairs {
            v.set_weight(term, *weight);
        }
        v
    }

    #[test]
    fn cosine_is_symmetric() {
        let a = vector(&[("track", 0.7), ("order", 1.3), ("track order", 0.4)]);
        let b = vector(&[("order", 0.9), ("status", 2.0)]);
        assert!((a.cosine_similarity(&b) - b.cosine_similarity(&a)).abs() < 1e-12);
    }

    #[test]
    fn identical_vectors_score_one() {
        let a = vector(&[("track", 0.4), ("order", 0.4)]);
        assert!((a.cosine_similarity(&a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn disjoint_vectors_score_zero() {
        let a = vector(&[("track", 1.0)]);
        let b = vector(&[("return", 1.0)]);
        assert_eq!(a.cosine_similarity(&b), 0.0);
    }

    #[test]
    fn zero_norm_scores_zero_not_nan() {
        let empty = vector(&[]);
        let muted = vector(&[("unseen", 0.0)]);
        let a = vector(&[("track", 0.4)]);
        assert_eq!(a.cosine_similarity(&empty), 0.0);
        assert_eq!(empty.cosine_similarity(&a), 0.0);
        assert_eq!(a.cosine_similarity(&muted), 0.0);
        assert_eq!(empty.cosine_similarity(&empty), 0.0);
    }

    #[test]
    fn partial_overlap_uses_the_key_union() {
        let a = vector(&[("track", 1.0), ("order", 1.0)]);
        let b = vector(&[("track", 1.0)]);
        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((a.cosine_similarity(&b) - expected).abs() < 1e-12);
    }

    #[test]
    fn negative_weights_are_legal() {
        let a = vector(&[("track", -0.7)]);
        let b = vector(&[("track", -1.4)]);
        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-12);
        let c = vector(&[("track", 0.7)]);
        assert!((a.cosine_similarity(&c) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn absent_features_read_as_zero() {
        let a = vector(&[("track", 0.5)]);
        assert_eq!(a.weight("missing"), 0.0);
    }
}
