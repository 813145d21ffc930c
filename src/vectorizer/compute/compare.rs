use num::Float;

use crate::vectorizer::tfidf::TFIDFVector;

pub trait Compare<N>
where
    N: Float,
{
    /// dot product over the union of both vocabularies
    /// d(a, b) = Σ(a_w * b_w), a missing term counts as 0
    fn dot(vec: &TFIDFVector<N>, other: &TFIDFVector<N>) -> f64;
    /// ||a|| = sqrt(Σ(a_w^2))
    fn norm(vec: &TFIDFVector<N>) -> f64;
    /// cosine similarity
    /// cos(θ) = Σ(a_w * b_w) / (||a|| * ||b||)
    /// 0.0 whenever either side has zero magnitude, never above 1.0
    fn cosine_similarity(vec: &TFIDFVector<N>, other: &TFIDFVector<N>) -> f64;
}

#[derive(Debug)]
pub struct DefaultCompare;

/// impl Compare for f32, f64
impl<N> Compare<N> for DefaultCompare
where
    N: Float + Into<f64>,
{
    #[inline]
    fn dot(vec: &TFIDFVector<N>, other: &TFIDFVector<N>) -> f64 {
        // terms only present on one side contribute 0
        let (small, large) = if vec.len() <= other.len() { (vec, other) } else { (other, vec) };
        let mut products: Vec<(&str, f64)> = small
            .iter()
            .filter_map(|(term, a)| {
                large
                    .get(term)
                    .map(|b| (term, Into::<f64>::into(a) * Into::<f64>::into(b)))
            })
            .collect();
        // fixed summation order keeps dot(a, b) bit-identical to dot(b, a)
        products.sort_unstable_by(|x, y| x.0.cmp(y.0));
        products.into_iter().map(|(_, p)| p).sum()
    }

    #[inline]
    fn norm(vec: &TFIDFVector<N>) -> f64 {
        vec.norm()
    }

    #[inline]
    fn cosine_similarity(vec: &TFIDFVector<N>, other: &TFIDFVector<N>) -> f64 {
        let norm_a = Self::norm(vec);
        let norm_b = Self::norm(other);
        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            (Self::dot(vec, other) / (norm_a * norm_b)).min(1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(pairs: &[(&str, f64)]) -> TFIDFVector<f64> {
        pairs.iter().copied().collect()
    }

    fn cos(a: &TFIDFVector<f64>, b: &TFIDFVector<f64>) -> f64 {
        <DefaultCompare as Compare<f64>>::cosine_similarity(a, b)
    }

    #[test]
    fn self_similarity_is_one() {
        let a = v(&[("x", 1.5), ("y", 0.25), ("z", 3.0)]);
        assert!((cos(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rounding_does_not_push_past_one() {
        // norm² and dot disagree in the last bit for these weights
        let a = v(&[("a", 0.1), ("b", 0.2), ("c", 0.3), ("d", 0.7), ("e", 1.3)]);
        assert!(cos(&a, &a) <= 1.0);
        let scaled = v(&[("a", 0.3), ("b", 0.6), ("c", 0.9), ("d", 2.1), ("e", 3.9)]);
        assert!(cos(&a, &scaled) <= 1.0);
        assert!(cos(&scaled, &a) <= 1.0);
    }

    #[test]
    fn disjoint_vectors_are_orthogonal() {
        let a = v(&[("x", 1.0)]);
        let b = v(&[("y", 1.0)]);
        assert_eq!(cos(&a, &b), 0.0);
    }

    #[test]
    fn zero_vectors_have_zero_similarity() {
        let empty = TFIDFVector::<f64>::new();
        let zeros = v(&[("a", 0.0), ("b", 0.0)]);
        let a = v(&[("a", 2.0)]);
        assert_eq!(cos(&empty, &a), 0.0);
        assert_eq!(cos(&a, &empty), 0.0);
        assert_eq!(cos(&empty, &empty), 0.0);
        assert_eq!(cos(&zeros, &zeros), 0.0);
        assert_eq!(cos(&zeros, &a), 0.0);
    }

    #[test]
    fn known_value() {
        // (1,1,0) · (1,0,1) = 1, norms sqrt(2) each
        let a = v(&[("x", 1.0), ("y", 1.0)]);
        let b = v(&[("x", 1.0), ("z", 1.0)]);
        assert!((cos(&a, &b) - 0.5).abs() < 1e-12);
        assert_eq!(<DefaultCompare as Compare<f64>>::dot(&a, &b), 1.0);
    }

    #[test]
    fn magnitude_does_not_matter() {
        let a = v(&[("x", 1.0), ("y", 2.0)]);
        let b = v(&[("x", 10.0), ("y", 20.0)]);
        assert!((cos(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn f32_vectors() {
        let a: TFIDFVector<f32> = [("x", 1.0f32), ("y", 1.0)].into_iter().collect();
        let b: TFIDFVector<f32> = [("x", 1.0f32)].into_iter().collect();
        let c = <DefaultCompare as Compare<f32>>::cosine_similarity(&a, &b);
        assert!((c - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    fn arb_vector() -> impl Strategy<Value = TFIDFVector<f64>> {
        prop::collection::vec(("[a-e]{1,2}", 0.0f64..50.0), 0..12)
            .prop_map(|pairs| pairs.iter().map(|(t, w)| (t.as_str(), *w)).collect())
    }

    proptest! {
        #[test]
        fn cosine_is_symmetric(a in arb_vector(), b in arb_vector()) {
            prop_assert_eq!(cos(&a, &b), cos(&b, &a));
        }

        #[test]
        fn cosine_of_non_negative_weights_is_in_unit_range(a in arb_vector(), b in arb_vector()) {
            let c = cos(&a, &b);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn self_similarity_never_overshoots(a in arb_vector()) {
            let c = cos(&a, &a);
            prop_assert!(c <= 1.0);
            if a.norm() > 0.0 {
                prop_assert!((c - 1.0).abs() < 1e-12);
            }
        }
    }
}
