//! Question selection for practice and test mode.
//!
//! Practice mode draws one question at a time, weighted towards questions
//! that have rarely been answered correctly:
//!
//! weight(q) = 1 / (times_correct + 1)
//!
//! The draw is a cumulative-weight search over a single uniform sample in
//! `[0, Σweight)`. Test mode takes a uniform shuffle instead.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Question;

/// Selection weight of a question. Never zero; only `times_correct` counts.
pub fn weight(question: &Question) -> f64 {
    1.0 / (f64::from(question.times_correct) + 1.0)
}

/// Draw one index from `weights`, each index chosen with probability
/// `weights[i] / Σweights`.
///
/// Returns `None` for an empty slice or when no weight is positive.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let mut cumulative = Vec::with_capacity(weights.len());
    let mut total = 0.0f64;
    for &w in weights {
        total += w.max(0.0);
        cumulative.push(total);
    }
    if total <= 0.0 {
        return None;
    }

    let draw = rng.random::<f64>() * total;
    let index = cumulative.partition_point(|&c| c <= draw);
    // Floating point can land the draw exactly on the total.
    Some(index.min(weights.len() - 1))
}

/// Pick the next practice question from `candidates`.
pub fn pick_weighted<'a, R: Rng + ?Sized>(
    candidates: &[&'a Question],
    rng: &mut R,
) -> Option<&'a Question> {
    let weights: Vec<f64> = candidates.iter().map(|q| weight(q)).collect();
    let index = weighted_index(&weights, rng)?;
    tracing::debug!(
        question_id = candidates[index].id,
        weight = weights[index],
        "weighted draw"
    );
    Some(candidates[index])
}

/// Shuffle `candidates` uniformly and keep the first `count`.
///
/// `count` larger than the pool returns the whole pool, shuffled.
pub fn sample_for_test<T, R: Rng + ?Sized>(
    mut candidates: Vec<T>,
    count: usize,
    rng: &mut R,
) -> Vec<T> {
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}
