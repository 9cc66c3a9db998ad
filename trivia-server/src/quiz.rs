//! Quiz sampler
//!
//! Picks the next question for a quiz round. Previously shown ids are
//! removed from the candidate set up front, so a round always finishes
//! with a single bounded draw.

use std::collections::HashSet;

use rand::Rng;

use crate::models::Question;

/// Category id that selects questions from every category
pub const ALL_CATEGORIES: i64 = 0;

/// Result of one quiz round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// An unseen question
    Next(Question),
    /// Candidates exist but every one has already been shown
    Exhausted,
    /// The selected category holds no questions at all
    NoCandidates,
}

/// Category filter for a quiz category id: `None` means every category.
pub fn category_filter(category_id: i64) -> Option<i64> {
    (category_id != ALL_CATEGORIES).then_some(category_id)
}

/// Pick a uniformly random candidate whose id is not in `previous`.
pub fn pick_next<R>(candidates: Vec<Question>, previous: &[i64], rng: &mut R) -> QuizOutcome
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return QuizOutcome::NoCandidates;
    }

    let seen: HashSet<i64> = previous.iter().copied().collect();
    let mut remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    if remaining.is_empty() {
        return QuizOutcome::Exhausted;
    }

    let index = rng.gen_range(0..remaining.len());
    QuizOutcome::Next(remaining.swap_remove(index))
}
