//! Random shuffles and reservoir sampling.
//!
//! Every operation comes in two forms: one taking a [`rand::Rng`], and a
//! `_by` form taking a generator closure. The closure is called with an
//! exclusive upper bound and must return a value in `[0, bound)`; this is
//! how a caller plugs in a deterministic sequence.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sublist::algorithm::{random_samples, shuffle};
//! use sublist::view::AsSublist;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let mut deck: Vec<u32> = (1..=10).collect();
//! shuffle(&mut deck.sublist_mut(), &mut rng);
//! let mut sorted = deck.clone();
//! sorted.sort_unstable();
//! assert_eq!(sorted, (1..=10).collect::<Vec<u32>>());
//!
//! let hand = random_samples(deck.sublist(), 3, &mut rng).unwrap().to_vec();
//! assert_eq!(hand.len(), 3);
//! assert!(hand.iter().all(|card| deck.contains(card)));
//! ```

use rand::Rng;

use crate::error::{SublistError, ensure_at_most};
use crate::output::{Output, Picked};
use crate::view::{View, ViewMut};

/// Shuffles the view in place with a Fisher-Yates pass.
///
/// Walking from the back, each position is swapped with a uniformly chosen
/// position at or before it, so every arrangement is equally likely.
pub fn shuffle<V, R>(view: &mut V, rng: &mut R)
where
    V: ViewMut,
    R: Rng + ?Sized,
{
    for index in (1..view.len()).rev() {
        let other = rng.gen_range(0..=index);
        view.swap(index, other);
    }
}

/// Shuffles the view in place, drawing swap targets from `generator`.
///
/// Every target is drawn and validated before anything moves.
///
/// # Errors
///
/// Returns [`SublistError::ArgumentOutOfRange`] naming `generator` if it
/// returns a value not below its bound; the view is left untouched.
///
/// # Examples
///
/// ```rust
/// use sublist::algorithm::shuffle_by;
/// use sublist::view::AsSublist;
///
/// // Always picking 0 rotates the view left by one.
/// let mut values = vec![1, 2, 3, 4];
/// shuffle_by(&mut values.sublist_mut(), |_| 0).unwrap();
/// assert_eq!(values, vec![2, 3, 4, 1]);
///
/// assert!(shuffle_by(&mut values.sublist_mut(), |bound| bound).is_err());
/// assert_eq!(values, vec![2, 3, 4, 1]);
/// ```
pub fn shuffle_by<V, G>(view: &mut V, mut generator: G) -> Result<(), SublistError>
where
    V: ViewMut,
    G: FnMut(usize) -> usize,
{
    let targets = (1..view.len())
        .rev()
        .map(|index| draw(&mut generator, index + 1).map(|other| (index, other)))
        .collect::<Result<Vec<_>, _>>()?;
    for (index, other) in targets {
        view.swap(index, other);
    }
    Ok(())
}

/// Produces a shuffled copy of `source`, leaving `source` untouched.
///
/// `in_place()` on the result shuffles a mutable source instead.
pub fn shuffled<V, R>(source: V, rng: &mut R) -> Output<Picked<V>>
where
    V: View,
    V::Item: Clone,
    R: Rng + ?Sized,
{
    let mut plan: Vec<usize> = (0..source.len()).collect();
    for index in (1..plan.len()).rev() {
        plan.swap(index, rng.gen_range(0..=index));
    }
    Output::new(Picked::new(source, plan))
}

/// Selects `k` elements of `source` uniformly at random without
/// replacement, in a single reservoir-sampling pass.
///
/// The relative order of the selected elements is unspecified.
///
/// # Errors
///
/// Returns [`SublistError::ArgumentOutOfRange`] if `k > source.len()`.
///
/// # Complexity
///
/// O(n) random draws, O(k) extra space.
pub fn random_samples<V, R>(
    source: V,
    k: usize,
    rng: &mut R,
) -> Result<Output<Picked<V>>, SublistError>
where
    V: View,
    V::Item: Clone,
    R: Rng + ?Sized,
{
    random_samples_by(source, k, |bound| rng.gen_range(0..bound))
}

/// Selects `k` elements of `source`, drawing reservoir slots from
/// `generator`.
///
/// # Errors
///
/// Returns [`SublistError::ArgumentOutOfRange`] if `k > source.len()`, or
/// naming `generator` if it returns a value not below its bound.
pub fn random_samples_by<V, G>(
    source: V,
    k: usize,
    mut generator: G,
) -> Result<Output<Picked<V>>, SublistError>
where
    V: View,
    V::Item: Clone,
    G: FnMut(usize) -> usize,
{
    let population = source.len();
    ensure_at_most("k", k, population)?;
    let mut reservoir: Vec<usize> = (0..k).collect();
    for index in k..population {
        let slot = draw(&mut generator, index + 1)?;
        if slot < k {
            reservoir[slot] = index;
        }
    }
    Ok(Output::new(Picked::new(source, reservoir)))
}

/// Calls `generator(bound)` and checks the result is below `bound`.
fn draw<G>(generator: &mut G, bound: usize) -> Result<usize, SublistError>
where
    G: FnMut(usize) -> usize,
{
    let value = generator(bound);
    ensure_at_most("generator", value, bound - 1)?;
    Ok(value)
}
