//! Featured-dish selection.
//!
//! Ranks menu items with a composite score — rating carries 60% of the
//! weight, review count 30% (saturating at [`REVIEW_SATURATION`]), and image
//! quality 10% (embedded `data:image/` URIs beat external links). Items
//! missing an image, description or title, or priced at zero, are excluded
//! from ranking; if nothing qualifies the selection degrades to the first
//! `limit` items of the input, unranked.
//!
//! Everything here is a pure function over the slice it is given: no state
//! is retained between calls, so callers can pass a fresh snapshot of the
//! catalog on every invocation.

use crate::domain::model::{MenuCategory, MenuItem};
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_FEATURED_LIMIT: usize = 3;

const RATING_WEIGHT: f64 = 0.6;
const POPULARITY_WEIGHT: f64 = 0.3;
/// Review count at which the popularity signal maxes out.
const REVIEW_SATURATION: f64 = 50.0;
const EMBEDDED_IMAGE_SCORE: f64 = 0.10;
const LINKED_IMAGE_SCORE: f64 = 0.05;

/// Composite quality score for one item.
///
/// Inputs are used as-is: a rating above 5 pushes the rating component past
/// its nominal 0.6 ceiling. Validation belongs at the API boundary, not here.
pub fn composite_score(item: &MenuItem) -> f64 {
    let rating_score = (item.rating / 5.0) * RATING_WEIGHT;
    let popularity_score = (item.reviews as f64 / REVIEW_SATURATION).min(1.0) * POPULARITY_WEIGHT;
    let image_quality_score = if has_embedded_image(&item.image) {
        EMBEDDED_IMAGE_SCORE
    } else {
        LINKED_IMAGE_SCORE
    };

    rating_score + popularity_score + image_quality_score
}

/// Whether an item qualifies for ranked featuring: non-blank image,
/// description and title, and a positive price.
pub fn is_featurable(item: &MenuItem) -> bool {
    !item.image.trim().is_empty()
        && !item.description.trim().is_empty()
        && !item.title.trim().is_empty()
        && item.price > 0.0
}

fn has_embedded_image(image: &str) -> bool {
    image.starts_with("data:image/")
}

/// Select up to `limit` featured items, best first.
///
/// If no item passes [`is_featurable`], the first `limit` items of the input
/// are returned in their original order. That output is best-effort and
/// unranked; it is not distinguishable from ranked output by any flag, so
/// callers that care must re-check validity on the result.
pub fn select_featured(items: &[MenuItem], limit: usize) -> Vec<MenuItem> {
    if items.is_empty() {
        return Vec::new();
    }

    let valid: Vec<&MenuItem> = items.iter().filter(|i| is_featurable(i)).collect();

    if valid.is_empty() {
        return items.iter().take(limit).cloned().collect();
    }

    let mut scored: Vec<(&MenuItem, f64)> =
        valid.into_iter().map(|i| (i, composite_score(i))).collect();
    // Stable sort keeps input order among equal scores.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(limit)
        .map(|(i, _)| i.clone())
        .collect()
}

/// Featured items scoped to one category.
///
/// Unlike [`select_featured`], an unknown `category_id` yields an empty
/// result rather than falling back to the full pool.
pub fn select_featured_by_category(
    categories: &[MenuCategory],
    category_id: &str,
    limit: usize,
) -> Vec<MenuItem> {
    match categories.iter().find(|c| c.id == category_id) {
        Some(category) => select_featured(&category.items, limit),
        None => Vec::new(),
    }
}

/// Randomized featured selection for variety, using the thread-local RNG.
pub fn select_random_featured(items: &[MenuItem], limit: usize) -> Vec<MenuItem> {
    select_random_featured_with(items, limit, &mut rand::thread_rng())
}

/// Randomized featured selection with a caller-supplied RNG.
///
/// Draws an oversampled pool of the top `limit * 2` ranked items, shuffles
/// it uniformly, and returns the first `limit`. A pool smaller than `limit`
/// is returned whole. The RNG parameter exists so tests can seed a
/// [`rand::rngs::StdRng`] and get reproducible draws.
pub fn select_random_featured_with<R: Rng + ?Sized>(
    items: &[MenuItem],
    limit: usize,
    rng: &mut R,
) -> Vec<MenuItem> {
    let mut pool = select_featured(items, limit * 2);
    pool.shuffle(rng);
    pool.truncate(limit);
    pool
}
