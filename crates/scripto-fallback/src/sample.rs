use rand::Rng;
use rand::seq::SliceRandom;

/// Uniform pick from a template pool. Empty pools yield an empty string.
pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    if items.is_empty() {
        return "";
    }
    let idx = rng.random_range(0..items.len());
    items.get(idx).copied().unwrap_or_default()
}

/// `count` distinct items, selected by a full Fisher-Yates shuffle and then
/// truncated, so no position in `items` is favoured.
pub(crate) fn sample<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], count: usize) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
