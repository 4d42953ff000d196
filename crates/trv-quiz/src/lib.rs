//! Quiz engine primitives for Trivia Night.
//!
//! This crate provides the pure logic behind the question listings and the
//! quiz play loop: fixed-size pagination and uniform random selection over an
//! eligible pool. It performs no I/O; callers fetch the rows and pass them in.

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of questions served per listing page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice one page out of an ordered sequence.
///
/// Pages are 1-based: page 1 covers `items[0..page_size]`. The slice is
/// clamped to the sequence bounds, so a page past the end (or page 0, which
/// has no 1-based meaning) yields an empty slice. Input order is preserved;
/// whether an empty page is an error is the caller's decision.
///
/// # Examples
/// ```
/// let items = [1, 2, 3, 4, 5];
/// assert_eq!(trv_quiz::paginate(&items, 2, 2), &[3, 4]);
/// assert_eq!(trv_quiz::paginate(&items, 3, 2), &[5]);
/// assert!(trv_quiz::paginate(&items, 4, 2).is_empty());
/// ```
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(prev_pages) = page.checked_sub(1) else {
        return &[];
    };
    let Some(start) = prev_pages.checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + page_size, items.len());
    &items[start..end]
}

/// Number of pages needed to show `total` items at `page_size` per page.
pub const fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Pick one element uniformly at random, or `None` when the pool is empty.
///
/// Every element has equal selection probability regardless of position. The
/// RNG is injected so production can use `rand::thread_rng()` while tests
/// drive a seeded generator.
pub fn pick_uniform<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
