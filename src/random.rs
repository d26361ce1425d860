use rand::Rng;

/// A uniform source of random indices that generators draw from.
///
/// Every `rand::Rng` is a `RandomSource`, so a seeded `XorShiftRng` gives reproducible
/// mazes and `rand::thread_rng()` gives fresh ones.
pub trait RandomSource {
    /// A uniformly distributed index in `0..bound`. `bound` is never zero.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn index_below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Fisher-Yates shuffle in place.
///
/// Walks a counter down from the slice length, swapping the last unshuffled slot with a
/// random slot at or before it.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut counter = items.len();
    while counter > 0 {
        let index = rng.index_below(counter);
        counter -= 1;
        items.swap(counter, index);
    }
}
