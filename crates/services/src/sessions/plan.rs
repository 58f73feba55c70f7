use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

/// Random question order over a catalog of `len` entries.
#[must_use]
pub fn shuffled_order(len: usize) -> Vec<usize> {
    shuffled_order_with(len, &mut rng())
}

pub(crate) fn shuffled_order_with<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.as_mut_slice().shuffle(rng);
    order
}
