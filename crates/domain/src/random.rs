use derive_more::From;

/// Integer driving every permutation of a generation call.
///
/// The generator state is the seed reduced modulo 2^32, so a seed and its offsets behave
/// identically across platforms.
#[derive(From, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct VariationSeed(i64);

impl VariationSeed {
    #[must_use]
    pub fn offset(self, delta: i64) -> Self {
        Self(self.0.wrapping_add(delta))
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn state(self) -> u32 {
        self.0 as u32
    }
}

/// Mulberry32 generator yielding floats in [0, 1).
#[derive(Debug, Clone)]
pub struct Random {
    state: u32,
}

impl Random {
    #[must_use]
    pub fn new(seed: VariationSeed) -> Self {
        Self {
            state: seed.state(),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r));
        r ^ (r >> 14)
    }

    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Picks an index in `0..=upper`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn index(&mut self, upper: usize) -> usize {
        (self.next_f64() * (upper + 1) as f64).floor() as usize
    }
}

impl Iterator for Random {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_f64())
    }
}

/// Fisher-Yates shuffle walking from the last index down to 1.
#[must_use]
pub fn shuffle<T>(mut items: Vec<T>, seed: VariationSeed) -> Vec<T> {
    let mut random = Random::new(seed);
    for i in (1..items.len()).rev() {
        let j = random.index(i);
        items.swap(i, j);
    }
    items
}

/// Shuffles with `seed` shifted by `delta`, or keeps the order when there is no seed.
#[must_use]
pub fn shuffle_if_seeded<T>(items: Vec<T>, seed: Option<VariationSeed>, delta: i64) -> Vec<T> {
    match seed {
        Some(seed) => shuffle(items, seed.offset(delta)),
        None => items,
    }
}
