pub use random::*;

mod random;

/// Source of uniform draws in `[0, 1)`, the only randomness the game consumes.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`, the floor of a scaled unit draw.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let draw = self.next_unit() * len as f64;
        // guards against a source returning exactly 1.0
        (draw as usize).min(len - 1)
    }
}

impl<S: UnitSource + ?Sized> UnitSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
