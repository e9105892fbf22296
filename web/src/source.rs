use pairs_core::{SeededUnitSource, UnitSource};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Randomness behind the page's shuffles.
#[derive(Clone, Debug)]
pub(crate) enum PageSource {
    Seeded(SeededUnitSource),
    /// JavaScript's `Math.random`
    Browser,
}

impl PageSource {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        seed.map_or(Self::Browser, |seed| Self::Seeded(SeededUnitSource::new(seed)))
    }
}

impl UnitSource for PageSource {
    fn next_unit(&mut self) -> f64 {
        match self {
            Self::Seeded(source) => source.next_unit(),
            Self::Browser => js_sys::Math::random(),
        }
    }
}

/// Numeric seeds are used as-is, anything else is hashed.
pub(crate) fn seed_from_text(text: &str) -> u64 {
    text.parse().unwrap_or_else(|_| {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seed_is_kept() {
        assert_eq!(seed_from_text("1234"), 1234);
    }

    #[test]
    fn text_seed_is_stable() {
        assert_eq!(seed_from_text("fruit"), seed_from_text("fruit"));
        assert_ne!(seed_from_text("fruit"), seed_from_text("fruits"));
    }

    #[test]
    fn seeded_page_source_matches_core_source() {
        let mut page = PageSource::new(Some(5));
        let mut core = SeededUnitSource::new(5);
        for _ in 0..8 {
            assert_eq!(page.next_unit(), core.next_unit());
        }
    }
}
