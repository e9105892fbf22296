use ndarray::Array2;

use crate::*;

/// Arrangement of card types on the grid, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cards: Array2<CardType>,
}

impl Board {
    /// Fills the grid in row-major order by cycling through [`CardType::ALL`].
    pub fn new(config: GameConfig) -> Self {
        let (rows, cols) = config.size;
        let cards = Array2::from_shape_fn((rows.into(), cols.into()), |(row, col)| {
            CardType::ALL[(col + row * usize::from(cols)) % CardType::COUNT]
        });
        Self { cards }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cards.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cards.len().try_into().unwrap()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn card_at(&self, coords: Coord2) -> Result<CardType> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cards[coords.to_nd_index()])
    }

    /// How often each type occurs, indexed by [`CardType::ordinal`].
    pub fn type_counts(&self) -> [CellCount; CardType::COUNT] {
        let mut counts = [0; CardType::COUNT];
        for card in self.cards.iter() {
            counts[card.ordinal()] += 1;
        }
        counts
    }

    /// Row-major copy of the current layout.
    pub fn to_vec(&self) -> alloc::vec::Vec<CardType> {
        self.cards.iter().copied().collect()
    }

    /// Fisher-Yates over the flattened grid, drawing the swap partner from
    /// the whole index range on every step.
    pub fn shuffle<S: UnitSource>(&mut self, mut source: S) {
        let size = usize::from(self.total_cells());
        let (_, cols) = self.size();
        if size == 0 {
            return;
        }

        for i in 0..size {
            let j = source.next_index(size);
            let a = project(i as CellCount, cols);
            let b = project(j as CellCount, cols);
            self.cards.swap(a.to_nd_index(), b.to_nd_index());
        }
        log::debug!("shuffled {} cells", size);
    }
}
