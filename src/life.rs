use rand::Rng;
use std::collections::{HashMap, HashSet};

/// One cell on the unbounded plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl CellCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The eight Moore neighbors, excluding the cell itself.
    pub fn neighbors(self) -> impl Iterator<Item = CellCoord> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| CellCoord::new(self.x + dx, self.y + dy))
    }
}

/// How many candidate cells a tap may ignite.
const CLUSTER_MIN_CELLS: usize = 1;
const CLUSTER_MAX_CELLS: usize = 12;
/// Per-axis offset window around the tapped cell.
const CLUSTER_SPREAD: i32 = 2;

/// One generation of the automaton.
///
/// The plane is unbounded; only alive cells are stored. The map's key set is
/// the alive set, and each entry's value is the number of consecutive
/// generations that cell has been alive (a newborn has age 0). A cell that
/// dies loses its entry, so a later rebirth restarts at 0.
///
/// Every mutating operation returns a fresh `LifeState` and leaves `self`
/// untouched, so a holder can publish snapshots by plain replacement while
/// readers keep iterating the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifeState {
    cells: HashMap<CellCoord, u32>,
}

impl LifeState {
    /// A generation with no alive cells.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seeds the square `|x| <= radius`, `|y| <= radius`, making each cell
    /// alive independently with probability `density`. All seeded cells have
    /// age 0.
    ///
    /// Panics if `radius` is negative or `density` is outside `[0, 1]`.
    pub fn random_field(radius: i32, density: f64, rng: &mut impl Rng) -> Self {
        assert!(radius >= 0, "field radius must be non-negative");
        assert!(
            (0.0..=1.0).contains(&density),
            "field density must lie in [0, 1]"
        );

        let mut cells = HashMap::new();
        for x in -radius..=radius {
            for y in -radius..=radius {
                if rng.gen_bool(density) {
                    cells.insert(CellCoord::new(x, y), 0);
                }
            }
        }
        Self { cells }
    }

    /// Alive coordinates, in no particular order.
    pub fn alive_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.keys().copied()
    }

    pub fn is_alive(&self, coord: CellCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Consecutive generations `coord` has been alive.
    ///
    /// Panics if `coord` is dead; callers iterate `alive_cells` first.
    pub fn age_of(&self, coord: CellCoord) -> u32 {
        match self.cells.get(&coord) {
            Some(&age) => age,
            None => panic!("age_of called for dead cell ({}, {})", coord.x, coord.y),
        }
    }

    /// Computes the next generation (B3/S23).
    ///
    /// Only cells alive now or adjacent to one can be alive next generation,
    /// so the rule is evaluated over that candidate set alone rather than any
    /// notion of a full grid.
    pub fn advance(&self) -> Self {
        let mut candidates: HashSet<CellCoord> = HashSet::with_capacity(self.cells.len() * 9);
        for &cell in self.cells.keys() {
            candidates.insert(cell);
            candidates.extend(cell.neighbors());
        }

        let mut next = HashMap::new();
        for &cell in &candidates {
            let live_neighbors = cell
                .neighbors()
                .filter(|n| self.cells.contains_key(n))
                .count();
            match (self.cells.get(&cell), live_neighbors) {
                (Some(&age), 2 | 3) => {
                    next.insert(cell, age + 1);
                }
                (None, 3) => {
                    next.insert(cell, 0);
                }
                _ => {}
            }
        }
        Self { cells: next }
    }

    /// Makes every given coordinate alive. Newly alive cells get age 0;
    /// coordinates that were already alive keep their age, so repeated or
    /// overlapping activation is harmless.
    pub fn activate(&self, coords: impl IntoIterator<Item = CellCoord>) -> Self {
        let mut cells = self.cells.clone();
        for coord in coords {
            cells.entry(coord).or_insert(0);
        }
        Self { cells }
    }

    /// Ignites a small random cluster around `center`: a random number of
    /// candidate cells, each offset per axis by at most `CLUSTER_SPREAD`.
    /// Candidates may repeat or already be alive; `activate` absorbs that.
    pub fn activate_random_cluster(&self, center: CellCoord, rng: &mut impl Rng) -> Self {
        let count = rng.gen_range(CLUSTER_MIN_CELLS..=CLUSTER_MAX_CELLS);
        let coords = (0..count).map(|_| {
            CellCoord::new(
                center.x + rng.gen_range(-CLUSTER_SPREAD..=CLUSTER_SPREAD),
                center.y + rng.gen_range(-CLUSTER_SPREAD..=CLUSTER_SPREAD),
            )
        });
        self.activate(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c(x: i32, y: i32) -> CellCoord {
        CellCoord::new(x, y)
    }

    fn state_of(cells: &[(i32, i32)]) -> LifeState {
        LifeState::empty().activate(cells.iter().map(|&(x, y)| c(x, y)))
    }

    #[test]
    fn blinker_flips_and_tracks_age() {
        let vertical = state_of(&[(0, -1), (0, 0), (0, 1)]);
        let next = vertical.advance();

        assert_eq!(next.population(), 3);
        assert!(next.is_alive(c(-1, 0)));
        assert!(next.is_alive(c(0, 0)));
        assert!(next.is_alive(c(1, 0)));

        // The center survived; the tips are newborns.
        assert_eq!(next.age_of(c(0, 0)), 1);
        assert_eq!(next.age_of(c(-1, 0)), 0);
        assert_eq!(next.age_of(c(1, 0)), 0);
    }

    #[test]
    fn block_is_still_life_and_ages() {
        let block = state_of(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let aged = block.advance().advance();

        assert_eq!(aged.population(), 4);
        for cell in aged.alive_cells() {
            assert_eq!(aged.age_of(cell), 2);
        }
    }

    #[test]
    fn birth_requires_exactly_three_neighbors() {
        // Two diagonal neighbors of the origin: nothing is born, and both
        // lonely cells die.
        let two = state_of(&[(0, 1), (1, 0)]);
        assert!(two.advance().is_empty());

        // Three neighbors: the origin is born at age 0 while the survivors age.
        let three = state_of(&[(0, 1), (1, 0), (1, 1)]);
        let next = three.advance();
        assert_eq!(next.population(), 4);
        assert_eq!(next.age_of(c(0, 0)), 0);
        assert_eq!(next.age_of(c(1, 1)), 1);
    }

    #[test]
    fn lonely_cell_dies() {
        let single = state_of(&[(5, -7)]);
        assert!(single.advance().is_empty());
    }

    #[test]
    fn overcrowded_cell_dies() {
        // Plus shape: the center has four neighbors.
        let plus = state_of(&[(0, 0), (0, 1), (0, -1), (1, 0), (-1, 0)]);
        assert!(!plus.advance().is_alive(c(0, 0)));
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(LifeState::empty().advance(), LifeState::empty());
    }

    #[test]
    fn advance_is_deterministic() {
        let a = state_of(&[(0, 0), (1, 0), (2, 0), (2, 1), (1, 2)]);
        let b = a.clone();
        assert_eq!(a.advance(), b.advance());
    }

    #[test]
    fn reactivation_keeps_existing_age() {
        let block = state_of(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let aged = block.advance().advance();

        let re = aged.activate([c(0, 0)]);
        assert_eq!(re.population(), 4);
        assert_eq!(re.age_of(c(0, 0)), 2);
    }

    #[test]
    fn rebirth_restarts_age_at_zero() {
        // A blinker that has been oscillating for a while: the tips die on
        // the next flip and are reborn on the one after.
        let mut cells = HashMap::new();
        for coord in [c(0, -1), c(0, 0), c(0, 1)] {
            cells.insert(coord, 4);
        }
        let vertical = LifeState { cells };

        let horizontal = vertical.advance();
        assert!(!horizontal.is_alive(c(0, 1)));

        let vertical_again = horizontal.advance();
        assert_eq!(vertical_again.age_of(c(0, 1)), 0);
        assert_eq!(vertical_again.age_of(c(0, 0)), 6);
    }

    #[test]
    #[should_panic(expected = "dead cell")]
    fn age_of_dead_cell_panics() {
        LifeState::empty().age_of(c(0, 0));
    }

    #[test]
    fn random_field_respects_radius_and_density() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = LifeState::random_field(20, 0.1, &mut rng);

        for cell in field.alive_cells() {
            assert!(cell.x.abs() <= 20 && cell.y.abs() <= 20);
            assert_eq!(field.age_of(cell), 0);
        }

        // Expected population is 0.1 * 41^2 ~ 168; allow generous variance.
        let pop = field.population();
        assert!((80..280).contains(&pop), "population {pop} out of band");
    }

    #[test]
    fn random_field_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(LifeState::random_field(10, 0.0, &mut rng).is_empty());

        let full = LifeState::random_field(0, 1.0, &mut rng);
        assert_eq!(full.population(), 1);
        assert!(full.is_alive(c(0, 0)));
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn random_field_rejects_negative_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        LifeState::random_field(-1, 0.5, &mut rng);
    }

    #[test]
    #[should_panic(expected = "[0, 1]")]
    fn random_field_rejects_bad_density() {
        let mut rng = StdRng::seed_from_u64(1);
        LifeState::random_field(5, 1.5, &mut rng);
    }

    #[test]
    fn cluster_lands_near_center() {
        let mut rng = StdRng::seed_from_u64(99);
        let center = c(10, -4);

        for _ in 0..50 {
            let lit = LifeState::empty().activate_random_cluster(center, &mut rng);
            assert!(!lit.is_empty());
            assert!(lit.population() <= 12);
            for cell in lit.alive_cells() {
                assert!((cell.x - center.x).abs() <= 2);
                assert!((cell.y - center.y).abs() <= 2);
            }
        }
    }

    #[test]
    fn cluster_preserves_existing_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let block = state_of(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let aged = block.advance();

        let lit = aged.activate_random_cluster(c(100, 100), &mut rng);
        for cell in aged.alive_cells() {
            assert!(lit.is_alive(cell));
            assert_eq!(lit.age_of(cell), 1);
        }
    }
}
