use std::ops::Neg;

use rand::Rng;
use Dir::*;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    D,
    L,
    R,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            D => U,
            L => R,
            R => L,
        }
    }
}

impl Dir {
    pub const ALL: [Self; 4] = [U, D, L, R];

    /// Unit step in cells, y grows downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            U => (0, -1),
            D => (0, 1),
            L => (-1, 0),
            R => (1, 0),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[test]
fn test_reverse() {
    for (dir, reverse) in [(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, reverse);
        assert_eq!(-(-dir), dir);
    }
}

#[test]
fn test_delta_cancels_with_reverse() {
    for dir in Dir::ALL {
        let (dx, dy) = dir.delta();
        let (rx, ry) = (-dir).delta();
        assert_eq!((dx + rx, dy + ry), (0, 0), "{:?}", dir);
        assert_eq!(dx.abs() + dy.abs(), 1);
    }
}

#[test]
fn test_random_covers_all_dirs() {
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    let mut rng = StdRng::seed_from_u64(7);
    let seen: HashSet<_> = (0..200).map(|_| Dir::random(&mut rng)).collect();
    assert_eq!(seen.len(), 4);
}
