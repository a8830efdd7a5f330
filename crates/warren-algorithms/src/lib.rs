//! Maze-generation algorithms for the Warren grid engine.
//!
//! Every algorithm is a pure function of a [`Grid`](warren_grid::Grid)
//! (mutating it through `connect`) and a caller-seeded RNG, so a fixed
//! seed reproduces a maze bit for bit. The [`Algorithm`] enum is the
//! name-keyed dispatch table: one closed list, no runtime registries.
//!
//! # Algorithms
//!
//! | name | strategy |
//! |------|----------|
//! | `aldous_broder` | random walk, link on first visit |
//! | `wilson` | loop-erased random walks |
//! | `hunt_kill` | walk until stuck, sorted rescan |
//! | `backtrack` | depth-first stack carve |
//! | `kruskal` | union-find over a shuffled edge pool, weave-aware |
//! | `simple_prim` / `true_prim` | frontier growth, uniform / weighted |
//! | `random_tree` … `median_tree` | the growing-tree family |
//! | `eller` | row-wise union-find |
//! | `fractal` | recursive region bisection |
//! | `binary` / `sidewinder` | rectangular row biases |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod eller;
pub mod fractal;
pub mod hunt;
pub mod kruskal;
pub mod prim;
pub mod rowwise;
pub mod walk;

pub use eller::eller;
pub use fractal::fractal;
pub use hunt::{backtrack, hunt_kill};
pub use kruskal::kruskal;
pub use prim::{growing_tree, simple_prim, true_prim, GrowthPolicy};
pub use rowwise::{binary, sidewinder};
pub use walk::{aldous_broder, wilson};

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use warren_grid::{Grid, GridError};

/// The closed set of maze-generation algorithms, used as a name-keyed
/// dispatch table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Random walk, linking on first visit ([`walk::aldous_broder`]).
    AldousBroder,
    /// Loop-erased random walks ([`walk::wilson`]).
    Wilson,
    /// Walk until stuck, then a sorted rescan ([`hunt::hunt_kill`]).
    HuntKill,
    /// Depth-first stack carve ([`hunt::backtrack`]).
    Backtrack,
    /// Union-find over a shuffled edge pool ([`kruskal::kruskal`]).
    Kruskal,
    /// Frontier growth, uniform pick ([`prim::simple_prim`]).
    SimplePrim,
    /// Frontier growth by random per-cell cost ([`prim::true_prim`]).
    TruePrim,
    /// Growing tree, random active cell.
    RandomTree,
    /// Growing tree, newest active cell.
    LastTree,
    /// Growing tree, coin flip between newest and random.
    HalfTree,
    /// Growing tree, oldest active cell.
    FirstTree,
    /// Growing tree, middle of the active list.
    MedianTree,
    /// Row-wise union-find ([`eller::eller`]).
    Eller,
    /// Recursive region bisection ([`fractal::fractal`]).
    Fractal,
    /// North-or-east bias ([`rowwise::binary`]).
    Binary,
    /// East runs closed by northward carves ([`rowwise::sidewinder`]).
    Sidewinder,
}

impl Algorithm {
    /// Every algorithm, in a fixed order.
    pub const ALL: [Algorithm; 16] = [
        Algorithm::AldousBroder,
        Algorithm::Wilson,
        Algorithm::HuntKill,
        Algorithm::Backtrack,
        Algorithm::Kruskal,
        Algorithm::SimplePrim,
        Algorithm::TruePrim,
        Algorithm::RandomTree,
        Algorithm::LastTree,
        Algorithm::HalfTree,
        Algorithm::FirstTree,
        Algorithm::MedianTree,
        Algorithm::Eller,
        Algorithm::Fractal,
        Algorithm::Binary,
        Algorithm::Sidewinder,
    ];

    /// The registry name of this algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AldousBroder => "aldous_broder",
            Algorithm::Wilson => "wilson",
            Algorithm::HuntKill => "hunt_kill",
            Algorithm::Backtrack => "backtrack",
            Algorithm::Kruskal => "kruskal",
            Algorithm::SimplePrim => "simple_prim",
            Algorithm::TruePrim => "true_prim",
            Algorithm::RandomTree => "random_tree",
            Algorithm::LastTree => "last_tree",
            Algorithm::HalfTree => "half_tree",
            Algorithm::FirstTree => "first_tree",
            Algorithm::MedianTree => "median_tree",
            Algorithm::Eller => "eller",
            Algorithm::Fractal => "fractal",
            Algorithm::Binary => "binary",
            Algorithm::Sidewinder => "sidewinder",
        }
    }

    /// Run this algorithm over `grid`, drawing every random choice from
    /// `rng`.
    ///
    /// # Errors
    ///
    /// Propagates [`GridError`] from the underlying carve — a shape or
    /// configuration bug, never a transient condition.
    pub fn carve<R: Rng>(self, grid: &mut Grid, rng: &mut R) -> Result<(), GridError> {
        match self {
            Algorithm::AldousBroder => walk::aldous_broder(grid, rng),
            Algorithm::Wilson => walk::wilson(grid, rng),
            Algorithm::HuntKill => hunt::hunt_kill(grid, rng),
            Algorithm::Backtrack => hunt::backtrack(grid, rng),
            Algorithm::Kruskal => kruskal::kruskal(grid, rng),
            Algorithm::SimplePrim => prim::simple_prim(grid, rng),
            Algorithm::TruePrim => prim::true_prim(grid, rng),
            Algorithm::RandomTree => prim::growing_tree(grid, GrowthPolicy::Random, rng),
            Algorithm::LastTree => prim::growing_tree(grid, GrowthPolicy::Newest, rng),
            Algorithm::HalfTree => prim::growing_tree(grid, GrowthPolicy::NewestOrRandom, rng),
            Algorithm::FirstTree => prim::growing_tree(grid, GrowthPolicy::Oldest, rng),
            Algorithm::MedianTree => prim::growing_tree(grid, GrowthPolicy::Median, rng),
            Algorithm::Eller => eller::eller(grid, rng),
            Algorithm::Fractal => fractal::fractal(grid, rng),
            Algorithm::Binary => rowwise::binary(grid, rng),
            Algorithm::Sidewinder => rowwise::sidewinder(grid, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized algorithm name.
#[derive(Debug, Clone)]
pub struct ParseAlgorithmError {
    name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm {:?}", self.name)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| ParseAlgorithmError { name: s.to_string() })
    }
}
