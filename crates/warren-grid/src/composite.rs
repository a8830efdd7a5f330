//! Multi-grid composition: several lattices stitched into one topology.
//!
//! Sub-grids are declared by name with per-edge correspondences. Assembly
//! instantiates every sub-grid into one shared address space (positions
//! carry a [`GridTag`]), records a boundary remap for each declared edge
//! pair, and solves geometric placement for sub-grids declared relative
//! to a neighbor. The result is itself a [`Lattice`], so generation and
//! analysis never know they are running on a composite.

use crate::error::GridError;
use crate::lattice::{Adjacency, Edge, Lattice};
use crate::placement::{Placement, Point};
use indexmap::{IndexMap, IndexSet};
use warren_core::{GridTag, Position};

/// One declared correspondence from a sub-grid edge to a target grid's
/// edge.
#[derive(Clone, Debug)]
pub struct EdgeSpec {
    /// Name of the target sub-grid (may be the declaring grid itself for
    /// self-stitched surfaces like the torus).
    pub target: String,
    /// Edge index on the target grid.
    pub side: usize,
    /// Reverse the target boundary sequence before pairing. With every
    /// shape counterclockwise, `true` is the untwisted gluing; `false`
    /// introduces a half-twist (Möbius strips, Klein bottles).
    pub flip: bool,
    /// Solve this grid's placement from the target edge instead of using
    /// a declared placement.
    pub align: bool,
}

impl EdgeSpec {
    /// A plain stitching correspondence.
    pub fn new(target: &str, side: usize, flip: bool) -> Self {
        Self {
            target: target.to_string(),
            side,
            flip,
            align: false,
        }
    }

    /// A stitching correspondence that also anchors this grid's placement.
    pub fn aligned(target: &str, side: usize, flip: bool) -> Self {
        Self {
            align: true,
            ..Self::new(target, side, flip)
        }
    }
}

/// One sub-grid of a composite: its shape, its edge correspondences
/// (one slot per lattice edge, `None` for unstitched edges), and an
/// optional declared placement.
pub struct SubgridSpec {
    lattice: Box<dyn Lattice>,
    edges: Vec<Option<EdgeSpec>>,
    placement: Option<Placement>,
}

impl SubgridSpec {
    /// A sub-grid spec with default placement.
    pub fn new(lattice: impl Lattice + 'static, edges: Vec<Option<EdgeSpec>>) -> Self {
        Self {
            lattice: Box::new(lattice),
            edges,
            placement: None,
        }
    }

    /// Declare this sub-grid's placement explicitly.
    pub fn placed(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }
}

struct Sub {
    lattice: Box<dyn Lattice>,
    placement: Placement,
}

/// A composite lattice assembled from named sub-grids.
pub struct Composite {
    subs: IndexMap<GridTag, Sub>,
    edge_map: IndexMap<Position, Position>,
}

impl Composite {
    /// Assemble named sub-grids into one topology.
    ///
    /// # Errors
    ///
    /// [`GridError::BoundaryMismatch`] when a spec's edge list disagrees
    /// with its lattice, names an unknown target grid or side, or pairs
    /// boundaries of different lengths. [`GridError::UnalignableGraph`]
    /// when alignment dependencies never reach an anchored grid.
    pub fn assemble(specs: Vec<(&str, SubgridSpec)>) -> Result<Self, GridError> {
        let mut edge_map: IndexMap<Position, Position> = IndexMap::new();

        for (name, spec) in &specs {
            let tag = GridTag::new(name);
            let lattice_edges = spec.lattice.edges();
            if spec.edges.len() != lattice_edges.len() {
                return Err(GridError::BoundaryMismatch {
                    reason: format!(
                        "grid {name}: spec lists {} edges but the shape has {}",
                        spec.edges.len(),
                        lattice_edges.len()
                    ),
                });
            }
            for (index, edge_spec) in spec.edges.iter().enumerate() {
                let Some(edge_spec) = edge_spec else { continue };
                let Some((_, target_spec)) = specs
                    .iter()
                    .find(|(other, _)| *other == edge_spec.target.as_str())
                else {
                    return Err(GridError::BoundaryMismatch {
                        reason: format!(
                            "grid {name} edge {index}: unknown target grid {:?}",
                            edge_spec.target
                        ),
                    });
                };
                let target_edges = target_spec.lattice.edges();
                let Some(target_edge) = target_edges.get(edge_spec.side) else {
                    return Err(GridError::BoundaryMismatch {
                        reason: format!(
                            "grid {name} edge {index}: target {} has no edge {}",
                            edge_spec.target, edge_spec.side
                        ),
                    });
                };
                let target_tag = GridTag::new(&edge_spec.target);
                let source_outer: Vec<Position> = lattice_edges[index]
                    .outer
                    .iter()
                    .map(|p| p.tagged(tag.clone()))
                    .collect();
                let mut target_inner: Vec<Position> = target_edge
                    .inner
                    .iter()
                    .map(|p| p.tagged(target_tag.clone()))
                    .collect();
                if edge_spec.flip {
                    target_inner.reverse();
                }
                if source_outer.len() != target_inner.len() {
                    return Err(GridError::BoundaryMismatch {
                        reason: format!(
                            "grid {name} edge {index} ({} cells) vs {} edge {} ({} cells)",
                            source_outer.len(),
                            edge_spec.target,
                            edge_spec.side,
                            target_inner.len()
                        ),
                    });
                }
                for (source, target) in source_outer.into_iter().zip(target_inner) {
                    edge_map.insert(source, target);
                }
            }
        }

        let placements = Self::solve_placements(&specs)?;

        let mut subs = IndexMap::new();
        for (name, spec) in specs {
            let placement = placements.get(name).copied().unwrap_or_default();
            subs.insert(
                GridTag::new(name),
                Sub {
                    lattice: spec.lattice,
                    placement,
                },
            );
        }
        let composite = Self { subs, edge_map };
        debug_assert!(
            composite.remap_is_boundary_only(),
            "edge remap must only redirect boundary lookups"
        );
        Ok(composite)
    }

    /// Resolve placements transitively: anchored grids use their declared
    /// placement; grids with an align edge are solved once their target
    /// is placed — rotation from the angle between the boundary segments,
    /// scale from the length ratio, translation mapping the candidate
    /// segment onto the target segment (reversed, since counterclockwise
    /// polygons traverse a shared edge in opposite directions).
    fn solve_placements(
        specs: &[(&str, SubgridSpec)],
    ) -> Result<IndexMap<String, Placement>, GridError> {
        let mut placements: IndexMap<String, Placement> = IndexMap::new();
        let mut pending: Vec<usize> = Vec::new();
        for (index, (name, spec)) in specs.iter().enumerate() {
            if spec.edges.iter().flatten().any(|e| e.align) {
                pending.push(index);
            } else {
                placements.insert((*name).to_string(), spec.placement.unwrap_or_default());
            }
        }
        while !pending.is_empty() {
            let mut progress = false;
            let mut still_pending = Vec::new();
            for &index in &pending {
                let (name, spec) = &specs[index];
                let found = spec
                    .edges
                    .iter()
                    .enumerate()
                    .find_map(|(k, e)| e.as_ref().and_then(|e| e.align.then_some((k, e))));
                let Some((edge_index, edge_spec)) = found else {
                    still_pending.push(index);
                    continue;
                };
                let Some(target_placement) = placements.get(edge_spec.target.as_str()).copied()
                else {
                    still_pending.push(index);
                    continue;
                };
                let Some((_, target_spec)) = specs
                    .iter()
                    .find(|(other, _)| *other == edge_spec.target.as_str())
                else {
                    still_pending.push(index);
                    continue;
                };
                let [t0, t1] = target_spec
                    .lattice
                    .points_for_edge(edge_spec.side)
                    .map(|p| target_placement.transform(p));
                let [g0, g1] = spec.lattice.points_for_edge(edge_index);
                let target_vec = t0 - t1;
                let own_vec = g1 - g0;
                if target_vec.norm() == 0.0 || own_vec.norm() == 0.0 {
                    return Err(GridError::UnalignableGraph {
                        unaligned: vec![(*name).to_string()],
                    });
                }
                let scale = target_vec.norm() / own_vec.norm();
                let rotation = target_vec.angle() - own_vec.angle();
                let location = t1.rotated(-rotation) - g0.scaled(scale);
                placements.insert(
                    (*name).to_string(),
                    Placement {
                        location,
                        rotation,
                        scale,
                    },
                );
                progress = true;
            }
            if !progress {
                let unaligned = still_pending
                    .iter()
                    .map(|&i| specs[i].0.to_string())
                    .collect();
                return Err(GridError::UnalignableGraph { unaligned });
            }
            pending = still_pending;
        }
        Ok(placements)
    }

    /// The resolved placement of a sub-grid.
    pub fn placement(&self, name: &str) -> Option<&Placement> {
        self.subs.get(&GridTag::new(name)).map(|sub| &sub.placement)
    }

    /// The boundary remap table.
    pub fn edge_map(&self) -> &IndexMap<Position, Position> {
        &self.edge_map
    }

    /// Names of the sub-grids in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &GridTag> {
        self.subs.keys()
    }

    fn remap_is_boundary_only(&self) -> bool {
        let cells: IndexSet<Position> = self.positions().into_iter().collect();
        self.edge_map.keys().all(|k| !cells.contains(k))
            && self.edge_map.values().all(|v| cells.contains(v))
    }
}

impl Lattice for Composite {
    fn positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for (tag, sub) in &self.subs {
            for position in sub.lattice.positions() {
                positions.push(position.tagged(tag.clone()));
            }
        }
        positions
    }

    fn pos_adjacents(&self, start: &Position) -> Adjacency {
        let Some(tag) = start.grid() else {
            return Adjacency::new();
        };
        let Some(sub) = self.subs.get(tag) else {
            return Adjacency::new();
        };
        sub.lattice
            .pos_adjacents(&start.untagged())
            .into_iter()
            .map(|p| {
                let tagged = p.tagged(tag.clone());
                self.edge_map.get(&tagged).cloned().unwrap_or(tagged)
            })
            .collect()
    }

    fn edges(&self) -> Vec<Edge> {
        Vec::new()
    }

    fn external_points(&self) -> Vec<Point> {
        self.subs
            .values()
            .flat_map(|sub| {
                sub.lattice
                    .external_points()
                    .into_iter()
                    .map(|p| sub.placement.transform(p))
            })
            .collect()
    }

    fn link_pos_hint(&self, first: &Position, second: &Position) -> Option<Position> {
        let tag = first.grid()?;
        if second.grid() != Some(tag) {
            return None;
        }
        let sub = self.subs.get(tag)?;
        sub.lattice
            .link_pos_hint(&first.untagged(), &second.untagged())
            .map(|p| p.tagged(tag.clone()))
    }
}
