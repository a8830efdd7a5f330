//! Preset composite surfaces built on multi-grid composition.
//!
//! Each builder returns a ready-to-carve [`Grid`] over an assembled
//! [`Composite`]: the two stitched boxes, the cube, the five
//! self-stitched square surfaces (cylinder, torus, Möbius strip, Klein
//! bottle, projective plane), the four-pointed star, the fat five-pointed
//! star, and the heart.

use crate::circle::{Polygon, Semicircle};
use crate::composite::{Composite, EdgeSpec, SubgridSpec};
use crate::error::GridError;
use crate::grid::Grid;
use crate::hex::Tri;
use crate::options::GridOptions;
use crate::placement::Placement;
use crate::rect::Rect;

fn stitch(target: &str, side: usize, flip: bool) -> Option<EdgeSpec> {
    Some(EdgeSpec::new(target, side, flip))
}

fn anchor(target: &str, side: usize, flip: bool) -> Option<EdgeSpec> {
    Some(EdgeSpec::aligned(target, side, flip))
}

/// Two `size × size` squares stitched side by side.
pub fn two_box(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    let composite = Composite::assemble(vec![
        (
            "A",
            SubgridSpec::new(
                Rect::new(size, size),
                vec![stitch("B", 2, true), None, None, None],
            ),
        ),
        (
            "B",
            SubgridSpec::new(
                Rect::new(size, size),
                vec![None, None, stitch("A", 0, true), None],
            )
            .placed(Placement::at(size as f64, 0.0)),
        ),
    ])?;
    Ok(Grid::new(composite, options))
}

/// Six `size × size` faces stitched into a cube.
///
/// The front face anchors the layout; the other faces solve their
/// placements from their neighbors, unfolding into a cross.
pub fn cube(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    let face = || Rect::new(size, size);
    let composite = Composite::assemble(vec![
        (
            "F",
            SubgridSpec::new(
                face(),
                vec![
                    stitch("R", 2, true),
                    stitch("U", 3, true),
                    stitch("L", 0, true),
                    stitch("D", 1, true),
                ],
            ),
        ),
        (
            "B",
            SubgridSpec::new(
                face(),
                vec![
                    stitch("R", 0, true),
                    anchor("D", 3, true),
                    stitch("L", 2, true),
                    stitch("U", 1, true),
                ],
            ),
        ),
        (
            "L",
            SubgridSpec::new(
                face(),
                vec![
                    anchor("F", 2, true),
                    stitch("U", 2, true),
                    stitch("B", 2, true),
                    stitch("D", 2, true),
                ],
            ),
        ),
        (
            "R",
            SubgridSpec::new(
                face(),
                vec![
                    stitch("B", 0, true),
                    stitch("U", 0, true),
                    anchor("F", 0, true),
                    stitch("D", 0, true),
                ],
            ),
        ),
        (
            "U",
            SubgridSpec::new(
                face(),
                vec![
                    stitch("R", 1, true),
                    stitch("B", 3, true),
                    stitch("L", 1, true),
                    anchor("F", 1, true),
                ],
            ),
        ),
        (
            "D",
            SubgridSpec::new(
                face(),
                vec![
                    stitch("R", 3, true),
                    anchor("F", 3, true),
                    stitch("L", 3, true),
                    stitch("B", 1, true),
                ],
            ),
        ),
    ])?;
    Ok(Grid::new(composite, options))
}

fn square_surface(
    size: i32,
    options: GridOptions,
    edges: [Option<(usize, bool)>; 4],
) -> Result<Grid, GridError> {
    let edges = edges
        .into_iter()
        .map(|slot| slot.map(|(side, flip)| EdgeSpec::new("A", side, flip)))
        .collect();
    let composite = Composite::assemble(vec![(
        "A",
        SubgridSpec::new(Rect::new(size, size), edges),
    )])?;
    Ok(Grid::new(composite, options))
}

/// A square with east and west glued: a cylinder.
pub fn cylinder(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    square_surface(
        size,
        options,
        [None, Some((3, true)), None, Some((1, true))],
    )
}

/// A square with both opposite edge pairs glued: a torus.
pub fn torus(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    square_surface(
        size,
        options,
        [
            Some((2, true)),
            Some((3, true)),
            Some((0, true)),
            Some((1, true)),
        ],
    )
}

/// A square glued top-to-bottom with a half-twist: a Möbius strip.
pub fn moebius(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    square_surface(
        size,
        options,
        [None, Some((3, false)), None, Some((1, false))],
    )
}

/// One straight gluing and one twisted gluing: a Klein bottle.
pub fn klein(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    square_surface(
        size,
        options,
        [
            Some((2, true)),
            Some((3, false)),
            Some((0, true)),
            Some((1, false)),
        ],
    )
}

/// Both gluings twisted: the projective plane.
pub fn projective_plane(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    square_surface(
        size,
        options,
        [
            Some((2, false)),
            Some((3, false)),
            Some((0, false)),
            Some((1, false)),
        ],
    )
}

/// A `2·size` square with a triangle on each side: a four-pointed star.
pub fn four_star(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    let outer_width = size * 2;
    let names: Vec<String> = (0..4).map(|i| i.to_string()).collect();
    let mut specs = vec![(
        "C",
        SubgridSpec::new(
            Rect::new(outer_width, outer_width),
            vec![
                stitch("0", 2, true),
                stitch("1", 2, true),
                stitch("2", 2, true),
                stitch("3", 2, true),
            ],
        )
        .placed(Placement::at(-f64::from(size), -f64::from(size))),
    )];
    for (i, name) in names.iter().enumerate() {
        specs.push((
            name.as_str(),
            SubgridSpec::new(
                Tri::new(outer_width),
                vec![None, None, stitch("C", i, true)],
            )
            .placed(Placement::rotated(
                -f64::from(size),
                f64::from(size),
                (i as f64) * 90.0 - 90.0,
            )),
        ));
    }
    let composite = Composite::assemble(specs)?;
    Ok(Grid::new(composite, options))
}

/// A pentagon with an aligned pentagon point on each side: a fat
/// five-pointed star.
pub fn fat_star(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    let names: Vec<String> = (0..5).map(|i| i.to_string()).collect();
    let mut specs = vec![(
        "C",
        SubgridSpec::new(
            Polygon::new(size, 5),
            vec![
                stitch("0", 0, true),
                stitch("1", 0, true),
                stitch("2", 0, true),
                stitch("3", 0, true),
                stitch("4", 0, true),
            ],
        )
        .placed(Placement::rotated(0.0, 0.0, 54.0)),
    )];
    for (i, name) in names.iter().enumerate() {
        specs.push((
            name.as_str(),
            SubgridSpec::new(
                Polygon::with_slices(size, 5, 1),
                vec![anchor("C", i, true)],
            ),
        ));
    }
    let composite = Composite::assemble(specs)?;
    Ok(Grid::new(composite, options))
}

/// A rotated square with a semicircle aligned onto each upper side: a
/// heart.
pub fn heart(size: i32, options: GridOptions) -> Result<Grid, GridError> {
    let composite = Composite::assemble(vec![
        (
            "C",
            SubgridSpec::new(
                Rect::new(size, size),
                vec![stitch("L", 0, true), stitch("R", 0, true), None, None],
            )
            .placed(Placement::rotated(0.0, 0.0, 45.0)),
        ),
        (
            "L",
            SubgridSpec::new(Semicircle::new(size), vec![anchor("C", 0, true)]),
        ),
        (
            "R",
            SubgridSpec::new(Semicircle::new(size), vec![anchor("C", 1, true)]),
        ),
    ])?;
    Ok(Grid::new(composite, options))
}
