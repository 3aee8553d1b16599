//! 2D recursive-subdivision patterns.
//!
//! Each pattern starts from a fixed seed layout and subdivides every
//! triangle and square `depth` times, emitting a flat list of leaf-triangle
//! corners. The point list is recomputed from scratch on every call; the
//! caller re-uploads it when depth or kind changes.

use glam::Vec2;

/// Pattern seeds span `[-SCALE, SCALE]` so a twisted render stays inside
/// clip space.
const SCALE: f32 = 0.7;

/// The selectable seed layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    Triangle,
    Square,
    Star,
    Flower,
}

/// Generates the leaf triangles for `kind` at the given subdivision depth.
///
/// Every three consecutive points form one triangle. Depth 0 emits the seed
/// layout itself; each additional level quarters every triangle and square.
pub fn points(kind: PatternKind, depth: u32) -> Vec<Vec2> {
    let mut out = Vec::new();
    match kind {
        PatternKind::Triangle => triangle_seed(&mut out, depth),
        PatternKind::Square => square_seed(&mut out, depth),
        PatternKind::Star => star_seed(&mut out, depth),
        PatternKind::Flower => flower_seed(&mut out, depth),
    }
    out
}

fn triangle_seed(out: &mut Vec<Vec2>, depth: u32) {
    let l = SCALE;
    divide_triangle(
        out,
        Vec2::new(-l, -l),
        Vec2::new(0.0, l),
        Vec2::new(l, -l),
        depth,
    );
}

fn square_seed(out: &mut Vec<Vec2>, depth: u32) {
    let l = SCALE;
    divide_square(
        out,
        Vec2::new(-l, -l),
        Vec2::new(-l, l),
        Vec2::new(l, l),
        Vec2::new(l, -l),
        depth,
    );
}

/// Four points on the axes at `l1` and four diagonal points at `l2` form a
/// four-pointed star: one triangle per spike plus a central square.
fn star_seed(out: &mut Vec<Vec2>, depth: u32) {
    let l1 = SCALE;
    let l2 = 0.25 * SCALE;
    let a = Vec2::new(-l1, 0.0);
    let b = Vec2::new(-l2, -l2);
    let c = Vec2::new(0.0, -l1);
    let d = Vec2::new(l2, -l2);
    let e = Vec2::new(l1, 0.0);
    let f = Vec2::new(l2, l2);
    let g = Vec2::new(0.0, l1);
    let h = Vec2::new(-l2, l2);

    divide_triangle(out, a, b, h, depth);
    divide_triangle(out, b, c, d, depth);
    divide_triangle(out, d, e, f, depth);
    divide_triangle(out, h, f, g, depth);
    divide_square(out, b, d, f, h, depth);
}

/// Eight petal triangles around four inner squares.
fn flower_seed(out: &mut Vec<Vec2>, depth: u32) {
    let l1 = SCALE;
    let l2 = 0.4 * SCALE;
    let l3 = 0.6 * SCALE;
    let l4 = 0.25 * SCALE;

    let petals = [
        [Vec2::new(-l1, -l2), Vec2::new(-l3, -l3), Vec2::new(-l2, 0.0)],
        [Vec2::new(-l3, -l3), Vec2::new(-l2, -l1), Vec2::new(0.0, -l2)],
        [Vec2::new(0.0, -l2), Vec2::new(l2, -l1), Vec2::new(l3, -l3)],
        [Vec2::new(l3, -l3), Vec2::new(l1, -l2), Vec2::new(l2, 0.0)],
        [Vec2::new(l2, 0.0), Vec2::new(l1, l2), Vec2::new(l3, l3)],
        [Vec2::new(l3, l3), Vec2::new(l2, l1), Vec2::new(0.0, l2)],
        [Vec2::new(0.0, l2), Vec2::new(-l2, l1), Vec2::new(-l3, l3)],
        [Vec2::new(-l3, l3), Vec2::new(-l1, l2), Vec2::new(-l2, 0.0)],
    ];
    let cores = [
        [
            Vec2::new(-l2, 0.0),
            Vec2::new(0.0, -l2),
            Vec2::new(0.0, -l4),
            Vec2::new(-l4, 0.0),
        ],
        [
            Vec2::new(0.0, -l2),
            Vec2::new(l2, 0.0),
            Vec2::new(l4, 0.0),
            Vec2::new(0.0, -l4),
        ],
        [
            Vec2::new(l2, 0.0),
            Vec2::new(0.0, l2),
            Vec2::new(0.0, l4),
            Vec2::new(l4, 0.0),
        ],
        [
            Vec2::new(0.0, l2),
            Vec2::new(-l2, 0.0),
            Vec2::new(-l4, 0.0),
            Vec2::new(0.0, l4),
        ],
    ];

    for [a, b, c] in petals {
        divide_triangle(out, a, b, c, depth);
    }
    for [a, b, c, d] in cores {
        divide_square(out, a, b, c, d, depth);
    }
}

/// Symmetric midpoint so the same edge split from either endpoint order
/// yields bit-identical vertices.
fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Quarters a triangle `depth` times, keeping the parent corners in the
/// leaves (no gasket holes: the center triangle is subdivided too).
fn divide_triangle(out: &mut Vec<Vec2>, a: Vec2, b: Vec2, c: Vec2, depth: u32) {
    if depth == 0 {
        out.extend([a, b, c]);
        return;
    }
    let ab = midpoint(a, b);
    let ac = midpoint(a, c);
    let bc = midpoint(b, c);

    divide_triangle(out, a, ab, ac, depth - 1);
    divide_triangle(out, c, ac, bc, depth - 1);
    divide_triangle(out, b, bc, ab, depth - 1);
    divide_triangle(out, ab, bc, ac, depth - 1);
}

/// Quarters a quad around its center; a leaf emits the two triangles
/// `(a, b, d)` and `(b, c, d)`.
fn divide_square(out: &mut Vec<Vec2>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, depth: u32) {
    if depth == 0 {
        out.extend([a, b, d, b, c, d]);
        return;
    }
    let ab = midpoint(a, b);
    let ad = midpoint(a, d);
    let cb = midpoint(c, b);
    let cd = midpoint(c, d);
    let mid = midpoint(ab, cd);

    divide_square(out, a, ab, mid, ad, depth - 1);
    divide_square(out, ab, b, cb, mid, depth - 1);
    divide_square(out, mid, cb, c, cd, depth - 1);
    divide_square(out, ad, mid, cd, d, depth - 1);
}
