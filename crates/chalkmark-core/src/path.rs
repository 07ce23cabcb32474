//! Contour → path commands → SVG path data.

use crate::geom::{Contour, Point, Smoothing};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic curve: control point, end point.
    QuadTo(Point, Point),
    Close,
}

impl Contour {
    /// Path commands for the closed band: the outer edge forward, then the inner edge backward.
    ///
    /// An empty contour yields no commands.
    pub fn ops(&self) -> Vec<PathOp> {
        if self.is_empty() {
            return Vec::new();
        }
        match self.smoothing {
            Smoothing::Linear => linear_ops(&self.outer, &self.inner),
            Smoothing::QuadraticMidpoint => quadratic_ops(&self.outer, &self.inner),
        }
    }

    /// SVG `d` attribute for [`Contour::ops`]. Fill with `evenodd`.
    pub fn to_svg_path_data(&self) -> String {
        write_path_data(&self.ops())
    }
}

fn linear_ops(outer: &[Point], inner: &[Point]) -> Vec<PathOp> {
    let mut ops = Vec::with_capacity(outer.len() + inner.len() + 1);
    ops.push(PathOp::MoveTo(outer[0]));
    ops.extend(outer[1..].iter().map(|p| PathOp::LineTo(*p)));
    ops.extend(inner.iter().rev().map(|p| PathOp::LineTo(*p)));
    ops.push(PathOp::Close);
    ops
}

/// Curves through each interior vertex, ending on the midpoint to the next one.
fn push_midpoint_curves(ops: &mut Vec<PathOp>, pts: &[Point]) {
    for w in pts.windows(2) {
        ops.push(PathOp::QuadTo(w[0], w[0].lerp(w[1], 0.5)));
    }
}

fn quadratic_ops(top: &[Point], bottom: &[Point]) -> Vec<PathOp> {
    let mut ops = Vec::with_capacity(top.len() * 2 + 4);
    let bottom_rev: Vec<Point> = bottom.iter().rev().copied().collect();

    ops.push(PathOp::MoveTo(top[0]));
    push_midpoint_curves(&mut ops, &top[1..]);
    if top.len() > 1 {
        ops.push(PathOp::LineTo(top[top.len() - 1]));
    }
    ops.push(PathOp::LineTo(bottom_rev[0]));
    push_midpoint_curves(&mut ops, &bottom_rev[1..]);
    if bottom_rev.len() > 1 {
        ops.push(PathOp::LineTo(bottom_rev[bottom_rev.len() - 1]));
    }
    ops.push(PathOp::Close);
    ops
}

pub fn write_path_data(ops: &[PathOp]) -> String {
    let mut out = String::with_capacity(ops.len() * 20);
    for (idx, op) in ops.iter().enumerate() {
        if idx != 0 {
            out.push(' ');
        }
        match op {
            PathOp::MoveTo(p) => write_cmd(&mut out, 'M', &[*p]),
            PathOp::LineTo(p) => write_cmd(&mut out, 'L', &[*p]),
            PathOp::QuadTo(c, p) => write_cmd(&mut out, 'Q', &[*c, *p]),
            PathOp::Close => out.push('Z'),
        }
    }
    out
}

fn write_cmd(out: &mut String, cmd: char, pts: &[Point]) {
    out.push(cmd);
    for p in pts {
        out.push(' ');
        fmt_coord_into(out, p.x);
        out.push(' ');
        fmt_coord_into(out, p.y);
    }
}

/// Writes `v` rounded to 3 fractional digits, trailing zeros trimmed, never `-0`.
pub fn fmt_coord_into(out: &mut String, v: f64) {
    if !v.is_finite() || v.abs() < 0.0005 {
        out.push('0');
        return;
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        out.push('0');
        return;
    }
    let start = out.len();
    let _ = write!(out, "{r:.3}");
    while out.len() > start && out.ends_with('0') {
        out.pop();
    }
    if out.ends_with('.') {
        out.pop();
    }
}

pub fn fmt_coord(v: f64) -> String {
    let mut out = String::new();
    fmt_coord_into(&mut out, v);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(outer: &[(f64, f64)], inner: &[(f64, f64)]) -> Contour {
        let mut c = Contour::empty(Smoothing::Linear);
        for (o, i) in outer.iter().zip(inner) {
            c.push(Point::new(o.0, o.1), Point::new(i.0, i.1));
        }
        c
    }

    #[test]
    fn coordinates_are_trimmed_to_three_digits() {
        assert_eq!(fmt_coord(1.0), "1");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(2.50049), "2.5");
        assert_eq!(fmt_coord(-12.3456), "-12.346");
        assert_eq!(fmt_coord(f64::NAN), "0");
    }

    #[test]
    fn linear_band_walks_inner_edge_backwards() {
        let c = linear(&[(0.0, 0.0), (10.0, 0.0)], &[(0.0, 2.0), (10.0, 2.0)]);
        assert_eq!(c.to_svg_path_data(), "M 0 0 L 10 0 L 10 2 L 0 2 Z");
    }

    #[test]
    fn empty_contour_serializes_to_nothing() {
        assert!(Contour::empty(Smoothing::Linear).to_svg_path_data().is_empty());
        assert!(Contour::empty(Smoothing::QuadraticMidpoint).ops().is_empty());
    }

    #[test]
    fn quadratic_band_uses_midpoint_curves() {
        let mut c = Contour::empty(Smoothing::QuadraticMidpoint);
        for (x, y) in [(0.0, 0.0), (10.0, 2.0), (20.0, 0.0), (30.0, -2.0)] {
            c.push(Point::new(x, y), Point::new(x, y + 5.0));
        }
        let ops = c.ops();
        assert_eq!(ops[0], PathOp::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(
            ops[1],
            PathOp::QuadTo(Point::new(10.0, 2.0), Point::new(15.0, 1.0))
        );
        assert_eq!(ops[3], PathOp::LineTo(Point::new(30.0, -2.0)));
        assert_eq!(ops[4], PathOp::LineTo(Point::new(30.0, 3.0)));
        assert_eq!(ops.last(), Some(&PathOp::Close));
        let quads = ops
            .iter()
            .filter(|op| matches!(op, PathOp::QuadTo(..)))
            .count();
        assert_eq!(quads, 4);
    }
}
