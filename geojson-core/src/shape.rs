//! Renderer-agnostic drawable shapes.
//!
//! The geometry renderer produces these; the canvas consumes them. All
//! positions are in world coordinates.

use crate::{bounds::Bounds, style::Color, types::Coord};

/// A filled disc without outline.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Coord,
    pub radius: f64,
    pub fill: Color,
}

/// An open chain of straight segments.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<Coord>,
    pub stroke: Color,
    pub width: f64,
}

/// A closed outline, optionally filled.
///
/// `points` is the outer ring only and is not explicitly closed; the last
/// point connects back to the first when drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Coord>,
    pub fill: Option<Color>,
    pub stroke: Color,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl Circle {
    pub fn bounds(&self) -> Bounds {
        let r = Coord::splat(self.radius);
        Bounds::from_corners(self.center - r, self.center + r)
    }
}

impl Polyline {
    /// Consecutive point pairs, in input order.
    pub fn segments(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }
}

impl Polygon {
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }
}

impl Shape {
    /// World-space extent, or `None` for a shape without points.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Circle(c) => Some(c.bounds()),
            Shape::Polyline(l) => l.bounds(),
            Shape::Polygon(p) => p.bounds(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polyline> for Shape {
    fn from(l: Polyline) -> Self {
        Shape::Polyline(l)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::rgb;

    #[test]
    fn circle_bounds_include_radius() {
        let c = Circle {
            center: Coord::new(10.0, -2.0),
            radius: 3.0,
            fill: rgb(255, 0, 0),
        };
        let b = Shape::from(c).bounds().unwrap();

        assert_eq!(b.min, Coord::new(7.0, -5.0));
        assert_eq!(b.max, Coord::new(13.0, 1.0));
    }

    #[test]
    fn polyline_segments_follow_input_order() {
        let line = Polyline {
            points: vec![Coord::new(0.0, 0.0), Coord::new(1.0, 1.0), Coord::new(2.0, 0.0)],
            stroke: rgb(0, 0, 255),
            width: 3.0,
        };
        let segs: Vec<_> = line.segments().collect();

        assert_eq!(
            segs,
            vec![
                (Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)),
                (Coord::new(1.0, 1.0), Coord::new(2.0, 0.0)),
            ]
        );
    }

    #[test]
    fn empty_polygon_has_no_bounds() {
        let p = Polygon {
            points: Vec::new(),
            fill: None,
            stroke: rgb(0, 255, 0),
            width: 0.2,
        };
        assert!(Shape::from(p).bounds().is_none());
    }
}
