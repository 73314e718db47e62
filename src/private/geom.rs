use std::ops::Sub;

#[derive(PartialOrd, PartialEq, Copy, Clone, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(PartialOrd, PartialEq, Copy, Clone, Debug)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(PartialOrd, PartialEq, Copy, Clone, Debug)]
pub struct Line(pub Point, pub Point);

#[derive(PartialOrd, PartialEq, Copy, Clone, Debug)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

/// A closed polygon borrowed from an ordered sequence of vertices.
///
/// The last vertex connects back to the first, so a polygon with `n`
/// vertices always has `n` edges. A single vertex forms one degenerate
/// edge that starts and ends at the same place.
#[derive(Copy, Clone, Debug)]
pub struct Polygon<'a> {
    points: &'a [Point],
}

impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x: x, y: y }
    }

    pub fn into_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Truncates both coordinates toward zero, the way a pixel grid
    /// addresses a floating point position.
    pub fn to_pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Line {
    pub fn start(&self) -> Point {
        self.0
    }

    pub fn end(&self) -> Point {
        self.1
    }

    pub fn is_degenerate(&self) -> bool {
        self.0 == self.1
    }
}

impl Rect {
    pub fn from_points(p1: &Point, p2: &Point) -> Rect {
        let mut r = Rect::null_at(p1);
        r.expand_to_include(p2);
        r
    }

    pub fn null() -> Rect {
        let nan = ::std::f64::NAN;
        Rect {
            top_left: Point { x: nan, y: nan },
            bottom_right: Point { x: nan, y: nan },
        }
    }

    pub fn null_at(point: &Point) -> Rect {
        Rect {
            top_left: *point,
            bottom_right: *point,
        }
    }

    /// The square `[margin, size - margin]` on both axes.
    pub fn inset_square(size: f64, margin: f64) -> Rect {
        Rect::from_points(
            &Point { x: margin, y: margin },
            &Point { x: size - margin, y: size - margin },
        )
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    pub fn right(&self) -> f64 {
        self.bottom_right.x
    }

    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    pub fn bottom(&self) -> f64 {
        self.bottom_right.y
    }

    pub fn is_null(&self) -> bool {
        self.top_left.x.is_nan() ||
        self.top_left.y.is_nan() ||
        self.bottom_right.x.is_nan() ||
        self.bottom_right.y.is_nan()
    }

    pub fn expand_to_include(&mut self, point: &Point) {
        if point.x < self.top_left.x || self.top_left.x.is_nan() {
            self.top_left.x = point.x;
        }
        if point.y < self.top_left.y || self.top_left.y.is_nan() {
            self.top_left.y = point.y;
        }

        if point.x > self.bottom_right.x || self.bottom_right.x.is_nan() {
            self.bottom_right.x = point.x;
        }
        if point.y > self.bottom_right.y || self.bottom_right.y.is_nan() {
            self.bottom_right.y = point.y;
        }
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.top_left.x &&
        p.x <= self.bottom_right.x &&
        p.y >= self.top_left.y &&
        p.y <= self.bottom_right.y
    }
}

impl<'a> Polygon<'a> {
    pub fn new(points: &'a [Point]) -> Polygon<'a> {
        Polygon { points: points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.points[i]
    }

    /// Edge `i` runs from vertex `i` to vertex `(i + 1) mod n`.
    pub fn edge(&self, i: usize) -> Line {
        let n = self.points.len();
        Line(self.points[i], self.points[(i + 1) % n])
    }

    pub fn edges(&self) -> impl Iterator<Item = Line> + 'a {
        let this = *self;
        (0..self.points.len()).map(move |i| this.edge(i))
    }

    /// `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut bb = Rect::null();
        for p in self.points {
            bb.expand_to_include(p);
        }
        if bb.is_null() { None } else { Some(bb) }
    }
}
