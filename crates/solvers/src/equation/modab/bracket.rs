/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero, of either sign).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// An evaluated abscissa and its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The residual at x.
    pub residual: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }

    /// Returns the sign of the residual.
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::of(self.residual)
    }
}

/// Which end of the bracket an update touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum End {
    Left,
    Right,
}

/// The caller's bracket ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Orientation {
    Forward,
    Reversed,
}

impl Orientation {
    /// Sorts bracket endpoints, remembering whether they were swapped.
    pub(super) fn sort(bracket: [f64; 2]) -> ([f64; 2], Self) {
        let [a, b] = bracket;
        if a > b {
            ([b, a], Self::Reversed)
        } else {
            ([a, b], Self::Forward)
        }
    }

    /// Re-expresses sorted endpoints in the caller's ordering.
    pub(super) fn restore(self, sorted: [f64; 2]) -> [f64; 2] {
        match self {
            Self::Forward => sorted,
            Self::Reversed => [sorted[1], sorted[0]],
        }
    }
}

/// Current bracket endpoints and their working residuals.
///
/// Residuals may be scaled by the Anderson–Björck correction, so they keep
/// the sign of the true residual but not necessarily its magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: Point,
    right: Point,
}

impl Bracket {
    /// Creates a bracket from ordered endpoints.
    pub(super) fn new(left: Point, right: Point) -> Self {
        Self { left, right }
    }

    pub(super) fn left(&self) -> Point {
        self.left
    }

    pub(super) fn right(&self) -> Point {
        self.right
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left.x, self.right.x]
    }

    /// Returns the bracket width.
    pub(super) fn width(&self) -> f64 {
        self.right.x - self.left.x
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left.x + self.right.x)
    }

    /// Returns the chord's value at the midpoint.
    pub(super) fn chord_midpoint(&self) -> f64 {
        0.5 * (self.left.residual + self.right.residual)
    }

    /// Returns where the chord through both endpoints crosses zero.
    ///
    /// The result is non-finite when the working residuals are equal.
    pub(super) fn secant(&self) -> f64 {
        let Point { x: x1, residual: y1 } = self.left;
        let Point { x: x2, residual: y2 } = self.right;
        (x1 * y2 - y1 * x2) / (y2 - y1)
    }

    /// Returns true if `x` lies within the bracket widened by `slack` on both sides.
    ///
    /// Non-finite values are never admitted.
    pub(super) fn admits(&self, x: f64, slack: f64) -> bool {
        (self.left.x - slack..=self.right.x + slack).contains(&x)
    }

    /// Clamps `x` into the bracket.
    pub(super) fn clamp(&self, x: f64) -> f64 {
        x.max(self.left.x).min(self.right.x)
    }

    /// Returns the end a new point replaces: the one whose residual shares its sign.
    pub(super) fn end_for(&self, point: Point) -> End {
        if point.sign() == self.left.sign() {
            End::Left
        } else {
            End::Right
        }
    }

    /// Replaces an endpoint with a new point.
    pub(super) fn replace(&mut self, end: End, point: Point) {
        match end {
            End::Left => self.left = point,
            End::Right => self.right = point,
        }
    }

    /// Scales the working residual at one end.
    ///
    /// Scaling by a positive factor keeps the sign, so the bracket stays valid.
    pub(super) fn scale(&mut self, end: End, factor: f64) {
        debug_assert!(factor > 0.0);
        match end {
            End::Left => self.left.residual *= factor,
            End::Right => self.right.residual *= factor,
        }
    }
}
