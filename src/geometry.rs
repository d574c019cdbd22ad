//! Core geometry types for layout
//!
//! Fundamental geometric primitives used throughout the layout core. All
//! units are in points (1/72 inch), the native unit of fixed-page documents.
//!
//! # Coordinate System
//!
//! The coordinate system has its origin at the top-left corner of a page:
//! - Positive X extends to the right
//! - Positive Y extends downward

use std::fmt;

/// A 2D point in page space
///
/// # Examples
///
/// ```
/// use pageflow::Point;
///
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x, 10.0);
/// assert_eq!(Point::ZERO, Point::new(0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
  /// X coordinate (horizontal position, increases to the right)
  pub x: f32,
  /// Y coordinate (vertical position, increases downward)
  pub y: f32,
}

impl Point {
  /// The zero point at the origin (0, 0)
  pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

  /// Creates a new point at the given coordinates
  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }

  /// Translates this point by another point's coordinates
  pub fn translate(self, other: Point) -> Self {
    Self {
      x: self.x + other.x,
      y: self.y + other.y,
    }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// A 2D size in points
///
/// # Examples
///
/// ```
/// use pageflow::Size;
///
/// let size = Size::new(595.0, 842.0); // A4
/// assert_eq!(size.area(), 595.0 * 842.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
  /// Width (horizontal extent)
  pub width: f32,
  /// Height (vertical extent)
  pub height: f32,
}

impl Size {
  /// A size with zero width and height
  pub const ZERO: Self = Self {
    width: 0.0,
    height: 0.0,
  };

  /// Creates a new size with the given dimensions
  pub const fn new(width: f32, height: f32) -> Self {
    Self { width, height }
  }

  /// Computes the area (width × height)
  pub fn area(self) -> f32 {
    self.width * self.height
  }

  /// Returns true if either width or height is zero
  pub fn is_empty(self) -> bool {
    self.width == 0.0 || self.height == 0.0
  }
}

impl fmt::Display for Size {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}×{}", self.width, self.height)
  }
}

/// An axis-aligned rectangle in page space
///
/// Defined by an origin point (top-left corner) and a size. `Rect` is a plain
/// `Copy` value: every assignment is an independent deep copy, which is what
/// the speculative-layout discipline of this crate relies on.
///
/// # Examples
///
/// ```
/// use pageflow::Rect;
///
/// let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
/// assert_eq!(rect.max_x(), 110.0);
/// assert_eq!(rect.max_y(), 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
  /// The top-left corner of the rectangle
  pub origin: Point,
  /// The size (width and height) of the rectangle
  pub size: Size,
}

impl Rect {
  /// A zero-sized rectangle at the origin
  pub const ZERO: Self = Self {
    origin: Point::ZERO,
    size: Size::ZERO,
  };

  /// Creates a new rectangle from an origin point and size
  pub const fn new(origin: Point, size: Size) -> Self {
    Self { origin, size }
  }

  /// Creates a rectangle from x, y, width, height components
  pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
    Self {
      origin: Point::new(x, y),
      size: Size::new(width, height),
    }
  }

  /// Returns the x coordinate of the left edge
  pub fn x(self) -> f32 {
    self.origin.x
  }

  /// Returns the y coordinate of the top edge
  pub fn y(self) -> f32 {
    self.origin.y
  }

  /// Returns the width
  pub fn width(self) -> f32 {
    self.size.width
  }

  /// Returns the height
  pub fn height(self) -> f32 {
    self.size.height
  }

  /// Returns the x coordinate of the right edge
  pub fn max_x(self) -> f32 {
    self.origin.x + self.size.width
  }

  /// Returns the y coordinate of the bottom edge
  pub fn max_y(self) -> f32 {
    self.origin.y + self.size.height
  }

  /// Returns true if this rectangle intersects another rectangle
  ///
  /// Rectangles that touch at an edge or corner are considered intersecting.
  pub fn intersects(self, other: Rect) -> bool {
    self.x() <= other.max_x()
      && self.max_x() >= other.x()
      && self.y() <= other.max_y()
      && self.max_y() >= other.y()
  }

  /// Computes the union of two rectangles
  ///
  /// Returns the smallest rectangle that contains both rectangles.
  pub fn union(self, other: Rect) -> Rect {
    let min_x = self.x().min(other.x());
    let min_y = self.y().min(other.y());
    let max_x = self.max_x().max(other.max_x());
    let max_y = self.max_y().max(other.max_y());

    Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y)
  }

  /// Computes the intersection of two rectangles
  ///
  /// Returns None if the rectangles don't intersect.
  pub fn intersection(self, other: Rect) -> Option<Rect> {
    if !self.intersects(other) {
      return None;
    }

    let min_x = self.x().max(other.x());
    let min_y = self.y().max(other.y());
    let max_x = self.max_x().min(other.max_x());
    let max_y = self.max_y().min(other.max_y());

    Some(Rect::from_xywh(min_x, min_y, max_x - min_x, max_y - min_y))
  }

  /// Translates this rectangle by an offset
  pub fn translate(self, offset: Point) -> Rect {
    Rect {
      origin: self.origin.translate(offset),
      size: self.size,
    }
  }

  /// Shrinks the rectangle on each side by the given edge offsets
  ///
  /// Used to convert an outer area into a content area once the (external)
  /// box-model layer has resolved borders, margins, and padding.
  pub fn deflate(self, edges: EdgeOffsets) -> Rect {
    Rect::from_xywh(
      self.x() + edges.left,
      self.y() + edges.top,
      (self.width() - edges.horizontal()).max(0.0),
      (self.height() - edges.vertical()).max(0.0),
    )
  }
}

/// Edge offsets representing spacing on all four sides
///
/// The currency for resolved border/margin/padding values handed in by the
/// box-model collaborator. Order follows the usual convention: top, right,
/// bottom, left.
///
/// # Examples
///
/// ```
/// use pageflow::EdgeOffsets;
///
/// let padding = EdgeOffsets::all(10.0);
/// assert_eq!(padding.horizontal(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeOffsets {
  /// Top edge offset
  pub top: f32,
  /// Right edge offset
  pub right: f32,
  /// Bottom edge offset
  pub bottom: f32,
  /// Left edge offset
  pub left: f32,
}

impl EdgeOffsets {
  /// Zero offsets on all sides
  pub const ZERO: Self = Self {
    top: 0.0,
    right: 0.0,
    bottom: 0.0,
    left: 0.0,
  };

  /// Creates edge offsets with the same value on all sides
  pub const fn all(value: f32) -> Self {
    Self {
      top: value,
      right: value,
      bottom: value,
      left: value,
    }
  }

  /// Creates edge offsets with individual values for each side
  pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
    Self {
      top,
      right,
      bottom,
      left,
    }
  }

  /// Returns the sum of left and right offsets
  pub fn horizontal(self) -> f32 {
    self.left + self.right
  }

  /// Returns the sum of top and bottom offsets
  pub fn vertical(self) -> f32 {
    self.top + self.bottom
  }
}
