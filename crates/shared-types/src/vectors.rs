//! # Geometry Vectors
//!
//! The basic 3D types the geometry works with: positions (`Point3D`),
//! displacements (`Vector3D`) and rotations.
//!
//! Every point and vector carries a coordinate system tag. Values tagged
//! with different systems do not mix: subtracting an `OpticalPoint` from a
//! global `Point` does not compile. Two optical-local values are only
//! comparable if they are anchored to the same optical detector, which the
//! tag cannot express; it only separates them from world coordinates.
//!
//! Storage is `nalgebra`; the wrappers add the tag and the accessor names
//! used throughout the workspace (`x()`, `y()`, `z()`).

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use nalgebra::{Point3, Vector3};

/// Type of all linear coordinates, in centimeters.
pub type Length = f64;

/// Rotation in 3D space.
pub type Rotation = nalgebra::Rotation3<f64>;

/// Marker for a coordinate system.
pub trait CoordinateSystem: Copy + Default + fmt::Debug + PartialEq + 'static {
    /// Short human readable name of the system.
    const NAME: &'static str;
}

/// The global ("world") coordinate system the detector is described in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalCoords;

impl CoordinateSystem for GlobalCoords {
    const NAME: &'static str = "global";
}

/// Local coordinate system of a single optical detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpticalLocalCoords;

impl CoordinateSystem for OpticalLocalCoords {
    const NAME: &'static str = "optical-local";
}

// =============================================================================
// POINTS
// =============================================================================

/// A position in the coordinate system `C`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D<C> {
    coords: Point3<Length>,
    system: PhantomData<C>,
}

/// Position in the global coordinate system.
pub type Point = Point3D<GlobalCoords>;

/// Position local to an optical detector.
pub type OpticalPoint = Point3D<OpticalLocalCoords>;

impl<C: CoordinateSystem> Point3D<C> {
    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Self::from_nalgebra(Point3::new(x, y, z))
    }

    pub fn origin() -> Self {
        Self::from_nalgebra(Point3::origin())
    }

    /// Wraps a raw `nalgebra` point, declaring it to be in system `C`.
    pub fn from_nalgebra(coords: Point3<Length>) -> Self {
        Self {
            coords,
            system: PhantomData,
        }
    }

    pub fn as_nalgebra(&self) -> &Point3<Length> {
        &self.coords
    }

    pub fn x(&self) -> Length {
        self.coords.x
    }

    pub fn y(&self) -> Length {
        self.coords.y
    }

    pub fn z(&self) -> Length {
        self.coords.z
    }

    /// Displacement of this point from the origin.
    pub fn to_vector(&self) -> Vector3D<C> {
        Vector3D::from_nalgebra(self.coords.coords)
    }

    pub fn distance(&self, other: &Self) -> Length {
        (*self - *other).mag()
    }
}

impl<C: CoordinateSystem> Default for Point3D<C> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<C: CoordinateSystem> fmt::Display for Point3D<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl<C: CoordinateSystem> Sub for Point3D<C> {
    type Output = Vector3D<C>;

    fn sub(self, rhs: Self) -> Vector3D<C> {
        Vector3D::from_nalgebra(self.coords - rhs.coords)
    }
}

impl<C: CoordinateSystem> Add<Vector3D<C>> for Point3D<C> {
    type Output = Self;

    fn add(self, rhs: Vector3D<C>) -> Self {
        Self::from_nalgebra(self.coords + rhs.components)
    }
}

impl<C: CoordinateSystem> Sub<Vector3D<C>> for Point3D<C> {
    type Output = Self;

    fn sub(self, rhs: Vector3D<C>) -> Self {
        Self::from_nalgebra(self.coords - rhs.components)
    }
}

impl<C: CoordinateSystem> AddAssign<Vector3D<C>> for Point3D<C> {
    fn add_assign(&mut self, rhs: Vector3D<C>) {
        self.coords += rhs.components;
    }
}

impl<C: CoordinateSystem> SubAssign<Vector3D<C>> for Point3D<C> {
    fn sub_assign(&mut self, rhs: Vector3D<C>) {
        self.coords -= rhs.components;
    }
}

// =============================================================================
// VECTORS
// =============================================================================

/// A displacement in the coordinate system `C`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3D<C> {
    components: Vector3<Length>,
    system: PhantomData<C>,
}

/// Displacement in the global coordinate system.
pub type Vector = Vector3D<GlobalCoords>;

/// Displacement local to an optical detector.
pub type OpticalVector = Vector3D<OpticalLocalCoords>;

impl<C: CoordinateSystem> Vector3D<C> {
    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Self::from_nalgebra(Vector3::new(x, y, z))
    }

    pub fn zero() -> Self {
        Self::from_nalgebra(Vector3::zeros())
    }

    /// Wraps a raw `nalgebra` vector, declaring it to be in system `C`.
    pub fn from_nalgebra(components: Vector3<Length>) -> Self {
        Self {
            components,
            system: PhantomData,
        }
    }

    pub fn as_nalgebra(&self) -> &Vector3<Length> {
        &self.components
    }

    pub fn x(&self) -> Length {
        self.components.x
    }

    pub fn y(&self) -> Length {
        self.components.y
    }

    pub fn z(&self) -> Length {
        self.components.z
    }

    /// Squared magnitude.
    pub fn mag2(&self) -> Length {
        self.components.norm_squared()
    }

    pub fn mag(&self) -> Length {
        self.components.norm()
    }

    /// Vector with the same direction and magnitude 1.
    ///
    /// The null vector has no direction and yields NaN components.
    pub fn unit(&self) -> Self {
        Self::from_nalgebra(self.components / self.mag())
    }

    pub fn dot(&self, other: &Self) -> Length {
        self.components.dot(&other.components)
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::from_nalgebra(self.components.cross(&other.components))
    }

    pub fn rotated(&self, rotation: &Rotation) -> Self {
        Self::from_nalgebra(rotation * self.components)
    }
}

impl<C: CoordinateSystem> Default for Vector3D<C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<C: CoordinateSystem> fmt::Display for Vector3D<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl<C: CoordinateSystem> Add for Vector3D<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_nalgebra(self.components + rhs.components)
    }
}

impl<C: CoordinateSystem> Sub for Vector3D<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_nalgebra(self.components - rhs.components)
    }
}

impl<C: CoordinateSystem> AddAssign for Vector3D<C> {
    fn add_assign(&mut self, rhs: Self) {
        self.components += rhs.components;
    }
}

impl<C: CoordinateSystem> SubAssign for Vector3D<C> {
    fn sub_assign(&mut self, rhs: Self) {
        self.components -= rhs.components;
    }
}

impl<C: CoordinateSystem> Neg for Vector3D<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_nalgebra(-self.components)
    }
}

impl<C: CoordinateSystem> Mul<Length> for Vector3D<C> {
    type Output = Self;

    fn mul(self, rhs: Length) -> Self {
        Self::from_nalgebra(self.components * rhs)
    }
}

// =============================================================================
// MIDDLE POINT
// =============================================================================

/// Running (weighted) average of a sequence of points.
///
/// ```rust,ignore
/// let mut above_ground = MiddlePointAccumulator::new();
/// for point in &points {
///     if point.y() > 0.0 {
///         above_ground.add(*point);
///     }
/// }
/// let middle = above_ground.middle_point();
/// ```
///
/// An empty accumulator has zero weight and its middle point is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiddlePointAccumulatorOf<C> {
    weighted_sum: Vector3<Length>,
    weight: f64,
    system: PhantomData<C>,
}

/// Accumulator of points in the global coordinate system.
pub type MiddlePointAccumulator = MiddlePointAccumulatorOf<GlobalCoords>;

impl<C: CoordinateSystem> MiddlePointAccumulatorOf<C> {
    pub fn new() -> Self {
        Self {
            weighted_sum: Vector3::zeros(),
            weight: 0.0,
            system: PhantomData,
        }
    }

    /// Creates an accumulator already holding all `points` with weight 1.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point3D<C>>,
    {
        let mut acc = Self::new();
        acc.extend(points);
        acc
    }

    /// Adds a point with weight 1.
    pub fn add(&mut self, point: Point3D<C>) {
        self.add_weighted(point, 1.0);
    }

    pub fn add_weighted(&mut self, point: Point3D<C>, weight: f64) {
        self.weighted_sum += point.as_nalgebra().coords * weight;
        self.weight += weight;
    }

    /// Total weight accumulated so far.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_empty(&self) -> bool {
        self.weight == 0.0
    }

    /// The weighted average of the accumulated points.
    pub fn middle_point(&self) -> Point3D<C> {
        Point3D::from_nalgebra(Point3::from(self.weighted_sum / self.weight))
    }

    /// The middle point converted into any type constructible from
    /// `[x, y, z]`.
    pub fn middle_point_as<T: From<[Length; 3]>>(&self) -> T {
        let middle = self.middle_point();
        T::from([middle.x(), middle.y(), middle.z()])
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<C: CoordinateSystem> Default for MiddlePointAccumulatorOf<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CoordinateSystem> Extend<Point3D<C>> for MiddlePointAccumulatorOf<C> {
    fn extend<I: IntoIterator<Item = Point3D<C>>>(&mut self, points: I) {
        for point in points {
            self.add(point);
        }
    }
}

impl<C: CoordinateSystem> FromIterator<Point3D<C>> for MiddlePointAccumulatorOf<C> {
    fn from_iter<I: IntoIterator<Item = Point3D<C>>>(points: I) -> Self {
        Self::from_points(points)
    }
}

/// Unweighted average of a sequence of points.
pub fn middle_point<C, I>(points: I) -> Point3D<C>
where
    C: CoordinateSystem,
    I: IntoIterator<Item = Point3D<C>>,
{
    MiddlePointAccumulatorOf::from_points(points).middle_point()
}
