use crate::*;

/// Default epsilon used when comparing points and line parameters.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Why a side could not be added to a [`Polygon2`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum PolygonError {
    #[error("new polygon side {proposed} intersects with existing side {existing}")]
    Intersection { proposed: usize, existing: usize },

    #[error("could not autocomplete polygon, closing side intersects with existing side {existing}")]
    AutocompleteFailed { existing: usize },

    #[error("polygon needs at least one side before it can be closed")]
    NotEnoughSides,

    #[error("polygon side has zero length")]
    DegenerateSide,

    #[error("polygon is already complete")]
    AlreadyComplete,
}

/// How an accepted side relates to the boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Contact {
    /// The side extends the open chain.
    Open,
    /// The side ends on the first vertex, closing the loop.
    Closes,
}

/// A simple polygon built up one side at a time.
///
/// Sides are stored in boundary order; each side starts where the previous one ends.
/// Every side is validated against _all_ stored sides before being accepted, so the
/// boundary never crosses itself. Once [complete](Polygon2::is_complete) the last
/// side ends on the first side's start, and no further sides are taken.
///
/// # Example
/// ```rust
/// use polygen::*;
/// let mut p = Polygon2::new();
/// p.add_side(Vector2::between([0.0, 0.0], [2.0, 0.0])).unwrap();
/// p.add_side(Vector2::between([2.0, 0.0], [2.0, 3.0])).unwrap();
/// p.add_side(Vector2::between([2.0, 3.0], [0.0, 3.0])).unwrap();
/// p.autocomplete().unwrap();
///
/// assert!(p.is_complete());
/// assert!((p.area() - 6.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polygon2 {
    vectors: Vec<Vector2>,
    complete: bool,
    tolerance: f64,
}

impl Default for Polygon2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Polygon2 {
    pub fn new() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE)
    }

    /// An empty polygon comparing points and parameters within `eps`.
    ///
    /// An `eps` of zero gives exact float comparisons.
    pub fn with_tolerance(eps: f64) -> Self {
        Self {
            vectors: Vec::new(),
            complete: false,
            tolerance: eps.abs(),
        }
    }

    /// Build a closed polygon from a chain of displacements, starting at `start`.
    ///
    /// Each displacement begins where the previous one ended. If the chain does not
    /// already return to `start` it is [autocompleted](Self::autocomplete).
    ///
    /// # Example
    /// ```rust
    /// use polygen::*;
    /// let p = Polygon2::from_displacements([0.0, 0.0], [[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0]])
    ///     .unwrap();
    /// assert_eq!(p.len(), 4);
    /// assert_eq!(p.area(), 1.0);
    /// ```
    pub fn from_displacements<I>(start: Point2, disps: I) -> Result<Self, PolygonError>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut p = Self::new();
        let mut at = start;
        for disp in disps {
            if p.complete {
                break;
            }
            let side = Vector2::from_start(at, disp);
            at = side.end();
            p.add_side(side)?;
        }

        p.autocomplete()?;

        Ok(p)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of stored sides.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The sides, in boundary order.
    pub fn vectors(&self) -> &[Vector2] {
        &self.vectors
    }

    /// The start of each side, in boundary order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Point2> + '_ {
        self.vectors.iter().map(|v| v.start)
    }

    /// The start of the first side, if any.
    pub fn first_vertex(&self) -> Option<Point2> {
        self.vectors.first().map(|v| v.start)
    }

    /// The end of the last side, if any.
    pub fn last_vertex(&self) -> Option<Point2> {
        self.vectors.last().map(Vector2::end)
    }

    /// Clear all sides, leaving an open, empty polygon.
    pub fn reset(&mut self) {
        self.vectors.clear();
        self.complete = false;
    }

    /// Validate and append a side.
    ///
    /// The side is checked against every stored side with
    /// [`check_intersections`](Self::check_intersections); on failure the polygon is
    /// unchanged. A side that ends on the first vertex completes the polygon.
    pub fn add_side(&mut self, side: Vector2) -> Result<Contact, PolygonError> {
        if self.complete {
            return Err(PolygonError::AlreadyComplete);
        }
        if side.is_zero(self.tolerance) {
            return Err(PolygonError::DegenerateSide);
        }

        let contact = self.check_intersections(&side)?;
        self.vectors.push(side);
        if contact == Contact::Closes {
            self.complete = true;
            log::info!("polygon closed with {} sides", self.len());
        }

        Ok(contact)
    }

    /// Close the polygon with a side from the last vertex back to the first.
    ///
    /// Does nothing if already complete. If the closing side would cross a stored side
    /// the polygon is left open and [`PolygonError::AutocompleteFailed`] is returned.
    pub fn autocomplete(&mut self) -> Result<(), PolygonError> {
        if self.complete {
            return Ok(());
        }

        let (Some(first), Some(last)) = (self.first_vertex(), self.last_vertex()) else {
            return Err(PolygonError::NotEnoughSides);
        };

        let closing = Vector2::between(last, first);
        match self.check_intersections(&closing) {
            Ok(_) => (),
            Err(PolygonError::Intersection { existing, .. }) => {
                return Err(PolygonError::AutocompleteFailed { existing })
            }
            Err(e) => return Err(e),
        }

        self.vectors.push(closing);
        self.complete = true;
        log::info!("polygon autocompleted with {} sides", self.len());

        Ok(())
    }

    /// Test a proposed side against every stored side.
    ///
    /// Each pair is tested with the parametric form of both segments
    /// (`u.start + s*u.disp`, `v.start + t*v.disp`). Two touches are expected and
    /// exempt:
    /// - _chain continuation_: `u` starts where the last stored side ends (`s = 0, t = 1`).
    /// - _closure_: `u` ends where the first stored side starts (`s = 1, t = 0`).
    ///
    /// Sides whose directions differ by no more than the tolerance are treated as
    /// parallel. Any other contact, including parallel sides that overlap along a line,
    /// is an intersection. Nothing is mutated.
    pub fn check_intersections(&self, u: &Vector2) -> Result<Contact, PolygonError> {
        let eps = self.tolerance;
        let last = self.vectors.len().saturating_sub(1);
        let proposed = self.vectors.len();
        let mut contact = Contact::Open;

        for (i, v) in self.vectors.iter().enumerate() {
            let chain = i == last && u.start.approx_eq(v.end(), eps);
            let closure = i == 0 && u.end().approx_eq(v.start, eps);

            // near parallel pairs are left to the collinear test; solving them is unstable
            let parallel = u.cross(v).abs() <= eps * u.mag() * v.mag();
            let params = if parallel { None } else { u.line_params(v) };

            let crosses = match params {
                Some((s, t)) => {
                    log::trace!("side {proposed} meets side {i} at s = {s}, t = {t}");
                    let on_u = (-eps..=1.0 + eps).contains(&s);
                    let on_v = (-eps..=1.0 + eps).contains(&t);
                    let at_chain = chain && s.abs() <= eps && (t - 1.0).abs() <= eps;
                    let at_closure = closure && (s - 1.0).abs() <= eps && t.abs() <= eps;
                    if at_closure {
                        contact = Contact::Closes;
                    }

                    on_u && on_v && !at_chain && !at_closure
                }
                None => {
                    let overlap = collinear_overlap(u, v, eps);
                    if overlap == Overlap::Point && closure {
                        contact = Contact::Closes;
                    }
                    match overlap {
                        Overlap::None => false,
                        Overlap::Point => !chain && !closure,
                        Overlap::Segment => true,
                    }
                }
            };

            if crosses {
                log::debug!("side {proposed} intersects side {i}");
                return Err(PolygonError::Intersection {
                    proposed,
                    existing: i,
                });
            }
        }

        Ok(contact)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Overlap {
    None,
    Point,
    Segment,
}

/// How two parallel segments share the same line.
///
/// Parallel but offset segments never overlap. Collinear segments overlap where their
/// bounding boxes do; an overlap no longer than `eps` is a single touching point.
fn collinear_overlap(u: &Vector2, v: &Vector2, eps: f64) -> Overlap {
    // offset of v from u's line, measured along the longer side to avoid a zero length
    let (a, b) = if u.mag() >= v.mag() { (u, v) } else { (v, u) };
    let len = a.mag();
    if len == 0.0 {
        return Overlap::None;
    }
    let offset = xprod(a.disp, b.start.sub(a.start)) / len;
    if offset.abs() > eps {
        return Overlap::None;
    }

    let shared = u
        .extents()
        .expand(eps)
        .intersection(v.extents().expand(eps));
    match shared {
        None => Overlap::None,
        Some(x) if x.expand(-eps).size.mag() <= eps => Overlap::Point,
        Some(_) => Overlap::Segment,
    }
}

impl Area for Polygon2 {
    /// 2D plan area, by the shoelace formula over the vertices taken cyclically.
    ///
    /// An open polygon is measured as if closed by a side from its last vertex back to
    /// its first.
    fn area(&self) -> f64 {
        // https://stackoverflow.com/questions/451426/how-do-i-calculate-the-area-of-a-2d-polygon
        let mut pts = self.vertices().collect::<Vec<_>>();
        if !self.complete {
            pts.extend(self.last_vertex());
        }
        if pts.len() < 3 {
            return 0.0;
        }

        pts.iter()
            .zip(pts.iter().skip(1))
            .chain(std::iter::once((&pts[pts.len() - 1], &pts[0])))
            .map(|(a, b)| xprod(*a, *b))
            .sum::<f64>()
            .abs()
            * 0.5
    }
}
