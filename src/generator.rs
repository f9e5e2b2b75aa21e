use crate::*;

/// Drives a [`Polygon2`] to completion from a [`CoordinateSource`].
///
/// Each non-blank line is a point; the side from the previous point to it is offered to
/// the polygon. A blank line (or the end of input) asks the polygon to autocomplete.
/// Rejected lines are handed to [`CoordinateSource::on_error`], which decides whether to
/// carry on or abort.
///
/// # Example
/// ```rust
/// use polygen::*;
/// let mut src = Batch::new("1 0\n1 1\n0 1\n\n".as_bytes());
/// let p = PolygonGenerator::new().build(&mut src).unwrap();
/// assert!(p.is_complete());
/// assert_eq!(p.area(), 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolygonGenerator {
    start: Point2,
    tolerance: f64,
}

impl Default for PolygonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonGenerator {
    /// Start at the origin with the default tolerance.
    pub fn new() -> Self {
        Self {
            start: Point2::zero(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// The first vertex; the first line read is the end of the first side.
    pub fn starting_at(self, start: Point2) -> Self {
        Self { start, ..self }
    }

    pub fn tolerance(self, eps: f64) -> Self {
        Self {
            tolerance: eps.abs(),
            ..self
        }
    }

    /// Read lines until the polygon is complete.
    ///
    /// Errors the source chooses to [abort](Recovery::Abort) on are returned, as are
    /// I/O failures. When the source runs dry the polygon is autocompleted; failing that
    /// is fatal since there is no more input to fix it with.
    pub fn build<S>(&self, mut source: S) -> Result<Polygon2>
    where
        S: CoordinateSource,
    {
        let mut poly = Polygon2::with_tolerance(self.tolerance);
        let mut at = self.start;

        while !poly.is_complete() {
            let Some(line) = source.next_line()? else {
                log::debug!("end of input, closing polygon with {} sides", poly.len());
                if poly.is_empty() {
                    return Err(Error::EndOfInput);
                }
                poly.autocomplete()?;
                break;
            };

            if let Err(e) = self.step(&mut poly, &mut at, &line) {
                log::warn!("{e}");
                match source.on_error(&e) {
                    Recovery::Retry => continue,
                    Recovery::Abort => return Err(e),
                }
            }
        }

        Ok(poly)
    }

    /// Apply one raw line. On error neither the polygon nor `at` changes.
    fn step(&self, poly: &mut Polygon2, at: &mut Point2, line: &str) -> Result<()> {
        if is_blank(line) {
            return Ok(poly.autocomplete()?);
        }

        let p = parse_coords(line)?;
        if p.approx_eq(*at, self.tolerance) {
            log::debug!("repeated point {p:?} ignored");
            return Ok(());
        }

        let side = Vector2::between(*at, p);
        poly.add_side(side)?;
        log::debug!("side {} added: {:?} -> {:?}", poly.len() - 1, *at, p);
        *at = p;

        Ok(())
    }
}
