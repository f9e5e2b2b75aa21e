use crate::*;
use std::fmt;

/// The human readable summary of a completed polygon.
///
/// Renders as:
/// ```text
/// Polygon with 4 angles has area 1.0
/// List of points in order:
/// (0.0;0.0)
/// (1.0;0.0)
/// (1.0;1.0)
/// (0.0;1.0)
///
///
/// ```
/// Downstream tooling parses this text, so the layout and number formatting are fixed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub angles: usize,
    pub area: f64,
    pub points: Vec<Point2>,
}

impl Report {
    pub fn new(polygon: &Polygon2) -> Self {
        Self {
            angles: polygon.len(),
            area: polygon.area(),
            points: polygon.vertices().collect(),
        }
    }
}

impl From<&Polygon2> for Report {
    fn from(polygon: &Polygon2) -> Self {
        Self::new(polygon)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Polygon with {} angles has area {}",
            self.angles,
            Num(self.area)
        )?;
        writeln!(f, "List of points in order:")?;
        for [x, y] in &self.points {
            writeln!(f, "({};{})", Num(*x), Num(*y))?;
        }
        write!(f, "\n\n")
    }
}

/// Shortest round-trip float text, integral values keep a `.0` and exponents are
/// written with a sign and two digits (`1e+16`, `1e-05`).
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = format!("{:?}", self.0);
        match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&s),
        }
    }
}
