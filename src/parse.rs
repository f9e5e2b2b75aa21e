use crate::*;

/// The line means _close the polygon now_.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parse a coordinate line of the form `"<x> <y>"`.
///
/// Surrounding whitespace is ignored. Exactly two finite numbers are required, anything
/// else is [`Error::MalformedCoordinates`].
///
/// # Example
/// ```rust
/// # use polygen::*;
/// assert_eq!(parse_coords("1.5 -2").unwrap(), [1.5, -2.0]);
/// assert!(parse_coords("1 2 3").is_err());
/// ```
pub fn parse_coords(line: &str) -> Result<Point2> {
    fn de(s: &str) -> nom::IResult<&str, (f64, f64), ()> {
        use nom::{character::complete::*, combinator::*, number::complete::*, sequence::*};

        all_consuming(delimited(
            space0,
            separated_pair(double, space1, double),
            space0,
        ))(s)
    }

    let malformed = || Error::MalformedCoordinates(line.to_string());

    let (_, (x, y)) = de(line.trim_end_matches(['\r', '\n'])).map_err(|_| malformed())?;
    let p = [x, y];
    if !p.is_finite() {
        return Err(malformed());
    }

    Ok(p)
}
