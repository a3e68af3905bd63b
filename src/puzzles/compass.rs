//! The 32 points of the compass.
//!
//! See <https://en.wikipedia.org/wiki/Points_of_the_compass#32_cardinal_points>. Every name is
//! derived from the four cardinal directions alone.

use std::array;

const CARDINALS: [&str; 4] = ["N", "E", "S", "W"];

const POINTS: usize = 32;
const STEP: f64 = 360.0 / POINTS as f64;

#[derive(Debug, Clone, PartialEq)]
pub struct CompassPoint {
    pub abbreviation: String,
    /// Heading in degrees, clockwise from north.
    pub azimuth: f64,
}

/// Returns all 32 compass points, clockwise from north in steps of 11.25 degrees.
///
/// # Examples
/// ```
/// # use katas::puzzles::compass::compass_points;
/// let points = compass_points();
/// assert_eq!(points[0].abbreviation, "N");
/// assert_eq!(points[1].abbreviation, "NbE");
/// assert_eq!(points[2].abbreviation, "NNE");
/// assert_eq!(points[31].abbreviation, "NbW");
/// assert_eq!(points[31].azimuth, 348.75);
/// ```
pub fn compass_points() -> [CompassPoint; POINTS] {
    array::from_fn(|i| CompassPoint {
        abbreviation: abbreviation(i),
        azimuth: i as f64 * STEP,
    })
}

/// Wraps around so that index 4 is north again.
const fn cardinal(index: usize) -> &'static str {
    CARDINALS[index % CARDINALS.len()]
}

/// The name of the inter-cardinal point at `i`, which must be an odd multiple of 4. North and south
/// always come first.
fn intercardinal(i: usize) -> String {
    let (before, after) = (cardinal((i - 4) / 8), cardinal((i + 4) / 8));
    match before {
        "E" | "W" => format!("{after}{before}"),
        _ => format!("{before}{after}"),
    }
}

fn abbreviation(i: usize) -> String {
    match i {
        // N, E, S, W
        _ if i % 8 == 0 => cardinal(i / 8).to_string(),
        // NE, SE, SW, NW
        _ if i % 4 == 0 => intercardinal(i),
        // NNE, ENE, ...: nearest cardinal followed by nearest inter-cardinal.
        _ if i % 8 == 2 => format!("{}{}", cardinal(i / 8), intercardinal(i + 2)),
        _ if i % 8 == 6 => format!("{}{}", cardinal((i + 2) / 8), intercardinal(i - 2)),
        // NbE, NEbN, ...: nearest principal point "by" the cardinal it leans towards.
        _ => {
            let (principal, towards_next) = match i % 4 {
                1 => (i - 1, true),
                _ => (i + 1, false),
            };
            let (name, towards) = if principal % 8 == 0 {
                let base = principal / 8;
                let towards = if towards_next { base + 1 } else { base - 1 };
                (cardinal(base).to_string(), cardinal(towards))
            } else {
                let towards = if towards_next { principal + 4 } else { principal - 4 };
                (intercardinal(principal), cardinal(towards / 8))
            };
            format!("{name}b{towards}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const EXPECTED: [&str; POINTS] = [
        "N", "NbE", "NNE", "NEbN", "NE", "NEbE", "ENE", "EbN",
        "E", "EbS", "ESE", "SEbE", "SE", "SEbS", "SSE", "SbE",
        "S", "SbW", "SSW", "SWbS", "SW", "SWbW", "WSW", "WbS",
        "W", "WbN", "WNW", "NWbW", "NW", "NWbN", "NNW", "NbW",
    ];

    #[test]
    fn test_abbreviations() {
        let points = compass_points();
        for (point, expected) in points.iter().zip(EXPECTED) {
            assert_eq!(point.abbreviation, expected);
        }

        let unique: HashSet<_> = points.iter().map(|p| p.abbreviation.as_str()).collect();
        assert_eq!(unique.len(), POINTS, "Every point should have a distinct name.");
    }

    #[test]
    fn test_azimuths() {
        let points = compass_points();
        assert_eq!(points[0].azimuth, 0.0);
        assert_eq!(points[8].azimuth, 90.0, "East should be at 90 degrees.");
        assert_eq!(points[16].azimuth, 180.0);
        assert_eq!(points[5].azimuth, 56.25);
        assert!(
            points.windows(2).all(|pair| pair[1].azimuth - pair[0].azimuth == STEP),
            "Points should be evenly spaced."
        );
    }
}
