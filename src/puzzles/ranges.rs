//! Compressing an ordered list of integers into range notation.

/// Returns the range expression of an ascending list of integers.
///
/// Runs of three or more consecutive integers are written as `start-end`, everything else is
/// written individually, all separated by commas. Runs are only detected between adjacent
/// elements, the input is not sorted.
///
/// # Examples
/// ```
/// # use katas::puzzles::ranges::extract_ranges;
/// assert_eq!(extract_ranges(&[0, 1, 2, 3, 4, 5]), "0-5");
/// assert_eq!(extract_ranges(&[1, 4, 5]), "1,4,5");
/// assert_eq!(extract_ranges(&[0, 1, 2, 5, 7, 8, 9]), "0-2,5,7-9");
/// assert_eq!(extract_ranges(&[1, 2, 4, 5]), "1,2,4,5");
/// ```
pub fn extract_ranges(nums: &[i64]) -> String {
    let mut out = String::new();
    let mut rest = nums;

    while let Some(&start) = rest.first() {
        let len = 1 + rest
            .windows(2)
            .take_while(|pair| pair[0].checked_add(1) == Some(pair[1]))
            .count();

        if !out.is_empty() {
            out.push(',');
        }

        let piece = match len {
            1 => start.to_string(),
            2 => format!("{start},{}", rest[1]),
            _ => format!("{start}-{}", rest[len - 1]),
        };
        out.push_str(&piece);

        rest = &rest[len..];
    }

    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_edges() {
        assert_eq!(extract_ranges(&[]), "");
        assert_eq!(extract_ranges(&[7]), "7");
        assert_eq!(extract_ranges(&[-3, -2, -1]), "-3--1");
        assert_eq!(extract_ranges(&[-1, 0, 1, 3]), "-1-1,3");
        assert_eq!(
            extract_ranges(&[i64::MAX - 2, i64::MAX - 1, i64::MAX]),
            format!("{}-{}", i64::MAX - 2, i64::MAX),
            "Runs ending at the maximum value should not overflow."
        );
        assert_eq!(extract_ranges(&[3, 2, 1]), "3,2,1", "Descending runs are not ranges.");
        assert_eq!(extract_ranges(&[1, 1, 1]), "1,1,1");
    }

    fn expand(ranges: &str) -> Vec<i64> {
        if ranges.is_empty() {
            return Vec::new();
        }
        ranges
            .split(',')
            .flat_map(|part| match part.get(1..).and_then(|tail| tail.find('-')) {
                Some(dash) => {
                    let (start, end) = part.split_at(dash + 1);
                    let (start, end): (i64, i64) =
                        (start.parse().expect("start"), end[1..].parse().expect("end"));
                    (start..=end).collect::<Vec<_>>()
                }
                None => vec![part.parse().expect("single")],
            })
            .collect()
    }

    proptest! {
        /// Expanding the notation back gives the original ascending, distinct list.
        #[test]
        fn prop_reversible(mut nums in prop::collection::vec(-50_i64..50, 0..30)) {
            nums.sort_unstable();
            nums.dedup();
            let ranges = extract_ranges(&nums);
            prop_assert_eq!(expand(&ranges), nums);
        }
    }
}
