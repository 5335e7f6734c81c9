use std::cmp::Ordering;

/// Which stableford point table to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointTable {
    Standard,
    Modified,
}

/// Points for one hole given strokes and par.
///
/// | diff to par | standard | modified |
/// |-------------|----------|----------|
/// | ≤ −3        | 5        | 8        |
/// | −2          | 4        | 5        |
/// | −1          | 3        | 2        |
/// | 0           | 2        | 0        |
/// | +1          | 1        | −1       |
/// | ≥ +2        | 0        | −1       |
pub fn stableford_points(strokes: u32, par: u8, table: PointTable) -> i32 {
    let diff = strokes as i64 - par as i64;
    match table {
        PointTable::Standard => match diff {
            d if d <= -3 => 5,
            -2 => 4,
            -1 => 3,
            0  => 2,
            1  => 1,
            _  => 0,
        },
        PointTable::Modified => match diff {
            d if d <= -3 => 8,
            -2 => 5,
            -1 => 2,
            0  => 0,
            _  => -1,
        },
    }
}

/// Match status relative to player 1: "A/S", "2 up", "1 dn".
pub fn match_status(diff: i32) -> String {
    match diff.cmp(&0) {
        Ordering::Equal   => "A/S".to_string(),
        Ordering::Greater => format!("{} up", diff),
        Ordering::Less    => format!("{} dn", diff.abs()),
    }
}

/// Split a one-point sub-match: lower score takes 1, a tie halves it.
/// Returns `(side_a, side_b)`.
pub fn split_point(a: u32, b: u32) -> (f64, f64) {
    match a.cmp(&b) {
        Ordering::Less    => (1.0, 0.0),
        Ordering::Greater => (0.0, 1.0),
        Ordering::Equal   => (0.5, 0.5),
    }
}

/// Golf-style to-par label: "E", "+3", "-2".
pub fn to_par_label(to_par: i64) -> String {
    match to_par.cmp(&0) {
        Ordering::Equal   => "E".to_string(),
        Ordering::Greater => format!("+{}", to_par),
        Ordering::Less    => to_par.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eagle_on_par_four() {
        // 2 on a par 4: diff -2
        assert_eq!(stableford_points(2, 4, PointTable::Standard), 4);
        assert_eq!(stableford_points(2, 4, PointTable::Modified), 5);
    }

    #[test]
    fn three_on_par_five() {
        assert_eq!(stableford_points(3, 5, PointTable::Standard), 4);
        assert_eq!(stableford_points(3, 5, PointTable::Modified), 5);
    }

    #[test]
    fn albatross_and_worse_cap_out() {
        assert_eq!(stableford_points(1, 5, PointTable::Standard), 5);
        assert_eq!(stableford_points(1, 5, PointTable::Modified), 8);
    }

    #[test]
    fn bogeys_and_worse() {
        assert_eq!(stableford_points(5, 4, PointTable::Standard), 1);
        assert_eq!(stableford_points(5, 4, PointTable::Modified), -1);
        assert_eq!(stableford_points(9, 4, PointTable::Standard), 0);
        assert_eq!(stableford_points(9, 4, PointTable::Modified), -1);
    }

    #[test]
    fn par_and_birdie() {
        assert_eq!(stableford_points(4, 4, PointTable::Standard), 2);
        assert_eq!(stableford_points(4, 4, PointTable::Modified), 0);
        assert_eq!(stableford_points(3, 4, PointTable::Standard), 3);
        assert_eq!(stableford_points(3, 4, PointTable::Modified), 2);
    }

    #[test]
    fn status_strings() {
        assert_eq!(match_status(0), "A/S");
        assert_eq!(match_status(2), "2 up");
        assert_eq!(match_status(-3), "3 dn");
    }

    #[test]
    fn split_point_halves_ties() {
        assert_eq!(split_point(3, 4), (1.0, 0.0));
        assert_eq!(split_point(5, 4), (0.0, 1.0));
        assert_eq!(split_point(4, 4), (0.5, 0.5));
    }

    #[test]
    fn to_par_labels() {
        assert_eq!(to_par_label(0), "E");
        assert_eq!(to_par_label(3), "+3");
        assert_eq!(to_par_label(-2), "-2");
    }
}
