// ============================================================
// Layer 5 - Character Assignment
// ============================================================
// A character belongs to a line when most of the character is
// covered by the line polygon:
//
//   containment_ratio(line, char) = area(line ∩ char) / area(char)
//
// The divisor is the CHARACTER's area, so a small character
// sitting inside a long line scores close to 1, no matter how
// long the line is. The argument order matters.

use crate::domain::polygon::Quad;
use crate::heuristics::geometry::containment_ratio;

/// Default coverage a character needs to count as part of a line.
pub const DEFAULT_CONTAINMENT_THRESHOLD: f64 = 0.7;

/// Characters from `chars` whose coverage by `line` exceeds `threshold`.
/// Source order is preserved.
pub fn assign_chars(line: &Quad, chars: &[Quad], threshold: f64) -> Vec<Quad> {
    chars
        .iter()
        .filter(|ch| containment_ratio(line, ch) > threshold)
        .copied()
        .collect()
}

/// Run `assign_chars` for every line; entry `i` holds line `i`'s characters.
pub fn assign_all(lines: &[Quad], chars: &[Quad], threshold: f64) -> Vec<Vec<Quad>> {
    lines
        .iter()
        .map(|line| assign_chars(line, chars, threshold))
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contained_chars_are_assigned() {
        let line  = Quad::rect(0.0, 0.0, 10.0, 1.0);
        let chars = vec![
            Quad::rect(0.0, 0.0, 1.0, 1.0),   // fully inside
            Quad::rect(9.5, 0.0, 10.5, 1.0),  // half inside
            Quad::rect(20.0, 0.0, 21.0, 1.0), // outside
        ];
        let assigned = assign_chars(&line, &chars, DEFAULT_CONTAINMENT_THRESHOLD);
        assert_eq!(assigned, vec![chars[0]]);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly 70% of the character lies inside the line
        let line = Quad::rect(0.0, 0.0, 10.0, 1.0);
        let ch   = Quad::rect(9.3, 0.0, 10.3, 1.0);
        assert!(assign_chars(&line, &[ch], 0.69).len() == 1);
        assert!(assign_chars(&line, &[ch], 0.71).is_empty());
    }

    #[test]
    fn test_large_line_does_not_dilute_ratio() {
        // Character area is the divisor, so a huge line still contains it
        let line = Quad::rect(0.0, 0.0, 1000.0, 1000.0);
        let ch   = Quad::rect(10.0, 10.0, 11.0, 11.0);
        assert_eq!(assign_chars(&line, &[ch], DEFAULT_CONTAINMENT_THRESHOLD).len(), 1);
    }

    #[test]
    fn test_assign_all_is_parallel_to_lines() {
        let lines = vec![Quad::rect(0.0, 0.0, 4.0, 1.0), Quad::rect(0.0, 5.0, 4.0, 6.0)];
        let chars = vec![Quad::rect(0.0, 0.0, 1.0, 1.0), Quad::rect(1.0, 5.0, 2.0, 6.0)];
        let per_line = assign_all(&lines, &chars, DEFAULT_CONTAINMENT_THRESHOLD);
        assert_eq!(per_line.len(), 2);
        assert_eq!(per_line[0], vec![chars[0]]);
        assert_eq!(per_line[1], vec![chars[1]]);
    }
}
