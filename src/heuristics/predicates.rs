// ============================================================
// Layer 5 - Hard-Layout Predicates
// ============================================================
// Two independent tests, each evaluated per text line.
//
// Large character spacing:
//   For every character in the line, find the distance to its
//   nearest neighbour (centroid to centroid). If the mean of
//   those distances is more than `threshold` times the mean
//   character scale, the characters are spread out.
//
// Juxtaposed (abreast) lines:
//   Compare the line's bounding box with every other line that
//   has characters of a similar size. If the two boxes line up
//   closely enough, the line has a neighbour sitting beside it.
//
//   Which edges are compared depends on the line's shape:
//
//     wide line (height <= width)
//       band:   min(|top_i - top_j|, |bottom_i - bottom_j|) < 3 × scale
//       offset: |left_i - left_j|                            < gap × scale
//
//     upright line (height > width)
//       band:   min(|left_i - left_j|, |right_i - right_j|)  < 3 × scale
//       offset: |top_i - top_j| < gap × scale
//               OR |bottom_i - bottom_j| < gap × scale
//
//   The wide case only ever looks at the left edges; the right
//   edges play no part in its offset test.
//
// Bounding boxes read the FIRST coordinate of each point as the
// vertical axis (top/bottom) and the SECOND as the horizontal
// axis (left/right). Hard-sample lists published with this rule
// were produced with that convention.

use serde::{Deserialize, Serialize};

use crate::domain::polygon::Quad;
use crate::heuristics::geometry::{centroid, distance, mean_scale};

/// Vertical (or, for upright lines, horizontal) gap allowed
/// between abreast lines, in multiples of the line's scale.
const ABREAST_BAND: f64 = 3.0;

// ─── Large Character Spacing ──────────────────────────────────────────────────

pub fn is_large_character_spacing(chars: &[Quad], threshold: f64) -> bool {
    let n = chars.len();
    if n < 2 {
        return false;
    }

    // Centroid = mean of the four corners of each character
    let centers: Vec<_> = chars.iter().map(centroid).collect();

    // For each character: distance to its closest neighbour.
    // Summing these and dividing by n gives the mean gap.

    let total_nearest: f64 = (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| j != i)
                .map(|j| distance(centers[i], centers[j]))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();
    let mean_nearest = total_nearest / n as f64;

    // Normalise by character size so the same rule works for
    // small and large text
    mean_nearest / mean_scale(chars) > threshold
}

// ─── Juxtaposed Lines ─────────────────────────────────────────────────────────

/// Thresholds for `is_multiple_lines_abreast`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbreastThresholds {
    /// Maximum edge offset between the two lines, in multiples of scale
    pub gap_factor: f64,

    /// Lines are only compared when scale_i / scale_j lies strictly
    /// inside (scale_ratio, 1 / scale_ratio)
    pub scale_ratio: f64,
}

impl Default for AbreastThresholds {
    fn default() -> Self {
        Self {
            gap_factor:  0.1,
            scale_ratio: 0.9,
        }
    }
}

/// Axis-aligned extent of a line polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LineBox {
    top:    f64,
    left:   f64,
    bottom: f64,
    right:  f64,
}

impl LineBox {
    fn of(poly: &Quad) -> Self {
        let pts = poly.points();
        let mut b = LineBox {
            top:    f64::INFINITY,
            left:   f64::INFINITY,
            bottom: f64::NEG_INFINITY,
            right:  f64::NEG_INFINITY,
        };
        for p in pts {
            b.top    = b.top.min(p.x);
            b.bottom = b.bottom.max(p.x);
            b.left   = b.left.min(p.y);
            b.right  = b.right.max(p.y);
        }
        b
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// True if line `index` has an abreast neighbour among `lines`.
///
/// `line_chars[k]` holds the characters assigned to `lines[k]`.
/// Returns false if line `index` has fewer than 2 characters.
pub fn is_multiple_lines_abreast(
    index:      usize,
    lines:      &[Quad],
    line_chars: &[Vec<Quad>],
    thresholds: AbreastThresholds,
) -> bool {
    let (Some(line_i), Some(chars_i)) = (lines.get(index), line_chars.get(index)) else {
        return false;
    };
    if chars_i.len() < 2 {
        return false;
    }

    // ── Target line: box, mean character size, derived bounds ────────────
    let box_i   = LineBox::of(line_i);
    let scale_i = mean_scale(chars_i);
    let band    = scale_i * ABREAST_BAND;
    let offset  = scale_i * thresholds.gap_factor;
    let lower   = thresholds.scale_ratio;
    let upper   = 1.0 / thresholds.scale_ratio;

    // ── Scan every other line with at least one character ────────────────
    for (j, (line_j, chars_j)) in lines.iter().zip(line_chars).enumerate() {
        if j == index || chars_j.is_empty() {
            continue;
        }

        let box_j   = LineBox::of(line_j);
        let scale_j = mean_scale(chars_j);
        // Only lines with comparable character size are compared:
        // scale_i / scale_j must lie strictly inside (lower, upper)
        let s = scale_i / scale_j;
        if s <= lower || s >= upper {
            continue;
        }

        if box_i.height() <= box_i.width() {
            // Wide line: top/bottom within the band, left edges aligned
            let cross_gap = (box_i.top - box_j.top).abs().min((box_i.bottom - box_j.bottom).abs());
            if cross_gap < band && (box_i.left - box_j.left).abs() < offset {
                return true;
            }
        } else {
            // Upright line: left/right within the band, and either the
            // top edges or the bottom edges aligned
            let cross_gap = (box_i.left - box_j.left).abs().min((box_i.right - box_j.right).abs());
            if cross_gap < band
                && ((box_i.top - box_j.top).abs() < offset || (box_i.bottom - box_j.bottom).abs() < offset)
            {
                return true;
            }
        }
    }

    false
}
