//! Cohen-Sutherland polyline clipping

use super::outcode::{closed_outcode, intersect, outcode};
use crate::model::{Bound, LineString, MultiLineString, Point};

/// Clip a polyline to a bound
///
/// Each segment is trimmed in turn. Whenever a segment leaves the bound the
/// current output line ends and the next visible segment starts a new one.
///
/// # Arguments
///
/// * `bound` - The clip rectangle
/// * `points` - The polyline's vertices
/// * `open` - Treat the boundary as outside. Segments running along the
///   boundary are then discarded, which is what fragment assembly needs.
///
/// # Returns
///
/// The visible pieces, each with at least two distinct points. Duplicate
/// vertices of the input are kept, so a line inside the bound comes back
/// unchanged. A segment that only grazes a corner yields no piece.
pub fn clip_line(bound: &Bound, points: &[Point], open: bool) -> MultiLineString {
    let mut out: Vec<LineString> = Vec::new();
    if points.len() < 2 {
        return MultiLineString::default();
    }

    let last = points.len() - 1;
    let mut line = 0;
    let mut code_a = outcode(bound, points[0], open);

    for i in 1..points.len() {
        let mut a = points[i - 1];
        let mut b = points[i];
        let mut code_b = outcode(bound, b, open);
        let end_code = code_b;

        loop {
            if (code_a | code_b).is_inside() {
                push(&mut out, line, a);
                if code_b != end_code {
                    // b was moved onto the boundary, so the polyline leaves here
                    push(&mut out, line, b);
                    if i < last {
                        line += 1;
                    }
                } else if i == last {
                    push(&mut out, line, b);
                }
                break;
            } else if code_a.intersects(code_b) {
                break;
            } else if !code_a.is_inside() {
                a = intersect(bound, code_a, a, b);
                code_a = closed_outcode(bound, a);
            } else {
                b = intersect(bound, code_b, a, b);
                code_b = closed_outcode(bound, b);
            }
        }

        code_a = end_code;
    }

    out.retain(|l| l.iter().any(|p| *p != l[0]));
    MultiLineString(out)
}

fn push(out: &mut Vec<LineString>, line: usize, p: Point) {
    if out.len() <= line {
        out.push(LineString::default());
    }
    out[line].push(p);
}
