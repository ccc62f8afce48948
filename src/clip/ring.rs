//! Sutherland-Hodgman ring clipping

use super::outcode::{closed_outcode, intersect, Outcode};
use crate::model::{Bound, Ring};
use std::mem;

const EDGES: [Outcode; 4] = [Outcode::LEFT, Outcode::RIGHT, Outcode::BOTTOM, Outcode::TOP];

/// Clip a ring to a bound, one half-plane at a time
///
/// The ring is consumed and its storage reused as one half of the double
/// buffer. Clone it first if the original is still needed.
///
/// An unclosed input is not implicitly closed, and the output is only
/// re-closed when the input was closed. Points duplicated where the ring
/// touches the boundary are kept.
///
/// # Returns
///
/// The clipped ring, empty when nothing of the ring lies inside the bound.
pub fn clip_ring(bound: &Bound, ring: Ring) -> Ring {
    if ring.is_empty() {
        return ring;
    }
    let closed = ring.is_closed();

    let mut input = ring.into_inner();
    let mut output = Vec::with_capacity(input.len());

    for edge in EDGES {
        output.clear();

        let Some(&start) = (if closed { input.last() } else { input.first() }) else {
            return Ring::default();
        };
        let mut prev = start;
        let mut prev_inside = !closed_outcode(bound, prev).intersects(edge);

        for &p in &input {
            let inside = !closed_outcode(bound, p).intersects(edge);
            if inside != prev_inside {
                output.push(intersect(bound, edge, prev, p));
            }
            if inside {
                output.push(p);
            }
            prev = p;
            prev_inside = inside;
        }

        if output.is_empty() {
            return Ring::default();
        }
        mem::swap(&mut input, &mut output);
    }

    if closed && input.first() != input.last() {
        let first = input[0];
        input.push(first);
    }
    Ring(input)
}
