//! Cutting rings into boundary fragments

use crate::clip::{clip_line, open_outcode};
use crate::model::{Bound, LineString, Ring};

/// Pieces of a set of rings after clipping against the open boundary
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Fragments {
    /// Pieces whose two endpoints lie on the bound's boundary
    pub open: Vec<LineString>,
    /// Rings lying strictly inside the bound
    pub closed: Vec<Ring>,
}

/// Clip rings against the open boundary and sort the pieces
///
/// Each ring is cut with the boundary treated as outside, so every cut lands
/// exactly on the boundary. Pieces of one closed ring that wrap around its
/// start point are joined back together. Pieces that close on themselves
/// without touching the boundary are interior rings; everything else is a
/// fragment for perimeter stitching.
///
/// An unclosed ring with an endpoint strictly inside the bound is closed
/// before clipping. If both endpoints are outside it is clipped as it is.
pub fn clip_rings<'a, I>(bound: &Bound, rings: I) -> Fragments
where
    I: IntoIterator<Item = &'a Ring>,
{
    let mut out = Fragments::default();

    for ring in rings {
        let (Some(&first), Some(&last)) = (ring.first(), ring.last()) else {
            continue;
        };

        let closed = ring.is_closed();
        let pieces = if !closed
            && (open_outcode(bound, first).is_inside() || open_outcode(bound, last).is_inside())
        {
            let mut points = ring.to_vec();
            points.push(first);
            clip_line(bound, &points, true)
        } else {
            clip_line(bound, ring, true)
        };

        let mut pieces = pieces.0;
        if closed && pieces.len() > 1 {
            join_wrapped(&mut pieces);
        }

        for piece in pieces {
            classify(bound, piece, &mut out);
        }
    }

    out
}

/// Splice pieces where one ends exactly where another starts
fn join_wrapped(pieces: &mut Vec<LineString>) {
    'scan: loop {
        for i in 0..pieces.len() {
            for j in 0..pieces.len() {
                if i == j || pieces[i].last() != pieces[j].first() {
                    continue;
                }
                let tail = pieces.remove(j);
                let i = if j < i { i - 1 } else { i };
                pieces[i].extend_from_slice(&tail[1..]);
                continue 'scan;
            }
        }
        break;
    }
}

fn classify(bound: &Bound, mut piece: LineString, out: &mut Fragments) {
    if piece.len() < 2 {
        return;
    }
    if !piece.is_closed() {
        out.open.push(piece);
        return;
    }

    let touch = piece
        .iter()
        .position(|p| !open_outcode(bound, *p).is_inside());
    match touch {
        None => out.closed.push(Ring(piece.into_inner())),
        Some(k) => {
            // Reopen the loop at the vertex where it touches the boundary
            piece.pop();
            piece.rotate_left(k);
            let start = piece[0];
            piece.push(start);
            out.open.push(piece);
        }
    }
}
