//! Integer segment intersection between cell centers.

/// How three points are arranged when walked in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// The orientation of the ordered triple `(p, q, r)`.
pub fn orientation(p: (i8, i8), q: (i8, i8), r: (i8, i8)) -> Orientation {
    let [(px, py), (qx, qy), (rx, ry)] = [p, q, r].map(|(x, y)| (i32::from(x), i32::from(y)));
    let val = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    match val {
        0 => Orientation::Collinear,
        v if v > 0 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// Given collinear `p`, `q`, `r`, is `q` within the bounding box of `p` and `r`?
pub fn on_segment(p: (i8, i8), q: (i8, i8), r: (i8, i8)) -> bool {
    q.0 <= p.0.max(r.0) && q.0 >= p.0.min(r.0) && q.1 <= p.1.max(r.1) && q.1 >= p.1.min(r.1)
}

/// Do the closed segments `p1`–`q1` and `p2`–`q2` have a point in common?
///
/// Touching at an endpoint and collinear overlap both count.
pub fn segments_intersect(p1: (i8, i8), q1: (i8, i8), p2: (i8, i8), q2: (i8, i8)) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}
