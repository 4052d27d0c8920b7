use tracing::trace;

use crate::{segments_intersect, Board, BoundingBox, Link};

/// The offsets from a cell to all cells it can be linked with.
///
/// Links are formed in this order and added to the board as soon as they are
/// found, so later candidates of the same call observe them.
pub const LINK_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (-1, 2),
    (2, -1),
    (1, -2),
    (2, 1),
    (1, 2),
];

/// Creates all valid links from the owned cell at `(x, y)`.
///
/// Returns the new links in the order they were added to the board. Nothing
/// happens if the cell has no owner.
pub fn form_links(board: &mut Board, x: i8, y: i8) -> Vec<Link> {
    let mut formed = Vec::new();
    let Some(owner) = board.field(x, y).ok().and_then(|cell| cell.owner) else {
        return formed;
    };
    for (dx, dy) in LINK_OFFSETS {
        let (tx, ty) = (x + dx, y + dy);
        match board.field(tx, ty) {
            Ok(target) if target.owner == Some(owner) => {}
            _ => continue,
        }
        let link = Link::new((x, y), (tx, ty), owner);
        if board.has_link(&link) {
            continue;
        }
        if let Some(blocker) = blocking_link(board, (x, y), (tx, ty)) {
            trace!(?link, ?blocker, "Link is blocked");
            continue;
        }
        trace!(?link, "Link formed");
        board.add_link(link);
        formed.push(link);
    }
    formed
}

/// Finds an existing link that crosses the segment between `from` and `to`.
///
/// Only links touching an owned cell inside the rectangle spanned by the two
/// endpoints can cross a link of knight-move length.
pub fn blocking_link(board: &Board, from: (i8, i8), to: (i8, i8)) -> Option<Link> {
    BoundingBox::spanning(from, to)
        .cells()
        .filter(|&pos| pos != from && pos != to)
        .filter(|&(bx, by)| board.field(bx, by).is_ok_and(|cell| cell.owner.is_some()))
        .find_map(|(bx, by)| {
            board
                .links_at(bx, by)
                .find(|link| {
                    let (a, b) = link.endpoints();
                    segments_intersect(a, b, from, to)
                })
                .copied()
        })
}
