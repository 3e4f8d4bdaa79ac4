//! Z-order arrangement over a figure subset.

use crate::drawing::{Drawing, DrawingError};
use crate::figures::FigureId;
use serde::{Deserialize, Serialize};

/// Direction of an arrangement operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrangeDirection {
    /// Move toward the front (painted last, hit-tested first).
    Front,
    /// Move toward the back (painted first).
    Back,
}

impl ArrangeDirection {
    /// The inverse direction.
    pub fn opposite(self) -> Self {
        match self {
            ArrangeDirection::Front => ArrangeDirection::Back,
            ArrangeDirection::Back => ArrangeDirection::Front,
        }
    }
}

/// Move `targets` to the extreme of the drawing's z-order.
///
/// Targets are first sorted by their current z-index, which fixes the order
/// in which the moves are applied: figures moved together keep their mutual
/// order at the new extreme. Figures outside the target set keep their
/// mutual order as well. Every target must be a member of the drawing; a
/// non-member fails the whole call before any reordering happens. An empty
/// target set is a silent no-op.
pub fn arrange(
    drawing: &mut Drawing,
    targets: &[FigureId],
    direction: ArrangeDirection,
) -> Result<(), DrawingError> {
    for id in targets {
        if !drawing.contains(*id) {
            return Err(DrawingError::NotAMember(*id));
        }
    }
    if targets.is_empty() {
        return Ok(());
    }

    let ordered = drawing.sort_by_z_order(targets);
    log::debug!("arrange {direction:?}: {} figure(s)", ordered.len());
    match direction {
        ArrangeDirection::Front => {
            // Walk back-to-front so each push lands behind the next.
            for id in ordered {
                drawing.bring_to_front(id)?;
            }
        }
        ArrangeDirection::Back => {
            // Walk front-to-back so each insert at 0 lands behind the last.
            for id in ordered.into_iter().rev() {
                drawing.send_to_back(id)?;
            }
        }
    }
    Ok(())
}
