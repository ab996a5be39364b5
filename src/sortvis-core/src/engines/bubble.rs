//! Bubble sort, in the usual shrinking form and the full-rescan form.

use crate::context::{Step, StepContext};
use crate::error::Result;
use crate::tag::ColorTag;
use crate::RunReport;

/// How far each inner pass reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PassBound {
    /// `0..n-1-i`: the placed tail is skipped.
    Shrinking,
    /// `0..n-1` on every pass: the placed tail is compared again.
    Full,
}

/// Bubble sort with a shrinking inner pass and early exit once a pass makes
/// no swap.
///
/// Every comparison emits one frame: [`ColorTag::Swapped`] on `j, j+1` when
/// the pair was exchanged, [`ColorTag::Compared`] otherwise.
pub fn bubble_sort(seq: &mut [u32], ctx: &mut StepContext<'_>) -> Result<RunReport> {
    ctx.run("bubble", seq.len(), |ctx| passes(seq, ctx, PassBound::Shrinking))
}

/// Bubble sort that rescans the whole sequence on every pass.
///
/// Kept deliberately wasteful so it can be watched next to
/// [`bubble_sort`]. The early exit after a swap-free pass still applies.
pub fn unoptimized_bubble_sort(seq: &mut [u32], ctx: &mut StepContext<'_>) -> Result<RunReport> {
    ctx.run("unoptimized-bubble", seq.len(), |ctx| {
        passes(seq, ctx, PassBound::Full)
    })
}

fn passes(seq: &mut [u32], ctx: &mut StepContext<'_>, bound: PassBound) -> Step {
    let n = seq.len();
    if n < 2 {
        return Ok(());
    }

    for i in 0..n - 1 {
        let mut sorted = true;
        let end = match bound {
            PassBound::Shrinking => n - 1 - i,
            PassBound::Full => n - 1,
        };

        for j in 0..end {
            ctx.count_comparison();
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
                ctx.count_swap();
                sorted = false;
                ctx.emit(seq, &[(j, ColorTag::Swapped), (j + 1, ColorTag::Swapped)])?;
            } else {
                ctx.emit(seq, &[(j, ColorTag::Compared), (j + 1, ColorTag::Compared)])?;
            }
        }

        if sorted {
            break;
        }
    }
    Ok(())
}
