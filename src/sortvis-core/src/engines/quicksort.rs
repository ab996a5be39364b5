//! Quicksort with a Lomuto-style partition around the first element.
//!
//! The pivot is always `seq[lo]`. There is no median-of-three and no
//! randomization, so sorted and reverse-sorted inputs hit the quadratic
//! worst case. That is what the animation is supposed to show.

use crate::context::{Step, StepContext};
use crate::error::Result;
use crate::tag::ColorTag;
use crate::RunReport;

/// Sorts `seq` in place with recursive quicksort.
///
/// Frames:
/// - each swap inside a partition: pivot at `lo`, swapped slots `i` and `j`
/// - pivot placement: [`ColorTag::Swapped`] at `lo` and the pivot's final slot
/// - after each partition: left part, pivot, right part
/// - once at the end: every index [`ColorTag::Normal`]
pub fn quicksort(seq: &mut [u32], ctx: &mut StepContext<'_>) -> Result<RunReport> {
    ctx.run("quicksort", seq.len(), |ctx| {
        if seq.len() < 2 {
            return Ok(());
        }
        let last = seq.len() - 1;
        sort_range(seq, ctx, 0, last)?;
        ctx.emit(seq, &[])
    })
}

fn sort_range(seq: &mut [u32], ctx: &mut StepContext<'_>, lo: usize, hi: usize) -> Step {
    if lo >= hi {
        return Ok(());
    }

    let pivot = partition(seq, ctx, lo, hi)?;

    ctx.emit_with(seq, |tags| {
        tags[lo..pivot].fill(ColorTag::PartitionLeft);
        tags[pivot] = ColorTag::Pivot;
        tags[pivot + 1..=hi].fill(ColorTag::PartitionRight);
    })?;

    if pivot > lo {
        sort_range(seq, ctx, lo, pivot - 1)?;
    }
    sort_range(seq, ctx, pivot + 1, hi)
}

/// Partitions `seq[lo..=hi]` around `seq[lo]` and returns the pivot's final
/// index.
fn partition(seq: &mut [u32], ctx: &mut StepContext<'_>, lo: usize, hi: usize) -> Step<usize> {
    ctx.count_partition();
    let pivot = seq[lo];
    let mut i = lo + 1;

    for j in lo + 1..=hi {
        ctx.count_comparison();
        if seq[j] < pivot {
            seq.swap(i, j);
            if i != j {
                ctx.count_swap();
            }
            ctx.emit(
                seq,
                &[
                    (lo, ColorTag::Pivot),
                    (i, ColorTag::Swapped),
                    (j, ColorTag::Swapped),
                ],
            )?;
            i += 1;
        }
    }

    let placed = i - 1;
    seq.swap(lo, placed);
    if placed != lo {
        ctx.count_swap();
    }
    ctx.emit(seq, &[(lo, ColorTag::Swapped), (placed, ColorTag::Swapped)])?;

    Ok(placed)
}
