//! Insertion sort.

use crate::context::{Step, StepContext};
use crate::error::Result;
use crate::tag::ColorTag;
use crate::RunReport;

/// Sorts `seq` in place by inserting each element into the sorted prefix.
///
/// The selected element is highlighted by the index it was taken from, so
/// duplicates never confuse the highlight.
pub fn insertion_sort(seq: &mut [u32], ctx: &mut StepContext<'_>) -> Result<RunReport> {
    ctx.run("insertion", seq.len(), |ctx| insert_each(seq, ctx))
}

fn insert_each(seq: &mut [u32], ctx: &mut StepContext<'_>) -> Step {
    for i in 1..seq.len() {
        let selected = seq[i];
        ctx.emit(seq, &[(i, ColorTag::SelectedForInsertion)])?;

        // `hole` is where `selected` would go if the scan stopped now.
        let mut hole = i;
        while hole > 0 {
            ctx.count_comparison();
            if selected >= seq[hole - 1] {
                break;
            }
            seq[hole] = seq[hole - 1];
            ctx.count_shift();
            ctx.emit(
                seq,
                &[(hole - 1, ColorTag::Swapped), (hole, ColorTag::Swapped)],
            )?;
            hole -= 1;
        }

        seq[hole] = selected;
        ctx.emit(seq, &[(hole, ColorTag::WrittenBack)])?;
    }
    Ok(())
}
