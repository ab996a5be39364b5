//! Shellsort with Shell's original halving gaps.

use crate::context::{Step, StepContext};
use crate::error::Result;
use crate::tag::ColorTag;
use crate::RunReport;

/// Gaps used for a sequence of length `n`: `n/2, n/4, ..., 1`.
///
/// Empty for `n < 2`.
pub fn gap_sequence(n: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(n / 2), |&gap| Some(gap / 2)).take_while(|&gap| gap > 0)
}

/// Sorts `seq` in place with gapped insertion passes.
///
/// Each shift emits [`ColorTag::Swapped`] on the two slots involved. When
/// the scan for an element stops, exactly one more frame is emitted: the
/// hole gets [`ColorTag::WrittenBack`] and the element that stopped the scan
/// (if any) gets [`ColorTag::Compared`]. The saved element is written into
/// the hole after that frame.
pub fn shellsort(seq: &mut [u32], ctx: &mut StepContext<'_>) -> Result<RunReport> {
    ctx.run("shellsort", seq.len(), |ctx| gapped_passes(seq, ctx))
}

fn gapped_passes(seq: &mut [u32], ctx: &mut StepContext<'_>) -> Step {
    let n = seq.len();

    for gap in gap_sequence(n) {
        for i in gap..n {
            let temp = seq[i];
            let mut j = i;

            while j >= gap {
                ctx.count_comparison();
                if seq[j - gap] <= temp {
                    break;
                }
                seq[j] = seq[j - gap];
                ctx.count_shift();
                ctx.emit(seq, &[(j - gap, ColorTag::Swapped), (j, ColorTag::Swapped)])?;
                j -= gap;
            }

            ctx.emit_with(seq, |tags| {
                if j >= gap {
                    tags[j - gap] = ColorTag::Compared;
                }
                tags[j] = ColorTag::WrittenBack;
            })?;
            seq[j] = temp;
        }
    }
    Ok(())
}
