use anyhow::Result;
use mpi::collective::SystemOperation;
use mpi::topology::Rank;
use mpi::traits::*;
use termcolor::WriteColor;

use crate::reporter;
use crate::types::{ProbeOutcome, ProbeSpec};

/// Rank that receives the reduction and reports the verdict.
pub const ROOT_RANK: Rank = 0;

/// What one process saw during a probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankRun {
    pub rank: Rank,
    pub group_size: Rank,
    /// Present only on the root rank; other ranks never learn the verdict.
    pub outcome: Option<ProbeOutcome>,
}

impl RankRun {
    /// Exit status for this process.
    ///
    /// Non-root ranks keep their initial success flag no matter what the
    /// reduction produced, so only the root's exit code carries the real
    /// verdict.
    pub fn exit_code(&self) -> i32 {
        self.outcome
            .as_ref()
            .map_or(0, |outcome| outcome.verdict.exit_code())
    }
}

/// Run the probe over `world`.
///
/// Every rank contributes its payload to a single sum reduction rooted at
/// rank 0; the root evaluates the aggregate and writes the verdict lines to
/// `out`. The reduction is the only synchronization point: a rank that never
/// reaches it stalls the whole group, and no timeout is applied here.
pub fn run<C, W>(spec: &ProbeSpec, world: &C, out: &mut W) -> Result<RankRun>
where
    C: Communicator,
    W: WriteColor,
{
    let rank = world.rank();
    let group_size = world.size();
    let payload = spec.rank_payload(rank);
    let root = world.process_at_rank(ROOT_RANK);

    if rank == ROOT_RANK {
        let target = spec.reduction_target();
        reporter::print_target(out, target)?;

        let mut reduced = vec![0i32; spec.payload_width];
        root.reduce_into_root(&payload[..], &mut reduced[..], SystemOperation::sum());

        let outcome = ProbeOutcome::evaluate(target, reduced);
        reporter::print_outcome(out, &outcome)?;

        Ok(RankRun {
            rank,
            group_size,
            outcome: Some(outcome),
        })
    } else {
        root.reduce_into(&payload[..], SystemOperation::sum());

        Ok(RankRun {
            rank,
            group_size,
            outcome: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    #[test]
    fn test_root_exit_code_follows_verdict() {
        let pass = RankRun {
            rank: ROOT_RANK,
            group_size: 4,
            outcome: Some(ProbeOutcome::evaluate(100, vec![10, 20, 30, 40])),
        };
        assert_eq!(pass.exit_code(), 0);

        let fail = RankRun {
            rank: ROOT_RANK,
            group_size: 2,
            outcome: Some(ProbeOutcome::evaluate(100, vec![3, 6, 9, 12])),
        };
        assert_eq!(fail.outcome.as_ref().unwrap().verdict, Verdict::Mismatched);
        assert_eq!(fail.exit_code(), 1);
    }

    #[test]
    fn test_non_root_exit_code_is_always_success() {
        // Non-root ranks never see the reduced values, so they report
        // success even when the job topology is wrong. Job-status tooling
        // must read rank 0's exit code, not the others'.
        let run = RankRun {
            rank: 1,
            group_size: 2,
            outcome: None,
        };
        assert_eq!(run.exit_code(), 0);
    }
}
