//! Deferred-acceptance matching engine.
//!
//! ```text
//! Matcher::run(&mut proposers, &mut reviewers) -> MatchOutcome
//! ```
//!
//! ## Algorithm
//!
//! Every proposer, in group order, starts proposing at rank 0:
//!
//! 1. The proposer asks the reviewer at its current rank.
//! 2. A free reviewer tentatively holds the proposer.
//! 3. A reviewer that ranks its current holder higher rejects the proposer,
//!    which moves on to its next rank.
//! 4. Otherwise the reviewer switches to the proposer and the old holder is
//!    displaced. The displaced proposer resumes from the rank right after
//!    the reviewer that dropped it, before the next proposer in group order
//!    starts.
//!
//! When every proposer is held, the reviewers' holds become final and each
//! proposer receives the back-reference to its reviewer.
//!
//! ## Termination
//!
//! Rank pointers only move forward and each list has `n` entries, so a run
//! makes at most `n * n` proposals. The proposal chain is walked with an
//! explicit work slot, not recursion, so large groups cannot overflow the
//! stack.

use std::collections::HashMap;

use stablematch_types::{
    Group, MatchConfig, MatchOutcome, Pair, Participant, ParticipantId, Result,
    StableMatchError,
};

use crate::{determinism::compute_pairing_root, validator};

/// Run the engine with the default configuration.
///
/// `group_a` proposes, `group_b` reviews.
///
/// # Errors
/// - [`StableMatchError::InvalidGroups`] if the groups fail validation
///   (nothing is mutated).
/// - [`StableMatchError::GroupTooLarge`] above the default size limit.
pub fn match_groups(group_a: &mut Group, group_b: &mut Group) -> Result<MatchOutcome> {
    Matcher::default().run(group_a, group_b)
}

/// The deferred-acceptance matcher.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Pair `group_a` (proposers) with `group_b` (reviewers).
    ///
    /// On success every participant's `current_match` is set and the
    /// pairing is stable and proposer-optimal. Any match state left over
    /// from an earlier run is replaced. On error neither group is touched:
    /// the pairing is verified on internal state before it is written back.
    pub fn run(&self, group_a: &mut Group, group_b: &mut Group) -> Result<MatchOutcome> {
        let size = group_a.len().max(group_b.len());
        if size > self.config.max_group_size {
            tracing::warn!(
                size,
                max = self.config.max_group_size,
                "Refusing to match: group too large"
            );
            return Err(StableMatchError::GroupTooLarge {
                size,
                max: self.config.max_group_size,
            });
        }

        if let Err(err) = validator::check(group_a, group_b) {
            tracing::warn!(error = %err, "Refusing to match invalid groups");
            return Err(err);
        }

        let table = RankTable::build(group_a, group_b)?;
        let run = propose_all(group_a.members(), &table)?;

        if self.config.verify_stability {
            if let Some((a_idx, b_idx)) = first_blocking_pair(&table, &run.holds) {
                let proposer = group_a.members()[a_idx].id().clone();
                let reviewer = group_b.members()[b_idx].id().clone();
                tracing::error!(%proposer, %reviewer, "Blocking pair after matching");
                return Err(StableMatchError::StabilityViolation { proposer, reviewer });
            }
        }

        // Post-pass: reviewers take their final holder, proposers get the
        // back-reference.
        let mut a_partner: Vec<Option<ParticipantId>> = vec![None; group_a.len()];
        let mut b_partner: Vec<Option<ParticipantId>> = vec![None; group_b.len()];
        for (b_idx, holder) in run.holds.iter().enumerate() {
            if let Some(a_idx) = *holder {
                b_partner[b_idx] = Some(group_a.members()[a_idx].id().clone());
                a_partner[a_idx] = Some(group_b.members()[b_idx].id().clone());
            }
        }
        group_a.clear_matches();
        group_b.clear_matches();
        for (member, partner) in group_b.iter_mut().zip(b_partner) {
            member.set_current_match(partner);
        }
        for (member, partner) in group_a.iter_mut().zip(a_partner) {
            member.set_current_match(partner);
        }

        let pairs: Vec<Pair> = group_a
            .iter()
            .filter_map(|m| {
                m.current_match()
                    .map(|partner| Pair::new(m.id().clone(), partner.clone()))
            })
            .collect();

        let pairing_root = compute_pairing_root(&pairs);

        tracing::info!(
            pairs = pairs.len(),
            proposals = run.proposals,
            displacements = run.displacements,
            pairing_root = hex::encode(pairing_root),
            "Matching complete"
        );

        Ok(MatchOutcome {
            pairs,
            proposals: run.proposals,
            displacements: run.displacements,
            pairing_root,
        })
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Index-based view of both groups' rankings.
///
/// Proposer `a` and reviewer `b` are positions in their groups.
/// `proposer_prefs[a][r]` is the reviewer `a` ranks at `r`;
/// `proposer_rank[a][b]` and `reviewer_rank[b][a]` invert the lists.
struct RankTable {
    proposer_prefs: Vec<Vec<usize>>,
    proposer_rank: Vec<Vec<usize>>,
    reviewer_rank: Vec<Vec<usize>>,
}

impl RankTable {
    fn build(group_a: &Group, group_b: &Group) -> Result<Self> {
        let a_index = index_of(group_a);
        let b_index = index_of(group_b);

        let proposer_prefs = group_a
            .iter()
            .map(|m| resolve(m, &b_index))
            .collect::<Result<Vec<_>>>()?;
        let reviewer_prefs = group_b
            .iter()
            .map(|m| resolve(m, &a_index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            proposer_rank: invert(&proposer_prefs, group_b.len()),
            reviewer_rank: invert(&reviewer_prefs, group_a.len()),
            proposer_prefs,
        })
    }
}

/// Positions of every member, keyed by ID. An ID shared by several
/// members maps to all of their positions in group order.
fn index_of(group: &Group) -> HashMap<&ParticipantId, Vec<usize>> {
    let mut index: HashMap<&ParticipantId, Vec<usize>> = HashMap::new();
    for (i, m) in group.iter().enumerate() {
        index.entry(m.id()).or_default().push(i);
    }
    index
}

/// Turn a ranking of IDs into a ranking of positions. The k-th mention of
/// an ID refers to the k-th member carrying it.
fn resolve(
    member: &Participant,
    index: &HashMap<&ParticipantId, Vec<usize>>,
) -> Result<Vec<usize>> {
    let mut seen: HashMap<&ParticipantId, usize> = HashMap::new();
    member
        .preferences()
        .iter()
        .map(|p| -> Result<usize> {
            let occurrence = seen.entry(p).or_default();
            let position = index
                .get(p)
                .and_then(|positions| positions.get(*occurrence))
                .copied()
                .ok_or_else(|| StableMatchError::UnknownParticipant(p.clone()))?;
            *occurrence += 1;
            Ok(position)
        })
        .collect()
}

/// `rank[x][y]` = position of `y` in `prefs[x]`. Unranked entries stay at
/// `usize::MAX` (worst).
fn invert(prefs: &[Vec<usize>], other_len: usize) -> Vec<Vec<usize>> {
    prefs
        .iter()
        .map(|list| {
            let mut rank = vec![usize::MAX; other_len];
            for (r, &other) in list.iter().enumerate() {
                rank[other] = r;
            }
            rank
        })
        .collect()
}

/// State of one pass over all proposers.
struct ProposalRun {
    /// `holds[b]` = proposer currently held by reviewer `b`.
    holds: Vec<Option<usize>>,
    proposals: u64,
    displacements: u64,
}

/// A proposer about to ask the reviewer at `rank`.
#[derive(Debug, Clone, Copy)]
struct Proposal {
    proposer: usize,
    rank: usize,
}

fn propose_all(proposers: &[Participant], table: &RankTable) -> Result<ProposalRun> {
    let reviewer_count = table.reviewer_rank.len();
    let mut run = ProposalRun {
        holds: vec![None; reviewer_count],
        proposals: 0,
        displacements: 0,
    };

    for start in 0..proposers.len() {
        let mut pending = Some(Proposal {
            proposer: start,
            rank: 0,
        });

        while let Some(Proposal { proposer, rank }) = pending.take() {
            let Some(&target) = table.proposer_prefs[proposer].get(rank) else {
                return Err(StableMatchError::PreferenceExhausted {
                    participant: proposers[proposer].id().clone(),
                    rank,
                });
            };
            run.proposals += 1;

            tracing::trace!(
                proposer = %proposers[proposer].id(),
                rank,
                reviewer = target,
                "Proposal"
            );

            match run.holds[target] {
                None => {
                    run.holds[target] = Some(proposer);
                }
                Some(holder)
                    if table.reviewer_rank[target][holder]
                        < table.reviewer_rank[target][proposer] =>
                {
                    pending = Some(Proposal {
                        proposer,
                        rank: rank + 1,
                    });
                }
                Some(holder) => {
                    // The reviewer switches before the displaced proposer moves
                    // on, so its chain sees the reviewer's new holder.
                    run.holds[target] = Some(proposer);
                    run.displacements += 1;

                    tracing::debug!(
                        displaced = %proposers[holder].id(),
                        by = %proposers[proposer].id(),
                        reviewer = target,
                        "Proposer displaced"
                    );

                    pending = Some(Proposal {
                        proposer: holder,
                        rank: table.proposer_rank[holder][target] + 1,
                    });
                }
            }
        }
    }

    Ok(run)
}

/// First `(proposer, reviewer)` pair, by position, that would both rather
/// be together than with what `holds` gives them.
fn first_blocking_pair(table: &RankTable, holds: &[Option<usize>]) -> Option<(usize, usize)> {
    let mut partner_of = vec![None; table.proposer_prefs.len()];
    for (b, holder) in holds.iter().enumerate() {
        if let Some(a) = *holder {
            partner_of[a] = Some(b);
        }
    }

    for (a, prefs) in table.proposer_prefs.iter().enumerate() {
        // Walk `a`'s ranking down to its own partner; everyone below is worse.
        for &b in prefs {
            if partner_of[a] == Some(b) {
                break;
            }
            let reviewer_wants = match holds[b] {
                None => true,
                Some(holder) => table.reviewer_rank[b][a] < table.reviewer_rank[b][holder],
            };
            if reviewer_wants {
                return Some((a, b));
            }
        }
    }
    None
}
