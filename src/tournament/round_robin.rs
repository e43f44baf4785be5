//! Single round-robin pass over a list
//!
//! Pairs are visited as (0,1), (0,2), ..., (0,n-1), (1,2), ... and every
//! comparison reads the ratings written by the comparisons before it. The
//! pass is therefore sequential; reordering or batching the updates changes
//! the results.

use crate::error::{RankingError, Result};
use crate::rating::RatingModel;
use crate::types::{ListEntry, Winner};

/// Number of comparisons in one pass over `n` entries
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Compare every unordered pair of `entries` exactly once, updating
/// ratings in place.
///
/// The entry with the smaller declared rank wins each match. New ratings are
/// floored before being written back. `list_name` is only used for errors.
pub fn run_pass<M>(list_name: &str, entries: &mut [ListEntry], model: &M) -> Result<()>
where
    M: RatingModel + ?Sized,
{
    let n = entries.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (rank_a, rating_a) = (entries[i].declared_rank, entries[i].rating);
            let (rank_b, rating_b) = (entries[j].declared_rank, entries[j].rating);

            let winner = Winner::from_ranks(rank_a, rank_b).ok_or_else(|| {
                RankingError::DuplicateDeclaredRank {
                    list: list_name.to_string(),
                    rank: rank_a,
                }
            })?;

            let (new_a, new_b) = model.update_ratings(rating_a, rating_b, winner);

            let new_a = checked_floor(list_name, &entries[i], new_a)?;
            let new_b = checked_floor(list_name, &entries[j], new_b)?;
            entries[i].rating = new_a;
            entries[j].rating = new_b;
        }
    }

    Ok(())
}

fn checked_floor(list_name: &str, entry: &ListEntry, rating: f64) -> Result<f64> {
    if !rating.is_finite() {
        return Err(RankingError::NonFiniteRating {
            list: list_name.to_string(),
            item: entry.item.clone(),
        }
        .into());
    }
    Ok(rating.floor())
}
