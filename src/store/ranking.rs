//! Leaderboard rank recomputation.
//!
//! A miner's rank is derived, never authoritative: it must be recomputed
//! whenever the score of any miner changes. Ranks are dense and 1-based with
//! no gaps, ordered descending by score with ties broken by address so the
//! ordering is deterministic across runs.

use crate::domain::Miner;

/// Sorts miners by descending score and assigns dense 1-based ranks.
///
/// Score ties are broken by ascending address, which is unique per miner, so
/// the resulting order (and therefore every rank) is fully deterministic.
///
/// # Examples
///
/// ```
/// use chainview::domain::Miner;
/// use chainview::store::recompute_ranks;
///
/// let mut miners = vec![
///     Miner::new("BlockDigger", "0xabcdef1234567890abcdef1234567890abcdef12", 12890),
///     Miner::new("CryptoMiner_Pro", "0x1234567890abcdef1234567890abcdef12345678", 15420),
/// ];
///
/// recompute_ranks(&mut miners);
/// assert_eq!(miners[0].name, "CryptoMiner_Pro");
/// assert_eq!(miners[0].rank, 1);
/// assert_eq!(miners[1].rank, 2);
/// ```
pub fn recompute_ranks(miners: &mut [Miner]) {
    miners.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.address.cmp(&b.address))
    });

    for (index, miner) in miners.iter_mut().enumerate() {
        miner.rank = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
    }
}
