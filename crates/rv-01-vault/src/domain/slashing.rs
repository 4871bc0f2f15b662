//! # Slashing Engine
//!
//! Decides which stake buckets a seizure may touch and splits it across
//! them proportionally.
//!
//! ## Bucket scope
//!
//! ```text
//! capture epoch   <  current   →  active + withdrawals[cur] + withdrawals[cur+1]
//! capture epoch   >= current   →  active + withdrawals[cur+1]
//! ```
//!
//! A capture in the current (or a future) epoch predates nothing in
//! `withdrawals[cur]`: those withdrawals were requested in the previous
//! epoch, before the capture, so their holders left before the offense.

use shared_types::math::{self, Rounding};
use shared_types::{Epoch, MathError, U256};

/// Which withdrawal buckets were live at the capture time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlashScope {
    /// Active stake and the next epoch's bucket.
    CurrentEpoch,
    /// Active stake and both the current and next epoch's buckets.
    PreviousEpoch,
}

impl SlashScope {
    pub fn classify(capture_epoch: Epoch, current_epoch: Epoch) -> Self {
        if capture_epoch < current_epoch {
            SlashScope::PreviousEpoch
        } else {
            SlashScope::CurrentEpoch
        }
    }
}

/// Stake components in scope for one seizure.
///
/// `current_withdrawals` is zero for [`SlashScope::CurrentEpoch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlashableBuckets {
    pub active: U256,
    pub next_withdrawals: U256,
    pub current_withdrawals: U256,
}

impl SlashableBuckets {
    pub fn scoped(
        scope: SlashScope,
        active: U256,
        current_withdrawals: U256,
        next_withdrawals: U256,
    ) -> Self {
        Self {
            active,
            next_withdrawals,
            current_withdrawals: match scope {
                SlashScope::PreviousEpoch => current_withdrawals,
                SlashScope::CurrentEpoch => U256::zero(),
            },
        }
    }

    pub fn total(&self) -> Result<U256, MathError> {
        math::checked_add(
            math::checked_add(self.active, self.next_withdrawals)?,
            self.current_withdrawals,
        )
    }
}

/// Amount taken from each bucket. Sums to the seized amount exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlashSplit {
    pub active: U256,
    pub next_withdrawals: U256,
    pub current_withdrawals: U256,
}

impl SlashSplit {
    pub fn total(&self) -> U256 {
        self.active + self.next_withdrawals + self.current_withdrawals
    }
}

/// Splits a seizure of up to `amount` across `buckets`.
///
/// Returns the split of `min(amount, buckets.total())`.
pub fn compute_split(amount: U256, buckets: &SlashableBuckets) -> Result<SlashSplit, MathError> {
    let base = buckets.total()?;
    let slashed = amount.min(base);
    let parts = split_pro_rata(
        slashed,
        &[
            buckets.active,
            buckets.next_withdrawals,
            buckets.current_withdrawals,
        ],
    )?;
    Ok(SlashSplit {
        active: parts[0],
        next_withdrawals: parts[1],
        current_withdrawals: parts[2],
    })
}

/// Divides `amount` over `buckets` in proportion to their sizes.
///
/// Every bucket but the last takes `floor(amount * b / base)`; the last
/// takes the remainder. If the remainder exceeds the last bucket, the excess
/// spills onto earlier buckets with spare capacity, in order. No reduction
/// ever exceeds its bucket and the reductions sum to `amount`.
///
/// # Errors
/// - `Overflow` if `amount` exceeds the sum of `buckets`
pub fn split_pro_rata(amount: U256, buckets: &[U256]) -> Result<Vec<U256>, MathError> {
    let mut reductions = vec![U256::zero(); buckets.len()];
    if amount.is_zero() || buckets.is_empty() {
        return Ok(reductions);
    }

    let base = buckets
        .iter()
        .try_fold(U256::zero(), |acc, b| math::checked_add(acc, *b))?;
    if amount > base {
        return Err(MathError::Overflow);
    }

    let last = buckets.len() - 1;
    let mut assigned = U256::zero();
    for (i, bucket) in buckets.iter().enumerate().take(last) {
        reductions[i] = math::mul_div(amount, *bucket, base, Rounding::Floor)?;
        assigned += reductions[i];
    }

    let residual = amount - assigned;
    if residual <= buckets[last] {
        reductions[last] = residual;
        return Ok(reductions);
    }

    reductions[last] = buckets[last];
    let mut excess = residual - buckets[last];
    for (i, bucket) in buckets.iter().enumerate().take(last) {
        if excess.is_zero() {
            break;
        }
        let take = excess.min(*bucket - reductions[i]);
        reductions[i] += take;
        excess -= take;
    }
    Ok(reductions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u64) -> U256 {
        U256::from(v)
    }

    #[test]
    fn test_classify() {
        assert_eq!(SlashScope::classify(4, 5), SlashScope::PreviousEpoch);
        assert_eq!(SlashScope::classify(1, 5), SlashScope::PreviousEpoch);
        assert_eq!(SlashScope::classify(5, 5), SlashScope::CurrentEpoch);
        assert_eq!(SlashScope::classify(6, 5), SlashScope::CurrentEpoch);
    }

    #[test]
    fn test_current_epoch_scope_ignores_current_bucket() {
        let buckets = SlashableBuckets::scoped(SlashScope::CurrentEpoch, u(100), u(50), u(30));
        assert_eq!(buckets.total().unwrap(), u(130));
        assert_eq!(buckets.current_withdrawals, U256::zero());
    }

    #[test]
    fn test_split_is_proportional_and_exact() {
        let parts = split_pro_rata(u(300), &[u(600), u(300), u(100)]).unwrap();
        assert_eq!(parts, vec![u(180), u(90), u(30)]);
    }

    #[test]
    fn test_split_residual_goes_last() {
        let parts = split_pro_rata(u(7), &[u(3), u(3), u(3)]).unwrap();
        assert_eq!(parts.iter().fold(U256::zero(), |a, b| a + *b), u(7));
        assert_eq!(parts, vec![u(2), u(2), u(3)]);
    }

    #[test]
    fn test_split_spills_when_last_bucket_is_short() {
        // floor(5*1/6)=0, floor(5*5/6)=4, residual 1 > empty last bucket
        let parts = split_pro_rata(u(5), &[u(1), u(5), u(0)]).unwrap();
        assert_eq!(parts.iter().fold(U256::zero(), |a, b| a + *b), u(5));
        assert_eq!(parts[2], U256::zero());
        assert!(parts[0] <= u(1) && parts[1] <= u(5));
    }

    #[test]
    fn test_split_more_than_base_rejected() {
        let err = split_pro_rata(u(10), &[u(3), u(3), u(3)]).unwrap_err();
        assert_eq!(err, MathError::Overflow);
    }

    #[test]
    fn test_split_full_base() {
        let parts = split_pro_rata(u(1_000), &[u(700), u(300)]).unwrap();
        assert_eq!(parts, vec![u(700), u(300)]);
    }

    #[test]
    fn test_compute_split_caps_at_base() {
        let buckets = SlashableBuckets::scoped(SlashScope::PreviousEpoch, u(500), u(300), u(200));
        let split = compute_split(u(5_000), &buckets).unwrap();
        assert_eq!(split.total(), u(1_000));
        assert_eq!(split.active, u(500));
        assert_eq!(split.current_withdrawals, u(300));
        assert_eq!(split.next_withdrawals, u(200));
    }

    #[test]
    fn test_compute_split_current_epoch_two_buckets() {
        let buckets = SlashableBuckets::scoped(SlashScope::CurrentEpoch, u(1_500), u(999), u(500));
        let split = compute_split(u(400), &buckets).unwrap();

        assert_eq!(split.active, u(300));
        assert_eq!(split.next_withdrawals, u(100));
        assert_eq!(split.current_withdrawals, U256::zero());
    }

    #[test]
    fn test_zero_amount() {
        let buckets = SlashableBuckets::scoped(SlashScope::PreviousEpoch, u(5), u(5), u(5));
        assert_eq!(compute_split(U256::zero(), &buckets).unwrap(), SlashSplit::default());
    }
}
