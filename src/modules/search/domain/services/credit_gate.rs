use std::sync::atomic::{AtomicU32, Ordering};

/// Balance at or below which the credit indicator warns the user
pub const LOW_CREDIT_THRESHOLD: u32 = 2;

/// Session-scoped usage counter.
///
/// Advisory only: `consume` never fails, it just floors at zero. Callers that
/// want strict enforcement check `can_search` before submitting.
#[derive(Debug)]
pub struct CreditGate {
    starting_balance: u32,
    balance: AtomicU32,
}

impl CreditGate {
    pub fn new(starting_balance: u32) -> Self {
        Self {
            starting_balance,
            balance: AtomicU32::new(starting_balance),
        }
    }

    pub fn can_search(&self) -> bool {
        self.balance() > 0
    }

    /// Spend one credit for an attempt, returning the new balance
    pub fn consume(&self) -> u32 {
        let previous = self
            .balance
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |b| {
                Some(b.saturating_sub(1))
            })
            .unwrap_or(0);
        previous.saturating_sub(1)
    }

    /// Spend one credit only if one is left
    pub fn try_consume(&self) -> bool {
        self.balance
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |b| b.checked_sub(1))
            .is_ok()
    }

    pub fn balance(&self) -> u32 {
        self.balance.load(Ordering::SeqCst)
    }

    pub fn starting_balance(&self) -> u32 {
        self.starting_balance
    }

    pub fn is_low(&self) -> bool {
        self.balance() <= LOW_CREDIT_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_decrements_by_one() {
        let gate = CreditGate::new(8);
        assert_eq!(gate.consume(), 7);
        assert_eq!(gate.balance(), 7);
        assert_eq!(gate.starting_balance(), 8);
    }

    #[test]
    fn test_balance_floors_at_zero() {
        let gate = CreditGate::new(2);
        for _ in 0..5 {
            gate.consume();
        }
        assert_eq!(gate.balance(), 0);
        assert!(!gate.can_search());
    }

    #[test]
    fn test_balance_after_n_attempts() {
        for n in 0..12u32 {
            let gate = CreditGate::new(8);
            for _ in 0..n {
                gate.consume();
            }
            assert_eq!(gate.balance(), 8u32.saturating_sub(n));
        }
    }

    #[test]
    fn test_try_consume_refuses_at_zero() {
        let gate = CreditGate::new(1);
        assert!(gate.try_consume());
        assert!(!gate.try_consume());
        assert_eq!(gate.balance(), 0);
    }

    #[test]
    fn test_low_balance_indicator() {
        let gate = CreditGate::new(3);
        assert!(!gate.is_low());
        gate.consume();
        assert!(gate.is_low());
    }
}
