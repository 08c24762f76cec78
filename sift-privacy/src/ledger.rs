//! Per-subject epsilon ledger. Spend is monotonically non-decreasing and
//! can never exceed the total; the check-and-debit is all-or-nothing.

/// One subject's budget state. `epsilon_total` is fixed at creation and the
/// ledger is reset only by external administrative action (dropping it).
#[derive(Debug, Clone)]
pub struct BudgetLedger {
    epsilon_total: f64,
    epsilon_spent: f64,
    operations: usize,
}

impl BudgetLedger {
    pub fn new(epsilon_total: f64) -> Self {
        Self {
            epsilon_total,
            epsilon_spent: 0.0,
            operations: 0,
        }
    }

    pub fn epsilon_total(&self) -> f64 {
        self.epsilon_total
    }

    pub fn epsilon_spent(&self) -> f64 {
        self.epsilon_spent
    }

    /// `max(0, total - spent)`.
    pub fn remaining(&self) -> f64 {
        (self.epsilon_total - self.epsilon_spent).max(0.0)
    }

    pub fn operations(&self) -> usize {
        self.operations
    }

    /// Debit `amount` if and only if it fits in the remaining budget.
    /// On refusal the ledger is untouched. Returns the remaining budget at
    /// refusal time so the caller can surface it.
    pub fn try_debit(&mut self, amount: f64) -> Result<(), f64> {
        // A tiny tolerance absorbs accumulated float error so that e.g.
        // ten 0.1 debits exactly exhaust a 1.0 budget.
        const TOLERANCE: f64 = 1e-9;
        if self.epsilon_spent + amount > self.epsilon_total + TOLERANCE {
            return Err(self.remaining());
        }
        self.epsilon_spent = (self.epsilon_spent + amount).min(self.epsilon_total);
        self.operations += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_until_exhausted() {
        let mut ledger = BudgetLedger::new(1.0);
        for _ in 0..10 {
            assert!(ledger.try_debit(0.1).is_ok());
        }
        assert!(ledger.try_debit(0.1).is_err());
        assert_eq!(ledger.operations(), 10);
        assert!(ledger.epsilon_spent() <= ledger.epsilon_total());
    }

    #[test]
    fn refused_debit_leaves_ledger_untouched() {
        let mut ledger = BudgetLedger::new(0.5);
        ledger.try_debit(0.4).unwrap();
        let spent_before = ledger.epsilon_spent();
        assert!(ledger.try_debit(0.2).is_err());
        assert_eq!(ledger.epsilon_spent(), spent_before);
        assert_eq!(ledger.operations(), 1);
    }

    #[test]
    fn spend_is_monotonic() {
        let mut ledger = BudgetLedger::new(1.0);
        let mut last = 0.0;
        for _ in 0..20 {
            let _ = ledger.try_debit(0.07);
            assert!(ledger.epsilon_spent() >= last);
            last = ledger.epsilon_spent();
        }
    }
}
