//! The balance seam between the round engine and its caller.

/// A balance the engine can debit stakes from and credit settlements to.
///
/// The engine never stores the balance; each staking or settling call
/// borrows it for the duration of the call.
pub trait Bankroll {
    /// Returns the amount currently available.
    fn balance(&self) -> usize;

    /// Removes `amount`, returning `false` and leaving the balance untouched
    /// when it is not covered.
    fn withdraw(&mut self, amount: usize) -> bool;

    /// Adds `amount`.
    fn deposit(&mut self, amount: usize);

    /// Returns whether `amount` is covered.
    fn covers(&self, amount: usize) -> bool {
        self.balance() >= amount
    }
}

impl Bankroll for usize {
    fn balance(&self) -> usize {
        *self
    }

    fn withdraw(&mut self, amount: usize) -> bool {
        match self.checked_sub(amount) {
            Some(rest) => {
                *self = rest;
                true
            }
            None => false,
        }
    }

    fn deposit(&mut self, amount: usize) {
        *self = self.saturating_add(amount);
    }
}
