//! Simulated cash acceptor and mobile-wallet charge
//!
//! The acceptor is an accumulator with settle/change/remaining queries; it
//! rejects coins once the amount due is covered. The wallet path only
//! produces a display reference — there is no verification of any kind.

use rand::Rng;

use crate::error::PaymentError;

/// Coin denominations the acceptor understands, in pesos.
pub const COIN_DENOMINATIONS: [u32; 3] = [1, 5, 10];

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    MobileWallet,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::MobileWallet => "GCash",
        }
    }

    pub fn toggled(&self) -> PaymentMethod {
        match self {
            PaymentMethod::Cash => PaymentMethod::MobileWallet,
            PaymentMethod::MobileWallet => PaymentMethod::Cash,
        }
    }
}

/// The coin slot's running total for the current session.
///
/// The total never decreases; it is only zeroed by a session reset after
/// the job completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CashAcceptor {
    inserted: u32,
}

impl CashAcceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pesos inserted so far this session.
    pub fn inserted(&self) -> u32 {
        self.inserted
    }

    /// Accept one coin toward `total_due`.
    ///
    /// Rejected (leaving the total unchanged) for unknown denominations,
    /// and for any coin once the amount due is already covered — a real
    /// acceptor physically closes its slot at that point.
    pub fn insert(&mut self, coin: u32, total_due: u32) -> Result<(), PaymentError> {
        if !COIN_DENOMINATIONS.contains(&coin) {
            return Err(PaymentError::UnsupportedCoin { value: coin });
        }
        if self.is_settled(total_due) {
            return Err(PaymentError::AcceptorClosed);
        }
        self.inserted += coin;
        Ok(())
    }

    pub fn is_settled(&self, total_due: u32) -> bool {
        self.inserted >= total_due
    }

    pub fn change_due(&self, total_due: u32) -> u32 {
        self.inserted.saturating_sub(total_due)
    }

    pub fn remaining_due(&self, total_due: u32) -> u32 {
        total_due.saturating_sub(self.inserted)
    }

    /// Release the payment if the amount due is covered.
    pub fn settle(&self, total_due: u32) -> Result<(), PaymentError> {
        if self.is_settled(total_due) {
            Ok(())
        } else {
            Err(PaymentError::InsufficientFunds {
                remaining: self.remaining_due(total_due),
            })
        }
    }

    pub fn reset(&mut self) {
        self.inserted = 0;
    }
}

const WALLET_REFERENCE_LEN: usize = 8;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a display-only wallet transaction reference: `GC-` followed by
/// 8 random base-36 characters, uppercased.
pub fn wallet_reference() -> String {
    wallet_reference_with(&mut rand::thread_rng())
}

/// Deterministically testable form of [`wallet_reference`].
pub fn wallet_reference_with<R: Rng>(rng: &mut R) -> String {
    let id: String = (0..WALLET_REFERENCE_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("GC-{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_cash_flow_with_overpayment() {
        // 5 + 5 + 10 against 15 due.
        let mut acceptor = CashAcceptor::new();
        let total = 15;

        acceptor.insert(5, total).unwrap();
        acceptor.insert(5, total).unwrap();
        acceptor.insert(10, total).unwrap();

        assert_eq!(acceptor.inserted(), 20);
        assert_eq!(acceptor.change_due(total), 5);
        assert_eq!(acceptor.remaining_due(total), 0);
        assert!(acceptor.is_settled(total));
    }

    #[test]
    fn test_acceptor_closes_once_settled() {
        let mut acceptor = CashAcceptor::new();
        acceptor.insert(10, 10).unwrap();

        assert_eq!(acceptor.insert(1, 10), Err(PaymentError::AcceptorClosed));
        assert_eq!(acceptor.inserted(), 10);
    }

    #[test]
    fn test_unknown_denomination_rejected() {
        let mut acceptor = CashAcceptor::new();
        assert_eq!(
            acceptor.insert(20, 100),
            Err(PaymentError::UnsupportedCoin { value: 20 })
        );
        assert_eq!(acceptor.inserted(), 0);
    }

    #[test]
    fn test_settle_requires_full_amount() {
        let mut acceptor = CashAcceptor::new();
        acceptor.insert(10, 15).unwrap();

        assert_eq!(
            acceptor.settle(15),
            Err(PaymentError::InsufficientFunds { remaining: 5 })
        );

        acceptor.insert(5, 15).unwrap();
        assert_eq!(acceptor.settle(15), Ok(()));
    }

    #[test]
    fn test_settled_against_zero_due() {
        let acceptor = CashAcceptor::new();
        assert!(acceptor.is_settled(0));
        assert_eq!(acceptor.change_due(0), 0);
    }

    #[test]
    fn test_reset_zeroes_the_slot() {
        let mut acceptor = CashAcceptor::new();
        acceptor.insert(10, 20).unwrap();
        acceptor.reset();
        assert_eq!(acceptor.inserted(), 0);
    }

    #[test]
    fn test_wallet_reference_shape() {
        let reference = wallet_reference();
        let id = reference.strip_prefix("GC-").expect("GC- prefix");
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_wallet_reference_deterministic_with_rng() {
        let mut rng = StepRng::new(0, 1);
        let a = wallet_reference_with(&mut rng);
        let mut rng = StepRng::new(0, 1);
        let b = wallet_reference_with(&mut rng);
        assert_eq!(a, b);
    }
}
