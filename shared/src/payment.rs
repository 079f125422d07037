//! Payment methods
//!
//! A payment method holds immutable, validated construction parameters and a
//! handle to the console stream it confirms transactions on. `pay` is
//! stateless across calls: every call validates the amount independently.
//!
//! Cash is the one method whose `pay` can return `Ok(false)`: an
//! insufficient tendered amount is a business outcome, not a fault.

use crate::console::MessageSink;
use crate::error::{AppResult, DomainError};
use crate::money::{self, Decimal};
use std::fmt;
use std::rc::Rc;

enum PaymentKind {
    Card { number: String },
    Transfer { key: String },
    Cash { tendered: Decimal },
}

/// One of the interchangeable ways to settle an order total
pub struct PaymentMethod {
    kind: PaymentKind,
    sink: Rc<dyn MessageSink>,
}

impl PaymentMethod {
    /// Card payment; the number must have at least 4 digits after trimming
    pub fn card(number: impl Into<String>, sink: Rc<dyn MessageSink>) -> AppResult<Self> {
        let number = number.into().trim().to_string();
        if number.chars().count() < 4 {
            return Err(DomainError::CardNumberTooShort);
        }
        Ok(Self {
            kind: PaymentKind::Card { number },
            sink,
        })
    }

    /// Instant transfer to the given key; the key must not be blank
    pub fn transfer(key: impl Into<String>, sink: Rc<dyn MessageSink>) -> AppResult<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(DomainError::EmptyTransferKey);
        }
        Ok(Self {
            kind: PaymentKind::Transfer { key },
            sink,
        })
    }

    /// Cash payment with the amount handed over; must be positive
    pub fn cash(tendered: Decimal, sink: Rc<dyn MessageSink>) -> AppResult<Self> {
        if tendered <= Decimal::ZERO {
            return Err(DomainError::InvalidTendered { tendered });
        }
        Ok(Self {
            kind: PaymentKind::Cash { tendered },
            sink,
        })
    }

    pub fn name(&self) -> &'static str {
        match &self.kind {
            PaymentKind::Card { .. } => "Credit Card",
            PaymentKind::Transfer { .. } => "Instant Transfer",
            PaymentKind::Cash { .. } => "Cash",
        }
    }

    /// Attempt to settle `amount`
    ///
    /// Fails with an invalid-argument error when `amount <= 0`. Card and
    /// transfer always succeed past validation; cash succeeds when the
    /// tendered amount covers the total and otherwise returns `Ok(false)`
    /// after reporting the shortfall.
    pub fn pay(&self, amount: Decimal) -> AppResult<bool> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount { amount });
        }

        match &self.kind {
            PaymentKind::Card { number } => {
                self.sink.emit(&format!(
                    "Processing payment of €{} on card **{}",
                    money::format_amount(amount),
                    last_digits(number, 4),
                ));
                Ok(true)
            }
            PaymentKind::Transfer { key } => {
                self.sink.emit(&format!(
                    "Transfer of €{} sent to {key}",
                    money::format_amount(amount),
                ));
                self.sink
                    .emit("QR code generated, awaiting confirmation...");
                Ok(true)
            }
            PaymentKind::Cash { tendered } => {
                if *tendered >= amount {
                    self.sink.emit(&format!(
                        "Cash payment: €{}",
                        money::format_amount(*tendered)
                    ));
                    let change = *tendered - amount;
                    if change > Decimal::ZERO {
                        self.sink
                            .emit(&format!("Change: €{}", money::format_amount(change)));
                    }
                    Ok(true)
                } else {
                    self.sink.emit(&format!(
                        "Insufficient cash, €{} short",
                        money::format_amount(amount - *tendered)
                    ));
                    Ok(false)
                }
            }
        }
    }
}

// Hand-written so full card numbers never reach logs
impl fmt::Debug for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentMethod")
            .field("name", &self.name())
            .finish()
    }
}

fn last_digits(number: &str, count: usize) -> String {
    let skip = number.chars().count().saturating_sub(count);
    number.chars().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemorySink;
    use crate::error::ErrorKind;

    fn sink() -> Rc<MemorySink> {
        Rc::new(MemorySink::new())
    }

    #[test]
    fn test_card_rejects_short_number() {
        let err = PaymentMethod::card("123", sink()).unwrap_err();
        assert_eq!(err, DomainError::CardNumberTooShort);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        // Padding does not rescue a short number
        assert!(PaymentMethod::card("  12 ", sink()).is_err());
    }

    #[test]
    fn test_card_logs_only_last_four_digits() {
        let sink = sink();
        let card = PaymentMethod::card("1234567812345678", sink.clone()).unwrap();

        assert!(card.pay(Decimal::new(2050, 2)).unwrap());

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("**5678"));
        assert!(lines[0].contains("20.50"));
        assert!(!lines[0].contains("12345678"));
    }

    #[test]
    fn test_transfer_rejects_blank_key() {
        let err = PaymentMethod::transfer("   ", sink()).unwrap_err();
        assert_eq!(err, DomainError::EmptyTransferKey);
    }

    #[test]
    fn test_transfer_emits_confirmation_then_pending_notice() {
        let sink = sink();
        let transfer = PaymentMethod::transfer(" counter@pay.example ", sink.clone()).unwrap();

        assert!(transfer.pay(Decimal::new(750, 2)).unwrap());

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("counter@pay.example"));
        assert!(lines[0].contains("7.50"));
        assert!(lines[1].contains("awaiting confirmation"));
    }

    #[test]
    fn test_cash_rejects_non_positive_tendered() {
        let err = PaymentMethod::cash(Decimal::ZERO, sink()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTendered {
                tendered: Decimal::ZERO
            }
        );
        assert!(PaymentMethod::cash(Decimal::new(-100, 2), sink()).is_err());
    }

    #[test]
    fn test_pay_rejects_non_positive_amount() {
        let card = PaymentMethod::card("4242", sink()).unwrap();
        let err = card.pay(Decimal::ZERO).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let cash = PaymentMethod::cash(Decimal::new(500, 2), sink()).unwrap();
        assert!(cash.pay(Decimal::new(-750, 2)).is_err());
    }

    #[test]
    fn test_cash_with_change() {
        let sink = sink();
        let cash = PaymentMethod::cash(Decimal::new(1000, 2), sink.clone()).unwrap();

        assert!(cash.pay(Decimal::new(750, 2)).unwrap());

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("10.00"));
        assert!(lines[1].contains("Change: €2.50"));
    }

    #[test]
    fn test_cash_exact_amount_emits_no_change_line() {
        let sink = sink();
        let cash = PaymentMethod::cash(Decimal::new(750, 2), sink.clone()).unwrap();

        assert!(cash.pay(Decimal::new(750, 2)).unwrap());
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_cash_shortfall_returns_false_without_error() {
        let sink = sink();
        let cash = PaymentMethod::cash(Decimal::new(500, 2), sink.clone()).unwrap();

        let paid = cash.pay(Decimal::new(750, 2)).unwrap();
        assert!(!paid);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("€2.50 short"));
    }

    #[test]
    fn test_pay_is_independent_across_calls() {
        let sink = sink();
        let cash = PaymentMethod::cash(Decimal::new(1000, 2), sink.clone()).unwrap();

        // Each call validates and settles on its own
        assert!(!cash.pay(Decimal::new(2000, 2)).unwrap());
        assert!(cash.pay(Decimal::new(1000, 2)).unwrap());
        assert!(!cash.pay(Decimal::new(2000, 2)).unwrap());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(PaymentMethod::card("4242", sink()).unwrap().name(), "Credit Card");
        assert_eq!(
            PaymentMethod::transfer("k", sink()).unwrap().name(),
            "Instant Transfer"
        );
        assert_eq!(
            PaymentMethod::cash(Decimal::ONE, sink()).unwrap().name(),
            "Cash"
        );
    }
}
