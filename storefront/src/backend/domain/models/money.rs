//! Whole-rupee amounts and Indian digit grouping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Currency sign used in every customer-facing amount
pub const RUPEE_SIGN: &str = "₹";

/// An amount in whole rupees. Prices on the storefront carry no paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(u64);

impl Rupees {
    pub const ZERO: Rupees = Rupees(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, rhs: Rupees) -> Option<Rupees> {
        self.0.checked_add(rhs.0).map(Rupees)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Rupees> {
        self.0.checked_mul(u64::from(quantity)).map(Rupees)
    }

    /// Digits grouped the Indian way, without the currency sign ("12,34,567")
    pub fn grouped(self) -> String {
        format_indian_grouping(self.0)
    }
}

impl From<u64> for Rupees {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, rhs: Self) -> Self::Output {
        Rupees(self.0 + rhs.0)
    }
}

impl AddAssign for Rupees {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Rupees {
    type Output = Rupees;

    fn mul(self, quantity: u32) -> Self::Output {
        Rupees(self.0 * u64::from(quantity))
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rupees::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Rupees> for Rupees {
    fn sum<I: Iterator<Item = &'a Rupees>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", RUPEE_SIGN, self.grouped())
    }
}

/// Group digits using the Indian numbering convention: the last three digits
/// form one group, every group before it has two digits.
///
/// `1234567` becomes `"12,34,567"` and `100000` becomes `"1,00,000"`.
pub fn format_indian_grouping(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let first_group_len = match head.len() % 2 {
        0 => 2,
        _ => 1,
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, digit) in head.chars().enumerate() {
        if i >= first_group_len && (i - first_group_len) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(Rupees::new(2999).checked_add(Rupees::new(199)), Some(Rupees::new(3198)));
        assert_eq!(Rupees::new(3198).checked_mul(2), Some(Rupees::new(6396)));
        assert_eq!(Rupees::new(u64::MAX).checked_add(Rupees::new(1)), None);
        assert_eq!(Rupees::new(u64::MAX / 2 + 1).checked_mul(2), None);
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_indian_grouping(0), "0");
        assert_eq!(format_indian_grouping(199), "199");
        assert_eq!(format_indian_grouping(1500), "1,500");
        assert_eq!(format_indian_grouping(2999), "2,999");
        assert_eq!(format_indian_grouping(63960), "63,960");
        assert_eq!(format_indian_grouping(100000), "1,00,000");
        assert_eq!(format_indian_grouping(1234567), "12,34,567");
        assert_eq!(format_indian_grouping(123456789), "12,34,56,789");
    }

    #[test]
    fn test_display_has_rupee_sign() {
        assert_eq!(Rupees::new(6396).to_string(), "₹6,396");
        assert_eq!(Rupees::new(50).to_string(), "₹50");
    }

    #[test]
    fn test_arithmetic() {
        let add_ons = [Rupees::new(199), Rupees::new(499)];
        let unit = Rupees::new(2999) + add_ons.iter().sum::<Rupees>();

        assert_eq!(unit, Rupees::new(3697));
        assert_eq!(unit * 3, Rupees::new(11091));
    }
}
