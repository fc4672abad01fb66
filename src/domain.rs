use std::fmt;

use serde::{Deserialize, Serialize};

/// One headline from the configured RSS feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
}

/// Fields of a `upi://pay` request. Empty string means the parameter was
/// absent from the URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpiPaymentRequest {
    pub payee_vpa: String,
    pub payee_name: String,
    pub transaction_note: String,
    pub currency: String,
    pub amount: String,
}

impl UpiPaymentRequest {
    pub fn labeled_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Payee VPA (UPI ID)", self.payee_vpa.as_str()),
            ("Payee Name", self.payee_name.as_str()),
            ("Transaction Note", self.transaction_note.as_str()),
            ("Currency", self.currency.as_str()),
            ("Amount", self.amount.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspicionVerdict {
    pub suspicious: bool,
    pub reasons: Vec<SuspicionReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuspicionReason {
    AmountAboveLimit,
    VpaMissingHandle,
    VpaTooShort,
    VpaPlaceholderDomain,
    PayeeNameMissing,
}

impl fmt::Display for SuspicionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::AmountAboveLimit => "amount exceeds the safe limit",
            Self::VpaMissingHandle => "payee VPA has no '@' handle",
            Self::VpaTooShort => "payee VPA is shorter than 5 characters",
            Self::VpaPlaceholderDomain => "payee VPA uses a placeholder domain",
            Self::PayeeNameMissing => "payee name is missing",
        };
        f.write_str(msg)
    }
}

/// Classification of a decoded QR payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum QrAssessment {
    /// Decoded fine but is not a UPI payment URI.
    NonUpi { payload: String },
    Upi {
        request: UpiPaymentRequest,
        verdict: SuspicionVerdict,
        /// Re-encoded `upi://pay?...` link, present when a payee VPA is set.
        pay_link: Option<String>,
    },
}

/// Well-known UPI payment platforms surfaced by the `providers` command.
pub const UPI_PROVIDERS: &[(&str, &str)] = &[
    ("Paytm", "https://paytm.com/shop/payment"),
    ("PhonePe", "https://www.phonepe.com/"),
    ("GPay", "https://pay.google.com/"),
    ("Amazon Pay", "https://www.amazon.in/amazonpay/home"),
];
