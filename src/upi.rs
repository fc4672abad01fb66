use url::Url;

use crate::domain::{QrAssessment, SuspicionReason, SuspicionVerdict, UpiPaymentRequest};

/// Prefix a decoded QR payload must carry to be treated as a UPI payment.
pub const UPI_PAY_PREFIX: &str = "upi://pay";

const MAX_SAFE_AMOUNT: f64 = 50_000.0;
const MIN_VPA_CHARS: usize = 5;
const PLACEHOLDER_VPA_SUFFIX: &str = "@example";

/// Decoded query pairs in URI order. A parameter may legally repeat; lookups
/// consult the first occurrence only, and absent keys read as empty string.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn from_url(url: &Url) -> Self {
        Self(
            url.query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn first_or_empty(&self, key: &str) -> &str {
        self.first(key).unwrap_or("")
    }
}

impl UpiPaymentRequest {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            payee_vpa: params.first_or_empty("pa").to_string(),
            payee_name: params.first_or_empty("pn").to_string(),
            transaction_note: params.first_or_empty("tn").to_string(),
            currency: params.first_or_empty("cu").to_string(),
            amount: params.first_or_empty("am").to_string(),
        }
    }
}

/// Applies the fixed suspicion rules to a payment request's query parameters.
///
/// Pure and total: no I/O, never panics. The boolean is true when any rule
/// fires; the reasons list records which ones did.
pub fn evaluate(params: &QueryParams) -> SuspicionVerdict {
    let vpa = params.first_or_empty("pa");
    let payee_name = params.first_or_empty("pn");
    let amount = parse_amount(params.first_or_empty("am"));

    let mut reasons = Vec::new();
    if amount > MAX_SAFE_AMOUNT {
        reasons.push(SuspicionReason::AmountAboveLimit);
    }
    if !vpa.contains('@') {
        reasons.push(SuspicionReason::VpaMissingHandle);
    }
    if vpa.chars().count() < MIN_VPA_CHARS {
        reasons.push(SuspicionReason::VpaTooShort);
    }
    if vpa.ends_with(PLACEHOLDER_VPA_SUFFIX) {
        reasons.push(SuspicionReason::VpaPlaceholderDomain);
    }
    if payee_name.is_empty() {
        reasons.push(SuspicionReason::PayeeNameMissing);
    }

    SuspicionVerdict {
        suspicious: !reasons.is_empty(),
        reasons,
    }
}

/// Lenient by contract: absent or unparseable amounts read as 0 so the
/// amount rule alone cannot fire on malformed input.
fn parse_amount(raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    raw.trim().parse().unwrap_or(0.0)
}

/// Classifies a decoded QR payload. Total over any input string: payloads
/// that are not UPI payment URIs (or fail URI parsing) come back as
/// `NonUpi`, everything else gets a request, a verdict, and a pay link when
/// a payee VPA is present.
pub fn assess_payload(payload: &str) -> QrAssessment {
    if !payload.starts_with(UPI_PAY_PREFIX) {
        return QrAssessment::NonUpi {
            payload: payload.to_string(),
        };
    }

    let Ok(uri) = Url::parse(payload) else {
        return QrAssessment::NonUpi {
            payload: payload.to_string(),
        };
    };

    let params = QueryParams::from_url(&uri);
    let request = UpiPaymentRequest::from_params(&params);
    let verdict = evaluate(&params);
    let pay_link = uri
        .query()
        .filter(|_| !params.first_or_empty("pa").is_empty())
        .map(|q| format!("{UPI_PAY_PREFIX}?{q}"));

    QrAssessment::Upi {
        request,
        verdict,
        pay_link,
    }
}
