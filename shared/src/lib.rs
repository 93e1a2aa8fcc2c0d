use serde::{Deserialize, Serialize};
use std::fmt;

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const AUTH_SCHEME: &str = "JWT";

pub const IVA_CODE_BASIC_FEE_BILL: &str = "1";
pub const IVA_CODE_COMPANY_FEE_BILL: &str = "2";
pub const IVA_CODE_UNCERTAIN: &str = "G";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// Opaque session token issued by the auth backend.
///
/// `Debug` never prints the value so tokens do not end up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Value for the `Authorization` header.
    pub fn authorization_value(&self) -> String {
        format!("{} {}", AUTH_SCHEME, self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(<redacted>)")
    }
}

/// Tax classification bucket returned by the classifier.
///
/// Travels on the wire as the IVA code (`"1"`, `"2"`, `"G"`). Codes the
/// client does not know are kept as `Unrecognized` instead of failing the
/// whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaxCode {
    BasicFeeBill,
    CompanyFeeBill,
    Uncertain,
    Unrecognized(String),
}

impl TaxCode {
    pub fn from_wire(code: &str) -> Self {
        match code.trim() {
            IVA_CODE_BASIC_FEE_BILL => TaxCode::BasicFeeBill,
            IVA_CODE_COMPANY_FEE_BILL => TaxCode::CompanyFeeBill,
            IVA_CODE_UNCERTAIN => TaxCode::Uncertain,
            other => TaxCode::Unrecognized(other.to_string()),
        }
    }

    pub fn wire_code(&self) -> &str {
        match self {
            TaxCode::BasicFeeBill => IVA_CODE_BASIC_FEE_BILL,
            TaxCode::CompanyFeeBill => IVA_CODE_COMPANY_FEE_BILL,
            TaxCode::Uncertain => IVA_CODE_UNCERTAIN,
            TaxCode::Unrecognized(code) => code,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TaxCode::Unrecognized(_))
    }
}

impl From<String> for TaxCode {
    fn from(code: String) -> Self {
        TaxCode::from_wire(&code)
    }
}

impl From<TaxCode> for String {
    fn from(code: TaxCode) -> Self {
        code.wire_code().to_string()
    }
}

impl fmt::Display for TaxCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxCode::BasicFeeBill => write!(f, "BASIC_FEE_BILL"),
            TaxCode::CompanyFeeBill => write!(f, "COMPANY_FEE_BILL"),
            TaxCode::Uncertain => write!(f, "UNCERTAIN"),
            TaxCode::Unrecognized(code) => write!(f, "UNRECOGNIZED({})", code),
        }
    }
}

/// Authenticated user's profile as served by `getUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub has_bank_credentials: bool,
}

/// Classifier answer for a free-text activity description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityVerdict {
    pub activity: String,
    #[serde(rename = "ivaCode")]
    pub tax_code: TaxCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_code_wire_mapping() {
        assert_eq!(TaxCode::from_wire("1"), TaxCode::BasicFeeBill);
        assert_eq!(TaxCode::from_wire("2"), TaxCode::CompanyFeeBill);
        assert_eq!(TaxCode::from_wire("G"), TaxCode::Uncertain);
        assert_eq!(TaxCode::from_wire(" 1 "), TaxCode::BasicFeeBill);
        assert_eq!(
            TaxCode::from_wire("X"),
            TaxCode::Unrecognized("X".to_string())
        );
        assert_eq!(TaxCode::Uncertain.wire_code(), "G");
    }

    #[test]
    fn test_verdict_deserializes_unknown_code() {
        let json = r#"{"activity":"Minería","ivaCode":"9"}"#;
        let verdict: ActivityVerdict = serde_json::from_str(json).unwrap();
        assert_eq!(verdict.activity, "Minería");
        assert!(!verdict.tax_code.is_recognized());
    }

    #[test]
    fn test_verdict_serializes_wire_code() {
        let verdict = ActivityVerdict {
            activity: "Peluquería".to_string(),
            tax_code: TaxCode::BasicFeeBill,
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["ivaCode"], "1");
    }

    #[test]
    fn test_profile_uses_camel_case() {
        let json = r#"{"fullName":"Ana Pérez","hasBankCredentials":true}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.full_name, "Ana Pérez");
        assert!(profile.has_bank_credentials);
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("secret-jwt");
        assert!(!format!("{:?}", token).contains("secret-jwt"));
        assert_eq!(token.authorization_value(), "JWT secret-jwt");
    }
}
