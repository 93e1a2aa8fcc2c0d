use crate::{ActivityVerdict, AuthToken, UserProfile};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Error messages the JWT middleware uses when a token is missing or expired.
const UNAUTHENTICATED_MARKERS: &[&str] = &[
    "signature has expired",
    "error decoding signature",
    "you do not have permission",
    "must be logged in",
];

/// A trait that defines the request-response relationship and metadata for a GraphQL operation.
pub trait GraphQlOperation {
    /// Variables sent alongside the document.
    type Variables: Serialize;
    /// Shape of the `data` object.
    type Data: DeserializeOwned;
    /// The value callers actually care about.
    type Output;
    /// The operation name (must match the document).
    const NAME: &'static str;
    /// The GraphQL document.
    const DOCUMENT: &'static str;
    /// Whether the `Authorization` header must be attached.
    const REQUIRES_AUTH: bool;

    /// Pull the payload out of `data`. `None` means the server answered with a null root field.
    fn extract(data: Self::Data) -> Option<Self::Output>;
}

/// Body of a GraphQL-over-HTTP POST.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V> {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: &'a V,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    pub fn for_operation<O>(variables: &'a V) -> Self
    where
        O: GraphQlOperation<Variables = V>,
    {
        Self {
            query: O::DOCUMENT,
            operation_name: O::NAME,
            variables,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl GraphQlError {
    pub fn is_unauthenticated(&self) -> bool {
        let message = self.message.to_lowercase();
        UNAUTHENTICATED_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// Why a GraphQL response could not produce a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseFailure {
    /// The server reported one or more errors.
    Errors(Vec<GraphQlError>),
    /// Neither data nor errors, or a null root field.
    Empty,
}

impl ResponseFailure {
    pub fn is_unauthenticated(&self) -> bool {
        match self {
            ResponseFailure::Errors(errors) => errors.iter().any(GraphQlError::is_unauthenticated),
            ResponseFailure::Empty => false,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            ResponseFailure::Errors(errors) => errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            ResponseFailure::Empty => "empty response".to_string(),
        }
    }
}

impl<D> GraphQlResponse<D> {
    /// Errors win over partial data: a mutation that reports an error is a failed mutation.
    pub fn into_payload<O>(self) -> Result<O::Output, ResponseFailure>
    where
        O: GraphQlOperation<Data = D>,
    {
        if !self.errors.is_empty() {
            return Err(ResponseFailure::Errors(self.errors));
        }
        self.data
            .and_then(O::extract)
            .ok_or(ResponseFailure::Empty)
    }
}

// =========================================================
// Operation Definitions
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct TokenPayload {
    pub token: Option<AuthToken>,
}

/// Exchange email + password for a session token.
pub struct TokenAuth;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAuthData {
    pub token_auth: Option<TokenPayload>,
}

impl GraphQlOperation for TokenAuth {
    type Variables = Credentials;
    type Data = TokenAuthData;
    type Output = AuthToken;
    const NAME: &'static str = "TokenAuth";
    const DOCUMENT: &'static str = "mutation TokenAuth($email: String!, $password: String!) { tokenAuth(email: $email, password: $password) { token } }";
    const REQUIRES_AUTH: bool = false;

    fn extract(data: Self::Data) -> Option<Self::Output> {
        data.token_auth.and_then(|p| p.token)
    }
}

/// Create an account; the server answers with a session token for it.
pub struct RegisterUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserData {
    pub register_user: Option<TokenPayload>,
}

impl GraphQlOperation for RegisterUser {
    type Variables = Credentials;
    type Data = RegisterUserData;
    type Output = AuthToken;
    const NAME: &'static str = "RegisterUser";
    const DOCUMENT: &'static str = "mutation RegisterUser($email: String!, $password: String!) { registerUser(email: $email, password: $password) { token } }";
    const REQUIRES_AUTH: bool = false;

    fn extract(data: Self::Data) -> Option<Self::Output> {
        data.register_user.and_then(|p| p.token)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDescription {
    pub activity_description: String,
}

/// Classify a free-text activity description.
pub struct AskActivityGuidance;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskActivityGuidanceData {
    pub ask_activity_guidance: Option<ActivityVerdict>,
}

impl GraphQlOperation for AskActivityGuidance {
    type Variables = ActivityDescription;
    type Data = AskActivityGuidanceData;
    type Output = ActivityVerdict;
    const NAME: &'static str = "AskActivityGuidance";
    const DOCUMENT: &'static str = "mutation AskActivityGuidance($activityDescription: String!) { askActivityGuidance(activityDescription: $activityDescription) { activity ivaCode } }";
    const REQUIRES_AUTH: bool = true;

    fn extract(data: Self::Data) -> Option<Self::Output> {
        data.ask_activity_guidance
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NoVariables {}

/// Fetch the authenticated user's profile.
pub struct GetUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserData {
    pub get_user: Option<UserProfile>,
}

impl GraphQlOperation for GetUser {
    type Variables = NoVariables;
    type Data = GetUserData;
    type Output = UserProfile;
    const NAME: &'static str = "GetUser";
    const DOCUMENT: &'static str = "query GetUser { getUser { fullName hasBankCredentials } }";
    const REQUIRES_AUTH: bool = true;

    fn extract(data: Self::Data) -> Option<Self::Output> {
        data.get_user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaxCode;

    #[test]
    fn test_request_body_shape() {
        let vars = ActivityDescription {
            activity_description: "Vendo empanadas".to_string(),
        };
        let body = GraphQlRequest::for_operation::<AskActivityGuidance>(&vars);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["operationName"], "AskActivityGuidance");
        assert_eq!(json["variables"]["activityDescription"], "Vendo empanadas");
        assert!(json["query"].as_str().unwrap().contains("ivaCode"));
    }

    #[test]
    fn test_payload_extraction() {
        let raw = r#"{"data":{"askActivityGuidance":{"activity":"Peluquería","ivaCode":"1"}}}"#;
        let resp: GraphQlResponse<AskActivityGuidanceData> = serde_json::from_str(raw).unwrap();
        let verdict = resp.into_payload::<AskActivityGuidance>().unwrap();
        assert_eq!(verdict.activity, "Peluquería");
        assert_eq!(verdict.tax_code, TaxCode::BasicFeeBill);
    }

    #[test]
    fn test_errors_take_precedence_over_data() {
        let raw = r#"{"data":{"tokenAuth":null},"errors":[{"message":"Please enter valid credentials"}]}"#;
        let resp: GraphQlResponse<TokenAuthData> = serde_json::from_str(raw).unwrap();
        let failure = resp.into_payload::<TokenAuth>().unwrap_err();
        assert!(matches!(failure, ResponseFailure::Errors(ref e) if e.len() == 1));
        assert!(!failure.is_unauthenticated());
    }

    #[test]
    fn test_null_root_field_is_empty() {
        let raw = r#"{"data":{"getUser":null}}"#;
        let resp: GraphQlResponse<GetUserData> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            resp.into_payload::<GetUser>().unwrap_err(),
            ResponseFailure::Empty
        );
    }

    #[test]
    fn test_expired_signature_is_unauthenticated() {
        let failure = ResponseFailure::Errors(vec![GraphQlError {
            message: "Signature has expired".to_string(),
        }]);
        assert!(failure.is_unauthenticated());
    }
}
