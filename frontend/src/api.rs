//! GraphQL client.
//!
//! Implements the core's remote contracts over a single POST endpoint.
//! Requests and responses are the typed envelopes from `rubro_shared::protocol`.

use async_trait::async_trait;
use gloo_net::http::Request;
use rubro::api::{AuthApi, ClassificationApi, ProfileApi};
use rubro::{AppError, AppResult, SessionStore};
use rubro_shared::protocol::{
    ActivityDescription, AskActivityGuidance, Credentials, GetUser, GraphQlOperation,
    GraphQlRequest, GraphQlResponse, NoVariables, RegisterUser, TokenAuth,
};
use rubro_shared::{ActivityVerdict, AuthToken, HEADER_AUTHORIZATION, UserProfile};
use std::cell::RefCell;

type ErrorCtor = fn(String) -> AppError;

pub struct GraphQlClient {
    endpoint: String,
    session: SessionStore,
    unauthorized: RefCell<Option<Box<dyn Fn()>>>,
}

impl GraphQlClient {
    pub fn new(endpoint: String, session: SessionStore) -> Self {
        Self {
            endpoint,
            session,
            unauthorized: RefCell::new(None),
        }
    }

    /// Called once the server rejects the session token.
    pub fn on_unauthorized(&self, hook: impl Fn() + 'static) {
        *self.unauthorized.borrow_mut() = Some(Box::new(hook));
    }

    /// POST one operation. Every failure is turned into `fail(..)`, except a
    /// rejected token, which becomes `Unauthorized`.
    async fn execute<O: GraphQlOperation>(
        &self,
        variables: &O::Variables,
        fail: ErrorCtor,
    ) -> AppResult<O::Output> {
        let body = serde_json_wasm::to_string(&GraphQlRequest::for_operation::<O>(variables))
            .map_err(|e| AppError::serialization(e.to_string()).in_op(O::NAME))?;

        let mut request = Request::post(&self.endpoint).header("Content-Type", "application/json");
        if O::REQUIRES_AUTH {
            if let Some(token) = self.session.token() {
                request = request.header(HEADER_AUTHORIZATION, &token.authorization_value());
            }
        }

        let response = request
            .body(body)
            .map_err(|e| fail(e.to_string()).in_op(O::NAME))?
            .send()
            .await
            .map_err(|e| fail(e.to_string()).in_op(O::NAME))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| fail(e.to_string()).in_op_with(O::NAME, format!("HTTP {}", status)))?;

        let envelope: GraphQlResponse<O::Data> = serde_json_wasm::from_str(&text)
            .map_err(|e| fail(e.to_string()).in_op_with(O::NAME, format!("HTTP {}", status)))?;

        envelope.into_payload::<O>().map_err(|failure| {
            if failure.is_unauthenticated() {
                if let Some(hook) = self.unauthorized.borrow().as_ref() {
                    hook();
                }
                return AppError::unauthorized(failure.summary()).in_op(O::NAME);
            }
            fail(failure.summary()).in_op(O::NAME)
        })
    }
}

#[async_trait(?Send)]
impl AuthApi for GraphQlClient {
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<AuthToken> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute::<TokenAuth>(&credentials, AppError::invalid_credentials)
            .await
    }

    async fn register(&self, email: &str, password: &str) -> AppResult<AuthToken> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute::<RegisterUser>(&credentials, AppError::registration)
            .await
    }
}

#[async_trait(?Send)]
impl ClassificationApi for GraphQlClient {
    async fn classify_activity(&self, description: &str) -> AppResult<ActivityVerdict> {
        let variables = ActivityDescription {
            activity_description: description.to_string(),
        };
        self.execute::<AskActivityGuidance>(&variables, AppError::classification)
            .await
    }
}

#[async_trait(?Send)]
impl ProfileApi for GraphQlClient {
    async fn fetch_profile(&self) -> AppResult<UserProfile> {
        self.execute::<GetUser>(&NoVariables {}, AppError::profile_fetch)
            .await
    }
}
