use crate::version::VersionInfo;
use reqwest::blocking::RequestBuilder;

pub const API_KEY_HEADER: &str = "X-API-KEY";
pub const TRACE_ID_HEADER: &str = "trace_id";

/// Adjusts an outgoing catalog request before it is sent.
///
/// Decorators run in the order they were registered on the client.
pub trait RequestDecorator: Send + Sync {
    fn decorate(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Authenticates requests with the catalog API key.
pub struct ApiTokenAuth {
    token: String,
}

impl ApiTokenAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl RequestDecorator for ApiTokenAuth {
    fn decorate(&self, request: RequestBuilder) -> RequestBuilder {
        tracing::trace!("adding api key header to request");
        request.header(API_KEY_HEADER, &self.token)
    }
}

/// Identifies the client as `productctl/<version> (<project>)`.
pub struct UserAgent {
    value: String,
}

impl UserAgent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Default for UserAgent {
    fn default() -> Self {
        Self::new(VersionInfo::current().user_agent())
    }
}

impl RequestDecorator for UserAgent {
    fn decorate(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(reqwest::header::USER_AGENT, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::blocking::Client;

    fn build(decorators: &[&dyn RequestDecorator]) -> reqwest::blocking::Request {
        let client = Client::new();
        let request = decorators
            .iter()
            .fold(client.post("http://localhost/graphql/"), |request, decorator| {
                decorator.decorate(request)
            });
        request.build().unwrap()
    }

    #[test]
    fn test_api_token_header() {
        let request = build(&[&ApiTokenAuth::new("my-token")]);
        assert_eq!(request.headers()[API_KEY_HEADER], "my-token");
    }

    #[test]
    fn test_user_agent_header() {
        let request = build(&[&UserAgent::new("productctl/1.0.0 (test)")]);
        assert_eq!(
            request.headers()[reqwest::header::USER_AGENT],
            "productctl/1.0.0 (test)"
        );
    }

    #[test]
    fn test_decorators_compose() {
        let request = build(&[&ApiTokenAuth::new("t"), &UserAgent::default()]);
        assert_eq!(request.headers()[API_KEY_HEADER], "t");
        assert!(request.headers()[reqwest::header::USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("productctl/"));
    }
}
