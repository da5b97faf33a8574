/// Network adapters for the catalog GraphQL API
mod graphql_client;
mod queries;
mod transport;

pub use graphql_client::PyxisGraphQlClient;
pub use transport::{ApiTokenAuth, RequestDecorator, UserAgent, API_KEY_HEADER, TRACE_ID_HEADER};
