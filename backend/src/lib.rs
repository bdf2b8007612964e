//! Q&A backend library modules.
//!
//! Layout follows ports and adapters: [`domain`] holds entities, ports and
//! services; [`inbound`] turns HTTP requests into service calls; [`outbound`]
//! implements the ports over PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
