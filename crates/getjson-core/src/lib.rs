//! # GetJson Core
//!
//! Core runtime library for the GetJson framework: an in-memory JSON
//! value model with inference from typed values, and a GET-only HTTP
//! routing pipeline that turns handler return values into JSON
//! response bodies.
//!
//! ## Architecture
//!
//! Per request: raw target → URL parser → route matcher (handler
//! selection + path variables) → argument binder → handler invocation
//! → JSON inference → serialization → response. The whole pipeline is
//! pure, synchronous, in-memory computation; the route table is built
//! once at startup and shared read-only across request tasks.
//!
//! ## Modules
//!
//! - `json` - JSON value model, serialization, shallow transforms
//! - `visitor` - pre-order tree traversal
//! - `validation` - structural tree validators
//! - `infer` - conversion of typed values into JSON trees
//! - `url` - request target parsing
//! - `types` - parameter types and conversion
//! - `route` - route templates and binding descriptors
//! - `router` - registration-order route matching
//! - `request` - network-agnostic request values
//! - `bind` - argument binding with configurable failure policy
//! - `server` - HTTP server built on Hyper, and the dispatcher
//! - `error` - error types and handling

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bind;
pub mod error;
pub mod infer;
pub mod json;
pub mod request;
pub mod route;
pub mod router;
pub mod server;
pub mod types;
pub mod url;
pub mod validation;
pub mod visitor;

pub use bind::{bind, Args, BindPolicy};
pub use error::{Error, Result};
pub use infer::ToJson;
pub use json::{JsonKind, JsonValue, Number};
pub use request::{Method, Request};
pub use route::{ParamSource, ParamSpec, RouteSpec, Segment};
pub use router::{HandlerId, Matched, Router};
pub use server::{Handler, Response, Server, ServerConfig};
pub use types::{convert_param, ParamType, ParamValue};
pub use url::{parse_url, ParsedUrl};
pub use validation::{HomogeneousArrayValidator, UniqueKeysValidator};
pub use visitor::{walk, JsonVisitor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
