//! Demo application: the four example routes served on localhost.
//!
//! ```text
//! GET /api/ints              -> [1,2,3]
//! GET /api/pair              -> {"first":"um","second":"dois"}
//! GET /api/path/{pathvar}    -> "<pathvar>!"
//! GET /api/args?n=3&text=PA  -> {"PA":"PAPAPA"}
//! ```

use getjson_core::{JsonValue, ParamType, Result, RouteSpec, Server, ToJson};
use indexmap::IndexMap;
use tracing_subscriber::EnvFilter;

/// A two-field record response.
struct Pair {
    first: String,
    second: String,
}

impl ToJson for Pair {
    fn to_json(&self) -> Result<JsonValue> {
        Ok(JsonValue::object(vec![
            ("first".to_string(), self.first.to_json()?),
            ("second".to_string(), self.second.to_json()?),
        ]))
    }
}

fn build_server() -> Result<Server> {
    let mut server = Server::new().bind(([127, 0, 0, 1], 8000).into());

    server.route(RouteSpec::under("api", "ints")?, |_| {
        Ok(vec![1_i64, 2, 3])
    })?;

    server.route(RouteSpec::under("api", "pair")?, |_| {
        Ok(Pair {
            first: "um".to_string(),
            second: "dois".to_string(),
        })
    })?;

    server.route(RouteSpec::under("api", "path/{pathvar}")?, |args| {
        let pathvar = args.get_str("pathvar").unwrap_or_default();
        Ok(format!("{pathvar}!"))
    })?;

    server.route(
        RouteSpec::under("api", "args")?
            .query("n", ParamType::Int)
            .query("text", ParamType::String),
        |args| {
            let n = usize::try_from(args.get_int("n").unwrap_or(0)).unwrap_or(0);
            let text = args.get_str("text").unwrap_or_default().to_string();

            let mut result = IndexMap::new();
            result.insert(text.clone(), text.repeat(n));
            Ok(result)
        },
    )?;

    Ok(server)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server = build_server()?;
    server.serve().await
}
