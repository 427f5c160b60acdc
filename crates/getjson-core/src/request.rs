//! # HTTP Request
//!
//! Network-agnostic request value: method plus parsed URL, built once
//! per request and immutable afterwards. The transport layer (hyper)
//! is only touched at the conversion boundary.

use std::fmt;

use crate::url::{parse_url, ParsedUrl};

/// HTTP methods the dispatcher can name.
///
/// Only GET is routable; every other method yields the
/// method-not-allowed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP DELETE
    Delete,
    /// HTTP PATCH
    Patch,
    /// HTTP HEAD
    Head,
    /// HTTP OPTIONS
    Options,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
            Self::Patch => write!(f, "PATCH"),
            Self::Head => write!(f, "HEAD"),
            Self::Options => write!(f, "OPTIONS"),
        }
    }
}

impl Method {
    /// Map a hyper method onto this enum.
    ///
    /// Returns `None` for verbs outside the set (they are rejected at
    /// the dispatch boundary, never routed).
    #[must_use]
    pub fn from_hyper(method: &hyper::Method) -> Option<Self> {
        match *method {
            hyper::Method::GET => Some(Self::Get),
            hyper::Method::POST => Some(Self::Post),
            hyper::Method::PUT => Some(Self::Put),
            hyper::Method::DELETE => Some(Self::Delete),
            hyper::Method::PATCH => Some(Self::Patch),
            hyper::Method::HEAD => Some(Self::Head),
            hyper::Method::OPTIONS => Some(Self::Options),
            _ => None,
        }
    }
}

/// A single incoming request as the core sees it.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Request path without the query string
    pub path: String,
    /// Parsed path segments and query parameters
    pub url: ParsedUrl,
}

impl Request {
    /// Build a request from a method and a raw target such as
    /// `/api/args?n=3&text=PA`.
    #[must_use]
    pub fn new(method: Method, target: &str) -> Self {
        let path = target
            .split_once('?')
            .map_or(target, |(path, _)| path)
            .to_string();

        Self {
            method,
            path,
            url: parse_url(target),
        }
    }
}
