use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const HTTP_METHOD_COUNT: usize = 5;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; HTTP_METHOD_COUNT] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    #[inline]
    pub fn flag(&self) -> MethodSet {
        MethodSet::from_bits_truncate(1 << (*self as u8))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = MethodError;

    /// Method names are compared verbatim; `get` is not `GET`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            other => Err(MethodError::Unsupported {
                method: other.to_string(),
            }),
        }
    }
}

bitflags! {
    /// Set of methods a route accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MethodSet: u8 {
        const GET = 0b00001;
        const POST = 0b00010;
        const PUT = 0b00100;
        const DELETE = 0b01000;
        const PATCH = 0b10000;
    }
}

impl MethodSet {
    pub fn methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter(move |m| self.contains(m.flag()))
    }

    /// Comma-joined method names, suitable for an `Allow` header.
    pub fn to_header_value(&self) -> String {
        self.methods()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<HttpMethod> for MethodSet {
    fn from_iter<I: IntoIterator<Item = HttpMethod>>(iter: I) -> Self {
        iter.into_iter()
            .fold(MethodSet::empty(), |acc, m| acc | m.flag())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MethodError {
    #[error("unsupported HTTP method '{method}' (expected one of GET, POST, PUT, DELETE, PATCH)")]
    Unsupported { method: String },
}
