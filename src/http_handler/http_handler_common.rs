use std::fmt;

/// Passed as the parameters of a GET wrapper to send no query string.
pub const NO_PARAMS: Option<&()> = None;

/// Identifier of a single API documentation entry, either numeric or a name.
///
/// Appended verbatim after `{root}/`, so a name may span several path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiId {
    Numeric(i64),
    Named(String),
}

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiId::Numeric(id) => write!(f, "{id}"),
            ApiId::Named(name) => f.write_str(name),
        }
    }
}

impl From<i32> for ApiId {
    fn from(value: i32) -> Self { ApiId::Numeric(i64::from(value)) }
}

impl From<u32> for ApiId {
    fn from(value: u32) -> Self { ApiId::Numeric(i64::from(value)) }
}

impl From<i64> for ApiId {
    fn from(value: i64) -> Self { ApiId::Numeric(value) }
}

impl From<&str> for ApiId {
    fn from(value: &str) -> Self { ApiId::Named(value.to_string()) }
}

impl From<String> for ApiId {
    fn from(value: String) -> Self { ApiId::Named(value) }
}
