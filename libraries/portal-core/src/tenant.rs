/// Tenant context carried by every per-tenant upstream call
use crate::error::{Result, ValidationError};
use crate::identity::header_value;
use http::HeaderMap;

/// Organization header
pub const ORG_HEADER: &str = "org";

/// Root organization header. Header names are case-insensitive, so this
/// also matches the `rootOrg` spelling clients send.
pub const ROOT_ORG_HEADER: &str = "rootorg";

/// The `(org, rootOrg)` pair scoping a request to an organization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantContext {
    /// Organization (`org` header)
    pub org: String,
    /// Root organization (`rootOrg` header)
    pub root_org: String,
}

impl TenantContext {
    /// Create a tenant context
    pub fn new(org: impl Into<String>, root_org: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            root_org: root_org.into(),
        }
    }

    /// Read both tenant headers; either missing or empty is a validation error
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        match (
            header_value(headers, ORG_HEADER),
            header_value(headers, ROOT_ORG_HEADER),
        ) {
            (Some(org), Some(root_org)) => Ok(Self::new(org, root_org)),
            _ => Err(ValidationError::MissingTenant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderName, HeaderValue};

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn both_headers_present() {
        let tenant = TenantContext::from_headers(&headers(&[("org", "o1"), ("rootOrg", "r1")]));
        assert_eq!(tenant, Ok(TenantContext::new("o1", "r1")));
    }

    #[test]
    fn header_names_are_case_insensitive() {
        let tenant = TenantContext::from_headers(&headers(&[("ORG", "o1"), ("ROOTORG", "r1")]));
        assert_eq!(tenant, Ok(TenantContext::new("o1", "r1")));
    }

    #[test]
    fn either_missing_is_rejected() {
        assert_eq!(
            TenantContext::from_headers(&headers(&[("org", "o1")])),
            Err(ValidationError::MissingTenant)
        );
        assert_eq!(
            TenantContext::from_headers(&headers(&[("rootOrg", "r1")])),
            Err(ValidationError::MissingTenant)
        );
        assert_eq!(
            TenantContext::from_headers(&headers(&[("org", ""), ("rootOrg", "r1")])),
            Err(ValidationError::MissingTenant)
        );
    }
}
