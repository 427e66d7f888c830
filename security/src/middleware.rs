// security/src/middleware.rs
use axum::http::{HeaderMap, HeaderName};
use models::{BookingResult, Role, DEFAULT_ROLE_HEADER};
use std::borrow::Cow;

/// Where a request's role assertion comes from.
///
/// The assertion is an access label, not a credential; implementations only
/// locate the raw value and never verify it.
pub trait RoleSource: Send + Sync + 'static {
    fn asserted_role<'a>(&self, headers: &'a HeaderMap) -> Option<Cow<'a, str>>;

    fn resolve(&self, headers: &HeaderMap) -> BookingResult<Role> {
        Role::from_assertion(self.asserted_role(headers).as_deref())
    }
}

/// Reads the role from a single request header.
#[derive(Debug, Clone)]
pub struct HeaderRoleSource {
    header: HeaderName,
}

impl HeaderRoleSource {
    pub fn new(header: HeaderName) -> Self {
        HeaderRoleSource { header }
    }
}

impl Default for HeaderRoleSource {
    fn default() -> Self {
        HeaderRoleSource::new(HeaderName::from_static(DEFAULT_ROLE_HEADER))
    }
}

impl RoleSource for HeaderRoleSource {
    // Non-UTF-8 bytes are replaced so the rejection still names what was sent.
    fn asserted_role<'a>(&self, headers: &'a HeaderMap) -> Option<Cow<'a, str>> {
        headers
            .get(&self.header)
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()))
    }
}
