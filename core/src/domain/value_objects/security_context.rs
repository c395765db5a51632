//! Per-request security context.

use crate::domain::entities::Identity;

/// Holder of the authenticated principal for one request
///
/// Created empty at the start of request handling and passed by `&mut`
/// down the call chain. Never shared between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    principal: Option<Identity>,
}

impl SecurityContext {
    /// Empty context with no authenticated principal
    pub fn new() -> Self {
        Self::default()
    }

    /// Context already holding `identity`
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            principal: Some(identity),
        }
    }

    /// Records `identity` as the principal for the rest of the request
    pub fn set_principal(&mut self, identity: Identity) {
        self.principal = Some(identity);
    }

    pub fn principal(&self) -> Option<&Identity> {
        self.principal.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    pub fn clear(&mut self) {
        self.principal = None;
    }
}
