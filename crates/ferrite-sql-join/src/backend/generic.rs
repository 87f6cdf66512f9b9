//! Generic SQL backend.

use super::Backend;

/// A generic backend that serializes every standard expression kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericBackend;

impl GenericBackend {
    /// Creates a new generic backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Backend for GenericBackend {
    fn name(&self) -> &'static str {
        "generic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ExprKind;

    #[test]
    fn test_generic_backend() {
        let backend = GenericBackend::new();
        assert_eq!(backend.name(), "generic");
        assert!(backend.supports(ExprKind::Comparison));
        assert!(backend.supports(ExprKind::Exists));
        assert!(backend.supports(ExprKind::Raw));
    }
}
