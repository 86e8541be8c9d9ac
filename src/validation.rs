//! Recursive request validation.
//!
//! Outgoing payloads are checked against their field-level constraints
//! before the HTTP round trip; every violated constraint is collected so
//! the caller sees the full list at once, not just the first miss.
//! Inbound notification payloads run through the same machinery but
//! declare no constraints, so validation is effectively a no-op there.

use crate::{PaygridError, Result};

/// Collects constraint violations while walking a payload.
#[derive(Debug, Default)]
pub struct ValidationContext {
    path: Vec<String>,
    violations: Vec<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation when a required string field is absent or empty.
    pub fn require(&mut self, field: &str, value: &Option<String>) {
        if value.as_deref().map_or(true, str::is_empty) {
            self.violations
                .push(format!("The {} field is required", self.qualified(field)));
        }
    }

    /// Record a violation when a required numeric field is absent.
    pub fn require_value<T>(&mut self, field: &str, value: &Option<T>) {
        if value.is_none() {
            self.violations
                .push(format!("The {} field is required", self.qualified(field)));
        }
    }

    /// Descend into a nested block, prefixing its violations with the
    /// field name.
    pub fn nested<T: ValidateFields>(&mut self, field: &str, value: &Option<T>) {
        if let Some(inner) = value {
            self.path.push(field.to_string());
            inner.validate_fields(self);
            self.path.pop();
        }
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    fn qualified(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path.join("."), field)
        }
    }
}

/// Field-level constraints of a payload.
///
/// The default implementation declares no constraints. Owned Rust data
/// cannot form reference cycles, so the walk needs no visited-set.
pub trait ValidateFields {
    fn validate_fields(&self, ctx: &mut ValidationContext) {
        let _ = ctx;
    }
}

/// Validate a payload, raising a [`PaygridError::Data`] listing every
/// violated constraint.
pub fn validate<T: ValidateFields>(data: &T) -> Result<()> {
    let mut ctx = ValidationContext::new();
    data.validate_fields(&mut ctx);
    if ctx.violations().is_empty() {
        Ok(())
    } else {
        Err(PaygridError::data(ctx.violations().join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inner {
        statement: Option<String>,
    }

    impl ValidateFields for Inner {
        fn validate_fields(&self, ctx: &mut ValidationContext) {
            ctx.require("ShopperStatement", &self.statement);
        }
    }

    struct Outer {
        message_id: Option<String>,
        order_id: Option<i64>,
        attributes: Option<Inner>,
    }

    impl ValidateFields for Outer {
        fn validate_fields(&self, ctx: &mut ValidationContext) {
            ctx.require("MessageID", &self.message_id);
            ctx.require_value("OrderID", &self.order_id);
            ctx.nested("Attributes", &self.attributes);
        }
    }

    #[test]
    fn test_collects_all_violations_with_paths() {
        let outer = Outer {
            message_id: None,
            order_id: None,
            attributes: Some(Inner { statement: None }),
        };

        let err = validate(&outer).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("The MessageID field is required"));
        assert!(message.contains("The OrderID field is required"));
        assert!(message.contains("The Attributes.ShopperStatement field is required"));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let outer = Outer {
            message_id: Some(String::new()),
            order_id: Some(1),
            attributes: None,
        };
        assert!(validate(&outer).is_err());
    }

    #[test]
    fn test_valid_payload_passes() {
        let outer = Outer {
            message_id: Some("id".to_string()),
            order_id: Some(1),
            attributes: Some(Inner {
                statement: Some("Statement".to_string()),
            }),
        };
        assert!(validate(&outer).is_ok());
    }
}
