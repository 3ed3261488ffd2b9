use alloc::string::ToString;

use crate::adapter::AdapterError;

// -----------------------------------------------------------------------------
// MismatchPolicy

/// What an adapter does with a value that cannot be stored in its field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Log a warning, leave the field as it was and continue.
    #[default]
    Skip,
    /// Stop and return the error.
    Abort,
}

// -----------------------------------------------------------------------------
// AdapterConfig

/// Options shared by the document adapters.
///
/// # Examples
///
/// ```
/// use sr_reflect::adapter::{AdapterConfig, MismatchPolicy};
///
/// let config = AdapterConfig::new().with_value_attribute("value");
/// assert_eq!(config.on_mismatch, MismatchPolicy::Skip);
/// assert_eq!(config.name_attribute, "name");
/// assert_eq!(config.value_attribute, "value");
///
/// let strict = AdapterConfig::strict();
/// assert!(strict.deny_unknown_fields);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Policy for values that do not fit their field.
    pub on_mismatch: MismatchPolicy,
    /// Fail on document keys that match no field, instead of skipping them.
    pub deny_unknown_fields: bool,
    /// XML attribute holding the field name.
    pub name_attribute: &'static str,
    /// XML attribute holding a scalar value.
    pub value_attribute: &'static str,
}

impl Default for AdapterConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterConfig {
    /// Lenient defaults: skip mismatches and unknown keys, XML attributes
    /// `name` and `val`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            on_mismatch: MismatchPolicy::Skip,
            deny_unknown_fields: false,
            name_attribute: "name",
            value_attribute: "val",
        }
    }

    /// Abort on mismatches and on unknown keys.
    #[inline]
    pub const fn strict() -> Self {
        Self {
            on_mismatch: MismatchPolicy::Abort,
            deny_unknown_fields: true,
            ..Self::new()
        }
    }

    /// Set the mismatch policy.
    #[inline]
    pub const fn with_mismatch_policy(mut self, policy: MismatchPolicy) -> Self {
        self.on_mismatch = policy;
        self
    }

    /// Set whether unknown keys are an error.
    #[inline]
    pub const fn with_deny_unknown_fields(mut self, deny: bool) -> Self {
        self.deny_unknown_fields = deny;
        self
    }

    /// Set the XML attribute holding the field name.
    #[inline]
    pub const fn with_name_attribute(mut self, name: &'static str) -> Self {
        self.name_attribute = name;
        self
    }

    /// Set the XML attribute holding a scalar value.
    #[inline]
    pub const fn with_value_attribute(mut self, name: &'static str) -> Self {
        self.value_attribute = name;
        self
    }
}

impl AdapterConfig {
    /// Apply the mismatch policy to the outcome of one field.
    ///
    /// Returns the value a visitor reports as "handled". An aborting error is
    /// moved into `slot` unless it already holds one.
    pub(crate) fn settle(
        &self,
        result: Result<(), AdapterError>,
        slot: &mut Option<AdapterError>,
    ) -> bool {
        match (result, self.on_mismatch) {
            (Ok(()), _) => true,
            (Err(err), MismatchPolicy::Skip) => {
                log::warn!("{err}, value skipped");
                false
            }
            (Err(err), MismatchPolicy::Abort) => {
                slot.get_or_insert(err);
                true
            }
        }
    }

    /// Handle a document key that matched no field.
    pub(crate) fn unknown_key(
        &self,
        type_name: &'static str,
        key: &str,
    ) -> Result<(), AdapterError> {
        if self.deny_unknown_fields {
            return Err(AdapterError::UnknownField {
                type_name,
                key: key.to_string(),
            });
        }
        log::trace!("`{type_name}` has no field named `{key}`, skipped");
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{AdapterConfig, MismatchPolicy};
    use crate::adapter::AdapterError;

    #[test]
    fn settle_follows_policy() {
        let mut slot = None;
        let lenient = AdapterConfig::new();
        assert!(lenient.settle(Ok(()), &mut slot));
        assert!(!lenient.settle(Err(AdapterError::MissingElement("Root")), &mut slot));
        assert!(slot.is_none());

        let abort = lenient.with_mismatch_policy(MismatchPolicy::Abort);
        assert!(abort.settle(Err(AdapterError::MissingElement("Root")), &mut slot));
        assert!(matches!(slot, Some(AdapterError::MissingElement("Root"))));
    }

    #[test]
    fn unknown_keys() {
        assert!(AdapterConfig::new().unknown_key("Foo", "bar").is_ok());
        let err = AdapterConfig::strict().unknown_key("Foo", "bar").unwrap_err();
        assert_eq!(err.to_string(), "`Foo` has no field named `bar`");
    }
}
