//! Business rules: pluggable invariant checks reported as typed failures.

use thiserror::Error;

use crate::error::{DomainError, DomainResult};

/// A predicate plus the error to report when it does not hold.
///
/// Any type can be a rule; rules are meant to be small, independently
/// testable values that can be reused across entities.
pub trait BusinessRule {
    /// `true` when the rule is violated.
    fn is_broken(&self) -> bool;

    /// The error describing the violation.
    fn error(&self) -> DomainError;
}

impl<R: BusinessRule + ?Sized> BusinessRule for &R {
    fn is_broken(&self) -> bool {
        (**self).is_broken()
    }

    fn error(&self) -> DomainError {
        (**self).error()
    }
}

impl<R: BusinessRule + ?Sized> BusinessRule for Box<R> {
    fn is_broken(&self) -> bool {
        (**self).is_broken()
    }

    fn error(&self) -> DomainError {
        (**self).error()
    }
}

/// Evaluate a single rule.
pub fn check_rule<R: BusinessRule + ?Sized>(rule: &R) -> DomainResult<()> {
    if rule.is_broken() {
        let error = rule.error();
        tracing::debug!(code = error.code(), kind = %error.kind(), "business rule broken");
        return Err(error);
    }
    Ok(())
}

/// Evaluate every rule and collect all violations, in rule order.
pub fn check_rules<'a, I>(rules: I) -> Result<(), RuleViolations>
where
    I: IntoIterator<Item = &'a dyn BusinessRule>,
{
    let errors: Vec<DomainError> = rules
        .into_iter()
        .filter_map(|rule| check_rule(rule).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RuleViolations { errors })
    }
}

/// One or more broken rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{} business rule(s) broken", errors.len())]
pub struct RuleViolations {
    errors: Vec<DomainError>,
}

impl RuleViolations {
    pub fn errors(&self) -> &[DomainError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<DomainError> {
        self.errors
    }

    /// The first violation (there is always at least one).
    pub fn first(&self) -> &DomainError {
        &self.errors[0]
    }
}

impl IntoIterator for RuleViolations {
    type Item = DomainError;
    type IntoIter = std::vec::IntoIter<DomainError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Capability of validating business rules as a method on the implementor.
pub trait CheckRule {
    fn check_rule(&self, rule: &dyn BusinessRule) -> DomainResult<()> {
        check_rule(rule)
    }
}
