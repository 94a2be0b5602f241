use serde::Serialize;
use std::fmt;

/// Category of a broken constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    /// Text does not match its required pattern or character class.
    #[serde(rename = "FormatViolation")]
    Format,
    /// A number or date lies outside its inclusive bounds.
    #[serde(rename = "RangeViolation")]
    Range,
    /// A string or list exceeds its maximum length.
    #[serde(rename = "LengthViolation")]
    Length,
    /// A cross-field invariant does not hold.
    #[serde(rename = "StructuralViolation")]
    Structural,
    /// A token matches none of the recognized values.
    #[serde(rename = "EnumViolation")]
    Enum,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViolationKind::Format => "FormatViolation",
            ViolationKind::Range => "RangeViolation",
            ViolationKind::Length => "LengthViolation",
            ViolationKind::Structural => "StructuralViolation",
            ViolationKind::Enum => "EnumViolation",
        };
        f.write_str(name)
    }
}

/// A single constraint a request failed.
///
/// `field` is a dotted path into the request (`bankAccounts[2].iban`),
/// `rule` a stable short name of the check that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
    pub rule: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        kind: ViolationKind,
        rule: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}]: {}", self.field, self.kind, self.rule, self.message)
    }
}
