//! The five contact-form fields and their presentation details.

use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

/// One input of the tender-inquiry form.
///
/// The declaration order is the order the form renders and the order errors
/// are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    /// Contact person's full name
    Name,
    /// Government department or organization
    Organization,
    /// Phone number, free format
    Phone,
    /// Email address
    Email,
    /// Free-text tender / requirement details
    Requirements,
}

/// HTML control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// `<input type="text">`
    Text,
    /// `<input type="tel">`
    Tel,
    /// `<input type="email">`
    Email,
    /// `<textarea>`
    TextArea,
}

impl Field {
    /// Every field, in render order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Organization,
        Field::Phone,
        Field::Email,
        Field::Requirements,
    ];

    /// The `name` attribute of the control.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Organization => "organization",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Requirements => "requirements",
        }
    }

    /// Visible label text. Every field is required.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Organization => "Organization",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::Requirements => "Tender / Requirement Details",
        }
    }

    /// Placeholder hint shown in an empty control.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your full name",
            Field::Organization => "Government department / Organization name",
            Field::Phone => "+91 XXXXX XXXXX",
            Field::Email => "your.email@example.com",
            Field::Requirements => {
                "Please describe your tender requirements, quantities, and delivery timeline..."
            }
        }
    }

    /// Control type used to render the field.
    pub fn input_kind(self) -> InputKind {
        match self {
            Field::Name | Field::Organization => InputKind::Text,
            Field::Phone => InputKind::Tel,
            Field::Email => InputKind::Email,
            Field::Requirements => InputKind::TextArea,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A control name that is not one of the five form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown contact form field `{}`", self.0)
    }
}

impl StdError for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
