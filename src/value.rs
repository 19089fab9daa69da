//! Row-value representation used by the working table store.
//!
//! A single attribute value is usually a plain [`Scalar`], but source data
//! for `strplaname` carries left/right values packed into one column before
//! S3 splits them; [`AttrValue::Pair`] is the column-aligned tag for that
//! pre-split state so S3's split routine can materialize it uniformly
//! across every packed column at once rather than special-casing columns
//! by name.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Real(f64),
    Null,
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// True when this value is the literal unset sentinel used throughout
    /// the source data: Rust's `Null`, or the string `"None"`.
    pub fn is_none_like(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Str(s) => s == "None",
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "{s}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Real(v) => write!(f, "{v}"),
            Scalar::Null => write!(f, ""),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

/// A cell in the working table: either a single value, or a left/right
/// packed pair awaiting S3's split.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Scalar(Scalar),
    Pair(Scalar, Scalar),
}

impl AttrValue {
    pub fn scalar(&self) -> Option<&Scalar> {
        match self {
            AttrValue::Scalar(s) => Some(s),
            AttrValue::Pair(..) => None,
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, AttrValue::Pair(..))
    }
}

impl Default for AttrValue {
    fn default() -> Self {
        AttrValue::Scalar(Scalar::Null)
    }
}

impl From<Scalar> for AttrValue {
    fn from(s: Scalar) -> Self {
        AttrValue::Scalar(s)
    }
}
