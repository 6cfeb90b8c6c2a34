//! Composable boolean predicate over typed entity fields.
//!
//! A [`Predicate`] is a plain tree: `Always`, a single field comparison, or
//! an `And`/`Or` of sub-predicates. "No constraint" is the explicit `Always`
//! node. Leaves are validated on construction so that the repository can
//! lower them without re-checking operand types.

use std::cmp::Ordering;
use std::fmt::Debug;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Storage type of a searchable field or a comparison operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Bool,
    Integer,
    Float,
    Date,
    DateTime,
}

/// Operand of a leaf comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Bool(_) => ValueKind::Bool,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Date(_) => ValueKind::Date,
            Value::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// Orders two values of the same kind; `None` across kinds or for NaN.
    fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

/// Comparison applied by a leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    /// Case-sensitive substring containment.
    Contains,
    Ge,
    Gt,
    Le,
    Lt,
}

impl Comparison {
    fn supports(self, kind: ValueKind) -> bool {
        match self {
            Comparison::Eq => true,
            Comparison::Contains => kind == ValueKind::Text,
            Comparison::Ge | Comparison::Gt | Comparison::Le | Comparison::Lt => {
                kind != ValueKind::Bool
            }
        }
    }
}

/// A searchable column of some entity.
pub trait Field: Copy + Debug + PartialEq {
    /// Storage type of the column.
    fn kind(self) -> ValueKind;
}

/// An entity that can be evaluated against a [`Predicate`] in memory.
pub trait Record<F> {
    /// Current value of `field`, `None` when the entity has no value.
    fn value(&self, field: F) -> Option<Value>;
}

/// Errors raised while building a single leaf.
///
/// The criteria builders never surface these: a leaf that cannot be built
/// contributes no constraint (see [`tolerant`]).
#[derive(Debug, Error, PartialEq)]
pub enum PredicateError {
    #[error("{field} expects a {expected:?} operand, got {actual:?}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("{op:?} is not supported for {kind:?} operands")]
    UnsupportedComparison { op: Comparison, kind: ValueKind },
    #[error("empty operand for {0}")]
    EmptyOperand(String),
    #[error("operand for {0} is not comparable")]
    InvalidOperand(String),
    #[error("date bound out of range")]
    OutOfRange,
}

/// A validated `field <op> value` comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition<F> {
    field: F,
    op: Comparison,
    value: Value,
}

impl<F: Field> Condition<F> {
    pub fn field(&self) -> F {
        self.field
    }

    pub fn op(&self) -> Comparison {
        self.op
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    fn matches(&self, actual: &Value) -> bool {
        match self.op {
            Comparison::Contains => match (actual, &self.value) {
                (Value::Text(haystack), Value::Text(needle)) => haystack.contains(needle.as_str()),
                _ => false,
            },
            op => match actual.compare(&self.value) {
                Some(ordering) => match op {
                    Comparison::Eq => ordering == Ordering::Equal,
                    Comparison::Ge => ordering != Ordering::Less,
                    Comparison::Gt => ordering == Ordering::Greater,
                    Comparison::Le => ordering != Ordering::Greater,
                    Comparison::Lt => ordering == Ordering::Less,
                    Comparison::Contains => false,
                },
                None => false,
            },
        }
    }
}

/// Boolean expression tree over the fields `F` of one entity.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate<F> {
    /// No constraint.
    Always,
    Leaf(Condition<F>),
    And(Vec<Predicate<F>>),
    Or(Vec<Predicate<F>>),
}

impl<F: Field> Predicate<F> {
    /// Builds a leaf, checking the operand against the field type.
    pub fn leaf(field: F, op: Comparison, value: impl Into<Value>) -> Result<Self, PredicateError> {
        let value = value.into();
        let kind = field.kind();
        if value.kind() != kind {
            return Err(PredicateError::TypeMismatch {
                field: format!("{field:?}"),
                expected: kind,
                actual: value.kind(),
            });
        }
        if !op.supports(kind) {
            return Err(PredicateError::UnsupportedComparison { op, kind });
        }
        match &value {
            Value::Text(text) if op == Comparison::Contains && text.is_empty() => {
                return Err(PredicateError::EmptyOperand(format!("{field:?}")));
            }
            Value::Float(number) if number.is_nan() => {
                return Err(PredicateError::InvalidOperand(format!("{field:?}")));
            }
            _ => {}
        }
        Ok(Predicate::Leaf(Condition { field, op, value }))
    }

    pub fn contains(field: F, keyword: &str) -> Result<Self, PredicateError> {
        Self::leaf(field, Comparison::Contains, keyword)
    }

    pub fn equals(field: F, value: impl Into<Value>) -> Result<Self, PredicateError> {
        Self::leaf(field, Comparison::Eq, value)
    }

    pub fn ge(field: F, value: impl Into<Value>) -> Result<Self, PredicateError> {
        Self::leaf(field, Comparison::Ge, value)
    }

    pub fn gt(field: F, value: impl Into<Value>) -> Result<Self, PredicateError> {
        Self::leaf(field, Comparison::Gt, value)
    }

    pub fn le(field: F, value: impl Into<Value>) -> Result<Self, PredicateError> {
        Self::leaf(field, Comparison::Le, value)
    }

    pub fn lt(field: F, value: impl Into<Value>) -> Result<Self, PredicateError> {
        Self::leaf(field, Comparison::Lt, value)
    }

    /// Conjunction of `parts`. `Always` parts are dropped; nothing left
    /// collapses to `Always`.
    pub fn all<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut parts: Vec<Self> = parts.into_iter().filter(|p| !p.is_always()).collect();
        match parts.len() {
            0 => Predicate::Always,
            1 => parts.remove(0),
            _ => Predicate::And(parts),
        }
    }

    /// Disjunction of `parts`. An empty group imposes no constraint, and so
    /// does a group containing `Always`.
    pub fn any<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut parts: Vec<Self> = parts.into_iter().collect();
        if parts.iter().any(Predicate::is_always) {
            return Predicate::Always;
        }
        match parts.len() {
            0 => Predicate::Always,
            1 => parts.remove(0),
            _ => Predicate::Or(parts),
        }
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Predicate::Always)
    }

    /// Evaluates the predicate against an in-memory record.
    ///
    /// A missing field value fails every comparison, like SQL `NULL`.
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<F> + ?Sized,
    {
        match self {
            Predicate::Always => true,
            Predicate::Leaf(condition) => record
                .value(condition.field)
                .is_some_and(|actual| condition.matches(&actual)),
            Predicate::And(parts) => parts.iter().all(|p| p.matches(record)),
            Predicate::Or(parts) => parts.is_empty() || parts.iter().any(|p| p.matches(record)),
        }
    }
}

/// Absorbs a leaf construction error, turning it into "no constraint".
pub fn tolerant<F: Field>(leaf: Result<Predicate<F>, PredicateError>) -> Option<Predicate<F>> {
    match leaf {
        Ok(predicate) => Some(predicate),
        Err(err) => {
            log::debug!("Dropping search constraint: {err}");
            None
        }
    }
}
