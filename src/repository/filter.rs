//! Lowering of search predicates to Diesel `WHERE` expressions.
//!
//! Each predicate node becomes a boxed boolean expression over one table, so
//! the same expression can feed both the content and the count query.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::dsl::sql;
use diesel::expression::BoxableExpression;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;

use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::schema::{animals, recruitments, shelters};
use crate::search::{AnimalField, Comparison, Condition, Field, Predicate, RecruitmentField, Value};

/// Boolean SQL expression usable in a boxed query over table `T`.
pub type BoxedFilter<T> = Box<dyn BoxableExpression<T, Sqlite, SqlType = Bool>>;

fn boxed<T, E>(expr: E) -> BoxedFilter<T>
where
    E: BoxableExpression<T, Sqlite, SqlType = Bool> + 'static,
{
    Box::new(expr)
}

fn always<T: 'static>() -> BoxedFilter<T> {
    boxed(sql::<Bool>("1"))
}

/// Lowers `predicate`, using `leaf` for every comparison.
fn lower<F, T, L>(predicate: &Predicate<F>, leaf: &L) -> RepositoryResult<BoxedFilter<T>>
where
    F: Field,
    T: 'static,
    L: Fn(&Condition<F>) -> RepositoryResult<BoxedFilter<T>>,
{
    match predicate {
        Predicate::Always => Ok(always()),
        Predicate::Leaf(condition) => leaf(condition),
        Predicate::And(parts) => {
            let mut lowered = parts.iter().map(|part| lower(part, leaf));
            let Some(first) = lowered.next() else {
                return Ok(always());
            };
            lowered.try_fold(first?, |acc, next| Ok(boxed(acc.and(next?))))
        }
        Predicate::Or(parts) => {
            let mut lowered = parts.iter().map(|part| lower(part, leaf));
            let Some(first) = lowered.next() else {
                return Ok(always());
            };
            lowered.try_fold(first?, |acc, next| Ok(boxed(acc.or(next?))))
        }
    }
}

/// `LIKE` pattern matching `keyword` anywhere, with wildcards escaped.
pub fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn unsupported<F: Field>(condition: &Condition<F>) -> RepositoryError {
    RepositoryError::ValidationError(format!(
        "cannot lower {:?} {:?} {:?}",
        condition.field(),
        condition.op(),
        condition.value()
    ))
}

fn text<F: Field>(condition: &Condition<F>) -> RepositoryResult<String> {
    match condition.value() {
        Value::Text(value) => Ok(value.clone()),
        _ => Err(unsupported(condition)),
    }
}

fn boolean<F: Field>(condition: &Condition<F>) -> RepositoryResult<bool> {
    match condition.value() {
        Value::Bool(value) => Ok(*value),
        _ => Err(unsupported(condition)),
    }
}

fn id<F: Field>(condition: &Condition<F>) -> RepositoryResult<i32> {
    match condition.value() {
        Value::Integer(value) => i32::try_from(*value).map_err(|_| unsupported(condition)),
        _ => Err(unsupported(condition)),
    }
}

fn float<F: Field>(condition: &Condition<F>) -> RepositoryResult<f64> {
    match condition.value() {
        Value::Float(value) => Ok(*value),
        _ => Err(unsupported(condition)),
    }
}

fn date<F: Field>(condition: &Condition<F>) -> RepositoryResult<NaiveDate> {
    match condition.value() {
        Value::Date(value) => Ok(*value),
        _ => Err(unsupported(condition)),
    }
}

fn date_time<F: Field>(condition: &Condition<F>) -> RepositoryResult<NaiveDateTime> {
    match condition.value() {
        Value::DateTime(value) => Ok(*value),
        _ => Err(unsupported(condition)),
    }
}

/// Text comparison: `Eq` or escaped `LIKE` for `Contains`.
macro_rules! text_filter {
    ($condition:expr, $column:expr) => {{
        let value = text($condition)?;
        match $condition.op() {
            Comparison::Eq => Ok(boxed($column.eq(value))),
            Comparison::Contains => Ok(boxed($column.like(contains_pattern(&value)).escape('\\'))),
            _ => Err(unsupported($condition)),
        }
    }};
}

/// Ordered comparison against a scalar operand.
macro_rules! ordered_filter {
    ($condition:expr, $column:expr, $value:expr) => {{
        let value = $value;
        match $condition.op() {
            Comparison::Eq => Ok(boxed($column.eq(value))),
            Comparison::Ge => Ok(boxed($column.ge(value))),
            Comparison::Gt => Ok(boxed($column.gt(value))),
            Comparison::Le => Ok(boxed($column.le(value))),
            Comparison::Lt => Ok(boxed($column.lt(value))),
            Comparison::Contains => Err(unsupported($condition)),
        }
    }};
}

/// Equality only.
macro_rules! eq_filter {
    ($condition:expr, $column:expr, $value:expr) => {{
        let value = $value;
        match $condition.op() {
            Comparison::Eq => Ok(boxed($column.eq(value))),
            _ => Err(unsupported($condition)),
        }
    }};
}

fn recruitment_leaf(
    condition: &Condition<RecruitmentField>,
) -> RepositoryResult<BoxedFilter<recruitments::table>> {
    match condition.field() {
        RecruitmentField::Title => text_filter!(condition, recruitments::title),
        RecruitmentField::Content => text_filter!(condition, recruitments::content),
        RecruitmentField::ShelterName => {
            let value = text(condition)?;
            match condition.op() {
                Comparison::Eq => Ok(boxed(
                    recruitments::shelter_id.eq_any(
                        shelters::table
                            .filter(shelters::name.eq(value))
                            .select(shelters::id),
                    ),
                )),
                Comparison::Contains => Ok(boxed(
                    recruitments::shelter_id.eq_any(
                        shelters::table
                            .filter(shelters::name.like(contains_pattern(&value)).escape('\\'))
                            .select(shelters::id),
                    ),
                )),
                _ => Err(unsupported(condition)),
            }
        }
        RecruitmentField::ShelterId => {
            eq_filter!(condition, recruitments::shelter_id, id(condition)?)
        }
        RecruitmentField::IsClosed => {
            eq_filter!(condition, recruitments::is_closed, boolean(condition)?)
        }
        RecruitmentField::StartTime => {
            ordered_filter!(condition, recruitments::start_time, date_time(condition)?)
        }
    }
}

fn animal_leaf(condition: &Condition<AnimalField>) -> RepositoryResult<BoxedFilter<animals::table>> {
    match condition.field() {
        AnimalField::Name => text_filter!(condition, animals::name),
        AnimalField::ShelterId => eq_filter!(condition, animals::shelter_id, id(condition)?),
        AnimalField::Type => eq_filter!(condition, animals::animal_type, text(condition)?),
        AnimalField::Gender => eq_filter!(condition, animals::gender, text(condition)?),
        AnimalField::Active => eq_filter!(condition, animals::active, text(condition)?),
        AnimalField::IsNeutered => {
            eq_filter!(condition, animals::is_neutered, boolean(condition)?)
        }
        AnimalField::Weight => ordered_filter!(condition, animals::weight, float(condition)?),
        AnimalField::BirthDate => ordered_filter!(condition, animals::birth_date, date(condition)?),
    }
}

/// `WHERE` expression over `recruitments` equivalent to `predicate`.
pub fn recruitment_filter(
    predicate: &Predicate<RecruitmentField>,
) -> RepositoryResult<BoxedFilter<recruitments::table>> {
    lower(predicate, &recruitment_leaf)
}

/// `WHERE` expression over `animals` equivalent to `predicate`.
pub fn animal_filter(
    predicate: &Predicate<AnimalField>,
) -> RepositoryResult<BoxedFilter<animals::table>> {
    lower(predicate, &animal_leaf)
}
