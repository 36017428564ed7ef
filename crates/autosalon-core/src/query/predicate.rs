//! Filter Predicate Builder.
//!
//! A [`Predicate`] is an ordered list of [`Condition`]s joined with `AND`.
//! [`Predicate::render`] walks that list once and emits both the SQL text
//! (`?1`, `?2`, ...) and the bound values, so placeholder `?n` always binds
//! the `n`-th value. Nothing else in the crate builds WHERE clauses by hand.
//!
//! The same conditions can also be evaluated in memory with
//! [`Predicate::matches`], which the store test double uses.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::car::{Car, CarStatus};
use crate::types::filter::FilterCriteria;

/// Escape character used in rendered `LIKE` clauses.
const LIKE_ESCAPE: char = '\\';

/// SQL scalar function that lowercases text with Unicode rules. SQLite's
/// own `LIKE` folds ASCII only, so substring matches wrap both sides in it.
/// Every connection that runs a rendered predicate must register it.
pub const CASEFOLD_FN: &str = "casefold";

/// Filterable columns of the `cars` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarColumn {
    Id,
    Make,
    Model,
    BodyType,
    Transmission,
    FuelType,
    Price,
    Year,
    Status,
}

impl CarColumn {
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Make => "make",
            Self::Model => "model",
            Self::BodyType => "type",
            Self::Transmission => "transmission",
            Self::FuelType => "fuel_type",
            Self::Price => "price",
            Self::Year => "year",
            Self::Status => "status",
        }
    }

    /// The value this column holds for `car`.
    pub fn value_of(&self, car: &Car) -> SqlValue {
        match self {
            Self::Id => SqlValue::Integer(car.id),
            Self::Make => SqlValue::Text(car.make.clone()),
            Self::Model => SqlValue::Text(car.model.clone()),
            Self::BodyType => SqlValue::Text(car.body_type.clone()),
            Self::Transmission => SqlValue::Text(car.transmission.as_str().to_string()),
            Self::FuelType => SqlValue::Text(car.fuel_type.as_str().to_string()),
            Self::Price => SqlValue::Real(car.price),
            Self::Year => SqlValue::Integer(car.year as i64),
            Self::Status => SqlValue::Text(car.status.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    NotEq,
    Gte,
    Lte,
    /// Case-insensitive substring match.
    Contains,
}

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Compare with SQLite affinity semantics for the types we bind:
    /// numbers compare numerically across Integer/Real, text compares
    /// bytewise, and mixed number/text never compares.
    pub fn compare(&self, other: &SqlValue) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Real(a), Self::Real(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Real(b)) => (*a as f64).partial_cmp(b),
            (Self::Real(a), Self::Integer(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => Some(a.as_str().cmp(b.as_str())),
            _ => None,
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Integer(v as i64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// One `column <op> value` term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub column: CarColumn,
    pub operator: Operator,
    pub value: SqlValue,
}

impl Condition {
    pub fn new(column: CarColumn, operator: Operator, value: impl Into<SqlValue>) -> Self {
        Self {
            column,
            operator,
            value: value.into(),
        }
    }

    /// SQL fragment for this condition bound at placeholder `index` (1-based).
    fn render_sql(&self, index: usize) -> String {
        let column = self.column.column_name();
        match self.operator {
            Operator::Eq => format!("{column} = ?{index}"),
            Operator::NotEq => format!("{column} <> ?{index}"),
            Operator::Gte => format!("{column} >= ?{index}"),
            Operator::Lte => format!("{column} <= ?{index}"),
            Operator::Contains => format!(
                "{CASEFOLD_FN}({column}) LIKE {CASEFOLD_FN}(?{index}) ESCAPE '{LIKE_ESCAPE}'"
            ),
        }
    }

    /// The value actually bound for this condition.
    fn bind_value(&self) -> SqlValue {
        match (&self.operator, &self.value) {
            (Operator::Contains, SqlValue::Text(needle)) => {
                SqlValue::Text(format!("%{}%", escape_like(needle)))
            }
            (_, value) => value.clone(),
        }
    }

    /// Evaluate against an in-memory car.
    pub fn matches(&self, car: &Car) -> bool {
        let actual = self.column.value_of(car);
        match self.operator {
            Operator::Eq => actual.compare(&self.value) == Some(Ordering::Equal),
            Operator::NotEq => {
                matches!(actual.compare(&self.value), Some(o) if o != Ordering::Equal)
            }
            Operator::Gte => matches!(
                actual.compare(&self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Operator::Lte => matches!(
                actual.compare(&self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Operator::Contains => match (&actual, &self.value) {
                (SqlValue::Text(haystack), SqlValue::Text(needle)) => haystack
                    .to_lowercase()
                    .contains(&needle.to_lowercase()),
                _ => false,
            },
        }
    }
}

/// SQL text plus the positionally matching bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPredicate {
    /// Boolean expression suitable for a `WHERE` clause.
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl RenderedPredicate {
    /// Index of the next free placeholder, for callers appending
    /// `LIMIT ?n OFFSET ?m` after the predicate.
    pub fn next_placeholder(&self) -> usize {
        self.params.len() + 1
    }
}

/// A conjunction of conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    /// The empty predicate matches every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate listing criteria into a predicate.
    ///
    /// Always starts with `status <> 'sold'`; each supplied criterion then
    /// appends exactly one condition, in a fixed field order.
    pub fn for_listing(criteria: &FilterCriteria) -> Self {
        let criteria = criteria.clone().normalized();
        let mut predicate =
            Self::new().and(CarColumn::Status, Operator::NotEq, CarStatus::Sold.as_str());

        if let Some(make) = criteria.make {
            predicate = predicate.and(CarColumn::Make, Operator::Contains, make);
        }
        if let Some(model) = criteria.model {
            predicate = predicate.and(CarColumn::Model, Operator::Contains, model);
        }
        if let Some(body_type) = criteria.body_type {
            predicate = predicate.and(CarColumn::BodyType, Operator::Eq, body_type);
        }
        if let Some(transmission) = criteria.transmission {
            predicate = predicate.and(CarColumn::Transmission, Operator::Eq, transmission);
        }
        if let Some(fuel_type) = criteria.fuel_type {
            predicate = predicate.and(CarColumn::FuelType, Operator::Eq, fuel_type);
        }
        if let Some(min) = criteria.min_price {
            predicate = predicate.and(CarColumn::Price, Operator::Gte, min);
        }
        if let Some(max) = criteria.max_price {
            predicate = predicate.and(CarColumn::Price, Operator::Lte, max);
        }
        if let Some(year) = criteria.year {
            predicate = predicate.and(CarColumn::Year, Operator::Eq, year);
        }
        predicate
    }

    /// Append one condition.
    pub fn and(mut self, column: CarColumn, operator: Operator, value: impl Into<SqlValue>) -> Self {
        self.conditions.push(Condition::new(column, operator, value));
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render to SQL text and bound values in one pass.
    pub fn render(&self) -> RenderedPredicate {
        if self.conditions.is_empty() {
            return RenderedPredicate {
                sql: "1 = 1".to_string(),
                params: Vec::new(),
            };
        }

        let mut fragments = Vec::with_capacity(self.conditions.len());
        let mut params = Vec::with_capacity(self.conditions.len());
        for condition in &self.conditions {
            params.push(condition.bind_value());
            fragments.push(condition.render_sql(params.len()));
        }

        RenderedPredicate {
            sql: fragments.join(" AND "),
            params,
        }
    }

    /// Evaluate the conjunction in memory.
    pub fn matches(&self, car: &Car) -> bool {
        self.conditions.iter().all(|c| c.matches(car))
    }
}

/// Escape `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch == LIKE_ESCAPE || ch == '%' || ch == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::car::{FuelType, NewCar, Transmission};

    fn car(make: &str, price: f64, status: CarStatus) -> Car {
        NewCar {
            make: make.to_string(),
            model: "Model".to_string(),
            year: 2020,
            body_type: "suv".to_string(),
            transmission: Transmission::Automatic,
            seats: 5,
            doors: 4,
            fuel_type: FuelType::Petrol,
            mileage: 0,
            price,
            status,
            image_url: None,
            description: None,
            vin: None,
            color: None,
            engine_volume: None,
            engine_power: None,
        }
        .into_car(1)
    }

    #[test]
    fn empty_criteria_only_excludes_sold() {
        let rendered = Predicate::for_listing(&FilterCriteria::default()).render();
        assert_eq!(rendered.sql, "status <> ?1");
        assert_eq!(rendered.params, vec![SqlValue::Text("sold".into())]);
    }

    #[test]
    fn placeholders_follow_append_order() {
        let criteria = FilterCriteria::new()
            .with_make("oyo")
            .with_body_type("suv")
            .with_price_range(Some(100.0), Some(500.0))
            .with_year(2020);
        let rendered = Predicate::for_listing(&criteria).render();

        assert_eq!(
            rendered.sql,
            "status <> ?1 AND casefold(make) LIKE casefold(?2) ESCAPE '\\' AND type = ?3 \
             AND price >= ?4 AND price <= ?5 AND year = ?6"
        );
        assert_eq!(
            rendered.params,
            vec![
                SqlValue::Text("sold".into()),
                SqlValue::Text("%oyo%".into()),
                SqlValue::Text("suv".into()),
                SqlValue::Real(100.0),
                SqlValue::Real(500.0),
                SqlValue::Integer(2020),
            ]
        );
        assert_eq!(rendered.next_placeholder(), 7);
    }

    #[test]
    fn blank_fields_add_no_conditions() {
        let criteria = FilterCriteria {
            make: Some(String::new()),
            transmission: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(Predicate::for_listing(&criteria).conditions().len(), 1);
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        let rendered = Predicate::new()
            .and(CarColumn::Make, Operator::Contains, "50%_off\\")
            .render();
        assert_eq!(rendered.params, vec![SqlValue::Text("%50\\%\\_off\\\\%".into())]);
    }

    #[test]
    fn empty_predicate_renders_tautology() {
        let rendered = Predicate::new().render();
        assert_eq!(rendered.sql, "1 = 1");
        assert!(rendered.params.is_empty());
    }

    #[test]
    fn contains_is_case_insensitive_in_memory() {
        let p = Predicate::for_listing(&FilterCriteria::new().with_make("oyo"));
        assert!(p.matches(&car("Toyota", 1.0, CarStatus::Available)));
        assert!(p.matches(&car("TOYOTA", 1.0, CarStatus::Reserved)));
        assert!(!p.matches(&car("Honda", 1.0, CarStatus::Available)));

        let p = Predicate::for_listing(&FilterCriteria::new().with_make("лад"));
        assert!(p.matches(&car("Лада", 1.0, CarStatus::Available)));
        assert!(p.matches(&car("ЛАДА", 1.0, CarStatus::Available)));
    }

    #[test]
    fn sold_cars_never_match_listing() {
        let p = Predicate::for_listing(&FilterCriteria::default());
        assert!(!p.matches(&car("Toyota", 1.0, CarStatus::Sold)));
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let p = Predicate::for_listing(
            &FilterCriteria::new().with_price_range(Some(100.0), Some(50.0)),
        );
        for price in [0.0, 50.0, 75.0, 100.0, 1000.0] {
            assert!(!p.matches(&car("Kia", price, CarStatus::Available)));
        }
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let p = Predicate::for_listing(
            &FilterCriteria::new().with_price_range(Some(100.0), Some(200.0)),
        );
        assert!(p.matches(&car("Kia", 100.0, CarStatus::Available)));
        assert!(p.matches(&car("Kia", 200.0, CarStatus::Available)));
        assert!(!p.matches(&car("Kia", 200.01, CarStatus::Available)));
    }
}
