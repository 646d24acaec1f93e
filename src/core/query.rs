//! Oracle-style finder-query micro-interpreter
//!
//! Parses the constrained filter grammar accepted by the real API into
//! predicate clauses and evaluates them against record mappings:
//!
//! - `StatusCode=Booked` / `StatusCode='OPEN'` — equality, quotes optional
//! - `TotalAmount>=1000` / `TotalAmount<=99.5` — comparison
//! - `Supplier like 'ABC*'` — wildcard match, keyword case-insensitive
//! - `CustomerId=CUST-1001;StatusCode=Booked` — conjunction via `;`
//!
//! The grammar is a cross-system compatibility contract, including its
//! quirks: malformed clauses are dropped silently (they contribute no
//! restriction), and the wildcard match is anchored at the start of the
//! field value rather than implementing full `LIKE` semantics. Both
//! behaviors are preserved deliberately; see DESIGN.md.

use crate::core::record::{Record, field};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Comparison operator of a single filter clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ge,
    Le,
    /// Wildcard match, `*`/`%` meaning "zero or more characters"
    Like,
}

/// A literal from the right-hand side of a clause, after numeric coercion.
///
/// A literal with no decimal point that parses as an integer becomes
/// `Int`; otherwise a float parse is attempted; otherwise it stays a string.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Literal {
    fn coerce(raw: &str) -> Literal {
        if !raw.contains('.')
            && let Ok(i) = raw.parse::<i64>()
        {
            return Literal::Int(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Literal::Float(f);
        }
        Literal::Str(raw.to_string())
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Int(i) => Some(*i as f64),
            Literal::Float(f) => Some(*f),
            Literal::Str(_) => None,
        }
    }
}

/// One parsed comparison: field, operator, literal
#[derive(Debug, Clone)]
pub struct FilterClause {
    pub field: String,
    pub op: FilterOp,
    literal: Literal,
    /// Compiled wildcard pattern, present only for `Like` clauses
    pattern: Option<Regex>,
}

impl FilterClause {
    /// Evaluate this clause against a record
    pub fn matches(&self, record: &Record) -> bool {
        let value = field(record, &self.field);
        match self.op {
            FilterOp::Eq => value.is_some_and(|v| self.equals(v)),
            FilterOp::Ge => self
                .compare(value)
                .is_some_and(|ord| ord != std::cmp::Ordering::Less),
            FilterOp::Le => self
                .compare(value)
                .is_some_and(|ord| ord != std::cmp::Ordering::Greater),
            FilterOp::Like => self.like_matches(value),
        }
    }

    fn equals(&self, value: &Value) -> bool {
        match (&self.literal, value) {
            (Literal::Str(s), Value::String(v)) => v == s,
            (Literal::Str(s), Value::Bool(v)) => s.eq_ignore_ascii_case(if *v {
                "true"
            } else {
                "false"
            }),
            (lit, Value::Number(n)) => match (lit.as_f64(), n.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            _ => false,
        }
    }

    /// Ordering of the record value relative to the literal.
    ///
    /// `None` when the field is absent or the two sides are not comparable
    /// (numeric vs numeric, or string vs string lexicographically) — an
    /// incomparable clause fails rather than erroring.
    fn compare(&self, value: Option<&Value>) -> Option<std::cmp::Ordering> {
        match (value?, &self.literal) {
            (Value::Number(n), lit) => {
                let (a, b) = (n.as_f64()?, lit.as_f64()?);
                a.partial_cmp(&b)
            }
            (Value::String(v), Literal::Str(s)) => Some(v.as_str().cmp(s.as_str())),
            _ => None,
        }
    }

    fn like_matches(&self, value: Option<&Value>) -> bool {
        // Wildcard clauses require a present, non-empty field value.
        let text = match value {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => return false,
        };
        self.pattern
            .as_ref()
            .is_some_and(|regex| regex.is_match(&text))
    }
}

/// A parsed filter expression: zero or more AND-ed clauses.
///
/// An absent or empty expression parses to zero clauses and matches
/// everything.
#[derive(Debug, Clone, Default)]
pub struct FilterExpression {
    clauses: Vec<FilterClause>,
}

fn comparison_regex() -> &'static Regex {
    static COMPARISON: OnceLock<Regex> = OnceLock::new();
    // >= and <= listed before bare = so a comparison is never misparsed
    // as an equality against a value starting with '=' or '<'.
    COMPARISON.get_or_init(|| Regex::new(r"^(\w+)(>=|<=|=)(.+)$").unwrap())
}

fn like_regex() -> &'static Regex {
    static LIKE: OnceLock<Regex> = OnceLock::new();
    LIKE.get_or_init(|| Regex::new(r"(?i)^(\w+)\s+like\s+'([^']+)'$").unwrap())
}

/// Translate an Oracle wildcard pattern into an anchored regex.
///
/// `*` and `%` become "any sequence"; everything else is matched literally,
/// case-insensitively, anchored at the start of the field value.
fn compile_wildcard(pattern: &str) -> Option<Regex> {
    let mut regex = String::from("(?i)^");
    for ch in pattern.chars() {
        match ch {
            '*' | '%' => regex.push_str(".*"),
            c => regex.push_str(&regex::escape(&c.to_string())),
        }
    }
    Regex::new(&regex).ok()
}

impl FilterExpression {
    /// Parse a filter expression string.
    ///
    /// Clauses are split on `;`; empty sub-clauses are skipped. A clause
    /// matching neither the comparison nor the LIKE pattern is dropped
    /// without filtering anything — a documented compatibility quirk, not
    /// something to harden away.
    pub fn parse(expression: Option<&str>) -> FilterExpression {
        let Some(expression) = expression else {
            return FilterExpression::default();
        };

        let mut clauses = Vec::new();
        for raw in expression.split(';') {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }

            if let Some(caps) = like_regex().captures(raw) {
                let pattern = compile_wildcard(&caps[2]);
                clauses.push(FilterClause {
                    field: caps[1].to_string(),
                    op: FilterOp::Like,
                    literal: Literal::Str(caps[2].to_string()),
                    pattern,
                });
                continue;
            }

            if let Some(caps) = comparison_regex().captures(raw) {
                let op = match &caps[2] {
                    ">=" => FilterOp::Ge,
                    "<=" => FilterOp::Le,
                    _ => FilterOp::Eq,
                };
                let value = caps[3].trim();
                let value = value
                    .strip_prefix('\'')
                    .and_then(|v| v.strip_suffix('\''))
                    .unwrap_or(value);
                clauses.push(FilterClause {
                    field: caps[1].to_string(),
                    op,
                    literal: Literal::coerce(value),
                    pattern: None,
                });
                continue;
            }

            tracing::debug!(clause = raw, "dropping malformed filter clause");
        }

        FilterExpression { clauses }
    }

    /// Number of parsed clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the expression matches everything
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// AND across all clauses
    pub fn matches(&self, record: &Record) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }

    /// Filter a record list, preserving relative order
    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        if self.is_empty() {
            return records;
        }
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

/// Parse and apply an optional filter expression in one call
pub fn apply_filter(records: Vec<Record>, expression: Option<&str>) -> Vec<Record> {
    FilterExpression::parse(expression).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn orders() -> Vec<Record> {
        vec![
            json!({"HeaderId": "SO-1", "StatusCode": "Booked", "TotalAmount": 100.0}),
            json!({"HeaderId": "SO-2", "StatusCode": "Shipped", "TotalAmount": 250.5}),
            json!({"HeaderId": "SO-3", "StatusCode": "Booked", "TotalAmount": 75.0}),
            json!({"HeaderId": "SO-4", "StatusCode": "Closed", "TotalAmount": 10.0}),
            json!({"HeaderId": "SO-5", "StatusCode": "Booked", "TotalAmount": 500.0}),
            json!({"HeaderId": "SO-6", "StatusCode": "Shipped"}),
        ]
    }

    #[test]
    fn test_empty_expression_matches_everything() {
        assert_eq!(apply_filter(orders(), None).len(), 6);
        assert_eq!(apply_filter(orders(), Some("")).len(), 6);
        assert_eq!(apply_filter(orders(), Some(" ; ;")).len(), 6);
    }

    #[test]
    fn test_equality_keeps_original_order() {
        let booked = apply_filter(orders(), Some("StatusCode=Booked"));
        let ids: Vec<_> = booked
            .iter()
            .map(|o| o["HeaderId"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["SO-1", "SO-3", "SO-5"]);
    }

    #[test]
    fn test_equality_with_quoted_literal() {
        let booked = apply_filter(orders(), Some("StatusCode='Booked'"));
        assert_eq!(booked.len(), 3);
    }

    #[test]
    fn test_numeric_equality_coercion() {
        let records = vec![json!({"SupplierId": 1001}), json!({"SupplierId": 1002})];
        let hits = apply_filter(records, Some("SupplierId=1001"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["SupplierId"], json!(1001));
    }

    #[test]
    fn test_comparison_operators() {
        let cheap = apply_filter(orders(), Some("TotalAmount<=100"));
        assert_eq!(cheap.len(), 3);

        let expensive = apply_filter(orders(), Some("TotalAmount>=250.5"));
        assert_eq!(expensive.len(), 2);
    }

    #[test]
    fn test_comparison_fails_on_absent_field() {
        // SO-6 has no TotalAmount and must fail both directions.
        let all = apply_filter(orders(), Some("TotalAmount>=0"));
        assert_eq!(all.len(), 5);
        let none = apply_filter(orders(), Some("TotalAmount<=10000"));
        assert!(!none.iter().any(|o| o["HeaderId"] == json!("SO-6")));
    }

    #[test]
    fn test_conjunction() {
        let hits = apply_filter(orders(), Some("StatusCode=Booked;TotalAmount>=100"));
        let ids: Vec<_> = hits.iter().map(|o| o["HeaderId"].clone()).collect();
        assert_eq!(ids, vec![json!("SO-1"), json!("SO-5")]);
    }

    #[test]
    fn test_like_is_case_insensitive_prefix() {
        let suppliers = vec![
            json!({"Supplier": "ABC Office Supplies Inc"}),
            json!({"Supplier": "abc industrial"}),
            json!({"Supplier": "Global ABC Corp"}),
        ];
        let hits = apply_filter(suppliers, Some("Supplier like 'ABC*'"));
        // Anchored at the start: "Global ABC Corp" does not match.
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_like_keyword_case_and_percent_wildcard() {
        let suppliers = vec![json!({"Supplier": "TechParts Ltd"})];
        let hits = apply_filter(suppliers, Some("Supplier LIKE 'tech%'"));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_like_requires_non_empty_value() {
        let records = vec![
            json!({"Supplier": ""}),
            json!({"Supplier": null}),
            json!({"Other": "ABC"}),
        ];
        assert!(apply_filter(records, Some("Supplier like 'A*'")).is_empty());
    }

    #[test]
    fn test_malformed_clause_is_dropped() {
        // "garbage" has no operator: it contributes no restriction.
        let hits = apply_filter(orders(), Some("garbage;StatusCode=Booked"));
        assert_eq!(hits.len(), 3);
        assert_eq!(apply_filter(orders(), Some("!!!")).len(), 6);
    }

    #[test]
    fn test_ge_is_tried_before_eq() {
        // "TotalAmount>=100" must not parse as TotalAmount> = "=100".
        let expr = FilterExpression::parse(Some("TotalAmount>=100"));
        assert_eq!(expr.len(), 1);
        assert!(expr.matches(&json!({"TotalAmount": 100})));
        assert!(!expr.matches(&json!({"TotalAmount": 99})));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let expr = FilterExpression::parse(Some("StatusCode=Booked"));
        let once = expr.apply(orders());
        let twice = expr.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_string_comparison_is_lexicographic() {
        let hits = apply_filter(orders(), Some("HeaderId>=SO-4"));
        assert_eq!(hits.len(), 3);
    }
}
