use serde::Serialize;

use super::CatalogField;

/// Store-agnostic description of the candidate filter.
///
/// Leaves are substring (`Contains`) or exact (`Equals`) predicates over a
/// logical field; `All`/`Any` are conjunction and disjunction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FilterExpression {
    Contains { field: CatalogField, value: String },
    Equals { field: CatalogField, value: String },
    All { children: Vec<FilterExpression> },
    Any { children: Vec<FilterExpression> },
}

impl FilterExpression {
    pub fn contains(field: CatalogField, value: impl Into<String>) -> Self {
        FilterExpression::Contains {
            field,
            value: value.into(),
        }
    }

    pub fn equals(field: CatalogField, value: impl Into<String>) -> Self {
        FilterExpression::Equals {
            field,
            value: value.into(),
        }
    }

    /// Conjunction; a single child collapses to itself
    pub fn all_of(mut children: Vec<FilterExpression>) -> Self {
        if children.len() == 1 {
            return children.remove(0);
        }
        FilterExpression::All { children }
    }

    /// Disjunction; a single child collapses to itself
    pub fn any_of(mut children: Vec<FilterExpression>) -> Self {
        if children.len() == 1 {
            return children.remove(0);
        }
        FilterExpression::Any { children }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            FilterExpression::Contains { .. } | FilterExpression::Equals { .. }
        )
    }

    /// Number of leaf predicates in the tree
    pub fn predicate_count(&self) -> usize {
        match self {
            FilterExpression::Contains { .. } | FilterExpression::Equals { .. } => 1,
            FilterExpression::All { children } | FilterExpression::Any { children } => {
                children.iter().map(FilterExpression::predicate_count).sum()
            }
        }
    }
}
