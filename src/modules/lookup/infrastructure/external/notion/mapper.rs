use serde_json::{json, Value};

use super::dto::{NotionPage, NotionProperty};
use crate::modules::lookup::domain::{
    CandidateRecord, CatalogField, CatalogSchema, FilterExpression,
};
use crate::shared::errors::{AppError, AppResult};

/// Placeholder display name for pages without a name
pub const UNNAMED_PRODUCT: &str = "Sem nome";

/// Translates between lookup domain types and Notion's database API shapes
pub struct NotionMapper;

impl NotionMapper {
    /// Render a filter tree as a Notion database filter object
    pub fn filter_to_json(filter: &FilterExpression, schema: &CatalogSchema) -> AppResult<Value> {
        match filter {
            FilterExpression::Contains { field, value } => {
                Self::leaf(schema, *field, "contains", value)
            }
            FilterExpression::Equals { field, value } => {
                Self::leaf(schema, *field, "equals", value)
            }
            FilterExpression::All { children } => Ok(json!({
                "and": Self::children_to_json(children, schema)?
            })),
            FilterExpression::Any { children } => Ok(json!({
                "or": Self::children_to_json(children, schema)?
            })),
        }
    }

    fn children_to_json(
        children: &[FilterExpression],
        schema: &CatalogSchema,
    ) -> AppResult<Vec<Value>> {
        children
            .iter()
            .map(|child| Self::filter_to_json(child, schema))
            .collect()
    }

    fn leaf(
        schema: &CatalogSchema,
        field: CatalogField,
        operator: &str,
        value: &str,
    ) -> AppResult<Value> {
        let property = schema.filter_property(field).ok_or_else(|| {
            AppError::ConfigError(format!("No property mapped for '{}'", field.as_str()))
        })?;
        let kind = Self::property_kind(field)?;

        Ok(json!({
            "property": property,
            kind: { operator: value }
        }))
    }

    /// Notion property type a text predicate is expressed against
    fn property_kind(field: CatalogField) -> AppResult<&'static str> {
        match field {
            CatalogField::Name => Ok("title"),
            CatalogField::Code => Ok("rich_text"),
            CatalogField::Price | CatalogField::Image => Err(AppError::InternalError(format!(
                "Text filters are not supported on '{}'",
                field.as_str()
            ))),
        }
    }

    /// Project a page onto a candidate record.
    ///
    /// Each field reads the first mapped property that carries a value.
    pub fn to_candidate(page: &NotionPage, schema: &CatalogSchema) -> CandidateRecord {
        let properties = move |field: CatalogField| {
            schema
                .property_names(field)
                .iter()
                .filter_map(move |name| page.properties.get(name))
        };

        let display_name = properties(CatalogField::Name)
            .find_map(Self::text_of)
            .unwrap_or_else(|| UNNAMED_PRODUCT.to_string());

        CandidateRecord {
            display_name,
            code: properties(CatalogField::Code).find_map(Self::text_of),
            price: properties(CatalogField::Price).find_map(|p| p.number),
            image_url: properties(CatalogField::Image).find_map(Self::first_file_url),
        }
    }

    pub fn to_candidates(pages: &[NotionPage], schema: &CatalogSchema) -> Vec<CandidateRecord> {
        pages.iter().map(|page| Self::to_candidate(page, schema)).collect()
    }

    /// Concatenated plain text of a title or rich-text property, if non-empty
    fn text_of(property: &NotionProperty) -> Option<String> {
        let fragments = property.title.as_ref().or(property.rich_text.as_ref())?;
        let text: String = fragments.iter().map(|t| t.plain_text.as_str()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Hosted file URL first, external link second
    fn first_file_url(property: &NotionProperty) -> Option<String> {
        let first = property.files.as_ref()?.first()?;
        first
            .file
            .as_ref()
            .or(first.external.as_ref())
            .map(|f| f.url.clone())
    }
}
