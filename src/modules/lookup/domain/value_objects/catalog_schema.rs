use serde::{Deserialize, Serialize};

/// Logical fields of a catalog record, independent of how a given catalog
/// version names its properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogField {
    Name,
    Code,
    Price,
    Image,
}

impl CatalogField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogField::Name => "name",
            CatalogField::Code => "code",
            CatalogField::Price => "price",
            CatalogField::Image => "image",
        }
    }
}

/// Logical field → store property name table.
///
/// Each field maps to an ordered list of property names. When projecting a
/// record the first property that carries a value wins; filters always target
/// the first name in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSchema {
    pub name: Vec<String>,
    pub code: Vec<String>,
    pub price: Vec<String>,
    pub image: Vec<String>,
}

impl Default for CatalogSchema {
    fn default() -> Self {
        Self {
            name: vec!["NOME".to_string()],
            code: vec!["GTIN".to_string()],
            price: vec!["PREÇO".to_string(), "PRECO".to_string()],
            image: vec!["IMAGEM".to_string()],
        }
    }
}

impl CatalogSchema {
    pub fn property_names(&self, field: CatalogField) -> &[String] {
        match field {
            CatalogField::Name => &self.name,
            CatalogField::Code => &self.code,
            CatalogField::Price => &self.price,
            CatalogField::Image => &self.image,
        }
    }

    /// Store property a filter on `field` is issued against
    pub fn filter_property(&self, field: CatalogField) -> Option<&str> {
        self.property_names(field).first().map(String::as_str)
    }

    pub fn with_field(mut self, field: CatalogField, names: Vec<String>) -> Self {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        match field {
            CatalogField::Name => self.name = names,
            CatalogField::Code => self.code = names,
            CatalogField::Price => self.price = names,
            CatalogField::Image => self.image = names,
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        for field in [
            CatalogField::Name,
            CatalogField::Code,
            CatalogField::Price,
            CatalogField::Image,
        ] {
            if self.property_names(field).is_empty() {
                return Err(format!(
                    "Catalog schema has no property mapped for '{}'",
                    field.as_str()
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_matches_catalog_properties() {
        let schema = CatalogSchema::default();
        assert_eq!(schema.filter_property(CatalogField::Name), Some("NOME"));
        assert_eq!(schema.filter_property(CatalogField::Code), Some("GTIN"));
        assert_eq!(schema.property_names(CatalogField::Price), ["PREÇO", "PRECO"]);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_with_field_drops_blank_names() {
        let schema = CatalogSchema::default().with_field(
            CatalogField::Price,
            vec![" Price ".to_string(), "".to_string(), "Preço".to_string()],
        );
        assert_eq!(schema.price, vec!["Price", "Preço"]);
    }

    #[test]
    fn test_empty_mapping_is_invalid() {
        let schema = CatalogSchema::default().with_field(CatalogField::Image, vec![]);
        let err = schema.validate().unwrap_err();
        assert!(err.contains("image"));
    }
}
