/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog records with sensible defaults
use prateleira_lib::modules::lookup::domain::CandidateRecord;

pub struct CandidateFactory {
    name: String,
    code: Option<String>,
    price: Option<f64>,
    image_url: Option<String>,
}

impl Default for CandidateFactory {
    fn default() -> Self {
        Self {
            name: "Produto Teste".to_string(),
            code: None,
            price: Some(9.99),
            image_url: None,
        }
    }
}

impl CandidateFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn without_price(mut self) -> Self {
        self.price = None;
        self
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.image_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> CandidateRecord {
        CandidateRecord {
            display_name: self.name,
            code: self.code,
            price: self.price,
            image_url: self.image_url,
        }
    }

    /// Create multiple records named `"<prefix> <n>"`
    pub fn build_batch(count: usize, prefix: &str) -> Vec<CandidateRecord> {
        (1..=count)
            .map(|i| Self::new().with_name(&format!("{} {}", prefix, i)).build())
            .collect()
    }
}

/// A small grocery catalog used across the endpoint tests
pub fn grocery_catalog() -> Vec<CandidateRecord> {
    vec![
        CandidateFactory::new()
            .with_name("Produto X")
            .with_code("0222490000")
            .with_price(12.5)
            .with_image("https://files/produto-x.png")
            .build(),
        CandidateFactory::new()
            .with_name("Arroz Tipo 1 5kg")
            .with_code("7891000100103")
            .build(),
        CandidateFactory::new()
            .with_name("Arroz Integral 1kg")
            .with_code("7891000100110")
            .build(),
        CandidateFactory::new()
            .with_name("Sabonete Todo Dia")
            .with_code("7891000200200")
            .without_price()
            .build(),
        CandidateFactory::new()
            .with_name("Biscoitos Recheados")
            .with_code("7891000300300")
            .build(),
    ]
}
