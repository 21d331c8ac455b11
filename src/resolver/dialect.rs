use serde_json::Value;

/// Spec document dialect, discriminated by its version marker.
///
/// The two dialects differ in where a response keeps its schema and in the
/// name of the shared-definitions table:
///
/// | Dialect       | marker    | response schema location                              | shared table  |
/// |---------------|-----------|-------------------------------------------------------|---------------|
/// | Swagger 2.0   | `swagger` | `responses.<status>.schema`                           | `definitions` |
/// | OpenAPI 3.0.1 | `openapi` | `responses.<status>.content.application/json.schema`  | `components`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecDialect {
    Swagger2,
    OpenApi3,
}

impl SpecDialect {
    /// Detect the dialect from the document's version marker, if any.
    pub fn detect(document: &Value) -> Option<Self> {
        let object = document.as_object()?;
        if object.contains_key("swagger") {
            Some(SpecDialect::Swagger2)
        } else if object.contains_key("openapi") {
            Some(SpecDialect::OpenApi3)
        } else {
            None
        }
    }

    /// Key of the shared-definitions table in this dialect.
    pub fn shared_table_key(self) -> &'static str {
        match self {
            SpecDialect::Swagger2 => "definitions",
            SpecDialect::OpenApi3 => "components",
        }
    }

    /// Extract the schema fragment from a resolved response definition.
    pub fn response_schema(self, response: &Value) -> Option<&Value> {
        match self {
            SpecDialect::Swagger2 => response.get("schema"),
            SpecDialect::OpenApi3 => response
                .get("content")?
                .get("application/json")?
                .get("schema"),
        }
    }

    /// Dotted display form of the in-response schema location, for error
    /// messages.
    pub fn schema_location(self) -> &'static str {
        match self {
            SpecDialect::Swagger2 => "schema",
            SpecDialect::OpenApi3 => "content.application/json.schema",
        }
    }
}

impl std::fmt::Display for SpecDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecDialect::Swagger2 => write!(f, "Swagger 2.0"),
            SpecDialect::OpenApi3 => write!(f, "OpenAPI 3.x"),
        }
    }
}

/// A spec document together with its detected dialect. Invariant: only
/// constructed through classification, so the version marker is known to
/// be present.
#[derive(Debug, Clone, Copy)]
pub struct SpecDocument<'a> {
    pub dialect: SpecDialect,
    document: &'a Value,
}

impl<'a> SpecDocument<'a> {
    pub fn document(&self) -> &'a Value {
        self.document
    }

    /// The document's shared-definitions table, if present.
    pub fn shared_table(&self) -> Option<&'a Value> {
        self.document.get(self.dialect.shared_table_key())
    }
}

/// Classified schema argument: either a plain JSON Schema to use as-is, or
/// a full spec document that needs response-schema resolution.
#[derive(Debug, Clone, Copy)]
pub enum SchemaSource<'a> {
    Plain(&'a Value),
    Document(SpecDocument<'a>),
}

impl<'a> SchemaSource<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match SpecDialect::detect(value) {
            Some(dialect) => SchemaSource::Document(SpecDocument {
                dialect,
                document: value,
            }),
            None => SchemaSource::Plain(value),
        }
    }
}
