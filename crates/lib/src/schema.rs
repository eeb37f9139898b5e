//! # Response Schemas
//!
//! Declarative descriptions of the JSON shape each generator asks the service
//! to return. The schema only steers the model; responses are never checked
//! against it.

use crate::types::ContentType;
use serde_json::{json, Map, Value};

/// The primitive shapes a schema field can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    StringArray,
    ObjectArray(Vec<SchemaField>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub field_type: FieldType,
}

impl SchemaField {
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
        }
    }
}

/// An ordered set of named, typed fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseSchema {
    pub fields: Vec<SchemaField>,
}

impl ResponseSchema {
    pub fn new(fields: Vec<SchemaField>) -> Self {
        Self { fields }
    }

    /// The expected output shape for a content type.
    pub fn for_content_type(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Blog => Self::new(vec![
                SchemaField::new("title", FieldType::String),
                SchemaField::new("content", FieldType::String),
                SchemaField::new("reading_time", FieldType::String),
                SchemaField::new("word_count", FieldType::Number),
            ]),
            ContentType::InstagramCaption => Self::new(vec![SchemaField::new(
                "captions",
                FieldType::ObjectArray(vec![
                    SchemaField::new("text", FieldType::String),
                    SchemaField::new("hashtags", FieldType::String),
                    SchemaField::new("tone", FieldType::String),
                ]),
            )]),
            ContentType::YouTubeMetadata => Self::new(vec![
                SchemaField::new("titles", FieldType::StringArray),
                SchemaField::new("description", FieldType::String),
                SchemaField::new("tags", FieldType::StringArray),
            ]),
        }
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Renders the schema as a JSON Schema object, keeping field order.
    pub fn to_json_schema(&self) -> Value {
        object_schema(&self.fields)
    }
}

fn object_schema(fields: &[SchemaField]) -> Value {
    let properties: Map<String, Value> = fields
        .iter()
        .map(|f| (f.name.clone(), field_schema(&f.field_type)))
        .collect();
    json!({
        "type": "object",
        "properties": properties,
    })
}

fn field_schema(field_type: &FieldType) -> Value {
    match field_type {
        FieldType::String => json!({ "type": "string" }),
        FieldType::Number => json!({ "type": "number" }),
        FieldType::StringArray => json!({
            "type": "array",
            "items": { "type": "string" },
        }),
        FieldType::ObjectArray(fields) => json!({
            "type": "array",
            "items": object_schema(fields),
        }),
    }
}
