//! Declarative input schemas: a fixed field table consulted by one generic
//! validator before any handler runs. Presence and primitive type only.

use serde_json::{json, Value as JsonValue};

use crate::core::entry::Payload;
use crate::core::error::DispatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    String,
}

impl FieldType {
    pub fn type_name(self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::String => "string",
        }
    }

    fn matches(self, value: &JsonValue) -> bool {
        match self {
            FieldType::Number => value.is_number(),
            FieldType::String => value.is_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    pub description: &'static str,
}

/// Ordered field table for one entry. All declared fields are required.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, ty: FieldType, description: &'static str) -> Self {
        self.fields.push(Field {
            name,
            ty,
            description,
        });
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Check every declared field for presence and primitive type, collecting
    /// all offenders into a single `InvalidArgument`. Extra payload fields
    /// are tolerated.
    pub fn validate(&self, payload: &Payload) -> Result<(), DispatchError> {
        let mut offenders = Vec::new();
        for f in &self.fields {
            match payload.get(f.name) {
                None => offenders.push(format!("{}: missing", f.name)),
                Some(v) if !f.ty.matches(v) => {
                    offenders.push(format!("{}: expected {}", f.name, f.ty.type_name()))
                }
                Some(_) => {}
            }
        }
        if offenders.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::InvalidArgument(offenders.join(", ")))
        }
    }

    /// Render as a JSON Schema object for protocol listings.
    pub fn to_json(&self) -> JsonValue {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for f in &self.fields {
            properties.insert(
                f.name.to_string(),
                json!({ "type": f.ty.type_name(), "description": f.description }),
            );
            required.push(JsonValue::from(f.name));
        }
        json!({ "type": "object", "properties": properties, "required": required })
    }
}
