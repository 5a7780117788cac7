//! Logical schema types. Pure data.
//!
//! Operators derive their output schema from their input schema during the
//! planning pass, before any values are touched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Int64,
    Float64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn field(&self, idx: usize) -> Option<&Field> {
        self.fields.get(idx)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field_named(&self, name: &str) -> Option<&Field> {
        self.index_of(name).and_then(|idx| self.field(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_of_finds_fields_by_name() {
        let schema = Schema::new(vec![
            Field::new("value", DataType::Int64, false),
            Field::new("sqrt", DataType::Float64, false),
        ]);
        assert_eq!(schema.index_of("sqrt"), Some(1));
        assert_eq!(schema.index_of("missing"), None);
        assert_eq!(
            schema.field_named("value").map(|f| f.data_type),
            Some(DataType::Int64)
        );
    }

    #[test]
    fn data_types_serialize_by_name() {
        assert_eq!(serde_json::to_string(&DataType::Int64).unwrap(), "\"Int64\"");
        assert_eq!(serde_json::to_string(&DataType::Float64).unwrap(), "\"Float64\"");
    }
}
