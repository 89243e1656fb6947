//! Parameter metadata derived from struct fields

use serde_json::{json, Value};

/// JSON type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamType {
    /// JSON Schema type name
    pub const fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// Metadata about one parameter of an operation
#[derive(Debug, Clone)]
pub struct ParamMeta {
    /// Field name
    pub name: &'static str,
    /// Description (from doc comment)
    pub description: &'static str,
    pub param_type: ParamType,
    /// Whether required (non-Option, non-defaulted field)
    pub required: bool,
    /// Alternative input keys accepted by the forgiving parser
    pub aliases: &'static [&'static str],
}

impl ParamMeta {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            description: "",
            param_type: ParamType::String,
            required: false,
            aliases: &[],
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn description(mut self, desc: &'static str) -> Self {
        self.description = desc;
        self
    }

    pub const fn aliases(mut self, a: &'static [&'static str]) -> Self {
        self.aliases = a;
        self
    }

    pub const fn param_type(mut self, t: ParamType) -> Self {
        self.param_type = t;
        self
    }

    /// Whether `key` names this parameter, directly or through an alias
    pub fn matches(&self, key: &str) -> bool {
        self.name == key || self.aliases.contains(&key)
    }

    /// JSON Schema fragment for this parameter
    pub fn to_schema(&self) -> Value {
        let mut schema = json!({
            "type": self.param_type.json_type(),
            "description": self.description,
        });
        if !self.aliases.is_empty() {
            schema["x-aliases"] = json!(self.aliases);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: ParamMeta = ParamMeta::new("target_index")
        .description("Insert position")
        .param_type(ParamType::Integer)
        .aliases(&["index", "to_index"]);

    #[test]
    fn test_matches_name_and_aliases() {
        assert!(TARGET.matches("target_index"));
        assert!(TARGET.matches("index"));
        assert!(!TARGET.matches("card_id"));
        assert!(!TARGET.required);
    }

    #[test]
    fn test_schema_fragment() {
        let schema = TARGET.to_schema();
        assert_eq!(schema["type"], "integer");
        assert_eq!(schema["x-aliases"], json!(["index", "to_index"]));
    }
}
