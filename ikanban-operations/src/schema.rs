//! JSON description of a set of operations
//!
//! The generated document lists every op string, a per-operation parameter
//! schema, groups by noun, and the aliases the forgiving parser accepts.

use crate::Operation;
use serde_json::{json, Map, Value};

/// Caller-supplied parts of the schema document
#[derive(Debug, Clone, Default)]
pub struct SchemaConfig {
    pub description: String,
    pub examples: Vec<Value>,
    pub verb_aliases: Map<String, Value>,
}

impl SchemaConfig {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_examples(mut self, examples: Vec<Value>) -> Self {
        self.examples = examples;
        self
    }

    pub fn with_verb_aliases(mut self, aliases: Map<String, Value>) -> Self {
        self.verb_aliases = aliases;
        self
    }
}

/// Build the schema document for `operations`
pub fn generate_schema(operations: &[&dyn Operation], config: SchemaConfig) -> Value {
    let op_strings: Vec<String> = operations.iter().map(|op| op.op_string()).collect();

    let operation_schemas: Vec<Value> = operations.iter().map(|op| operation_schema(*op)).collect();

    let mut groups: Map<String, Value> = Map::new();
    for op in operations {
        let entry = groups
            .entry(op.noun().to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(list) = entry {
            list.push(Value::String(op.op_string()));
        }
    }

    json!({
        "type": "object",
        "description": config.description,
        "additionalProperties": true,
        "properties": {
            "op": {
                "type": "string",
                "description": "Operation to perform, as \"verb noun\"",
                "enum": op_strings,
            }
        },
        "x-operation-schemas": operation_schemas,
        "x-operation-groups": groups,
        "x-forgiving-input": {
            "verb_aliases": config.verb_aliases,
            "accepted_forms": [
                {"op": "verb noun"},
                {"verb": "verb", "noun": "noun"},
                {"verb": "noun"},
            ],
        },
        "examples": config.examples,
    })
}

fn operation_schema(op: &dyn Operation) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for param in op.parameters() {
        properties.insert(param.name.to_string(), param.to_schema());
        if param.required {
            required.push(Value::String(param.name.to_string()));
        }
    }

    json!({
        "op": op.op_string(),
        "description": op.description(),
        "properties": properties,
        "required": required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParamMeta, ParamType};

    struct ToggleTask;

    impl Operation for ToggleTask {
        fn verb(&self) -> &'static str {
            "toggle"
        }
        fn noun(&self) -> &'static str {
            "task"
        }
        fn description(&self) -> &'static str {
            "Check or uncheck a checklist item"
        }
        fn parameters(&self) -> &'static [ParamMeta] {
            static PARAMS: [ParamMeta; 2] = [
                ParamMeta::new("card_id").required(),
                ParamMeta::new("checked").param_type(ParamType::Boolean),
            ];
            &PARAMS
        }
    }

    #[test]
    fn test_schema_lists_operations() {
        let ops: Vec<&dyn Operation> = vec![&ToggleTask];
        let schema = generate_schema(&ops, SchemaConfig::new("Board operations"));

        assert_eq!(schema["properties"]["op"]["enum"], json!(["toggle task"]));
        assert_eq!(schema["x-operation-groups"]["task"], json!(["toggle task"]));

        let op_schema = &schema["x-operation-schemas"][0];
        assert_eq!(op_schema["required"], json!(["card_id"]));
        assert_eq!(op_schema["properties"]["checked"]["type"], "boolean");
    }

    #[test]
    fn test_schema_has_no_top_level_combinators() {
        let ops: Vec<&dyn Operation> = vec![&ToggleTask];
        let schema = generate_schema(&ops, SchemaConfig::new("x"));
        let obj = schema.as_object().unwrap();
        assert!(!obj.contains_key("oneOf"));
        assert!(!obj.contains_key("anyOf"));
    }
}
