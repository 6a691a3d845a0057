use anyhow::Result;
use serde_json::{Map, Value};

pub const DESIGNATED_FIELD: &str = "testIn";

#[derive(Debug)]
pub struct TestFixture {
    pub test_in: String,
}

impl TestFixture {
    /// Decodes a fixture record. The document must be a JSON object carrying a
    /// string `testIn`; a repeated key keeps its last value.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut record: Map<String, Value> = serde_json::from_str(raw)?;
        match record.remove(DESIGNATED_FIELD) {
            Some(Value::String(test_in)) => Ok(Self { test_in }),
            Some(other) => Err(anyhow::anyhow!(
                "field `{}` is not a string: {}",
                DESIGNATED_FIELD,
                other
            )),
            None => Err(anyhow::anyhow!("missing field `{}`", DESIGNATED_FIELD)),
        }
    }
}
