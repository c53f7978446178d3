//! Model value object representing an LLM model identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Model identifiers understood by the model server (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama3,
    Mistral,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama3 => "llama3",
            Model::Mistral => "mistral",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (llama3)
    fn default() -> Self {
        Model::Llama3
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama3" => Model::Llama3,
            "mistral" => Model::Mistral,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default_is_llama3() {
        let model = Model::default();
        assert_eq!(model, Model::Llama3);
        assert_eq!(model.as_str(), "llama3");
    }

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::Llama3, Model::Mistral] {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "llama3:70b".parse().unwrap();
        assert_eq!(model, Model::Custom("llama3:70b".to_string()));
        assert_eq!(model.to_string(), "llama3:70b");
    }
}
