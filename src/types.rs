//! Core types for pathparams

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::Error;

/// Model architectures accepted by `/models/{model_name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    pub const ALL: [ModelName; 3] = [ModelName::Alexnet, ModelName::Resnet, ModelName::Lenet];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "alexnet",
            ModelName::Resnet => "resnet",
            ModelName::Lenet => "lenet",
        }
    }

    /// Message returned alongside the model name
    pub fn message(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCNN all the images",
            _ => "Have some residuals",
        }
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelName::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::Other(format!("Unknown model name: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ModelName::Alexnet.message(), "Deep Learning FTW!");
        assert_eq!(ModelName::Lenet.message(), "LeCNN all the images");
        assert_eq!(ModelName::Resnet.message(), "Have some residuals");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("resnet".parse::<ModelName>().unwrap(), ModelName::Resnet);
        assert!("ResNet".parse::<ModelName>().is_err());
        assert!(matches!("vgg".parse::<ModelName>(), Err(Error::Other(_))));
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ModelName::Lenet).unwrap();
        assert_eq!(json, "\"lenet\"");

        let parsed: ModelName = serde_json::from_str("\"alexnet\"").unwrap();
        assert_eq!(parsed, ModelName::Alexnet);

        assert!(serde_json::from_str::<ModelName>("\"unknown\"").is_err());
    }
}
