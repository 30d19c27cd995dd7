use serde::{Deserialize, Serialize};

/// Filename shape for a [`crate::PathGenerator`]: `<prefix><token><postfix>`
/// with the token zero-padded to `token_width` digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub prefix: String,
    pub postfix: String,
    pub token_width: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { prefix: String::new(), postfix: String::new(), token_width: 3 }
    }
}
