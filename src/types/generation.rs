use serde::{Deserialize, Serialize};

/// Default cap on generated tokens per completion.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 150;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Generation parameters sent with every completion request.
///
/// These are fixed configuration constants of the client, not caller-tunable
/// per request. `return_full_text` stays false so the API returns only the
/// generated continuation, not the prompt echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationParameters {
    /// Maximum number of tokens to generate.
    pub max_new_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,

    /// Whether to sample from the output distribution.
    pub do_sample: bool,

    /// Whether to return the prompt together with the generated text.
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            do_sample: true,
            return_full_text: false,
        }
    }
}

/// The JSON body of one completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    /// The fully assembled prompt, history included.
    pub inputs: String,

    /// Generation parameters.
    pub parameters: GenerationParameters,
}

impl GenerationRequest {
    /// Creates a request for the given prompt with default parameters.
    pub fn new<S: Into<String>>(inputs: S) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: GenerationParameters::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_fixed_parameters() {
        let request = GenerationRequest::new("User: Hi\nAI:");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"], "User: Hi\nAI:");
        assert_eq!(json["parameters"]["max_new_tokens"], 150);
        assert_eq!(json["parameters"]["do_sample"], true);
        assert_eq!(json["parameters"]["return_full_text"], false);
        let temperature = json["parameters"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }
}
