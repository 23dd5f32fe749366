//! Response extraction and cleanup.
//!
//! The inference endpoint answers a successful transport call with one of two
//! JSON shapes: an array whose first element carries the generated text, or
//! an object carrying an `error` field. Everything else is treated as
//! malformed and surfaced whole for diagnosis. The generated text itself
//! often needs cleanup, because completion models prompted with a transcript
//! like to echo the speaker cues or keep writing a fabricated next user turn.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::prompt::{ASSISTANT_PREFIX, USER_PREFIX};

/// Message used when the error payload has no usable message.
const UNKNOWN_API_ERROR: &str = "Unknown API Error";

/// Field holding the generated text in a successful payload.
const GENERATED_TEXT_FIELD: &str = "generated_text";

/// Turns a decoded response payload into a cleaned reply.
///
/// Decision rules, in order:
/// 1. An array whose first element has a string `generated_text` field is a
///    successful generation; the text is cleaned and returned.
/// 2. An object with an `error` field is a service-reported failure and
///    becomes [`Error::Api`]. An absent, empty, or non-string message falls
///    back to a fixed placeholder.
/// 3. Any other shape becomes [`Error::Malformed`] with the payload
///    stringified.
pub fn extract(payload: &Value) -> Result<String> {
    if let Value::Array(items) = payload
        && let Some(Value::Object(first)) = items.first()
        && let Some(Value::String(text)) = first.get(GENERATED_TEXT_FIELD)
    {
        return Ok(clean_reply(text));
    }
    if let Value::Object(map) = payload
        && map.contains_key("error")
    {
        let message = match map.get("error").and_then(Value::as_str) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => UNKNOWN_API_ERROR.to_string(),
        };
        return Err(Error::api(message));
    }
    Err(Error::malformed(payload.to_string()))
}

/// Recovers just the assistant's utterance from a raw generated candidate.
///
/// If the model hallucinated a continuation of the conversation (text
/// starting with `User:`), keep only what follows the first `AI:` marker.
/// If it merely echoed its own cue (text starting with `AI:`), strip every
/// occurrence of the marker. Either way the result is trimmed.
pub fn clean_reply(raw: &str) -> String {
    let text = raw.trim();
    if text.starts_with(USER_PREFIX) {
        match text.split_once(ASSISTANT_PREFIX) {
            Some((_, rest)) => rest.trim().to_string(),
            None => text.to_string(),
        }
    } else if text.starts_with(ASSISTANT_PREFIX) {
        text.replace(ASSISTANT_PREFIX, "").trim().to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_generation() {
        let payload = json!([{"generated_text": "  The sky is blue.  "}]);
        assert_eq!(extract(&payload).unwrap(), "The sky is blue.");
    }

    #[test]
    fn hallucinated_user_turn_is_discarded() {
        let payload = json!([{"generated_text": "User: foo\nAI: bar"}]);
        assert_eq!(extract(&payload).unwrap(), "bar");
    }

    #[test]
    fn echoed_assistant_cue_is_stripped() {
        let payload = json!([{"generated_text": "AI: hello"}]);
        assert_eq!(extract(&payload).unwrap(), "hello");
    }

    #[test]
    fn hallucinated_user_turn_without_cue_kept_whole() {
        // With no AI: marker to split on, the whole trimmed text survives.
        assert_eq!(clean_reply("User: just rambling"), "User: just rambling");
    }

    #[test]
    fn repeated_cues_all_removed() {
        assert_eq!(clean_reply("AI: one AI: two"), "one  two");
    }

    #[test]
    fn error_payload() {
        let payload = json!({"error": "model loading"});
        let err = extract(&payload).unwrap_err();
        assert!(err.is_api());
        assert_eq!(err.to_string(), "API Error: model loading");
    }

    #[test]
    fn empty_error_message_falls_back() {
        let payload = json!({"error": ""});
        let err = extract(&payload).unwrap_err();
        assert_eq!(err.to_string(), "API Error: Unknown API Error");
    }

    #[test]
    fn non_string_error_message_falls_back() {
        let payload = json!({"error": 503});
        let err = extract(&payload).unwrap_err();
        assert_eq!(err.to_string(), "API Error: Unknown API Error");
    }

    #[test]
    fn unrecognized_object_is_malformed() {
        let payload = json!({"foo": 1});
        let err = extract(&payload).unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.to_string(), "Unexpected API response format: {\"foo\":1}");
    }

    #[test]
    fn empty_array_is_malformed() {
        let err = extract(&json!([])).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn array_without_generated_text_is_malformed() {
        let err = extract(&json!([{"other": "field"}])).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn scalar_payload_is_malformed() {
        let err = extract(&json!(42)).unwrap_err();
        assert!(err.is_malformed());
    }
}
