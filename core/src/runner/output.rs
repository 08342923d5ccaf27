use encoding_rs::UTF_8;

use crate::error::ExecutionError;

/// Strict UTF-8 decode of captured process output. Malformed bytes are an
/// error rather than being replaced.
pub fn decode_stream(
    operation: &str,
    stream: &'static str,
    bytes: &[u8],
) -> Result<String, ExecutionError> {
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| ExecutionError::Decode {
            operation: operation.to_string(),
            stream,
        })
}
