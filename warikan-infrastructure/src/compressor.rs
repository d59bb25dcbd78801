use warikan_application::TokenCompressor;

/// lz-string with the standard base64 alphabet (`compressToBase64` /
/// `decompressFromBase64`).
#[derive(Default)]
pub struct LzStringCompressor;

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

impl TokenCompressor for LzStringCompressor {
    fn compress(&self, text: &str) -> String {
        lz_str::compress_to_base64(text)
    }

    fn decompress(&self, token: &str) -> Option<String> {
        if !token.chars().all(is_base64_char) {
            tracing::debug!(token_len = token.len(), "Token contains non-base64 characters");
            return None;
        }

        let units = lz_str::decompress_from_base64(token)?;
        String::from_utf16(&units).ok()
    }
}
