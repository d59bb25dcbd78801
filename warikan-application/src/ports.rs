/// Reversible string codec used to shrink serialized weight data.
pub trait TokenCompressor: Send + Sync {
    fn compress(&self, text: &str) -> String;

    /// `None` when `token` was not produced by [`TokenCompressor::compress`].
    fn decompress(&self, token: &str) -> Option<String>;
}
