use crate::config::UpstreamConfig;
use crate::error::{PixgenError, Result};
use crate::models::GenerateRequest;

pub const DEFAULT_BASE_URL: &str = "https://image.pollinations.ai";
pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 1024;

/// Builds GET-able Pollinations image URLs. Pure string templating; the
/// upstream service is only ever contacted by the browser.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    width: u32,
    height: u32,
    nologo: bool,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        UrlBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            nologo: true,
        }
    }
}

impl UrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        UrlBuilder {
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            width: config.width.unwrap_or(DEFAULT_WIDTH),
            height: config.height.unwrap_or(DEFAULT_HEIGHT),
            nologo: config.nologo.unwrap_or(true),
        }
    }

    /// Percent-encodes the prompt into the upstream URL template. The seed
    /// is supplied by the caller (current time in milliseconds in the
    /// request path) so repeated prompts defeat upstream caching.
    pub fn image_url(&self, request: &GenerateRequest, seed: i64) -> Result<String> {
        if request.prompt.is_empty() {
            return Err(PixgenError::InvalidPrompt("Prompt is required".to_string()));
        }

        Ok(format!(
            "{}/prompt/{}?width={}&height={}&nologo={}&seed={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&request.prompt),
            self.width,
            self.height,
            self.nologo,
            seed
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            prompt: prompt.to_string(),
        }
    }

    #[test]
    fn builds_url_with_encoded_prompt() {
        let url = UrlBuilder::new()
            .image_url(&request("a red fox in snow"), 1700000000000)
            .unwrap();

        assert_eq!(
            url,
            "https://image.pollinations.ai/prompt/a%20red%20fox%20in%20snow?width=1024&height=1024&nologo=true&seed=1700000000000"
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        let url = UrlBuilder::new()
            .image_url(&request("cats & dogs / 50%"), 1)
            .unwrap();

        assert!(url.contains("/prompt/cats%20%26%20dogs%20%2F%2050%25?"));
    }

    #[test]
    fn distinct_seeds_produce_distinct_urls() {
        let builder = UrlBuilder::new();
        let first = builder.image_url(&request("same prompt"), 1).unwrap();
        let second = builder.image_url(&request("same prompt"), 2).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let err = UrlBuilder::new().image_url(&request(""), 1).unwrap_err();

        match err {
            PixgenError::InvalidPrompt(msg) => assert_eq!(msg, "Prompt is required"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn config_overrides_apply() {
        let config = crate::config::UpstreamConfig::new()
            .with_base_url("https://mirror.example/")
            .with_dimensions(512, 512)
            .with_nologo(false);

        let url = UrlBuilder::from_config(&config)
            .image_url(&request("hello"), 7)
            .unwrap();

        assert_eq!(
            url,
            "https://mirror.example/prompt/hello?width=512&height=512&nologo=false&seed=7"
        );
    }

    #[test]
    fn whitespace_prompt_passes_the_endpoint_guard() {
        // Trimming is the UI's job; the builder only rejects the empty string.
        let url = UrlBuilder::new().image_url(&request("   "), 1).unwrap();
        assert!(url.contains("/prompt/%20%20%20?"));
    }
}
