use reqwest::Url;

/// The address the keep-alive probe sends its request to.
#[derive(Clone, Debug)]
pub struct TargetUrl(Url);

impl TargetUrl {
    /// Construct a valid [`TargetUrl`] from a String.
    pub fn parse(value: String) -> Result<TargetUrl, String> {
        let url = Url::parse(value.trim())
            .map_err(|e| format!("{} is not a valid target url: {}", value, e))?;

        // Only plain web origins can be kept awake
        let is_web_scheme = matches!(url.scheme(), "http" | "https");
        let has_host = url.host_str().map_or(false, |h| !h.is_empty());

        if is_web_scheme && has_host {
            Ok(Self(url))
        } else {
            Err(format!("{} is not a valid target url", value))
        }
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for TargetUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
