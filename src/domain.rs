mod target_url;

pub use target_url::TargetUrl;
