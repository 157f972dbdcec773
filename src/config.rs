//! Backend location.

/// Base URL used when no override was baked in at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the backend API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	pub base_url: String,
}

impl ApiConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url = base_url.into();
		let trimmed = base_url.trim().trim_end_matches('/');
		Self {
			base_url: if trimmed.is_empty() {
				DEFAULT_API_URL.to_string()
			} else {
				trimmed.to_string()
			},
		}
	}

	/// Reads `MARMITONIC_API_URL` at compile time. The wasm bundle has no
	/// process environment at runtime.
	pub fn from_env() -> Self {
		Self::new(option_env!("MARMITONIC_API_URL").unwrap_or(DEFAULT_API_URL))
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::new(DEFAULT_API_URL)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trailing_slashes_are_trimmed() {
		let config = ApiConfig::new("http://api.example.org:9000///");
		assert_eq!(config.base_url, "http://api.example.org:9000");
		assert_eq!(config.url("/cocktails"), "http://api.example.org:9000/cocktails");
	}

	#[test]
	fn blank_url_falls_back_to_default() {
		assert_eq!(ApiConfig::new("   ").base_url, DEFAULT_API_URL);
		assert_eq!(ApiConfig::default().url("graphs/basic"), "http://localhost:8000/graphs/basic");
	}
}
