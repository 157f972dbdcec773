use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Network(#[from] reqwest::Error),
	#[error("{endpoint} answered with HTTP {status}")]
	Status { endpoint: String, status: u16 },
	#[error("malformed JSON response: {0}")]
	Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_error_names_endpoint() {
		let err = ApiError::Status {
			endpoint: "graphs/centrality".into(),
			status: 503,
		};
		assert_eq!(err.to_string(), "graphs/centrality answered with HTTP 503");
	}

	#[test]
	fn decode_error_is_wrapped() {
		let err: ApiError = serde_json::from_str::<u32>("{").unwrap_err().into();
		assert!(matches!(err, ApiError::Decode(_)));
		assert!(err.to_string().starts_with("malformed JSON response"));
	}
}
