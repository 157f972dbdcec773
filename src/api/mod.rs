//! HTTP access to the MarmiTonic backend.
//!
//! Every listing call swallows failures: the error is logged and an empty
//! value comes back, so a broken backend renders as "no data". The optimizer
//! is the one call that hands the error to its caller.

mod error;
mod types;

use log::{debug, error};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use error::ApiError;
use types::SparqlRequest;
pub use types::{Cocktail, GraphKind, Ingredient, IngredientText, OptimizerResult};

use crate::config::ApiConfig;

#[derive(Clone, Debug)]
pub struct ApiClient {
	config: ApiConfig,
	http: Client,
}

impl ApiClient {
	pub fn new(config: ApiConfig) -> Self {
		Self {
			config,
			http: Client::new(),
		}
	}

	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	fn request(&self, method: Method, path: &str) -> RequestBuilder {
		let url = self.config.url(path);
		debug!("{} {}", method, url);
		self.http.request(method, url)
	}

	async fn send_json<T: DeserializeOwned>(
		&self,
		path: &str,
		request: RequestBuilder,
	) -> Result<T, ApiError> {
		let response = request.send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status {
				endpoint: path.to_string(),
				status: status.as_u16(),
			});
		}
		let body = response.text().await?;
		Ok(serde_json::from_str(&body)?)
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
		self.send_json(path, self.request(Method::GET, path)).await
	}

	/// `GET /cocktails`
	pub async fn cocktails(&self) -> Vec<Cocktail> {
		self.get_json("cocktails").await.unwrap_or_else(|err| {
			error!("Error fetching cocktails: {err}");
			Vec::new()
		})
	}

	/// `GET /cocktails?q=...`
	pub async fn search_cocktails(&self, query: &str) -> Vec<Cocktail> {
		let request = self
			.request(Method::GET, "cocktails")
			.query(&[("q", query)]);
		self.send_json("cocktails", request)
			.await
			.unwrap_or_else(|err| {
				error!("Error searching cocktails for {query:?}: {err}");
				Vec::new()
			})
	}

	/// `GET /cocktails/random`
	pub async fn random_cocktail(&self) -> Option<Cocktail> {
		self.get_json("cocktails/random")
			.await
			.map_err(|err| error!("Error fetching random cocktail: {err}"))
			.ok()
	}

	/// `GET /ingredients`
	pub async fn ingredients(&self) -> Vec<Ingredient> {
		self.get_json("ingredients").await.unwrap_or_else(|err| {
			error!("Error fetching ingredients: {err}");
			Vec::new()
		})
	}

	/// `POST /sparql` with the query forwarded verbatim. Returns
	/// [`Value::Null`] on failure.
	pub async fn execute_sparql(&self, query: &str) -> Value {
		let request = self
			.request(Method::POST, "sparql")
			.json(&SparqlRequest { query });
		self.send_json("sparql", request)
			.await
			.unwrap_or_else(|err| {
				error!("Error executing SPARQL query: {err}");
				Value::Null
			})
	}

	/// `GET /graphs/{kind}`
	pub async fn graph(&self, kind: GraphKind) -> Option<Value> {
		self.get_json(&kind.path())
			.await
			.map_err(|err| error!("Error fetching {}: {err}", kind.title()))
			.ok()
	}

	/// `GET /ingredients/optimize?N=...`
	pub async fn optimize(&self, n: u32) -> Result<OptimizerResult, ApiError> {
		let path = "ingredients/optimize";
		let request = self.request(Method::GET, path).query(&[("N", n)]);
		self.send_json(path, request).await.inspect_err(|err| {
			error!("Error optimizing ingredients for N={n}: {err}");
		})
	}
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::new(ApiConfig::from_env())
	}
}
