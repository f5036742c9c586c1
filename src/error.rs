//! Error types surfaced by the dashboard widgets.
//!
//! Errors end up stored in reactive signals, so they are `Clone` and carry
//! rendered messages rather than the underlying source errors.

use thiserror::Error;

/// Failure to obtain or decode the world geography used by the lead map.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeoError {
	#[error("request failed: {0}")]
	Request(String),
	#[error("server responded with status {0}")]
	Status(u16),
	#[error("malformed topology: {0}")]
	Decode(String),
	#[error("topology has no object named `{0}`")]
	MissingObject(String),
	#[error("arc index {0} is out of range")]
	ArcOutOfRange(i64),
	#[error("no geography data loaded")]
	Empty,
}

impl From<serde_json::Error> for GeoError {
	fn from(err: serde_json::Error) -> Self {
		Self::Decode(err.to_string())
	}
}

impl From<gloo_net::Error> for GeoError {
	fn from(err: gloo_net::Error) -> Self {
		Self::Request(err.to_string())
	}
}

/// Integrity problems in a static map dataset.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
	#[error("connection {from} -> {to} references unknown location `{missing}`")]
	UnknownEndpoint {
		from: String,
		to: String,
		missing: String,
	},
	#[error("location id `{0}` is defined more than once")]
	DuplicateId(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn geo_error_messages_are_user_readable() {
		assert_eq!(GeoError::Status(404).to_string(), "server responded with status 404");
		assert_eq!(GeoError::Empty.to_string(), "no geography data loaded");
		assert_eq!(
			GeoError::MissingObject("countries".into()).to_string(),
			"topology has no object named `countries`"
		);
	}

	#[test]
	fn json_errors_become_decode_errors() {
		let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		assert!(matches!(GeoError::from(err), GeoError::Decode(_)));
	}

	#[test]
	fn unknown_endpoint_names_the_missing_id() {
		let err = DatasetError::UnknownEndpoint {
			from: "nyc".into(),
			to: "paris".into(),
			missing: "paris".into(),
		};
		assert_eq!(
			err.to_string(),
			"connection nyc -> paris references unknown location `paris`"
		);
	}
}
