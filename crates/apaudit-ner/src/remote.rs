use apaudit_domain::{Entity, EntityRecognizer, RecognizerError};
use serde::{Deserialize, Serialize};

/// The NER model used when none is configured: a BERT fine-tune with solid
/// person-name performance.
pub const DEFAULT_MODEL: &str = "dslim/bert-base-NER";

const INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    aggregation_strategy: &'static str,
}

/// One aggregated entity as the inference endpoint reports it. Extra fields
/// (`start`, `end`, ...) are ignored.
#[derive(Deserialize)]
struct WireEntity {
    entity_group: String,
    score: f64,
    word: String,
}

/// Client for a hosted token-classification endpoint.
///
/// Construction builds the HTTP client and is the expensive step; callers
/// construct one per process and reuse it for every `recognize` call. The
/// scanner itself never caches, so this is the memoization boundary.
pub struct RemoteRecognizer {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl RemoteRecognizer {
    pub fn new(model: &str, api_token: Option<String>) -> Result<Self, RecognizerError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|err| RecognizerError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{INFERENCE_BASE}/{model}"),
            api_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EntityRecognizer for RemoteRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError> {
        let request = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                aggregation_strategy: "simple",
            },
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .map_err(|err| RecognizerError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| RecognizerError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(RecognizerError::Transport(format!(
                "inference endpoint returned {status}: {body}"
            )));
        }

        decode_entities(&body)
    }
}

fn decode_entities(body: &str) -> Result<Vec<Entity>, RecognizerError> {
    let wire: Vec<WireEntity> =
        serde_json::from_str(body).map_err(|err| RecognizerError::Malformed(err.to_string()))?;

    Ok(wire
        .into_iter()
        .map(|e| Entity {
            entity_group: e.entity_group,
            score: e.score,
            word: e.word,
        })
        .collect())
}
