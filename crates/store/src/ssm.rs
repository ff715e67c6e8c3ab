//! AWS Systems Manager Parameter Store backend

use crate::error::{StoreError, StoreErrorKind, StoreResult};
use crate::ParameterStore;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use aws_sdk_ssm::Client;
use tokio::sync::OnceCell;
use tracing::debug;

/// Overrides for the SDK's default configuration chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsmSettings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

/// Parameter store backed by AWS SSM `GetParameter` with decryption.
///
/// The client is built on the first lookup, so an invocation without any
/// reference never loads credentials or touches the network.
pub struct SsmParameterStore {
    settings: SsmSettings,
    client: OnceCell<Client>,
}

impl SsmParameterStore {
    #[must_use]
    pub fn new(settings: SsmSettings) -> Self {
        Self {
            settings,
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                debug!(
                    region = ?self.settings.region,
                    endpoint = ?self.settings.endpoint_url,
                    "Creating SSM client"
                );

                let mut loader = aws_config::defaults(BehaviorVersion::latest());
                if let Some(ref region) = self.settings.region {
                    loader = loader.region(Region::new(region.clone()));
                }
                if let Some(ref endpoint) = self.settings.endpoint_url {
                    loader = loader.endpoint_url(endpoint.clone());
                }

                Client::new(&loader.load().await)
            })
            .await
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, path: &str) -> StoreResult<String> {
        let response = self
            .client()
            .await
            .get_parameter()
            .name(path)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| classify(path, &e))?;

        response
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_string)
            .ok_or_else(|| {
                StoreError::new(StoreErrorKind::Service, path, "response carried no value")
            })
    }
}

/// Map an SDK failure onto the kinds the fallback policy distinguishes
fn classify<R>(path: &str, error: &SdkError<GetParameterError, R>) -> StoreError
where
    R: std::fmt::Debug,
{
    let kind = match error {
        SdkError::ServiceError(context) => {
            let service_error = context.err();
            if service_error.is_parameter_not_found() {
                StoreErrorKind::NotFound
            } else if service_error.is_invalid_key_id() {
                StoreErrorKind::AccessDenied
            } else {
                kind_from_code(service_error.code())
            }
        }
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) | SdkError::ResponseError(_) => {
            StoreErrorKind::Network
        }
        _ => StoreErrorKind::Service,
    };

    StoreError::new(kind, path, DisplayErrorContext(error).to_string())
}

fn kind_from_code(code: Option<&str>) -> StoreErrorKind {
    match code {
        Some("ParameterNotFound") => StoreErrorKind::NotFound,
        Some("AccessDeniedException" | "UnrecognizedClientException" | "ExpiredTokenException") => {
            StoreErrorKind::AccessDenied
        }
        Some("ThrottlingException" | "TooManyUpdates") => StoreErrorKind::Throttled,
        _ => StoreErrorKind::Service,
    }
}
