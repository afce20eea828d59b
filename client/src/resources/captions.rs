use crate::error::{Error, ParamsError};
use crate::models::CaptionListResponse;
use crate::params::{ListRequest, Query, Resource, check_parts, parts};
use crate::Client;
use derive_builder::Builder;

/// Parameters for `captions.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/captions/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct CaptionsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    /// The video whose caption tracks to list.
    #[builder(setter(into))]
    video_id: String,

    /// Limit the result to these caption track IDs.
    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner: Option<String>,
}

impl CaptionsListRequest {
    pub fn builder() -> CaptionsListRequestBuilder {
        CaptionsListRequestBuilder::default()
    }
}

impl CaptionsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        if self.video_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            return Err(ParamsError::Invalid("video_id cannot be empty".to_string()));
        }
        check_parts(Resource::Captions, self.parts.as_deref().unwrap_or_default())
    }
}

impl ListRequest for CaptionsListRequest {
    type Response = CaptionListResponse;
    const RESOURCE: Resource = Resource::Captions;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set("videoId", &self.video_id)
            .set_list("id", &self.ids)
            .set_opt("onBehalfOfContentOwner", self.on_behalf_of_content_owner.as_ref())
    }
}

/// The caption tracks of a video.
///
/// See: <https://developers.google.com/youtube/v3/docs/captions>
#[derive(Debug, Clone, Copy)]
pub struct CaptionsResource<'a> {
    client: &'a Client,
}

impl<'a> CaptionsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, request: &CaptionsListRequest) -> Result<CaptionListResponse, Error> {
        self.client.execute(request).await
    }
}
