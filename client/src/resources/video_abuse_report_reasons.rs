use crate::error::{Error, ParamsError};
use crate::models::VideoAbuseReportReasonListResponse;
use crate::params::{ListRequest, Query, Resource, check_parts, parts};
use crate::Client;
use derive_builder::Builder;

/// Parameters for `videoAbuseReportReasons.list`.
#[derive(Debug, Clone, Default, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct VideoAbuseReportReasonsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    #[builder(setter(into, strip_option), default)]
    hl: Option<String>,
}

impl VideoAbuseReportReasonsListRequest {
    pub fn builder() -> VideoAbuseReportReasonsListRequestBuilder {
        VideoAbuseReportReasonsListRequestBuilder::default()
    }
}

impl VideoAbuseReportReasonsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(
            Resource::VideoAbuseReportReasons,
            self.parts.as_deref().unwrap_or_default(),
        )
    }
}

impl ListRequest for VideoAbuseReportReasonsListRequest {
    type Response = VideoAbuseReportReasonListResponse;
    const RESOURCE: Resource = Resource::VideoAbuseReportReasons;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("hl", self.hl.as_ref())
    }
}

/// The reasons that can be given when flagging a video as abusive.
#[derive(Debug, Clone, Copy)]
pub struct VideoAbuseReportReasonsResource<'a> {
    client: &'a Client,
}

impl<'a> VideoAbuseReportReasonsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &VideoAbuseReportReasonsListRequest,
    ) -> Result<VideoAbuseReportReasonListResponse, Error> {
        self.client.execute(request).await
    }
}
