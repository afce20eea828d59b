use crate::error::{Error, ParamsError};
use crate::models::CommentThreadListResponse;
use crate::params::{
    ListRequest, Query, Resource, check_parts, exactly_one, parts, supplied, supplied_list,
};
use crate::Client;
use derive_builder::Builder;

const SELECTORS: &[&str] = &["allThreadsRelatedToChannelId", "channelId", "id", "videoId"];

/// Parameters for `commentThreads.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct CommentThreadsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    /// Threads on the channel or on any of its videos.
    #[builder(setter(into, strip_option), default)]
    all_threads_related_to_channel_id: Option<String>,

    #[builder(setter(into, strip_option), default)]
    channel_id: Option<String>,

    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    #[builder(setter(into, strip_option), default)]
    video_id: Option<String>,

    #[builder(setter(strip_option), default)]
    max_results: Option<u32>,

    /// `heldForReview`, `likelySpam`, or `published`.
    #[builder(setter(into, strip_option), default)]
    moderation_status: Option<String>,

    /// `time` or `relevance`.
    #[builder(setter(into, strip_option), default)]
    order: Option<String>,

    #[builder(setter(into, strip_option), default)]
    page_token: Option<String>,

    #[builder(setter(into, strip_option), default)]
    search_terms: Option<String>,

    #[builder(setter(into, strip_option), default)]
    text_format: Option<String>,
}

impl CommentThreadsListRequest {
    pub fn builder() -> CommentThreadsListRequestBuilder {
        CommentThreadsListRequestBuilder::default()
    }
}

impl CommentThreadsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::CommentThreads, self.parts.as_deref().unwrap_or_default())?;
        exactly_one(
            Resource::CommentThreads,
            SELECTORS,
            &[
                supplied(&self.all_threads_related_to_channel_id),
                supplied(&self.channel_id),
                supplied_list(&self.ids),
                supplied(&self.video_id),
            ],
        )
    }
}

impl ListRequest for CommentThreadsListRequest {
    type Response = CommentThreadListResponse;
    const RESOURCE: Resource = Resource::CommentThreads;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt(
                "allThreadsRelatedToChannelId",
                self.all_threads_related_to_channel_id.as_ref(),
            )
            .set_opt("channelId", self.channel_id.as_ref())
            .set_list("id", &self.ids)
            .set_opt("videoId", self.video_id.as_ref())
            .set_opt("maxResults", self.max_results)
            .set_opt("moderationStatus", self.moderation_status.as_ref())
            .set_opt("order", self.order.as_ref())
            .set_opt("pageToken", self.page_token.as_ref())
            .set_opt("searchTerms", self.search_terms.as_ref())
            .set_opt("textFormat", self.text_format.as_ref())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CommentThreadsResource<'a> {
    client: &'a Client,
}

impl<'a> CommentThreadsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &CommentThreadsListRequest,
    ) -> Result<CommentThreadListResponse, Error> {
        self.client.execute(request).await
    }
}
