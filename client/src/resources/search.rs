use crate::error::{Error, ParamsError};
use crate::models::SearchListResponse;
use crate::params::{ListRequest, Query, Resource, at_most_one, check_parts, parts};
use crate::Client;
use derive_builder::Builder;
use jiff::Timestamp;

const FILTERS: &[&str] = &["forContentOwner", "forDeveloper", "forMine"];

/// Parameters for `search.list`.
///
/// Unlike the other list requests, search needs no selector. At most one of `for_content_owner`,
/// `for_developer`, and `for_mine` may be turned on.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Clone, Default, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct SearchListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    /// The query term. `|` means OR and `-` excludes a term.
    #[builder(setter(into, strip_option), default)]
    q: Option<String>,

    #[builder(setter(strip_option), default)]
    for_content_owner: Option<bool>,

    /// Only videos uploaded through the calling application.
    #[builder(setter(strip_option), default)]
    for_developer: Option<bool>,

    #[builder(setter(strip_option), default)]
    for_mine: Option<bool>,

    #[builder(setter(into, strip_option), default)]
    channel_id: Option<String>,

    #[builder(setter(into, strip_option), default)]
    channel_type: Option<String>,

    /// `completed`, `live`, or `upcoming`.
    #[builder(setter(into, strip_option), default)]
    event_type: Option<String>,

    /// A `latitude,longitude` pair; needs `location_radius`.
    #[builder(setter(into, strip_option), default)]
    location: Option<String>,

    #[builder(setter(into, strip_option), default)]
    location_radius: Option<String>,

    #[builder(setter(strip_option), default)]
    max_results: Option<u32>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner: Option<String>,

    /// `date`, `rating`, `relevance`, `title`, `videoCount`, or `viewCount`.
    #[builder(setter(into, strip_option), default)]
    order: Option<String>,

    #[builder(setter(into, strip_option), default)]
    page_token: Option<String>,

    #[builder(setter(strip_option), default)]
    published_after: Option<Timestamp>,

    #[builder(setter(strip_option), default)]
    published_before: Option<Timestamp>,

    #[builder(setter(into, strip_option), default)]
    region_code: Option<String>,

    #[builder(setter(into, strip_option), default)]
    relevance_language: Option<String>,

    /// `moderate`, `none`, or `strict`.
    #[builder(setter(into, strip_option), default)]
    safe_search: Option<String>,

    #[builder(setter(into, strip_option), default)]
    topic_id: Option<String>,

    /// Kinds of result: `channel`, `playlist`, `video`.
    #[builder(setter(each(name = "result_type", into)), default)]
    types: Vec<String>,

    #[builder(setter(into, strip_option), default)]
    video_caption: Option<String>,

    #[builder(setter(into, strip_option), default)]
    video_category_id: Option<String>,

    #[builder(setter(into, strip_option), default)]
    video_definition: Option<String>,

    #[builder(setter(into, strip_option), default)]
    video_dimension: Option<String>,

    /// `any`, `long`, `medium`, or `short`.
    #[builder(setter(into, strip_option), default)]
    video_duration: Option<String>,

    #[builder(setter(into, strip_option), default)]
    video_embeddable: Option<String>,

    #[builder(setter(into, strip_option), default)]
    video_license: Option<String>,

    #[builder(setter(into, strip_option), default)]
    video_syndicated: Option<String>,

    #[builder(setter(into, strip_option), default)]
    video_type: Option<String>,
}

impl SearchListRequest {
    pub fn builder() -> SearchListRequestBuilder {
        SearchListRequestBuilder::default()
    }
}

fn on(flag: &Option<Option<bool>>) -> bool {
    matches!(flag, Some(Some(true)))
}

impl SearchListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::Search, self.parts.as_deref().unwrap_or_default())?;
        at_most_one(
            Resource::Search,
            FILTERS,
            &[
                on(&self.for_content_owner),
                on(&self.for_developer),
                on(&self.for_mine),
            ],
        )?;
        Ok(())
    }
}

impl ListRequest for SearchListRequest {
    type Response = SearchListResponse;
    const RESOURCE: Resource = Resource::Search;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("q", self.q.as_ref())
            .set_opt("forContentOwner", self.for_content_owner)
            .set_opt("forDeveloper", self.for_developer)
            .set_opt("forMine", self.for_mine)
            .set_opt("channelId", self.channel_id.as_ref())
            .set_opt("channelType", self.channel_type.as_ref())
            .set_opt("eventType", self.event_type.as_ref())
            .set_opt("location", self.location.as_ref())
            .set_opt("locationRadius", self.location_radius.as_ref())
            .set_opt("maxResults", self.max_results)
            .set_opt("onBehalfOfContentOwner", self.on_behalf_of_content_owner.as_ref())
            .set_opt("order", self.order.as_ref())
            .set_opt("pageToken", self.page_token.as_ref())
            .set_opt("publishedAfter", self.published_after)
            .set_opt("publishedBefore", self.published_before)
            .set_opt("regionCode", self.region_code.as_ref())
            .set_opt("relevanceLanguage", self.relevance_language.as_ref())
            .set_opt("safeSearch", self.safe_search.as_ref())
            .set_opt("topicId", self.topic_id.as_ref())
            .set_list("type", &self.types)
            .set_opt("videoCaption", self.video_caption.as_ref())
            .set_opt("videoCategoryId", self.video_category_id.as_ref())
            .set_opt("videoDefinition", self.video_definition.as_ref())
            .set_opt("videoDimension", self.video_dimension.as_ref())
            .set_opt("videoDuration", self.video_duration.as_ref())
            .set_opt("videoEmbeddable", self.video_embeddable.as_ref())
            .set_opt("videoLicense", self.video_license.as_ref())
            .set_opt("videoSyndicated", self.video_syndicated.as_ref())
            .set_opt("videoType", self.video_type.as_ref())
    }
}

/// Videos, channels, and playlists that match a query.
///
/// See: <https://developers.google.com/youtube/v3/docs/search>
#[derive(Debug, Clone, Copy)]
pub struct SearchResource<'a> {
    client: &'a Client,
}

impl<'a> SearchResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, request: &SearchListRequest) -> Result<SearchListResponse, Error> {
        self.client.execute(request).await
    }
}
