use crate::error::{Error, ParamsError};
use crate::models::PlaylistItemListResponse;
use crate::params::{
    ListRequest, Query, Resource, check_parts, exactly_one, parts, supplied, supplied_list,
};
use crate::Client;
use derive_builder::Builder;

const SELECTORS: &[&str] = &["id", "playlistId"];

/// Parameters for `playlistItems.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct PlaylistItemsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    #[builder(setter(into, strip_option), default)]
    playlist_id: Option<String>,

    #[builder(setter(strip_option), default)]
    max_results: Option<u32>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner: Option<String>,

    #[builder(setter(into, strip_option), default)]
    page_token: Option<String>,

    /// Only items that hold this video.
    #[builder(setter(into, strip_option), default)]
    video_id: Option<String>,
}

impl PlaylistItemsListRequest {
    pub fn builder() -> PlaylistItemsListRequestBuilder {
        PlaylistItemsListRequestBuilder::default()
    }
}

impl PlaylistItemsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::PlaylistItems, self.parts.as_deref().unwrap_or_default())?;
        exactly_one(
            Resource::PlaylistItems,
            SELECTORS,
            &[supplied_list(&self.ids), supplied(&self.playlist_id)],
        )
    }
}

impl ListRequest for PlaylistItemsListRequest {
    type Response = PlaylistItemListResponse;
    const RESOURCE: Resource = Resource::PlaylistItems;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_list("id", &self.ids)
            .set_opt("playlistId", self.playlist_id.as_ref())
            .set_opt("maxResults", self.max_results)
            .set_opt("onBehalfOfContentOwner", self.on_behalf_of_content_owner.as_ref())
            .set_opt("pageToken", self.page_token.as_ref())
            .set_opt("videoId", self.video_id.as_ref())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlaylistItemsResource<'a> {
    client: &'a Client,
}

impl<'a> PlaylistItemsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &PlaylistItemsListRequest,
    ) -> Result<PlaylistItemListResponse, Error> {
        self.client.execute(request).await
    }
}
