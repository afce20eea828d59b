use super::PlaylistItemsResource;
use crate::error::{Error, ParamsError};
use crate::models::PlaylistListResponse;
use crate::params::{
    ListRequest, Query, Resource, check_parts, exactly_one, parts, supplied, supplied_list,
};
use crate::Client;
use derive_builder::Builder;

const SELECTORS: &[&str] = &["channelId", "id", "mine"];

/// Parameters for `playlists.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct PlaylistsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    #[builder(setter(into, strip_option), default)]
    channel_id: Option<String>,

    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    /// The authenticated user's playlists. Requires OAuth.
    #[builder(setter(strip_option), default)]
    mine: Option<bool>,

    #[builder(setter(into, strip_option), default)]
    hl: Option<String>,

    #[builder(setter(strip_option), default)]
    max_results: Option<u32>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner: Option<String>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner_channel: Option<String>,

    #[builder(setter(into, strip_option), default)]
    page_token: Option<String>,
}

impl PlaylistsListRequest {
    pub fn builder() -> PlaylistsListRequestBuilder {
        PlaylistsListRequestBuilder::default()
    }
}

impl PlaylistsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::Playlists, self.parts.as_deref().unwrap_or_default())?;
        exactly_one(
            Resource::Playlists,
            SELECTORS,
            &[
                supplied(&self.channel_id),
                supplied_list(&self.ids),
                supplied(&self.mine),
            ],
        )
    }
}

impl ListRequest for PlaylistsListRequest {
    type Response = PlaylistListResponse;
    const RESOURCE: Resource = Resource::Playlists;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("channelId", self.channel_id.as_ref())
            .set_list("id", &self.ids)
            .set_opt("mine", self.mine)
            .set_opt("hl", self.hl.as_ref())
            .set_opt("maxResults", self.max_results)
            .set_opt("onBehalfOfContentOwner", self.on_behalf_of_content_owner.as_ref())
            .set_opt(
                "onBehalfOfContentOwnerChannel",
                self.on_behalf_of_content_owner_channel.as_ref(),
            )
            .set_opt("pageToken", self.page_token.as_ref())
    }
}

/// A playlist resource represents a YouTube playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists>
#[derive(Debug, Clone, Copy)]
pub struct PlaylistsResource<'a> {
    client: &'a Client,
}

impl<'a> PlaylistsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, request: &PlaylistsListRequest) -> Result<PlaylistListResponse, Error> {
        self.client.execute(request).await
    }

    /// The videos in playlists.
    pub fn items(&self) -> PlaylistItemsResource<'a> {
        PlaylistItemsResource::new(self.client)
    }
}
