use super::ChannelSectionsResource;
use crate::error::{Error, ParamsError};
use crate::models::ChannelListResponse;
use crate::params::{
    ListRequest, Query, Resource, check_parts, exactly_one, parts, supplied, supplied_list,
};
use crate::Client;
use derive_builder::Builder;

const SELECTORS: &[&str] = &["forHandle", "forUsername", "id", "managedByMe", "mine"];

/// Parameters for `channels.list`.
///
/// Exactly one of `for_handle`, `for_username`, `id`, `managed_by_me`, or `mine` must be set.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct ChannelsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    /// A channel handle, with or without the leading `@`.
    #[builder(setter(into, strip_option), default)]
    for_handle: Option<String>,

    /// A legacy YouTube username.
    #[builder(setter(into, strip_option), default)]
    for_username: Option<String>,

    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    /// Channels managed by the content owner in `on_behalf_of_content_owner`.
    #[builder(setter(strip_option), default)]
    managed_by_me: Option<bool>,

    /// The authenticated user's channels.
    #[builder(setter(strip_option), default)]
    mine: Option<bool>,

    #[builder(setter(into, strip_option), default)]
    hl: Option<String>,

    #[builder(setter(strip_option), default)]
    max_results: Option<u32>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner: Option<String>,

    #[builder(setter(into, strip_option), default)]
    page_token: Option<String>,
}

impl ChannelsListRequest {
    pub fn builder() -> ChannelsListRequestBuilder {
        ChannelsListRequestBuilder::default()
    }
}

impl ChannelsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::Channels, self.parts.as_deref().unwrap_or_default())?;
        exactly_one(
            Resource::Channels,
            SELECTORS,
            &[
                supplied(&self.for_handle),
                supplied(&self.for_username),
                supplied_list(&self.ids),
                supplied(&self.managed_by_me),
                supplied(&self.mine),
            ],
        )
    }
}

impl ListRequest for ChannelsListRequest {
    type Response = ChannelListResponse;
    const RESOURCE: Resource = Resource::Channels;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("forHandle", self.for_handle.as_ref())
            .set_opt("forUsername", self.for_username.as_ref())
            .set_list("id", &self.ids)
            .set_opt("managedByMe", self.managed_by_me)
            .set_opt("mine", self.mine)
            .set_opt("hl", self.hl.as_ref())
            .set_opt("maxResults", self.max_results)
            .set_opt("onBehalfOfContentOwner", self.on_behalf_of_content_owner.as_ref())
            .set_opt("pageToken", self.page_token.as_ref())
    }
}

/// A channel resource contains information about a YouTube channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels>
#[derive(Debug, Clone, Copy)]
pub struct ChannelsResource<'a> {
    client: &'a Client,
}

impl<'a> ChannelsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, request: &ChannelsListRequest) -> Result<ChannelListResponse, Error> {
        self.client.execute(request).await
    }

    pub fn sections(&self) -> ChannelSectionsResource<'a> {
        ChannelSectionsResource::new(self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn for_handle() {
        let request = ChannelsListRequest::builder()
            .for_handle("@GoogleDevelopers")
            .part("snippet")
            .build()
            .unwrap();
        assert_eq!(
            request.query().pairs(),
            [
                ("part", "snippet".to_string()),
                ("forHandle", "@GoogleDevelopers".to_string()),
            ]
        );
    }

    #[test]
    fn mine_is_sent_as_a_flag() {
        let request = ChannelsListRequest::builder().mine(true).build().unwrap();
        assert_eq!(request.query().get("mine"), Some("true"));
        assert_eq!(request.query().get("id"), None);
    }

    #[test]
    fn selectors() {
        let e = ChannelsListRequest::builder().build().unwrap_err();
        assert_snapshot!(e.to_string(), @"specify one of forHandle, forUsername, id, managedByMe, mine for channels");

        let e = ChannelsListRequest::builder()
            .id("UC1")
            .for_username("GoogleDevelopers")
            .mine(true)
            .build()
            .unwrap_err();
        assert_snapshot!(e.to_string(), @"forUsername, id, mine are mutually exclusive for channels");
    }
}
