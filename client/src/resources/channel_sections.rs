use crate::error::{Error, ParamsError};
use crate::models::ChannelSectionListResponse;
use crate::params::{
    ListRequest, Query, Resource, check_parts, exactly_one, parts, supplied, supplied_list,
};
use crate::Client;
use derive_builder::Builder;

const SELECTORS: &[&str] = &["channelId", "id", "mine"];

/// Parameters for `channelSections.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/channelSections/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct ChannelSectionsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    #[builder(setter(into, strip_option), default)]
    channel_id: Option<String>,

    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    #[builder(setter(strip_option), default)]
    mine: Option<bool>,

    #[builder(setter(into, strip_option), default)]
    hl: Option<String>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner: Option<String>,
}

impl ChannelSectionsListRequest {
    pub fn builder() -> ChannelSectionsListRequestBuilder {
        ChannelSectionsListRequestBuilder::default()
    }
}

impl ChannelSectionsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::ChannelSections, self.parts.as_deref().unwrap_or_default())?;
        exactly_one(
            Resource::ChannelSections,
            SELECTORS,
            &[
                supplied(&self.channel_id),
                supplied_list(&self.ids),
                supplied(&self.mine),
            ],
        )
    }
}

impl ListRequest for ChannelSectionsListRequest {
    type Response = ChannelSectionListResponse;
    const RESOURCE: Resource = Resource::ChannelSections;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("channelId", self.channel_id.as_ref())
            .set_list("id", &self.ids)
            .set_opt("mine", self.mine)
            .set_opt("hl", self.hl.as_ref())
            .set_opt("onBehalfOfContentOwner", self.on_behalf_of_content_owner.as_ref())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChannelSectionsResource<'a> {
    client: &'a Client,
}

impl<'a> ChannelSectionsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &ChannelSectionsListRequest,
    ) -> Result<ChannelSectionListResponse, Error> {
        self.client.execute(request).await
    }
}
