use crate::error::{Error, ParamsError};
use crate::models::SubscriptionListResponse;
use crate::params::{
    ListRequest, Query, Resource, check_parts, exactly_one, parts, supplied, supplied_list,
};
use crate::Client;
use derive_builder::Builder;

const SELECTORS: &[&str] = &["channelId", "id", "mine", "myRecentSubscribers", "mySubscribers"];

/// Parameters for `subscriptions.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/subscriptions/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct SubscriptionsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    #[builder(setter(into, strip_option), default)]
    channel_id: Option<String>,

    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    #[builder(setter(strip_option), default)]
    mine: Option<bool>,

    #[builder(setter(strip_option), default)]
    my_recent_subscribers: Option<bool>,

    #[builder(setter(strip_option), default)]
    my_subscribers: Option<bool>,

    /// Only subscriptions to these channels.
    #[builder(setter(each(name = "for_channel_id", into)), default)]
    for_channel_ids: Vec<String>,

    #[builder(setter(strip_option), default)]
    max_results: Option<u32>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner: Option<String>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner_channel: Option<String>,

    /// `alphabetical`, `relevance`, or `unread`.
    #[builder(setter(into, strip_option), default)]
    order: Option<String>,

    #[builder(setter(into, strip_option), default)]
    page_token: Option<String>,
}

impl SubscriptionsListRequest {
    pub fn builder() -> SubscriptionsListRequestBuilder {
        SubscriptionsListRequestBuilder::default()
    }
}

impl SubscriptionsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::Subscriptions, self.parts.as_deref().unwrap_or_default())?;
        exactly_one(
            Resource::Subscriptions,
            SELECTORS,
            &[
                supplied(&self.channel_id),
                supplied_list(&self.ids),
                supplied(&self.mine),
                supplied(&self.my_recent_subscribers),
                supplied(&self.my_subscribers),
            ],
        )
    }
}

impl ListRequest for SubscriptionsListRequest {
    type Response = SubscriptionListResponse;
    const RESOURCE: Resource = Resource::Subscriptions;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("channelId", self.channel_id.as_ref())
            .set_list("id", &self.ids)
            .set_opt("mine", self.mine)
            .set_opt("myRecentSubscribers", self.my_recent_subscribers)
            .set_opt("mySubscribers", self.my_subscribers)
            .set_list("forChannelId", &self.for_channel_ids)
            .set_opt("maxResults", self.max_results)
            .set_opt("onBehalfOfContentOwner", self.on_behalf_of_content_owner.as_ref())
            .set_opt(
                "onBehalfOfContentOwnerChannel",
                self.on_behalf_of_content_owner_channel.as_ref(),
            )
            .set_opt("order", self.order.as_ref())
            .set_opt("pageToken", self.page_token.as_ref())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SubscriptionsResource<'a> {
    client: &'a Client,
}

impl<'a> SubscriptionsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &SubscriptionsListRequest,
    ) -> Result<SubscriptionListResponse, Error> {
        self.client.execute(request).await
    }
}
