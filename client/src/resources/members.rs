use super::MembershipsLevelsResource;
use crate::error::{Error, ParamsError};
use crate::models::MemberListResponse;
use crate::params::{ListRequest, Query, Resource, check_parts, parts};
use crate::Client;
use derive_builder::Builder;

/// Parameters for `members.list`. Requires OAuth as the channel's owner.
///
/// See: <https://developers.google.com/youtube/v3/docs/members/list>
#[derive(Debug, Clone, Default, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct MembersListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    /// `all_current` or `updates`.
    #[builder(setter(into, strip_option), default)]
    mode: Option<String>,

    #[builder(setter(strip_option), default)]
    max_results: Option<u32>,

    #[builder(setter(into, strip_option), default)]
    page_token: Option<String>,

    /// Only members with at least this level.
    #[builder(setter(into, strip_option), default)]
    has_access_to_level: Option<String>,

    /// Check the membership of these channels. At most 100.
    #[builder(setter(each(name = "member_channel_id", into)), default)]
    filter_by_member_channel_id: Vec<String>,
}

impl MembersListRequest {
    pub fn builder() -> MembersListRequestBuilder {
        MembersListRequestBuilder::default()
    }
}

impl MembersListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::Members, self.parts.as_deref().unwrap_or_default())
    }
}

impl ListRequest for MembersListRequest {
    type Response = MemberListResponse;
    const RESOURCE: Resource = Resource::Members;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("mode", self.mode.as_ref())
            .set_opt("maxResults", self.max_results)
            .set_opt("pageToken", self.page_token.as_ref())
            .set_opt("hasAccessToLevel", self.has_access_to_level.as_ref())
            .set_list("filterByMemberChannelId", &self.filter_by_member_channel_id)
    }
}

/// The members of a channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/members>
#[derive(Debug, Clone, Copy)]
pub struct MembersResource<'a> {
    client: &'a Client,
}

impl<'a> MembersResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, request: &MembersListRequest) -> Result<MemberListResponse, Error> {
        self.client.execute(request).await
    }

    pub fn levels(&self) -> MembershipsLevelsResource<'a> {
        MembershipsLevelsResource::new(self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn member_filter_is_comma_joined() {
        let request = MembersListRequest::builder()
            .mode("all_current")
            .member_channel_id("UC1,UC2")
            .member_channel_id("UC3")
            .build()
            .unwrap();
        assert_eq!(
            request.query().pairs(),
            [
                ("part", "snippet".to_string()),
                ("mode", "all_current".to_string()),
                ("filterByMemberChannelId", "UC1,UC2,UC3".to_string()),
            ]
        );
    }
}
