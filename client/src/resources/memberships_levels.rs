use crate::error::{Error, ParamsError};
use crate::models::MembershipsLevelListResponse;
use crate::params::{ListRequest, Query, Resource, check_parts, parts};
use crate::Client;
use derive_builder::Builder;

/// Parameters for `membershipsLevels.list`.
#[derive(Debug, Clone, Default, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct MembershipsLevelsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,
}

impl MembershipsLevelsListRequest {
    pub fn builder() -> MembershipsLevelsListRequestBuilder {
        MembershipsLevelsListRequestBuilder::default()
    }
}

impl MembershipsLevelsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::MembershipsLevels, self.parts.as_deref().unwrap_or_default())
    }
}

impl ListRequest for MembershipsLevelsListRequest {
    type Response = MembershipsLevelListResponse;
    const RESOURCE: Resource = Resource::MembershipsLevels;

    fn query(&self) -> Query {
        Query::new().set("part", parts(Self::RESOURCE, &self.parts))
    }
}

/// The membership levels of the authenticated user's channel.
#[derive(Debug, Clone, Copy)]
pub struct MembershipsLevelsResource<'a> {
    client: &'a Client,
}

impl<'a> MembershipsLevelsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &MembershipsLevelsListRequest,
    ) -> Result<MembershipsLevelListResponse, Error> {
        self.client.execute(request).await
    }
}
