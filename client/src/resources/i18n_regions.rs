use crate::error::{Error, ParamsError};
use crate::models::I18nRegionListResponse;
use crate::params::{ListRequest, Query, Resource, check_parts, parts};
use crate::Client;
use derive_builder::Builder;

/// Parameters for `i18nRegions.list`.
#[derive(Debug, Clone, Default, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct I18nRegionsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    #[builder(setter(into, strip_option), default)]
    hl: Option<String>,
}

impl I18nRegionsListRequest {
    pub fn builder() -> I18nRegionsListRequestBuilder {
        I18nRegionsListRequestBuilder::default()
    }
}

impl I18nRegionsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::I18nRegions, self.parts.as_deref().unwrap_or_default())
    }
}

impl ListRequest for I18nRegionsListRequest {
    type Response = I18nRegionListResponse;
    const RESOURCE: Resource = Resource::I18nRegions;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("hl", self.hl.as_ref())
    }
}

/// Content regions the YouTube website supports.
#[derive(Debug, Clone, Copy)]
pub struct I18nRegionsResource<'a> {
    client: &'a Client,
}

impl<'a> I18nRegionsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &I18nRegionsListRequest,
    ) -> Result<I18nRegionListResponse, Error> {
        self.client.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let query = I18nRegionsListRequest::default().query();
        assert_eq!(query.pairs(), [("part", "snippet".to_string())]);

        let request = I18nRegionsListRequest::builder().hl("de").build().unwrap();
        assert_eq!(request.query().get("hl"), Some("de"));
    }
}
