use crate::error::{Error, ParamsError};
use crate::models::VideoCategoryListResponse;
use crate::params::{
    ListRequest, Query, Resource, check_parts, exactly_one, parts, supplied, supplied_list,
};
use crate::Client;
use derive_builder::Builder;

const SELECTORS: &[&str] = &["id", "regionCode"];

/// Parameters for `videoCategories.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/videoCategories/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct VideoCategoriesListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    /// The categories available in this region.
    #[builder(setter(into, strip_option), default)]
    region_code: Option<String>,

    #[builder(setter(into, strip_option), default)]
    hl: Option<String>,
}

impl VideoCategoriesListRequest {
    pub fn builder() -> VideoCategoriesListRequestBuilder {
        VideoCategoriesListRequestBuilder::default()
    }
}

impl VideoCategoriesListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::VideoCategories, self.parts.as_deref().unwrap_or_default())?;
        exactly_one(
            Resource::VideoCategories,
            SELECTORS,
            &[supplied_list(&self.ids), supplied(&self.region_code)],
        )
    }
}

impl ListRequest for VideoCategoriesListRequest {
    type Response = VideoCategoryListResponse;
    const RESOURCE: Resource = Resource::VideoCategories;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_list("id", &self.ids)
            .set_opt("regionCode", self.region_code.as_ref())
            .set_opt("hl", self.hl.as_ref())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VideoCategoriesResource<'a> {
    client: &'a Client,
}

impl<'a> VideoCategoriesResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &VideoCategoriesListRequest,
    ) -> Result<VideoCategoryListResponse, Error> {
        self.client.execute(request).await
    }
}
