use crate::error::{Error, ParamsError};
use crate::models::I18nLanguageListResponse;
use crate::params::{ListRequest, Query, Resource, check_parts, parts};
use crate::Client;
use derive_builder::Builder;

/// Parameters for `i18nLanguages.list`.
#[derive(Debug, Clone, Default, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct I18nLanguagesListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    /// The language the language names are written in.
    #[builder(setter(into, strip_option), default)]
    hl: Option<String>,
}

impl I18nLanguagesListRequest {
    pub fn builder() -> I18nLanguagesListRequestBuilder {
        I18nLanguagesListRequestBuilder::default()
    }
}

impl I18nLanguagesListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::I18nLanguages, self.parts.as_deref().unwrap_or_default())
    }
}

impl ListRequest for I18nLanguagesListRequest {
    type Response = I18nLanguageListResponse;
    const RESOURCE: Resource = Resource::I18nLanguages;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("hl", self.hl.as_ref())
    }
}

/// Application languages the YouTube website supports.
#[derive(Debug, Clone, Copy)]
pub struct I18nLanguagesResource<'a> {
    client: &'a Client,
}

impl<'a> I18nLanguagesResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        request: &I18nLanguagesListRequest,
    ) -> Result<I18nLanguageListResponse, Error> {
        self.client.execute(request).await
    }
}
