use super::CommentThreadsResource;
use crate::error::{Error, ParamsError};
use crate::models::CommentListResponse;
use crate::params::{
    ListRequest, Query, Resource, check_parts, exactly_one, parts, supplied, supplied_list,
};
use crate::Client;
use derive_builder::Builder;

const SELECTORS: &[&str] = &["id", "parentId"];

/// Parameters for `comments.list`.
///
/// Either `id` or `parent_id` must be set, but not both.
///
/// See: <https://developers.google.com/youtube/v3/docs/comments/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct CommentsListRequest {
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    /// List the replies to this comment.
    #[builder(setter(into, strip_option), default)]
    parent_id: Option<String>,

    #[builder(setter(strip_option), default)]
    max_results: Option<u32>,

    /// `html` or `plainText`.
    #[builder(setter(into, strip_option), default)]
    text_format: Option<String>,

    #[builder(setter(into, strip_option), default)]
    page_token: Option<String>,
}

impl CommentsListRequest {
    pub fn builder() -> CommentsListRequestBuilder {
        CommentsListRequestBuilder::default()
    }
}

impl CommentsListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::Comments, self.parts.as_deref().unwrap_or_default())?;
        exactly_one(
            Resource::Comments,
            SELECTORS,
            &[supplied_list(&self.ids), supplied(&self.parent_id)],
        )
    }
}

impl ListRequest for CommentsListRequest {
    type Response = CommentListResponse;
    const RESOURCE: Resource = Resource::Comments;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_list("id", &self.ids)
            .set_opt("parentId", self.parent_id.as_ref())
            .set_opt("maxResults", self.max_results)
            .set_opt("textFormat", self.text_format.as_ref())
            .set_opt("pageToken", self.page_token.as_ref())
    }
}

/// A comment resource contains information about a single YouTube comment.
///
/// See: <https://developers.google.com/youtube/v3/docs/comments>
#[derive(Debug, Clone, Copy)]
pub struct CommentsResource<'a> {
    client: &'a Client,
}

impl<'a> CommentsResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, request: &CommentsListRequest) -> Result<CommentListResponse, Error> {
        self.client.execute(request).await
    }

    pub fn threads(&self) -> CommentThreadsResource<'a> {
        CommentThreadsResource::new(self.client)
    }
}
