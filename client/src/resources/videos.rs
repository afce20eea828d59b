use super::{VideoAbuseReportReasonsResource, VideoCategoriesResource};
use crate::error::{Error, ParamsError};
use crate::models::VideoListResponse;
use crate::params::{
    ListRequest, Query, Resource, check_parts, exactly_one, parts, supplied, supplied_list,
};
use crate::Client;
use derive_builder::Builder;

const SELECTORS: &[&str] = &["chart", "id", "myRating"];

/// Parameters for `videos.list`.
///
/// Exactly one of `chart`, `id`, or `my_rating` must be set.
///
/// ```
/// use ytdata::resources::VideosListRequest;
///
/// let request = VideosListRequest::builder()
///     .id("dQw4w9WgXcQ,9bZkp7q19f0")
///     .part("snippet")
///     .part("statistics")
///     .build()?;
/// # Ok::<_, ytdata::ParamsError>(())
/// ```
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "ParamsError"))]
pub struct VideosListRequest {
    /// Parts to return. Defaults to every part that is not restricted to the video's owner.
    #[builder(setter(each(name = "part", into)), default)]
    parts: Vec<String>,

    /// Only `mostPopular` is supported.
    #[builder(setter(into, strip_option), default)]
    chart: Option<String>,

    /// Video IDs; each entry may itself be comma-separated.
    #[builder(setter(each(name = "id", into)), default)]
    ids: Vec<String>,

    /// `like` or `dislike`. Requires OAuth.
    #[builder(setter(into, strip_option), default)]
    my_rating: Option<String>,

    #[builder(setter(into, strip_option), default)]
    hl: Option<String>,

    #[builder(setter(strip_option), default)]
    max_height: Option<u32>,

    #[builder(setter(strip_option), default)]
    max_results: Option<u32>,

    #[builder(setter(strip_option), default)]
    max_width: Option<u32>,

    #[builder(setter(into, strip_option), default)]
    on_behalf_of_content_owner: Option<String>,

    #[builder(setter(into, strip_option), default)]
    page_token: Option<String>,

    /// Region for `chart`, as an ISO 3166-1 alpha-2 code.
    #[builder(setter(into, strip_option), default)]
    region_code: Option<String>,

    #[builder(setter(into, strip_option), default)]
    video_category_id: Option<String>,
}

impl VideosListRequest {
    pub fn builder() -> VideosListRequestBuilder {
        VideosListRequestBuilder::default()
    }
}

impl VideosListRequestBuilder {
    fn validate(&self) -> Result<(), ParamsError> {
        check_parts(Resource::Videos, self.parts.as_deref().unwrap_or_default())?;
        exactly_one(
            Resource::Videos,
            SELECTORS,
            &[
                supplied(&self.chart),
                supplied_list(&self.ids),
                supplied(&self.my_rating),
            ],
        )
    }
}

impl ListRequest for VideosListRequest {
    type Response = VideoListResponse;
    const RESOURCE: Resource = Resource::Videos;

    fn query(&self) -> Query {
        Query::new()
            .set("part", parts(Self::RESOURCE, &self.parts))
            .set_opt("chart", self.chart.as_ref())
            .set_list("id", &self.ids)
            .set_opt("myRating", self.my_rating.as_ref())
            .set_opt("hl", self.hl.as_ref())
            .set_opt("maxHeight", self.max_height)
            .set_opt("maxResults", self.max_results)
            .set_opt("maxWidth", self.max_width)
            .set_opt("onBehalfOfContentOwner", self.on_behalf_of_content_owner.as_ref())
            .set_opt("pageToken", self.page_token.as_ref())
            .set_opt("regionCode", self.region_code.as_ref())
            .set_opt("videoCategoryId", self.video_category_id.as_ref())
    }
}

/// A video resource represents a YouTube video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos>
#[derive(Debug, Clone, Copy)]
pub struct VideosResource<'a> {
    client: &'a Client,
}

impl<'a> VideosResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the videos that match the request.
    pub async fn list(&self, request: &VideosListRequest) -> Result<VideoListResponse, Error> {
        self.client.execute(request).await
    }

    pub fn categories(&self) -> VideoCategoriesResource<'a> {
        VideoCategoriesResource::new(self.client)
    }

    pub fn abuse_report_reasons(&self) -> VideoAbuseReportReasonsResource<'a> {
        VideoAbuseReportReasonsResource::new(self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn by_id() {
        let request = VideosListRequest::builder()
            .id("a, b")
            .id("c")
            .id("a")
            .max_results(5)
            .build()
            .unwrap();
        let query = request.query();
        assert_eq!(query.get("id"), Some("a,b,c"));
        assert_eq!(query.get("maxResults"), Some("5"));
        assert_eq!(
            query.get("part"),
            Some(
                "contentDetails,id,liveStreamingDetails,localizations,player,recordingDetails,\
                 snippet,statistics,status,topicDetails"
            )
        );
        assert_eq!(query.get("chart"), None);
    }

    #[test]
    fn most_popular_chart() {
        let request = VideosListRequest::builder()
            .chart("mostPopular")
            .region_code("NZ")
            .part("snippet,statistics")
            .build()
            .unwrap();
        assert_eq!(
            request.query().pairs(),
            [
                ("part", "snippet,statistics".to_string()),
                ("chart", "mostPopular".to_string()),
                ("regionCode", "NZ".to_string()),
            ]
        );
    }

    #[test]
    fn needs_exactly_one_selector() {
        let e = VideosListRequest::builder().build().unwrap_err();
        assert_snapshot!(e.to_string(), @"specify one of chart, id, myRating for videos");

        let e = VideosListRequest::builder()
            .chart("mostPopular")
            .my_rating("like")
            .build()
            .unwrap_err();
        assert_snapshot!(e.to_string(), @"chart, myRating are mutually exclusive for videos");

        // an id list with nothing in it is no selector at all
        let e = VideosListRequest::builder().id(" , ").build().unwrap_err();
        assert!(matches!(e, ParamsError::MissingSelector { .. }));
    }

    #[test]
    fn owner_parts_can_be_requested() {
        let request = VideosListRequest::builder()
            .id("a")
            .part("fileDetails")
            .build()
            .unwrap();
        assert_eq!(request.query().get("part"), Some("fileDetails"));

        let e = VideosListRequest::builder()
            .id("a")
            .part("replies")
            .build()
            .unwrap_err();
        assert_snapshot!(e.to_string(), @"parts replies are not supported by videos");
    }
}
