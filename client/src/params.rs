//! Request parameters: resources, their parts, selectors, and query strings.

use crate::error::ParamsError;
use indexmap::IndexSet;
use std::fmt;
use ytdata_codec::Record;

/// A list request for one of the API's resources.
///
/// Implemented by the `*ListRequest` types in [`crate::resources`]; run one with
/// [`crate::Client::execute`].
pub trait ListRequest {
    type Response: Record;

    const RESOURCE: Resource;

    /// The query string for this request, without credentials.
    fn query(&self) -> Query;
}

/// A resource of the YouTube Data API that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Resource {
    Captions,
    Channels,
    ChannelSections,
    Comments,
    CommentThreads,
    I18nLanguages,
    I18nRegions,
    Members,
    MembershipsLevels,
    PlaylistItems,
    Playlists,
    Search,
    Subscriptions,
    VideoAbuseReportReasons,
    VideoCategories,
    Videos,
}

impl Resource {
    /// The resource's path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Captions => "captions",
            Resource::Channels => "channels",
            Resource::ChannelSections => "channelSections",
            Resource::Comments => "comments",
            Resource::CommentThreads => "commentThreads",
            Resource::I18nLanguages => "i18nLanguages",
            Resource::I18nRegions => "i18nRegions",
            Resource::Members => "members",
            Resource::MembershipsLevels => "membershipsLevels",
            Resource::PlaylistItems => "playlistItems",
            Resource::Playlists => "playlists",
            Resource::Search => "search",
            Resource::Subscriptions => "subscriptions",
            Resource::VideoAbuseReportReasons => "videoAbuseReportReasons",
            Resource::VideoCategories => "videoCategories",
            Resource::Videos => "videos",
        }
    }

    /// Every part the resource can return.
    pub fn supported_parts(self) -> &'static [&'static str] {
        match self {
            Resource::Captions => &["id", "snippet"],
            Resource::Channels => &[
                "auditDetails",
                "brandingSettings",
                "contentDetails",
                "contentOwnerDetails",
                "id",
                "localizations",
                "snippet",
                "statistics",
                "status",
                "topicDetails",
            ],
            Resource::ChannelSections => &["contentDetails", "id", "snippet"],
            Resource::Comments => &["id", "snippet"],
            Resource::CommentThreads => &["id", "replies", "snippet"],
            Resource::I18nLanguages | Resource::I18nRegions => &["snippet"],
            Resource::Members => &["snippet"],
            Resource::MembershipsLevels => &["id", "snippet"],
            Resource::PlaylistItems => &["contentDetails", "id", "snippet", "status"],
            Resource::Playlists => &[
                "contentDetails",
                "id",
                "localizations",
                "player",
                "snippet",
                "status",
            ],
            Resource::Search => &["snippet"],
            Resource::Subscriptions => &["contentDetails", "id", "snippet", "subscriberSnippet"],
            Resource::VideoAbuseReportReasons => &["id", "snippet"],
            Resource::VideoCategories => &["snippet"],
            Resource::Videos => &[
                "contentDetails",
                "fileDetails",
                "id",
                "liveStreamingDetails",
                "localizations",
                "player",
                "processingDetails",
                "recordingDetails",
                "snippet",
                "statistics",
                "status",
                "suggestions",
                "topicDetails",
            ],
        }
    }

    /// The parts requested when the caller names none.
    ///
    /// This is every supported part, except for the video parts that only a video's owner may
    /// read.
    pub fn default_parts(self) -> &'static [&'static str] {
        match self {
            Resource::Videos => &[
                "contentDetails",
                "id",
                "liveStreamingDetails",
                "localizations",
                "player",
                "recordingDetails",
                "snippet",
                "statistics",
                "status",
                "topicDetails",
            ],
            other => other.supported_parts(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Splits comma-separated entries, trims them, and drops empty entries and repeats.
pub fn comma_separated<S: AsRef<str>>(values: &[S]) -> IndexSet<String> {
    values
        .iter()
        .flat_map(|v| v.as_ref().split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins the normalized entries of `values` with commas, or `None` if there are none.
pub(crate) fn joined<S: AsRef<str>>(values: &[S]) -> Option<String> {
    let values = comma_separated(values);
    if values.is_empty() {
        return None;
    }
    Some(values.into_iter().collect::<Vec<_>>().join(","))
}

/// The `part` parameter: the requested parts if any were given, otherwise the defaults.
pub(crate) fn parts<S: AsRef<str>>(resource: Resource, requested: &[S]) -> String {
    joined(requested).unwrap_or_else(|| resource.default_parts().join(","))
}

/// Fails if any requested part is not supported by `resource`.
pub(crate) fn check_parts<S: AsRef<str>>(
    resource: Resource,
    requested: &[S],
) -> Result<(), ParamsError> {
    let supported = resource.supported_parts();
    let unsupported: Vec<String> = comma_separated(requested)
        .into_iter()
        .filter(|part| !supported.contains(&part.as_str()))
        .collect();
    if unsupported.is_empty() {
        Ok(())
    } else {
        Err(ParamsError::UnsupportedParts {
            resource: resource.path(),
            parts: unsupported,
        })
    }
}

/// Fails unless exactly one of the selector parameters was given.
///
/// `given` holds, for each selector in `options`, whether the caller set it.
pub(crate) fn exactly_one(
    resource: Resource,
    options: &'static [&'static str],
    given: &[bool],
) -> Result<(), ParamsError> {
    match at_most_one(resource, options, given)? {
        true => Ok(()),
        false => Err(ParamsError::MissingSelector {
            resource: resource.path(),
            options,
        }),
    }
}

/// Fails if more than one of the selector parameters was given; returns whether one was.
pub(crate) fn at_most_one(
    resource: Resource,
    options: &'static [&'static str],
    given: &[bool],
) -> Result<bool, ParamsError> {
    debug_assert_eq!(options.len(), given.len());
    let set: Vec<&'static str> = options
        .iter()
        .zip(given)
        .filter(|(_, given)| **given)
        .map(|(name, _)| *name)
        .collect();
    match set.len() {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(ParamsError::ConflictingSelectors {
            resource: resource.path(),
            given: set,
        }),
    }
}

/// Whether a builder's optional field was set to a value.
pub(crate) fn supplied<T>(field: &Option<Option<T>>) -> bool {
    matches!(field, Some(Some(_)))
}

/// Whether a builder's list field holds at least one non-empty entry.
pub(crate) fn supplied_list<S: AsRef<str>>(field: &Option<Vec<S>>) -> bool {
    field
        .as_deref()
        .is_some_and(|values| !comma_separated(values).is_empty())
}

/// Query string parameters, in the order they were added. Unset parameters are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn set_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Sets `key` to the comma-joined entries of `values`, if there are any.
    pub fn set_list<S: AsRef<str>>(self, key: &'static str, values: &[S]) -> Self {
        self.set_opt(key, joined(values))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn comma_separated_inputs_are_normalized() {
        let values = comma_separated(&["snippet, statistics", "snippet", " ", "id,"]);
        assert_eq!(
            values.into_iter().collect::<Vec<_>>(),
            ["snippet", "statistics", "id"]
        );
        assert_eq!(joined::<&str>(&[]), None);
        assert_eq!(joined(&[" , "]), None);
        assert_eq!(joined(&["a", "b,a"]).as_deref(), Some("a,b"));
    }

    #[test]
    fn parts_fall_back_to_defaults() {
        assert_eq!(parts::<&str>(Resource::Captions, &[]), "id,snippet");
        assert_eq!(parts(Resource::Channels, &["id", "snippet,id"]), "id,snippet");
        assert!(!parts::<&str>(Resource::Videos, &[]).contains("fileDetails"));
    }

    #[test]
    fn unsupported_parts_are_named() {
        assert!(check_parts(Resource::Videos, &["snippet,fileDetails"]).is_ok());
        let e = check_parts(Resource::Comments, &["snippet,replies", "bogus"]).unwrap_err();
        assert_snapshot!(e.to_string(), @"parts replies, bogus are not supported by comments");
    }

    #[test]
    fn default_parts_are_supported() {
        for resource in [
            Resource::Captions,
            Resource::Channels,
            Resource::ChannelSections,
            Resource::Comments,
            Resource::CommentThreads,
            Resource::I18nLanguages,
            Resource::I18nRegions,
            Resource::Members,
            Resource::MembershipsLevels,
            Resource::PlaylistItems,
            Resource::Playlists,
            Resource::Search,
            Resource::Subscriptions,
            Resource::VideoAbuseReportReasons,
            Resource::VideoCategories,
            Resource::Videos,
        ] {
            assert!(check_parts(resource, resource.default_parts()).is_ok(), "{resource}");
        }
    }

    #[test]
    fn selectors() {
        const OPTIONS: &[&str] = &["chart", "id", "myRating"];
        assert!(exactly_one(Resource::Videos, OPTIONS, &[false, true, false]).is_ok());

        let e = exactly_one(Resource::Videos, OPTIONS, &[false, false, false]).unwrap_err();
        assert_snapshot!(e.to_string(), @"specify one of chart, id, myRating for videos");

        let e = exactly_one(Resource::Videos, OPTIONS, &[true, false, true]).unwrap_err();
        assert_snapshot!(e.to_string(), @"chart, myRating are mutually exclusive for videos");

        assert_eq!(at_most_one(Resource::Search, OPTIONS, &[false; 3]), Ok(false));
    }

    #[test]
    fn builder_field_helpers() {
        assert!(!supplied::<bool>(&None));
        assert!(!supplied::<bool>(&Some(None)));
        assert!(supplied(&Some(Some(false))));
        assert!(!supplied_list::<String>(&None));
        assert!(!supplied_list(&Some(vec![" , "])));
        assert!(supplied_list(&Some(vec!["UC1"])));
    }

    #[test]
    fn query_skips_unset_values() {
        let q = Query::new()
            .set("part", "snippet")
            .set_opt("mine", Some(true))
            .set_opt::<u32>("maxResults", None)
            .set_list("id", &["a, b", "a"])
            .set_list::<&str>("forChannelId", &[]);
        assert_eq!(
            q.pairs(),
            [
                ("part", "snippet".to_string()),
                ("mine", "true".to_string()),
                ("id", "a,b".to_string()),
            ]
        );
        assert_eq!(q.get("mine"), Some("true"));
        assert_eq!(q.get("maxResults"), None);
    }
}
