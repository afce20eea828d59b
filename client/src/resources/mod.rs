//! Typed list requests, and the accessors on [`Client`] that run them.
//!
//! Each resource has a `*ListRequest` built with a builder that checks the request before it is
//! sent, and a `*Resource` handle borrowed from the client:
//!
//! ```no_run
//! # async fn run(client: ytdata::Client) -> Result<(), Box<dyn std::error::Error>> {
//! use ytdata::resources::ChannelsListRequest;
//!
//! let request = ChannelsListRequest::builder()
//!     .for_handle("@GoogleDevelopers")
//!     .part("snippet,statistics")
//!     .build()?;
//! let channels = client.channels().list(&request).await?;
//! # Ok(())
//! # }
//! ```

mod captions;
mod channel_sections;
mod channels;
mod comment_threads;
mod comments;
mod i18n_languages;
mod i18n_regions;
mod members;
mod memberships_levels;
mod playlist_items;
mod playlists;
mod search;
mod subscriptions;
mod video_abuse_report_reasons;
mod video_categories;
mod videos;

pub use captions::{CaptionsListRequest, CaptionsListRequestBuilder, CaptionsResource};
pub use channel_sections::{
    ChannelSectionsListRequest, ChannelSectionsListRequestBuilder, ChannelSectionsResource,
};
pub use channels::{ChannelsListRequest, ChannelsListRequestBuilder, ChannelsResource};
pub use comment_threads::{
    CommentThreadsListRequest, CommentThreadsListRequestBuilder, CommentThreadsResource,
};
pub use comments::{CommentsListRequest, CommentsListRequestBuilder, CommentsResource};
pub use i18n_languages::{
    I18nLanguagesListRequest, I18nLanguagesListRequestBuilder, I18nLanguagesResource,
};
pub use i18n_regions::{I18nRegionsListRequest, I18nRegionsListRequestBuilder, I18nRegionsResource};
pub use members::{MembersListRequest, MembersListRequestBuilder, MembersResource};
pub use memberships_levels::{
    MembershipsLevelsListRequest, MembershipsLevelsListRequestBuilder, MembershipsLevelsResource,
};
pub use playlist_items::{
    PlaylistItemsListRequest, PlaylistItemsListRequestBuilder, PlaylistItemsResource,
};
pub use playlists::{PlaylistsListRequest, PlaylistsListRequestBuilder, PlaylistsResource};
pub use search::{SearchListRequest, SearchListRequestBuilder, SearchResource};
pub use subscriptions::{
    SubscriptionsListRequest, SubscriptionsListRequestBuilder, SubscriptionsResource,
};
pub use video_abuse_report_reasons::{
    VideoAbuseReportReasonsListRequest, VideoAbuseReportReasonsListRequestBuilder,
    VideoAbuseReportReasonsResource,
};
pub use video_categories::{
    VideoCategoriesListRequest, VideoCategoriesListRequestBuilder, VideoCategoriesResource,
};
pub use videos::{VideosListRequest, VideosListRequestBuilder, VideosResource};

use crate::Client;

impl Client {
    pub fn captions(&self) -> CaptionsResource<'_> {
        CaptionsResource::new(self)
    }

    /// Channels; [`ChannelsResource::sections`] reaches channel sections.
    pub fn channels(&self) -> ChannelsResource<'_> {
        ChannelsResource::new(self)
    }

    /// Comments; [`CommentsResource::threads`] reaches comment threads.
    pub fn comments(&self) -> CommentsResource<'_> {
        CommentsResource::new(self)
    }

    pub fn i18n_languages(&self) -> I18nLanguagesResource<'_> {
        I18nLanguagesResource::new(self)
    }

    pub fn i18n_regions(&self) -> I18nRegionsResource<'_> {
        I18nRegionsResource::new(self)
    }

    /// Channel members; [`MembersResource::levels`] reaches membership levels.
    pub fn members(&self) -> MembersResource<'_> {
        MembersResource::new(self)
    }

    /// Playlists; [`PlaylistsResource::items`] reaches playlist items.
    pub fn playlists(&self) -> PlaylistsResource<'_> {
        PlaylistsResource::new(self)
    }

    pub fn search(&self) -> SearchResource<'_> {
        SearchResource::new(self)
    }

    pub fn subscriptions(&self) -> SubscriptionsResource<'_> {
        SubscriptionsResource::new(self)
    }

    /// Videos; categories and abuse report reasons hang off [`VideosResource`].
    pub fn videos(&self) -> VideosResource<'_> {
        VideosResource::new(self)
    }
}
