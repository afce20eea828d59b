//! Search results.
//!
//! A search result points at a video, a channel, or a playlist; its `id` is a [`SearchResultId`]
//! rather than the plain string other resources use.

use super::common::{BaseList, BaseResource, Pagination, Thumbnails};
use jiff::Timestamp;
use ytdata_codec::record;

record! {
    pub struct SearchResultSnippet {
        pub published_at: Option<Timestamp> as "publishedAt",
        pub channel_id: Option<String> as "channelId",
        pub title: Option<String>,
        pub description: Option<String>,
        pub thumbnails: Option<Thumbnails>,
        pub channel_title: Option<String> as "channelTitle",
        pub live_broadcast_content: Option<String> as "liveBroadcastContent",
    }
}

record! {
    pub struct SearchResultId {
        /// `youtube#video`, `youtube#channel`, or `youtube#playlist`.
        pub kind: String,
        pub video_id: Option<String> as "videoId",
        pub channel_id: Option<String> as "channelId",
        pub playlist_id: Option<String> as "playlistId",
    }
}

record! {
    pub struct SearchResult extends { base: BaseResource } {
        pub id: SearchResultId,
        pub snippet: SearchResultSnippet,
    }
}

record! {
    pub struct SearchListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<SearchResult> = Vec::new(),
        pub region_code: Option<String> as "regionCode",
    }
}
