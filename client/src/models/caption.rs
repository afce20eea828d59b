//! Caption tracks.
//!
//! See: <https://developers.google.com/youtube/v3/docs/captions#resource>

use super::common::{BaseList, BaseResource, Pagination};
use jiff::Timestamp;
use ytdata_codec::record;

record! {
    pub struct CaptionSnippet {
        pub video_id: Option<String> as "videoId",
        pub last_updated: Option<Timestamp> as "lastUpdated",
        /// `asr` for automatic speech recognition, `forced`, or `standard`.
        pub track_kind: Option<String> as "trackKind",
        /// BCP-47 language tag.
        pub language: Option<String>,
        pub name: Option<String>,
        pub audio_track_type: Option<String> as "audioTrackType",
        pub is_cc: Option<bool> as "isCC",
        pub is_large: Option<bool> as "isLarge",
        pub is_easy_reader: Option<bool> as "isEasyReader",
        pub is_draft: Option<bool> as "isDraft",
        pub is_auto_synced: Option<bool> as "isAutoSynced",
        pub status: Option<String>,
        pub failure_reason: Option<String> as "failureReason",
    }
}

record! {
    pub struct Caption extends { base: BaseResource } {
        pub snippet: Option<CaptionSnippet>,
    }
}

record! {
    pub struct CaptionListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<Caption> = Vec::new(),
    }
}
