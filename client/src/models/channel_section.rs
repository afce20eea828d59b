//! Channel sections: the shelves on a channel's home page.

use super::common::{BaseList, BaseResource, Pagination};
use ytdata_codec::record;

record! {
    pub struct ChannelSectionSnippet {
        /// e.g. `singlePlaylist`, `multipleChannels`, `recentUploads`.
        pub r#type: Option<String> as "type",
        pub channel_id: Option<String> as "channelId",
        pub title: Option<String>,
        pub position: Option<u32>,
    }
}

record! {
    pub struct ChannelSectionContentDetails {
        pub playlists: Option<Vec<String>>,
        pub channels: Option<Vec<String>>,
    }
}

record! {
    pub struct ChannelSection extends { base: BaseResource } {
        pub snippet: Option<ChannelSectionSnippet>,
        pub content_details: Option<ChannelSectionContentDetails> as "contentDetails",
    }
}

record! {
    pub struct ChannelSectionListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<ChannelSection> = Vec::new(),
    }
}
