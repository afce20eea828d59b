//! Video categories.

use super::common::{BaseList, BaseResource, Pagination};
use ytdata_codec::record;

record! {
    pub struct CategorySnippet {
        pub channel_id: Option<String> as "channelId",
        pub title: Option<String>,
    }
}

record! {
    pub struct VideoCategorySnippet extends { base: CategorySnippet } {
        /// Whether videos can be put in this category.
        pub assignable: Option<bool>,
    }
}

record! {
    pub struct VideoCategory extends { base: BaseResource } {
        pub snippet: Option<VideoCategorySnippet>,
    }
}

record! {
    pub struct VideoCategoryListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<VideoCategory> = Vec::new(),
    }
}
