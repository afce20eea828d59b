//! Records shared by many resources.

use ytdata_codec::record;

record! {
    /// An image, at one of the sizes YouTube renders thumbnails in.
    pub struct Thumbnail {
        pub url: Option<String>,
        pub width: Option<u32>,
        pub height: Option<u32>,
    }
}

record! {
    /// The thumbnails of a resource, keyed by size.
    ///
    /// Which sizes are present depends on the resource; `default` is the only one that is
    /// (almost) always there.
    pub struct Thumbnails {
        pub default: Option<Thumbnail>,
        pub medium: Option<Thumbnail>,
        pub high: Option<Thumbnail>,
        pub standard: Option<Thumbnail>,
        pub maxres: Option<Thumbnail>,
    }
}

record! {
    /// A title and description in the language requested with `hl`.
    pub struct Localized {
        pub title: Option<String>,
        pub description: Option<String>,
    }
}

record! {
    pub struct PageInfo {
        /// Total results in the result set. Can be an approximation.
        pub total_results: Option<u32> as "totalResults",
        pub results_per_page: Option<u32> as "resultsPerPage",
    }
}

record! {
    /// Paging fields carried by every list response.
    pub struct Pagination {
        pub next_page_token: Option<String> as "nextPageToken",
        pub prev_page_token: Option<String> as "prevPageToken",
        pub page_info: Option<PageInfo> as "pageInfo",
    }
}

record! {
    /// Fields every list response starts with.
    pub struct BaseList {
        pub kind: Option<String>,
        pub etag: Option<String>,
    }
}

record! {
    /// Fields every resource starts with.
    pub struct BaseResource {
        pub kind: Option<String>,
        pub etag: Option<String>,
        pub id: String,
    }
}

record! {
    /// Points at another resource: a video, a channel, or a playlist, depending on `kind`.
    pub struct ResourceId {
        pub kind: Option<String>,
        pub video_id: Option<String> as "videoId",
        pub channel_id: Option<String> as "channelId",
        pub playlist_id: Option<String> as "playlistId",
    }
}

record! {
    pub struct Player {
        /// An `<iframe>` tag that embeds a player.
        pub embed_html: Option<String> as "embedHtml",
        pub embed_height: Option<u32> as "embedHeight",
        pub embed_width: Option<u32> as "embedWidth",
    }
}

record! {
    pub struct BaseTopicDetails {
        /// Freebase topic IDs associated with the resource.
        pub topic_ids: Option<Vec<String>> as "topicIds",
    }
}
