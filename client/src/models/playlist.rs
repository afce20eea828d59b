//! Playlists and the items in them.

use super::common::{
    BaseList, BaseResource, Localized, Pagination, Player, ResourceId, Thumbnails,
};
use indexmap::IndexMap;
use jiff::Timestamp;
use ytdata_codec::record;

record! {
    pub struct PlaylistContentDetails {
        pub item_count: Option<u32> as "itemCount",
    }
}

record! {
    pub struct PlaylistSnippet {
        pub published_at: Option<Timestamp> as "publishedAt",
        pub channel_id: Option<String> as "channelId",
        pub title: Option<String>,
        pub description: Option<String>,
        pub thumbnails: Option<Thumbnails>,
        pub channel_title: Option<String> as "channelTitle",
        pub default_language: Option<String> as "defaultLanguage",
        pub localized: Option<Localized>,
    }
}

record! {
    pub struct PlaylistStatus {
        pub privacy_status: Option<String> as "privacyStatus",
    }
}

record! {
    pub struct Playlist extends { base: BaseResource } {
        pub snippet: Option<PlaylistSnippet>,
        pub status: Option<PlaylistStatus>,
        pub content_details: Option<PlaylistContentDetails> as "contentDetails",
        pub player: Option<Player>,
        pub localizations: Option<IndexMap<String, Localized>>,
    }
}

record! {
    pub struct PlaylistListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<Playlist> = Vec::new(),
    }
}

record! {
    pub struct PlaylistItemContentDetails {
        pub video_id: Option<String> as "videoId",
        pub note: Option<String>,
        pub video_published_at: Option<Timestamp> as "videoPublishedAt",
        pub start_at: Option<String> as "startAt",
        pub end_at: Option<String> as "endAt",
    }
}

record! {
    pub struct PlaylistItemSnippet {
        /// When the item was added to the playlist.
        pub published_at: Option<Timestamp> as "publishedAt",
        pub channel_id: Option<String> as "channelId",
        pub title: Option<String>,
        pub description: Option<String>,
        pub thumbnails: Option<Thumbnails>,
        pub channel_title: Option<String> as "channelTitle",
        pub video_owner_channel_title: Option<String> as "videoOwnerChannelTitle",
        pub video_owner_channel_id: Option<String> as "videoOwnerChannelId",
        pub playlist_id: Option<String> as "playlistId",
        /// Zero-based.
        pub position: Option<u32>,
        pub resource_id: Option<ResourceId> as "resourceId",
    }
}

record! {
    pub struct PlaylistItemStatus {
        pub privacy_status: Option<String> as "privacyStatus",
    }
}

record! {
    pub struct PlaylistItem extends { base: BaseResource } {
        pub snippet: Option<PlaylistItemSnippet>,
        pub content_details: Option<PlaylistItemContentDetails> as "contentDetails",
        pub status: Option<PlaylistItemStatus>,
    }
}

record! {
    pub struct PlaylistItemListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<PlaylistItem> = Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use ytdata_codec::Record;

    #[test]
    fn playlist_items() {
        let input = json!({
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "EAAaBlBUOkNBVQ",
            "pageInfo": {"totalResults": 40, "resultsPerPage": 5},
            "items": [{
                "id": "UExPVTJYTFl4bXNJSlhzSDJodEcxZzBOVWpIR3E2MlE3aS41NkI0NEY2RDEwNTU3Q0M2",
                "snippet": {
                    "publishedAt": "2019-05-16T18:46:20Z",
                    "title": "Google I/O'19",
                    "playlistId": "PLOU2XLYxmsIJXsH2htG1g0NUjHGq62Q7i",
                    "position": "0",
                    "resourceId": {"kind": "youtube#video", "videoId": "lyRPyRKHO8M"}
                },
                "contentDetails": {"videoId": "lyRPyRKHO8M", "videoPublishedAt": "2019-05-07T16:00:05Z"},
                "status": {"privacyStatus": "public"}
            }]
        });
        let list = PlaylistItemListResponse::decode(input.as_object().unwrap()).unwrap();
        let item = &list.items[0];
        let snippet = item.snippet.as_ref().unwrap();
        assert_eq!(snippet.position, Some(0));
        assert_eq!(
            snippet.resource_id.as_ref().and_then(|r| r.video_id.as_deref()),
            Some("lyRPyRKHO8M")
        );
        assert!(item.content_details.as_ref().unwrap().video_published_at.is_some());
        assert_eq!(
            list.page.page_info.as_ref().and_then(|p| p.total_results),
            Some(40)
        );
    }

    #[test]
    fn playlist_item_count() {
        let input = json!({"id": "PL1", "contentDetails": {"itemCount": 12}, "player": {"embedHtml": "<iframe/>"}});
        let playlist = Playlist::decode(input.as_object().unwrap()).unwrap();
        assert_eq!(playlist.content_details.unwrap().item_count, Some(12));
        assert_eq!(playlist.snippet, None);
    }
}
