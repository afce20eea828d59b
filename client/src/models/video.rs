//! Videos.
//!
//! See: <https://developers.google.com/youtube/v3/docs/videos#resource>

use super::common::{
    BaseList, BaseResource, BaseTopicDetails, Localized, Pagination, Player, Thumbnails,
};
use indexmap::IndexMap;
use jiff::Timestamp;
use ytdata_codec::{InvalidDurationError, Value, parse_duration, record};

record! {
    /// Countries where a video is (or is not) viewable, as ISO 3166-1 alpha-2 codes.
    pub struct RegionRestriction {
        pub allowed: Option<Vec<String>>,
        pub blocked: Option<Vec<String>>,
    }
}

record! {
    /// The ratings a video received under various rating schemes, one field per scheme.
    pub struct ContentRating {
        pub acb_rating: Option<String> as "acbRating",
        pub agcom_rating: Option<String> as "agcomRating",
        pub anatel_rating: Option<String> as "anatelRating",
        pub bbfc_rating: Option<String> as "bbfcRating",
        pub bfvc_rating: Option<String> as "bfvcRating",
        pub bmukk_rating: Option<String> as "bmukkRating",
        pub catv_rating: Option<String> as "catvRating",
        pub catvfr_rating: Option<String> as "catvfrRating",
        pub cbfc_rating: Option<String> as "cbfcRating",
        pub ccc_rating: Option<String> as "cccRating",
        pub cce_rating: Option<String> as "cceRating",
        pub chfilm_rating: Option<String> as "chfilmRating",
        pub chvrs_rating: Option<String> as "chvrsRating",
        pub cicf_rating: Option<String> as "cicfRating",
        pub cna_rating: Option<String> as "cnaRating",
        pub cnc_rating: Option<String> as "cncRating",
        pub csa_rating: Option<String> as "csaRating",
        pub cscf_rating: Option<String> as "cscfRating",
        pub czfilm_rating: Option<String> as "czfilmRating",
        pub djctq_rating: Option<String> as "djctqRating",
        pub djctq_rating_reasons: Option<Vec<String>> as "djctqRatingReasons",
        pub ecbmct_rating: Option<String> as "ecbmctRating",
        pub eefilm_rating: Option<String> as "eefilmRating",
        pub egfilm_rating: Option<String> as "egfilmRating",
        pub eirin_rating: Option<String> as "eirinRating",
        pub fcbm_rating: Option<String> as "fcbmRating",
        pub fco_rating: Option<String> as "fcoRating",
        pub fpb_rating: Option<String> as "fpbRating",
        pub fpb_rating_reasons: Option<Vec<String>> as "fpbRatingReasons",
        pub fsk_rating: Option<String> as "fskRating",
        pub grfilm_rating: Option<String> as "grfilmRating",
        pub icaa_rating: Option<String> as "icaaRating",
        pub ifco_rating: Option<String> as "ifcoRating",
        pub ilfilm_rating: Option<String> as "ilfilmRating",
        pub incaa_rating: Option<String> as "incaaRating",
        pub kfcb_rating: Option<String> as "kfcbRating",
        pub kijkwijzer_rating: Option<String> as "kijkwijzerRating",
        pub kmrb_rating: Option<String> as "kmrbRating",
        pub lsf_rating: Option<String> as "lsfRating",
        pub mccaa_rating: Option<String> as "mccaaRating",
        pub mccyp_rating: Option<String> as "mccypRating",
        pub mcst_rating: Option<String> as "mcstRating",
        pub mda_rating: Option<String> as "mdaRating",
        pub medietilsynet_rating: Option<String> as "medietilsynetRating",
        pub meku_rating: Option<String> as "mekuRating",
        pub mibac_rating: Option<String> as "mibacRating",
        pub moc_rating: Option<String> as "mocRating",
        pub moctw_rating: Option<String> as "moctwRating",
        pub mpaa_rating: Option<String> as "mpaaRating",
        pub mpaat_rating: Option<String> as "mpaatRating",
        pub mtrcb_rating: Option<String> as "mtrcbRating",
        pub nbc_rating: Option<String> as "nbcRating",
        pub nfrc_rating: Option<String> as "nfrcRating",
        pub nfvcb_rating: Option<String> as "nfvcbRating",
        pub nkclv_rating: Option<String> as "nkclvRating",
        pub oflc_rating: Option<String> as "oflcRating",
        pub pefilm_rating: Option<String> as "pefilmRating",
        pub resorteviolencia_rating: Option<String> as "resorteviolenciaRating",
        pub rtc_rating: Option<String> as "rtcRating",
        pub rte_rating: Option<String> as "rteRating",
        pub russia_rating: Option<String> as "russiaRating",
        pub skfilm_rating: Option<String> as "skfilmRating",
        pub smais_rating: Option<String> as "smaisRating",
        pub smsa_rating: Option<String> as "smsaRating",
        pub tvpg_rating: Option<String> as "tvpgRating",
        pub yt_rating: Option<String> as "ytRating",
    }
}

record! {
    pub struct VideoContentDetails {
        /// ISO 8601 duration, e.g. `PT15M33S`. See [`VideoContentDetails::seconds`].
        pub duration: Option<String>,
        /// `2d` or `3d`.
        pub dimension: Option<String>,
        /// `hd` or `sd`.
        pub definition: Option<String>,
        /// `"true"` or `"false"`; the API sends a string.
        pub caption: Option<String>,
        pub licensed_content: Option<bool> as "licensedContent",
        pub region_restriction: Option<RegionRestriction> as "regionRestriction",
        pub content_rating: Option<ContentRating> as "contentRating",
        pub projection: Option<String>,
        pub has_custom_thumbnail: Option<bool> as "hasCustomThumbnail",
    }
}

impl VideoContentDetails {
    /// The video's length in seconds, if the API reported one.
    pub fn seconds(&self) -> Result<Option<u64>, InvalidDurationError> {
        match self.duration.as_deref() {
            None | Some("") => Ok(None),
            Some(duration) => parse_duration(duration).map(Some),
        }
    }
}

record! {
    pub struct VideoTopicDetails extends { base: BaseTopicDetails } {
        pub relevant_topic_ids: Option<Vec<String>> as "relevantTopicIds",
        pub topic_categories: Option<Vec<String>> as "topicCategories",
    }
}

impl VideoTopicDetails {
    /// The video's topics.
    ///
    /// `topicIds` is no longer filled in by the API; topics now come in `relevantTopicIds`, which
    /// is used when `topicIds` is absent.
    pub fn topic_ids(&self) -> Option<&[String]> {
        self.base
            .topic_ids
            .as_deref()
            .or(self.relevant_topic_ids.as_deref())
    }
}

record! {
    pub struct VideoSnippet {
        pub published_at: Option<Timestamp> as "publishedAt",
        pub channel_id: Option<String> as "channelId",
        pub title: Option<String>,
        pub description: Option<String>,
        pub thumbnails: Option<Thumbnails>,
        pub channel_title: Option<String> as "channelTitle",
        pub tags: Option<Vec<String>>,
        pub category_id: Option<String> as "categoryId",
        /// `live`, `upcoming`, or `none`.
        pub live_broadcast_content: Option<String> as "liveBroadcastContent",
        pub default_language: Option<String> as "defaultLanguage",
        pub localized: Option<Localized>,
        pub default_audio_language: Option<String> as "defaultAudioLanguage",
    }
}

record! {
    pub struct VideoStatistics {
        pub view_count: u64 as "viewCount",
        pub like_count: Option<u64> as "likeCount",
        /// Only visible to the video's owner.
        pub dislike_count: Option<u64> as "dislikeCount",
        pub comment_count: Option<u64> as "commentCount",
    }
}

record! {
    pub struct VideoStatus {
        pub upload_status: Option<String> as "uploadStatus",
        pub failure_reason: Option<String> as "failureReason",
        pub rejection_reason: Option<String> as "rejectionReason",
        pub privacy_status: Option<String> as "privacyStatus",
        /// When a private video is scheduled to become public.
        pub publish_at: Option<Timestamp> as "publishAt",
        pub license: Option<String>,
        pub embeddable: Option<bool>,
        pub public_stats_viewable: Option<bool> as "publicStatsViewable",
        pub made_for_kids: Option<bool> as "madeForKids",
        pub self_declared_made_for_kids: Option<bool> as "selfDeclaredMadeForKids",
    }
}

record! {
    pub struct VideoLiveStreamingDetails {
        pub actual_start_time: Option<Timestamp> as "actualStartTime",
        pub actual_end_time: Option<Timestamp> as "actualEndTime",
        pub scheduled_start_time: Option<Timestamp> as "scheduledStartTime",
        pub scheduled_end_time: Option<Timestamp> as "scheduledEndTime",
        pub concurrent_viewers: Option<u64> as "concurrentViewers",
        pub active_live_chat_id: Option<String> as "activeLiveChatId",
    }
}

record! {
    pub struct Video extends { base: BaseResource } {
        pub snippet: Option<VideoSnippet>,
        pub content_details: Option<VideoContentDetails> as "contentDetails",
        pub status: Option<VideoStatus>,
        pub statistics: Option<VideoStatistics>,
        pub topic_details: Option<VideoTopicDetails> as "topicDetails",
        pub player: Option<Player>,
        pub live_streaming_details: Option<VideoLiveStreamingDetails> as "liveStreamingDetails",
        pub localizations: Option<IndexMap<String, Localized>>,
        pub recording_details: Option<Value> as "recordingDetails",
        /// Owner-only parts, kept as the JSON the API returned.
        pub file_details: Option<Value> as "fileDetails",
        pub processing_details: Option<Value> as "processingDetails",
        pub suggestions: Option<Value>,
    }
}

record! {
    pub struct VideoListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<Video> = Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use ytdata_codec::Record;

    const THUMB_URL: &str = "https://www.youtube.com/watch?v=123456";

    fn video() -> Value {
        let thumb = json!({"url": THUMB_URL, "width": 1280, "height": 720});
        json!({
            "kind": "youtube#video",
            "etag": "",
            "id": "123456",
            "snippet": {
                "publishedAt": "2024-01-01T00:00:00Z",
                "channelId": "123456",
                "title": "Test",
                "description": "Test",
                "thumbnails": {"default": thumb, "medium": thumb, "high": thumb}
            },
            "contentDetails": {
                "duration": "PT1H1M1S",
                "dimension": "hd",
                "definition": "hd",
                "caption": "true",
                "licensedContent": true,
                "regionRestriction": {"allowed": ["US"]}
            },
            "statistics": {"viewCount": "1000", "likeCount": "1000", "commentCount": 1000},
            "status": {"uploadStatus": "uploaded", "privacyStatus": "public"},
            "topicDetails": {"topicCategories": ["123456"]},
            "player": {"embedHtml": ""}
        })
    }

    #[test]
    fn decode_video() {
        let video = Video::decode(video().as_object().unwrap()).unwrap();
        assert_eq!(video.base.id, "123456");
        assert_eq!(video.base.kind.as_deref(), Some("youtube#video"));

        let snippet = video.snippet.as_ref().unwrap();
        assert_eq!(snippet.published_at, Some("2024-01-01T00:00:00Z".parse().unwrap()));
        assert_eq!(snippet.title.as_deref(), Some("Test"));
        let default = snippet.thumbnails.as_ref().unwrap().default.as_ref().unwrap();
        assert_eq!(default.url.as_deref(), Some(THUMB_URL));
        assert_eq!((default.width, default.height), (Some(1280), Some(720)));

        let details = video.content_details.as_ref().unwrap();
        assert_eq!(details.caption.as_deref(), Some("true"));
        assert_eq!(details.licensed_content, Some(true));
        assert_eq!(
            details.region_restriction.as_ref().unwrap().allowed,
            Some(vec!["US".to_string()])
        );
        assert_eq!(details.seconds().unwrap(), Some(3661));

        let stats = video.statistics.as_ref().unwrap();
        assert_eq!(stats.view_count, 1000);
        assert_eq!(stats.like_count, Some(1000));
        assert_eq!(stats.comment_count, Some(1000));
        assert_eq!(stats.dislike_count, None);

        assert_eq!(
            video.status.as_ref().unwrap().privacy_status.as_deref(),
            Some("public")
        );
        assert_eq!(
            video.player.as_ref().unwrap().embed_html.as_deref(),
            Some("")
        );
        assert_eq!(video.live_streaming_details, None);
    }

    #[test]
    fn encode_video() {
        let video = Video::decode(video().as_object().unwrap()).unwrap();
        let map = video.encode().unwrap();
        for part in ["snippet", "statistics", "status", "topicDetails", "player", "contentDetails"] {
            assert!(map[part].is_object(), "{part}");
        }
        assert_eq!(map["snippet"]["publishedAt"], "2024-01-01T00:00:00Z");
        assert_eq!(map["snippet"]["thumbnails"]["default"]["width"], 1280);
        assert_eq!(map["snippet"]["thumbnails"]["medium"]["url"], THUMB_URL);
        assert_eq!(map["statistics"]["viewCount"], 1000);
        assert_eq!(map["liveStreamingDetails"], Value::Null);

        let again = Video::decode(&map).unwrap();
        assert_eq!(again, video);
    }

    #[test]
    fn statistics_need_a_view_count() {
        let mut input = video();
        input["statistics"] = json!({"likeCount": "3"});
        let e = Video::decode(input.as_object().unwrap()).unwrap_err();
        assert_snapshot!(e.to_string(), @"cannot decode field `viewCount` of `VideoStatistics` at `statistics.viewCount`: required field is missing");
    }

    #[test]
    fn duration_helper() {
        let mut details = VideoContentDetails::default();
        assert_eq!(details.seconds().unwrap(), None);
        details.duration = Some("P1DT2H3M4S".into());
        assert_eq!(details.seconds().unwrap(), Some(93784));
        details.duration = Some("1:02:03".into());
        assert_eq!(details.seconds().unwrap_err().input(), "1:02:03");
    }

    #[test]
    fn topic_ids_fall_back_to_relevant_topics() {
        let input = json!({"relevantTopicIds": ["/m/04rlf"], "topicCategories": []});
        let topics = VideoTopicDetails::decode(input.as_object().unwrap()).unwrap();
        assert_eq!(topics.topic_ids(), Some(&["/m/04rlf".to_string()][..]));

        let input = json!({"topicIds": ["/m/0"], "relevantTopicIds": ["/m/1"]});
        let topics = VideoTopicDetails::decode(input.as_object().unwrap()).unwrap();
        assert_eq!(topics.topic_ids(), Some(&["/m/0".to_string()][..]));
    }

    #[test]
    fn content_ratings() {
        let input = json!({
            "ytRating": "ytAgeRestricted",
            "djctqRating": "djctq14",
            "djctqRatingReasons": ["djctqViolence", "djctqDrugs"],
            "mpaaRating": "mpaaPg13"
        });
        let rating = ContentRating::decode(input.as_object().unwrap()).unwrap();
        assert_eq!(rating.yt_rating.as_deref(), Some("ytAgeRestricted"));
        assert_eq!(rating.djctq_rating_reasons.as_ref().map(Vec::len), Some(2));
        assert_eq!(rating.mpaa_rating.as_deref(), Some("mpaaPg13"));
        assert_eq!(rating.bbfc_rating, None);
    }
}
