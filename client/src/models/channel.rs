//! Channels.
//!
//! See: <https://developers.google.com/youtube/v3/docs/channels#resource>

use super::common::{BaseList, BaseResource, BaseTopicDetails, Localized, Pagination, Thumbnails};
use indexmap::IndexMap;
use jiff::Timestamp;
use ytdata_codec::record;

record! {
    pub struct RelatedPlaylists {
        pub likes: Option<String>,
        /// The playlist holding the channel's uploaded videos.
        pub uploads: Option<String>,
    }
}

record! {
    pub struct ChannelBrandingSettingChannel {
        pub title: Option<String>,
        pub description: Option<String>,
        /// Space-separated; keywords containing spaces are quoted.
        pub keywords: Option<String>,
        pub tracking_analytics_account_id: Option<String> as "trackingAnalyticsAccountId",
        pub moderate_comments: Option<bool> as "moderateComments",
        pub unsubscribed_trailer: Option<String> as "unsubscribedTrailer",
        pub default_language: Option<String> as "defaultLanguage",
        pub country: Option<String>,
    }
}

record! {
    pub struct ChannelBrandingSettingImage {
        pub banner_external_url: Option<String> as "bannerExternalUrl",
    }
}

record! {
    pub struct ChannelSnippet {
        pub title: Option<String>,
        pub description: Option<String>,
        /// The channel's handle, e.g. `@youtube`.
        pub custom_url: Option<String> as "customUrl",
        pub published_at: Option<Timestamp> as "publishedAt",
        pub thumbnails: Option<Thumbnails>,
        pub default_language: Option<String> as "defaultLanguage",
        pub localized: Option<Localized>,
        pub country: Option<String>,
    }
}

record! {
    pub struct ChannelContentDetails {
        pub related_playlists: Option<RelatedPlaylists> as "relatedPlaylists",
    }
}

record! {
    /// Counters for a channel. The API sends these as strings.
    pub struct ChannelStatistics {
        pub view_count: Option<u64> as "viewCount",
        /// Rounded down to three significant figures.
        pub subscriber_count: Option<u64> as "subscriberCount",
        pub hidden_subscriber_count: Option<bool> as "hiddenSubscriberCount",
        pub video_count: Option<u64> as "videoCount",
    }
}

record! {
    pub struct ChannelTopicDetails extends { base: BaseTopicDetails } {
        /// Wikipedia URLs describing the channel's content.
        pub topic_categories: Option<Vec<String>> as "topicCategories",
    }
}

record! {
    pub struct ChannelStatus {
        pub privacy_status: Option<String> as "privacyStatus",
        pub is_linked: Option<bool> as "isLinked",
        pub long_uploads_status: Option<String> as "longUploadsStatus",
        pub made_for_kids: Option<bool> as "madeForKids",
        pub self_declared_made_for_kids: Option<bool> as "selfDeclaredMadeForKids",
    }
}

record! {
    pub struct ChannelBrandingSetting {
        pub channel: Option<ChannelBrandingSettingChannel>,
        pub image: Option<ChannelBrandingSettingImage>,
    }
}

record! {
    /// Only returned to the channel's owner, and to content partners managing it.
    pub struct ChannelAuditDetails {
        pub overall_good_standing: Option<bool> as "overallGoodStanding",
        pub community_guidelines_good_standing: Option<bool> as "communityGuidelinesGoodStanding",
        pub copyright_strikes_good_standing: Option<bool> as "copyrightStrikesGoodStanding",
        pub content_id_claims_good_standing: Option<bool> as "contentIdClaimsGoodStanding",
    }
}

record! {
    pub struct ChannelContentOwnerDetails {
        pub content_owner: Option<String> as "contentOwner",
        pub time_linked: Option<Timestamp> as "timeLinked",
    }
}

record! {
    pub struct Channel extends { base: BaseResource } {
        pub snippet: Option<ChannelSnippet>,
        pub content_details: Option<ChannelContentDetails> as "contentDetails",
        pub statistics: Option<ChannelStatistics>,
        pub topic_details: Option<ChannelTopicDetails> as "topicDetails",
        pub status: Option<ChannelStatus>,
        pub branding_settings: Option<ChannelBrandingSetting> as "brandingSettings",
        pub audit_details: Option<ChannelAuditDetails> as "auditDetails",
        pub content_owner_details: Option<ChannelContentOwnerDetails> as "contentOwnerDetails",
        /// Translations of the channel's title and description, keyed by language.
        pub localizations: Option<IndexMap<String, Localized>>,
    }
}

record! {
    pub struct ChannelListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<Channel> = Vec::new(),
    }
}
