//! Subscriptions.

use super::common::{BaseList, BaseResource, Pagination, ResourceId, Thumbnails};
use jiff::Timestamp;
use ytdata_codec::record;

record! {
    pub struct SubscriptionSnippet {
        pub published_at: Option<Timestamp> as "publishedAt",
        pub channel_title: Option<String> as "channelTitle",
        pub title: Option<String>,
        pub description: Option<String>,
        /// The channel subscribed to.
        pub resource_id: Option<ResourceId> as "resourceId",
        /// The subscriber's channel.
        pub channel_id: Option<String> as "channelId",
        pub thumbnails: Option<Thumbnails>,
    }
}

record! {
    pub struct SubscriptionContentDetails {
        pub total_item_count: Option<u32> as "totalItemCount",
        pub new_item_count: Option<u32> as "newItemCount",
        pub activity_type: Option<String> as "activityType",
    }
}

record! {
    pub struct SubscriptionSubscriberSnippet {
        pub title: Option<String>,
        pub description: Option<String>,
        pub channel_id: Option<String> as "channelId",
        pub thumbnails: Option<Thumbnails>,
    }
}

record! {
    pub struct Subscription extends { base: BaseResource } {
        pub snippet: Option<SubscriptionSnippet>,
        pub content_details: Option<SubscriptionContentDetails> as "contentDetails",
        pub subscriber_snippet: Option<SubscriptionSubscriberSnippet> as "subscriberSnippet",
    }
}

record! {
    pub struct SubscriptionListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<Subscription> = Vec::new(),
    }
}
