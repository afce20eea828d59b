//! Comments and comment threads.

use super::common::{BaseList, BaseResource, Pagination};
use jiff::Timestamp;
use ytdata_codec::record;

record! {
    pub struct CommentSnippetAuthorChannelId {
        pub value: Option<String>,
    }
}

record! {
    pub struct CommentSnippet {
        pub author_display_name: Option<String> as "authorDisplayName",
        pub author_profile_image_url: Option<String> as "authorProfileImageUrl",
        pub author_channel_url: Option<String> as "authorChannelUrl",
        pub author_channel_id: Option<CommentSnippetAuthorChannelId> as "authorChannelId",
        pub channel_id: Option<String> as "channelId",
        pub video_id: Option<String> as "videoId",
        /// The comment as HTML, or as plain text if `textFormat=plainText` was requested.
        pub text_display: Option<String> as "textDisplay",
        /// Only returned to the comment's author.
        pub text_original: Option<String> as "textOriginal",
        /// Set on replies only.
        pub parent_id: Option<String> as "parentId",
        pub can_rate: Option<bool> as "canRate",
        pub viewer_rating: Option<String> as "viewerRating",
        pub like_count: Option<u64> as "likeCount",
        pub moderation_status: Option<String> as "moderationStatus",
        pub published_at: Option<Timestamp> as "publishedAt",
        pub updated_at: Option<Timestamp> as "updatedAt",
    }
}

record! {
    pub struct Comment extends { base: BaseResource } {
        pub snippet: Option<CommentSnippet>,
    }
}

record! {
    pub struct CommentListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<Comment> = Vec::new(),
    }
}

record! {
    pub struct CommentThreadSnippet {
        pub channel_id: Option<String> as "channelId",
        pub video_id: Option<String> as "videoId",
        pub top_level_comment: Option<Comment> as "topLevelComment",
        pub can_reply: Option<bool> as "canReply",
        pub total_reply_count: Option<u64> as "totalReplyCount",
        pub is_public: Option<bool> as "isPublic",
    }
}

record! {
    /// Some of the replies to a thread's top-level comment. Use the comments resource with
    /// `parentId` to get all of them.
    pub struct CommentThreadReplies {
        pub comments: Vec<Comment> = Vec::new(),
    }
}

record! {
    pub struct CommentThread extends { base: BaseResource } {
        pub snippet: Option<CommentThreadSnippet>,
        pub replies: Option<CommentThreadReplies>,
    }
}

record! {
    pub struct CommentThreadListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<CommentThread> = Vec::new(),
    }
}
