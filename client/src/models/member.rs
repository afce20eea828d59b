//! Channel members and membership levels.
//!
//! Only available to the owner of a channel with memberships enabled.

use super::common::{BaseList, BaseResource, Pagination};
use jiff::Timestamp;
use ytdata_codec::record;

record! {
    pub struct MemberSnippetMemberDetails {
        pub channel_id: Option<String> as "channelId",
        pub channel_url: Option<String> as "channelUrl",
        pub display_name: Option<String> as "displayName",
        pub profile_image_url: Option<String> as "profileImageUrl",
    }
}

record! {
    pub struct MembershipsDuration {
        pub member_since: Option<Timestamp> as "memberSince",
        pub member_total_duration_months: Option<u32> as "memberTotalDurationMonths",
    }
}

record! {
    pub struct MembershipsDurationAtLevel {
        /// A membership level ID.
        pub level: Option<String>,
        pub member_since: Option<Timestamp> as "memberSince",
        pub member_total_duration_months: Option<u32> as "memberTotalDurationMonths",
    }
}

record! {
    pub struct MembershipsDetails {
        pub memberships_duration_at_level: Vec<MembershipsDurationAtLevel>
            as "membershipsDurationAtLevel" = Vec::new(),
        pub accessible_levels: Option<Vec<String>> as "accessibleLevels",
        pub memberships_duration: Option<MembershipsDuration> as "membershipsDuration",
        pub highest_accessible_level: Option<String> as "highestAccessibleLevel",
        pub highest_accessible_level_display_name: Option<String>
            as "highestAccessibleLevelDisplayName",
    }
}

record! {
    pub struct MemberSnippet {
        pub creator_channel_id: Option<String> as "creatorChannelId",
        pub member_details: Option<MemberSnippetMemberDetails> as "memberDetails",
        pub memberships_details: Option<MembershipsDetails> as "membershipsDetails",
    }
}

record! {
    /// A member of a channel. Unlike other resources, members have no `id`.
    pub struct Member {
        pub kind: Option<String>,
        pub etag: Option<String>,
        pub snippet: Option<MemberSnippet>,
    }
}

record! {
    pub struct MemberListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<Member> = Vec::new(),
    }
}

record! {
    pub struct LevelDetails {
        pub display_name: Option<String> as "displayName",
    }
}

record! {
    pub struct MembershipsLevelSnippet {
        pub creator_channel_id: Option<String> as "creatorChannelId",
        pub level_details: Option<LevelDetails> as "levelDetails",
    }
}

record! {
    pub struct MembershipsLevel extends { base: BaseResource } {
        pub snippet: Option<MembershipsLevelSnippet>,
    }
}

record! {
    pub struct MembershipsLevelListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<MembershipsLevel> = Vec::new(),
    }
}
