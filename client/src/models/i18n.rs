//! Languages and regions the YouTube site supports.

use super::common::{BaseList, BaseResource, Pagination};
use ytdata_codec::record;

record! {
    pub struct I18nRegionSnippet {
        /// Two-letter ISO country code.
        pub gl: Option<String>,
        pub name: Option<String>,
    }
}

record! {
    pub struct I18nRegion extends { base: BaseResource } {
        pub snippet: Option<I18nRegionSnippet>,
    }
}

record! {
    pub struct I18nRegionListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<I18nRegion> = Vec::new(),
    }
}

record! {
    pub struct I18nLanguageSnippet {
        /// BCP-47 language tag.
        pub hl: Option<String>,
        pub name: Option<String>,
    }
}

record! {
    pub struct I18nLanguage extends { base: BaseResource } {
        pub snippet: Option<I18nLanguageSnippet>,
    }
}

record! {
    pub struct I18nLanguageListResponse extends { base: BaseList, page: Pagination } {
        pub items: Vec<I18nLanguage> = Vec::new(),
    }
}
