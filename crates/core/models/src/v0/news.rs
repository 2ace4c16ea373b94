use crate::ExtraFields;

auto_derived!(
    /// News Article
    #[derive(Default)]
    pub struct NewsItem {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,

        /// Headline of the story
        #[cfg_attr(
            feature = "serde",
            serde(rename = "Headline", skip_serializing_if = "Option::is_none", default)
        )]
        pub headline: Option<String>,
        /// When the story was published by the wire service
        #[cfg_attr(
            feature = "serde",
            serde(rename = "PublishedAt", skip_serializing_if = "Option::is_none", default)
        )]
        pub published_at: Option<String>,
        /// Summary written during ingestion
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub summary: Option<String>,
        /// Full story text
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub story: Option<String>,

        /// Classification label
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub sector: Option<String>,
        /// Companies referenced by this story
        #[cfg_attr(feature = "serde", serde(default))]
        pub companies: Vec<String>,
        /// Whether this is global news
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_false", default)
        )]
        pub global: bool,
        /// Whether this story concerns commodities
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_false", default)
        )]
        pub commodities: bool,

        /// Market sentiment
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub sentiment: Option<String>,
        /// Estimated market impact
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub impact: Option<String>,

        /// Any other fields present on the stored document
        #[cfg_attr(feature = "serde", serde(flatten))]
        pub extra: ExtraFields,
    }
);
