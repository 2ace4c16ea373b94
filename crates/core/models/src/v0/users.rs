auto_derived!(
    /// Toggle a news article in the saved list
    #[derive(Default)]
    pub struct DataToggleSavedNews {
        /// User Id
        #[cfg_attr(feature = "serde", serde(rename = "userId", default))]
        pub user_id: Option<String>,
        /// News Id
        #[cfg_attr(feature = "serde", serde(rename = "newsId", default))]
        pub news_id: Option<String>,
    }

    /// Toggle an event in the saved list
    #[derive(Default)]
    pub struct DataToggleSavedEvent {
        /// User Id
        #[cfg_attr(feature = "serde", serde(rename = "userId", default))]
        pub user_id: Option<String>,
        /// Event Id
        #[cfg_attr(feature = "serde", serde(rename = "eventId", default))]
        pub event_id: Option<String>,
    }

    /// Result of toggling a saved item
    pub struct ToggleSavedResponse {
        /// Whether the operation succeeded
        pub success: bool,
        /// Whether the item is now saved
        pub saved: bool,
    }
);
