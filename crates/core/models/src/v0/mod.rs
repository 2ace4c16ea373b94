mod companies;
mod events;
mod news;
mod users;

pub use companies::*;
pub use events::*;
pub use news::*;
pub use users::*;

auto_derived!(
    /// Generic success response
    pub struct SuccessResponse {
        /// Whether the operation succeeded
        pub success: bool,
    }

    /// Counted list of items
    pub struct ListResponse<T> {
        /// Whether the operation succeeded
        pub success: bool,
        /// Number of items in `data`
        pub count: usize,
        /// Items
        pub data: Vec<T>,
    }
);

impl SuccessResponse {
    pub fn ok() -> SuccessResponse {
        SuccessResponse { success: true }
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        ListResponse {
            success: true,
            count: data.len(),
            data,
        }
    }
}
