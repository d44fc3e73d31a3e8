//! ProjectListing - Which listing query to run

use serde_json::json;

use crate::operations::{GraphqlRequest, Operation};

/// Page size of the unfiltered listing
pub const DEFAULT_PAGE_SIZE: u32 = 4;

/// Listing request chosen by the caller
///
/// Pagination is the caller's job: feed back the `endCursor` of the
/// previous page to get the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectListing {
    /// Projects of one category, starting after `end_cursor`
    Filtered {
        category: String,
        end_cursor: Option<String>,
    },
    /// First `page_size` projects of any category
    Unfiltered { page_size: u32 },
}

impl Default for ProjectListing {
    fn default() -> Self {
        Self::Unfiltered {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProjectListing {
    pub fn filtered(category: impl Into<String>, end_cursor: Option<String>) -> Self {
        Self::Filtered {
            category: category.into(),
            end_cursor,
        }
    }

    /// Pick the listing from optional arguments
    ///
    /// A missing or empty category selects the unfiltered listing; the cursor
    /// only applies to the filtered one.
    pub fn from_args(category: Option<&str>, end_cursor: Option<&str>) -> Self {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => Self::filtered(category, end_cursor.map(str::to_string)),
            None => Self::default(),
        }
    }

    pub fn into_request(self) -> GraphqlRequest {
        match self {
            Self::Filtered {
                category,
                end_cursor,
            } => {
                let mut variables = json!({ "category": category });
                if let Some(cursor) = end_cursor {
                    variables["endCursor"] = json!(cursor);
                }
                GraphqlRequest::new(Operation::ProjectsByCategory, variables)
            }
            Self::Unfiltered { page_size } => {
                GraphqlRequest::new(Operation::AllProjects, json!({ "first": page_size }))
            }
        }
    }
}
