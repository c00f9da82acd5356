//! Author GraphQL type
//!
//! Scalar fields are read straight off the record; only `reviews` has a
//! resolver of its own.

use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::graphql::nullable_on_store_error;
use crate::models::Author as AuthorModel;
use crate::repositories::ReviewRepository;

use super::review::Review;

/// Review author exposed via GraphQL
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    /// Unique author identifier
    pub id: ID,
    /// Display name
    pub name: String,
    /// Whether the author is verified
    pub verified: bool,
}

#[ComplexObject]
impl Author {
    /// Reviews written by this author
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<Review>>> {
        tracing::debug!(author_id = %self.id.as_str(), "Resolving Author.reviews");
        let repo = ctx.data::<ReviewRepository>()?;
        let reviews = nullable_on_store_error(ctx, repo.find_by_author(&self.id));
        Ok(reviews.map(|reviews| reviews.into_iter().map(Review::from).collect()))
    }
}

impl From<AuthorModel> for Author {
    fn from(author: AuthorModel) -> Self {
        Self {
            id: ID(author.id),
            name: author.name,
            verified: author.verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_from_model() {
        let author: Author = AuthorModel {
            id: "4".to_string(),
            name: "luigi".to_string(),
            verified: false,
        }
        .into();

        assert_eq!(author.id.as_str(), "4");
        assert_eq!(author.name, "luigi");
        assert!(!author.verified);
    }
}
