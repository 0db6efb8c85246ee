use std::collections::HashSet;

use crate::domain::review::entity::Review;
use crate::domain::user::value_objects::{Capability, UserId};

/// Reviews may be edited or removed by their author (with the `:own`
/// capability) or by moderators.
pub struct CanModifyReviewSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    review: &'a Review,
    user_id: UserId,
    action: &'static str,
}

impl<'a> CanModifyReviewSpec<'a> {
    pub const fn for_update(
        capabilities: &'a HashSet<Capability>,
        review: &'a Review,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            review,
            user_id,
            action: "update:own",
        }
    }

    pub const fn for_delete(
        capabilities: &'a HashSet<Capability>,
        review: &'a Review,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            review,
            user_id,
            action: "delete:own",
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_capability("reviews", "moderate")
            || (self.has_capability("reviews", self.action)
                && self.review.author.id == self.user_id)
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}
