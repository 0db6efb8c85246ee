use std::collections::HashSet;

use crate::domain::comment::entity::Comment;
use crate::domain::user::value_objects::{Capability, UserId};

pub struct CanModifyCommentSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    comment: &'a Comment,
    user_id: UserId,
    action: &'static str,
}

impl<'a> CanModifyCommentSpec<'a> {
    pub const fn for_update(
        capabilities: &'a HashSet<Capability>,
        comment: &'a Comment,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            comment,
            user_id,
            action: "update:own",
        }
    }

    pub const fn for_delete(
        capabilities: &'a HashSet<Capability>,
        comment: &'a Comment,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            comment,
            user_id,
            action: "delete:own",
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_capability("comments", "moderate")
            || (self.has_capability("comments", self.action)
                && self.comment.author.id == self.user_id)
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}
