use crate::domain::actor::Actor;
use crate::domain::article::entity::Article;

/// The article belongs to the acting author.
pub struct OwnedByActorSpec<'a> {
    actor: &'a Actor,
    article: &'a Article,
}

impl<'a> OwnedByActorSpec<'a> {
    pub const fn new(actor: &'a Actor, article: &'a Article) -> Self {
        Self { actor, article }
    }

    pub fn is_satisfied(&self) -> bool {
        self.actor.owns(&self.article.author_id)
    }
}

pub struct CanReadReviewCommentsSpec<'a> {
    actor: &'a Actor,
    article: &'a Article,
}

impl<'a> CanReadReviewCommentsSpec<'a> {
    pub const fn new(actor: &'a Actor, article: &'a Article) -> Self {
        Self { actor, article }
    }

    pub fn is_satisfied(&self) -> bool {
        self.actor.has_capability("comments", "read:any")
            || (self.actor.has_capability("comments", "read:own")
                && OwnedByActorSpec::new(self.actor, self.article).is_satisfied())
    }
}
