use std::sync::Arc;

use crate::models::{
    BlogPost, Entity, EntityId, EntityKind, Event, GalleryImage, MembershipSubmission, Partner,
    Resource, TeamMember,
};

use super::{Clock, ClockIds, Collection, IdSource, Seed, SystemClock};

/// Binds an entity type to the collection that holds it.
pub trait Stored: Entity {
    fn collection(store: &EntityStore) -> &Collection<Self>;

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self>;
}

/// In-memory home of every collection the site renders.
///
/// Operations never fail: `update` and `delete` on an unknown id leave the
/// contents as they were.
pub struct EntityStore {
    ids: Box<dyn IdSource>,
    clock: Arc<dyn Clock>,
    events: Collection<Event>,
    team_members: Collection<TeamMember>,
    blog_posts: Collection<BlogPost>,
    resources: Collection<Resource>,
    gallery_images: Collection<GalleryImage>,
    submissions: Collection<MembershipSubmission>,
    partners: Collection<Partner>,
}

impl EntityStore {
    pub fn new(seed: Seed) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let ids = ClockIds::new(Arc::clone(&clock));
        Self::with_sources(seed, Box::new(ids), clock)
    }

    pub fn with_sources(seed: Seed, mut ids: Box<dyn IdSource>, clock: Arc<dyn Clock>) -> Self {
        let Seed {
            events,
            team_members,
            blog_posts,
            resources,
            gallery_images,
            submissions,
            partners,
        } = seed;

        let events = Collection::new(events);
        let team_members = Collection::new(team_members);
        let blog_posts = Collection::new(blog_posts);
        let resources = Collection::new(resources);
        let gallery_images = Collection::new(gallery_images);
        let submissions = Collection::new(submissions);
        let partners = Collection::new(partners);

        let seeded_max = [
            events.max_id(),
            team_members.max_id(),
            blog_posts.max_id(),
            resources.max_id(),
            gallery_images.max_id(),
            submissions.max_id(),
            partners.max_id(),
        ]
        .into_iter()
        .flatten()
        .max();
        if let Some(max) = seeded_max {
            ids.advance_past(max);
        }

        Self {
            ids,
            clock,
            events,
            team_members,
            blog_posts,
            resources,
            gallery_images,
            submissions,
            partners,
        }
    }

    pub fn add<T: Stored>(&mut self, data: T::Create) -> EntityId {
        let inserted_at = self.clock.now();
        let id = self.ids.next_id();
        T::collection_mut(self).insert(T::assemble(id, data, inserted_at));
        log::debug!("added {} id {}", T::KIND, id);
        id
    }

    pub fn update<T: Stored>(&mut self, record: T) {
        let id = record.id();
        if T::collection_mut(self).replace(record) {
            log::debug!("updated {} id {}", T::KIND, id);
        } else {
            log::debug!("update of unknown {} id {} ignored", T::KIND, id);
        }
    }

    pub fn delete<T: Stored>(&mut self, id: EntityId) {
        if T::collection_mut(self).remove(id) {
            log::debug!("deleted {} id {}", T::KIND, id);
        }
    }

    pub fn all<T: Stored>(&self) -> Arc<Vec<T>> {
        T::collection(self).snapshot()
    }

    pub fn get<T: Stored>(&self, id: EntityId) -> Option<T> {
        T::collection(self).get(id).cloned()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Events => self.events.len(),
            EntityKind::Team => self.team_members.len(),
            EntityKind::Blog => self.blog_posts.len(),
            EntityKind::Resources => self.resources.len(),
            EntityKind::Gallery => self.gallery_images.len(),
            EntityKind::Submissions => self.submissions.len(),
            EntityKind::Partners => self.partners.len(),
        }
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new(Seed::default())
    }
}

crate::stored_collections! {
    Event => events { add_event, update_event, delete_event },
    TeamMember => team_members { add_team_member, update_team_member, delete_team_member },
    BlogPost => blog_posts { add_blog_post, update_blog_post, delete_blog_post },
    Resource => resources { add_resource, update_resource, delete_resource },
    GalleryImage => gallery_images { add_gallery_image, update_gallery_image, delete_gallery_image },
    MembershipSubmission => submissions { add_submission, update_submission, delete_submission },
    Partner => partners { add_partner, update_partner, delete_partner },
}
