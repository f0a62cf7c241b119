mod common;

#[cfg(test)]
pub mod store_tests {
    use std::fmt::Debug;
    use std::sync::Arc;

    use chrono::Duration;

    use super::common::*;

    use orgpress::models::*;
    use orgpress::store::*;

    fn assert_add_then_delete_restores<T>(store: &mut EntityStore, data: T::Create)
    where
        T: Stored + PartialEq + Debug,
    {
        let before = store.all::<T>();
        let id = store.add::<T>(data);
        assert_eq!(store.all::<T>().len(), before.len() + 1);

        store.delete::<T>(id);
        assert_eq!(*store.all::<T>(), *before, "{} not restored", T::KIND);
    }

    // Updates with a record whose id has just been deleted, so it is
    // guaranteed not to be present.
    fn assert_update_of_unknown_is_noop<T>(store: &mut EntityStore, data: T::Create)
    where
        T: Stored + PartialEq + Debug,
    {
        let id = store.add::<T>(data);
        let stale = store.get::<T>(id).unwrap();
        store.delete::<T>(id);
        let before = store.all::<T>();

        store.update::<T>(stale);

        assert_eq!(*store.all::<T>(), *before, "{} changed", T::KIND);
        assert_eq!(position_of::<T>(store, id), None);
    }

    fn position_of<T: Stored>(store: &EntityStore, id: EntityId) -> Option<usize> {
        store.all::<T>().iter().position(|item| item.id() == id)
    }

    #[test]
    fn test_add_then_delete_restores_every_collection() {
        let (mut store, _) = store_with_seed(get_seed());

        assert_add_then_delete_restores::<Event>(&mut store, new_event());
        assert_add_then_delete_restores::<TeamMember>(&mut store, new_team_member());
        assert_add_then_delete_restores::<BlogPost>(&mut store, new_blog_post());
        assert_add_then_delete_restores::<Resource>(&mut store, new_resource());
        assert_add_then_delete_restores::<GalleryImage>(&mut store, new_gallery_image());
        assert_add_then_delete_restores::<MembershipSubmission>(&mut store, new_submission());
        assert_add_then_delete_restores::<Partner>(&mut store, new_partner());
    }

    #[test]
    fn test_new_records_are_prepended_except_team_members() {
        let (mut store, _) = store_with_seed(get_seed());

        let id = store.add_event(new_event());
        assert_eq!(position_of::<Event>(&store, id), Some(0));

        let id = store.add_blog_post(new_blog_post());
        store.add_blog_post(new_blog_post());
        assert_eq!(position_of::<BlogPost>(&store, id), Some(1));

        let id = store.add_resource(new_resource());
        assert_eq!(position_of::<Resource>(&store, id), Some(0));

        let id = store.add_gallery_image(new_gallery_image());
        assert_eq!(position_of::<GalleryImage>(&store, id), Some(0));

        let id = store.add_submission(new_submission());
        assert_eq!(position_of::<MembershipSubmission>(&store, id), Some(0));

        let id = store.add_partner(new_partner());
        assert_eq!(position_of::<Partner>(&store, id), Some(0));
        assert_eq!(store.partners()[1].name, "City Library");

        let id = store.add_team_member(new_team_member());
        let team = store.team_members();
        assert_eq!(position_of::<TeamMember>(&store, id), Some(team.len() - 1));
        assert_eq!(team[0].name, "Amara Okafor");
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let (mut store, _) = store_with_seed(get_seed());
        let mut event = store.events()[0].clone();
        event.title = "Welcome Evening (moved)".into();
        event.location = "Main Hall".into();

        store.update_event(event.clone());

        assert_eq!(store.events().as_slice(), &[event]);
    }

    #[test]
    fn test_update_of_unknown_id_leaves_every_collection_unchanged() {
        let (mut store, _) = store_with_seed(get_seed());

        assert_update_of_unknown_is_noop::<Event>(&mut store, new_event());
        assert_update_of_unknown_is_noop::<TeamMember>(&mut store, new_team_member());
        assert_update_of_unknown_is_noop::<BlogPost>(&mut store, new_blog_post());
        assert_update_of_unknown_is_noop::<Resource>(&mut store, new_resource());
        assert_update_of_unknown_is_noop::<GalleryImage>(&mut store, new_gallery_image());
        assert_update_of_unknown_is_noop::<MembershipSubmission>(&mut store, new_submission());
        assert_update_of_unknown_is_noop::<Partner>(&mut store, new_partner());
    }

    #[test]
    fn test_delete_of_unknown_id_is_a_noop() {
        let (mut store, _) = store_with_seed(get_seed());
        let before = store.partners();

        store.delete_partner(12345);

        assert_eq!(*store.partners(), *before);
    }

    #[test]
    fn test_every_mutation_swaps_collection_reference() {
        let (mut store, _) = store_with_seed(get_seed());

        let snapshot = store.events();
        let id = store.add_event(new_event());
        assert!(!Arc::ptr_eq(&snapshot, &store.events()));

        let snapshot = store.events();
        let stranger = Event {
            id: 777,
            ..snapshot[0].clone()
        };
        store.update_event(stranger);
        assert!(!Arc::ptr_eq(&snapshot, &store.events()));
        assert_eq!(*snapshot, *store.events());

        let snapshot = store.events();
        store.delete_event(id);
        assert!(!Arc::ptr_eq(&snapshot, &store.events()));

        let untouched = store.partners();
        store.delete_event(1);
        assert!(Arc::ptr_eq(&untouched, &store.partners()));
    }

    #[test]
    fn test_submission_date_is_insertion_time() {
        let (mut store, clock) = store_with_seed(get_seed());
        clock.advance(Duration::minutes(5));

        let id = store.add_submission(new_submission());

        let submission = store.get::<MembershipSubmission>(id).unwrap();
        assert_eq!(submission.date, fixed_time() + Duration::minutes(5));
        assert_eq!(submission.name, "Noor Haddad");
    }

    #[test]
    fn test_new_ids_never_collide_with_seeded_ids() {
        let (mut store, _) = store_with_seed(get_seed());

        let first = store.add_gallery_image(new_gallery_image());
        let second = store.add_gallery_image(new_gallery_image());

        assert_eq!(first, 41, "seed's highest id is 40");
        assert_eq!(second, 42);
    }

    #[test]
    fn test_add_after_max_seeded_id_saturates_instead_of_overflowing() {
        let mut seed = get_seed();
        seed.events[0].id = EntityId::MAX;
        let (mut store, _) = store_with_seed(seed);

        let id = store.add_event(new_event());

        assert_eq!(id, EntityId::MAX);
        assert_eq!(store.events().len(), 2);
    }

    #[test]
    fn test_default_store_ids_are_unique_under_rapid_inserts() {
        let mut store = EntityStore::new(get_seed());

        let mut ids: Vec<EntityId> = (0..50).map(|_| store.add_event(new_event())).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_count_reports_collection_sizes() {
        let (store, _) = store_with_seed(get_seed());

        assert_eq!(store.count(EntityKind::Events), 1);
        assert_eq!(store.count(EntityKind::Team), 2);
        assert_eq!(store.count(EntityKind::Submissions), 0);
    }

    #[test]
    fn test_seed_json_defaults_missing_collections() {
        let seed = Seed::from_json(
            r#"{ "partners": [ { "id": 7, "name": "Bakery", "logo_url": "/b.png" } ] }"#,
        )
        .unwrap();

        assert!(seed.events.is_empty());
        assert_eq!(seed.partners[0].website_url, "");
        assert_eq!(seed.partners[0].id, 7);
    }

    #[test]
    fn test_seed_rejects_malformed_json() {
        let err = Seed::from_json("{ \"events\": 3 }").unwrap_err();
        assert!(matches!(err, orgpress::common::SeedError::Json(_)));
    }

    #[test]
    fn test_seed_load_reads_file_and_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, serde_json::to_string(&get_seed()).unwrap()).unwrap();

        assert_eq!(Seed::load(&path).unwrap(), get_seed());

        let missing = Seed::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(missing, orgpress::common::SeedError::Io(_)));
    }

    #[test]
    fn test_demo_seed_parses() {
        let seed = Seed::demo().unwrap();

        assert!(!seed.events.is_empty());
        assert!(!seed.submissions.is_empty());
    }

    #[test]
    fn test_entity_kind_round_trips_through_str() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>(), Ok(kind));
        }
        assert!("widgets".parse::<EntityKind>().is_err());
        assert_eq!(EntityKind::Team.placement(), Placement::Append);
        assert!(!EntityKind::Submissions.is_public());
    }
}
