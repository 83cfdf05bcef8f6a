#[cfg(test)]
mod tests {
    use crate::core::NotificationType;
    use crate::core::capability::{
        PendingAction, RowAction, RowCapabilities, can_remove_member, can_unshare,
        member_markers,
    };
    use crate::core::model::{
        Group, GroupDetail, GroupDetailResponse, GroupsResponse, Identity, ListRef, Member,
    };
    use crate::core::service::ApiError;
    use crate::core::sync::{FetchOnce, RefreshCycle, settle_mutation};
    use crate::core::validation::{
        MAX_NAME_LENGTH, validate_group_description, validate_group_name, validate_member_name,
    };
    use uuid::Uuid;

    fn identity(username: &str) -> Identity {
        Identity {
            username: username.to_string(),
        }
    }

    fn group(owner: &str) -> Group {
        Group {
            uuid: Uuid::new_v4(),
            name: "reading-club".to_string(),
            description: "Shared reading lists".to_string(),
            owner: owner.to_string(),
        }
    }

    fn member(username: &str) -> Member {
        Member {
            username: username.to_string(),
        }
    }

    // ========================================================================
    // Capability composition
    // ========================================================================

    #[test]
    fn test_placeholder_before_identity_resolves() {
        let caps = RowCapabilities::compose(None, &group("alice"));

        assert_eq!(caps, RowCapabilities::placeholder());
        assert!(caps.action.is_none());
        assert!(!caps.can_manage);
    }

    #[test]
    fn test_owner_gets_delete_and_manage_controls() {
        let viewer = identity("alice");
        let caps = RowCapabilities::compose(Some(&viewer), &group("alice"));

        assert!(caps.is_owner);
        assert_eq!(caps.action, Some(RowAction::Delete));
        assert!(caps.can_manage);
    }

    #[test]
    fn test_member_gets_leave_without_manage_controls() {
        let viewer = identity("bob");
        let caps = RowCapabilities::compose(Some(&viewer), &group("alice"));

        assert!(!caps.is_owner);
        assert_eq!(caps.action, Some(RowAction::Leave));
        assert!(!caps.can_manage);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(RowAction::Delete.label(), "Delete");
        assert_eq!(RowAction::Leave.label(), "Leave");
    }

    #[test]
    fn test_action_consequence_texts() {
        assert_eq!(
            RowAction::Delete.consequence(),
            "All members and lists will be permanently removed"
        );
        assert_eq!(
            RowAction::Leave.consequence(),
            "You will lose access to all lists shared with this group"
        );
    }

    #[test]
    fn test_member_markers_for_viewer() {
        let viewer = identity("bob");
        let markers = member_markers(&member("bob"), "alice", Some(&viewer));

        assert!(markers.is_you);
        assert!(!markers.is_owner);
    }

    #[test]
    fn test_member_markers_for_owner() {
        let viewer = identity("bob");
        let markers = member_markers(&member("alice"), "alice", Some(&viewer));

        assert!(!markers.is_you);
        assert!(markers.is_owner);
    }

    #[test]
    fn test_member_markers_cooccur_when_viewer_owns_group() {
        // The viewer is the group's own owner: both annotations render.
        let viewer = identity("alice");
        let markers = member_markers(&member("alice"), "alice", Some(&viewer));

        assert!(markers.is_you);
        assert!(markers.is_owner);
    }

    #[test]
    fn test_member_markers_without_identity() {
        let markers = member_markers(&member("bob"), "alice", None);

        assert!(!markers.is_you);
        assert!(!markers.is_owner);
    }

    #[test]
    fn test_owner_may_remove_plain_members_only() {
        let viewer = identity("alice");
        let g = group("alice");
        let caps = RowCapabilities::compose(Some(&viewer), &g);

        let plain = member_markers(&member("bob"), &g.owner, Some(&viewer));
        let owner_row = member_markers(&member("alice"), &g.owner, Some(&viewer));

        assert!(can_remove_member(caps, plain));
        assert!(!can_remove_member(caps, owner_row));
    }

    #[test]
    fn test_plain_member_may_remove_nobody() {
        let viewer = identity("bob");
        let g = group("alice");
        let caps = RowCapabilities::compose(Some(&viewer), &g);

        let other = member_markers(&member("carol"), &g.owner, Some(&viewer));
        assert!(!can_remove_member(caps, other));
    }

    #[test]
    fn test_unshare_follows_authorized_flag() {
        let mut list = ListRef {
            name: "favourites".to_string(),
            size: 12,
            kind: "Gene".to_string(),
            authorized: true,
        };
        assert!(can_unshare(&list));

        list.authorized = false;
        assert!(!can_unshare(&list));
    }

    #[test]
    fn test_pending_action_for_owner_row() {
        let viewer = identity("alice");
        let g = group("alice");

        let pending = PendingAction::for_row(RowAction::Delete, &g, &viewer);
        assert_eq!(
            pending,
            PendingAction::DeleteGroup {
                uuid: g.uuid,
                name: g.name.clone(),
            }
        );
    }

    #[test]
    fn test_pending_action_for_member_row_carries_viewer() {
        // Leaving is a self-targeted member removal, so the pending action
        // must remember who the viewer is.
        let viewer = identity("bob");
        let g = group("alice");

        let pending = PendingAction::for_row(RowAction::Leave, &g, &viewer);
        assert_eq!(
            pending,
            PendingAction::LeaveGroup {
                uuid: g.uuid,
                name: g.name.clone(),
                username: "bob".to_string(),
            }
        );
    }

    #[test]
    fn test_confirm_request_contents() {
        let viewer = identity("alice");
        let g = group("alice");

        let request = PendingAction::for_row(RowAction::Delete, &g, &viewer).confirm_request();
        assert_eq!(request.action, "Delete group");
        assert_eq!(request.target, "reading-club");
        assert_eq!(
            request.consequence,
            "All members and lists will be permanently removed"
        );

        let viewer = identity("bob");
        let request = PendingAction::for_row(RowAction::Leave, &g, &viewer).confirm_request();
        assert_eq!(request.action, "Leave group");
        assert_eq!(
            request.consequence,
            "You will lose access to all lists shared with this group"
        );
    }

    // ========================================================================
    // Refresh cycles and fetch coalescing
    // ========================================================================

    #[test]
    fn test_cycle_token_is_current_until_next_begin() {
        let cycle = RefreshCycle::new();

        let first = cycle.begin();
        assert!(cycle.is_current(first));

        let second = cycle.begin();
        assert!(!cycle.is_current(first));
        assert!(cycle.is_current(second));
    }

    #[test]
    fn test_stale_token_stays_stale() {
        let cycle = RefreshCycle::new();
        let old = cycle.begin();
        cycle.begin();
        cycle.begin();

        assert!(!cycle.is_current(old));
    }

    #[test]
    fn test_cycle_clones_share_the_counter() {
        let cycle = RefreshCycle::new();
        let token = cycle.begin();

        let clone = cycle.clone();
        clone.begin();

        assert!(!cycle.is_current(token));
    }

    #[test]
    fn test_fetch_once_starts_exactly_one_request() {
        // N concurrent callers issue exactly one underlying request.
        let fetch = FetchOnce::new();
        let mut started = 0;
        for _ in 0..10 {
            if fetch.begin() {
                started += 1;
            }
        }
        assert_eq!(started, 1);
        assert!(fetch.started());
    }

    #[test]
    fn test_fetch_once_coalesces_across_clones() {
        let fetch = FetchOnce::new();
        let clone = fetch.clone();

        assert!(fetch.begin());
        assert!(!clone.begin());
        assert!(clone.started());
    }

    // ========================================================================
    // Mutation settlement
    // ========================================================================

    #[test]
    fn test_settled_success_refreshes_once() {
        let mut refreshes = 0;
        let mut notes = Vec::new();

        settle_mutation(
            "Delete group",
            Some("\"reading-club\" was deleted".to_string()),
            Ok::<(), ApiError>(()),
            || refreshes += 1,
            |n| notes.push(n),
        );

        assert_eq!(refreshes, 1);
        assert_eq!(notes.len(), 1);
        assert!(matches!(
            notes[0].notification_type,
            NotificationType::Success
        ));
    }

    #[test]
    fn test_settled_success_without_message_is_silent() {
        let mut refreshes = 0;
        let mut notes = Vec::new();

        settle_mutation(
            "Add member",
            None,
            Ok::<(), ApiError>(()),
            || refreshes += 1,
            |n| notes.push(n),
        );

        assert_eq!(refreshes, 1);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_settled_failure_notifies_and_never_refreshes() {
        let mut refreshes = 0;
        let mut notes = Vec::new();

        settle_mutation(
            "Add member",
            Some("never shown".to_string()),
            Err(ApiError::Service("boom".to_string())),
            || refreshes += 1,
            |n| notes.push(n),
        );

        assert_eq!(refreshes, 0);
        assert_eq!(notes.len(), 1);
        assert!(matches!(notes[0].notification_type, NotificationType::Error));
        assert_eq!(notes[0].title, "Add member");
        assert_eq!(notes[0].message, "boom");
    }

    // ========================================================================
    // Wire shapes
    // ========================================================================

    #[test]
    fn test_group_with_flat_owner() {
        let json = r#"{
            "groups": [{
                "uuid": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "name": "reading-club",
                "description": "Shared reading lists",
                "owner": "alice"
            }]
        }"#;

        let resp: GroupsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.groups.len(), 1);
        assert_eq!(resp.groups[0].owner, "alice");
        assert_eq!(resp.groups[0].name, "reading-club");
    }

    #[test]
    fn test_group_with_legacy_structured_owner() {
        let json = r#"{
            "uuid": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "name": "reading-club",
            "description": "",
            "owner": {"name": "Alice A.", "username": "alice", "email": "a@example.org"}
        }"#;

        let g: Group = serde_json::from_str(json).unwrap();
        assert_eq!(g.owner, "alice");
    }

    #[test]
    fn test_member_accepts_legacy_name_field() {
        let m: Member = serde_json::from_str(r#"{"name": "bob"}"#).unwrap();
        assert_eq!(m.username, "bob");

        let m: Member = serde_json::from_str(r#"{"username": "bob"}"#).unwrap();
        assert_eq!(m.username, "bob");
    }

    #[test]
    fn test_detail_response_flattens_group_and_detail() {
        let json = r#"{
            "group": {
                "uuid": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "name": "reading-club",
                "description": "Shared reading lists",
                "owner": "alice",
                "members": [{"name": "alice"}, {"name": "bob"}],
                "lists": [
                    {"name": "favourites", "size": 12, "type": "Gene", "authorized": true}
                ]
            }
        }"#;

        let resp: GroupDetailResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.group.group.owner, "alice");
        assert_eq!(resp.group.detail.members.len(), 2);
        assert_eq!(resp.group.detail.members[1].username, "bob");
        assert_eq!(resp.group.detail.lists[0].name, "favourites");
        assert!(resp.group.detail.lists[0].authorized);
    }

    #[test]
    fn test_detail_defaults_when_fields_missing() {
        let json = r#"{
            "group": {
                "uuid": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                "name": "reading-club",
                "description": "",
                "owner": "alice"
            }
        }"#;

        let resp: GroupDetailResponse = serde_json::from_str(json).unwrap();
        assert!(resp.group.detail.members.is_empty());
        assert!(resp.group.detail.lists.is_empty());
    }

    #[test]
    fn test_list_label_format() {
        let list = ListRef {
            name: "favourites".to_string(),
            size: 12,
            kind: "Gene".to_string(),
            authorized: false,
        };
        assert_eq!(list.label(), "favourites (12 Gene)");
    }

    #[test]
    fn test_detail_summary_format() {
        let detail = GroupDetail {
            members: vec![member("alice"), member("bob")],
            lists: vec![ListRef {
                name: "favourites".to_string(),
                size: 12,
                kind: "Gene".to_string(),
                authorized: true,
            }],
        };
        assert_eq!(detail.summary(), "2 members, 1 lists");
    }

    // ========================================================================
    // Dialog field validation
    // ========================================================================

    #[test]
    fn test_group_name_required() {
        let err = validate_group_name("   ").unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_group_name_length_limit() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_group_name(&long).is_err());
        assert!(validate_group_name(&"x".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_group_description_required() {
        assert!(validate_group_description("").is_err());
        assert!(validate_group_description("Shared reading lists").is_ok());
    }

    #[test]
    fn test_member_name_required() {
        let err = validate_member_name("").unwrap_err();
        assert_eq!(err.to_string(), "Username is required");
    }
}
