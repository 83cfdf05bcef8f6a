//! Capability composition: deciding which controls a group row may show.
//!
//! Capabilities are recomputed per render from the freshest identity + group
//! + detail triple. They are never cached on the `Group`, since ownership and
//! list authorization can change between refresh cycles.

use uuid::Uuid;

use crate::core::model::{Group, Identity, ListRef, Member};

/// The single action control on a row header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// The viewer owns the group and may delete it.
    Delete,
    /// The viewer is a plain member and may leave the group.
    Leave,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Delete => "Delete",
            RowAction::Leave => "Leave",
        }
    }

    /// Consequence text shown in the blocking confirmation dialog.
    pub fn consequence(&self) -> &'static str {
        match self {
            RowAction::Delete => "All members and lists will be permanently removed",
            RowAction::Leave => "You will lose access to all lists shared with this group",
        }
    }
}

/// What a composed row may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCapabilities {
    /// Whether the viewer owns this group.
    pub is_owner: bool,
    /// The row's action control; `None` while identity is unresolved.
    pub action: Option<RowAction>,
    /// Whether the "Add member" / "Add list" controls exist at all.
    pub can_manage: bool,
}

impl RowCapabilities {
    /// Placeholder state rendered synchronously before identity resolves.
    pub fn placeholder() -> Self {
        Self {
            is_owner: false,
            action: None,
            can_manage: false,
        }
    }

    /// Compose capabilities from the resolved identity and the group summary.
    ///
    /// An unresolved or anonymous identity degrades to the placeholder: no
    /// owner affordances, no action control.
    pub fn compose(identity: Option<&Identity>, group: &Group) -> Self {
        let Some(identity) = identity else {
            return Self::placeholder();
        };
        let is_owner = group.owner == identity.username;
        Self {
            is_owner,
            action: Some(if is_owner {
                RowAction::Delete
            } else {
                RowAction::Leave
            }),
            can_manage: is_owner,
        }
    }
}

/// Markers rendered next to one member row. Both apply when the viewer is
/// the group's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberMarkers {
    /// The member is the viewer ("you").
    pub is_you: bool,
    /// The member owns the group ("(owner)").
    pub is_owner: bool,
}

/// Compute the markers for one member of a group.
pub fn member_markers(
    member: &Member,
    group_owner: &str,
    viewer: Option<&Identity>,
) -> MemberMarkers {
    MemberMarkers {
        is_you: viewer.is_some_and(|v| v.username == member.username),
        is_owner: member.username == group_owner,
    }
}

/// Whether the viewer may remove this member row: owners remove anyone but
/// themselves, plain members remove nobody (they leave through the row
/// action instead).
pub fn can_remove_member(caps: RowCapabilities, markers: MemberMarkers) -> bool {
    caps.can_manage && !markers.is_owner
}

/// Whether the viewer may unshare this list from the group. Per-viewer, not
/// a property of the list.
pub fn can_unshare(list: &ListRef) -> bool {
    list.authorized
}

/// A mutation awaiting modal confirmation. Accepting fires the request
/// immediately; dismissing discards it.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    DeleteGroup { uuid: Uuid, name: String },
    LeaveGroup { uuid: Uuid, name: String, username: String },
}

impl PendingAction {
    pub fn for_row(action: RowAction, group: &Group, viewer: &Identity) -> Self {
        match action {
            RowAction::Delete => PendingAction::DeleteGroup {
                uuid: group.uuid,
                name: group.name.clone(),
            },
            RowAction::Leave => PendingAction::LeaveGroup {
                uuid: group.uuid,
                name: group.name.clone(),
                username: viewer.username.clone(),
            },
        }
    }

    fn action(&self) -> RowAction {
        match self {
            PendingAction::DeleteGroup { .. } => RowAction::Delete,
            PendingAction::LeaveGroup { .. } => RowAction::Leave,
        }
    }

    /// The typed confirmation value the generic confirm dialog consumes.
    pub fn confirm_request(&self) -> ConfirmRequest {
        let (action, target) = match self {
            PendingAction::DeleteGroup { name, .. } => ("Delete group", name),
            PendingAction::LeaveGroup { name, .. } => ("Leave group", name),
        };
        ConfirmRequest {
            action,
            target: target.clone(),
            consequence: self.action().consequence(),
        }
    }
}

/// Typed confirmation request: what is about to happen, to what, and with
/// which consequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub action: &'static str,
    pub target: String,
    pub consequence: &'static str,
}
