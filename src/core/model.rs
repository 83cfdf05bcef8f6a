//! Wire-format data model for the group service.
//!
//! The legacy service was inconsistent about two shapes: `owner` arrived
//! either as a bare username or as a structured profile map, and member
//! records used `name` and `username` interchangeably. The flat username is
//! canonical here; the deserializers accept the legacy variants.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// The current user's identity, resolved once per page session and shared
/// read-only with every component that compares against a group owner or
/// member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

/// Group summary as returned by the collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Owner username (canonical flat shape).
    #[serde(deserialize_with = "owner_username")]
    pub owner: String,
}

/// A member of exactly one group. The group's owner is always itself a
/// member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(alias = "name")]
    pub username: String,
}

/// Reference to a list shared with a group.
///
/// `authorized` is the viewer's permission to unshare this list, not a
/// property of the list itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRef {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub authorized: bool,
}

impl ListRef {
    /// Display label: `"<name> (<size> <type>)"`.
    pub fn label(&self) -> String {
        format!("{} ({} {})", self.name, self.size, self.kind)
    }
}

/// Extended per-group detail, fetched separately from the group summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupDetail {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub lists: Vec<ListRef>,
}

impl GroupDetail {
    /// Toggle label on the row's details cell: `"<N> members, <M> lists"`.
    pub fn summary(&self) -> String {
        format!(
            "{} members, {} lists",
            self.members.len(),
            self.lists.len()
        )
    }
}

/// Full group payload from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailedGroup {
    #[serde(flatten)]
    pub group: Group,
    #[serde(flatten)]
    pub detail: GroupDetail,
}

// ============================================================================
// Response envelopes
// ============================================================================

/// `GET groups` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupsResponse {
    pub groups: Vec<Group>,
}

/// `GET groups/{uuid}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupDetailResponse {
    pub group: DetailedGroup,
}

/// Identity service envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct WhoamiResponse {
    pub user: Identity,
}

/// List catalog envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCatalogResponse {
    pub lists: Vec<ListRef>,
}

/// Accept both the canonical flat owner username and the legacy structured
/// profile map.
fn owner_username<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OwnerRepr {
        Flat(String),
        Profile { username: String },
    }

    Ok(match OwnerRepr::deserialize(deserializer)? {
        OwnerRepr::Flat(username) => username,
        OwnerRepr::Profile { username } => username,
    })
}
