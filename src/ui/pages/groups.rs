//! Groups page component
//!
//! Displays the viewer's group memberships in a table kept consistent with
//! server state. The table is a direct function of the latest collection
//! fetch: every successful mutation tears it down and rebuilds it, nothing
//! is patched in place.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys;
use leptos_router::components::A;

use crate::core::capability::{
    MemberMarkers, PendingAction, RowAction, RowCapabilities, can_remove_member, can_unshare,
    member_markers,
};
use crate::core::model::{Group, GroupDetail, ListRef};
use crate::core::service;
use crate::core::sync::{CycleToken, RefreshCycle, settle_mutation};
use crate::core::validation::{
    validate_group_description, validate_group_name, validate_member_name,
};
use crate::ui::common::{BaseModal, ConfirmDialog, ErrorMessage, InfoMessage, InlineSpinner, LoadingSpinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::identity::{IdentityState, use_identity_context};
use crate::ui::notifications::{NotificationManager, NotificationsContainer};
use crate::ui::theme::use_theme_context;

/// Groups page component
#[component]
pub fn GroupsPage() -> impl IntoView {
    let theme = use_theme_context();
    let identity_ctx = use_identity_context();
    let identity = identity_ctx.state;
    let notifications = NotificationManager::new();

    // Table state
    let groups = RwSignal::new(Vec::<Group>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    // Refresh generation: rows and detail fetchers spawned in one cycle
    // carry its token and go inert once a newer cycle begins.
    let cycle = RefreshCycle::new();
    let row_token = RwSignal::new(cycle.begin());

    // Modal state
    let show_new_group = RwSignal::new(false);
    let add_member_target = RwSignal::new(None::<Group>);
    let add_list_target = RwSignal::new(None::<Group>);
    let pending_action = RwSignal::new(None::<PendingAction>);

    // The single re-entry point that rebuilds the whole table: invoked at
    // page load and after every successful mutation.
    let refresh = {
        let cycle = cycle.clone();
        Callback::new(move |_| {
            let token = cycle.begin();
            row_token.set(token);
            groups.set(Vec::new());
            loading.set(true);
            load_error.set(None);

            let cycle = cycle.clone();
            spawn_local(async move {
                let result = service::fetch_groups().await;
                if !cycle.is_current(token) {
                    // A newer refresh owns the table now.
                    return;
                }
                match result {
                    Ok(list) => groups.set(list),
                    Err(err) => load_error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    // Resolve identity once for the page session; rows share the result.
    {
        let identity_ctx = identity_ctx.clone();
        Effect::new(move |_| identity_ctx.ensure_loaded());
    }

    // Initial table load
    Effect::new(move |_| refresh.run(()));

    // Row callbacks
    let on_action = Callback::new(move |pending: PendingAction| {
        pending_action.set(Some(pending));
    });
    let on_add_member = Callback::new(move |group: Group| {
        add_member_target.set(Some(group));
    });
    let on_add_list = Callback::new(move |group: Group| {
        add_list_target.set(Some(group));
    });
    let on_remove_member = Callback::new(move |(group, username): (Group, String)| {
        spawn_local(async move {
            let result = service::remove_member(group.uuid, &username).await;
            settle_mutation(
                "Remove member",
                Some(format!("Removed {} from \"{}\"", username, group.name)),
                result,
                || refresh.run(()),
                |n| notifications.notify(n),
            );
        });
    });
    let on_unshare = Callback::new(move |(group, name): (Group, String)| {
        spawn_local(async move {
            let result = service::unshare_list(group.uuid, &name).await;
            settle_mutation(
                "Remove list",
                Some(format!("Unshared \"{}\" from \"{}\"", name, group.name)),
                result,
                || refresh.run(()),
                |n| notifications.notify(n),
            );
        });
    });

    // Delete/Leave confirmation wiring. Accepting fires the request
    // immediately; the dialog itself never talks to the service.
    let confirm_request = Signal::derive(move || {
        pending_action.get().map(|p| p.confirm_request())
    });
    let on_confirm = Callback::new(move |_| {
        let Some(action) = pending_action.get_untracked() else {
            return;
        };
        pending_action.set(None);
        spawn_local(async move {
            match action {
                PendingAction::DeleteGroup { uuid, name } => {
                    let result = service::delete_group(uuid).await;
                    settle_mutation(
                        "Delete group",
                        Some(format!("\"{}\" was deleted", name)),
                        result,
                        || refresh.run(()),
                        |n| notifications.notify(n),
                    );
                }
                PendingAction::LeaveGroup { uuid, name, username } => {
                    let result = service::remove_member(uuid, &username).await;
                    settle_mutation(
                        "Leave group",
                        Some(format!("You left \"{}\"", name)),
                        result,
                        || refresh.run(()),
                        |n| notifications.notify(n),
                    );
                }
            }
        });
    });
    let on_cancel = Callback::new(move |_| pending_action.set(None));

    let cycle_rows = cycle.clone();

    view! {
        <div class="min-h-screen bg-theme-primary">
            <NotificationsContainer notifications=notifications.notifications() />

            // Header
            <header class="sticky top-0 z-40 bg-theme-primary/80 backdrop-blur-md border-b border-theme">
                <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        // Logo
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <Icon name=icons::USERS class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"Groupshare"</span>
                        </A>

                        <div class="flex items-center gap-4">
                            // Who the service thinks we are
                            {move || match identity.get() {
                                IdentityState::Known(user) => view! {
                                    <span class="text-sm text-theme-secondary">{user.username}</span>
                                }.into_any(),
                                IdentityState::Anonymous => view! {
                                    <span class="text-sm text-theme-tertiary">"Not signed in"</span>
                                }.into_any(),
                                IdentityState::Loading => view! {
                                    <span class="text-sm text-theme-tertiary"></span>
                                }.into_any(),
                            }}

                            // Theme toggle
                            <button
                                class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
                                on:click=move |_| theme.toggle()
                                title="Toggle theme"
                            >
                                {move || {
                                    if theme.is_dark.get() {
                                        view! { <Icon name=icons::SUN class="w-5 h-5" /> }.into_any()
                                    } else {
                                        view! { <Icon name=icons::MOON class="w-5 h-5" /> }.into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </header>

            // Main content
            <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                // Page title and actions
                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-8">
                    <div>
                        <h1 class="text-2xl font-bold text-theme-primary">"My Groups"</h1>
                        <p class="text-sm text-theme-secondary mt-1">
                            "Groups you own or belong to, and the lists shared with them"
                        </p>
                    </div>
                    <button
                        class="px-4 py-2 text-sm font-medium text-white bg-accent-primary
                               hover:bg-accent-primary-hover rounded-lg transition-colors flex items-center gap-2"
                        on:click=move |_| show_new_group.set(true)
                    >
                        <Icon name=icons::PLUS class="w-4 h-4" />
                        "New Group"
                    </button>
                </div>

                // Collection fetch failure: an explicit error banner, visually
                // distinct from the empty state below.
                {move || {
                    load_error.get().map(|err| view! {
                        <div class="mb-6 p-4 bg-red-100 dark:bg-red-900/30 border border-red-300 dark:border-red-700 rounded-lg">
                            <p class="text-sm text-red-700 dark:text-red-300">
                                "Could not load your groups: " {err}
                            </p>
                        </div>
                    })
                }}

                // Loading state
                {move || loading.get().then(|| view! { <LoadingSpinner /> })}

                // Empty state or the groups table
                {move || {
                    if loading.get() || load_error.get().is_some() {
                        return None;
                    }
                    let list = groups.get();
                    if list.is_empty() {
                        Some(view! {
                            <div id="no-groups" class="text-center py-20">
                                <div class="w-20 h-20 mx-auto mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                                    <Icon name=icons::USERS class="w-10 h-10 text-theme-tertiary" />
                                </div>
                                <h3 class="text-lg font-medium text-theme-primary mb-2">"No groups yet"</h3>
                                <p class="text-theme-secondary mb-6">
                                    "Create a group to start sharing lists with other users"
                                </p>
                            </div>
                        }.into_any())
                    } else {
                        let cycle = cycle_rows.clone();
                        let token = row_token.get();
                        Some(view! {
                            <div class="overflow-x-auto bg-theme-secondary border border-theme rounded-xl">
                                <table class="w-full text-left">
                                    <thead>
                                        <tr class="border-b border-theme text-xs uppercase text-theme-tertiary">
                                            <th class="px-4 py-3">"Name"</th>
                                            <th class="px-4 py-3">"Description"</th>
                                            <th class="px-4 py-3">"Details"</th>
                                            <th class="px-4 py-3"></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.into_iter().map(|group| {
                                            view! {
                                                <GroupRow
                                                    group=group
                                                    token=token
                                                    cycle=cycle.clone()
                                                    on_action=on_action
                                                    on_add_member=on_add_member
                                                    on_add_list=on_add_list
                                                    on_remove_member=on_remove_member
                                                    on_unshare=on_unshare
                                                />
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_any())
                    }
                }}
            </main>

            // New group modal
            {move || {
                if show_new_group.get() {
                    Some(view! {
                        <NewGroupModal
                            on_close=Callback::new(move |_| show_new_group.set(false))
                            refresh=refresh
                            notifications=notifications
                        />
                    })
                } else {
                    None
                }
            }}

            // Add member modal
            {move || {
                add_member_target.get().map(|group| view! {
                    <AddMemberModal
                        group=group
                        on_close=Callback::new(move |_| add_member_target.set(None))
                        refresh=refresh
                        notifications=notifications
                    />
                })
            }}

            // Add list modal
            {move || {
                add_list_target.get().map(|group| view! {
                    <AddListModal
                        group=group
                        on_close=Callback::new(move |_| add_list_target.set(None))
                        refresh=refresh
                        notifications=notifications
                    />
                })
            }}

            // Delete/Leave confirmation
            <ConfirmDialog
                request=confirm_request
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </div>
    }
}

/// One table row per group, plus its expandable detail panel.
///
/// The row header renders synchronously with a placeholder action control
/// and upgrades in place: once identity resolves the control becomes
/// "Delete" or "Leave", and once detail resolves the details toggle appears.
#[component]
fn GroupRow(
    group: Group,
    /// Token of the refresh cycle this row belongs to
    token: CycleToken,
    cycle: RefreshCycle,
    on_action: Callback<PendingAction>,
    on_add_member: Callback<Group>,
    on_add_list: Callback<Group>,
    on_remove_member: Callback<(Group, String)>,
    on_unshare: Callback<(Group, String)>,
) -> impl IntoView {
    let identity = use_identity_context().state;

    // Detail state for this row. Stays None forever if the fetch fails; the
    // row header remains usable either way.
    let detail = RwSignal::new(None::<GroupDetail>);
    let expanded = RwSignal::new(false);

    // Fetch detail immediately on row creation, concurrently with sibling
    // rows and in no particular order. The cycle token keeps a late
    // resolution from touching a table that has since been rebuilt.
    {
        let cycle = cycle.clone();
        let uuid = group.uuid;
        Effect::new(move |_| {
            let cycle = cycle.clone();
            spawn_local(async move {
                if let Ok(d) = service::fetch_group_detail(uuid).await
                    && cycle.is_current(token)
                {
                    detail.set(Some(d));
                }
            });
        });
    }

    // Capabilities recompose whenever identity resolves; until then the row
    // shows placeholder state.
    let caps = {
        let group = group.clone();
        Memo::new(move |_| {
            let viewer = match identity.get() {
                IdentityState::Known(id) => Some(id),
                _ => None,
            };
            RowCapabilities::compose(viewer.as_ref(), &group)
        })
    };

    let group_name = group.name.clone();
    let group_description = group.description.clone();
    let group_action = group.clone();
    let group_panel = group.clone();

    view! {
        <tr class="border-b border-theme hover:bg-theme-secondary/50 transition-colors">
            <td class="px-4 py-3 font-medium text-theme-primary">{group_name}</td>
            <td class="px-4 py-3 text-theme-secondary">{group_description}</td>

            // Details toggle, present only once detail resolved
            <td class="px-4 py-3 details">
                {move || match detail.get() {
                    None => view! {
                        <span class="text-sm text-theme-tertiary"></span>
                    }.into_any(),
                    Some(d) => view! {
                        <button
                            class="flex items-center gap-1 text-sm text-theme-secondary hover:text-theme-primary transition-colors"
                            on:click=move |_| expanded.update(|v| *v = !*v)
                        >
                            {d.summary()}
                            {move || {
                                if expanded.get() {
                                    view! { <Icon name=icons::CHEVRON_DOWN class="w-4 h-4" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4" /> }.into_any()
                                }
                            }}
                        </button>
                    }.into_any(),
                }}
            </td>

            // The row's single action control
            <td class="px-4 py-3 text-right">
                {move || {
                    let group = group_action.clone();
                    match caps.get().action {
                        None => view! {
                            <button class="btn-secondary opacity-50" disabled=true>"…"</button>
                        }.into_any(),
                        Some(action) => view! {
                            <button
                                class=if action == RowAction::Delete { "btn-danger" } else { "btn-secondary" }
                                on:click=move |_| {
                                    if let IdentityState::Known(viewer) = identity.get_untracked() {
                                        on_action.run(PendingAction::for_row(action, &group, &viewer));
                                    }
                                }
                            >
                                {action.label()}
                            </button>
                        }.into_any(),
                    }
                }}
            </td>
        </tr>

        // Nested detail panel. Expanding and collapsing is purely visual;
        // nothing is refetched.
        {move || {
            if !expanded.get() {
                return None;
            }
            detail.get().map(|d| {
                let caps_now = caps.get();
                let viewer = match identity.get() {
                    IdentityState::Known(id) => Some(id),
                    _ => None,
                };
                let owner = group_panel.owner.clone();
                let group_add_member = group_panel.clone();
                let group_add_list = group_panel.clone();
                let group_remove = group_panel.clone();
                let group_unshare = group_panel.clone();

                view! {
                    <tr class="bg-theme-secondary/30 border-b border-theme">
                        <td colspan="4" class="px-6 py-4">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                // Members
                                <div class="members">
                                    <h4 class="text-sm font-semibold text-theme-primary mb-2">"Members"</h4>
                                    <ul class="space-y-1">
                                        {d.members.iter().map(|member| {
                                            let markers = member_markers(member, &owner, viewer.as_ref());
                                            let username = member.username.clone();
                                            view! {
                                                <MemberItem
                                                    username=username
                                                    markers=markers
                                                    removable=can_remove_member(caps_now, markers)
                                                    group=group_remove.clone()
                                                    on_remove=on_remove_member
                                                />
                                            }
                                        }).collect_view()}
                                    </ul>
                                    {caps_now.can_manage.then(|| {
                                        let group = group_add_member.clone();
                                        view! {
                                            <button
                                                class="btn-secondary mt-3 flex items-center gap-2"
                                                on:click=move |_| on_add_member.run(group.clone())
                                            >
                                                <Icon name=icons::PLUS class="w-4 h-4" />
                                                "Add member"
                                            </button>
                                        }
                                    })}
                                </div>

                                // Lists
                                <div class="lists">
                                    <h4 class="text-sm font-semibold text-theme-primary mb-2">"Lists"</h4>
                                    <ul class="space-y-1">
                                        {d.lists.iter().map(|list| {
                                            view! {
                                                <ListItem
                                                    list=list.clone()
                                                    group=group_unshare.clone()
                                                    on_unshare=on_unshare
                                                />
                                            }
                                        }).collect_view()}
                                    </ul>
                                    {caps_now.can_manage.then(|| {
                                        let group = group_add_list.clone();
                                        view! {
                                            <button
                                                class="btn-secondary mt-3 flex items-center gap-2"
                                                on:click=move |_| on_add_list.run(group.clone())
                                            >
                                                <Icon name=icons::PLUS class="w-4 h-4" />
                                                "Add list"
                                            </button>
                                        }
                                    })}
                                </div>
                            </div>
                        </td>
                    </tr>
                }
            })
        }}
    }
}

/// One member row inside a group's detail panel.
#[component]
fn MemberItem(
    username: String,
    markers: MemberMarkers,
    /// Whether the viewer may remove this member (owner only, never the
    /// owner's own row)
    removable: bool,
    group: Group,
    on_remove: Callback<(Group, String)>,
) -> impl IntoView {
    let username_remove = username.clone();

    view! {
        <li class="flex items-center gap-2 text-sm text-theme-primary">
            {if markers.is_you {
                view! { <em>"you"</em> }.into_any()
            } else {
                view! { <span>{username.clone()}</span> }.into_any()
            }}
            {markers.is_owner.then(|| view! {
                <span class="text-theme-tertiary">" (owner)"</span>
            })}
            {removable.then(|| {
                let group = group.clone();
                let username = username_remove.clone();
                view! {
                    <button
                        class="ml-auto p-1 text-theme-tertiary hover:text-red-500 transition-colors"
                        title="Remove member"
                        on:click=move |_| on_remove.run((group.clone(), username.clone()))
                    >
                        <Icon name=icons::X class="w-4 h-4" />
                    </button>
                }
            })}
        </li>
    }
}

/// One shared-list row inside a group's detail panel.
#[component]
fn ListItem(
    list: ListRef,
    group: Group,
    on_unshare: Callback<(Group, String)>,
) -> impl IntoView {
    let label = list.label();
    let href = format!("/lists/{}", list.name);
    let list_name = list.name.clone();

    view! {
        <li class="flex items-center gap-2 text-sm">
            <a
                href=href
                class="text-accent-primary hover:underline flex items-center gap-1"
            >
                {label}
                <Icon name=icons::EXTERNAL_LINK class="w-3 h-3" />
            </a>
            {can_unshare(&list).then(|| {
                let group = group.clone();
                let name = list_name.clone();
                view! {
                    <button
                        class="ml-auto p-1 text-theme-tertiary hover:text-red-500 transition-colors"
                        title="Unshare list"
                        on:click=move |_| on_unshare.run((group.clone(), name.clone()))
                    >
                        <Icon name=icons::X class="w-4 h-4" />
                    </button>
                }
            })}
        </li>
    }
}

/// Create-group dialog. Name and description are both required; the group
/// appears in the table via the full refresh that follows creation.
#[component]
fn NewGroupModal(
    on_close: Callback<()>,
    refresh: Callback<()>,
    notifications: NotificationManager,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<String>);
    let creating = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        let description_value = description.get().trim().to_string();

        if let Err(err) = validate_group_name(&name_value)
            .and_then(|_| validate_group_description(&description_value))
        {
            local_error.set(Some(err.to_string()));
            return;
        }

        creating.set(true);
        spawn_local(async move {
            let result = service::create_group(&name_value, &description_value).await;
            creating.set(false);
            let succeeded = result.is_ok();
            settle_mutation(
                "Create group",
                Some(format!("\"{}\" was created", name_value)),
                result,
                || refresh.run(()),
                |n| notifications.notify(n),
            );
            if succeeded {
                on_close.run(());
            }
        });
    };

    view! {
        <BaseModal
            title="New Group Details".to_string()
            is_open=Signal::stored(true)
            on_close=on_close
            max_width="max-w-md"
        >
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-theme-secondary mb-1">"Name"</label>
                    <input
                        type="text"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            local_error.set(None);
                        }
                        autofocus
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-theme-secondary mb-1">"Description"</label>
                    <textarea
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent"
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            description.set(event_target_value(&ev));
                            local_error.set(None);
                        }
                    ></textarea>
                </div>

                <ErrorMessage error=local_error />

                <div class="flex items-center justify-end gap-2 divider-top pt-4">
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| on_close.run(())
                        disabled=move || creating.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn-primary flex items-center gap-2"
                        disabled=move || creating.get()
                    >
                        {move || creating.get().then(|| view! { <InlineSpinner /> })}
                        {move || if creating.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </BaseModal>
    }
}

/// Name-entry dialog for adding a member to a group the viewer owns.
#[component]
fn AddMemberModal(
    group: Group,
    on_close: Callback<()>,
    refresh: Callback<()>,
    notifications: NotificationManager,
) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<String>);
    let adding = RwSignal::new(false);

    let title = format!("Add a member to \"{}\"", group.name);
    let uuid = group.uuid;
    let group_name = group.name.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = username.get().trim().to_string();
        if let Err(err) = validate_member_name(&value) {
            local_error.set(Some(err.to_string()));
            return;
        }

        adding.set(true);
        let group_name = group_name.clone();
        spawn_local(async move {
            let result = service::add_member(uuid, &value).await;
            adding.set(false);
            let succeeded = result.is_ok();
            settle_mutation(
                "Add member",
                Some(format!("Added {} to \"{}\"", value, group_name)),
                result,
                || refresh.run(()),
                |n| notifications.notify(n),
            );
            if succeeded {
                on_close.run(());
            }
        });
    };

    view! {
        <BaseModal
            title=title
            is_open=Signal::stored(true)
            on_close=on_close
            max_width="max-w-md"
        >
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-theme-secondary mb-1">"Username"</label>
                    <input
                        type="text"
                        class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            local_error.set(None);
                        }
                        autofocus
                    />
                </div>

                <ErrorMessage error=local_error />

                <div class="flex items-center justify-end gap-2 divider-top pt-4">
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| on_close.run(())
                        disabled=move || adding.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn-primary flex items-center gap-2"
                        disabled=move || adding.get()
                    >
                        {move || adding.get().then(|| view! { <InlineSpinner /> })}
                        {move || if adding.get() { "Adding..." } else { "Add member" }}
                    </button>
                </div>
            </form>
        </BaseModal>
    }
}

/// Share-list dialog: a selector over the viewer's list catalog, restricted
/// to lists the viewer is authorized to share.
#[component]
fn AddListModal(
    group: Group,
    on_close: Callback<()>,
    refresh: Callback<()>,
    notifications: NotificationManager,
) -> impl IntoView {
    let catalog = RwSignal::new(Vec::<ListRef>::new());
    let catalog_loading = RwSignal::new(true);
    let selected = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<String>);
    let sharing = RwSignal::new(false);

    let title = format!("Share a list with \"{}\"", group.name);
    let uuid = group.uuid;
    let group_name = group.name.clone();

    // Populate the selector from the list catalog, keeping only entries the
    // viewer may share.
    Effect::new(move |_| {
        spawn_local(async move {
            match service::fetch_list_catalog().await {
                Ok(lists) => {
                    let authorized: Vec<ListRef> =
                        lists.into_iter().filter(|l| l.authorized).collect();
                    if let Some(first) = authorized.first() {
                        selected.set(first.name.clone());
                    }
                    catalog.set(authorized);
                }
                Err(err) => local_error.set(Some(err.to_string())),
            }
            catalog_loading.set(false);
        });
    });

    let no_lists = Signal::derive(move || {
        if !catalog_loading.get() && catalog.get().is_empty() && local_error.get().is_none() {
            Some("You have no lists available to share".to_string())
        } else {
            None
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = selected.get().trim().to_string();
        if name.is_empty() {
            local_error.set(Some("Choose a list to share".to_string()));
            return;
        }

        sharing.set(true);
        let group_name = group_name.clone();
        spawn_local(async move {
            let result = service::share_list(uuid, &name).await;
            sharing.set(false);
            let succeeded = result.is_ok();
            settle_mutation(
                "Add list",
                Some(format!("Shared \"{}\" with \"{}\"", name, group_name)),
                result,
                || refresh.run(()),
                |n| notifications.notify(n),
            );
            if succeeded {
                on_close.run(());
            }
        });
    };

    view! {
        <BaseModal
            title=title
            is_open=Signal::stored(true)
            on_close=on_close
            max_width="max-w-md"
        >
            <form class="space-y-4" on:submit=on_submit>
                {move || catalog_loading.get().then(|| view! {
                    <div class="flex items-center gap-2 text-sm text-theme-secondary">
                        <InlineSpinner />
                        "Loading your lists..."
                    </div>
                })}

                {move || {
                    (!catalog_loading.get() && !catalog.get().is_empty()).then(|| view! {
                        <div>
                            <label class="block text-sm font-medium text-theme-secondary mb-1">"List"</label>
                            <select
                                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                                       text-theme-primary
                                       focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent"
                                on:change=move |ev| selected.set(event_target_value(&ev))
                            >
                                {catalog.get().into_iter().map(|list| {
                                    let name = list.name.clone();
                                    view! {
                                        <option value=name>{list.label()}</option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                    })
                }}

                <InfoMessage message=no_lists />
                <ErrorMessage error=local_error />

                <div class="flex items-center justify-end gap-2 divider-top pt-4">
                    <button
                        type="button"
                        class="btn-secondary"
                        on:click=move |_| on_close.run(())
                        disabled=move || sharing.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn-primary flex items-center gap-2"
                        disabled=move || sharing.get() || catalog.get().is_empty()
                    >
                        {move || sharing.get().then(|| view! { <InlineSpinner /> })}
                        {move || if sharing.get() { "Sharing..." } else { "Add list" }}
                    </button>
                </div>
            </form>
        </BaseModal>
    }
}
