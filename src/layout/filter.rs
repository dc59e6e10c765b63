//! Visibility filtering by role category and permission grants

use crate::role::RoleContext;
use crate::widget::WidgetDescriptor;

/// Select the widgets the viewer is allowed to see.
///
/// A widget passes when its allowed role categories contain the viewer's
/// category, and it is either ungated or the viewer holds at least one of
/// its required permissions. The permission gate is deliberately any-of:
/// listing several permissions widens visibility rather than narrowing it.
///
/// Catalog order is preserved and descriptors are borrowed, not cloned.
pub fn filter_widgets<'a>(
    catalog: &'a [WidgetDescriptor],
    role: &RoleContext,
) -> Vec<&'a WidgetDescriptor> {
    catalog
        .iter()
        .filter(|widget| is_visible(widget, role))
        .collect()
}

fn is_visible(widget: &WidgetDescriptor, role: &RoleContext) -> bool {
    if !widget.allowed_roles.contains(&role.category) {
        return false;
    }
    widget.required_permissions.is_empty()
        || widget
            .required_permissions
            .iter()
            .any(|permission| role.permissions.contains(permission))
}
