//! Widget tree helpers.

use crate::types::{PageSchema, WidgetSchema};

/// Depth-first search for the widget with `id`.
pub fn find_widget<'a>(widgets: &'a [WidgetSchema], id: &str) -> Option<&'a WidgetSchema> {
    for widget in widgets {
        if widget.id == id {
            return Some(widget);
        }
        if let Some(found) = find_widget(&widget.children, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable variant of [`find_widget`].
pub fn find_widget_mut<'a>(widgets: &'a mut [WidgetSchema], id: &str) -> Option<&'a mut WidgetSchema> {
    for widget in widgets {
        if widget.id == id {
            return Some(widget);
        }
        if let Some(found) = find_widget_mut(&mut widget.children, id) {
            return Some(found);
        }
    }
    None
}

/// Visit every widget depth-first, pre-order, with its depth (roots are 0).
pub fn walk_widgets<'a>(widgets: &'a [WidgetSchema], visit: &mut impl FnMut(&'a WidgetSchema, usize)) {
    walk_at(widgets, 0, visit);
}

fn walk_at<'a>(widgets: &'a [WidgetSchema], depth: usize, visit: &mut impl FnMut(&'a WidgetSchema, usize)) {
    for widget in widgets {
        visit(widget, depth);
        walk_at(&widget.children, depth + 1, visit);
    }
}

/// Number of widgets in the whole tree.
pub fn widget_count(widgets: &[WidgetSchema]) -> usize {
    widgets.iter().map(|w| 1 + widget_count(&w.children)).sum()
}

impl PageSchema {
    #[inline]
    pub fn find_widget(&self, id: &str) -> Option<&WidgetSchema> {
        find_widget(&self.widgets, id)
    }

    #[inline]
    pub fn widget_count(&self) -> usize {
        widget_count(&self.widgets)
    }
}
