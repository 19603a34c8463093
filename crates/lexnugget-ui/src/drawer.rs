//! Detail drawer selection state and the containing list's refresh key.

use lexnugget_core::Nugget;

use crate::bookmark::BookmarkToggle;

/// Re-render key for a list whose cards embed bookmark state.
///
/// Bumped after a successful toggle instead of re-fetching the page, so
/// sibling cards keep their possibly-stale bookmark flags until the next
/// navigation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RefreshKey(u64);

impl RefreshKey {
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The slide-out detail drawer. Holds the selected nugget and its
/// bookmark toggle; the selection is kept on close so the record stays
/// rendered through the slide-out transition.
#[derive(Debug, Default)]
pub struct DrawerState {
    open: bool,
    selected: Option<(Nugget, BookmarkToggle)>,
}

impl DrawerState {
    pub fn closed() -> Self {
        Self::default()
    }

    /// Select a nugget and open the drawer. The toggle is seeded from
    /// the record's bookmark flag; any toggle still in flight for a
    /// previously selected record is abandoned with it.
    pub fn open(&mut self, nugget: Nugget) {
        let toggle = BookmarkToggle::new(nugget.is_bookmarked);
        self.selected = Some((nugget, toggle));
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&Nugget> {
        self.selected.as_ref().map(|(n, _)| n)
    }

    /// The selected nugget together with its bookmark toggle, for
    /// driving a toggle from the drawer's button.
    pub fn selection_mut(&mut self) -> Option<(&Nugget, &mut BookmarkToggle)> {
        self.selected.as_mut().map(|(n, t)| (&*n, t))
    }
}
